use crate::{error::GhgError, geometry::area, region::RegionCondition};

/// Tons of CO2-equivalent emitted per person per year.
pub fn emissions_per_capita(cond: &RegionCondition) -> Result<f64, GhgError> {
    if cond.pop == 0.0 {
        return Err(GhgError::ZeroPopulation {
            region: cond.region.name.clone(),
        });
    }
    Ok(cond.ghg_rate / cond.pop)
}

/// Tons of CO2-equivalent emitted per square kilometer per year.
pub fn emissions_per_square_km(cond: &RegionCondition) -> Result<f64, GhgError> {
    let km2 = area(&cond.region.rect);
    if km2 == 0.0 {
        return Err(GhgError::ZeroArea {
            region: cond.region.name.clone(),
        });
    }
    Ok(cond.ghg_rate / km2)
}

/// People per square kilometer. Unchecked: a zero area gives an infinite or NaN density.
pub fn population_density(cond: &RegionCondition) -> f64 {
    cond.pop / area(&cond.region.rect)
}
