use crate::{error::GhgError, geometry::area, region::RegionCondition};

/// Name of the region with the greatest population density.
///
/// Every region must have a non-zero area. Only a strictly greater density
/// replaces the current leader, so the first of several equally dense
/// regions wins.
pub fn densest(conditions: &[RegionCondition]) -> Result<&str, GhgError> {
    let densities = conditions
        .iter()
        .map(checked_density)
        .collect::<Result<Vec<_>, _>>()?;
    let mut scan = conditions.iter().zip(densities);
    let (mut best, mut best_density) = scan.next().ok_or(GhgError::NoRegions)?;
    for (cond, density) in scan {
        if density > best_density {
            best = cond;
            best_density = density;
        }
    }
    Ok(best.name())
}

fn checked_density(cond: &RegionCondition) -> Result<f64, GhgError> {
    let km2 = area(&cond.region.rect);
    if km2 == 0.0 {
        return Err(GhgError::ZeroArea {
            region: cond.region.name.clone(),
        });
    }
    Ok(cond.pop / km2)
}
