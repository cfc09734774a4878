//! Terrain-dependent compound growth of population and emissions.

use crate::{
    error::GhgError,
    region::{RegionCondition, Terrain},
};

impl Terrain {
    /// Annual growth rate applied to both population and emissions.
    pub fn growth_rate(self) -> f64 {
        match self {
            Terrain::Ocean => 0.01,
            Terrain::Mountains => 0.05,
            Terrain::Forest => -0.001,
            Terrain::Other => 0.003,
        }
    }
}

/// Projects `cond` by `years` (negative projects backwards) using its own terrain's rate.
pub fn project_condition(cond: &RegionCondition, years: i32) -> RegionCondition {
    project_condition_as(cond, cond.region.terrain, years)
}

/// Projects `cond` using the growth law of `terrain`, whatever the region's own terrain is.
///
/// The year saturates at the bounds of `i32`.
pub fn project_condition_as(
    cond: &RegionCondition,
    terrain: Terrain,
    years: i32,
) -> RegionCondition {
    let factor = (1.0 + terrain.growth_rate()).powf(f64::from(years));
    RegionCondition {
        region: cond.region.clone(),
        year: cond.year.saturating_add(years),
        pop: cond.pop * factor,
        ghg_rate: cond.ghg_rate * factor,
    }
}

/// The baseline followed by a projection every `step` years up to `years`.
///
/// Each entry is projected from the baseline rather than from its predecessor.
/// A `step` of 0 is treated as 1. Horizons beyond `i32::MAX` years are rejected.
pub fn project_series(
    cond: &RegionCondition,
    years: u32,
    step: u32,
) -> Result<Vec<RegionCondition>, GhgError> {
    let horizon = horizon_years(years)?;
    let step = i32::try_from(step.max(1)).unwrap_or(i32::MAX);
    Ok(std::iter::once(cond.clone())
        .chain(
            (step..=horizon)
                .step_by(step as usize)
                .map(|offset| project_condition(cond, offset)),
        )
        .collect())
}

/// Converts a forward horizon into the signed offset the growth law takes.
pub fn horizon_years(years: u32) -> Result<i32, GhgError> {
    i32::try_from(years).map_err(|_| GhgError::HorizonTooLong { years })
}
