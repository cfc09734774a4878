//! Periodic JSON snapshots of a projected set of regions

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    geometry::area,
    metrics::{emissions_per_capita, emissions_per_square_km, population_density},
    ranking::densest,
    region::{RegionCondition, Terrain},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionSnapshot {
    pub name: String,
    pub terrain: Terrain,
    pub year: i32,
    pub pop: f64,
    pub ghg_rate: f64,
    pub area_km2: f64,
    pub density: f64,
    pub emissions_per_capita: Option<f64>,
    pub emissions_per_square_km: Option<f64>,
}

impl RegionSnapshot {
    pub fn capture(cond: &RegionCondition) -> Self {
        let per_capita = emissions_per_capita(cond)
            .map_err(|err| debug!(region = %cond.name(), error = %err, "per-capita metric skipped"))
            .ok();
        let per_km2 = emissions_per_square_km(cond)
            .map_err(|err| debug!(region = %cond.name(), error = %err, "per-area metric skipped"))
            .ok();
        Self {
            name: cond.region.name.clone(),
            terrain: cond.region.terrain,
            year: cond.year,
            pop: cond.pop,
            ghg_rate: cond.ghg_rate,
            area_km2: area(&cond.region.rect),
            density: population_density(cond),
            emissions_per_capita: per_capita,
            emissions_per_square_km: per_km2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlookSnapshot {
    pub scenario: String,
    pub year_offset: u32,
    pub total_population: f64,
    pub total_ghg_rate: f64,
    pub densest: Option<String>,
    pub regions: Vec<RegionSnapshot>,
}

impl OutlookSnapshot {
    pub fn capture(scenario: &str, year_offset: u32, conditions: &[RegionCondition]) -> Self {
        Self {
            scenario: scenario.to_string(),
            year_offset,
            total_population: conditions.iter().map(|c| c.pop).sum(),
            total_ghg_rate: conditions.iter().map(|c| c.ghg_rate).sum(),
            densest: densest(conditions).ok().map(str::to_string),
            regions: conditions.iter().map(RegionSnapshot::capture).collect(),
        }
    }
}

/// Writes a snapshot every `interval_years`; an interval of 0 disables writing.
pub struct SnapshotWriter {
    output_dir: PathBuf,
    interval_years: u32,
}

impl SnapshotWriter {
    pub fn new<P: AsRef<Path>>(output_dir: P, interval_years: u32) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            interval_years,
        }
    }

    pub fn should_write(&self, year_offset: u32) -> bool {
        self.interval_years != 0 && year_offset % self.interval_years == 0
    }

    pub fn maybe_write(&self, snapshot: &OutlookSnapshot) -> Result<Option<PathBuf>> {
        if !self.should_write(snapshot.year_offset) {
            return Ok(None);
        }

        let dir = self.output_dir.join(&snapshot.scenario);
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create snapshot dir {}", dir.display()))?;
        let path = dir.join(format!("year_{:04}.json", snapshot.year_offset));
        let json = serde_json::to_string_pretty(snapshot)?;
        fs::write(&path, json)
            .with_context(|| format!("Failed to write snapshot {}", path.display()))?;
        debug!(path = %path.display(), year_offset = snapshot.year_offset, "snapshot written");
        Ok(Some(path))
    }
}
