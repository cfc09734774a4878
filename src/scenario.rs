use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

use crate::{
    region::{GlobeRect, Region, RegionCondition, Terrain},
    samples,
};

fn default_base_year() -> i32 {
    2025
}

fn default_snapshot_interval_years() -> u32 {
    5
}

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub description: Option<String>,
    #[serde(default = "default_base_year")]
    pub base_year: i32,
    #[serde(default)]
    pub projection_years: Option<u32>,
    #[serde(default = "default_snapshot_interval_years")]
    pub snapshot_interval_years: u32,
    pub regions: Vec<ScenarioRegion>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioRegion {
    pub name: String,
    #[serde(default)]
    pub terrain: Terrain,
    #[serde(default)]
    pub year: Option<i32>,
    pub pop: f64,
    pub ghg_rate: f64,
    pub rect: GlobeRect,
}

pub struct ScenarioLoader {
    base_dir: PathBuf,
}

impl ScenarioLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self, file: impl AsRef<Path>) -> Result<Scenario> {
        let path = self.base_dir.join(file);
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read scenario file {}", path.display()))?;
        let scenario: Scenario = serde_yaml::from_str(&data)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        info!(
            path = %path.display(),
            scenario = %scenario.name,
            regions = scenario.regions.len(),
            "scenario loaded"
        );
        Ok(scenario)
    }
}

impl Scenario {
    /// Scenario wrapping the built-in sample regions.
    pub fn from_samples() -> Self {
        let regions = samples::example_region_conditions()
            .into_iter()
            .map(|cond| ScenarioRegion {
                name: cond.region.name,
                terrain: cond.region.terrain,
                year: Some(cond.year),
                pop: cond.pop,
                ghg_rate: cond.ghg_rate,
                rect: cond.region.rect,
            })
            .collect();
        Self {
            name: "samples".into(),
            description: Some("Built-in sample regions".into()),
            base_year: default_base_year(),
            projection_years: None,
            snapshot_interval_years: default_snapshot_interval_years(),
            regions,
        }
    }

    pub fn build_conditions(&self) -> Result<Vec<RegionCondition>> {
        self.regions
            .iter()
            .map(|region| -> Result<RegionCondition> {
                let cond = RegionCondition::new(
                    Region::new(region.rect, region.name.clone(), region.terrain),
                    region.year.unwrap_or(self.base_year),
                    region.pop,
                    region.ghg_rate,
                );
                cond.validate()
                    .with_context(|| format!("Scenario '{}' has an invalid region", self.name))?;
                Ok(cond)
            })
            .collect()
    }

    pub fn projection_years(&self, override_years: Option<u32>) -> u32 {
        override_years.or(self.projection_years).unwrap_or(10)
    }
}
