use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

use crate::{
    projection::{horizon_years, project_condition},
    region::RegionCondition,
    snapshot::{OutlookSnapshot, SnapshotWriter},
};

pub struct EngineSettings {
    pub scenario_name: String,
    pub snapshot_interval_years: u32,
    pub snapshot_dir: PathBuf,
}

pub struct EngineBuilder {
    settings: EngineSettings,
}

impl EngineBuilder {
    pub fn new(settings: EngineSettings) -> Self {
        Self { settings }
    }

    pub fn build(self) -> Engine {
        Engine {
            snapshot_writer: SnapshotWriter::new(
                &self.settings.snapshot_dir,
                self.settings.snapshot_interval_years,
            ),
            settings: self.settings,
            written: Vec::new(),
        }
    }
}

/// Steps a set of baseline conditions forward one year at a time.
pub struct Engine {
    snapshot_writer: SnapshotWriter,
    settings: EngineSettings,
    written: Vec<PathBuf>,
}

impl Engine {
    /// Projects every condition `years` ahead and returns the final conditions.
    ///
    /// Each step projects from the baseline, so the result equals
    /// `project_condition(base, years)` exactly.
    pub fn run(
        &mut self,
        conditions: &[RegionCondition],
        years: u32,
    ) -> Result<Vec<RegionCondition>> {
        let horizon = horizon_years(years)?;
        let mut current = conditions.to_vec();
        for offset in 1..=horizon {
            current = conditions
                .iter()
                .map(|cond| project_condition(cond, offset))
                .collect();
            let snapshot =
                OutlookSnapshot::capture(&self.settings.scenario_name, offset as u32, &current);
            if let Some(path) = self.snapshot_writer.maybe_write(&snapshot)? {
                self.written.push(path);
            }
        }
        info!(
            scenario = %self.settings.scenario_name,
            years,
            regions = current.len(),
            snapshots = self.written.len(),
            "outlook completed"
        );
        Ok(current)
    }

    /// Paths of every snapshot written so far.
    pub fn snapshots_written(&self) -> &[PathBuf] {
        &self.written
    }
}
