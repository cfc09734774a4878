use std::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::GhgError;

/// Latitude/longitude bounding box in degrees.
///
/// `west_long` may exceed `east_long` for boxes that wrap the antimeridian.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlobeRect {
    pub lo_lat: f64,
    pub hi_lat: f64,
    pub west_long: f64,
    pub east_long: f64,
}

impl GlobeRect {
    pub fn new(lo_lat: f64, hi_lat: f64, west_long: f64, east_long: f64) -> Self {
        Self {
            lo_lat,
            hi_lat,
            west_long,
            east_long,
        }
    }
}

/// Terrain classification driving the growth model.
///
/// Labels other than `ocean`, `mountains` and `forest` parse as [`Terrain::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Terrain {
    Ocean,
    Mountains,
    Forest,
    #[default]
    #[serde(other)]
    Other,
}

impl Terrain {
    pub const ALL: [Terrain; 4] = [
        Terrain::Ocean,
        Terrain::Mountains,
        Terrain::Forest,
        Terrain::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Terrain::Ocean => "ocean",
            Terrain::Mountains => "mountains",
            Terrain::Forest => "forest",
            Terrain::Other => "other",
        }
    }
}

impl FromStr for Terrain {
    type Err = Infallible;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        Ok(match label {
            "ocean" => Terrain::Ocean,
            "mountains" => Terrain::Mountains,
            "forest" => Terrain::Forest,
            _ => Terrain::Other,
        })
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub rect: GlobeRect,
    pub name: String,
    pub terrain: Terrain,
}

impl Region {
    pub fn new(rect: GlobeRect, name: impl Into<String>, terrain: Terrain) -> Self {
        Self {
            rect,
            name: name.into(),
            terrain,
        }
    }
}

/// A region's population and emissions in a given year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionCondition {
    pub region: Region,
    pub year: i32,
    /// Number of people.
    pub pop: f64,
    /// Tons of CO2-equivalent emitted per year.
    pub ghg_rate: f64,
}

impl RegionCondition {
    pub fn new(region: Region, year: i32, pop: f64, ghg_rate: f64) -> Self {
        Self {
            region,
            year,
            pop,
            ghg_rate,
        }
    }

    pub fn name(&self) -> &str {
        &self.region.name
    }

    /// Checks that population and emissions are finite and non-negative.
    pub fn validate(&self) -> Result<(), GhgError> {
        let checks = [("pop", self.pop), ("ghg_rate", self.ghg_rate)];
        for (field, value) in checks {
            if !value.is_finite() || value < 0.0 {
                return Err(GhgError::InvalidCondition {
                    region: self.region.name.clone(),
                    reason: format!("{field} must be a non-negative number, got {value}"),
                });
            }
        }
        Ok(())
    }
}
