pub mod engine;
pub mod error;
pub mod geometry;
pub mod metrics;
pub mod projection;
pub mod ranking;
pub mod region;
pub mod samples;
pub mod scenario;
pub mod snapshot;

pub use engine::{Engine, EngineBuilder, EngineSettings};
pub use error::GhgError;
pub use geometry::area;
pub use metrics::{emissions_per_capita, emissions_per_square_km, population_density};
pub use projection::{project_condition, project_condition_as, project_series};
pub use ranking::densest;
pub use region::{GlobeRect, Region, RegionCondition, Terrain};
pub use scenario::{Scenario, ScenarioLoader};
