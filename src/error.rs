use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GhgError {
    #[error("population of region '{region}' is 0")]
    ZeroPopulation { region: String },
    #[error("area of region '{region}' is 0")]
    ZeroArea { region: String },
    #[error("no regions to compare")]
    NoRegions,
    #[error("projection horizon of {years} years is too long")]
    HorizonTooLong { years: u32 },
    #[error("invalid condition for region '{region}': {reason}")]
    InvalidCondition { region: String, reason: String },
}
