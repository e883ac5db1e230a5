pub mod config;
pub mod engine;
pub mod validation;

pub use config::{ScoringConfig, Weights, DEFAULT_WEIGHTS};
pub use engine::{confidence, overall_score, MatchEngine};
pub use validation::validate_scoring;
