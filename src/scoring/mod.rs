pub mod config;
pub mod engine;
pub mod validation;

pub use config::*;
pub use engine::{
    calculate_default_scores, calculate_scores, Category, CategoryScores, Contribution,
    ScoreResult,
};
pub use validation::validate_scoring;
