//! Daily wellness questionnaire scoring and challenge generation.
//!
//! The engine is two pure functions over static tables:
//! [`scoring::calculate_scores`] turns answers into per-category points and
//! [`challenges::generate_daily_challenges`] picks up to three challenges.
//! The rest of the crate is the command-line front end and a thin client for
//! the backend that stores points and streaks.

pub mod api;
pub mod challenges;
pub mod config;
pub mod credentials;
pub mod output;
pub mod progress;
pub mod questionnaire;
pub mod scoring;
pub mod session;
pub mod telemetry;

pub use challenges::{generate_daily_challenges, GeneratedChallengeSet};
pub use questionnaire::Answers;
pub use scoring::{calculate_scores, ScoreResult, ScoringConfig};
