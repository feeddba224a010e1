pub mod catalog;
pub mod generator;
pub mod pool;

pub use catalog::{by_difficulty, find_challenge, Challenge, Difficulty, CATALOG};
pub use generator::{
    candidate_challenges, generate_daily_challenges, GeneratedChallengeSet, MAX_DAILY_CHALLENGES,
};
pub use pool::{filter_pool, find_pool_challenge, PoolCategory, PoolChallenge, PoolFilter, ProofKind, POOL};
