pub mod client;
pub mod types;

pub use client::{ApiClient, ApiError, USER_ID_HEADER};
pub use types::{
    BackendUser, DiaryEntry, DiaryMood, Goal, NewDiaryEntry, NewGoal, Quest, DEFAULT_GOAL_CATEGORY,
};
