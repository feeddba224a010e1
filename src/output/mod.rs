pub mod formatter;

pub use formatter::{
    format_catalog, format_challenges, format_pool, format_questions, format_scores,
    format_status, should_use_colors, format_quest, format_goals, format_diary,
};
