pub mod answers;
pub mod prompt;
pub mod questions;

pub use answers::{load_answers, parse_answers, Answers, AnswersFormat};
pub use prompt::{ask_interactive, ask_questions};
pub use questions::{options_for, question_for, Field, Question, DAILY_QUESTIONS};
