pub mod archetype;
pub mod engine;
pub mod questions;

pub use archetype::{Archetype, ScoreBoard};
pub use engine::{classify_choice, classify_scale, score, QuestionOutcome, ScoreResult};
pub use questions::{kind_of, QuestionKind, CHOICE_QUESTIONS, QUESTION_COUNT, SCALE_QUESTIONS};
