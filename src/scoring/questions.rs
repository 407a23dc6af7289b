/// The questionnaire's question ids, split by answer format. These sets
/// are fixed: together they partition q1..q15 with no overlap.
pub const SCALE_QUESTIONS: [&str; 4] = ["q1", "q5", "q11", "q15"];

pub const CHOICE_QUESTIONS: [&str; 11] = [
    "q2", "q3", "q4", "q6", "q7", "q8", "q9", "q10", "q12", "q13", "q14",
];

pub const QUESTION_COUNT: usize = SCALE_QUESTIONS.len() + CHOICE_QUESTIONS.len();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    /// Answered with an integer on a 1-10 scale, bucketed by range.
    Scale,
    /// Answered with a single letter A-D, mapped 1:1 to an archetype.
    Choice,
}

/// Look up which kind of question an id names, or None for ids outside
/// the questionnaire.
pub fn kind_of(question: &str) -> Option<QuestionKind> {
    if SCALE_QUESTIONS.contains(&question) {
        Some(QuestionKind::Scale)
    } else if CHOICE_QUESTIONS.contains(&question) {
        Some(QuestionKind::Choice)
    } else {
        None
    }
}
