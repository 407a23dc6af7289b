use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A submitted questionnaire: the identity fields the gate requires plus
/// the raw answer values, keyed by question id ("q1".."q15"). Read-only
/// to the scoring core; unknown fields are carried but never scored.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Submission {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(flatten)]
    pub answers: HashMap<String, String>,
}

impl Submission {
    /// Look up the raw answer for a question id, if the field was
    /// submitted at all.
    pub fn answer(&self, question: &str) -> Option<&str> {
        self.answers.get(question).map(String::as_str)
    }
}
