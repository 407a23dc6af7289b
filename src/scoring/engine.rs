use super::archetype::{Archetype, ScoreBoard};
use super::questions::{CHOICE_QUESTIONS, QUESTION_COUNT, SCALE_QUESTIONS};
use crate::form::Submission;

/// How a single question classified during a scoring pass.
#[derive(Debug, Clone)]
pub struct QuestionOutcome {
    pub question: &'static str,
    /// Raw answer as submitted, None if the field was absent.
    pub raw: Option<String>,
    /// Archetype the answer classified to, None if it was skipped.
    pub archetype: Option<Archetype>,
}

#[derive(Debug, Clone)]
pub struct ScoreResult {
    pub winner: Archetype,
    pub board: ScoreBoard,
    pub breakdown: Vec<QuestionOutcome>,
}

/// Best-effort leading-integer parse: optional whitespace and sign, then
/// digits. A value with no numeric prefix fails; trailing garbage after
/// the digits is ignored.
fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }

    let value = digits.parse::<i64>().ok()?;
    Some(if negative { -value } else { value })
}

/// Bucket a 1-10 scale answer into an archetype. The thresholds are total
/// over all integers, so out-of-range values still land in a bucket; only
/// an unparseable answer is skipped.
pub fn classify_scale(raw: &str) -> Option<Archetype> {
    let v = parse_leading_int(raw)?;
    Some(if v <= 3 {
        Archetype::Coaster
    } else if v <= 5 {
        Archetype::Seeker
    } else if v <= 7 {
        Archetype::Explorer
    } else {
        Archetype::Integrator
    })
}

/// Map a multiple-choice letter to its archetype. Case-sensitive and
/// exact: anything but a single uppercase A-D is skipped.
pub fn classify_choice(raw: &str) -> Option<Archetype> {
    match raw {
        "A" => Some(Archetype::Coaster),
        "B" => Some(Archetype::Seeker),
        "C" => Some(Archetype::Explorer),
        "D" => Some(Archetype::Integrator),
        _ => None,
    }
}

/// Score a submission: tally each question's archetype and resolve the
/// winner. Never fails; an answer that does not classify contributes
/// nothing to the board.
pub fn score(submission: &Submission) -> ScoreResult {
    let mut board = ScoreBoard::new();
    let mut breakdown = Vec::with_capacity(QUESTION_COUNT);

    for question in SCALE_QUESTIONS {
        let raw = submission.answer(question);
        let archetype = raw.and_then(classify_scale);
        if let Some(archetype) = archetype {
            board.record(archetype);
        }
        breakdown.push(QuestionOutcome {
            question,
            raw: raw.map(str::to_string),
            archetype,
        });
    }

    for question in CHOICE_QUESTIONS {
        let raw = submission.answer(question);
        let archetype = raw.and_then(classify_choice);
        if let Some(archetype) = archetype {
            board.record(archetype);
        }
        breakdown.push(QuestionOutcome {
            question,
            raw: raw.map(str::to_string),
            archetype,
        });
    }

    let winner = board.winner();
    ScoreResult {
        winner,
        board,
        breakdown,
    }
}
