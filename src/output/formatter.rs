use std::io::IsTerminal;

use owo_colors::OwoColorize;

use crate::scoring::{Archetype, QuestionOutcome, ScoreResult};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format the winner headline
/// Format: "Your archetype: integrator"
pub fn format_winner(winner: Archetype, use_colors: bool) -> String {
    if use_colors {
        format!("Your archetype: {}", winner.name().bold())
    } else {
        format!("Your archetype: {}", winner)
    }
}

/// Format the final tally, one archetype per line in scan order, with the
/// winner marked. Count column is right-aligned, 2 chars wide (fits "15").
pub fn format_tally(result: &ScoreResult, use_colors: bool) -> String {
    result
        .board
        .iter()
        .map(|(archetype, count)| {
            let marker = if archetype == result.winner { "*" } else { " " };
            let count_padded = format!("{:>2}", count);
            if use_colors {
                if archetype == result.winner {
                    format!(
                        "{} {}  {}",
                        marker.bold(),
                        count_padded.bold(),
                        archetype.name().bold()
                    )
                } else {
                    format!("{} {}  {}", marker, count_padded.dimmed(), archetype)
                }
            } else {
                format!("{} {}  {}", marker, count_padded, archetype)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the per-question breakdown for verbose mode, one line per
/// question in scoring order. Unclassified answers show as "skipped".
pub fn format_breakdown(breakdown: &[QuestionOutcome], use_colors: bool) -> String {
    breakdown
        .iter()
        .map(|outcome| {
            let raw = outcome.raw.as_deref().unwrap_or("(blank)");
            match outcome.archetype {
                Some(archetype) => {
                    if use_colors {
                        format!("{:>3}: {:<8} -> {}", outcome.question, raw, archetype.cyan())
                    } else {
                        format!("{:>3}: {:<8} -> {}", outcome.question, raw, archetype)
                    }
                }
                None => {
                    if use_colors {
                        format!(
                            "{:>3}: {:<8} -> {}",
                            outcome.question,
                            raw,
                            "skipped".dimmed()
                        )
                    } else {
                        format!("{:>3}: {:<8} -> skipped", outcome.question, raw)
                    }
                }
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the result as tab-separated values for scripting
/// One "archetype\tcount" row per archetype, then a "winner\t{name}" row
/// (no headers, no colors)
pub fn format_tsv(result: &ScoreResult) -> String {
    let mut lines: Vec<String> = result
        .board
        .iter()
        .map(|(archetype, count)| format!("{}\t{}", archetype, count))
        .collect();
    lines.push(format!("winner\t{}", result.winner));
    lines.join("\n")
}
