mod schema;
pub mod validation;

pub use schema::Submission;
pub use validation::validate_submission;

use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Load a submission from a JSON file, or from stdin when no path is
/// given.
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist or cannot be read
/// - The JSON cannot be parsed as a submission object
pub fn load_submission(path: Option<&Path>) -> Result<Submission> {
    let content = match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!(
                    "Submission file not found at {}. Pass the answers as a JSON object of string fields.",
                    path.display()
                );
            }
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read submission file at {}", path.display()))?
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read submission from stdin")?;
            buf
        }
    };

    let submission: Submission = serde_json::from_str(&content)
        .context("Failed to parse submission: expected a JSON object of string fields")?;

    Ok(submission)
}
