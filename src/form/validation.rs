use super::schema::Submission;

/// Validate the required identity fields before anything is scored.
/// Returns all validation errors at once (not just the first).
pub fn validate_submission(submission: &Submission) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    match submission.name.as_deref().map(str::trim) {
        None | Some("") => errors.push("name: required field is missing or empty".to_string()),
        Some(_) => {}
    }

    match submission.email.as_deref().map(str::trim) {
        None | Some("") => errors.push("email: required field is missing or empty".to_string()),
        Some(email) => {
            if !email_is_valid(email) {
                errors.push(format!("email: '{}' is not a valid address", email));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// The shape check a browser's email input performs: one '@' with
/// non-empty local and domain parts, no whitespace.
fn email_is_valid(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn submission(name: Option<&str>, email: Option<&str>) -> Submission {
        Submission {
            name: name.map(str::to_string),
            email: email.map(str::to_string),
            answers: HashMap::new(),
        }
    }

    #[test]
    fn test_valid_submission() {
        let s = submission(Some("Ada"), Some("ada@example.com"));
        assert!(validate_submission(&s).is_ok());
    }

    #[test]
    fn test_missing_name() {
        let s = submission(None, Some("ada@example.com"));
        let errors = validate_submission(&s).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("name"));
    }

    #[test]
    fn test_blank_name() {
        let s = submission(Some("   "), Some("ada@example.com"));
        let errors = validate_submission(&s).unwrap_err();
        assert!(errors[0].contains("name"));
    }

    #[test]
    fn test_missing_email() {
        let s = submission(Some("Ada"), None);
        let errors = validate_submission(&s).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("email"));
    }

    #[test]
    fn test_malformed_email() {
        for bad in ["ada", "@example.com", "ada@", "ada @example.com", "a@b@c"] {
            let s = submission(Some("Ada"), Some(bad));
            let errors = validate_submission(&s).unwrap_err();
            assert!(
                errors[0].contains("email"),
                "expected email error for '{}'",
                bad
            );
        }
    }

    #[test]
    fn test_collects_all_errors() {
        let s = submission(None, None);
        let errors = validate_submission(&s).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
