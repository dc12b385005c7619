//! Validation helpers for DTOs.

use validator::ValidationError;

/// Longest guess accepted, in bytes. Expected answers are single keywords;
/// anything beyond this cannot match and only bloats logs.
const MAX_GUESS_BYTES: usize = 256;

/// Validates that a submitted guess is non-empty and reasonably sized.
///
/// The word is forwarded to the matcher untouched: matching is exact and
/// case-sensitive, so no trimming or case folding happens here.
pub fn validate_guess_word(word: &str) -> Result<(), ValidationError> {
    if word.is_empty() {
        let mut err = ValidationError::new("guess_empty");
        err.message = Some("Guess must not be empty".into());
        return Err(err);
    }

    if word.len() > MAX_GUESS_BYTES {
        let mut err = ValidationError::new("guess_length");
        err.message = Some(
            format!(
                "Guess must be at most {} bytes (got {})",
                MAX_GUESS_BYTES,
                word.len()
            )
            .into(),
        );
        return Err(err);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_guess_word_valid() {
        assert!(validate_guess_word("abstract").is_ok());
        assert!(validate_guess_word("ABSTRACT").is_ok());
        assert!(validate_guess_word("with space").is_ok());
    }

    #[test]
    fn test_validate_guess_word_empty() {
        assert!(validate_guess_word("").is_err());
    }

    #[test]
    fn test_validate_guess_word_too_long() {
        let long = "a".repeat(257);
        assert!(validate_guess_word(&long).is_err());
        let max = "a".repeat(256);
        assert!(validate_guess_word(&max).is_ok());
    }
}
