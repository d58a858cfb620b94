//! Common validation rules shared across request payloads.

use validator::ValidationError;

/// Validates an organization slug.
///
/// Requirements:
/// - Lowercase letters, digits, and hyphens only
/// - 2-50 characters, no leading/trailing hyphen
pub fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    if slug.len() < 2 || slug.len() > 50 {
        return Err(ValidationError::new("slug_invalid_length"));
    }

    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(ValidationError::new("slug_invalid_characters"));
    }

    if slug.starts_with('-') || slug.ends_with('-') {
        return Err(ValidationError::new("slug_invalid_hyphen"));
    }

    Ok(())
}

/// Validates a feedback rating label.
pub fn validate_rating(rating: &str) -> Result<(), ValidationError> {
    const ALLOWED: [&str; 4] = ["bad", "okay", "good", "great"];
    if ALLOWED.contains(&rating) {
        Ok(())
    } else {
        Err(ValidationError::new("rating_unknown"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_rejects_too_short() {
        assert!(validate_slug("a").is_err());
    }

    #[test]
    fn slug_rejects_uppercase_and_spaces() {
        assert!(validate_slug("Lax Club").is_err());
    }

    #[test]
    fn slug_rejects_leading_hyphen() {
        assert!(validate_slug("-lax-club").is_err());
    }

    #[test]
    fn slug_accepts_valid() {
        assert!(validate_slug("lax-club-2026").is_ok());
    }

    #[test]
    fn rating_rejects_unknown_label() {
        assert!(validate_rating("amazing").is_err());
    }

    #[test]
    fn rating_accepts_known_labels() {
        for rating in ["bad", "okay", "good", "great"] {
            assert!(validate_rating(rating).is_ok());
        }
    }
}
