//! Name validation rules
//!
//! List names and item names share the same constraints: 1 to 100 characters,
//! drawn from letters, digits, space, underscore and hyphen. Validation runs
//! at the HTTP boundary before any store access, and reports the first
//! failing rule.

use thiserror::Error;

/// Maximum accepted name length, in characters.
pub const MAX_NAME_LEN: usize = 100;

/// A rejected name, with the first rule it violated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("Name must not be empty")]
    Empty,

    #[error("Name must be at most {MAX_NAME_LEN} characters")]
    TooLong,

    #[error("Name may only contain letters, digits, spaces, underscores and hyphens")]
    InvalidCharacter,
}

/// Validate a list or item name against the shared naming rules.
pub fn validate_name(name: &str) -> Result<(), NameError> {
    if name.is_empty() {
        return Err(NameError::Empty);
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(NameError::TooLong);
    }
    let allowed = |c: char| c.is_ascii_alphanumeric() || c == ' ' || c == '_' || c == '-';
    if !name.chars().all(allowed) {
        return Err(NameError::InvalidCharacter);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_typical_names() {
        assert_eq!(validate_name("todo"), Ok(()));
        assert_eq!(validate_name("valid_name-1"), Ok(()));
        assert_eq!(validate_name("Weekly Shopping"), Ok(()));
    }

    #[test]
    fn test_rejects_empty_name() {
        assert_eq!(validate_name(""), Err(NameError::Empty));
    }

    #[test]
    fn test_rejects_overlong_name() {
        let name = "a".repeat(MAX_NAME_LEN + 1);
        assert_eq!(validate_name(&name), Err(NameError::TooLong));
    }

    #[test]
    fn test_accepts_name_at_length_limit() {
        let name = "a".repeat(MAX_NAME_LEN);
        assert_eq!(validate_name(&name), Ok(()));
    }

    #[test]
    fn test_rejects_disallowed_characters() {
        assert_eq!(validate_name("list@name"), Err(NameError::InvalidCharacter));
        assert_eq!(validate_name("milk!"), Err(NameError::InvalidCharacter));
        assert_eq!(validate_name("a/b"), Err(NameError::InvalidCharacter));
    }

    #[test]
    fn test_length_rule_reported_before_charset() {
        // Both rules are violated; the length rule fires first.
        let name = format!("@{}", "a".repeat(MAX_NAME_LEN + 1));
        assert_eq!(validate_name(&name), Err(NameError::TooLong));
    }
}
