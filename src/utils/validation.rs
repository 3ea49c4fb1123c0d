//! Input validation utilities.
//!
//! This module contains the synchronous validation helpers shared by the
//! login, signup, and note editor forms. All checks run locally before any
//! network call is made.

use log::*;
use regex::Regex;
use std::collections::HashSet;

/// Email address shape pattern. The exact pattern is a client-side
/// convenience and not part of the server contract.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Characters that satisfy the special-character requirement of the
/// password strength policy.
const SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+{}|<>?";

/// Minimum password length accepted at login.
pub const LOGIN_PASSWORD_MIN_CHARS: usize = 6;

/// Minimum password length accepted by the strength policy at signup.
pub const STRONG_PASSWORD_MIN_CHARS: usize = 8;

/// Return true if the given string has a standard `local@domain` shape.
///
pub fn is_valid_email(email: &str) -> bool {
    let re = match Regex::new(EMAIL_PATTERN) {
        Ok(re) => re,
        Err(e) => {
            warn!("Failed to compile email pattern: {}", e);
            return false;
        }
    };
    re.is_match(email)
}

/// Return true if the password satisfies the signup strength policy: at
/// least one lowercase letter, one uppercase letter, one special character,
/// and a minimum of eight characters. All four conditions must hold at
/// once.
///
pub fn is_strong_password(password: &str) -> bool {
    password.chars().count() >= STRONG_PASSWORD_MIN_CHARS
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| SPECIAL_CHARACTERS.contains(c))
}

/// Trim each tag and discard the ones left empty. Duplicates are kept;
/// detecting them is a validation error, not a cleanup step.
///
pub fn normalized_tags(tags: &[String]) -> Vec<String> {
    tags.iter()
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}

/// Return true if the tag list contains a duplicate after trimming.
/// Comparison is case-sensitive.
///
pub fn has_duplicate_tags(tags: &[String]) -> bool {
    let normalized = normalized_tags(tags);
    let unique: HashSet<&str> = normalized.iter().map(String::as_str).collect();
    unique.len() != normalized.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(items: &[&str]) -> Vec<String> {
        items.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_valid_email_shapes() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@example.co.uk"));
        assert!(is_valid_email("user+tag@domain.io"));
    }

    #[test]
    fn test_invalid_email_shapes() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("missing@domain"));
        assert!(!is_valid_email("@no-local.com"));
        assert!(!is_valid_email("spaces in@local.com"));
        assert!(!is_valid_email("double@@at.com"));
    }

    #[test]
    fn test_strong_password_accepted() {
        assert!(is_strong_password("Abcdef1!"));
        assert!(is_strong_password("xY<longenough"));
    }

    #[test]
    fn test_strong_password_missing_lowercase() {
        assert!(!is_strong_password("ABCDEFG!"));
    }

    #[test]
    fn test_strong_password_missing_uppercase() {
        assert!(!is_strong_password("abcdefg!"));
    }

    #[test]
    fn test_strong_password_missing_special() {
        assert!(!is_strong_password("Abcdefgh"));
    }

    #[test]
    fn test_strong_password_too_short() {
        // All character classes present but below the minimum length.
        assert!(!is_strong_password("Ab!x"));
        assert!(!is_strong_password("Abcdef!"));
    }

    #[test]
    fn test_normalized_tags_trims_and_drops_empties() {
        let result = normalized_tags(&tags(&[" work ", "", "  ", "home"]));
        assert_eq!(result, vec!["work".to_string(), "home".to_string()]);
    }

    #[test]
    fn test_duplicate_tags_after_trimming() {
        assert!(has_duplicate_tags(&tags(&["x", "x "])));
        assert!(has_duplicate_tags(&tags(&["a", "b", " a"])));
    }

    #[test]
    fn test_unique_tags_pass() {
        assert!(!has_duplicate_tags(&tags(&["x", "y"])));
        assert!(!has_duplicate_tags(&tags(&[])));
    }

    #[test]
    fn test_duplicate_tags_are_case_sensitive() {
        assert!(!has_duplicate_tags(&tags(&["Work", "work"])));
    }
}
