//! Password policy assessment.
//!
//! A pure function of the password string, recomputed on every call and
//! never cached. The result feeds prompts and pre-flight checks; the actual
//! gate the pipeline enforces is only non-emptiness plus the batch-level
//! minimum length.

use crate::config::{PASSWORD_MIN_LENGTH, PASSWORD_STRONG_LENGTH};

/// Derived strength tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl Strength {
    pub fn label(self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Strong => "strong",
        }
    }
}

/// Snapshot of how a password measures against the policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordReport {
    /// Meets the 8-character minimum.
    pub meets_min_length: bool,
    pub has_lowercase: bool,
    pub has_uppercase: bool,
    pub has_digit: bool,
    pub has_symbol: bool,
    pub strength: Strength,
    /// Usable for encryption: non-empty and meets the minimum length.
    pub is_valid: bool,
}

/// Assesses a password against the policy.
///
/// The tier counts five criteria (each character class plus the 12-char
/// length bonus): four or more with 12+ characters is strong, three or more
/// with 8+ characters is medium, anything else is weak.
pub fn assess(password: &str) -> PasswordReport {
    let meets_min_length = password.chars().count() >= PASSWORD_MIN_LENGTH;
    let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
    let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| !c.is_ascii_alphanumeric());
    let is_long = password.chars().count() >= PASSWORD_STRONG_LENGTH;

    let criteria = [has_lowercase, has_uppercase, has_digit, has_symbol, is_long].iter().filter(|&&c| c).count();

    let strength = if criteria >= 4 && is_long {
        Strength::Strong
    } else if criteria >= 3 && meets_min_length {
        Strength::Medium
    } else {
        Strength::Weak
    };

    PasswordReport {
        meets_min_length,
        has_lowercase,
        has_uppercase,
        has_digit,
        has_symbol,
        strength,
        is_valid: !password.is_empty() && meets_min_length,
    }
}
