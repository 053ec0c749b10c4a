//! Core types shared by the palindrome checker crates.
//!
//! Keeping these in a separate crate lets the library and the demo binary
//! agree on verdicts, limits and errors without depending on each other's
//! internals.

#![warn(missing_docs)]

use core::fmt;

use thiserror::Error;

/// Default upper bound, in characters, on input accepted by the validating checker.
pub const DEFAULT_MAX_LENGTH: usize = 10_000;

/// Outcome of a palindrome check.
///
/// Converts losslessly to and from `bool`. The `Display` form is the
/// human-readable label printed by the demo binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// The normalized text equals its own reversal.
    Palindrome,
    /// The normalized text differs from its reversal.
    NotPalindrome,
}

impl Verdict {
    /// Returns `true` for [`Verdict::Palindrome`].
    #[inline(always)]
    pub const fn is_palindrome(self) -> bool {
        matches!(self, Verdict::Palindrome)
    }
}

impl From<bool> for Verdict {
    #[inline(always)]
    fn from(value: bool) -> Self {
        if value {
            Verdict::Palindrome
        } else {
            Verdict::NotPalindrome
        }
    }
}

impl From<Verdict> for bool {
    #[inline(always)]
    fn from(v: Verdict) -> Self {
        v.is_palindrome()
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Palindrome => f.write_str("✓ Palindrome"),
            Verdict::NotPalindrome => f.write_str("✗ Not a palindrome"),
        }
    }
}

/// Kind of an untyped input value, as seen at a deserialization boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    /// Text. The only kind the checker accepts.
    String,
    /// Absent value.
    Null,
    /// Boolean.
    Bool,
    /// Integer or floating point number.
    Number,
    /// Ordered sequence of values.
    Array,
    /// Key/value map.
    Object,
}

impl InputKind {
    /// Lower-case name used in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            InputKind::String => "string",
            InputKind::Null => "null",
            InputKind::Bool => "bool",
            InputKind::Number => "number",
            InputKind::Array => "array",
            InputKind::Object => "object",
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors raised by the validating checker.
///
/// Variants carry only sizes and kinds, never the offending input itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CheckError {
    /// Input was not text.
    #[error("expected {expected}, got {found}")]
    TypeMismatch {
        /// The kind the checker requires.
        expected: InputKind,
        /// The kind that was supplied.
        found: InputKind,
    },
    /// Input is longer than the configured limit.
    #[error("input length {length} exceeds maximum of {max_length} characters")]
    LengthExceeded {
        /// Length of the rejected input in characters.
        length: usize,
        /// The configured limit in characters.
        max_length: usize,
    },
}

/// Validation settings for the checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckConfig {
    /// Maximum accepted input length in characters (inclusive).
    /// Default: [`DEFAULT_MAX_LENGTH`]
    pub max_length: usize,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LENGTH)
    }
}

impl CheckConfig {
    /// Creates a configuration with the given length limit.
    pub const fn new(max_length: usize) -> Self {
        Self { max_length }
    }

    /// Creates a configuration that accepts input of any length.
    pub const fn unbounded() -> Self {
        Self {
            max_length: usize::MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_bool_conversions() {
        assert_eq!(Verdict::from(true), Verdict::Palindrome);
        assert_eq!(Verdict::from(false), Verdict::NotPalindrome);
        assert!(bool::from(Verdict::Palindrome));
        assert!(!bool::from(Verdict::NotPalindrome));
    }

    #[test]
    fn verdict_labels() {
        assert_eq!(Verdict::Palindrome.to_string(), "✓ Palindrome");
        assert_eq!(Verdict::NotPalindrome.to_string(), "✗ Not a palindrome");
    }

    #[test]
    fn type_mismatch_message() {
        let err = CheckError::TypeMismatch {
            expected: InputKind::String,
            found: InputKind::Number,
        };
        assert_eq!(err.to_string(), "expected string, got number");
    }

    #[test]
    fn length_exceeded_message_carries_both_sizes() {
        let err = CheckError::LengthExceeded {
            length: 100_000,
            max_length: 10_000,
        };
        let msg = err.to_string();
        assert!(msg.contains("100000"));
        assert!(msg.contains("10000 characters"));
    }

    #[test]
    fn default_config_uses_default_limit() {
        assert_eq!(CheckConfig::default().max_length, DEFAULT_MAX_LENGTH);
        assert_eq!(CheckConfig::default().max_length, 10_000);
    }

    #[test]
    fn unbounded_config() {
        assert_eq!(CheckConfig::unbounded().max_length, usize::MAX);
    }

    #[test]
    fn input_kind_names() {
        assert_eq!(InputKind::Null.to_string(), "null");
        assert_eq!(InputKind::Object.name(), "object");
    }

    #[test]
    fn check_error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<CheckError>();
    }
}
