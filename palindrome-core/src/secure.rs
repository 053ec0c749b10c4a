//! Validating palindrome checker.
//!
//! Enforces a length limit before doing any normalization work. Accepted
//! input is compared after lower-casing and removing spaces only, so
//! punctuation still counts here even though [`is_palindrome`] ignores it.
//!
//! [`is_palindrome`]: crate::checker::is_palindrome

use palindrome_types::{CheckConfig, CheckError};
use tracing::warn;

use crate::analyzer::normalizer::TextNormalizer;
use crate::checker::PalindromeChecker;

/// Checks `text` under a length limit of `max_length` characters.
///
/// # Errors
///
/// Returns [`CheckError::LengthExceeded`] if `text` has more than
/// `max_length` characters.
///
/// ```
/// use palindrome_core::secure_is_palindrome;
/// use palindrome_types::CheckError;
///
/// assert_eq!(secure_is_palindrome("racecar", 10_000), Ok(true));
///
/// let long = "a".repeat(100_000);
/// assert_eq!(
///     secure_is_palindrome(&long, 10_000),
///     Err(CheckError::LengthExceeded { length: 100_000, max_length: 10_000 })
/// );
/// ```
#[inline]
pub fn secure_is_palindrome(text: &str, max_length: usize) -> Result<bool, CheckError> {
    SecureChecker::with_max_length(max_length).check(text)
}

/// Palindrome checker that validates input before comparing.
#[derive(Debug, Clone, Copy)]
pub struct SecureChecker {
    config: CheckConfig,
    checker: PalindromeChecker,
}

impl Default for SecureChecker {
    fn default() -> Self {
        Self::new(CheckConfig::default())
    }
}

impl SecureChecker {
    /// Creates a checker with the given validation settings.
    pub const fn new(config: CheckConfig) -> Self {
        Self {
            config,
            checker: PalindromeChecker::with_normalizer(TextNormalizer::spaces()),
        }
    }

    /// Creates a checker with a custom length limit.
    pub const fn with_max_length(max_length: usize) -> Self {
        Self::new(CheckConfig::new(max_length))
    }

    /// Returns the validation settings.
    #[inline]
    pub const fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// Validates `text` and returns whether it is a palindrome.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::LengthExceeded`] if `text` is longer than the
    /// configured limit.
    pub fn check(&self, text: &str) -> Result<bool, CheckError> {
        self.validate(text)?;
        Ok(self.checker.check(text))
    }

    /// Applies the length limit without checking the text.
    pub fn validate(&self, text: &str) -> Result<(), CheckError> {
        let max_length = self.config.max_length;

        // Byte length bounds char count from above.
        if text.len() <= max_length {
            return Ok(());
        }

        let length = text.chars().count();
        if length > max_length {
            warn!(length, max_length, "rejected input over length limit");
            return Err(CheckError::LengthExceeded { length, max_length });
        }

        Ok(())
    }
}
