//! Untyped input boundary.
//!
//! Inside the crate text is always `&str`. Values arriving as JSON are
//! type-checked here before they reach [`SecureChecker`].

use palindrome_types::{CheckError, InputKind};
use serde_json::Value;
use tracing::warn;

use crate::secure::SecureChecker;

/// Classifies a JSON value.
pub fn input_kind(value: &Value) -> InputKind {
    match value {
        Value::Null => InputKind::Null,
        Value::Bool(_) => InputKind::Bool,
        Value::Number(_) => InputKind::Number,
        Value::String(_) => InputKind::String,
        Value::Array(_) => InputKind::Array,
        Value::Object(_) => InputKind::Object,
    }
}

/// Extracts text from a JSON value.
///
/// # Errors
///
/// Returns [`CheckError::TypeMismatch`] for anything other than a JSON string.
pub fn text_from_value(value: &Value) -> Result<&str, CheckError> {
    match value {
        Value::String(s) => Ok(s),
        other => {
            let found = input_kind(other);
            warn!(%found, "rejected non-text input");
            Err(CheckError::TypeMismatch {
                expected: InputKind::String,
                found,
            })
        }
    }
}

impl SecureChecker {
    /// Type-checks an untyped value, then validates and checks it as text.
    ///
    /// ```
    /// use palindrome_core::SecureChecker;
    /// use palindrome_types::{CheckError, InputKind};
    /// use serde_json::json;
    ///
    /// let checker = SecureChecker::default();
    /// assert_eq!(checker.check_value(&json!("racecar")), Ok(true));
    /// assert_eq!(
    ///     checker.check_value(&json!(12321)),
    ///     Err(CheckError::TypeMismatch { expected: InputKind::String, found: InputKind::Number })
    /// );
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::TypeMismatch`] for non-string values and
    /// [`CheckError::LengthExceeded`] for over-long strings.
    pub fn check_value(&self, value: &Value) -> Result<bool, CheckError> {
        let text = text_from_value(value)?;
        self.check(text)
    }
}
