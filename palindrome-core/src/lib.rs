//! Palindrome detection.
//!
//! Two entry points with deliberately different normalization:
//!
//! - [`is_palindrome`] ignores case and every non-alphanumeric character.
//! - [`secure_is_palindrome`] / [`SecureChecker`] enforce a length limit,
//!   then ignore only case and spaces. Punctuation is significant.
//!
//! Untyped input (JSON) is type-checked in [`boundary`] before it reaches
//! the validating checker.

pub mod analyzer;
pub mod boundary;
pub mod checker;
pub mod secure;

pub use analyzer::{NormalizeMode, NormalizerConfig, TextNormalizer};
pub use boundary::{input_kind, text_from_value};
pub use checker::{is_mirrored, is_palindrome, normalize, PalindromeChecker};
pub use secure::{secure_is_palindrome, SecureChecker};

pub use palindrome_types::{CheckConfig, CheckError, InputKind, Verdict, DEFAULT_MAX_LENGTH};
