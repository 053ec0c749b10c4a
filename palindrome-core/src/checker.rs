//! Unvalidated palindrome predicate.

use palindrome_types::Verdict;
use smallvec::SmallVec;
use tracing::debug;

use crate::analyzer::normalizer::{NormalizerConfig, TextNormalizer};

/// Normalized characters kept on the stack before spilling to the heap.
pub const INLINE_CHARS: usize = 64;

/// Returns `true` if `chars` equals its own reversal.
///
/// Empty and single-element slices are palindromes.
#[inline]
pub fn is_mirrored(chars: &[char]) -> bool {
    let n = chars.len();
    (0..n / 2).all(|i| chars[i] == chars[n - 1 - i])
}

/// Checks whether `text` reads the same forwards and backwards,
/// ignoring case and every non-alphanumeric character.
///
/// ```
/// use palindrome_core::is_palindrome;
///
/// assert!(is_palindrome("A man a plan a canal Panama"));
/// assert!(is_palindrome("RaceCar"));
/// assert!(!is_palindrome("hello"));
/// ```
#[inline]
pub fn is_palindrome(text: &str) -> bool {
    PalindromeChecker::default().check(text)
}

/// Normalizes `text` the way [`is_palindrome`] does before comparing.
#[inline]
pub fn normalize(text: &str) -> String {
    TextNormalizer::alphanumeric().normalize(text)
}

/// Palindrome predicate bound to a normalization mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct PalindromeChecker {
    normalizer: TextNormalizer,
}

impl PalindromeChecker {
    /// Creates a checker with the given normalization settings.
    pub const fn new(config: NormalizerConfig) -> Self {
        Self {
            normalizer: TextNormalizer::new(config),
        }
    }

    /// Creates a checker around an existing normalizer.
    pub const fn with_normalizer(normalizer: TextNormalizer) -> Self {
        Self { normalizer }
    }

    /// The normalizer applied before comparison.
    #[inline]
    pub const fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    /// Returns `true` if the normalized `text` equals its reversal.
    pub fn check(&self, text: &str) -> bool {
        let normalized: SmallVec<[char; INLINE_CHARS]> = self.normalizer.chars(text).collect();
        let result = is_mirrored(&normalized);
        debug!(
            mode = ?self.normalizer.mode(),
            normalized_len = normalized.len(),
            result,
            "palindrome check"
        );
        result
    }

    /// Same as [`check`](Self::check), as a [`Verdict`].
    #[inline]
    pub fn verdict(&self, text: &str) -> Verdict {
        Verdict::from(self.check(text))
    }
}
