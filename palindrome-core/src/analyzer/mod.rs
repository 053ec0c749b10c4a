//! Text analysis ahead of palindrome comparison.
//!
//! - **Normalizer**: lower-cases text and drops the characters a comparison ignores

pub mod normalizer;

pub use normalizer::{NormalizeMode, NormalizerConfig, TextNormalizer};
