//! Console rendering for the demo commands.
//!
//! Echoed input is cut to [`PREVIEW_CHARS`] so oversized arguments are never
//! written back in full.

use std::borrow::Cow;
use std::io::Write;

use anyhow::{Context, Result};
use palindrome_core::{PalindromeChecker, SecureChecker};
use palindrome_types::{CheckError, Verdict};
use serde_json::Value;

/// Strings shown by the `samples` command.
pub const SAMPLES: [&str; 6] = [
    "racecar",
    "hello",
    "A man a plan a canal Panama",
    "Was it a car or a cat I saw",
    "python",
    "level",
];

/// Characters of input echoed before truncation.
pub const PREVIEW_CHARS: usize = 40;

/// Length of the input used by the oversized-input scenario.
const OVERSIZED_INPUT_CHARS: usize = 100_000;

/// Returns `text`, truncated to [`PREVIEW_CHARS`] characters plus `…`.
pub fn preview(text: &str) -> Cow<'_, str> {
    match text.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => Cow::Owned(format!("{}…", &text[..cut])),
        None => Cow::Borrowed(text),
    }
}

/// Writes one `'<input>' -> <status>` line.
pub fn write_verdict<W: Write>(out: &mut W, text: &str, verdict: Verdict) -> Result<()> {
    writeln!(out, "'{}' -> {}", preview(text), verdict)?;
    Ok(())
}

fn write_outcome<W: Write>(out: &mut W, shown: &str, outcome: Result<bool, CheckError>) -> Result<()> {
    match outcome {
        Ok(result) => write_verdict(out, shown, Verdict::from(result)),
        Err(e) => {
            writeln!(out, "'{}' -> error: {}", preview(shown), e)?;
            Ok(())
        }
    }
}

pub fn write_samples<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "=== Palindrome Checker ===\n")?;
    write_checks(out, SAMPLES)
}

pub fn write_checks<W, I, S>(out: &mut W, texts: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let checker = PalindromeChecker::default();
    for text in texts {
        let text = text.as_ref();
        write_verdict(out, text, checker.verdict(text))?;
    }
    Ok(())
}

pub fn write_secure<W: Write>(out: &mut W, checker: &SecureChecker, texts: &[String]) -> Result<()> {
    for text in texts {
        write_outcome(out, text, checker.check(text))?;
    }
    Ok(())
}

/// Parses each argument as JSON and runs it through the type boundary.
///
/// # Errors
///
/// Fails on the first argument that is not valid JSON.
pub fn write_json<W: Write>(out: &mut W, checker: &SecureChecker, values: &[String]) -> Result<()> {
    for raw in values {
        let value: Value = serde_json::from_str(raw)
            .with_context(|| format!("argument is not valid JSON: '{}'", preview(raw)))?;
        write_outcome(out, raw, checker.check_value(&value))?;
    }
    Ok(())
}

fn security_scenarios() -> Vec<(&'static str, Value)> {
    vec![
        ("Normal valid input", Value::from("racecar")),
        ("Invalid type (number instead of string)", Value::from(12321)),
        ("Null input", Value::Null),
        (
            "Oversized input",
            Value::String("a".repeat(OVERSIZED_INPUT_CHARS)),
        ),
        ("Edge case - empty string", Value::from("")),
        ("Input with special characters", Value::from("a!@#$%a")),
    ]
}

pub fn write_security<W: Write>(out: &mut W) -> Result<()> {
    let checker = SecureChecker::default();

    writeln!(out, "=== SECURITY TESTING ===\n")?;
    for (i, (title, value)) in security_scenarios().into_iter().enumerate() {
        writeln!(out, "Test {}: {}", i + 1, title)?;
        match checker.check_value(&value) {
            Ok(result) => writeln!(out, "✓ Result: {result}\n")?,
            Err(e @ CheckError::TypeMismatch { .. }) => {
                writeln!(out, "✓ Successfully caught error: {e}\n")?
            }
            Err(e @ CheckError::LengthExceeded { .. }) => {
                writeln!(out, "✓ Successfully blocked oversized input: {e}\n")?
            }
        }
    }
    Ok(())
}
