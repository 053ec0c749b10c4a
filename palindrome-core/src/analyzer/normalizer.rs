use memchr::memchr_iter;

/// Which characters survive normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalizeMode {
    /// Keep only alphanumeric characters (Unicode classification), lower-cased.
    #[default]
    Alphanumeric,
    /// Drop U+0020 SPACE only and lower-case everything else.
    /// Punctuation, tabs and other whitespace are kept.
    Spaces,
}

impl NormalizeMode {
    #[inline(always)]
    fn keeps(self, c: char) -> bool {
        match self {
            NormalizeMode::Alphanumeric => c.is_alphanumeric(),
            NormalizeMode::Spaces => c != ' ',
        }
    }
}

/// Configuration options for text normalization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizerConfig {
    /// Character filter applied after lower-casing.
    pub mode: NormalizeMode,
}

/// Unicode-aware text normalizer used ahead of palindrome comparison.
///
/// Performs the following operations:
/// - Converts all characters to lowercase (Unicode-aware)
/// - Removes characters rejected by the configured [`NormalizeMode`]
///
/// Lower-casing happens before filtering, so a character whose lowercase
/// form expands into a letter plus a combining mark (`İ` becomes `i̇`) only
/// contributes the letter in [`NormalizeMode::Alphanumeric`].
///
/// # Performance
///
/// Pure ASCII input is handled byte-wise without decoding. In
/// [`NormalizeMode::Spaces`] the input is split on spaces with `memchr`
/// and copied a segment at a time.
///
/// # Examples
///
/// ```
/// use palindrome_core::analyzer::normalizer::TextNormalizer;
///
/// let normalizer = TextNormalizer::default();
/// assert_eq!(normalizer.normalize("A man, a plan!"), "amanaplan");
///
/// let spaces = TextNormalizer::spaces();
/// assert_eq!(spaces.normalize("A man, a plan!"), "aman,aplan!");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNormalizer {
    config: NormalizerConfig,
}

impl TextNormalizer {
    /// Creates a new normalizer with the specified configuration.
    pub const fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    /// Normalizer that keeps only lower-cased alphanumerics.
    pub const fn alphanumeric() -> Self {
        Self::new(NormalizerConfig {
            mode: NormalizeMode::Alphanumeric,
        })
    }

    /// Normalizer that removes spaces and lower-cases the rest.
    pub const fn spaces() -> Self {
        Self::new(NormalizerConfig {
            mode: NormalizeMode::Spaces,
        })
    }

    /// Returns the configured mode.
    #[inline]
    pub const fn mode(&self) -> NormalizeMode {
        self.config.mode
    }

    /// Normalizes text into an existing String buffer.
    ///
    /// Reuses the buffer's capacity if sufficient, growing only when necessary.
    /// Clears the buffer before writing.
    pub fn normalize_into(&self, input: &str, out: &mut String) {
        out.clear();
        out.reserve(input.len());

        match self.config.mode {
            NormalizeMode::Alphanumeric => {
                if input.is_ascii() {
                    out.extend(
                        input
                            .bytes()
                            .filter(u8::is_ascii_alphanumeric)
                            .map(|b| b.to_ascii_lowercase() as char),
                    );
                } else {
                    out.extend(self.chars(input));
                }
            }
            NormalizeMode::Spaces => {
                let mut start = 0usize;
                for i in memchr_iter(b' ', input.as_bytes()) {
                    push_lowercase(&input[start..i], out);
                    start = i + 1;
                }
                push_lowercase(&input[start..], out);
            }
        }
    }

    /// Normalizes text and returns a new String.
    #[inline]
    pub fn normalize(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.normalize_into(input, &mut out);
        out
    }

    /// Lazily yields the normalized characters of `input`.
    ///
    /// Produces exactly the characters [`normalize`](Self::normalize) would
    /// write, without allocating.
    #[inline]
    pub fn chars<'a>(&self, input: &'a str) -> impl DoubleEndedIterator<Item = char> + 'a {
        let mode = self.config.mode;
        input
            .chars()
            .flat_map(char::to_lowercase)
            .filter(move |&c| mode.keeps(c))
    }
}

// `segment` never contains a space; split points are ASCII so slicing is on char boundaries.
#[inline]
fn push_lowercase(segment: &str, out: &mut String) {
    if segment.is_ascii() {
        let start = out.len();
        out.push_str(segment);
        out[start..].make_ascii_lowercase();
    } else {
        out.extend(segment.chars().flat_map(char::to_lowercase));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(input: &str) -> String {
        TextNormalizer::default().normalize(input)
    }

    fn norm_spaces(input: &str) -> String {
        TextNormalizer::spaces().normalize(input)
    }

    #[test]
    fn default_mode_is_alphanumeric() {
        assert_eq!(TextNormalizer::default().mode(), NormalizeMode::Alphanumeric);
        assert_eq!(NormalizerConfig::default().mode, NormalizeMode::Alphanumeric);
    }

    #[test]
    fn ascii_basic_lowercase() {
        assert_eq!(norm("HELLO"), "hello");
        assert_eq!(norm("HeLlO"), "hello");
        assert_eq!(norm("123 ABC!"), "123abc");
    }

    #[test]
    fn ascii_full_alphabet() {
        let upper: String = (b'A'..=b'Z').map(|b| b as char).collect();
        let lower: String = (b'a'..=b'z').map(|b| b as char).collect();
        assert_eq!(norm(&upper), lower);
    }

    #[test]
    fn punctuation_and_spaces_removed() {
        assert_eq!(norm("A man, a plan, a canal: Panama!"), "amanaplanacanalpanama");
        assert_eq!(norm("foo-bar_baz"), "foobarbaz");
        assert_eq!(norm("tab\tnew\nline"), "tabnewline");
    }

    #[test]
    fn only_punctuation_becomes_empty() {
        assert_eq!(norm("!@#$%^&*() \t\n"), "");
    }

    #[test]
    fn empty_input() {
        assert_eq!(norm(""), "");
        assert_eq!(norm_spaces(""), "");
    }

    #[test]
    fn single_char() {
        assert_eq!(norm("A"), "a");
        assert_eq!(norm_spaces("A"), "a");
    }

    #[test]
    fn digits_kept() {
        assert_eq!(norm("12-321"), "12321");
    }

    #[test]
    fn unicode_basic_lowercase() {
        assert_eq!(norm("ПРИВЕТ"), "привет");
        assert_eq!(norm("ÜNITED"), "ünited");
        assert_eq!(norm("Ésope reste ici et se repose"), "ésoperesteicietserepose");
    }

    #[test]
    fn unicode_punctuation_removed() {
        assert_eq!(norm("¿Qué? ¡Sí!"), "quésí");
        assert_eq!(norm("«ΆΈΉ»"), "άέή");
    }

    #[test]
    fn dotted_capital_i_drops_combining_mark() {
        assert_eq!(norm("İ"), "i");
        assert!(norm("İstanbul").chars().all(char::is_alphanumeric));
    }

    #[test]
    fn cjk_kept() {
        assert_eq!(norm("你好，世界"), "你好世界");
        assert_eq!(norm("カタカナ"), "カタカナ");
    }

    #[test]
    fn emoji_removed() {
        assert_eq!(norm("Hello 🌍 World"), "helloworld");
    }

    #[test]
    fn control_chars_removed() {
        assert_eq!(norm("a\0b\x01c"), "abc");
    }

    #[test]
    fn spaces_mode_keeps_punctuation() {
        assert_eq!(norm_spaces("a!@#$%a"), "a!@#$%a");
        assert_eq!(norm_spaces("A man, a plan"), "aman,aplan");
    }

    #[test]
    fn spaces_mode_removes_only_u0020() {
        assert_eq!(norm_spaces("  RACE   CAR  "), "racecar");
        assert_eq!(norm_spaces("a\tb\nc"), "a\tb\nc");
        assert_eq!(norm_spaces("a\u{00A0}b"), "a\u{00A0}b");
    }

    #[test]
    fn spaces_mode_unicode_segments() {
        assert_eq!(norm_spaces("ÉTÉ ÉTÉ"), "étéété");
        assert_eq!(norm_spaces("Ёж Ёж"), "ёжёж");
    }

    #[test]
    fn only_spaces_becomes_empty_in_spaces_mode() {
        assert_eq!(norm_spaces("     "), "");
    }

    #[test]
    fn output_only_lowercase_alphanumeric() {
        let inputs = ["Hello, World!", "ÀÉÎÕÜ ñ", "İIıi", "ΣΊΣΥΦΟΣ", "x²+y³", "🍵 tea"];
        for input in inputs {
            let out = norm(input);
            assert!(out.chars().all(char::is_alphanumeric), "{out:?}");
            assert!(
                out.chars().all(|c| c.to_lowercase().eq(std::iter::once(c))),
                "{out:?}"
            );
        }
    }

    #[test]
    fn fast_path_matches_char_iterator() {
        let inputs = [
            "Was it a car or a cat I saw?",
            "No 'x' in Nixon",
            "ÀB C,d É",
            "  leading and trailing  ",
            "mixed\tWHITE space",
        ];
        for mode in [NormalizeMode::Alphanumeric, NormalizeMode::Spaces] {
            let n = TextNormalizer::new(NormalizerConfig { mode });
            for input in inputs {
                let lazy: String = n.chars(input).collect();
                assert_eq!(n.normalize(input), lazy, "{mode:?} {input:?}");
            }
        }
    }

    #[test]
    fn idempotent_in_both_modes() {
        let samples = ["Hello, World", "foo   bar", "ÜBER Café!", "İstanbul"];
        for n in [TextNormalizer::alphanumeric(), TextNormalizer::spaces()] {
            for s in samples {
                let once = n.normalize(s);
                let twice = n.normalize(&once);
                assert_eq!(once, twice);
            }
        }
    }

    #[test]
    fn normalize_into_reuses_capacity() {
        let normalizer = TextNormalizer::default();
        let mut buf = String::with_capacity(64);
        let cap = buf.capacity();

        normalizer.normalize_into("HELLO", &mut buf);
        assert_eq!(buf, "hello");
        assert_eq!(buf.capacity(), cap);

        normalizer.normalize_into("WORLD!", &mut buf);
        assert_eq!(buf, "world");
        assert_eq!(buf.capacity(), cap);
    }

    #[test]
    fn normalize_into_clears_previous_content() {
        let normalizer = TextNormalizer::spaces();
        let mut buf = String::from("stale");
        normalizer.normalize_into("", &mut buf);
        assert_eq!(buf, "");
    }

    #[test]
    fn very_long_ascii() {
        let input = "A ".repeat(10_000);
        assert_eq!(norm(&input).len(), 10_000);
        assert_eq!(norm_spaces(&input).len(), 10_000);
        assert!(norm(&input).chars().all(|c| c == 'a'));
    }

    #[test]
    fn chars_is_reversible() {
        let n = TextNormalizer::default();
        let rev: String = n.chars("Ab, C").rev().collect();
        assert_eq!(rev, "cba");
    }
}
