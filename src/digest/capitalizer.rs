//! Name capitalization with acronym exceptions.
//!
//! Organization names arrive in arbitrary casing, most often all uppercase
//! (`NORSK FILMINSTITUTT AS`). The [`Capitalizer`] title-cases each word
//! except for a fixed set of legal-form tokens and acronyms.

use std::collections::HashSet;

/// Tokens left untouched by the default [`Capitalizer`].
///
/// Sampled from the 100 most recent registry hits. The list is knowingly
/// incomplete: acronyms outside it are title-cased like any other word.
pub const DEFAULT_EXCEPTIONS: &[&str] = &["AS", "NO", "AB", "SF", "SA", "ASA", "S.A.R.L."];

/// Title-cases names while preserving an exception set of tokens.
///
/// # Example
///
/// ```
/// use grant_digest::digest::Capitalizer;
///
/// let capitalizer = Capitalizer::default();
/// assert_eq!(
///     capitalizer.capitalize("NORSK FILMINSTITUTT AS"),
///     "Norsk Filminstitutt AS"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capitalizer {
    exceptions: HashSet<String>,
}

impl Capitalizer {
    /// Creates a capitalizer with the given exception tokens.
    ///
    /// Tokens are matched exactly, case included.
    pub fn new<I, S>(exceptions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            exceptions: exceptions.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if `word` is kept verbatim.
    pub fn is_exception(&self, word: &str) -> bool {
        self.exceptions.contains(word)
    }

    /// Capitalizes every space-separated word of `name`.
    ///
    /// Splitting happens on single spaces only, so repeated spaces yield
    /// empty words which are passed through and the original spacing is kept.
    /// Punctuated words (`SØR-VARANGER`, `A.S`) are one word: only their
    /// first character is uppercased.
    pub fn capitalize(&self, name: &str) -> String {
        name.split(' ')
            .map(|word| self.capitalize_word(word))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn capitalize_word(&self, word: &str) -> String {
        if self.is_exception(word) {
            return word.to_string();
        }

        let mut chars = word.chars();
        match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.as_str().to_lowercase().chars())
                .collect(),
            None => String::new(),
        }
    }
}

impl Default for Capitalizer {
    fn default() -> Self {
        Self::new(DEFAULT_EXCEPTIONS.iter().copied())
    }
}
