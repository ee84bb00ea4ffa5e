//! Locale formatting of granted amounts.
//!
//! Norwegian Bokmål groups thousands with a no-break space and the registry
//! amounts are whole kroner, so `1500000` renders as `1 500 000 kroner`.

use rust_decimal::{Decimal, RoundingStrategy};

/// Thousands separator of the Norwegian Bokmål locale (U+00A0 NO-BREAK SPACE).
pub const DEFAULT_GROUPING_SEPARATOR: char = '\u{a0}';

/// Currency word appended after the number.
pub const DEFAULT_CURRENCY_WORD: &str = "kroner";

/// Formats amounts with thousands grouping and a currency word.
///
/// # Example
///
/// ```
/// use grant_digest::digest::AmountFormatter;
/// use rust_decimal::Decimal;
///
/// let formatter = AmountFormatter::default();
/// assert_eq!(
///     formatter.format(Decimal::from(1500000)),
///     "1\u{a0}500\u{a0}000 kroner"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountFormatter {
    grouping_separator: char,
    currency_word: String,
}

impl AmountFormatter {
    /// Creates a formatter with the given separator and currency word.
    pub fn new(grouping_separator: char, currency_word: impl Into<String>) -> Self {
        Self {
            grouping_separator,
            currency_word: currency_word.into(),
        }
    }

    /// Returns the thousands separator.
    pub fn grouping_separator(&self) -> char {
        self.grouping_separator
    }

    /// Returns the currency word.
    pub fn currency_word(&self) -> &str {
        &self.currency_word
    }

    /// Formats `amount` as a grouped whole number followed by the currency word.
    pub fn format(&self, amount: Decimal) -> String {
        format!("{} {}", self.group_digits(amount), self.currency_word)
    }

    /// Groups the whole part of `amount` in threes from the right.
    ///
    /// Fractions are rounded half away from zero; no decimals are shown.
    pub fn group_digits(&self, amount: Decimal) -> String {
        let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        let digits = rounded.abs().trunc().to_string();

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * 2 + 1);
        if rounded.is_sign_negative() && !rounded.is_zero() {
            grouped.push('-');
        }
        for (i, digit) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(self.grouping_separator);
            }
            grouped.push(digit);
        }
        grouped
    }
}

impl Default for AmountFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_GROUPING_SEPARATOR, DEFAULT_CURRENCY_WORD)
    }
}
