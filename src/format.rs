//! Display formatting for money and dates.
//!
//! The dashboard shows everything in the Brazilian convention: `R$ 1.000,00`
//! for money and `20/04/2020` for dates.

use chrono::{NaiveDate, TimeZone};

use crate::domain::{Amount, CreatedAt};
use crate::domain::amount::CENTS_PER_UNIT;

// ============================================================================
// Currency Formatting
// ============================================================================

/// Separators and symbol for one currency convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyFormat {
    /// Currency symbol, printed before the number.
    pub symbol: &'static str,
    /// Separator between groups of three integer digits.
    pub thousands_separator: char,
    /// Separator between integer and fractional digits.
    pub decimal_separator: char,
}

/// Brazilian real, pt-BR separators.
pub const BRL: CurrencyFormat = CurrencyFormat {
    symbol: "R$",
    thousands_separator: '.',
    decimal_separator: ',',
};

impl CurrencyFormat {
    /// Formats `amount` with this convention.
    ///
    /// Negative amounts get a leading `-` before the symbol.
    #[must_use]
    pub fn format(&self, amount: Amount) -> String {
        let cents = amount.cents().unsigned_abs();
        let unit = CENTS_PER_UNIT.unsigned_abs();
        let whole = group_digits(cents / unit, self.thousands_separator);
        let sign = if amount.is_negative() { "-" } else { "" };

        format!(
            "{sign}{} {whole}{}{:02}",
            self.symbol,
            self.decimal_separator,
            cents % unit
        )
    }
}

/// Formats an amount as Brazilian reais, e.g. `R$ 1.000,00`.
#[must_use]
pub fn format_value(amount: Amount) -> String {
    BRL.format(amount)
}

/// Groups the digits of `n` in threes using `separator`.
fn group_digits(n: u64, separator: char) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(separator);
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

// ============================================================================
// Date Formatting
// ============================================================================

/// Day/month/year pattern used for every date on screen.
const DATE_PATTERN: &str = "%d/%m/%Y";

/// Formats a transaction timestamp as `dd/mm/yyyy` in `tz`.
///
/// Date-only values are shown as-is; instants are converted to `tz` first so
/// that the calendar day matches what the viewer's clock showed.
#[must_use]
pub fn format_date<Tz: TimeZone>(created_at: &CreatedAt, tz: &Tz) -> String {
    calendar_date(created_at, tz).format(DATE_PATTERN).to_string()
}

fn calendar_date<Tz: TimeZone>(created_at: &CreatedAt, tz: &Tz) -> NaiveDate {
    match created_at {
        CreatedAt::Date(date) => *date,
        CreatedAt::Local(datetime) => datetime.date(),
        CreatedAt::Instant(instant) => instant.with_timezone(tz).date_naive(),
    }
}

// ============================================================================
// Tests
// ============================================================================
