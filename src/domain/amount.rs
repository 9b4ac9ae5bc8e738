//! Monetary amounts.
//!
//! The backend sends money either as JSON numbers or as numeric strings.
//! [`RawAmount`] keeps whatever arrived; [`Amount`] is the validated value
//! in integer cents that everything downstream works with.

use std::fmt;
use std::ops::Sub;

use serde::{Deserialize, Serialize};

use super::error::DashboardError;

/// Number of minor units (cents) per major unit.
pub const CENTS_PER_UNIT: i64 = 100;

/// Largest magnitude accepted from a JSON number, in major units.
///
/// Keeps the cents conversion well inside `i64` and inside the range where
/// `f64` still represents every cent exactly.
const MAX_MAJOR_UNITS: f64 = 90_000_000_000_000.0;

// ============================================================================
// Amount
// ============================================================================

/// A validated monetary amount stored as integer cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(i64);

impl Amount {
    /// Creates an amount from integer cents.
    #[must_use]
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Returns the amount in integer cents.
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Returns `true` for amounts below zero.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Converts a floating-point value in major units, rounding to the
    /// nearest cent (half away from zero).
    ///
    /// Returns `None` for non-finite or out-of-range values.
    #[must_use]
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() || value.abs() > MAX_MAJOR_UNITS {
            return None;
        }
        Some(Self::from_cents((value * CENTS_PER_UNIT as f64).round() as i64))
    }

    /// Parses a plain decimal string such as `"5000"`, `"-12.5"` or
    /// `" 1000.00 "`.
    ///
    /// Digits are read as integers, never through `f64`. Fractions longer
    /// than two digits round half away from zero on the third digit.
    /// Exponents, hex, `NaN`, `inf`, thousands separators, empty strings
    /// and values that do not fit in `i64` cents are rejected.
    #[must_use]
    pub fn parse_decimal(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let (whole, fraction) = match digits.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (digits, None),
        };

        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        let valid = !whole.is_empty()
            && all_digits(whole)
            && fraction.is_none_or(|f| !f.is_empty() && all_digits(f));
        if !valid {
            return None;
        }

        let mut fraction_digits = fraction.unwrap_or("").bytes().map(|b| i64::from(b - b'0'));
        let tenths = fraction_digits.next().unwrap_or(0);
        let hundredths = fraction_digits.next().unwrap_or(0);
        let round_up = fraction_digits.next().is_some_and(|digit| digit >= 5);

        let cents = whole
            .parse::<i64>()
            .ok()?
            .checked_mul(CENTS_PER_UNIT)?
            .checked_add(tenths * 10 + hundredths)?
            .checked_add(i64::from(round_up))?;

        Some(Self::from_cents(if negative { -cents } else { cents }))
    }
}

impl Sub for Amount {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let unit = CENTS_PER_UNIT.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / unit, abs % unit)
    }
}

// ============================================================================
// Raw Amount
// ============================================================================

/// A monetary value exactly as the backend sent it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    /// A JSON number.
    Number(f64),
    /// A numeric string, e.g. `"5000"`.
    Text(String),
}

impl RawAmount {
    /// Validates the raw value into an [`Amount`].
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::InvalidAmount`] naming `field` when the
    /// value is not a plain finite decimal.
    pub fn to_amount(&self, field: &str) -> Result<Amount, DashboardError> {
        let parsed = match self {
            Self::Number(value) => Amount::from_f64(*value),
            Self::Text(text) => Amount::parse_decimal(text),
        };
        parsed.ok_or_else(|| DashboardError::invalid_amount(field, self.to_string()))
    }
}

impl fmt::Display for RawAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<f64> for RawAmount {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RawAmount {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================
