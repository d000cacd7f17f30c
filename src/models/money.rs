//! Money type for representing royalty amounts
//!
//! Internally stores amounts in ten-thousandths of the currency unit (i64) so
//! that per-stream royalty lines keep their fractional cents and sums stay
//! exact. Provides safe arithmetic operations and formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// Number of stored units per currency unit
pub const SCALE: i64 = 10_000;

const DECIMALS: usize = 4;

/// Represents a monetary amount stored as ten-thousandths of the currency unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from raw ten-thousandths
    ///
    /// # Examples
    /// ```
    /// use royalty_report::models::Money;
    /// let amount = Money::from_units(12_345); // 1.2345
    /// ```
    pub const fn from_units(units: i64) -> Self {
        Self(units)
    }

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use royalty_report::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents * (SCALE / 100))
    }

    /// Create a Money amount from a spreadsheet float, rounded to the nearest
    /// ten-thousandth. Returns `None` for NaN, infinities and out-of-range values.
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let scaled = (value * SCALE as f64).round();
        if scaled.abs() >= i64::MAX as f64 {
            return None;
        }
        Some(Self(scaled as i64))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the raw amount in ten-thousandths
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Get the amount rounded to whole cents (half away from zero)
    pub const fn rounded_cents(&self) -> i64 {
        let step = SCALE / 100;
        let half = if self.0 < 0 { -(step / 2) } else { step / 2 };
        (self.0 + half) / step
    }

    /// Get the amount as a float, for spreadsheet cells
    pub fn to_f64(&self) -> f64 {
        self.0 as f64 / SCALE as f64
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "+3", "0.0034", ".5" and anything
    /// Rust parses as a finite float ("1e3"). Digits past the fourth decimal
    /// are rounded.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        if let Some(money) = parse_decimal(s) {
            return Ok(money);
        }

        s.parse::<f64>()
            .ok()
            .and_then(Self::from_f64)
            .ok_or_else(|| MoneyParseError::InvalidFormat(s.to_string()))
    }

    /// Format rounded to two decimals with a comma thousands separator
    ///
    /// # Examples
    /// ```
    /// use royalty_report::models::Money;
    /// assert_eq!(Money::from_cents(123456789).format_grouped(), "1,234,567.89");
    /// ```
    pub fn format_grouped(&self) -> String {
        let cents = self.rounded_cents();
        let whole = (cents / 100).unsigned_abs().to_string();
        let frac = (cents % 100).unsigned_abs();

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, ch) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        let sign = if cents < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, grouped, frac)
    }

    /// Format with a currency symbol, e.g. "R$ 1,234.56"
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        format!("{}{}", symbol, self.format_grouped())
    }
}

/// Exact decimal parse; `None` when the text is not a plain decimal number
fn parse_decimal(s: &str) -> Option<Money> {
    let (negative, body) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (int_part, frac_part) = match body.split_once('.') {
        Some((i, f)) => (i, f),
        None => (body, ""),
    };

    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) || !all_digits(frac_part) {
        return None;
    }

    let whole: i64 = if int_part.is_empty() {
        0
    } else {
        int_part.parse().ok()?
    };

    let mut units: i64 = 0;
    for (i, b) in frac_part.bytes().take(DECIMALS).enumerate() {
        units += i64::from(b - b'0') * 10_i64.pow((DECIMALS - 1 - i) as u32);
    }
    if let Some(next) = frac_part.as_bytes().get(DECIMALS) {
        if *next >= b'5' {
            units += 1;
        }
    }

    let total = whole.checked_mul(SCALE)?.checked_add(units)?;
    Some(Money(if negative { -total } else { total }))
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("R$ "))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
