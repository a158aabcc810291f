//! Amount type for line item values and derived totals
//!
//! Values are real numbers, not cents: the calculator mirrors what a user
//! types into a number field. Stored values are always finite and
//! non-negative; anything else entering through [`Amount::coerce`] or
//! [`Amount::parse_lenient`] becomes zero. Derived figures such as the
//! balance are produced by arithmetic and may be negative.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub};

/// A monetary value
///
/// Deserializing goes through [`Amount::coerce`], so a decoded amount obeys
/// the same rules as one typed by the user.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Amount(f64);

impl Amount {
    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Coerce raw input into a storable value
    ///
    /// NaN, infinities and negative numbers all become zero.
    ///
    /// # Examples
    /// ```
    /// use budget_calc::models::Amount;
    /// assert_eq!(Amount::coerce(12.5).value(), 12.5);
    /// assert_eq!(Amount::coerce(-50.0).value(), 0.0);
    /// assert_eq!(Amount::coerce(f64::NAN).value(), 0.0);
    /// ```
    pub fn coerce(raw: f64) -> Self {
        if raw.is_finite() && raw > 0.0 {
            Self(raw)
        } else {
            Self::zero()
        }
    }

    /// Parse user text the way a number input field would, then coerce
    ///
    /// Leading and trailing whitespace is ignored. When the text contains a
    /// comma it is read as the decimal separator and dots are dropped as
    /// thousands separators ("1.234,56"). The longest numeric prefix wins,
    /// so "12abc" reads as 12; text with no numeric prefix reads as 0.
    ///
    /// # Examples
    /// ```
    /// use budget_calc::models::Amount;
    /// assert_eq!(Amount::parse_lenient("1000").value(), 1000.0);
    /// assert_eq!(Amount::parse_lenient("1.234,56").value(), 1234.56);
    /// assert_eq!(Amount::parse_lenient("abc").value(), 0.0);
    /// ```
    pub fn parse_lenient(input: &str) -> Self {
        let trimmed = input.trim();
        let normalized = if trimmed.contains(',') {
            trimmed.replace('.', "").replace(',', ".")
        } else {
            trimmed.to_string()
        };

        numeric_prefix(&normalized)
            .parse::<f64>()
            .map(Self::coerce)
            .unwrap_or_default()
    }

    /// Get the raw value
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Check if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    /// False once arithmetic on huge totals has overflowed
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

/// Longest prefix of `s` that reads as a decimal number, or "" if none
fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let len = bytes.len();
    let mut i = 0;
    let mut digits = false;

    if i < len && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }
    while i < len && bytes[i].is_ascii_digit() {
        i += 1;
        digits = true;
    }
    if i < len && bytes[i] == b'.' {
        i += 1;
        while i < len && bytes[i].is_ascii_digit() {
            i += 1;
            digits = true;
        }
    }
    if !digits {
        return "";
    }

    let mut end = i;
    if i < len && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < len && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exponent_start = j;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exponent_start {
            end = j;
        }
    }

    &s[..end]
}

impl Default for Amount {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl From<f64> for Amount {
    fn from(raw: f64) -> Self {
        Self::coerce(raw)
    }
}

impl From<Amount> for f64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Amount {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl Mul<f64> for Amount {
    type Output = Self;

    fn mul(self, factor: f64) -> Self {
        Self(self.0 * factor)
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}

impl<'a> std::iter::Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
