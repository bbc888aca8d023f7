use crate::Result;

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Overflow error while applying {0} operation on {1} and {2}")]
    Overflow(&'static str, Money, Money),

    #[error("Money parse error: {0}, {1:?}")]
    Parse(&'static str, String),
}

/// Amount of Tunisian dinars, stored as a whole number of millimes
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(pub i64);

impl Money {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(i64::MAX);

    /// Millimes per dinar
    pub const SCALE: i64 = 1000;

    const DECIMALS: usize = 3;

    pub const fn from_dinars(dinars: i64) -> Self {
        Self(dinars * Self::SCALE)
    }

    /// Parses a plain decimal string such as `"1500"`, `"12.5"` or `"-0.250"`.
    ///
    /// Digits beyond the millime are only accepted when they are zeros.
    pub fn parse(string: &str) -> Result<Self> {
        let trimmed = string.trim();

        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        if unsigned.split('.').count() > 2 {
            Err(MoneyError::Parse("Too many decimal points", string.to_string()))?
        }

        let mut parts = unsigned.split('.');
        let dinars = parts.next().unwrap_or_default();
        let millimes = parts.next().unwrap_or_default();

        if dinars.is_empty() && millimes.is_empty() {
            Err(MoneyError::Parse("No digits", string.to_string()))?
        }

        let is_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if !is_digits(dinars) || !is_digits(millimes) {
            Err(MoneyError::Parse("Non-numeric characters", string.to_string()))?
        }

        let (kept, dropped) = millimes.split_at(millimes.len().min(Self::DECIMALS));
        if dropped.chars().any(|c| c != '0') {
            Err(MoneyError::Parse("Precision finer than one millime", string.to_string()))?
        }

        let dinars: i64 = if dinars.is_empty() { 0 } else { dinars.parse()? };
        let millimes: i64 = format!("{kept:0<3}").parse()?;

        let value = dinars
            .checked_mul(Self::SCALE)
            .and_then(|value| value.checked_add(millimes))
            .ok_or_else(|| MoneyError::Parse("Out of range", string.to_string()))?;

        Ok(Money(if negative { -value } else { value }))
    }

    /// Converts a floating point amount, rounding to the nearest millime.
    ///
    /// Returns `None` for NaN, infinities and values that do not fit.
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }

        let millimes = (value * Self::SCALE as f64).round();

        if millimes.abs() >= i64::MAX as f64 {
            return None;
        }

        Some(Money(millimes as i64))
    }

    /// Amount in dinars as a floating point number, exact below 2^53 millimes
    pub fn to_f64(&self) -> f64 {
        self.0 as f64 / Self::SCALE as f64
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Adds `other` in place, leaving `self` untouched on overflow
    pub fn add(&mut self, other: &Self) -> Result {
        let sum = self
            .0
            .checked_add(other.0)
            .ok_or(MoneyError::Overflow("add", *self, *other))?;

        self.0 = sum;

        Ok(())
    }

    /// Subtracts `other` in place, leaving `self` untouched on overflow
    pub fn sub(&mut self, other: &Self) -> Result {
        let difference = self
            .0
            .checked_sub(other.0)
            .ok_or(MoneyError::Overflow("sub", *self, *other))?;

        self.0 = difference;

        Ok(())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();
        let scale = Self::SCALE as u64;

        write!(f, "{sign}{}.{:03}", magnitude / scale, magnitude % scale)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Money::parse(&raw).map_err(|e| de::Error::custom(format!("{e:#}")))
    }
}
