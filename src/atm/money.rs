use crate::Result;

use std::fmt;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MoneyError {
    #[error("Overflow error while applying {0} operation on {1:?} and {2:?}")]
    Overflow(&'static str, Money, Money),

    #[error("Underflow error while applying {0} operation on {1:?} and {2:?}")]
    Underflow(&'static str, Money, Money),

    #[error("Money parse error: {0}, {1}")]
    Parse(&'static str, String),
}

/// Amount of currency in cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(pub i64);

impl Money {
    pub const MAX: Self = Self(i64::MAX);
    pub const MIN: Self = Self(i64::MIN);

    pub const fn from_dollars(dollars: u32) -> Self {
        return Self(dollars as i64 * 100);
    }

    pub const fn from_cents(cents: i64) -> Self {
        return Self(cents);
    }

    pub fn cents(&self) -> i64 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parses a decimal string such as `1000`, `-3.5` or `1200.00` into cents
    pub fn parse(string: &str) -> Result<Self> {
        let trimmed = string.trim();

        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let mut parts = unsigned.split('.');

        if parts.clone().count() > 2 {
            Err(MoneyError::Parse("Too many decimal points", string.to_string()))?
        }

        let dollars = match parts.next() {
            None | Some("") => Err(MoneyError::Parse("Missing whole units", string.to_string()))?,
            Some(dollars) => dollars,
        };

        let cents = match parts.next() {
            None => "00".to_string(),
            Some(cents) if cents.len() > 2 => {
                Err(MoneyError::Parse("Too many decimal places", string.to_string()))?
            }
            Some(cents) => format!("{:0<2}", cents),
        };

        if !dollars.chars().all(|c| c.is_ascii_digit()) || !cents.chars().all(|c| c.is_ascii_digit()) {
            Err(MoneyError::Parse("Non-numeric characters", string.to_string()))?
        }

        let dollars: i64 = dollars.parse()?;
        let cents: i64 = cents.parse()?;

        let magnitude = dollars
            .checked_mul(100)
            .and_then(|d| d.checked_add(cents))
            .ok_or_else(|| MoneyError::Parse("Amount out of range", string.to_string()))?;

        let value = if negative { -magnitude } else { magnitude };

        return Ok(Money(value));
    }

    pub fn add(&mut self, other: &Self) -> Result {
        let a = self.0;
        let b = other.0;

        self.0 = match a.checked_add(b) {
            Some(sum) => sum,
            None if b > 0 => Err(MoneyError::Overflow("add", Money(a), *other))?,
            None => Err(MoneyError::Underflow("add", Money(a), *other))?,
        };

        return Ok(());
    }

    pub fn sub(&mut self, other: &Self) -> Result {
        let a = self.0;
        let b = other.0;

        self.0 = match a.checked_sub(b) {
            Some(difference) => difference,
            None if b < 0 => Err(MoneyError::Overflow("sub", Money(a), *other))?,
            None => Err(MoneyError::Underflow("sub", Money(a), *other))?,
        };

        return Ok(());
    }
}

/// Renders as `$1,234.56`
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();

        let dollars = (magnitude / 100).to_string();
        let cents = magnitude % 100;

        let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
        for (idx, digit) in dollars.chars().enumerate() {
            if idx > 0 && (dollars.len() - idx) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }

        return write!(f, "{sign}${grouped}.{cents:02}");
    }
}
