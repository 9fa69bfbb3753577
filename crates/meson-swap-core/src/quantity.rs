//! Loosely-typed integer input for amounts and fees.
//!
//! Callers hand amounts over as JSON numbers, decimal strings, `0x` hex
//! strings or already-parsed `U256` values. Negative inputs are representable
//! so that the range checks can report them precisely.

use alloy_primitives::U256;
use serde::Deserialize;

/// An integer as supplied by a caller, not yet parsed or range-checked.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    /// A non-negative numeric literal.
    Unsigned(u64),
    /// A possibly negative numeric literal.
    Signed(i64),
    /// A decimal or `0x`-prefixed hex string, optionally with a leading `-`.
    Text(String),
    /// An already-parsed 256-bit value.
    #[serde(skip_deserializing)]
    Uint(U256),
}

/// A parsed quantity: sign plus magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Parsed {
    pub negative: bool,
    pub magnitude: U256,
}

impl Parsed {
    pub const ZERO: Self = Self {
        negative: false,
        magnitude: U256::ZERO,
    };

    /// Strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        !self.negative && !self.magnitude.is_zero()
    }

    /// Below zero. `-0` counts as zero.
    pub fn is_negative(&self) -> bool {
        self.negative && !self.magnitude.is_zero()
    }
}

impl Quantity {
    /// Parse into sign and magnitude. `None` if the input is not an integer.
    pub(crate) fn parse(&self) -> Option<Parsed> {
        match self {
            Self::Unsigned(n) => Some(Parsed {
                negative: false,
                magnitude: U256::from(*n),
            }),
            Self::Signed(n) => Some(Parsed {
                negative: *n < 0,
                magnitude: U256::from(n.unsigned_abs()),
            }),
            Self::Uint(n) => Some(Parsed {
                negative: false,
                magnitude: *n,
            }),
            Self::Text(s) => parse_text(s),
        }
    }
}

fn parse_text(s: &str) -> Option<Parsed> {
    let s = s.trim();
    let (negative, unsigned) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let (digits, radix) = match unsigned.strip_prefix("0x").or_else(|| unsigned.strip_prefix("0X")) {
        Some(rest) => (rest, 16),
        None => (unsigned, 10),
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    let magnitude = U256::from_str_radix(digits, radix as u64).ok()?;
    Some(Parsed { negative, magnitude })
}

impl From<u64> for Quantity {
    fn from(value: u64) -> Self {
        Self::Unsigned(value)
    }
}

impl From<u32> for Quantity {
    fn from(value: u32) -> Self {
        Self::Unsigned(value.into())
    }
}

impl From<i64> for Quantity {
    fn from(value: i64) -> Self {
        Self::Signed(value)
    }
}

impl From<i32> for Quantity {
    fn from(value: i32) -> Self {
        Self::Signed(value.into())
    }
}

impl From<U256> for Quantity {
    fn from(value: U256) -> Self {
        Self::Uint(value)
    }
}

impl From<&str> for Quantity {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Quantity {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(q: impl Into<Quantity>) -> Option<Parsed> {
        q.into().parse()
    }

    #[test]
    fn test_parse_numeric_literals() {
        assert_eq!(parsed(5000u64).unwrap().magnitude, U256::from(5000u64));
        let neg = parsed(-1i64).unwrap();
        assert!(neg.is_negative());
        assert_eq!(neg.magnitude, U256::from(1u64));
    }

    #[test]
    fn test_parse_decimal_and_hex_strings() {
        assert_eq!(parsed("1000000").unwrap().magnitude, U256::from(1_000_000u64));
        assert_eq!(parsed("0x1388").unwrap().magnitude, U256::from(5000u64));
        assert_eq!(parsed(" 42 ").unwrap().magnitude, U256::from(42u64));
        assert!(parsed("-7").unwrap().is_negative());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parsed("").is_none());
        assert!(parsed("0x").is_none());
        assert!(parsed("12abc").is_none());
        assert!(parsed("1.5").is_none());
        assert!(parsed("0xzz").is_none());
        assert!(parsed("--1").is_none());
    }

    #[test]
    fn test_negative_zero_is_zero() {
        let p = parsed("-0").unwrap();
        assert!(!p.is_negative());
        assert!(!p.is_positive());
    }

    #[test]
    fn test_parse_rejects_values_wider_than_256_bits() {
        let too_wide = format!("0x1{}", "0".repeat(64));
        assert!(parsed(too_wide.as_str()).is_none());
    }

    #[test]
    fn test_deserialize_untagged() {
        let q: Quantity = serde_json::from_str("5000").unwrap();
        assert_eq!(q, Quantity::Unsigned(5000));
        let q: Quantity = serde_json::from_str("-3").unwrap();
        assert_eq!(q, Quantity::Signed(-3));
        let q: Quantity = serde_json::from_str("\"0x10\"").unwrap();
        assert_eq!(q, Quantity::Text("0x10".into()));
    }
}
