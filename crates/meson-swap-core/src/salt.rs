//! Salt construction and the flag bits overlaid on it.
//!
//! A caller may supply a salt prefix of up to 20 hex digits. The prefix is
//! kept left-aligned and the remaining digits are filled from a CSPRNG. With
//! no prefix the salt starts with `0x0000`, which marks a deprecated encoding.

use rand::{CryptoRng, RngCore};

use crate::error::SwapError;
use crate::types::{strip_0x, Salt, SALT_LEN};

/// Number of hex digits in a full salt.
pub const SALT_HEX_DIGITS: usize = SALT_LEN * 2;

/// Leading digits of a salt generated without a caller prefix.
pub const DEFAULT_SALT_PREFIX: &str = "0000";

// Fee-waiver nibble: (nibble & MASK) >= THRESHOLD.
const FEE_WAIVER_MASK: u8 = 0x7;
const FEE_WAIVER_THRESHOLD: u8 = 4;

impl Salt {
    /// Build a full salt from an optional caller prefix.
    ///
    /// An empty string is treated like an absent prefix.
    pub fn normalize<R>(prefix: Option<&str>, rng: &mut R) -> Result<Self, SwapError>
    where
        R: RngCore + CryptoRng,
    {
        let digits = match prefix {
            Some(p) if !p.is_empty() => {
                let digits = strip_0x(p)
                    .ok_or_else(|| SwapError::InvalidSalt(format!("{p} is not 0x-prefixed")))?;
                if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
                    return Err(SwapError::InvalidSalt(format!("{p} is not hex")));
                }
                if digits.len() > SALT_HEX_DIGITS {
                    return Err(SwapError::InvalidSalt(format!(
                        "{p} is longer than {SALT_LEN} bytes"
                    )));
                }
                digits
            }
            _ => DEFAULT_SALT_PREFIX,
        };

        let padding = random_hex(SALT_HEX_DIGITS - digits.len(), rng);
        tracing::trace!(prefix = digits, padding_digits = padding.len(), "normalized salt");

        let mut bytes = [0u8; SALT_LEN];
        hex::decode_to_slice(format!("{digits}{padding}"), &mut bytes)
            .map_err(|e| SwapError::InvalidSalt(e.to_string()))?;
        Ok(Self(bytes))
    }

    /// Parse a complete salt of exactly 20 hex digits. No randomness is drawn.
    pub fn from_hex(s: &str) -> Result<Self, SwapError> {
        let digits =
            strip_0x(s).ok_or_else(|| SwapError::InvalidSalt(format!("{s} is not 0x-prefixed")))?;
        let mut bytes = [0u8; SALT_LEN];
        hex::decode_to_slice(digits, &mut bytes)
            .map_err(|e| SwapError::InvalidSalt(e.to_string()))?;
        Ok(Self(bytes))
    }

    /// The first byte is `0x00` or `0xff`.
    ///
    /// Swaps encoded this way predate service fees.
    pub fn is_deprecated_encoding(&self) -> bool {
        matches!(self.0[0], 0x00 | 0xff)
    }

    /// The leading hex digit of the salt, modulo 8, is at least 4.
    pub fn will_waive_fee(&self) -> bool {
        ((self.0[0] >> 4) & FEE_WAIVER_MASK) >= FEE_WAIVER_THRESHOLD
    }
}

/// Exactly `digits` random hex digits.
///
/// Odd counts draw one extra byte and drop its trailing nibble.
fn random_hex<R: RngCore + CryptoRng>(digits: usize, rng: &mut R) -> String {
    if digits == 0 {
        return String::new();
    }
    let mut buf = vec![0u8; digits.div_ceil(2)];
    rng.fill_bytes(&mut buf);
    let mut out = hex::encode(buf);
    out.truncate(digits);
    out
}
