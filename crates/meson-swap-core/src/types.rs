//! Strong type definitions for the swap codec.
//!
//! Fixed-width wire values are newtypes over byte arrays so a chain id can
//! never be passed where a salt is expected.

use alloy_primitives::U256;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::SwapError;

/// Largest value representable by a uint40 wire field.
pub const UINT40_MAX: u64 = (1 << 40) - 1;

/// Length of an encoded swap in bytes.
pub const ENCODED_LEN: usize = 32;

/// Length of an encoded swap as a `0x`-prefixed hex string.
pub const ENCODED_HEX_LEN: usize = 2 + ENCODED_LEN * 2;

/// Length of a salt in bytes.
pub const SALT_LEN: usize = 10;

/// Strip the mandatory `0x` prefix from a hex string.
pub(crate) fn strip_0x(s: &str) -> Option<&str> {
    s.strip_prefix("0x")
}

/// A 2-byte chain identifier (`bytes2` on the wire), e.g. `0x003c`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChainId(pub [u8; 2]);

impl ChainId {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 2]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 2] {
        &self.0
    }

    /// Convert to a `0x`-prefixed hex string.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Parse from a `0x`-prefixed string of exactly four hex digits.
    pub fn from_hex(s: &str) -> Result<Self, SwapError> {
        let digits = strip_0x(s).ok_or_else(|| SwapError::InvalidChainId(s.to_string()))?;
        let mut arr = [0u8; 2];
        hex::decode_to_slice(digits, &mut arr)
            .map_err(|_| SwapError::InvalidChainId(s.to_string()))?;
        Ok(Self(arr))
    }
}

impl fmt::Debug for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChainId({})", self.to_hex())
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for ChainId {
    type Err = SwapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<[u8; 2]> for ChainId {
    fn from(bytes: [u8; 2]) -> Self {
        Self(bytes)
    }
}

impl From<u16> for ChainId {
    fn from(value: u16) -> Self {
        Self(value.to_be_bytes())
    }
}

impl Serialize for ChainId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for ChainId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// The 10-byte salt (`uint80` on the wire).
///
/// The first two bytes carry protocol flags, the rest is random filler.
/// See [`crate::salt`] for construction and flag accessors.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Salt(pub [u8; SALT_LEN]);

impl Salt {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; SALT_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; SALT_LEN] {
        &self.0
    }

    /// Convert to a `0x`-prefixed hex string (always 22 characters).
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Salt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Salt({})", self.to_hex())
    }
}

impl fmt::Display for Salt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<[u8; SALT_LEN]> for Salt {
    fn from(bytes: [u8; SALT_LEN]) -> Self {
        Self(bytes)
    }
}

impl Serialize for Salt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// A 32-byte encoded swap, the canonical wire form of a [`crate::SwapRecord`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct EncodedSwap(pub [u8; ENCODED_LEN]);

impl EncodedSwap {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; ENCODED_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; ENCODED_LEN] {
        &self.0
    }

    /// Convert to a `0x`-prefixed hex string (always 66 characters).
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Parse from a `0x`-prefixed hex string of exactly 66 characters.
    pub fn from_hex(s: &str) -> Result<Self, SwapError> {
        if s.len() != ENCODED_HEX_LEN {
            return Err(SwapError::InvalidEncodingLength(s.len()));
        }
        let digits = strip_0x(s).ok_or(SwapError::MissingEncodingPrefix)?;
        let mut arr = [0u8; ENCODED_LEN];
        hex::decode_to_slice(digits, &mut arr).map_err(|_| SwapError::InvalidEncodingHex)?;
        Ok(Self(arr))
    }

    /// Interpret a 256-bit integer as an encoded swap (left-padded to 32 bytes).
    pub fn from_uint(value: U256) -> Self {
        Self(value.to_be_bytes::<ENCODED_LEN>())
    }

    /// The encoded swap as a 256-bit integer.
    pub fn to_uint(&self) -> U256 {
        U256::from_be_bytes(self.0)
    }
}

impl fmt::Debug for EncodedSwap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EncodedSwap({})", self.to_hex())
    }
}

impl fmt::Display for EncodedSwap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl AsRef<[u8]> for EncodedSwap {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; ENCODED_LEN]> for EncodedSwap {
    fn from(bytes: [u8; ENCODED_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<U256> for EncodedSwap {
    fn from(value: U256) -> Self {
        Self::from_uint(value)
    }
}

impl FromStr for EncodedSwap {
    type Err = SwapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<&[u8]> for EncodedSwap {
    type Error = SwapError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; ENCODED_LEN] = slice
            .try_into()
            .map_err(|_| SwapError::InvalidEncodingLength(2 + slice.len() * 2))?;
        Ok(Self(arr))
    }
}
