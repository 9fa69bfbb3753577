//! Splitting a 65-byte ECDSA signature into its components.
//!
//! Pure byte slicing: nothing here checks that the signature is valid.

use serde::Serialize;

use crate::error::SwapError;
use crate::types::strip_0x;

/// Length of a `0x`-prefixed 65-byte signature string.
pub const SIGNATURE_HEX_LEN: usize = 2 + 65 * 2;

/// The `r`, `s` and `v` components of a signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignatureParts {
    /// `0x` followed by 64 hex digits.
    pub r: String,
    /// `0x` followed by 64 hex digits.
    pub s: String,
    pub v: u8,
}

impl From<SignatureParts> for (String, String, u8) {
    fn from(parts: SignatureParts) -> Self {
        (parts.r, parts.s, parts.v)
    }
}

/// Split `0x || r (32 bytes) || s (32 bytes) || v (1 byte)`.
pub fn split_signature(signature: &str) -> Result<SignatureParts, SwapError> {
    if signature.len() != SIGNATURE_HEX_LEN {
        return Err(SwapError::InvalidSignatureLength(signature.len()));
    }
    let digits = strip_0x(signature).ok_or(SwapError::MissingSignaturePrefix)?;

    let mut bytes = [0u8; 65];
    hex::decode_to_slice(digits, &mut bytes).map_err(|_| SwapError::InvalidSignatureHex)?;

    Ok(SignatureParts {
        r: format!("0x{}", hex::encode(&bytes[..32])),
        s: format!("0x{}", hex::encode(&bytes[32..64])),
        v: bytes[64],
    })
}
