//! Error types for the swap codec.

use thiserror::Error;

/// Errors raised while constructing, decoding or splitting swap data.
///
/// Every variant is a local validation failure. None of them are retryable:
/// the caller has to fix the input and construct again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SwapError {
    #[error("invalid amount")]
    InvalidAmount,

    #[error("invalid fee")]
    InvalidFee,

    #[error("amount must be positive")]
    AmountNotPositive,

    #[error("fee must be non-negative")]
    FeeNegative,

    #[error("missing expireTs")]
    MissingExpireTs,

    #[error("missing inChain")]
    MissingInChain,

    #[error("invalid inToken")]
    InvalidInToken,

    #[error("missing outChain")]
    MissingOutChain,

    #[error("invalid outToken")]
    InvalidOutToken,

    #[error("amount exceeds the uint40 field")]
    AmountOverflow,

    #[error("fee exceeds the uint40 field")]
    FeeOverflow,

    #[error("expireTs exceeds the uint40 field")]
    ExpireTsOverflow,

    #[error("the given salt is invalid: {0}")]
    InvalidSalt(String),

    #[error("encoded swap should be a hex string of length 66, got {0}")]
    InvalidEncodingLength(usize),

    #[error("encoded swap is not valid hex")]
    InvalidEncodingHex,

    #[error("encoded swap should start with 0x")]
    MissingEncodingPrefix,

    #[error("invalid chain id: {0}")]
    InvalidChainId(String),

    #[error("signature should be a hex string of length 132, got {0}")]
    InvalidSignatureLength(usize),

    #[error("signature is not valid hex")]
    InvalidSignatureHex,

    #[error("signature should start with 0x")]
    MissingSignaturePrefix,
}

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, SwapError>;
