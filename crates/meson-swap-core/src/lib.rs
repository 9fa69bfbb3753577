//! # Meson Swap Core
//!
//! The canonical 32-byte encoding of a cross-chain swap, with the validation
//! and fee rules tied to it.
//!
//! This crate contains no I/O and no networking. It is pure computation over
//! fixed-width byte buffers.
//!
//! ## Key Types
//!
//! - [`SwapRecord`] - A validated, immutable swap with a cached encoding
//! - [`SwapInput`] - Construction input, also deserializable from JSON
//! - [`EncodedSwap`] - The 32-byte wire form
//! - [`Salt`] - 10-byte nonce carrying the deprecated and fee-waiver flags
//! - [`ChainId`] - 2-byte chain identifier
//!
//! ## Encoding
//!
//! Fields are packed big-endian with no delimiters. See [`canonical`] for the
//! byte offsets.
//!
//! ```rust
//! use meson_swap_core::{ChainId, Quantity, SwapInput, SwapRecord};
//!
//! let swap = SwapRecord::new(SwapInput {
//!     version: None,
//!     amount: Quantity::from(5_000_000u64),
//!     salt: Some("0x0102".into()),
//!     fee: None,
//!     expire_ts: Some(1_700_000_000),
//!     in_chain: Some(ChainId::from(0x003c)),
//!     in_token: Some(1),
//!     out_chain: Some(ChainId::from(0x00c3)),
//!     out_token: Some(2),
//! })
//! .unwrap();
//!
//! let encoded = swap.encoded_hex();
//! assert_eq!(encoded.len(), 66);
//! assert_eq!(SwapRecord::decode(&encoded).unwrap(), swap);
//! ```

pub mod canonical;
pub mod error;
pub mod quantity;
pub mod salt;
pub mod signature;
pub mod swap;
pub mod types;
pub mod validation;

pub use canonical::{decode_fields, encode_swap};
pub use error::{Result, SwapError};
pub use quantity::Quantity;
pub use signature::{split_signature, SignatureParts};
pub use swap::{SwapConfig, SwapInput, SwapObject, SwapRecord, PROTOCOL_VERSION, SERVICE_FEE_DIVISOR};
pub use types::{ChainId, EncodedSwap, Salt, UINT40_MAX};
pub use validation::validate_swap_input;

pub use alloy_primitives::U256;
