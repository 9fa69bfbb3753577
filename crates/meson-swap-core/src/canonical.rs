//! Canonical fixed-width encoding of a swap.
//!
//! The encoding is a tightly packed 32-byte value, equivalent to Solidity's
//! `abi.encodePacked` over the struct
//! `(uint8 version, uint40 amount, uint80 salt, uint40 fee, uint40 expireTs,
//! bytes2 outChain, uint8 outToken, bytes2 inChain, uint8 inToken)`.
//!
//! Every field is big-endian and zero-padded to its width. There are no
//! delimiters, so field offsets are fixed and must never move.

use alloy_primitives::U256;
use std::ops::Range;

use crate::quantity::Quantity;
use crate::swap::{SwapInput, SwapRecord};
use crate::types::{ChainId, EncodedSwap, Salt, ENCODED_LEN, SALT_LEN};

/// Byte ranges of each field inside the encoded swap.
pub mod layout {
    use std::ops::Range;

    pub const VERSION: Range<usize> = 0..1;
    pub const AMOUNT: Range<usize> = 1..6;
    pub const SALT: Range<usize> = 6..16;
    pub const FEE: Range<usize> = 16..21;
    pub const EXPIRE_TS: Range<usize> = 21..26;
    pub const OUT_CHAIN: Range<usize> = 26..28;
    pub const OUT_TOKEN: Range<usize> = 28..29;
    pub const IN_CHAIN: Range<usize> = 29..31;
    pub const IN_TOKEN: Range<usize> = 31..32;
}

/// Encode a swap to its canonical 32 bytes.
///
/// Infallible: the constructor already bounded every field to its width.
pub fn encode_swap(swap: &SwapRecord) -> EncodedSwap {
    let mut buf = [0u8; ENCODED_LEN];

    buf[layout::VERSION.start] = swap.version();
    put_u256(&mut buf, layout::AMOUNT, swap.amount());
    buf[layout::SALT].copy_from_slice(swap.salt().as_bytes());
    put_u256(&mut buf, layout::FEE, swap.fee());
    put_u64(&mut buf, layout::EXPIRE_TS, swap.expire_ts());
    buf[layout::OUT_CHAIN].copy_from_slice(swap.out_chain().as_bytes());
    buf[layout::OUT_TOKEN.start] = swap.out_token();
    buf[layout::IN_CHAIN].copy_from_slice(swap.in_chain().as_bytes());
    buf[layout::IN_TOKEN.start] = swap.in_token();

    EncodedSwap(buf)
}

/// Slice an encoded swap back into constructor input.
///
/// No business rules are checked here; the result is meant to be fed
/// through [`SwapRecord::with_config`] which re-validates it.
pub fn decode_fields(encoded: &EncodedSwap) -> SwapInput {
    let bytes = encoded.as_bytes();

    let mut salt = [0u8; SALT_LEN];
    salt.copy_from_slice(&bytes[layout::SALT]);

    SwapInput {
        version: Some(bytes[layout::VERSION.start]),
        amount: Quantity::Uint(read_u256(bytes, layout::AMOUNT)),
        salt: Some(Salt(salt).to_hex()),
        fee: Some(Quantity::Uint(read_u256(bytes, layout::FEE))),
        expire_ts: Some(read_u64(bytes, layout::EXPIRE_TS)),
        out_chain: Some(read_chain(bytes, layout::OUT_CHAIN)),
        out_token: Some(bytes[layout::OUT_TOKEN.start]),
        in_chain: Some(read_chain(bytes, layout::IN_CHAIN)),
        in_token: Some(bytes[layout::IN_TOKEN.start]),
    }
}

/// Write the low `range.len()` bytes of `value`, big-endian.
fn put_u256(buf: &mut [u8; ENCODED_LEN], range: Range<usize>, value: U256) {
    let be = value.to_be_bytes::<32>();
    let width = range.len();
    buf[range].copy_from_slice(&be[32 - width..]);
}

fn put_u64(buf: &mut [u8; ENCODED_LEN], range: Range<usize>, value: u64) {
    let be = value.to_be_bytes();
    let width = range.len();
    buf[range].copy_from_slice(&be[8 - width..]);
}

fn read_u256(bytes: &[u8; ENCODED_LEN], range: Range<usize>) -> U256 {
    U256::from_be_slice(&bytes[range])
}

fn read_u64(bytes: &[u8; ENCODED_LEN], range: Range<usize>) -> u64 {
    bytes[range]
        .iter()
        .fold(0u64, |acc, b| (acc << 8) | u64::from(*b))
}

fn read_chain(bytes: &[u8; ENCODED_LEN], range: Range<usize>) -> ChainId {
    let mut arr = [0u8; 2];
    arr.copy_from_slice(&bytes[range]);
    ChainId(arr)
}
