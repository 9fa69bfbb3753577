//! Business-rule validation for swap construction.
//!
//! Checks run in a fixed order and stop at the first failure, so a given bad
//! input always yields the same error.

use alloy_primitives::U256;

use crate::error::SwapError;
use crate::quantity::Parsed;
use crate::swap::SwapInput;
use crate::types::{ChainId, UINT40_MAX};

/// Fields that passed validation, narrowed to their wire types.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ValidFields {
    pub amount: U256,
    pub fee: U256,
    pub expire_ts: u64,
    pub in_chain: ChainId,
    pub in_token: u8,
    pub out_chain: ChainId,
    pub out_token: u8,
}

/// Validate construction input without building a record.
pub fn validate_swap_input(input: &SwapInput) -> Result<(), SwapError> {
    check(input).map(|_| ())
}

pub(crate) fn check(input: &SwapInput) -> Result<ValidFields, SwapError> {
    // Parsing happens before any range check.
    let amount = input.amount.parse().ok_or(SwapError::InvalidAmount)?;
    let fee = match &input.fee {
        Some(q) => q.parse().ok_or(SwapError::InvalidFee)?,
        None => Parsed::ZERO,
    };

    // 1. amount > 0
    if !amount.is_positive() {
        return Err(SwapError::AmountNotPositive);
    }

    // 2. fee >= 0
    if fee.is_negative() {
        return Err(SwapError::FeeNegative);
    }

    // 3. expireTs present and non-zero
    let expire_ts = match input.expire_ts {
        Some(ts) if ts != 0 => ts,
        _ => return Err(SwapError::MissingExpireTs),
    };

    // 4..7. chains and tokens
    let in_chain = input.in_chain.ok_or(SwapError::MissingInChain)?;
    let in_token = input.in_token.ok_or(SwapError::InvalidInToken)?;
    let out_chain = input.out_chain.ok_or(SwapError::MissingOutChain)?;
    let out_token = input.out_token.ok_or(SwapError::InvalidOutToken)?;

    // Wire widths
    let uint40_max = U256::from(UINT40_MAX);
    if amount.magnitude > uint40_max {
        return Err(SwapError::AmountOverflow);
    }
    if fee.magnitude > uint40_max {
        return Err(SwapError::FeeOverflow);
    }
    if expire_ts > UINT40_MAX {
        return Err(SwapError::ExpireTsOverflow);
    }

    Ok(ValidFields {
        amount: amount.magnitude,
        fee: fee.magnitude,
        expire_ts,
        in_chain,
        in_token,
        out_chain,
        out_token,
    })
}
