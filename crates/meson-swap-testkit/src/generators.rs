//! Proptest generators for property-based testing.

use proptest::prelude::*;

use meson_swap_core::{ChainId, Quantity, SwapInput, UINT40_MAX};

/// A valid amount: positive and within the uint40 field.
pub fn amount() -> impl Strategy<Value = u64> {
    1u64..=UINT40_MAX
}

/// A valid relayer fee.
pub fn fee() -> impl Strategy<Value = u64> {
    0u64..=UINT40_MAX
}

/// A valid expiry timestamp.
pub fn expire_ts() -> impl Strategy<Value = u64> {
    1u64..=UINT40_MAX
}

/// Any 2-byte chain id.
pub fn chain_id() -> impl Strategy<Value = ChainId> {
    any::<[u8; 2]>().prop_map(ChainId::from_bytes)
}

/// A salt prefix of 0 to 20 hex digits, including odd lengths.
pub fn salt_prefix() -> impl Strategy<Value = String> {
    "[0-9a-f]{0,20}".prop_map(|digits| format!("0x{digits}"))
}

/// Parameters for generating a valid swap.
#[derive(Debug, Clone)]
pub struct SwapParams {
    pub version: Option<u8>,
    pub amount: u64,
    pub fee: Option<u64>,
    pub salt: Option<String>,
    pub expire_ts: u64,
    pub in_chain: ChainId,
    pub in_token: u8,
    pub out_chain: ChainId,
    pub out_token: u8,
}

impl SwapParams {
    /// Construction input for these parameters.
    pub fn input(&self) -> SwapInput {
        SwapInput {
            version: self.version,
            amount: Quantity::from(self.amount),
            salt: self.salt.clone(),
            fee: self.fee.map(Quantity::from),
            expire_ts: Some(self.expire_ts),
            in_chain: Some(self.in_chain),
            in_token: Some(self.in_token),
            out_chain: Some(self.out_chain),
            out_token: Some(self.out_token),
        }
    }
}

impl Arbitrary for SwapParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            any::<Option<u8>>(),
            amount(),
            proptest::option::of(fee()),
            proptest::option::of(salt_prefix()),
            expire_ts(),
            chain_id(),
            any::<u8>(),
            chain_id(),
            any::<u8>(),
        )
            .prop_map(
                |(version, amount, fee, salt, expire_ts, in_chain, in_token, out_chain, out_token)| {
                    SwapParams {
                        version,
                        amount,
                        fee,
                        salt,
                        expire_ts,
                        in_chain,
                        in_token,
                        out_chain,
                        out_token,
                    }
                },
            )
            .boxed()
    }
}
