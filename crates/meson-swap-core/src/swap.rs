//! SwapRecord: a validated, immutable cross-chain swap intent.
//!
//! A record is built either from [`SwapInput`] or by decoding its 32-byte
//! canonical form. Both paths run the same validation. Once built, a record
//! never changes; a different swap needs a new record.

use alloy_primitives::U256;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::canonical::{decode_fields, encode_swap};
use crate::error::SwapError;
use crate::quantity::Quantity;
use crate::types::{ChainId, EncodedSwap, Salt};
use crate::validation;

/// The current swap protocol version.
pub const PROTOCOL_VERSION: u8 = 1;

/// The service fee is `amount / SERVICE_FEE_DIVISOR` (0.1%).
pub const SERVICE_FEE_DIVISOR: u64 = 1000;

/// Configuration for building swap records.
#[derive(Debug, Clone)]
pub struct SwapConfig {
    /// Version stamped on records whose input does not carry one.
    pub default_version: u8,
}

impl Default for SwapConfig {
    fn default() -> Self {
        Self {
            default_version: PROTOCOL_VERSION,
        }
    }
}

/// Construction input for a [`SwapRecord`].
///
/// Fields that the protocol treats as required are still optional here so
/// that a missing value is reported as a validation error instead of being
/// unrepresentable. Deserializes from the camelCase JSON used on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapInput {
    #[serde(default)]
    pub version: Option<u8>,
    pub amount: Quantity,
    /// Salt prefix, `0x` followed by at most 20 hex digits.
    #[serde(default)]
    pub salt: Option<String>,
    #[serde(default)]
    pub fee: Option<Quantity>,
    #[serde(default)]
    pub expire_ts: Option<u64>,
    #[serde(default)]
    pub in_chain: Option<ChainId>,
    #[serde(default)]
    pub in_token: Option<u8>,
    #[serde(default)]
    pub out_chain: Option<ChainId>,
    #[serde(default)]
    pub out_token: Option<u8>,
}

/// A validated swap with a lazily cached canonical encoding.
#[derive(Debug, Clone)]
pub struct SwapRecord {
    version: u8,
    amount: U256,
    salt: Salt,
    fee: U256,
    expire_ts: u64,
    in_chain: ChainId,
    in_token: u8,
    out_chain: ChainId,
    out_token: u8,
    encoded: OnceLock<EncodedSwap>,
}

impl SwapRecord {
    /// Validate `input` and build a record, drawing salt padding from the
    /// thread-local CSPRNG.
    pub fn new(input: SwapInput) -> Result<Self, SwapError> {
        Self::with_config(input, &SwapConfig::default(), &mut rand::thread_rng())
    }

    /// Like [`SwapRecord::new`] with an explicit random source.
    pub fn with_rng<R>(input: SwapInput, rng: &mut R) -> Result<Self, SwapError>
    where
        R: RngCore + CryptoRng,
    {
        Self::with_config(input, &SwapConfig::default(), rng)
    }

    /// Validate `input` and build a record.
    pub fn with_config<R>(input: SwapInput, config: &SwapConfig, rng: &mut R) -> Result<Self, SwapError>
    where
        R: RngCore + CryptoRng,
    {
        Self::assemble(input, config, rng, OnceLock::new())
    }

    fn assemble<R>(
        input: SwapInput,
        config: &SwapConfig,
        rng: &mut R,
        encoded: OnceLock<EncodedSwap>,
    ) -> Result<Self, SwapError>
    where
        R: RngCore + CryptoRng,
    {
        let fields = validation::check(&input)?;
        let version = input.version.unwrap_or(config.default_version);
        let salt = Salt::normalize(input.salt.as_deref(), rng)?;

        Ok(Self {
            version,
            amount: fields.amount,
            salt,
            fee: fields.fee,
            expire_ts: fields.expire_ts,
            in_chain: fields.in_chain,
            in_token: fields.in_token,
            out_chain: fields.out_chain,
            out_token: fields.out_token,
            encoded,
        })
    }

    /// Decode a `0x`-prefixed, 66-character encoded swap.
    pub fn decode(encoded: &str) -> Result<Self, SwapError> {
        let encoded = EncodedSwap::from_hex(encoded).map_err(|e| {
            tracing::debug!(error = %e, "rejected encoded swap");
            e
        })?;
        Self::from_encoded(&encoded)
    }

    /// Decode an encoded swap given as a 256-bit integer.
    pub fn decode_uint(encoded: U256) -> Result<Self, SwapError> {
        Self::from_encoded(&EncodedSwap::from_uint(encoded))
    }

    /// Decode canonical bytes. Business rules are checked again.
    pub fn from_encoded(encoded: &EncodedSwap) -> Result<Self, SwapError> {
        let input = decode_fields(encoded);
        // The salt is complete, so no randomness is consumed.
        Self::assemble(
            input,
            &SwapConfig::default(),
            &mut rand::thread_rng(),
            OnceLock::from(*encoded),
        )
        .map_err(|e| {
            tracing::debug!(error = %e, encoded = %encoded, "encoded swap failed validation");
            e
        })
    }

    pub fn version(&self) -> u8 {
        self.version
    }

    pub fn amount(&self) -> U256 {
        self.amount
    }

    pub fn salt(&self) -> &Salt {
        &self.salt
    }

    pub fn fee(&self) -> U256 {
        self.fee
    }

    pub fn expire_ts(&self) -> u64 {
        self.expire_ts
    }

    pub fn in_chain(&self) -> ChainId {
        self.in_chain
    }

    pub fn in_token(&self) -> u8 {
        self.in_token
    }

    pub fn out_chain(&self) -> ChainId {
        self.out_chain
    }

    pub fn out_token(&self) -> u8 {
        self.out_token
    }

    /// The canonical 32-byte encoding, computed on first access.
    pub fn encoded(&self) -> &EncodedSwap {
        self.encoded.get_or_init(|| encode_swap(self))
    }

    /// The canonical encoding as `0x` followed by 64 hex digits.
    pub fn encoded_hex(&self) -> String {
        self.encoded().to_hex()
    }

    /// The salt marks this swap as predating service fees.
    pub fn is_deprecated_encoding(&self) -> bool {
        self.salt.is_deprecated_encoding()
    }

    /// The salt requests a service fee waiver.
    ///
    /// Has no effect on deprecated encodings, which never pay a service fee.
    pub fn will_waive_fee(&self) -> bool {
        self.salt.will_waive_fee()
    }

    /// Fee charged by the protocol: 0.1% of the amount, rounded down.
    pub fn service_fee(&self) -> U256 {
        if self.is_deprecated_encoding() || self.will_waive_fee() {
            return U256::ZERO;
        }
        self.amount / U256::from(SERVICE_FEE_DIVISOR)
    }

    #[deprecated(note = "use `service_fee`")]
    pub fn platform_fee(&self) -> U256 {
        self.service_fee()
    }

    /// Service fee plus the relayer fee.
    pub fn total_fee(&self) -> U256 {
        self.service_fee() + self.fee
    }

    /// Export as a plain object.
    pub fn to_object(&self) -> SwapObject {
        SwapObject {
            encoded: self.encoded_hex(),
            version: self.version,
            amount: plain_u64(self.amount),
            salt: self.salt.to_hex(),
            fee: plain_u64(self.fee),
            expire_ts: self.expire_ts,
            in_chain: self.in_chain,
            in_token: self.in_token,
            out_chain: self.out_chain,
            out_token: self.out_token,
        }
    }
}

/// Amounts and fees are bounded to 40 bits at construction, so they always
/// fit a `u64` and, below 2^53, a JSON number.
fn plain_u64(value: U256) -> u64 {
    value.as_limbs()[0]
}

impl PartialEq for SwapRecord {
    fn eq(&self, other: &Self) -> bool {
        self.version == other.version
            && self.amount == other.amount
            && self.salt == other.salt
            && self.fee == other.fee
            && self.expire_ts == other.expire_ts
            && self.in_chain == other.in_chain
            && self.in_token == other.in_token
            && self.out_chain == other.out_chain
            && self.out_token == other.out_token
    }
}

impl Eq for SwapRecord {}

impl std::str::FromStr for SwapRecord {
    type Err = SwapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

/// Plain export of a [`SwapRecord`], serialized with camelCase keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapObject {
    pub encoded: String,
    pub version: u8,
    pub amount: u64,
    pub salt: String,
    pub fee: u64,
    pub expire_ts: u64,
    pub in_chain: ChainId,
    pub in_token: u8,
    pub out_chain: ChainId,
    pub out_token: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn input(amount: u64, fee: u64, salt: Option<&str>) -> SwapInput {
        SwapInput {
            version: None,
            amount: Quantity::from(amount),
            salt: salt.map(String::from),
            fee: Some(Quantity::from(fee)),
            expire_ts: Some(1_700_000_000),
            in_chain: Some(ChainId::from(0x003c)),
            in_token: Some(2),
            out_chain: Some(ChainId::from(0x00c3)),
            out_token: Some(1),
        }
    }

    fn build(amount: u64, fee: u64, salt: Option<&str>) -> SwapRecord {
        SwapRecord::with_rng(input(amount, fee, salt), &mut StdRng::seed_from_u64(42)).unwrap()
    }

    #[test]
    fn test_default_version() {
        assert_eq!(build(5000, 0, None).version(), PROTOCOL_VERSION);

        let config = SwapConfig { default_version: 2 };
        let record =
            SwapRecord::with_config(input(5000, 0, None), &config, &mut StdRng::seed_from_u64(1))
                .unwrap();
        assert_eq!(record.version(), 2);

        let explicit = SwapInput {
            version: Some(0),
            ..input(5000, 0, None)
        };
        assert_eq!(SwapRecord::new(explicit).unwrap().version(), 0);
    }

    #[test]
    fn test_encoded_is_cached() {
        let record = build(5000, 10, Some("0x01027"));
        let first = record.encoded() as *const EncodedSwap;
        let second = record.encoded() as *const EncodedSwap;
        assert_eq!(first, second);
        assert_eq!(record.encoded_hex().len(), 66);
    }

    #[test]
    fn test_known_encoding() {
        let record = build(5000, 10, Some("0x0102200000000000abcd"));
        assert_eq!(
            record.encoded_hex(),
            "0x01000000138801022000000000\
             00abcd000000000a006553f10000c301003c02"
        );
    }

    #[test]
    fn test_decode_roundtrip() {
        let record = build(123_456, 7, Some("0xc0ffee"));
        let decoded = SwapRecord::decode(&record.encoded_hex()).unwrap();
        assert_eq!(decoded, record);
        assert_eq!(decoded.to_object(), record.to_object());
    }

    #[test]
    fn test_decode_uint() {
        let record = build(9, 0, Some("0x0102"));
        let decoded = SwapRecord::decode_uint(record.encoded().to_uint()).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_decode_revalidates() {
        let mut bytes = *build(5000, 0, None).encoded().as_bytes();
        bytes[1..6].fill(0);
        assert_eq!(
            SwapRecord::from_encoded(&EncodedSwap(bytes)),
            Err(SwapError::AmountNotPositive)
        );

        let mut bytes = *build(5000, 0, None).encoded().as_bytes();
        bytes[21..26].fill(0);
        assert_eq!(
            SwapRecord::from_encoded(&EncodedSwap(bytes)),
            Err(SwapError::MissingExpireTs)
        );
    }

    #[test]
    fn test_decode_length_guard() {
        let hex = build(5000, 0, None).encoded_hex();
        assert_eq!(
            SwapRecord::decode(&hex[..65]),
            Err(SwapError::InvalidEncodingLength(65))
        );
    }

    #[test]
    fn test_deprecated_salt_has_no_service_fee() {
        let record = build(1_000_000, 3, Some("0x0000"));
        assert!(record.is_deprecated_encoding());
        assert_eq!(record.service_fee(), U256::ZERO);
        assert_eq!(record.total_fee(), U256::from(3u64));
    }

    #[test]
    fn test_waived_service_fee() {
        let record = build(5000, 10, Some("0x710120"));
        assert!(!record.is_deprecated_encoding());
        assert!(record.will_waive_fee());
        assert_eq!(record.service_fee(), U256::ZERO);
        assert_eq!(record.total_fee(), U256::from(10u64));
    }

    #[test]
    fn test_charged_service_fee() {
        let record = build(5000, 10, Some("0x210270"));
        assert!(!record.is_deprecated_encoding());
        assert!(!record.will_waive_fee());
        assert_eq!(record.service_fee(), U256::from(5u64));
        assert_eq!(record.total_fee(), U256::from(15u64));

        let record = build(999, 0, Some("0x210270"));
        assert_eq!(record.service_fee(), U256::ZERO);
    }

    #[test]
    fn test_flags_follow_leading_salt_byte() {
        let record = build(5000, 10, Some("0xff01200000000000abcd"));
        assert!(record.is_deprecated_encoding());
        assert_eq!(record.service_fee(), U256::ZERO);
        assert_eq!(record.total_fee(), U256::from(10u64));

        let record = build(5000, 10, Some("0x00ab200000000000abcd"));
        assert!(record.is_deprecated_encoding());
        assert_eq!(record.service_fee(), U256::ZERO);

        let record = build(5000, 10, Some("0x7101200000000000abcd"));
        assert!(!record.is_deprecated_encoding());
        assert!(record.will_waive_fee());
        assert_eq!(record.service_fee(), U256::ZERO);
        assert_eq!(record.total_fee(), U256::from(10u64));
    }

    #[test]
    fn test_decoded_record_caches_input_bytes() {
        let source = build(5000, 10, Some("0x0102200000000000abcd"));
        let encoded = *source.encoded();
        let decoded = SwapRecord::from_encoded(&encoded).unwrap();
        assert_eq!(decoded.encoded(), &encoded);
        assert_eq!(decoded.encoded_hex(), source.encoded_hex());
    }

    #[test]
    #[allow(deprecated)]
    fn test_platform_fee_alias() {
        let record = build(5000, 10, Some("0x210270"));
        assert_eq!(record.platform_fee(), record.service_fee());
    }

    #[test]
    fn test_to_object_json() {
        let record = build(5000, 10, Some("0x0102200000000000abcd"));
        let json = serde_json::to_value(record.to_object()).unwrap();
        assert_eq!(json["amount"], 5000);
        assert_eq!(json["fee"], 10);
        assert_eq!(json["expireTs"], 1_700_000_000u64);
        assert_eq!(json["inChain"], "0x003c");
        assert_eq!(json["outChain"], "0x00c3");
        assert_eq!(json["inToken"], 2);
        assert_eq!(json["outToken"], 1);
        assert_eq!(json["salt"], "0x0102200000000000abcd");
        assert_eq!(json["encoded"], record.encoded_hex());
    }

    #[test]
    fn test_input_from_json() {
        let input: SwapInput = serde_json::from_str(
            r#"{
                "amount": "5000",
                "fee": 10,
                "salt": "0x0102",
                "expireTs": 1700000000,
                "inChain": "0x003c",
                "inToken": 2,
                "outChain": "0x00c3",
                "outToken": 1
            }"#,
        )
        .unwrap();
        let record = SwapRecord::new(input).unwrap();
        assert_eq!(record.amount(), U256::from(5000u64));
        assert_eq!(record.in_chain(), ChainId::from(0x003c));
    }

    #[test]
    fn test_missing_json_fields_surface_as_validation_errors() {
        let input: SwapInput = serde_json::from_str(r#"{"amount": 5, "expireTs": 1}"#).unwrap();
        assert_eq!(SwapRecord::new(input).unwrap_err(), SwapError::MissingInChain);
    }
}
