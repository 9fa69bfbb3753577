//! Golden test vectors for deterministic verification.
//!
//! Every vector carries a full 10-byte salt, so no randomness is involved and
//! the encoding must match byte for byte in every implementation.

use meson_swap_core::{ChainId, Quantity, SwapInput, SwapRecord, U256, UINT40_MAX};

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Explicit version, or `None` for the protocol default.
    pub version: Option<u8>,
    pub amount: u64,
    pub fee: u64,
    /// Full salt, `0x` + 20 hex digits.
    pub salt: &'static str,
    pub expire_ts: u64,
    pub in_chain: u16,
    pub in_token: u8,
    pub out_chain: u16,
    pub out_token: u8,
    /// Expected encoding, `0x` + 64 hex digits.
    pub expected_encoded: &'static str,
    pub expected_deprecated: bool,
    pub expected_waive_fee: bool,
    pub expected_service_fee: u64,
    pub expected_total_fee: u64,
}

impl GoldenVector {
    /// Construction input described by this vector.
    pub fn input(&self) -> SwapInput {
        SwapInput {
            version: self.version,
            amount: Quantity::from(self.amount),
            salt: Some(self.salt.to_string()),
            fee: Some(Quantity::from(self.fee)),
            expire_ts: Some(self.expire_ts),
            in_chain: Some(ChainId::from(self.in_chain)),
            in_token: Some(self.in_token),
            out_chain: Some(ChainId::from(self.out_chain)),
            out_token: Some(self.out_token),
        }
    }
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "service fee charged",
            version: None,
            amount: 5000,
            fee: 10,
            salt: "0x0102200000000000abcd",
            expire_ts: 1_700_000_000,
            in_chain: 0x003c,
            in_token: 2,
            out_chain: 0x00c3,
            out_token: 1,
            expected_encoded: "0x0100000013880102200000000000abcd000000000a006553f10000c301003c02",
            expected_deprecated: false,
            expected_waive_fee: false,
            expected_service_fee: 5,
            expected_total_fee: 15,
        },
        GoldenVector {
            name: "service fee waived",
            version: None,
            amount: 1_000_000,
            fee: 0,
            salt: "0x7102700000000000beef",
            expire_ts: 1_735_689_600,
            in_chain: 0x0001,
            in_token: 0,
            out_chain: 0x00ca,
            out_token: 3,
            expected_encoded: "0x0100000f42407102700000000000beef0000000000006774858000ca03000100",
            expected_deprecated: false,
            expected_waive_fee: true,
            expected_service_fee: 0,
            expected_total_fee: 0,
        },
        GoldenVector {
            name: "deprecated zero prefix",
            version: None,
            amount: 2_500_000,
            fee: 250,
            salt: "0x0000f1e2d3c4b5a69788",
            expire_ts: 1_800_000_000,
            in_chain: 0x2328,
            in_token: 17,
            out_chain: 0x0a0a,
            out_token: 255,
            expected_encoded: "0x0100002625a00000f1e2d3c4b5a6978800000000fa006b49d2000a0aff232811",
            expected_deprecated: true,
            expected_waive_fee: false,
            expected_service_fee: 0,
            expected_total_fee: 250,
        },
        GoldenVector {
            name: "deprecated ff prefix at field maxima",
            version: Some(0),
            amount: UINT40_MAX,
            fee: UINT40_MAX,
            salt: "0xffff00000000000000ff",
            expire_ts: UINT40_MAX,
            in_chain: 0xffff,
            in_token: 255,
            out_chain: 0x0000,
            out_token: 0,
            expected_encoded: "0x00ffffffffffffff00000000000000ffffffffffffffffffffff000000ffffff",
            expected_deprecated: true,
            expected_waive_fee: true,
            expected_service_fee: 0,
            expected_total_fee: UINT40_MAX,
        },
        GoldenVector {
            name: "waiver bit in leading nibble",
            version: None,
            amount: 5000,
            fee: 10,
            salt: "0x7101200000000000abcd",
            expire_ts: 1_700_000_000,
            in_chain: 0x003c,
            in_token: 2,
            out_chain: 0x00c3,
            out_token: 1,
            expected_encoded: "0x0100000013887101200000000000abcd000000000a006553f10000c301003c02",
            expected_deprecated: false,
            expected_waive_fee: true,
            expected_service_fee: 0,
            expected_total_fee: 10,
        },
        GoldenVector {
            name: "deprecated single zero byte",
            version: None,
            amount: 5000,
            fee: 10,
            salt: "0x00ab200000000000abcd",
            expire_ts: 1_700_000_000,
            in_chain: 0x003c,
            in_token: 2,
            out_chain: 0x00c3,
            out_token: 1,
            expected_encoded: "0x01000000138800ab200000000000abcd000000000a006553f10000c301003c02",
            expected_deprecated: true,
            expected_waive_fee: false,
            expected_service_fee: 0,
            expected_total_fee: 10,
        },
        GoldenVector {
            name: "deprecated single ff byte",
            version: None,
            amount: 5000,
            fee: 10,
            salt: "0xff01200000000000abcd",
            expire_ts: 1_700_000_000,
            in_chain: 0x003c,
            in_token: 2,
            out_chain: 0x00c3,
            out_token: 1,
            expected_encoded: "0x010000001388ff01200000000000abcd000000000a006553f10000c301003c02",
            expected_deprecated: true,
            expected_waive_fee: true,
            expected_service_fee: 0,
            expected_total_fee: 10,
        },
    ]
}

/// Build the record described by a golden vector.
pub fn record_from_vector(vector: &GoldenVector) -> SwapRecord {
    SwapRecord::new(vector.input()).expect("golden vectors are valid input")
}

/// Check every vector against the codec.
///
/// Returns `(name, matches, actual_encoding)` per vector.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let record = record_from_vector(v);
            let hex = record.encoded_hex();
            let matches = hex == v.expected_encoded
                && record.is_deprecated_encoding() == v.expected_deprecated
                && record.will_waive_fee() == v.expected_waive_fee
                && record.service_fee() == U256::from(v.expected_service_fee)
                && record.total_fee() == U256::from(v.expected_total_fee);
            (v.name.to_string(), matches, hex)
        })
        .collect()
}
