//! Test fixtures and helpers.
//!
//! A fixture owns a seeded RNG so that salt padding is reproducible across
//! test runs.

use rand::rngs::StdRng;
use rand::SeedableRng;

use meson_swap_core::{ChainId, Quantity, SwapError, SwapInput, SwapRecord};

/// A fixture with a deterministic random source and a default route.
pub struct SwapFixture {
    rng: StdRng,
    pub in_chain: ChainId,
    pub in_token: u8,
    pub out_chain: ChainId,
    pub out_token: u8,
    pub expire_ts: u64,
}

impl SwapFixture {
    /// Create a fixture seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create a fixture with a deterministic seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            in_chain: ChainId::from(0x003c),
            in_token: 1,
            out_chain: ChainId::from(0x00c3),
            out_token: 2,
            expire_ts: 1_700_000_000,
        }
    }

    /// Input on the fixture's route.
    pub fn input(&self, amount: u64, fee: u64, salt: Option<&str>) -> SwapInput {
        SwapInput {
            version: None,
            amount: Quantity::from(amount),
            salt: salt.map(String::from),
            fee: Some(Quantity::from(fee)),
            expire_ts: Some(self.expire_ts),
            in_chain: Some(self.in_chain),
            in_token: Some(self.in_token),
            out_chain: Some(self.out_chain),
            out_token: Some(self.out_token),
        }
    }

    /// Build arbitrary input with the fixture's RNG.
    pub fn build(&mut self, input: SwapInput) -> Result<SwapRecord, SwapError> {
        SwapRecord::with_rng(input, &mut self.rng)
    }

    /// Build a swap on the fixture's route.
    pub fn make_swap(&mut self, amount: u64, fee: u64, salt: Option<&str>) -> SwapRecord {
        let input = self.input(amount, fee, salt);
        self.build(input).expect("fixture input is valid")
    }
}

impl Default for SwapFixture {
    fn default() -> Self {
        Self::new()
    }
}
