//! # Meson Swap Testkit
//!
//! Testing utilities for the Meson swap codec.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Fixed inputs with their expected encodings and fees
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Seeded builders for reproducible salts
//!
//! ## Golden Vectors
//!
//! ```rust
//! use meson_swap_testkit::vectors::{all_vectors, record_from_vector};
//!
//! for vector in all_vectors() {
//!     let record = record_from_vector(&vector);
//!     assert_eq!(record.encoded_hex(), vector.expected_encoded);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use meson_swap_core::SwapRecord;
//! use meson_swap_testkit::SwapParams;
//!
//! proptest! {
//!     #[test]
//!     fn encoding_is_fixed_length(params: SwapParams) {
//!         let record = SwapRecord::new(params.input()).unwrap();
//!         prop_assert_eq!(record.encoded_hex().len(), 66);
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::SwapFixture;
pub use generators::SwapParams;
pub use vectors::{all_vectors, record_from_vector, verify_all_vectors, GoldenVector};
