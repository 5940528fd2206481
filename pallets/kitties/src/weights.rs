//! Weights for pallet_kitties
//!
//! Placeholder values until benchmarked. Regenerate from `benchmarking.rs`
//! with the `runtime-benchmarks` feature before using them in a production
//! runtime.

#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(unused_parens)]
#![allow(unused_imports)]

use frame_support::{traits::Get, weights::{Weight, constants::RocksDbWeight}};
use core::marker::PhantomData;

pub trait WeightInfo {
    fn create_kitty() -> Weight;
    fn transfer_kitty() -> Weight;
    fn set_price() -> Weight;
}

/// Weights for pallet_kitties using the runtime's configured database weights.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    /// Storage: `Kitties::Kitties` (r:1 w:1)
    /// Storage: `Kitties::KittyCount` (r:1 w:1)
    /// Storage: `Kitties::KittiesOwned` (r:1 w:1)
    fn create_kitty() -> Weight {
        Weight::from_parts(18_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(3_u64))
            .saturating_add(T::DbWeight::get().writes(3_u64))
    }
    /// Storage: `Kitties::Kitties` (r:1 w:1)
    /// Storage: `Kitties::KittiesOwned` (r:2 w:2)
    fn transfer_kitty() -> Weight {
        Weight::from_parts(24_000_000, 6_196)
            .saturating_add(T::DbWeight::get().reads(3_u64))
            .saturating_add(T::DbWeight::get().writes(3_u64))
    }
    /// Storage: `Kitties::Kitties` (r:1 w:1)
    fn set_price() -> Weight {
        Weight::from_parts(12_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
}

// For backwards compatibility and tests
impl WeightInfo for () {
    fn create_kitty() -> Weight {
        Weight::from_parts(18_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(3_u64))
            .saturating_add(RocksDbWeight::get().writes(3_u64))
    }
    fn transfer_kitty() -> Weight {
        Weight::from_parts(24_000_000, 6_196)
            .saturating_add(RocksDbWeight::get().reads(3_u64))
            .saturating_add(RocksDbWeight::get().writes(3_u64))
    }
    fn set_price() -> Weight {
        Weight::from_parts(12_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
}
