//! Mock runtime for Kitties pallet tests

use crate as pallet_kitties;
use frame_support::{derive_impl, parameter_types};
use sp_runtime::BuildStorage;

type Block = frame_system::mocking::MockBlock<Test>;

// Test accounts
pub const ALICE: u64 = 1;
pub const BOB: u64 = 2;
pub const CHARLIE: u64 = 3;

frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        Kitties: pallet_kitties,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type Block = Block;
}

parameter_types! {
    pub const MaxDnaLength: u32 = 16;
    pub const MaxKittiesOwned: u32 = 3;
}

impl pallet_kitties::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type MaxDnaLength = MaxDnaLength;
    type MaxKittiesOwned = MaxKittiesOwned;
    type WeightInfo = ();
}

pub fn new_test_ext() -> sp_io::TestExternalities {
    let t = frame_system::GenesisConfig::<Test>::default()
        .build_storage()
        .unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| System::set_block_number(1));
    ext
}
