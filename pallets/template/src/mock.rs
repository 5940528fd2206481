use crate as pallet_template;
use frame_support::derive_impl;
use sp_runtime::BuildStorage;

type Block = frame_system::mocking::MockBlock<Test>;

pub const ALICE: u64 = 1;
pub const BOB: u64 = 2;

frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        TemplateModule: pallet_template,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type Block = Block;
}

impl pallet_template::Config for Test {
    type RuntimeEvent = RuntimeEvent;
}

pub fn new_test_ext() -> sp_io::TestExternalities {
    new_test_ext_with(None)
}

/// Externalities with `Something` seeded through the genesis config.
pub fn new_test_ext_with(genesis_value: Option<u32>) -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default()
        .build_storage()
        .unwrap();

    if let Some(genesis_value) = genesis_value {
        pallet_template::GenesisConfig::<Test> { genesis_value, ..Default::default() }
            .assimilate_storage(&mut t)
            .unwrap();
    }

    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| System::set_block_number(1));
    ext
}
