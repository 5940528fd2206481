//! Benchmarking for pallet-kitties

#![cfg(feature = "runtime-benchmarks")]

use super::*;
use crate::Pallet as Kitties;
use frame_benchmarking::v2::*;
use frame_support::traits::Get;
use frame_system::RawOrigin;
use sp_std::vec;

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn create_kitty() {
        let caller: T::AccountId = whitelisted_caller();
        let dna = vec![7u8; T::MaxDnaLength::get() as usize];

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), dna, 123);

        assert_eq!(KittyCount::<T>::get(), 1);
        assert_eq!(KittiesOwned::<T>::get(&caller).len(), 1);
    }

    #[benchmark]
    fn transfer_kitty() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        let dna = vec![7u8; T::MaxDnaLength::get() as usize];

        Kitties::<T>::create_kitty(RawOrigin::Signed(caller.clone()).into(), dna.clone(), 123)
            .unwrap();

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), recipient.clone(), dna.clone());

        assert_eq!(Kitties::<T>::kitty_by_dna(&dna).unwrap().owner, recipient);
    }

    #[benchmark]
    fn set_price() {
        let caller: T::AccountId = whitelisted_caller();
        let dna = vec![7u8; T::MaxDnaLength::get() as usize];

        Kitties::<T>::create_kitty(RawOrigin::Signed(caller.clone()).into(), dna.clone(), 123)
            .unwrap();

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), dna.clone(), 456);

        assert_eq!(Kitties::<T>::kitty_by_dna(&dna).unwrap().price, 456);
    }

    impl_benchmark_test_suite!(Kitties, crate::mock::new_test_ext(), crate::mock::Test);
}
