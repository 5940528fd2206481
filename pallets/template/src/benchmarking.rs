//! Benchmarking setup for pallet-template

use super::*;
use frame_benchmarking::{benchmarks, whitelisted_caller};
use frame_system::RawOrigin;

#[allow(unused)]
use crate::Pallet as Template;

benchmarks! {
	do_something {
		let s in 0 .. 100;
		let caller: T::AccountId = whitelisted_caller();
	}: _(RawOrigin::Signed(caller), s)
	verify {
		assert_eq!(Something::<T>::get(), Some(s));
	}

	cause_error {
		let caller: T::AccountId = whitelisted_caller();
		Something::<T>::put(1u32);
	}: _(RawOrigin::Signed(caller))
	verify {
		assert_eq!(Something::<T>::get(), Some(2));
	}

	put_number {
		let caller: T::AccountId = whitelisted_caller();
	}: _(RawOrigin::Signed(caller.clone()), 42)
	verify {
		assert_eq!(Number::<T>::get(&caller), 42);
	}

	delete_number {
		let caller: T::AccountId = whitelisted_caller();
		Number::<T>::insert(&caller, 42);
	}: _(RawOrigin::Signed(caller.clone()))
	verify {
		assert!(!Number::<T>::contains_key(&caller));
	}

	impl_benchmark_test_suite!(Template, crate::mock::new_test_ext(), crate::mock::Test);
}
