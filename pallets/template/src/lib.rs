//! # Template Pallet
//!
//! A minimal pallet holding one global value and one number per account.
//!
//! - `do_something` stores a value and emits `SomethingStored`
//! - `cause_error` increments the stored value, failing when unset or on overflow
//! - `put_number` / `delete_number` manage the caller's own number

#![cfg_attr(not(feature = "std"), no_std)]

pub use pallet::*;

#[cfg(test)]
mod mock;

#[cfg(test)]
mod tests;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

#[frame_support::pallet]
pub mod pallet {
    use frame_support::pallet_prelude::*;
    use frame_system::pallet_prelude::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        /// The overarching event type
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;
    }

    #[pallet::pallet]
    pub struct Pallet<T>(_);

    #[pallet::storage]
    #[pallet::getter(fn something)]
    pub type Something<T> = StorageValue<_, u32>;

    #[pallet::storage]
    #[pallet::getter(fn number)]
    pub type Number<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u32, ValueQuery>;

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Initial content of `Something`
        pub genesis_value: u32,
        #[serde(skip)]
        pub _phantom: core::marker::PhantomData<T>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            Something::<T>::put(self.genesis_value);
        }
    }

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// A value was stored by `who`
        SomethingStored { something: u32, who: T::AccountId },
        /// `who` deleted their number
        SomethingDeleted { who: T::AccountId },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// `Something` has not been set
        NoneValue,
        /// Incrementing `Something` overflowed
        StorageOverflow,
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        #[pallet::call_index(0)]
        #[pallet::weight(Weight::from_parts(10_000, 0) + T::DbWeight::get().writes(1))]
        pub fn do_something(origin: OriginFor<T>, something: u32) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Something::<T>::put(something);

            Self::deposit_event(Event::SomethingStored { something, who });
            Ok(())
        }

        #[pallet::call_index(1)]
        #[pallet::weight(Weight::from_parts(10_000, 0) + T::DbWeight::get().writes(1))]
        pub fn put_number(origin: OriginFor<T>, number: u32) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Number::<T>::insert(&who, number);

            Self::deposit_event(Event::SomethingStored { something: number, who });
            Ok(())
        }

        #[pallet::call_index(2)]
        #[pallet::weight(Weight::from_parts(10_000, 0) + T::DbWeight::get().writes(1))]
        pub fn delete_number(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Number::<T>::remove(&who);

            Self::deposit_event(Event::SomethingDeleted { who });
            Ok(())
        }

        /// Increment `Something`, failing if it is unset or would overflow.
        #[pallet::call_index(3)]
        #[pallet::weight(Weight::from_parts(10_000, 0) + T::DbWeight::get().reads_writes(1, 1))]
        pub fn cause_error(origin: OriginFor<T>) -> DispatchResult {
            let _who = ensure_signed(origin)?;

            let old = Something::<T>::get().ok_or(Error::<T>::NoneValue)?;
            let new = old.checked_add(1).ok_or(Error::<T>::StorageOverflow)?;
            Something::<T>::put(new);
            Ok(())
        }
    }

    impl<T: Config> Pallet<T> {
        /// Overwrite `Something` without an origin check, for use by other pallets.
        pub fn update_storage(value: u32) -> DispatchResult {
            Something::<T>::put(value);
            Ok(())
        }
    }
}

/// Arithmetic hook other pallets can depend on without knowing this pallet's config.
pub trait DoSomething {
    fn increase_value(value: u32) -> u32;
}

impl<T: Config> DoSomething for Pallet<T> {
    fn increase_value(value: u32) -> u32 {
        value.saturating_add(5)
    }
}
