//! # Kitties Pallet
//!
//! Mint, price and trade collectible kitties identified by their DNA.
//!
//! ## Overview
//!
//! - Any signed account can create a kitty from a unique DNA sequence and an asking price
//! - A kitty's gender is derived from its DNA (even length is male, odd length is female)
//! - Owners can re-price and transfer their kitties
//! - Each account owns at most `MaxKittiesOwned` kitties
//!
//! ## Dispatchable Functions
//!
//! - `create_kitty` - register a new kitty owned by the caller
//! - `transfer_kitty` - hand a kitty over to another account
//! - `set_price` - change the asking price of an owned kitty

#![cfg_attr(not(feature = "std"), no_std)]

pub use pallet::*;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod weights;
pub use weights::WeightInfo;

const LOG_TARGET: &str = "runtime::kitties";

#[frame_support::pallet]
pub mod pallet {
    use super::{WeightInfo, LOG_TARGET};
    use frame_support::pallet_prelude::*;
    use frame_system::pallet_prelude::*;
    use sp_std::vec::Vec;

    /// DNA of a kitty, bounded by `MaxDnaLength`.
    pub type Dna<T> = BoundedVec<u8, <T as Config>::MaxDnaLength>;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        /// The overarching event type
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Maximum length of a kitty's DNA
        #[pallet::constant]
        type MaxDnaLength: Get<u32>;

        /// Maximum number of kitties a single account may own
        #[pallet::constant]
        type MaxKittiesOwned: Get<u32>;

        /// Weight information for extrinsics in this pallet
        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    pub struct Pallet<T>(_);

    #[derive(Clone, Copy, Encode, Decode, Eq, PartialEq, RuntimeDebug, TypeInfo, MaxEncodedLen, Default)]
    pub enum Gender {
        Male,
        #[default]
        Female,
    }

    impl Gender {
        /// Even-length DNA yields a male kitty, odd-length a female one.
        pub fn from_dna(dna: &[u8]) -> Self {
            if dna.len() % 2 == 0 {
                Gender::Male
            } else {
                Gender::Female
            }
        }
    }

    #[derive(
        CloneNoBound,
        PartialEqNoBound,
        EqNoBound,
        RuntimeDebugNoBound,
        Encode,
        Decode,
        TypeInfo,
        MaxEncodedLen,
    )]
    #[scale_info(skip_type_params(T))]
    pub struct Kitty<T: Config> {
        pub dna: Dna<T>,
        pub price: u32,
        pub gender: Gender,
        pub owner: T::AccountId,
    }

    // ==================== STORAGE ====================

    /// Number of kitties created so far
    #[pallet::storage]
    #[pallet::getter(fn kitty_count)]
    pub type KittyCount<T> = StorageValue<_, u64, ValueQuery>;

    /// Kitty details keyed by DNA
    #[pallet::storage]
    #[pallet::getter(fn kitties)]
    pub type Kitties<T: Config> = StorageMap<_, Blake2_128Concat, Dna<T>, Kitty<T>, OptionQuery>;

    /// DNA of every kitty an account owns
    #[pallet::storage]
    #[pallet::getter(fn kitties_owned)]
    pub type KittiesOwned<T: Config> = StorageMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        BoundedVec<Dna<T>, T::MaxKittiesOwned>,
        ValueQuery,
    >;

    // ==================== EVENTS ====================

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// A new kitty was created
        KittyCreated { dna: Dna<T>, owner: T::AccountId },
        /// A kitty changed hands
        KittyTransferred { dna: Dna<T>, from: T::AccountId, to: T::AccountId },
        /// The asking price of a kitty changed
        PriceSet { dna: Dna<T>, price: u32 },
    }

    // ==================== ERRORS ====================

    #[pallet::error]
    pub enum Error<T> {
        /// Price must be greater than zero
        PriceTooLow,
        /// A kitty with this DNA already exists
        AlreadyExisted,
        /// No kitty with this DNA exists
        NoneExisted,
        /// Caller does not own the kitty
        NotOwner,
        /// DNA exceeds `MaxDnaLength`
        DnaTooLong,
        /// Account already owns `MaxKittiesOwned` kitties
        TooManyOwned,
        /// Sender and recipient are the same account
        TransferToSelf,
        /// Kitty counter overflowed
        Overflow,
    }

    // ==================== CALLS ====================

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Create a kitty owned by the caller.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::create_kitty())]
        pub fn create_kitty(origin: OriginFor<T>, dna: Vec<u8>, price: u32) -> DispatchResult {
            let who = ensure_signed(origin)?;
            ensure!(price > 0, Error::<T>::PriceTooLow);

            let dna: Dna<T> = dna.try_into().map_err(|_| Error::<T>::DnaTooLong)?;
            ensure!(!Kitties::<T>::contains_key(&dna), Error::<T>::AlreadyExisted);

            let count = KittyCount::<T>::get().checked_add(1).ok_or(Error::<T>::Overflow)?;

            KittiesOwned::<T>::try_mutate(&who, |owned| {
                owned.try_push(dna.clone()).map_err(|_| Error::<T>::TooManyOwned)
            })?;

            let kitty = Kitty::<T> {
                gender: Gender::from_dna(&dna),
                dna: dna.clone(),
                price,
                owner: who.clone(),
            };
            log::debug!(target: LOG_TARGET, "created {:?} kitty #{}", kitty.gender, count);

            Kitties::<T>::insert(&dna, kitty);
            KittyCount::<T>::put(count);

            Self::deposit_event(Event::KittyCreated { dna, owner: who });
            Ok(())
        }

        /// Transfer an owned kitty to another account.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::transfer_kitty())]
        pub fn transfer_kitty(origin: OriginFor<T>, to: T::AccountId, dna: Vec<u8>) -> DispatchResult {
            let from = ensure_signed(origin)?;
            ensure!(from != to, Error::<T>::TransferToSelf);

            let dna: Dna<T> = dna.try_into().map_err(|_| Error::<T>::NoneExisted)?;
            let mut kitty = Kitties::<T>::get(&dna).ok_or(Error::<T>::NoneExisted)?;
            ensure!(kitty.owner == from, Error::<T>::NotOwner);

            KittiesOwned::<T>::try_mutate(&to, |owned| {
                owned.try_push(dna.clone()).map_err(|_| Error::<T>::TooManyOwned)
            })?;
            KittiesOwned::<T>::mutate(&from, |owned| owned.retain(|d| d != &dna));

            kitty.owner = to.clone();
            Kitties::<T>::insert(&dna, kitty);

            Self::deposit_event(Event::KittyTransferred { dna, from, to });
            Ok(())
        }

        /// Change the asking price of an owned kitty.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::set_price())]
        pub fn set_price(origin: OriginFor<T>, dna: Vec<u8>, new_price: u32) -> DispatchResult {
            let who = ensure_signed(origin)?;
            ensure!(new_price > 0, Error::<T>::PriceTooLow);

            let dna: Dna<T> = dna.try_into().map_err(|_| Error::<T>::NoneExisted)?;
            Kitties::<T>::try_mutate(&dna, |maybe_kitty| -> DispatchResult {
                let kitty = maybe_kitty.as_mut().ok_or(Error::<T>::NoneExisted)?;
                ensure!(kitty.owner == who, Error::<T>::NotOwner);
                kitty.price = new_price;
                Ok(())
            })?;

            Self::deposit_event(Event::PriceSet { dna, price: new_price });
            Ok(())
        }
    }

    impl<T: Config> Pallet<T> {
        /// Gender a kitty with the given DNA would have.
        pub fn kitty_gender(dna: &[u8]) -> Gender {
            Gender::from_dna(dna)
        }

        /// Look up a kitty by raw DNA bytes.
        pub fn kitty_by_dna(dna: &[u8]) -> Option<Kitty<T>> {
            let dna: Dna<T> = dna.to_vec().try_into().ok()?;
            Kitties::<T>::get(dna)
        }
    }
}
