// Copyright 2023 NFT Lending Developers.
// This file is part of the NFT lending chain project.

// NFT lending is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version (see http://www.gnu.org/licenses).

// NFT lending is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.

//! # NFT Lending pallet
//!
//! Borrow a fungible amount against a non-fungible collateral.
//!
//! Lenders supply capital with `deposit_funds` and withdraw their whole
//! balance with `claim_funds`. A borrower calls `borrow` with a collateral it
//! owns: the collateral is taken into custody and the amount is disbursed from
//! the pallet account. Calling `repay_loan` before the loan ends, with the
//! principal plus the interest accrued over the whole loan duration, gives the
//! collateral back.
//!
//! Loans that are not repaid in time keep their collateral in custody, there
//! is no liquidation.
//!
//! Every mutating call holds an engine-wide lock for its whole duration. Any
//! call into the pallet made by a collaborator while a transfer is in flight
//! fails with `ReentrantCall`.
#![cfg_attr(not(feature = "std"), no_std)]

pub use pallet::*;
pub use weights::WeightInfo;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod custody;
mod ledger;
pub mod loan;
pub mod weights;

#[cfg(test)]
mod mock;

#[cfg(test)]
mod mock_custody;


pub const LOG_TARGET: &str = "runtime::nft-lending";

#[frame_support::pallet]
pub mod pallet {
	use frame_support::{
		pallet_prelude::*,
		traits::{tokens, Currency, ExistenceRequirement, UnixTime},
		transactional, PalletId,
	};
	use frame_system::pallet_prelude::*;
	use lending_primitives::Moment;
	use lending_traits::{CollateralCustody, LendingInspect};
	use sp_arithmetic::Percent;
	use sp_runtime::traits::{AccountIdConversion, AtLeast32BitUnsigned, Zero};

	use super::*;
	use crate::loan::LoanInfo;

	pub type CollectionIdOf<T> = <<T as Config>::Custody as CollateralCustody<
		<T as frame_system::Config>::AccountId,
	>>::CollectionId;

	pub type ItemIdOf<T> =
		<<T as Config>::Custody as CollateralCustody<<T as frame_system::Config>::AccountId>>::ItemId;

	pub type AssetOf<T> = (CollectionIdOf<T>, ItemIdOf<T>);

	#[pallet::pallet]
	pub struct Pallet<T>(_);

	#[pallet::config]
	pub trait Config: frame_system::Config {
		type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

		/// Defines the balance type lent and repaid
		type Balance: tokens::Balance + From<u64>;

		/// Identify a loan in the pallet
		type LoanId: Parameter
			+ Member
			+ MaybeSerializeDeserialize
			+ Default
			+ TypeInfo
			+ MaxEncodedLen
			+ Copy
			+ AtLeast32BitUnsigned;

		/// Moves lent, repaid and claimed funds
		type Currency: Currency<Self::AccountId, Balance = Self::Balance>;

		/// Checks and moves collaterals
		type Custody: CollateralCustody<Self::AccountId>;

		/// Fetching method for the time of the current block
		type Time: UnixTime;

		/// The Id of this pallet, used to derive the account holding the funds
		#[pallet::constant]
		type PalletId: Get<PalletId>;

		/// Yearly interest charged over the principal.
		/// Only whole percentages from 0 to 100 can be expressed.
		#[pallet::constant]
		type InterestRate: Get<Percent>;

		/// Shortest loan allowed, in seconds
		#[pallet::constant]
		type MinLoanDuration: Get<Moment>;

		/// Longest loan allowed, in seconds
		#[pallet::constant]
		type MaxLoanDuration: Get<Moment>;

		type WeightInfo: WeightInfo;
	}

	/// Contains the last loan id generated
	#[pallet::storage]
	pub type LastLoanId<T: Config> = StorageValue<_, T::LoanId, ValueQuery>;

	/// Every loan issued, repaid ones included
	#[pallet::storage]
	pub type Loans<T: Config> =
		StorageMap<_, Blake2_128Concat, T::LoanId, LoanInfo<T>, OptionQuery>;

	/// Withdrawable balance of each lender
	#[pallet::storage]
	pub type LenderBalances<T: Config> =
		StorageMap<_, Blake2_128Concat, T::AccountId, T::Balance, ValueQuery>;

	/// Depositor of each collateral taken with `deposit_collateral`
	#[pallet::storage]
	pub type DepositedCollateral<T: Config> = StorageDoubleMap<
		_,
		Blake2_128Concat,
		CollectionIdOf<T>,
		Blake2_128Concat,
		ItemIdOf<T>,
		T::AccountId,
		OptionQuery,
	>;

	/// Set while a call is being processed
	#[pallet::storage]
	pub type OperationInProgress<T: Config> = StorageValue<_, bool, ValueQuery>;

	#[pallet::event]
	#[pallet::generate_deposit(pub(super) fn deposit_event)]
	pub enum Event<T: Config> {
		/// A collateral was taken into custody
		CollateralDeposited {
			owner: T::AccountId,
			collateral: AssetOf<T>,
		},
		/// A lender supplied funds
		FundsDeposited {
			lender: T::AccountId,
			amount: T::Balance,
		},
		/// A loan was issued and its amount disbursed
		LoanIssued {
			loan_id: T::LoanId,
			borrower: T::AccountId,
			amount: T::Balance,
			end_time: Moment,
		},
		/// A loan was repaid and its collateral returned
		LoanRepaid {
			loan_id: T::LoanId,
			borrower: T::AccountId,
			interest: T::Balance,
		},
		/// A lender withdrew its balance
		FundsClaimed {
			lender: T::AccountId,
			amount: T::Balance,
		},
	}

	#[pallet::error]
	pub enum Error<T> {
		/// Emits when the caller doesn't own the collateral
		NotCollateralOwner,
		/// Emits when the caller is not the borrower of the loan
		NotLoanBorrower,
		/// Emits when the loan duration is out of the allowed bounds
		InvalidDuration,
		/// Emits when a zero amount is deposited or borrowed
		InvalidAmount,
		/// Emits when the loan was already repaid
		AlreadyRepaid,
		/// Emits when repaying after the loan end time
		LoanExpired,
		/// Emits when the payment doesn't cover principal and interest
		InsufficientPayment,
		/// Emits when loan doesn't exist
		LoanNotFound,
		/// Emits when claiming with an empty balance
		NoFunds,
		/// Emits when moving a collateral or funds fails
		TransferFailed,
		/// Emits when the pallet doesn't hold enough funds for a borrow
		InsufficientLiquidity,
		/// Emits when called while another call is being processed
		ReentrantCall,
	}

	#[pallet::hooks]
	impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
		fn integrity_test() {
			assert!(
				T::Custody::custodian() == Self::account(),
				"Collaterals must be held by the pallet account",
			);
		}
	}

	#[pallet::call]
	impl<T: Config> Pallet<T> {
		/// Transfers a collateral into custody without linking it to a loan.
		///
		/// There is no way to withdraw it back.
		#[pallet::weight(T::WeightInfo::deposit_collateral())]
		#[pallet::call_index(0)]
		#[transactional]
		pub fn deposit_collateral(origin: OriginFor<T>, collateral: AssetOf<T>) -> DispatchResult {
			let who = ensure_signed(origin)?;
			Self::do_deposit_collateral(who, collateral)
		}

		/// Supplies `amount` to the lending pool, credited to the caller.
		#[pallet::weight(T::WeightInfo::deposit_funds())]
		#[pallet::call_index(1)]
		#[transactional]
		pub fn deposit_funds(origin: OriginFor<T>, amount: T::Balance) -> DispatchResult {
			let who = ensure_signed(origin)?;
			Self::do_deposit_funds(who, amount)
		}

		/// Borrows `amount` for `duration` seconds against a collateral owned
		/// by the caller.
		#[pallet::weight(T::WeightInfo::borrow())]
		#[pallet::call_index(2)]
		#[transactional]
		pub fn borrow(
			origin: OriginFor<T>,
			amount: T::Balance,
			collateral: AssetOf<T>,
			duration: Moment,
		) -> DispatchResult {
			let who = ensure_signed(origin)?;
			Self::do_borrow(who, amount, collateral, duration).map(|_| ())
		}

		/// Repays a loan in full, getting the collateral back.
		///
		/// `paid_amount` is taken entirely, even beyond what is owed.
		#[pallet::weight(T::WeightInfo::repay_loan())]
		#[pallet::call_index(3)]
		#[transactional]
		pub fn repay_loan(
			origin: OriginFor<T>,
			loan_id: T::LoanId,
			paid_amount: T::Balance,
		) -> DispatchResult {
			let who = ensure_signed(origin)?;
			Self::do_repay(who, loan_id, paid_amount).map(|_| ())
		}

		/// Withdraws the whole balance of the caller.
		#[pallet::weight(T::WeightInfo::claim_funds())]
		#[pallet::call_index(4)]
		#[transactional]
		pub fn claim_funds(origin: OriginFor<T>) -> DispatchResult {
			let who = ensure_signed(origin)?;
			Self::do_claim(who).map(|_| ())
		}
	}

	impl<T: Config> Pallet<T> {
		#[transactional]
		pub fn do_deposit_collateral(who: T::AccountId, collateral: AssetOf<T>) -> DispatchResult {
			Self::with_lock(|| {
				Self::ensure_collateral_owner(&who, collateral)?;

				let (collection_id, item_id) = collateral;
				DepositedCollateral::<T>::insert(collection_id, item_id, &who);

				T::Custody::transfer_in(&collection_id, &item_id, &who)
					.map_err(Self::transfer_failed)?;

				Self::deposit_event(Event::<T>::CollateralDeposited {
					owner: who,
					collateral,
				});

				Ok(())
			})
		}

		#[transactional]
		pub fn do_deposit_funds(who: T::AccountId, amount: T::Balance) -> DispatchResult {
			Self::with_lock(|| {
				Self::ensure_amount(amount)?;

				Self::credit(&who, amount)?;

				T::Currency::transfer(
					&who,
					&Self::account(),
					amount,
					ExistenceRequirement::AllowDeath,
				)
				.map_err(Self::transfer_failed)?;

				Self::deposit_event(Event::<T>::FundsDeposited { lender: who, amount });

				Ok(())
			})
		}

		/// Issues a loan and returns its id.
		#[transactional]
		pub fn do_borrow(
			who: T::AccountId,
			amount: T::Balance,
			collateral: AssetOf<T>,
			duration: Moment,
		) -> Result<T::LoanId, DispatchError> {
			Self::with_lock(|| {
				Self::ensure_amount(amount)?;
				Self::ensure_collateral_owner(&who, collateral)?;

				let loan = Self::open_loan(who.clone(), amount, collateral, Self::now(), duration)?;

				ensure!(
					Self::contract_balance() >= amount,
					Error::<T>::InsufficientLiquidity
				);

				let (collection_id, item_id) = collateral;
				T::Custody::transfer_in(&collection_id, &item_id, &who)
					.map_err(Self::transfer_failed)?;

				T::Currency::transfer(
					&Self::account(),
					&who,
					amount,
					ExistenceRequirement::AllowDeath,
				)
				.map_err(Self::transfer_failed)?;

				Self::deposit_event(Event::<T>::LoanIssued {
					loan_id: loan.loan_id,
					borrower: who,
					amount,
					end_time: loan.end_time,
				});

				Ok(loan.loan_id)
			})
		}

		/// Repays a loan and returns the interest paid.
		#[transactional]
		pub fn do_repay(
			who: T::AccountId,
			loan_id: T::LoanId,
			paid_amount: T::Balance,
		) -> Result<T::Balance, DispatchError> {
			Self::with_lock(|| {
				let (loan, interest) = Self::mark_repaid(loan_id, &who, paid_amount, Self::now())?;

				// Repayments go to the pool, not to the lenders that funded the loan
				Self::credit(&Self::account(), paid_amount)?;

				T::Currency::transfer(
					&who,
					&Self::account(),
					paid_amount,
					ExistenceRequirement::AllowDeath,
				)
				.map_err(Self::transfer_failed)?;

				let (collection_id, item_id) = loan.collateral;
				T::Custody::transfer_out(&collection_id, &item_id, &who)
					.map_err(Self::transfer_failed)?;

				Self::deposit_event(Event::<T>::LoanRepaid {
					loan_id,
					borrower: who,
					interest,
				});

				Ok(interest)
			})
		}

		/// Empties the balance of a lender and returns the amount sent.
		#[transactional]
		pub fn do_claim(who: T::AccountId) -> Result<T::Balance, DispatchError> {
			Self::with_lock(|| {
				let amount = Self::debit_all(&who)?;

				T::Currency::transfer(
					&Self::account(),
					&who,
					amount,
					ExistenceRequirement::AllowDeath,
				)
				.map_err(Self::transfer_failed)?;

				Self::deposit_event(Event::<T>::FundsClaimed { lender: who, amount });

				Ok(amount)
			})
		}

		/// Funds currently held by the pallet
		pub fn contract_balance() -> T::Balance {
			T::Currency::free_balance(&Self::account())
		}

		/// Account holding the pooled funds
		pub fn account() -> T::AccountId {
			T::PalletId::get().into_account_truncating()
		}
	}

	/// Utility methods
	impl<T: Config> Pallet<T> {
		/// Runs `f` holding the engine lock.
		/// Fails without running `f` if the lock is already taken.
		fn with_lock<R>(f: impl FnOnce() -> Result<R, DispatchError>) -> Result<R, DispatchError> {
			ensure!(!OperationInProgress::<T>::get(), Error::<T>::ReentrantCall);

			OperationInProgress::<T>::put(true);
			let result = f();
			OperationInProgress::<T>::kill();

			result
		}

		fn ensure_amount(amount: T::Balance) -> DispatchResult {
			ensure!(!amount.is_zero(), Error::<T>::InvalidAmount);
			Ok(())
		}

		fn ensure_collateral_owner(
			owner: &T::AccountId,
			(collection_id, item_id): AssetOf<T>,
		) -> DispatchResult {
			ensure!(
				T::Custody::verify_owner(&collection_id, &item_id, owner),
				Error::<T>::NotCollateralOwner
			);
			Ok(())
		}

		fn transfer_failed(error: DispatchError) -> DispatchError {
			log::debug!(target: LOG_TARGET, "Transfer failed: {:?}", error);
			Error::<T>::TransferFailed.into()
		}

		fn now() -> Moment {
			T::Time::now().as_secs()
		}
	}

	impl<T: Config> LendingInspect<T::AccountId> for Pallet<T> {
		type Balance = T::Balance;
		type LoanId = T::LoanId;

		fn contract_balance() -> Self::Balance {
			Self::contract_balance()
		}

		fn lender_balance(who: &T::AccountId) -> Self::Balance {
			LenderBalances::<T>::get(who)
		}

		fn loan_repaid(loan_id: Self::LoanId) -> Option<bool> {
			Loans::<T>::get(loan_id).map(|loan| loan.repaid)
		}

		fn amount_due(loan_id: Self::LoanId) -> Result<Self::Balance, DispatchError> {
			let loan = Loans::<T>::get(loan_id).ok_or(Error::<T>::LoanNotFound)?;
			Ok(loan.amount_due()?)
		}
	}

	/// Account of the pallet, usable as custodian of the collaterals
	pub struct PalletAccount<T>(PhantomData<T>);

	impl<T: Config> Get<T::AccountId> for PalletAccount<T> {
		fn get() -> T::AccountId {
			Pallet::<T>::account()
		}
	}
}
