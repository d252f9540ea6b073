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

//! Storage side of the loan and lender balance ledgers.
//!
//! Every access to `Loans`, `LastLoanId` and `LenderBalances` goes through
//! the functions below.

use frame_support::{ensure, traits::Get};
use lending_primitives::Moment;
use sp_runtime::{
	traits::{EnsureAddAssign, One, Zero},
	DispatchError,
};

use crate::{
	loan::LoanInfo,
	pallet::{AssetOf, Config, Error, LastLoanId, LenderBalances, Loans, Pallet},
};

impl<T: Config> Pallet<T> {
	fn generate_loan_id() -> Result<T::LoanId, DispatchError> {
		LastLoanId::<T>::try_mutate(|last_loan_id| {
			last_loan_id.ensure_add_assign(One::one())?;
			Ok(*last_loan_id)
		})
	}

	/// Stores a new loan starting at `now` under the next loan id.
	pub(crate) fn open_loan(
		borrower: T::AccountId,
		amount: T::Balance,
		collateral: AssetOf<T>,
		now: Moment,
		duration: Moment,
	) -> Result<LoanInfo<T>, DispatchError> {
		ensure!(
			duration >= T::MinLoanDuration::get() && duration <= T::MaxLoanDuration::get(),
			Error::<T>::InvalidDuration
		);

		let loan_id = Self::generate_loan_id()?;
		let loan = LoanInfo::new(loan_id, borrower, amount, collateral, now, duration)?;
		Loans::<T>::insert(loan_id, &loan);

		Ok(loan)
	}

	/// Marks the loan as repaid by `repayer`, returning the loan and the
	/// interest included in `paid_amount`.
	pub(crate) fn mark_repaid(
		loan_id: T::LoanId,
		repayer: &T::AccountId,
		paid_amount: T::Balance,
		now: Moment,
	) -> Result<(LoanInfo<T>, T::Balance), DispatchError> {
		Loans::<T>::try_mutate(loan_id, |maybe_loan| {
			let loan = maybe_loan.as_mut().ok_or(Error::<T>::LoanNotFound)?;
			let interest = loan.repay(repayer, paid_amount, now)?;
			Ok((loan.clone(), interest))
		})
	}

	pub(crate) fn credit(who: &T::AccountId, amount: T::Balance) -> Result<(), DispatchError> {
		LenderBalances::<T>::try_mutate(who, |balance| {
			balance.ensure_add_assign(amount)?;
			Ok(())
		})
	}

	/// Empties the balance of `who` and returns what it held.
	pub(crate) fn debit_all(who: &T::AccountId) -> Result<T::Balance, DispatchError> {
		LenderBalances::<T>::try_mutate(who, |balance| {
			ensure!(!balance.is_zero(), Error::<T>::NoFunds);
			Ok(sp_std::mem::take(balance))
		})
	}
}
