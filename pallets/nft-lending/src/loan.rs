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

use codec::{Decode, Encode, MaxEncodedLen};
use frame_support::{
	ensure, traits::Get, CloneNoBound, EqNoBound, PartialEqNoBound, RuntimeDebugNoBound,
};
use lending_primitives::{InterestRate, Moment, PERCENT_DENOMINATOR, SECONDS_PER_YEAR};
use scale_info::TypeInfo;
use sp_arithmetic::{
	traits::{AtLeast32BitUnsigned, EnsureAdd, EnsureDiv, EnsureMul, EnsureSub},
	ArithmeticError,
};
use sp_runtime::DispatchError;

use crate::pallet::{AssetOf, Config, Error};

/// Interest accrued by `principal` over `elapsed` seconds at a yearly `rate`.
///
/// Computed as `principal * rate * elapsed / 100 / SECONDS_PER_YEAR` with
/// truncating division. Intermediate products are checked.
pub fn interest_owed<Balance>(
	principal: Balance,
	elapsed: Moment,
	rate: InterestRate,
) -> Result<Balance, ArithmeticError>
where
	Balance: AtLeast32BitUnsigned + Copy + From<u64>,
{
	principal
		.ensure_mul(Balance::from(u64::from(rate.deconstruct())))?
		.ensure_mul(Balance::from(elapsed))?
		.ensure_div(Balance::from(PERCENT_DENOMINATOR))?
		.ensure_div(Balance::from(SECONDS_PER_YEAR))
}

/// A loan issued against a custodied collateral.
/// Loans are never removed, repaid ones are kept as history.
#[derive(
	Encode,
	Decode,
	CloneNoBound,
	PartialEqNoBound,
	EqNoBound,
	TypeInfo,
	RuntimeDebugNoBound,
	MaxEncodedLen,
)]
#[scale_info(skip_type_params(T))]
pub struct LoanInfo<T: Config> {
	/// Loan identification
	pub loan_id: T::LoanId,

	/// Account that borrowed and must repay
	pub borrower: T::AccountId,

	/// Principal disbursed to the borrower
	pub amount: T::Balance,

	/// Seconds since epoch when the loan was issued
	pub start_time: Moment,

	/// Last second at which the loan can be repaid
	pub end_time: Moment,

	/// Collateral held in custody for this loan
	pub collateral: AssetOf<T>,

	/// Flips once, when the loan is repaid
	pub repaid: bool,
}

impl<T: Config> LoanInfo<T> {
	pub fn new(
		loan_id: T::LoanId,
		borrower: T::AccountId,
		amount: T::Balance,
		collateral: AssetOf<T>,
		now: Moment,
		duration: Moment,
	) -> Result<Self, DispatchError> {
		Ok(Self {
			loan_id,
			borrower,
			amount,
			start_time: now,
			end_time: now.ensure_add(duration)?,
			collateral,
			repaid: false,
		})
	}

	pub fn duration(&self) -> Result<Moment, ArithmeticError> {
		self.end_time.ensure_sub(self.start_time)
	}

	/// Interest owed for the whole duration of the loan.
	/// Repaying earlier does not reduce it.
	pub fn interest(&self) -> Result<T::Balance, ArithmeticError> {
		interest_owed(self.amount, self.duration()?, T::InterestRate::get())
	}

	/// Principal plus interest
	pub fn amount_due(&self) -> Result<T::Balance, ArithmeticError> {
		self.amount.ensure_add(self.interest()?)
	}

	pub fn is_expired(&self, now: Moment) -> bool {
		now > self.end_time
	}

	/// Checks a repayment from `who` and marks the loan as repaid.
	/// Returns the interest part of the repayment.
	pub fn repay(
		&mut self,
		who: &T::AccountId,
		paid_amount: T::Balance,
		now: Moment,
	) -> Result<T::Balance, DispatchError> {
		ensure!(*who == self.borrower, Error::<T>::NotLoanBorrower);
		ensure!(!self.repaid, Error::<T>::AlreadyRepaid);
		ensure!(!self.is_expired(now), Error::<T>::LoanExpired);

		let interest = self.interest()?;
		ensure!(
			paid_amount >= self.amount.ensure_add(interest)?,
			Error::<T>::InsufficientPayment
		);

		self.repaid = true;

		Ok(interest)
	}
}
