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

use frame_benchmarking::{account, benchmarks, impl_benchmark_test_suite};
use frame_support::traits::{Currency, Get};
use frame_system::RawOrigin;
use lending_traits::{CustodyBenchmarkHelper, LendingInspect};
use sp_runtime::traits::{One, Zero};

use super::pallet::*;

fn principal<T: Config>() -> T::Balance {
	T::Currency::minimum_balance().max(T::Balance::one()) * T::Balance::from(1_000u64)
}

fn funded_account<T: Config>(name: &'static str) -> T::AccountId {
	let who = account::<T::AccountId>(name, 0, 0);
	let funds = principal::<T>() * T::Balance::from(1_000u64);
	let _ = T::Currency::make_free_balance_be(&who, funds);
	who
}

fn fund_pool<T: Config>() {
	let lender = funded_account::<T>("lender");
	Pallet::<T>::do_deposit_funds(lender, principal::<T>()).expect("lender is funded");
}

fn create_loan<T: Config>(borrower: &T::AccountId) -> T::LoanId
where
	T::Custody: CustodyBenchmarkHelper<T::AccountId>,
{
	let collateral = T::Custody::benchmark_mint(borrower, 0).expect("mint should not fail");
	Pallet::<T>::do_borrow(
		borrower.clone(),
		principal::<T>(),
		collateral,
		T::MinLoanDuration::get(),
	)
	.expect("pool is funded")
}

benchmarks! {
	where_clause {
		where
		T::Custody: CustodyBenchmarkHelper<T::AccountId>,
	}

	deposit_collateral {
		let owner = funded_account::<T>("owner");
		let collateral = T::Custody::benchmark_mint(&owner, 0).expect("mint should not fail");

	}: _(RawOrigin::Signed(owner.clone()), collateral)
	verify {
		let (collection_id, item_id) = collateral;
		assert_eq!(DepositedCollateral::<T>::get(collection_id, item_id), Some(owner));
	}

	deposit_funds {
		let lender = funded_account::<T>("lender");
		let amount = principal::<T>();

	}: _(RawOrigin::Signed(lender.clone()), amount)
	verify {
		assert_eq!(LenderBalances::<T>::get(&lender), amount);
	}

	borrow {
		fund_pool::<T>();

		let borrower = funded_account::<T>("borrower");
		let collateral = T::Custody::benchmark_mint(&borrower, 0).expect("mint should not fail");
		let amount = principal::<T>();
		let duration = T::MinLoanDuration::get();

	}: _(RawOrigin::Signed(borrower), amount, collateral, duration)
	verify {
		assert!(Loans::<T>::contains_key(LastLoanId::<T>::get()));
	}

	repay_loan {
		fund_pool::<T>();

		let borrower = funded_account::<T>("borrower");
		let loan_id = create_loan::<T>(&borrower);
		let amount_due = <Pallet<T> as LendingInspect<T::AccountId>>::amount_due(loan_id)
			.expect("loan was just created");

	}: _(RawOrigin::Signed(borrower), loan_id, amount_due)
	verify {
		assert_eq!(Loans::<T>::get(loan_id).map(|loan| loan.repaid), Some(true));
	}

	claim_funds {
		let lender = funded_account::<T>("lender");
		Pallet::<T>::do_deposit_funds(lender.clone(), principal::<T>()).expect("lender is funded");

	}: _(RawOrigin::Signed(lender.clone()))
	verify {
		assert_eq!(LenderBalances::<T>::get(&lender), Zero::zero());
	}
}

impl_benchmark_test_suite!(Pallet, crate::mock::new_test_ext(), crate::mock::Runtime);
