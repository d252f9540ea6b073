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

//! Custody that can run arbitrary code on each transfer, used to simulate
//! rejections and calls back into the pallet from a collaborator.

use std::cell::RefCell;

use frame_support::dispatch::DispatchResult;
use lending_traits::CollateralCustody;

use crate::{
	custody::NonFungibleCustody,
	mock::{AccountId, CollectionId, ItemId, Runtime, Uniques},
	PalletAccount,
};

type Inner = NonFungibleCustody<Uniques, PalletAccount<Runtime>>;
type TransferFn = Box<dyn Fn() -> DispatchResult>;

thread_local! {
	static ON_TRANSFER: RefCell<Option<TransferFn>> = RefCell::new(None);
}

pub struct MockCustody;

impl MockCustody {
	/// Runs `f` before every transfer. An error from `f` rejects the transfer.
	pub fn on_transfer(f: impl Fn() -> DispatchResult + 'static) {
		ON_TRANSFER.with(|state| *state.borrow_mut() = Some(Box::new(f)));
	}

	fn call_hook() -> DispatchResult {
		ON_TRANSFER.with(|state| match state.borrow().as_ref() {
			Some(f) => f(),
			None => Ok(()),
		})
	}
}

impl CollateralCustody<AccountId> for MockCustody {
	type CollectionId = CollectionId;
	type ItemId = ItemId;

	fn custodian() -> AccountId {
		Inner::custodian()
	}

	fn verify_owner(collection_id: &CollectionId, item_id: &ItemId, claimant: &AccountId) -> bool {
		Inner::verify_owner(collection_id, item_id, claimant)
	}

	fn transfer_in(
		collection_id: &CollectionId,
		item_id: &ItemId,
		from: &AccountId,
	) -> DispatchResult {
		Self::call_hook()?;
		Inner::transfer_in(collection_id, item_id, from)
	}

	fn transfer_out(
		collection_id: &CollectionId,
		item_id: &ItemId,
		to: &AccountId,
	) -> DispatchResult {
		Self::call_hook()?;
		Inner::transfer_out(collection_id, item_id, to)
	}
}

#[cfg(feature = "runtime-benchmarks")]
impl lending_traits::CustodyBenchmarkHelper<AccountId> for MockCustody {
	fn benchmark_mint(
		owner: &AccountId,
		seed: u32,
	) -> Result<(CollectionId, ItemId), sp_runtime::DispatchError> {
		<Inner as lending_traits::CustodyBenchmarkHelper<AccountId>>::benchmark_mint(owner, seed)
	}
}
