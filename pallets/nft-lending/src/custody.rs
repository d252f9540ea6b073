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

use codec::MaxEncodedLen;
use frame_support::{
	dispatch::DispatchResult,
	ensure,
	traits::{
		tokens::nonfungibles::{Inspect, Transfer},
		Get,
	},
	Parameter,
};
use lending_traits::CollateralCustody;
use scale_info::TypeInfo;
use sp_runtime::{traits::Member, DispatchError, TokenError};
use sp_std::marker::PhantomData;

/// Custody backed by any `nonfungibles` implementation, e.g. `pallet-uniques`.
///
/// Custodied assets are owned by the `Custodian` account.
pub struct NonFungibleCustody<NonFungibles, Custodian>(PhantomData<(NonFungibles, Custodian)>);

fn ensure_owner<AccountId, NonFungibles>(
	collection_id: &NonFungibles::CollectionId,
	item_id: &NonFungibles::ItemId,
	owner: &AccountId,
) -> DispatchResult
where
	AccountId: PartialEq,
	NonFungibles: Inspect<AccountId>,
{
	let current =
		NonFungibles::owner(collection_id, item_id).ok_or(TokenError::UnknownAsset)?;
	ensure!(current == *owner, DispatchError::BadOrigin);
	Ok(())
}

impl<AccountId, NonFungibles, Custodian> CollateralCustody<AccountId>
	for NonFungibleCustody<NonFungibles, Custodian>
where
	AccountId: PartialEq,
	NonFungibles: Inspect<AccountId> + Transfer<AccountId>,
	NonFungibles::CollectionId: Parameter + Member + Copy + TypeInfo + MaxEncodedLen,
	NonFungibles::ItemId: Parameter + Member + Copy + TypeInfo + MaxEncodedLen,
	Custodian: Get<AccountId>,
{
	type CollectionId = NonFungibles::CollectionId;
	type ItemId = NonFungibles::ItemId;

	fn custodian() -> AccountId {
		Custodian::get()
	}

	fn verify_owner(
		collection_id: &Self::CollectionId,
		item_id: &Self::ItemId,
		claimant: &AccountId,
	) -> bool {
		NonFungibles::owner(collection_id, item_id)
			.map(|owner| owner == *claimant)
			.unwrap_or(false)
	}

	fn transfer_in(
		collection_id: &Self::CollectionId,
		item_id: &Self::ItemId,
		from: &AccountId,
	) -> DispatchResult {
		ensure_owner::<_, NonFungibles>(collection_id, item_id, from)?;
		NonFungibles::transfer(collection_id, item_id, &Custodian::get())
	}

	fn transfer_out(
		collection_id: &Self::CollectionId,
		item_id: &Self::ItemId,
		to: &AccountId,
	) -> DispatchResult {
		ensure_owner::<_, NonFungibles>(collection_id, item_id, &Custodian::get())?;
		NonFungibles::transfer(collection_id, item_id, to)
	}
}

#[cfg(feature = "runtime-benchmarks")]
mod benchmark_helper {
	use frame_support::traits::tokens::nonfungibles::{Create, Mutate};
	use lending_traits::CustodyBenchmarkHelper;

	use super::*;

	/// Collection holding every asset minted for benchmarks
	const BENCHMARK_COLLECTION: u32 = u32::MAX;

	impl<AccountId, NonFungibles, Custodian> CustodyBenchmarkHelper<AccountId>
		for NonFungibleCustody<NonFungibles, Custodian>
	where
		AccountId: PartialEq,
		NonFungibles: Inspect<AccountId> + Transfer<AccountId> + Create<AccountId> + Mutate<AccountId>,
		NonFungibles::CollectionId:
			Parameter + Member + Copy + TypeInfo + MaxEncodedLen + From<u32>,
		NonFungibles::ItemId: Parameter + Member + Copy + TypeInfo + MaxEncodedLen + From<u32>,
		Custodian: Get<AccountId>,
	{
		fn benchmark_mint(
			owner: &AccountId,
			seed: u32,
		) -> Result<(Self::CollectionId, Self::ItemId), DispatchError> {
			let collection_id = BENCHMARK_COLLECTION.into();
			if NonFungibles::collection_owner(&collection_id).is_none() {
				NonFungibles::create_collection(&collection_id, owner, owner)?;
			}

			let item_id = seed.into();
			NonFungibles::mint_into(&collection_id, &item_id, owner)?;

			Ok((collection_id, item_id))
		}
	}
}
