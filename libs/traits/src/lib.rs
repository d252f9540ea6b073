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

//! # A common trait lib for NFT lending
//!
//! This crate provides the seams between the lending engine and the
//! collaborators it relies on but does not implement.

// Ensure we're `no_std` when compiling for WebAssembly.
#![cfg_attr(not(feature = "std"), no_std)]

use codec::MaxEncodedLen;
use frame_support::{dispatch::DispatchResult, Parameter};
use scale_info::TypeInfo;
use sp_runtime::{
	traits::{AtLeast32BitUnsigned, Member},
	DispatchError,
};

/// Custody of non-fungible assets used as loan collateral.
///
/// The engine never moves collateral by itself. It asks the custodian to
/// check ownership and to move assets into or out of the custody account.
/// Transfers are expected to either fully complete or fail with no effect.
pub trait CollateralCustody<AccountId> {
	/// Identifies a collection of non-fungible assets
	type CollectionId: Parameter + Member + Copy + TypeInfo + MaxEncodedLen;

	/// Identifies an item inside a collection
	type ItemId: Parameter + Member + Copy + TypeInfo + MaxEncodedLen;

	/// The account that holds every custodied asset
	fn custodian() -> AccountId;

	/// Returns `true` iff `claimant` currently owns the asset.
	/// An unknown asset is owned by nobody.
	fn verify_owner(
		collection_id: &Self::CollectionId,
		item_id: &Self::ItemId,
		claimant: &AccountId,
	) -> bool;

	/// Moves the asset from `from` into custody.
	///
	/// Fails if `from` is not the owner or the asset rejects the transfer.
	fn transfer_in(
		collection_id: &Self::CollectionId,
		item_id: &Self::ItemId,
		from: &AccountId,
	) -> DispatchResult;

	/// Moves the asset out of custody to `to`.
	///
	/// Fails if the asset is not in custody or rejects the transfer.
	fn transfer_out(
		collection_id: &Self::CollectionId,
		item_id: &Self::ItemId,
		to: &AccountId,
	) -> DispatchResult;
}

/// Read only view over the lending ledgers.
pub trait LendingInspect<AccountId> {
	type Balance: AtLeast32BitUnsigned + Copy;
	type LoanId;

	/// Total fungible value held by the engine
	fn contract_balance() -> Self::Balance;

	/// Withdrawable balance of a lender
	fn lender_balance(who: &AccountId) -> Self::Balance;

	/// `Some(repaid)` for known loans, `None` otherwise
	fn loan_repaid(loan_id: Self::LoanId) -> Option<bool>;

	/// Principal plus the interest owed for the full loan duration.
	/// Fails for unknown loans and when the amount overflows.
	fn amount_due(loan_id: Self::LoanId) -> Result<Self::Balance, DispatchError>;
}

/// Utility to benchmark the lending engine against any custodian
#[cfg(feature = "runtime-benchmarks")]
pub trait CustodyBenchmarkHelper<AccountId>: CollateralCustody<AccountId> {
	/// Creates a new asset owned by `owner`. Different seeds give different assets.
	fn benchmark_mint(
		owner: &AccountId,
		seed: u32,
	) -> Result<(Self::CollectionId, Self::ItemId), DispatchError>;
}
