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

// Ensure we're `no_std` when compiling for WebAssembly.
#![cfg_attr(not(feature = "std"), no_std)]

pub use constants::*;
pub use types::*;

/// Common types shared by the lending pallet and its runtimes
pub mod types {
	use sp_runtime::Percent;

	/// Moment type, expressed in seconds since the unix epoch
	pub type Moment = u64;

	/// Balance of an account.
	pub type Balance = u128;

	/// A representation of a loan identifier
	pub type LoanId = u64;

	/// A representation of CollectionId for Uniques
	pub type CollectionId = u64;

	/// A representation of ItemId for Uniques
	pub type ItemId = u128;

	/// Yearly interest, as a whole percentage of the principal
	pub type InterestRate = Percent;
}

/// Common constants
pub mod constants {
	use super::types::Moment;

	// Seconds units
	pub const SECONDS_PER_MINUTE: Moment = 60;
	pub const SECONDS_PER_HOUR: Moment = SECONDS_PER_MINUTE * 60;
	pub const SECONDS_PER_DAY: Moment = SECONDS_PER_HOUR * 24;
	pub const SECONDS_PER_YEAR: Moment = SECONDS_PER_DAY * 365;

	/// Interest rates are expressed per hundred
	pub const PERCENT_DENOMINATOR: u32 = 100;
}
