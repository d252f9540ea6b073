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

use frame_support::weights::Weight;

pub trait WeightInfo {
	fn deposit_collateral() -> Weight;
	fn deposit_funds() -> Weight;
	fn borrow() -> Weight;
	fn repay_loan() -> Weight;
	fn claim_funds() -> Weight;
}

impl WeightInfo for () {
	fn deposit_collateral() -> Weight {
		Weight::zero()
	}

	fn deposit_funds() -> Weight {
		Weight::zero()
	}

	fn borrow() -> Weight {
		Weight::zero()
	}

	fn repay_loan() -> Weight {
		Weight::zero()
	}

	fn claim_funds() -> Weight {
		Weight::zero()
	}
}
