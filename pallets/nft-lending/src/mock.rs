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

use std::time::Duration;

use frame_support::{
	parameter_types,
	traits::{
		tokens::nonfungibles::{Create, Mutate},
		AsEnsureOriginWithArg, ConstU128, ConstU16, ConstU32, ConstU64, GenesisBuild, UnixTime,
	},
	PalletId,
};
use frame_system::{EnsureRoot, EnsureSigned};
use lending_primitives::{Moment, SECONDS_PER_DAY, SECONDS_PER_YEAR};
use sp_core::H256;
use sp_runtime::{
	testing::Header,
	traits::{BlakeTwo256, IdentityLookup},
	Percent,
};

use crate::{mock_custody::MockCustody, pallet as pallet_nft_lending};

pub const BLOCK_TIME: Duration = Duration::from_secs(12);
pub const DAY: Duration = Duration::from_secs(SECONDS_PER_DAY);
pub const YEAR: Duration = Duration::from_secs(SECONDS_PER_YEAR);

const BLOCK_TIME_MS: u64 = BLOCK_TIME.as_millis() as u64;

pub const COLLECTION_OWNER: AccountId = 1;
pub const BORROWER: AccountId = 2;
pub const OTHER_BORROWER: AccountId = 3;
pub const LENDER: AccountId = 4;
pub const OTHER_LENDER: AccountId = 5;
pub const NOBODY: AccountId = 10;

pub const COLLECTION_A: CollectionId = 1;
pub const COLLECTION_B: CollectionId = 2;
pub const ASSET_AA: Asset = (COLLECTION_A, 1);
pub const ASSET_AB: Asset = (COLLECTION_A, 2);
pub const ASSET_BA: Asset = (COLLECTION_B, 1);
pub const NO_ASSET: Asset = (42, 1);

pub const INITIAL_BALANCE: Balance = 1_000_000;

type UncheckedExtrinsic = frame_system::mocking::MockUncheckedExtrinsic<Runtime>;
type Block = frame_system::mocking::MockBlock<Runtime>;

pub use lending_primitives::{Balance, CollectionId, ItemId, LoanId};

pub type Asset = (CollectionId, ItemId);
pub type AccountId = u64;

frame_support::construct_runtime!(
	pub enum Runtime where
		Block = Block,
		NodeBlock = Block,
		UncheckedExtrinsic = UncheckedExtrinsic,
	{
		System: frame_system,
		Timer: pallet_timestamp,
		Balances: pallet_balances,
		Uniques: pallet_uniques,
		NftLending: pallet_nft_lending,
	}
);

parameter_types! {
	pub const LendingPalletId: PalletId = PalletId(*b"nft/lend");
	pub InterestRate: Percent = Percent::from_percent(5);
	pub const MinLoanDuration: Moment = SECONDS_PER_DAY;
	pub const MaxLoanDuration: Moment = SECONDS_PER_YEAR;
}

impl frame_system::Config for Runtime {
	type AccountData = pallet_balances::AccountData<Balance>;
	type AccountId = AccountId;
	type BaseCallFilter = frame_support::traits::Everything;
	type BlockHashCount = ConstU64<250>;
	type BlockLength = ();
	type BlockNumber = u64;
	type BlockWeights = ();
	type DbWeight = ();
	type Hash = H256;
	type Hashing = BlakeTwo256;
	type Header = Header;
	type Index = u64;
	type Lookup = IdentityLookup<Self::AccountId>;
	type MaxConsumers = ConstU32<16>;
	type OnKilledAccount = ();
	type OnNewAccount = ();
	type OnSetCode = ();
	type PalletInfo = PalletInfo;
	type RuntimeCall = RuntimeCall;
	type RuntimeEvent = RuntimeEvent;
	type RuntimeOrigin = RuntimeOrigin;
	type SS58Prefix = ConstU16<42>;
	type SystemWeightInfo = ();
	type Version = ();
}

impl pallet_timestamp::Config for Runtime {
	type MinimumPeriod = ConstU64<BLOCK_TIME_MS>;
	type Moment = u64;
	type OnTimestampSet = ();
	type WeightInfo = ();
}

impl pallet_balances::Config for Runtime {
	type AccountStore = System;
	type Balance = Balance;
	type DustRemoval = ();
	type ExistentialDeposit = ConstU128<1>;
	type FreezeIdentifier = ();
	type HoldIdentifier = ();
	type MaxFreezes = ();
	type MaxHolds = ConstU32<1>;
	type MaxLocks = ();
	type MaxReserves = ();
	type ReserveIdentifier = ();
	type RuntimeEvent = RuntimeEvent;
	type WeightInfo = ();
}

impl pallet_uniques::Config for Runtime {
	type AttributeDepositBase = ();
	type CollectionDeposit = ();
	type CollectionId = CollectionId;
	type CreateOrigin = AsEnsureOriginWithArg<EnsureSigned<Self::AccountId>>;
	type Currency = Balances;
	type DepositPerByte = ();
	type ForceOrigin = EnsureRoot<u64>;
	type ItemDeposit = ();
	type ItemId = ItemId;
	type KeyLimit = ();
	type Locker = ();
	type MetadataDepositBase = ();
	type RuntimeEvent = RuntimeEvent;
	type StringLimit = ();
	type ValueLimit = ();
	type WeightInfo = ();
}

impl pallet_nft_lending::Config for Runtime {
	type Balance = Balance;
	type Currency = Balances;
	type Custody = MockCustody;
	type InterestRate = InterestRate;
	type LoanId = LoanId;
	type MaxLoanDuration = MaxLoanDuration;
	type MinLoanDuration = MinLoanDuration;
	type PalletId = LendingPalletId;
	type RuntimeEvent = RuntimeEvent;
	type Time = Timer;
	type WeightInfo = ();
}

pub fn new_test_ext() -> sp_io::TestExternalities {
	let mut storage = frame_system::GenesisConfig::default()
		.build_storage::<Runtime>()
		.unwrap();

	pallet_balances::GenesisConfig::<Runtime> {
		balances: [BORROWER, OTHER_BORROWER, LENDER, OTHER_LENDER]
			.into_iter()
			.map(|who| (who, INITIAL_BALANCE))
			.collect(),
	}
	.assimilate_storage(&mut storage)
	.unwrap();

	let mut ext = sp_io::TestExternalities::new(storage);
	ext.execute_with(|| {
		System::set_block_number(1);
		advance_time(BLOCK_TIME);

		Uniques::create_collection(&COLLECTION_A, &COLLECTION_OWNER, &COLLECTION_OWNER).unwrap();
		Uniques::mint_into(&COLLECTION_A, &ASSET_AA.1, &BORROWER).unwrap();
		Uniques::mint_into(&COLLECTION_A, &ASSET_AB.1, &OTHER_BORROWER).unwrap();

		Uniques::create_collection(&COLLECTION_B, &COLLECTION_OWNER, &COLLECTION_OWNER).unwrap();
		Uniques::mint_into(&COLLECTION_B, &ASSET_BA.1, &BORROWER).unwrap();
	});
	ext
}

pub fn now() -> Duration {
	<Timer as UnixTime>::now()
}

pub fn advance_time(elapsed: Duration) {
	Timer::set_timestamp(Timer::get() + elapsed.as_millis() as u64);
}

pub fn pallet_account() -> AccountId {
	NftLending::account()
}
