use soroban_sdk::{contracttype, Address, Vec};

/// Token unit scale: `token_price` is quoted per `ONE` units of the sale token.
pub const ONE: i128 = 1_000_000_000_000_000_000;

pub const MIN_PORTION_VESTING_PRECISION: u32 = 100;

/// Arguments of `set_sale_params`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleParams {
    pub token: Address,
    pub sale_owner: Address,
    pub token_price: i128,
    pub amount_of_tokens_to_sell: i128,
    pub sale_end: u64,
    pub tokens_unlock_time: u64,
    pub portion_vesting_precision: u32,
    pub staking_round_id: u32,
    pub registration_deposit: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Sale {
    pub token: Address,
    pub sale_owner: Address,
    pub token_price: i128, // payment units per ONE token units
    pub amount_of_tokens_to_sell: i128,
    pub total_tokens_sold: i128,
    pub total_raised: i128,
    pub sale_end: u64,
    pub tokens_unlock_time: u64,
    pub portion_vesting_precision: u32,
    pub staking_round_id: u32,
    pub registration_deposit: i128,
    pub tokens_deposited: bool,
    pub earnings_withdrawn: bool,
    pub leftover_withdrawn: bool,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Registration {
    pub registration_time_starts: u64,
    pub registration_time_ends: u64,
    pub number_of_registrants: u32,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Round {
    pub start_time: u64,
    pub max_participation: i128,
    pub tokens_sold: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Participation {
    pub amount_bought: i128,
    pub amount_paid: i128,
    pub amount_to_burn: i128,
    pub round_id: u32,
    pub time_participated: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct VestingInfo {
    pub unlock_times: Vec<u64>,
    pub percents: Vec<u32>,
    pub max_vesting_time_shift: u64,
}

/// Where a sale stands, derived from stored state and the ledger clock.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
#[repr(u32)]
pub enum SalePhase {
    NotCreated = 0,
    Configuring = 1,
    Scheduled = 2,
    RegistrationOpen = 3,
    RoundActive = 4,
    Ended = 5,
    Settled = 6,
}

#[contracttype]
pub enum DataKey {
    Factory,
    AdminRegistry,
    PaymentToken,
    AllocationStaking,
    Sale,
    Registration,
    Rounds,            // Vec<Round>, round id = index + 1
    Vesting,
    OwnerSigner,       // BytesN<20>
    RegistrationFees,  // i128
    RegisteredRound(Address),
    Participation(Address),
    PortionWithdrawn(Address, u32),
}
