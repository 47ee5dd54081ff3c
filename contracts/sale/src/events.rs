use soroban_sdk::{contracttype, symbol_short, Address, BytesN, Env, Symbol, Vec};

#[derive(Clone)]
#[contracttype]
pub struct SaleCreatedEvent {
    pub sale_owner: Address,
    pub token: Address,
    pub token_price: i128,
    pub amount_of_tokens_to_sell: i128,
    pub sale_end: u64,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct RegistrationTimeSetEvent {
    pub registration_time_starts: u64,
    pub registration_time_ends: u64,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct RoundAddedEvent {
    pub round_id: u32,
    pub start_time: u64,
    pub max_participation: i128,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct TokenPriceSetEvent {
    pub token_price: i128,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct UserRegisteredEvent {
    pub user: Address,
    pub round_id: u32,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct TokensSoldEvent {
    pub user: Address,
    pub amount: i128,
    pub paid: i128,
    pub round_id: u32,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct TokensWithdrawnEvent {
    pub user: Address,
    pub amount: i128,
    pub portion_ids: Vec<u32>,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct MaxParticipationSetEvent {
    pub round_id: u32,
    pub max_participation: i128,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct TimeShiftEvent {
    pub shift: u64,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct VestingParamsSetEvent {
    pub unlock_times: Vec<u64>,
    pub percents: Vec<u32>,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct AmountEvent {
    pub to: Address,
    pub amount: i128,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct LeftoverWithdrawnEvent {
    pub sale_owner: Address,
    pub amount: i128,
    pub burned: bool,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct OwnerSignerSetEvent {
    pub sale_owner: Address,
    pub signer: BytesN<20>,
    pub timestamp: u64,
}

fn topics(kind: Symbol) -> (Symbol, Symbol) {
    (symbol_short!("SALE"), kind)
}

pub fn emit_sale_created(
    env: &Env,
    sale_owner: Address,
    token: Address,
    token_price: i128,
    amount_of_tokens_to_sell: i128,
    sale_end: u64,
) {
    env.events().publish(
        topics(symbol_short!("CREATED")),
        SaleCreatedEvent {
            sale_owner,
            token,
            token_price,
            amount_of_tokens_to_sell,
            sale_end,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_registration_time_set(env: &Env, starts: u64, ends: u64) {
    env.events().publish(
        topics(symbol_short!("REG_TIME")),
        RegistrationTimeSetEvent {
            registration_time_starts: starts,
            registration_time_ends: ends,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_round_added(env: &Env, round_id: u32, start_time: u64, max_participation: i128) {
    env.events().publish(
        topics(symbol_short!("ROUND")),
        RoundAddedEvent {
            round_id,
            start_time,
            max_participation,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_token_price_set(env: &Env, token_price: i128) {
    env.events().publish(
        topics(symbol_short!("PRICE")),
        TokenPriceSetEvent {
            token_price,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_user_registered(env: &Env, user: Address, round_id: u32) {
    env.events().publish(
        topics(symbol_short!("REGISTER")),
        UserRegisteredEvent {
            user,
            round_id,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_tokens_sold(env: &Env, user: Address, amount: i128, paid: i128, round_id: u32) {
    env.events().publish(
        topics(symbol_short!("SOLD")),
        TokensSoldEvent {
            user,
            amount,
            paid,
            round_id,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_tokens_withdrawn(env: &Env, user: Address, amount: i128, portion_ids: Vec<u32>) {
    env.events().publish(
        topics(symbol_short!("WITHDRAW")),
        TokensWithdrawnEvent {
            user,
            amount,
            portion_ids,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_max_participation_set(env: &Env, round_id: u32, max_participation: i128) {
    env.events().publish(
        topics(symbol_short!("MAX_PART")),
        MaxParticipationSetEvent {
            round_id,
            max_participation,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_tokens_deposited(env: &Env, sale_owner: Address, amount: i128) {
    env.events().publish(
        topics(symbol_short!("DEPOSIT")),
        AmountEvent {
            to: sale_owner,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_sale_postponed(env: &Env, shift: u64) {
    env.events().publish(
        topics(symbol_short!("POSTPONE")),
        TimeShiftEvent {
            shift,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_vesting_params_set(env: &Env, unlock_times: Vec<u64>, percents: Vec<u32>) {
    env.events().publish(
        topics(symbol_short!("VESTING")),
        VestingParamsSetEvent {
            unlock_times,
            percents,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_vesting_shifted(env: &Env, shift: u64) {
    env.events().publish(
        topics(symbol_short!("V_SHIFT")),
        TimeShiftEvent {
            shift,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_earnings_withdrawn(env: &Env, sale_owner: Address, amount: i128) {
    env.events().publish(
        topics(symbol_short!("EARNINGS")),
        AmountEvent {
            to: sale_owner,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_leftover_withdrawn(env: &Env, sale_owner: Address, amount: i128, burned: bool) {
    env.events().publish(
        topics(symbol_short!("LEFTOVER")),
        LeftoverWithdrawnEvent {
            sale_owner,
            amount,
            burned,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_owner_signer_set(env: &Env, sale_owner: Address, signer: BytesN<20>) {
    env.events().publish(
        topics(symbol_short!("SIGNER")),
        OwnerSignerSetEvent {
            sale_owner,
            signer,
            timestamp: env.ledger().timestamp(),
        },
    );
}
