use crate::errors::SaleError;
use crate::events;
use crate::interfaces::{AdminRegistryClient, AllocationStakingClient, SalesFactoryClient};
use crate::schedule::round_at;
use crate::signature;
use crate::storage::*;
use crate::types::*;
use soroban_sdk::{
    contract, contractimpl, contractmeta, log, token, Address, Bytes, BytesN, Env, Vec,
};

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Launchpad sale with registration, capped rounds and portion vesting"
);

#[contract]
pub struct SaleContract;

#[contractimpl]
impl SaleContract {
    /// Bind the sale to its deploying factory and collaborators.
    pub fn initialize(
        env: Env,
        factory: Address,
        admin_registry: Address,
        payment_token: Address,
        allocation_staking: Option<Address>,
    ) -> Result<(), SaleError> {
        if env.storage().instance().has(&DataKey::Factory) {
            return Err(SaleError::AlreadyInitialized);
        }
        factory.require_auth();

        env.storage().instance().set(&DataKey::Factory, &factory);
        env.storage()
            .instance()
            .set(&DataKey::AdminRegistry, &admin_registry);
        env.storage()
            .instance()
            .set(&DataKey::PaymentToken, &payment_token);
        if let Some(staking) = allocation_staking {
            env.storage()
                .instance()
                .set(&DataKey::AllocationStaking, &staking);
        }
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Configuration
    // ---------------------------------------------------------------------

    pub fn set_sale_params(env: Env, caller: Address, params: SaleParams) -> Result<(), SaleError> {
        require_admin(&env, &caller)?;
        if has_sale(&env) {
            return Err(SaleError::SaleAlreadyCreated);
        }

        let now = env.ledger().timestamp();
        if params.token_price <= 0 || params.amount_of_tokens_to_sell <= 0 {
            return Err(SaleError::InvalidSaleParams);
        }
        if params.sale_end <= now || params.tokens_unlock_time <= now {
            return Err(SaleError::InvalidSaleParams);
        }
        if params.portion_vesting_precision < MIN_PORTION_VESTING_PRECISION {
            return Err(SaleError::InvalidVestingPrecision);
        }
        if params.staking_round_id == 0 {
            return Err(SaleError::InvalidStakingRoundId);
        }
        if params.registration_deposit < 0 {
            return Err(SaleError::InvalidSaleParams);
        }

        let sale = Sale {
            token: params.token.clone(),
            sale_owner: params.sale_owner.clone(),
            token_price: params.token_price,
            amount_of_tokens_to_sell: params.amount_of_tokens_to_sell,
            total_tokens_sold: 0,
            total_raised: 0,
            sale_end: params.sale_end,
            tokens_unlock_time: params.tokens_unlock_time,
            portion_vesting_precision: params.portion_vesting_precision,
            staking_round_id: params.staking_round_id,
            registration_deposit: params.registration_deposit,
            tokens_deposited: false,
            earnings_withdrawn: false,
            leftover_withdrawn: false,
        };

        let factory = SalesFactoryClient::new(&env, &get_factory(&env)?);
        match factory.try_set_sale_owner_and_token(
            &env.current_contract_address(),
            &params.sale_owner,
            &params.token,
        ) {
            Ok(Ok(())) => {}
            _ => return Err(SaleError::FactoryRejected),
        }
        set_sale(&env, &sale);

        events::emit_sale_created(
            &env,
            params.sale_owner,
            params.token,
            params.token_price,
            params.amount_of_tokens_to_sell,
            params.sale_end,
        );
        Ok(())
    }

    pub fn set_registration_time(
        env: Env,
        caller: Address,
        registration_time_starts: u64,
        registration_time_ends: u64,
    ) -> Result<(), SaleError> {
        require_admin(&env, &caller)?;
        let sale = get_sale(&env)?;
        if get_registration(&env).is_some() {
            return Err(SaleError::RegistrationAlreadySet);
        }

        let now = env.ledger().timestamp();
        if registration_time_starts <= now
            || registration_time_starts >= registration_time_ends
            || registration_time_ends > sale.sale_end
        {
            return Err(SaleError::InvalidRegistrationTime);
        }
        if let Some(first) = get_rounds(&env).get(0) {
            if registration_time_ends > first.start_time {
                return Err(SaleError::RegistrationOverlapsRounds);
            }
        }

        set_registration(
            &env,
            &Registration {
                registration_time_starts,
                registration_time_ends,
                number_of_registrants: 0,
            },
        );
        events::emit_registration_time_set(&env, registration_time_starts, registration_time_ends);
        Ok(())
    }

    /// Define every round at once. Round ids start at 1.
    pub fn set_rounds(
        env: Env,
        caller: Address,
        start_times: Vec<u64>,
        max_participations: Vec<i128>,
    ) -> Result<(), SaleError> {
        require_admin(&env, &caller)?;
        let sale = get_sale(&env)?;
        if !get_rounds(&env).is_empty() {
            return Err(SaleError::RoundsAlreadySet);
        }
        if start_times.len() != max_participations.len() {
            return Err(SaleError::ArrayLengthMismatch);
        }
        if start_times.is_empty() {
            return Err(SaleError::InvalidRoundsInput);
        }

        let now = env.ledger().timestamp();
        if let Some(registration) = get_registration(&env) {
            let first = start_times.get(0).ok_or(SaleError::InvalidRoundsInput)?;
            if first < registration.registration_time_ends {
                return Err(SaleError::RegistrationOverlapsRounds);
            }
        }

        let mut rounds = Vec::new(&env);
        let mut previous: Option<u64> = None;
        for (start_time, max_participation) in start_times.iter().zip(max_participations.iter()) {
            if max_participation <= 0 {
                return Err(SaleError::InvalidCap);
            }
            if start_time <= now || start_time > sale.sale_end {
                return Err(SaleError::InvalidRoundsInput);
            }
            if let Some(prev) = previous {
                if start_time <= prev {
                    return Err(SaleError::InvalidRoundsInput);
                }
            }
            previous = Some(start_time);
            rounds.push_back(Round {
                start_time,
                max_participation,
                tokens_sold: 0,
            });
        }
        set_rounds(&env, &rounds);

        for (index, round) in rounds.iter().enumerate() {
            events::emit_round_added(&env, index as u32 + 1, round.start_time, round.max_participation);
        }

        if let Some(staking) = get_allocation_staking(&env) {
            AllocationStakingClient::new(&env, &staking)
                .register_sale(&env.current_contract_address(), &sale.staking_round_id);
        }
        Ok(())
    }

    /// Pull the whole sale inventory from the owner. Closes once round 1 starts.
    pub fn deposit_tokens(env: Env, caller: Address) -> Result<(), SaleError> {
        let mut sale = require_sale_owner(&env, &caller)?;
        if sale.tokens_deposited {
            return Err(SaleError::TokensAlreadyDeposited);
        }
        let first = get_rounds(&env).get(0).ok_or(SaleError::RoundsNotSet)?;
        if env.ledger().timestamp() >= first.start_time {
            return Err(SaleError::DepositTooLate);
        }

        token::Client::new(&env, &sale.token).transfer(
            &caller,
            &env.current_contract_address(),
            &sale.amount_of_tokens_to_sell,
        );
        sale.tokens_deposited = true;
        set_sale(&env, &sale);

        events::emit_tokens_deposited(&env, caller, sale.amount_of_tokens_to_sell);
        Ok(())
    }

    pub fn set_vesting_params(
        env: Env,
        caller: Address,
        unlock_times: Vec<u64>,
        percents: Vec<u32>,
        max_vesting_time_shift: u64,
    ) -> Result<(), SaleError> {
        require_admin(&env, &caller)?;
        let sale = get_sale(&env)?;
        if get_vesting(&env).is_some() {
            return Err(SaleError::VestingAlreadySet);
        }
        if unlock_times.len() != percents.len() {
            return Err(SaleError::ArrayLengthMismatch);
        }
        if unlock_times.is_empty() {
            return Err(SaleError::InvalidVestingParams);
        }

        let mut previous = 0u64;
        for unlock_time in unlock_times.iter() {
            if unlock_time < previous {
                return Err(SaleError::InvalidVestingParams);
            }
            previous = unlock_time;
        }
        let mut total: u32 = 0;
        for percent in percents.iter() {
            total = total
                .checked_add(percent)
                .ok_or(SaleError::ArithmeticOverflow)?;
        }
        if total > sale.portion_vesting_precision {
            return Err(SaleError::InvalidVestingParams);
        }

        set_vesting(
            &env,
            &VestingInfo {
                unlock_times: unlock_times.clone(),
                percents: percents.clone(),
                max_vesting_time_shift,
            },
        );
        events::emit_vesting_params_set(&env, unlock_times, percents);
        Ok(())
    }

    /// Delay every unlock time by `shift`. Uses up the whole shift allowance.
    pub fn shift_vesting_unlock_times(env: Env, caller: Address, shift: u64) -> Result<(), SaleError> {
        require_admin(&env, &caller)?;
        let mut vesting = get_vesting(&env).ok_or(SaleError::VestingNotSet)?;
        if shift == 0 || shift > vesting.max_vesting_time_shift {
            return Err(SaleError::InvalidTimeShift);
        }

        let mut shifted = Vec::new(&env);
        for unlock_time in vesting.unlock_times.iter() {
            shifted.push_back(
                unlock_time
                    .checked_add(shift)
                    .ok_or(SaleError::ArithmeticOverflow)?,
            );
        }
        vesting.unlock_times = shifted;
        vesting.max_vesting_time_shift = 0;
        set_vesting(&env, &vesting);

        events::emit_vesting_shifted(&env, shift);
        Ok(())
    }

    pub fn update_token_price(env: Env, caller: Address, token_price: i128) -> Result<(), SaleError> {
        require_admin(&env, &caller)?;
        let mut sale = get_sale(&env)?;
        ensure_before_first_round(&env)?;
        if token_price <= 0 {
            return Err(SaleError::InvalidPrice);
        }

        sale.token_price = token_price;
        set_sale(&env, &sale);
        events::emit_token_price_set(&env, token_price);
        Ok(())
    }

    /// Move every round start `shift` seconds later.
    pub fn postpone_sale(env: Env, caller: Address, shift: u64) -> Result<(), SaleError> {
        require_admin(&env, &caller)?;
        let sale = get_sale(&env)?;
        let rounds = ensure_before_first_round(&env)?;
        if shift == 0 {
            return Err(SaleError::InvalidTimeShift);
        }

        let mut postponed = Vec::new(&env);
        for mut round in rounds.iter() {
            round.start_time = round
                .start_time
                .checked_add(shift)
                .ok_or(SaleError::ArithmeticOverflow)?;
            if round.start_time > sale.sale_end {
                return Err(SaleError::InvalidTimeShift);
            }
            postponed.push_back(round);
        }
        set_rounds(&env, &postponed);

        events::emit_sale_postponed(&env, shift);
        Ok(())
    }

    pub fn extend_registration_period(
        env: Env,
        caller: Address,
        time_to_add: u64,
    ) -> Result<(), SaleError> {
        require_admin(&env, &caller)?;
        let rounds = ensure_before_first_round(&env)?;
        let mut registration = get_registration(&env).ok_or(SaleError::RegistrationNotSet)?;
        if time_to_add == 0 {
            return Err(SaleError::InvalidTimeShift);
        }

        let new_end = registration
            .registration_time_ends
            .checked_add(time_to_add)
            .ok_or(SaleError::ArithmeticOverflow)?;
        let first = rounds.get(0).ok_or(SaleError::RoundsNotSet)?;
        if new_end > first.start_time {
            return Err(SaleError::RegistrationOverlapsRounds);
        }

        registration.registration_time_ends = new_end;
        set_registration(&env, &registration);
        events::emit_registration_time_set(&env, registration.registration_time_starts, new_end);
        Ok(())
    }

    pub fn set_cap_per_round(
        env: Env,
        caller: Address,
        round_ids: Vec<u32>,
        caps: Vec<i128>,
    ) -> Result<(), SaleError> {
        require_admin(&env, &caller)?;
        get_sale(&env)?;
        let mut rounds = ensure_before_first_round(&env)?;
        if round_ids.len() != caps.len() || round_ids.is_empty() {
            return Err(SaleError::ArrayLengthMismatch);
        }

        for (round_id, cap) in round_ids.iter().zip(caps.iter()) {
            if round_id == 0 || round_id > rounds.len() {
                return Err(SaleError::RoundNotFound);
            }
            if cap <= 0 {
                return Err(SaleError::InvalidCap);
            }
            let index = round_id - 1;
            let mut round = rounds.get(index).ok_or(SaleError::RoundNotFound)?;
            round.max_participation = cap;
            rounds.set(index, round);
        }
        set_rounds(&env, &rounds);

        for (round_id, cap) in round_ids.iter().zip(caps.iter()) {
            events::emit_max_participation_set(&env, round_id, cap);
        }
        Ok(())
    }

    /// Bind the sale owner's off-chain signing key.
    pub fn set_owner_signer(env: Env, caller: Address, signer: BytesN<20>) -> Result<(), SaleError> {
        require_sale_owner(&env, &caller)?;
        set_owner_signer(&env, &signer);
        events::emit_owner_signer_set(&env, caller, signer);
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Registration and participation
    // ---------------------------------------------------------------------

    pub fn register_for_sale(
        env: Env,
        user: Address,
        signature: Bytes,
        round_id: u32,
        deposit: i128,
    ) -> Result<(), SaleError> {
        user.require_auth();
        let sale = get_sale(&env)?;
        let mut registration = get_registration(&env).ok_or(SaleError::RegistrationNotSet)?;

        let now = env.ledger().timestamp();
        if now < registration.registration_time_starts
            || now >= registration.registration_time_ends
        {
            return Err(SaleError::RegistrationClosed);
        }
        if round_id == 0 {
            return Err(SaleError::InvalidRoundId);
        }
        if round_id > get_rounds(&env).len() {
            return Err(SaleError::RoundNotFound);
        }
        if deposit != sale.registration_deposit {
            return Err(SaleError::DepositMismatch);
        }
        if get_registered_round(&env, &user).is_some() {
            return Err(SaleError::AlreadyRegistered);
        }
        let message =
            signature::registration_message(&env, &user, round_id, &env.current_contract_address());
        if !is_authorized(&env, &message, &signature)? {
            return Err(SaleError::InvalidSignature);
        }

        if deposit > 0 {
            token::Client::new(&env, &get_payment_token(&env)?).transfer(
                &user,
                &env.current_contract_address(),
                &deposit,
            );
            let fees = get_registration_fees(&env)
                .checked_add(deposit)
                .ok_or(SaleError::ArithmeticOverflow)?;
            set_registration_fees(&env, fees);
        }

        set_registered_round(&env, &user, round_id);
        registration.number_of_registrants += 1;
        set_registration(&env, &registration);

        log!(&env, "registered for round", user, round_id);
        events::emit_user_registered(&env, user, round_id);
        Ok(())
    }

    /// Buy `value * ONE / token_price` tokens in the caller's round.
    ///
    /// `amount` is the signed purchase allowance, `amount_to_burn` is carried
    /// in the authorization and recorded with the participation.
    pub fn participate(
        env: Env,
        user: Address,
        signature: Bytes,
        amount: i128,
        amount_to_burn: i128,
        round_id: u32,
        value: i128,
    ) -> Result<(), SaleError> {
        user.require_auth();
        let mut sale = get_sale(&env)?;
        let now = env.ledger().timestamp();

        if round_id == 0 {
            return Err(SaleError::InvalidRoundId);
        }
        let mut rounds = get_rounds(&env);
        let current = round_at(&rounds, sale.sale_end, now);
        if round_id != current || get_registered_round(&env, &user) != Some(round_id) {
            return Err(SaleError::WrongRound);
        }
        let message = signature::participation_message(
            &env,
            &user,
            amount,
            amount_to_burn,
            round_id,
            &env.current_contract_address(),
        );
        if !is_authorized(&env, &message, &signature)? {
            return Err(SaleError::InvalidSignature);
        }
        if get_participation(&env, &user).is_some() {
            return Err(SaleError::AlreadyParticipated);
        }
        if !sale.tokens_deposited {
            return Err(SaleError::TokensNotDeposited);
        }

        let index = round_id - 1;
        let mut round = rounds.get(index).ok_or(SaleError::RoundNotFound)?;
        if amount > round.max_participation {
            return Err(SaleError::ExceedsMaxParticipation);
        }
        if value <= 0 {
            return Err(SaleError::ZeroPurchase);
        }
        let bought = value
            .checked_mul(ONE)
            .ok_or(SaleError::ArithmeticOverflow)?
            / sale.token_price;
        if bought == 0 {
            return Err(SaleError::ZeroPurchase);
        }
        if bought > amount {
            return Err(SaleError::ExceedsAllowance);
        }
        let round_sold = round
            .tokens_sold
            .checked_add(bought)
            .ok_or(SaleError::ArithmeticOverflow)?;
        if round_sold > round.max_participation {
            return Err(SaleError::RoundCapExceeded);
        }
        let total_sold = sale
            .total_tokens_sold
            .checked_add(bought)
            .ok_or(SaleError::ArithmeticOverflow)?;
        if total_sold > sale.amount_of_tokens_to_sell {
            return Err(SaleError::SoldOut);
        }

        token::Client::new(&env, &get_payment_token(&env)?).transfer(
            &user,
            &env.current_contract_address(),
            &value,
        );

        round.tokens_sold = round_sold;
        rounds.set(index, round);
        set_rounds(&env, &rounds);

        sale.total_tokens_sold = total_sold;
        sale.total_raised = sale
            .total_raised
            .checked_add(value)
            .ok_or(SaleError::ArithmeticOverflow)?;
        set_sale(&env, &sale);

        set_participation(
            &env,
            &user,
            &Participation {
                amount_bought: bought,
                amount_paid: value,
                amount_to_burn,
                round_id,
                time_participated: now,
            },
        );

        log!(&env, "participated", user, bought, value);
        events::emit_tokens_sold(&env, user, bought, value, round_id);
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Settlement
    // ---------------------------------------------------------------------

    /// Withdraw one vesting portion. Succeeds without a transfer for users
    /// who never participated.
    pub fn withdraw_tokens(env: Env, user: Address, portion_id: u32) -> Result<(), SaleError> {
        user.require_auth();
        let mut portion_ids = Vec::new(&env);
        portion_ids.push_back(portion_id);
        withdraw_portions(&env, &user, portion_ids)
    }

    /// Withdraw several portions with a single transfer. Fails as a whole if
    /// any portion is locked or already withdrawn.
    pub fn withdraw_multiple_portions(
        env: Env,
        user: Address,
        portion_ids: Vec<u32>,
    ) -> Result<(), SaleError> {
        user.require_auth();
        withdraw_portions(&env, &user, portion_ids)
    }

    /// Pay raised funds and registration deposits to the sale owner.
    pub fn withdraw_earnings(env: Env, caller: Address) -> Result<(), SaleError> {
        let mut sale = require_sale_owner(&env, &caller)?;
        ensure_sale_ended(&env, &sale)?;
        pay_earnings(&env, &mut sale)?;
        set_sale(&env, &sale);
        Ok(())
    }

    /// Return unsold tokens to the sale owner, or burn them.
    pub fn withdraw_leftover(env: Env, caller: Address, burn: bool) -> Result<(), SaleError> {
        let mut sale = require_sale_owner(&env, &caller)?;
        ensure_sale_ended(&env, &sale)?;
        pay_leftover(&env, &mut sale, burn)?;
        set_sale(&env, &sale);
        Ok(())
    }

    pub fn withdraw_earnings_and_leftover(
        env: Env,
        caller: Address,
        burn: bool,
    ) -> Result<(), SaleError> {
        let mut sale = require_sale_owner(&env, &caller)?;
        ensure_sale_ended(&env, &sale)?;
        pay_earnings(&env, &mut sale)?;
        pay_leftover(&env, &mut sale, burn)?;
        set_sale(&env, &sale);
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Signature checks
    // ---------------------------------------------------------------------

    pub fn check_registration_signature(
        env: Env,
        user: Address,
        round_id: u32,
        signature: Bytes,
    ) -> Result<bool, SaleError> {
        get_sale(&env)?;
        let message =
            signature::registration_message(&env, &user, round_id, &env.current_contract_address());
        is_authorized(&env, &message, &signature)
    }

    pub fn check_participation_signature(
        env: Env,
        user: Address,
        amount: i128,
        amount_to_burn: i128,
        round_id: u32,
        signature: Bytes,
    ) -> Result<bool, SaleError> {
        get_sale(&env)?;
        let message = signature::participation_message(
            &env,
            &user,
            amount,
            amount_to_burn,
            round_id,
            &env.current_contract_address(),
        );
        is_authorized(&env, &message, &signature)
    }

    // ---------------------------------------------------------------------
    // Views
    // ---------------------------------------------------------------------

    pub fn get_sale(env: Env) -> Result<Sale, SaleError> {
        get_sale(&env)
    }

    pub fn is_created(env: Env) -> bool {
        has_sale(&env)
    }

    /// Registration window and registrant count; all zero when not set.
    pub fn get_registration(env: Env) -> Registration {
        get_registration(&env).unwrap_or(Registration {
            registration_time_starts: 0,
            registration_time_ends: 0,
            number_of_registrants: 0,
        })
    }

    pub fn get_round(env: Env, round_id: u32) -> Option<Round> {
        if round_id == 0 {
            return None;
        }
        get_rounds(&env).get(round_id - 1)
    }

    pub fn get_rounds(env: Env) -> Vec<Round> {
        get_rounds(&env)
    }

    pub fn get_number_of_rounds(env: Env) -> u32 {
        get_rounds(&env).len()
    }

    /// Active round id, 0 before round 1 and from `sale_end` on.
    pub fn get_current_round(env: Env) -> u32 {
        match get_sale(&env) {
            Ok(sale) => round_at(&get_rounds(&env), sale.sale_end, env.ledger().timestamp()),
            Err(_) => 0,
        }
    }

    pub fn get_phase(env: Env) -> SalePhase {
        let sale = match get_sale(&env) {
            Ok(sale) => sale,
            Err(_) => return SalePhase::NotCreated,
        };
        let rounds = get_rounds(&env);
        let registration = match get_registration(&env) {
            Some(registration) if !rounds.is_empty() => registration,
            _ => return SalePhase::Configuring,
        };

        let now = env.ledger().timestamp();
        if now >= sale.sale_end {
            if sale.earnings_withdrawn && sale.leftover_withdrawn {
                return SalePhase::Settled;
            }
            return SalePhase::Ended;
        }
        if round_at(&rounds, sale.sale_end, now) != 0 {
            return SalePhase::RoundActive;
        }
        if now >= registration.registration_time_starts
            && now < registration.registration_time_ends
        {
            return SalePhase::RegistrationOpen;
        }
        SalePhase::Scheduled
    }

    pub fn get_participation(env: Env, user: Address) -> Option<Participation> {
        get_participation(&env, &user)
    }

    pub fn is_participated(env: Env, user: Address) -> bool {
        get_participation(&env, &user).is_some()
    }

    /// Round the user registered for, 0 when not registered.
    pub fn get_registered_round(env: Env, user: Address) -> u32 {
        get_registered_round(&env, &user).unwrap_or(0)
    }

    pub fn is_registered(env: Env, user: Address) -> bool {
        get_registered_round(&env, &user).is_some()
    }

    pub fn get_vesting_info(env: Env) -> Option<VestingInfo> {
        get_vesting(&env)
    }

    pub fn is_portion_withdrawn(env: Env, user: Address, portion_id: u32) -> bool {
        is_portion_withdrawn(&env, &user, portion_id)
    }

    pub fn get_registration_fees(env: Env) -> i128 {
        get_registration_fees(&env)
    }

    pub fn get_owner_signer(env: Env) -> Option<BytesN<20>> {
        get_owner_signer(&env)
    }

    pub fn get_factory(env: Env) -> Result<Address, SaleError> {
        get_factory(&env)
    }

    pub fn get_admin_registry(env: Env) -> Result<Address, SaleError> {
        get_admin_registry(&env)
    }

    pub fn get_payment_token(env: Env) -> Result<Address, SaleError> {
        get_payment_token(&env)
    }

    pub fn get_allocation_staking(env: Env) -> Option<Address> {
        get_allocation_staking(&env)
    }
}

fn require_admin(env: &Env, caller: &Address) -> Result<(), SaleError> {
    caller.require_auth();
    let registry = AdminRegistryClient::new(env, &get_admin_registry(env)?);
    if !registry.is_admin(caller) {
        return Err(SaleError::NotAdmin);
    }
    Ok(())
}

fn require_sale_owner(env: &Env, caller: &Address) -> Result<Sale, SaleError> {
    caller.require_auth();
    let sale = get_sale(env)?;
    if sale.sale_owner != *caller {
        return Err(SaleError::NotSaleOwner);
    }
    Ok(sale)
}

/// Schedule mutators are frozen once round 1 has started.
fn ensure_before_first_round(env: &Env) -> Result<Vec<Round>, SaleError> {
    let rounds = get_rounds(env);
    let first = rounds.get(0).ok_or(SaleError::RoundsNotSet)?;
    if env.ledger().timestamp() >= first.start_time {
        return Err(SaleError::FirstRoundStarted);
    }
    Ok(rounds)
}

fn ensure_sale_ended(env: &Env, sale: &Sale) -> Result<(), SaleError> {
    if env.ledger().timestamp() < sale.sale_end {
        return Err(SaleError::SaleNotEnded);
    }
    Ok(())
}

/// Recovered signer is a live admin signer or the owner's bound signer.
fn is_authorized(env: &Env, message: &Bytes, signature: &Bytes) -> Result<bool, SaleError> {
    let signer = match signature::recover_signer(env, message, signature)? {
        Some(signer) => signer,
        None => return Ok(false),
    };
    if get_owner_signer(env) == Some(signer.clone()) {
        return Ok(true);
    }
    let registry = AdminRegistryClient::new(env, &get_admin_registry(env)?);
    Ok(registry.is_admin_signer(&signer))
}

fn withdraw_portions(env: &Env, user: &Address, portion_ids: Vec<u32>) -> Result<(), SaleError> {
    let participation = match get_participation(env, user) {
        Some(participation) => participation,
        None => return Ok(()),
    };
    let sale = get_sale(env)?;
    let vesting = get_vesting(env).ok_or(SaleError::VestingNotSet)?;
    let now = env.ledger().timestamp();

    let mut owed: i128 = 0;
    for portion_id in portion_ids.iter() {
        let unlock_time = vesting
            .unlock_times
            .get(portion_id)
            .ok_or(SaleError::PortionNotFound)?;
        let percent = vesting
            .percents
            .get(portion_id)
            .ok_or(SaleError::PortionNotFound)?;
        if now < sale.tokens_unlock_time.max(unlock_time) {
            return Err(SaleError::TokensNotUnlocked);
        }
        if is_portion_withdrawn(env, user, portion_id) {
            return Err(SaleError::PortionAlreadyWithdrawn);
        }
        set_portion_withdrawn(env, user, portion_id);

        let amount = participation
            .amount_bought
            .checked_mul(i128::from(percent))
            .ok_or(SaleError::ArithmeticOverflow)?
            / i128::from(sale.portion_vesting_precision);
        owed = owed.checked_add(amount).ok_or(SaleError::ArithmeticOverflow)?;
    }

    if owed > 0 {
        token::Client::new(env, &sale.token).transfer(
            &env.current_contract_address(),
            user,
            &owed,
        );
    }

    log!(env, "portions withdrawn", user.clone(), owed);
    events::emit_tokens_withdrawn(env, user.clone(), owed, portion_ids);
    Ok(())
}

fn pay_earnings(env: &Env, sale: &mut Sale) -> Result<(), SaleError> {
    if sale.earnings_withdrawn {
        return Err(SaleError::AlreadyWithdrawn);
    }
    sale.earnings_withdrawn = true;

    let earnings = sale
        .total_raised
        .checked_add(get_registration_fees(env))
        .ok_or(SaleError::ArithmeticOverflow)?;
    if earnings > 0 {
        token::Client::new(env, &get_payment_token(env)?).transfer(
            &env.current_contract_address(),
            &sale.sale_owner,
            &earnings,
        );
    }

    log!(env, "earnings withdrawn", earnings);
    events::emit_earnings_withdrawn(env, sale.sale_owner.clone(), earnings);
    Ok(())
}

fn pay_leftover(env: &Env, sale: &mut Sale, burn: bool) -> Result<(), SaleError> {
    if sale.leftover_withdrawn {
        return Err(SaleError::AlreadyWithdrawn);
    }
    sale.leftover_withdrawn = true;

    let leftover = if sale.tokens_deposited {
        sale.amount_of_tokens_to_sell - sale.total_tokens_sold
    } else {
        0
    };
    if leftover > 0 {
        let token = token::Client::new(env, &sale.token);
        if burn {
            token.burn(&env.current_contract_address(), &leftover);
        } else {
            token.transfer(&env.current_contract_address(), &sale.sale_owner, &leftover);
        }
    }

    log!(env, "leftover withdrawn", leftover, burn);
    events::emit_leftover_withdrawn(env, sale.sale_owner.clone(), leftover, burn);
    Ok(())
}
