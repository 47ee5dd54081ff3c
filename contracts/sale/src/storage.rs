use crate::errors::SaleError;
use crate::types::*;
use soroban_sdk::{Address, BytesN, Env, Vec};

pub fn get_factory(env: &Env) -> Result<Address, SaleError> {
    env.storage()
        .instance()
        .get(&DataKey::Factory)
        .ok_or(SaleError::NotInitialized)
}

pub fn get_admin_registry(env: &Env) -> Result<Address, SaleError> {
    env.storage()
        .instance()
        .get(&DataKey::AdminRegistry)
        .ok_or(SaleError::NotInitialized)
}

pub fn get_payment_token(env: &Env) -> Result<Address, SaleError> {
    env.storage()
        .instance()
        .get(&DataKey::PaymentToken)
        .ok_or(SaleError::NotInitialized)
}

pub fn get_allocation_staking(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::AllocationStaking)
}

pub fn get_sale(env: &Env) -> Result<Sale, SaleError> {
    env.storage()
        .instance()
        .get(&DataKey::Sale)
        .ok_or(SaleError::SaleNotCreated)
}

pub fn has_sale(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Sale)
}

pub fn set_sale(env: &Env, sale: &Sale) {
    env.storage().instance().set(&DataKey::Sale, sale);
}

pub fn get_registration(env: &Env) -> Option<Registration> {
    env.storage().instance().get(&DataKey::Registration)
}

pub fn set_registration(env: &Env, registration: &Registration) {
    env.storage()
        .instance()
        .set(&DataKey::Registration, registration);
}

pub fn get_rounds(env: &Env) -> Vec<Round> {
    env.storage()
        .instance()
        .get(&DataKey::Rounds)
        .unwrap_or(Vec::new(env))
}

pub fn set_rounds(env: &Env, rounds: &Vec<Round>) {
    env.storage().instance().set(&DataKey::Rounds, rounds);
}

pub fn get_vesting(env: &Env) -> Option<VestingInfo> {
    env.storage().instance().get(&DataKey::Vesting)
}

pub fn set_vesting(env: &Env, vesting: &VestingInfo) {
    env.storage().instance().set(&DataKey::Vesting, vesting);
}

pub fn get_owner_signer(env: &Env) -> Option<BytesN<20>> {
    env.storage().instance().get(&DataKey::OwnerSigner)
}

pub fn set_owner_signer(env: &Env, signer: &BytesN<20>) {
    env.storage().instance().set(&DataKey::OwnerSigner, signer);
}

pub fn get_registration_fees(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::RegistrationFees)
        .unwrap_or(0)
}

pub fn set_registration_fees(env: &Env, amount: i128) {
    env.storage()
        .instance()
        .set(&DataKey::RegistrationFees, &amount);
}

pub fn get_registered_round(env: &Env, user: &Address) -> Option<u32> {
    env.storage()
        .persistent()
        .get(&DataKey::RegisteredRound(user.clone()))
}

pub fn set_registered_round(env: &Env, user: &Address, round_id: u32) {
    env.storage()
        .persistent()
        .set(&DataKey::RegisteredRound(user.clone()), &round_id);
}

pub fn get_participation(env: &Env, user: &Address) -> Option<Participation> {
    env.storage()
        .persistent()
        .get(&DataKey::Participation(user.clone()))
}

pub fn set_participation(env: &Env, user: &Address, participation: &Participation) {
    env.storage()
        .persistent()
        .set(&DataKey::Participation(user.clone()), participation);
}

pub fn is_portion_withdrawn(env: &Env, user: &Address, portion_id: u32) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::PortionWithdrawn(user.clone(), portion_id))
        .unwrap_or(false)
}

pub fn set_portion_withdrawn(env: &Env, user: &Address, portion_id: u32) {
    env.storage()
        .persistent()
        .set(&DataKey::PortionWithdrawn(user.clone(), portion_id), &true);
}
