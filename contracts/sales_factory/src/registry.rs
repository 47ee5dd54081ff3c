//! Bookkeeping of deployed sales and their owner/token claims.

use crate::errors::FactoryError;
use soroban_sdk::{contracttype, Address, Env, Vec};

#[contracttype]
pub enum RegistryKey {
    SaleCount,
    SaleAt(u32),
    FactorySale(Address),
    SaleByOwner(Address),
    SaleByToken(Address),
}

pub fn sale_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&RegistryKey::SaleCount)
        .unwrap_or(0)
}

pub fn sale_at(env: &Env, index: u32) -> Option<Address> {
    env.storage().persistent().get(&RegistryKey::SaleAt(index))
}

pub fn is_factory_sale(env: &Env, sale: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&RegistryKey::FactorySale(sale.clone()))
}

/// Append `sale` to the deployment list and mark it as factory-made.
/// Returns its index.
pub fn record_deployed_sale(env: &Env, sale: &Address) -> u32 {
    let index = sale_count(env);
    env.storage()
        .persistent()
        .set(&RegistryKey::SaleAt(index), sale);
    env.storage()
        .persistent()
        .set(&RegistryKey::FactorySale(sale.clone()), &true);
    env.storage()
        .instance()
        .set(&RegistryKey::SaleCount, &(index + 1));
    index
}

pub fn sale_by_owner(env: &Env, sale_owner: &Address) -> Option<Address> {
    env.storage()
        .persistent()
        .get(&RegistryKey::SaleByOwner(sale_owner.clone()))
}

pub fn sale_by_token(env: &Env, token: &Address) -> Option<Address> {
    env.storage()
        .persistent()
        .get(&RegistryKey::SaleByToken(token.clone()))
}

/// Bind `sale_owner` and `token` to `sale`. Each key binds to one sale only;
/// a sale re-asserting its own binding is accepted.
pub fn bind_owner_and_token(
    env: &Env,
    sale: &Address,
    sale_owner: &Address,
    token: &Address,
) -> Result<(), FactoryError> {
    if let Some(bound) = sale_by_owner(env, sale_owner) {
        if bound != *sale {
            return Err(FactoryError::SaleOwnerAlreadySet);
        }
    }
    if let Some(bound) = sale_by_token(env, token) {
        if bound != *sale {
            return Err(FactoryError::TokenAlreadySet);
        }
    }
    env.storage()
        .persistent()
        .set(&RegistryKey::SaleByOwner(sale_owner.clone()), sale);
    env.storage()
        .persistent()
        .set(&RegistryKey::SaleByToken(token.clone()), sale);
    Ok(())
}

/// Sales in `[start, end)`.
pub fn sales_in_range(env: &Env, start: u32, end: u32) -> Result<Vec<Address>, FactoryError> {
    if start >= end || end > sale_count(env) {
        return Err(FactoryError::InvalidPagination);
    }
    let mut sales = Vec::new(env);
    for index in start..end {
        sales.push_back(sale_at(env, index).ok_or(FactoryError::InvalidPagination)?);
    }
    Ok(sales)
}
