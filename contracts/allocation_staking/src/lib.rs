#![no_std]

//! Side registry of launchpad sales.
//!
//! A sale reports itself here once its rounds are defined, together with the
//! round id that is staking-gated. Only sales deployed through the configured
//! factory are accepted. Reward and fee accounting live elsewhere.


mod errors;
mod events;

pub use errors::StakingError;

use soroban_sdk::{
    contract, contractclient, contractimpl, contractmeta, contracttype, Address, Env, Vec,
};

#[contractclient(name = "AdminRegistryClient")]
pub trait AdminRegistryInterface {
    fn is_admin(env: Env, account: Address) -> bool;
}

#[contractclient(name = "SalesFactoryClient")]
pub trait SalesFactoryInterface {
    fn is_sale_created_through_factory(env: Env, sale: Address) -> bool;
}

#[contracttype]
pub enum DataKey {
    AdminRegistry,
    SalesFactory,
    Sales,                  // Vec<Address>
    StakingRound(Address),  // u32
}

contractmeta!(key = "Description", val = "Launchpad allocation staking sale registry");

#[contract]
pub struct AllocationStaking;

#[contractimpl]
impl AllocationStaking {
    pub fn initialize(
        env: Env,
        caller: Address,
        admin_registry: Address,
        sales_factory: Address,
    ) -> Result<(), StakingError> {
        if env.storage().instance().has(&DataKey::AdminRegistry) {
            return Err(StakingError::AlreadyInitialized);
        }
        caller.require_auth();
        if !AdminRegistryClient::new(&env, &admin_registry).is_admin(&caller) {
            return Err(StakingError::NotAdmin);
        }
        env.storage()
            .instance()
            .set(&DataKey::AdminRegistry, &admin_registry);
        env.storage()
            .instance()
            .set(&DataKey::SalesFactory, &sales_factory);
        env.storage()
            .instance()
            .set(&DataKey::Sales, &Vec::<Address>::new(&env));
        Ok(())
    }

    pub fn set_sales_factory(
        env: Env,
        caller: Address,
        sales_factory: Address,
    ) -> Result<(), StakingError> {
        caller.require_auth();
        let registry: Address = env
            .storage()
            .instance()
            .get(&DataKey::AdminRegistry)
            .ok_or(StakingError::NotInitialized)?;
        if !AdminRegistryClient::new(&env, &registry).is_admin(&caller) {
            return Err(StakingError::NotAdmin);
        }
        env.storage()
            .instance()
            .set(&DataKey::SalesFactory, &sales_factory);
        Ok(())
    }

    /// Called by a sale when it defines its rounds.
    pub fn register_sale(env: Env, sale: Address, staking_round_id: u32) -> Result<(), StakingError> {
        sale.require_auth();
        let factory: Address = env
            .storage()
            .instance()
            .get(&DataKey::SalesFactory)
            .ok_or(StakingError::NotInitialized)?;

        if staking_round_id == 0 {
            return Err(StakingError::InvalidStakingRoundId);
        }
        if !SalesFactoryClient::new(&env, &factory).is_sale_created_through_factory(&sale) {
            return Err(StakingError::SaleNotRecognised);
        }
        let key = DataKey::StakingRound(sale.clone());
        if env.storage().persistent().has(&key) {
            return Err(StakingError::SaleAlreadyRegistered);
        }

        env.storage().persistent().set(&key, &staking_round_id);
        let mut sales = Self::get_registered_sales(env.clone());
        sales.push_back(sale.clone());
        env.storage().instance().set(&DataKey::Sales, &sales);

        events::emit_sale_registered(&env, sale, staking_round_id);
        Ok(())
    }

    pub fn is_sale_registered(env: Env, sale: Address) -> bool {
        env.storage()
            .persistent()
            .has(&DataKey::StakingRound(sale))
    }

    pub fn get_staking_round_id(env: Env, sale: Address) -> Option<u32> {
        env.storage()
            .persistent()
            .get(&DataKey::StakingRound(sale))
    }

    pub fn get_registered_sales(env: Env) -> Vec<Address> {
        env.storage()
            .instance()
            .get(&DataKey::Sales)
            .unwrap_or(Vec::new(&env))
    }

    pub fn get_sales_factory(env: Env) -> Option<Address> {
        env.storage().instance().get(&DataKey::SalesFactory)
    }
}
