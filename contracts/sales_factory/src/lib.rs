#![no_std]

//! Deploys launchpad sales and keeps the registry of what it deployed.
//!
//! Each sale reports its `(sale_owner, token)` pair back once it is
//! configured. An owner and a token can each belong to a single sale.


mod errors;
mod events;
pub mod registry;

pub use errors::FactoryError;

use soroban_sdk::{
    contract, contractclient, contractimpl, contractmeta, contracttype, log, Address, BytesN,
    Env, Vec,
};

#[contractclient(name = "AdminRegistryClient")]
pub trait AdminRegistryInterface {
    fn is_admin(env: Env, account: Address) -> bool;
}

#[contractclient(name = "SaleClient")]
pub trait SaleInterface {
    fn initialize(
        env: Env,
        factory: Address,
        admin_registry: Address,
        payment_token: Address,
        allocation_staking: Option<Address>,
    );
}

#[contracttype]
pub enum DataKey {
    AdminRegistry,
    PaymentToken,
    SaleWasmHash,
    AllocationStaking,
}

contractmeta!(key = "Description", val = "Launchpad sales factory");

#[contract]
pub struct SalesFactory;

#[contractimpl]
impl SalesFactory {
    /// `caller` must be an admin of `admin_registry`.
    pub fn initialize(
        env: Env,
        caller: Address,
        admin_registry: Address,
        payment_token: Address,
        sale_wasm_hash: BytesN<32>,
        allocation_staking: Option<Address>,
    ) -> Result<(), FactoryError> {
        if env.storage().instance().has(&DataKey::AdminRegistry) {
            return Err(FactoryError::AlreadyInitialized);
        }
        caller.require_auth();
        if !AdminRegistryClient::new(&env, &admin_registry).is_admin(&caller) {
            return Err(FactoryError::NotAdmin);
        }
        env.storage()
            .instance()
            .set(&DataKey::AdminRegistry, &admin_registry);
        env.storage()
            .instance()
            .set(&DataKey::PaymentToken, &payment_token);
        env.storage()
            .instance()
            .set(&DataKey::SaleWasmHash, &sale_wasm_hash);
        if let Some(staking) = allocation_staking {
            env.storage()
                .instance()
                .set(&DataKey::AllocationStaking, &staking);
        }
        Ok(())
    }

    /// Deploy and initialize a new, unconfigured sale.
    pub fn deploy_sale(env: Env, caller: Address) -> Result<Address, FactoryError> {
        let admin_registry = require_admin(&env, &caller)?;
        let payment_token: Address = env
            .storage()
            .instance()
            .get(&DataKey::PaymentToken)
            .ok_or(FactoryError::NotInitialized)?;
        let wasm_hash: BytesN<32> = env
            .storage()
            .instance()
            .get(&DataKey::SaleWasmHash)
            .ok_or(FactoryError::NotInitialized)?;

        let index = registry::sale_count(&env);
        let mut salt = [0u8; 32];
        salt[28..].copy_from_slice(&index.to_be_bytes());
        let sale = env
            .deployer()
            .with_current_contract(BytesN::from_array(&env, &salt))
            .deploy(wasm_hash);

        SaleClient::new(&env, &sale).initialize(
            &env.current_contract_address(),
            &admin_registry,
            &payment_token,
            &Self::get_allocation_staking(env.clone()),
        );
        registry::record_deployed_sale(&env, &sale);

        log!(&env, "sale deployed", sale, index);
        events::emit_sale_deployed(&env, sale.clone(), index);
        Ok(sale)
    }

    /// Callback from a factory-made sale once its parameters are set.
    pub fn set_sale_owner_and_token(
        env: Env,
        sale: Address,
        sale_owner: Address,
        token: Address,
    ) -> Result<(), FactoryError> {
        sale.require_auth();
        if !registry::is_factory_sale(&env, &sale) {
            return Err(FactoryError::ContractNotEligible);
        }
        registry::bind_owner_and_token(&env, &sale, &sale_owner, &token)?;

        events::emit_sale_owner_and_token_set(&env, sale, sale_owner, token);
        Ok(())
    }

    pub fn set_allocation_staking(
        env: Env,
        caller: Address,
        allocation_staking: Address,
    ) -> Result<(), FactoryError> {
        require_admin(&env, &caller)?;
        env.storage()
            .instance()
            .set(&DataKey::AllocationStaking, &allocation_staking);
        events::emit_staking_set(&env, allocation_staking);
        Ok(())
    }

    /// Sales deployed afterwards run the new code; existing ones are untouched.
    pub fn set_sale_wasm_hash(
        env: Env,
        caller: Address,
        sale_wasm_hash: BytesN<32>,
    ) -> Result<(), FactoryError> {
        require_admin(&env, &caller)?;
        env.storage()
            .instance()
            .set(&DataKey::SaleWasmHash, &sale_wasm_hash);
        Ok(())
    }

    pub fn get_number_of_sales_deployed(env: Env) -> u32 {
        registry::sale_count(&env)
    }

    /// Deployed sales in `[start, end)`.
    pub fn get_all_sales(env: Env, start: u32, end: u32) -> Result<Vec<Address>, FactoryError> {
        registry::sales_in_range(&env, start, end)
    }

    pub fn get_sale_at(env: Env, index: u32) -> Option<Address> {
        registry::sale_at(&env, index)
    }

    pub fn is_sale_created_through_factory(env: Env, sale: Address) -> bool {
        registry::is_factory_sale(&env, &sale)
    }

    pub fn get_sale_by_owner(env: Env, sale_owner: Address) -> Option<Address> {
        registry::sale_by_owner(&env, &sale_owner)
    }

    pub fn get_sale_by_token(env: Env, token: Address) -> Option<Address> {
        registry::sale_by_token(&env, &token)
    }

    pub fn get_allocation_staking(env: Env) -> Option<Address> {
        env.storage().instance().get(&DataKey::AllocationStaking)
    }

    pub fn get_admin_registry(env: Env) -> Option<Address> {
        env.storage().instance().get(&DataKey::AdminRegistry)
    }

    pub fn get_sale_wasm_hash(env: Env) -> Option<BytesN<32>> {
        env.storage().instance().get(&DataKey::SaleWasmHash)
    }
}

fn require_admin(env: &Env, caller: &Address) -> Result<Address, FactoryError> {
    caller.require_auth();
    let admin_registry: Address = env
        .storage()
        .instance()
        .get(&DataKey::AdminRegistry)
        .ok_or(FactoryError::NotInitialized)?;
    if !AdminRegistryClient::new(env, &admin_registry).is_admin(caller) {
        return Err(FactoryError::NotAdmin);
    }
    Ok(admin_registry)
}
