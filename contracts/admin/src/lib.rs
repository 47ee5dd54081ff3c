#![no_std]

//! Admin registry consumed by the launchpad contracts as a capability check.
//!
//! Besides the admin set itself, each admin may bind the 20-byte identity of
//! the off-chain key its backend signs registration and participation
//! authorizations with. Sales accept a recovered signer only while the admin
//! it is bound to is still in the set.


mod errors;
mod events;

pub use errors::AdminError;

use soroban_sdk::{contract, contractimpl, contractmeta, contracttype, Address, BytesN, Env, Vec};

#[contracttype]
pub enum DataKey {
    Admins,                 // Vec<Address>, instance
    AdminSigner(Address),   // BytesN<20>
    SignerOwner(BytesN<20>), // Address
}

contractmeta!(key = "Description", val = "Launchpad admin registry");

#[contract]
pub struct AdminRegistry;

#[contractimpl]
impl AdminRegistry {
    /// Seed the registry. Must be called exactly once with at least one admin,
    /// and every seeded admin authorizes it.
    pub fn initialize(env: Env, admins: Vec<Address>) -> Result<(), AdminError> {
        if env.storage().instance().has(&DataKey::Admins) {
            return Err(AdminError::AlreadyInitialized);
        }
        if admins.is_empty() {
            return Err(AdminError::EmptyAdminSet);
        }

        let mut unique = Vec::new(&env);
        for admin in admins.iter() {
            if !unique.contains(&admin) {
                admin.require_auth();
                unique.push_back(admin);
            }
        }
        env.storage().instance().set(&DataKey::Admins, &unique);
        Ok(())
    }

    pub fn add_admin(env: Env, caller: Address, admin: Address) -> Result<(), AdminError> {
        caller.require_auth();
        let mut admins = Self::read_admins(&env)?;
        if !admins.contains(&caller) {
            return Err(AdminError::NotAuthorized);
        }
        if admins.contains(&admin) {
            return Err(AdminError::AlreadyAdmin);
        }

        admins.push_back(admin.clone());
        env.storage().instance().set(&DataKey::Admins, &admins);

        events::emit_admin_added(&env, admin, caller);
        Ok(())
    }

    /// Remove `admin` from the set. The last admin can not be removed.
    pub fn remove_admin(env: Env, caller: Address, admin: Address) -> Result<(), AdminError> {
        caller.require_auth();
        let admins = Self::read_admins(&env)?;
        if !admins.contains(&caller) {
            return Err(AdminError::NotAuthorized);
        }
        let index = admins.first_index_of(&admin).ok_or(AdminError::NotAdmin)?;
        if admins.len() == 1 {
            return Err(AdminError::EmptyAdminSet);
        }

        let mut updated = admins;
        updated.remove(index);
        env.storage().instance().set(&DataKey::Admins, &updated);
        Self::clear_signer(&env, &admin);

        events::emit_admin_removed(&env, admin, caller);
        Ok(())
    }

    /// Bind the off-chain signing identity of `admin`, replacing any previous one.
    pub fn set_signer(env: Env, admin: Address, signer: BytesN<20>) -> Result<(), AdminError> {
        admin.require_auth();
        let admins = Self::read_admins(&env)?;
        if !admins.contains(&admin) {
            return Err(AdminError::NotAdmin);
        }

        let owner: Option<Address> = env
            .storage()
            .persistent()
            .get(&DataKey::SignerOwner(signer.clone()));
        if let Some(owner) = owner {
            if owner != admin {
                return Err(AdminError::SignerTaken);
            }
        }

        Self::clear_signer(&env, &admin);
        env.storage()
            .persistent()
            .set(&DataKey::AdminSigner(admin.clone()), &signer);
        env.storage()
            .persistent()
            .set(&DataKey::SignerOwner(signer.clone()), &admin);

        events::emit_signer_set(&env, admin, signer);
        Ok(())
    }

    pub fn is_admin(env: Env, account: Address) -> bool {
        Self::read_admins(&env)
            .map(|admins| admins.contains(&account))
            .unwrap_or(false)
    }

    /// True if `signer` is bound to an address that is currently an admin.
    pub fn is_admin_signer(env: Env, signer: BytesN<20>) -> bool {
        let owner: Option<Address> = env.storage().persistent().get(&DataKey::SignerOwner(signer));
        match owner {
            Some(admin) => Self::is_admin(env, admin),
            None => false,
        }
    }

    pub fn get_signer(env: Env, admin: Address) -> Option<BytesN<20>> {
        env.storage().persistent().get(&DataKey::AdminSigner(admin))
    }

    pub fn get_admins(env: Env) -> Result<Vec<Address>, AdminError> {
        Self::read_admins(&env)
    }

    // ------------------------------------------------------------------
    // Internal helpers
    // ------------------------------------------------------------------

    fn read_admins(env: &Env) -> Result<Vec<Address>, AdminError> {
        env.storage()
            .instance()
            .get(&DataKey::Admins)
            .ok_or(AdminError::NotInitialized)
    }

    fn clear_signer(env: &Env, admin: &Address) {
        let previous: Option<BytesN<20>> = env
            .storage()
            .persistent()
            .get(&DataKey::AdminSigner(admin.clone()));
        if let Some(previous) = previous {
            env.storage()
                .persistent()
                .remove(&DataKey::SignerOwner(previous));
            env.storage()
                .persistent()
                .remove(&DataKey::AdminSigner(admin.clone()));
        }
    }
}
