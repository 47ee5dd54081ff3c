use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[derive(Clone)]
#[contracttype]
pub struct SaleDeployedEvent {
    pub sale: Address,
    pub index: u32,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct SaleOwnerAndTokenSetEvent {
    pub sale: Address,
    pub sale_owner: Address,
    pub token: Address,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct StakingSetEvent {
    pub allocation_staking: Address,
    pub timestamp: u64,
}

pub fn emit_sale_deployed(env: &Env, sale: Address, index: u32) {
    env.events().publish(
        (symbol_short!("FACTORY"), symbol_short!("DEPLOYED")),
        SaleDeployedEvent {
            sale,
            index,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_sale_owner_and_token_set(env: &Env, sale: Address, sale_owner: Address, token: Address) {
    env.events().publish(
        (symbol_short!("FACTORY"), symbol_short!("OWNR_TKN")),
        SaleOwnerAndTokenSetEvent {
            sale,
            sale_owner,
            token,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_staking_set(env: &Env, allocation_staking: Address) {
    env.events().publish(
        (symbol_short!("FACTORY"), symbol_short!("STAKING")),
        StakingSetEvent {
            allocation_staking,
            timestamp: env.ledger().timestamp(),
        },
    );
}
