use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[derive(Clone)]
#[contracttype]
pub struct SaleRegisteredEvent {
    pub sale: Address,
    pub staking_round_id: u32,
    pub timestamp: u64,
}

pub fn emit_sale_registered(env: &Env, sale: Address, staking_round_id: u32) {
    env.events().publish(
        (symbol_short!("STAKING"), symbol_short!("SALE_REG")),
        SaleRegisteredEvent {
            sale,
            staking_round_id,
            timestamp: env.ledger().timestamp(),
        },
    );
}
