use soroban_sdk::{contracttype, symbol_short, Address, BytesN, Env};

#[derive(Clone)]
#[contracttype]
pub struct AdminChangedEvent {
    pub admin: Address,
    pub changed_by: Address,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct SignerSetEvent {
    pub admin: Address,
    pub signer: BytesN<20>,
    pub timestamp: u64,
}

pub fn emit_admin_added(env: &Env, admin: Address, changed_by: Address) {
    env.events().publish(
        (symbol_short!("ADMIN"), symbol_short!("ADDED")),
        AdminChangedEvent {
            admin,
            changed_by,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_admin_removed(env: &Env, admin: Address, changed_by: Address) {
    env.events().publish(
        (symbol_short!("ADMIN"), symbol_short!("REMOVED")),
        AdminChangedEvent {
            admin,
            changed_by,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_signer_set(env: &Env, admin: Address, signer: BytesN<20>) {
    env.events().publish(
        (symbol_short!("ADMIN"), symbol_short!("SIGNER")),
        SignerSetEvent {
            admin,
            signer,
            timestamp: env.ledger().timestamp(),
        },
    );
}
