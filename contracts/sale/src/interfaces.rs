use soroban_sdk::{contractclient, Address, BytesN, Env};

#[contractclient(name = "AdminRegistryClient")]
pub trait AdminRegistryInterface {
    fn is_admin(env: Env, account: Address) -> bool;
    fn is_admin_signer(env: Env, signer: BytesN<20>) -> bool;
}

/// Callback into the factory that deployed this sale. The factory's error
/// surfaces as a failed invocation.
#[contractclient(name = "SalesFactoryClient")]
pub trait SalesFactoryInterface {
    fn set_sale_owner_and_token(env: Env, sale: Address, sale_owner: Address, token: Address);
}

#[contractclient(name = "AllocationStakingClient")]
pub trait AllocationStakingInterface {
    fn register_sale(env: Env, sale: Address, staking_round_id: u32);
}
