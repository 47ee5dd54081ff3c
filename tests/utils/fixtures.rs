/// Launchpad fixture: admin registry, staking, factory and a payment token wired together
use admin::{AdminRegistry, AdminRegistryClient};
use allocation_staking::{AllocationStaking, AllocationStakingClient};
use sale::{SaleContract, SaleContractClient, SaleParams};
use sales_factory::{registry, SalesFactory, SalesFactoryClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, vec, Address, BytesN, Env,
};

use super::constants::*;
use super::signing::Backend;

pub struct Launchpad<'a> {
    pub env: &'a Env,
    pub admin: Address,
    pub backend: Backend,
    pub admins: AdminRegistryClient<'a>,
    pub staking: AllocationStakingClient<'a>,
    pub factory: SalesFactoryClient<'a>,
    pub payment: token::Client<'a>,
}

impl<'a> Launchpad<'a> {
    pub fn new(env: &'a Env) -> Self {
        env.mock_all_auths();
        env.ledger().set_timestamp(T0);

        let admin = Address::generate(env);
        let backend = Backend::new(42);

        let admins = AdminRegistryClient::new(env, &env.register_contract(None, AdminRegistry));
        admins.initialize(&vec![env, admin.clone()]);
        admins.set_signer(&admin, &backend.signer_id(env));

        let payment_id = env
            .register_stellar_asset_contract_v2(Address::generate(env))
            .address();

        let staking = AllocationStakingClient::new(env, &env.register_contract(None, AllocationStaking));
        let factory = SalesFactoryClient::new(env, &env.register_contract(None, SalesFactory));
        factory.initialize(
            &admin,
            &admins.address,
            &payment_id,
            &BytesN::from_array(env, &[0u8; 32]),
            &Some(staking.address.clone()),
        );
        staking.initialize(&admin, &admins.address, &factory.address);

        Self {
            env,
            admin,
            backend,
            admins,
            staking,
            factory,
            payment: token::Client::new(env, &payment_id),
        }
    }

    /// Register a native sale and record it exactly as `deploy_sale` does.
    /// `deploy_sale` itself needs the sale wasm, which native tests lack.
    pub fn deploy_sale(&self) -> SaleContractClient<'a> {
        let sale_id = self.env.register_contract(None, SaleContract);
        let sale = SaleContractClient::new(self.env, &sale_id);
        sale.initialize(
            &self.factory.address,
            &self.admins.address,
            &self.payment.address,
            &self.factory.get_allocation_staking(),
        );
        self.env.as_contract(&self.factory.address, || {
            registry::record_deployed_sale(self.env, &sale_id)
        });
        sale
    }

    /// A fresh sale token with `amount` minted to `holder`
    pub fn new_token(&self, holder: &Address, amount: i128) -> token::Client<'a> {
        let token_id = self
            .env
            .register_stellar_asset_contract_v2(Address::generate(self.env))
            .address();
        token::StellarAssetClient::new(self.env, &token_id).mint(holder, &amount);
        token::Client::new(self.env, &token_id)
    }

    /// A buyer funded with `USER_FUNDS` of the payment token
    pub fn user(&self) -> Address {
        let user = Address::generate(self.env);
        token::StellarAssetClient::new(self.env, &self.payment.address).mint(&user, &USER_FUNDS);
        user
    }

    pub fn params(&self, sale_owner: &Address, token: &Address) -> SaleParams {
        SaleParams {
            token: token.clone(),
            sale_owner: sale_owner.clone(),
            token_price: PRICE,
            amount_of_tokens_to_sell: TO_SELL,
            sale_end: SALE_END,
            tokens_unlock_time: UNLOCK,
            portion_vesting_precision: PRECISION,
            staking_round_id: 2,
            registration_deposit: DEPOSIT,
        }
    }

    /// Deployed, configured, scheduled, funded and vested sale
    pub fn ready_sale(&self, sale_owner: &Address) -> (SaleContractClient<'a>, token::Client<'a>) {
        let token = self.new_token(sale_owner, TO_SELL);
        let sale = self.deploy_sale();
        sale.set_sale_params(&self.admin, &self.params(sale_owner, &token.address));
        sale.set_registration_time(&self.admin, &REG_START, &REG_END);
        sale.set_rounds(
            &self.admin,
            &vec![self.env, ROUND_1, ROUND_2, ROUND_3],
            &vec![self.env, 1_020 * ONE, 1_000 * ONE, 10_000 * ONE],
        );
        sale.deposit_tokens(sale_owner);
        sale.set_vesting_params(
            &self.admin,
            &vec![self.env, UNLOCK, UNLOCK + 100],
            &vec![self.env, 500, 500],
            &0,
        );
        (sale, token)
    }

    pub fn register(&self, sale: &SaleContractClient, user: &Address, round_id: u32) {
        self.env.ledger().set_timestamp(REG_START);
        let sig = self
            .backend
            .sign_registration(self.env, user, round_id, &sale.address);
        sale.register_for_sale(user, &sig, &round_id, &DEPOSIT);
    }

    pub fn participate(
        &self,
        sale: &SaleContractClient,
        user: &Address,
        round_id: u32,
        allowance: i128,
        value: i128,
    ) {
        let sig = self
            .backend
            .sign_participation(self.env, user, allowance, 0, round_id, &sale.address);
        sale.participate(user, &sig, &allowance, &0, &round_id, &value);
    }

    pub fn set_time(&self, timestamp: u64) {
        self.env.ledger().set_timestamp(timestamp);
    }
}
