//! Shared setup for the property suites.

use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::StellarAssetClient,
    Address, Env,
};
use staking::{StakingContract, StakingContractClient};

/// One whole token in base units.
pub const UNIT: i128 = 1_000_000_000_000_000_000;

/// 0.001 reward per second per whole token staked.
pub const RATE: i128 = 1_000_000_000_000_000;

pub struct Fixture {
    pub env: Env,
    pub client: StakingContractClient<'static>,
    pub admin: Address,
    pub token: Address,
}

impl Fixture {
    pub fn new(reward_rate: i128) -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.ledger().set_timestamp(0);

        let token = env
            .register_stellar_asset_contract_v2(Address::generate(&env))
            .address();
        let contract_id = env.register(StakingContract, ());
        let client = StakingContractClient::new(&env, &contract_id);

        let admin = Address::generate(&env);
        client.initialize(&admin, &token, &reward_rate);

        Self {
            env,
            client,
            admin,
            token,
        }
    }

    /// A fresh account holding `amount` tokens.
    pub fn account_with(&self, amount: i128) -> Address {
        let account = Address::generate(&self.env);
        StellarAssetClient::new(&self.env, &self.token).mint(&account, &amount);
        account
    }

    pub fn fund_pool(&self, amount: i128) {
        StellarAssetClient::new(&self.env, &self.token).mint(&self.admin, &amount);
        self.client.fund_pool(&self.admin, &amount);
    }

    pub fn set_time(&self, timestamp: u64) {
        self.env.ledger().set_timestamp(timestamp);
    }

    pub fn advance(&self, seconds: u64) {
        let now = self.env.ledger().timestamp();
        self.env.ledger().set_timestamp(now + seconds);
    }
}
