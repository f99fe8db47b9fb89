#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::StellarAssetClient,
    Address, Env,
};
use staking::{StakingContract, StakingContractClient};

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Stake { who: u8, amount: u64 },
    Unstake { who: u8 },
    ClaimReward { who: u8 },
    FundPool { amount: u64 },
    Advance { seconds: u32 },
}

fuzz_target!(|input: (u64, Vec<FuzzAction>)| {
    let (rate, actions) = input;

    let env = Env::default();
    env.mock_all_auths();

    let token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let contract_id = env.register(StakingContract, ());
    let client = StakingContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    client.initialize(&admin, &token, &i128::from(rate));

    let minter = StellarAssetClient::new(&env, &token);
    let users: Vec<Address> = (0..4).map(|_| Address::generate(&env)).collect();
    for user in &users {
        minter.mint(user, &i128::from(u64::MAX));
    }
    minter.mint(&admin, &i128::from(u64::MAX));

    // Any error is fine; a host panic or a broken invariant is not.
    for action in actions {
        match action {
            FuzzAction::Stake { who, amount } => {
                let user = &users[usize::from(who) % users.len()];
                let _ = client.try_stake(user, &i128::from(amount));
            }
            FuzzAction::Unstake { who } => {
                let user = &users[usize::from(who) % users.len()];
                let _ = client.try_unstake(user);
            }
            FuzzAction::ClaimReward { who } => {
                let user = &users[usize::from(who) % users.len()];
                let _ = client.try_claim_reward(user);
            }
            FuzzAction::FundPool { amount } => {
                let _ = client.try_fund_pool(&admin, &i128::from(amount));
            }
            FuzzAction::Advance { seconds } => {
                let now = env.ledger().timestamp();
                env.ledger().set_timestamp(now.saturating_add(u64::from(seconds)));
            }
        }

        let info = client.get_contract_info();
        let sum: i128 = users.iter().map(|u| client.get_stake(u).amount).sum();
        assert_eq!(info.total_staked, sum);
        assert_eq!(
            client.get_custody_balance(),
            info.total_staked + info.reward_pool_balance
        );
    }
});
