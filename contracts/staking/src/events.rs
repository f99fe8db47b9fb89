#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the contract is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub token: Address,
    pub reward_rate: i128,
    pub timestamp: u64,
}

/// Fired when a user deposits stake.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakedEvent {
    pub staker: Address,
    pub amount: i128,
    pub new_total_staked: i128,
    pub timestamp: u64,
}

/// Fired when a user withdraws their whole position.
///
/// `reward_forfeited` is non-zero when the pool could not cover the reward
/// and the debt was dropped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnstakedEvent {
    pub staker: Address,
    pub principal: i128,
    pub reward_paid: i128,
    pub reward_forfeited: i128,
    pub new_total_staked: i128,
    pub timestamp: u64,
}

/// Fired when a user claims accumulated rewards.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardClaimedEvent {
    pub staker: Address,
    pub amount: i128,
    pub remaining_pool: i128,
    pub timestamp: u64,
}

/// Fired when the admin funds the reward pool.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolFundedEvent {
    pub funder: Address,
    pub amount: i128,
    pub new_pool_balance: i128,
    pub custody_balance: i128,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(
    env: &Env,
    admin: Address,
    token: Address,
    reward_rate: i128,
    timestamp: u64,
) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            admin,
            token,
            reward_rate,
            timestamp,
        },
    );
}

pub fn publish_staked(
    env: &Env,
    staker: Address,
    amount: i128,
    new_total_staked: i128,
    timestamp: u64,
) {
    env.events().publish(
        (symbol_short!("STAKED"), staker.clone()),
        StakedEvent {
            staker,
            amount,
            new_total_staked,
            timestamp,
        },
    );
}

pub fn publish_unstaked(
    env: &Env,
    staker: Address,
    principal: i128,
    reward_paid: i128,
    reward_forfeited: i128,
    new_total_staked: i128,
    timestamp: u64,
) {
    env.events().publish(
        (symbol_short!("UNSTAKED"), staker.clone()),
        UnstakedEvent {
            staker,
            principal,
            reward_paid,
            reward_forfeited,
            new_total_staked,
            timestamp,
        },
    );
}

pub fn publish_reward_claimed(
    env: &Env,
    staker: Address,
    amount: i128,
    remaining_pool: i128,
    timestamp: u64,
) {
    env.events().publish(
        (symbol_short!("CLMD"), staker.clone()),
        RewardClaimedEvent {
            staker,
            amount,
            remaining_pool,
            timestamp,
        },
    );
}

pub fn publish_pool_funded(
    env: &Env,
    funder: Address,
    amount: i128,
    new_pool_balance: i128,
    custody_balance: i128,
    timestamp: u64,
) {
    env.events().publish(
        (symbol_short!("FUNDED"), funder.clone()),
        PoolFundedEvent {
            funder,
            amount,
            new_pool_balance,
            custody_balance,
            timestamp,
        },
    );
}
