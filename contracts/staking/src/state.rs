//! Persisted ledger state and its storage layout.
//!
//! - Instance storage: [`Config`] (fixed at initialisation) and [`Totals`].
//! - Persistent storage: one [`StakeRecord`] per account.

use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

// ── Storage keys ─────────────────────────────────────────────────────────────

const CONFIG: Symbol = symbol_short!("CONFIG");
const TOTALS: Symbol = symbol_short!("TOTALS");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
enum DataKey {
    Stake(Address),
}

// ── TTL constants ────────────────────────────────────────────────────────────

const TTL_THRESHOLD: u32 = 518_400;
const TTL_EXTEND_TO: u32 = 3_110_400;

// ── Types ────────────────────────────────────────────────────────────────────

/// Immutable contract configuration.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// The only address allowed to fund the reward pool.
    pub admin: Address,
    /// Token contract used for principal and rewards alike.
    pub token: Address,
    /// Reward units per second per `SCALE` units of stake.
    pub reward_rate: i128,
}

/// Global counters, mutated by every successful state-changing call.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Totals {
    /// Sum of every account's `StakeRecord::amount`.
    pub total_staked: i128,
    /// Admin-funded balance available for reward payouts.
    pub reward_pool: i128,
}

/// Per-account position. Created implicitly (all zeros) on first reference
/// and zeroed, never removed, on a full unstake.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StakeRecord {
    /// Principal currently staked.
    pub amount: i128,
    /// Reward earned but not yet paid out.
    pub accrued_reward: i128,
    /// Ledger timestamp of the last settlement.
    pub last_settled: u64,
}

// ── Accessors ────────────────────────────────────────────────────────────────

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&CONFIG)
}

pub fn load_config(env: &Env) -> Option<Config> {
    env.storage().instance().get(&CONFIG)
}

pub fn store_config(env: &Env, config: &Config) {
    env.storage().instance().set(&CONFIG, config);
}

pub fn load_totals(env: &Env) -> Totals {
    env.storage().instance().get(&TOTALS).unwrap_or_default()
}

pub fn store_totals(env: &Env, totals: &Totals) {
    env.storage().instance().set(&TOTALS, totals);
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn load_record(env: &Env, account: &Address) -> StakeRecord {
    env.storage()
        .persistent()
        .get(&DataKey::Stake(account.clone()))
        .unwrap_or_default()
}

pub fn store_record(env: &Env, account: &Address, record: &StakeRecord) {
    let key = DataKey::Stake(account.clone());
    env.storage().persistent().set(&key, record);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}
