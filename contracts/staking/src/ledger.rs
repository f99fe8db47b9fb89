//! Stake ledger and the per-call transaction buffer.
//!
//! Every mutating entry point works on an in-memory [`Transaction`]: config,
//! totals and the clock are read once when it begins, the caller's record is
//! settled into a local copy, and nothing reaches storage until `commit`.
//! Returning early with an error simply drops the buffer.

use soroban_sdk::{Address, Env};

use crate::rewards;
use crate::state::{self, Config, StakeRecord, Totals};
use crate::ContractError;

// ── Transaction buffer ───────────────────────────────────────────────────────

pub struct Transaction {
    env: Env,
    now: u64,
    config: Config,
    totals: Totals,
    staged: Option<(Address, StakeRecord)>,
}

impl Transaction {
    /// Snapshot ledger state and read the clock for this call.
    pub fn begin(env: &Env) -> Result<Self, ContractError> {
        let config = state::load_config(env).ok_or(ContractError::NotInitialized)?;
        Ok(Self {
            env: env.clone(),
            now: env.ledger().timestamp(),
            config,
            totals: state::load_totals(env),
            staged: None,
        })
    }

    pub fn now(&self) -> u64 {
        self.now
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn totals(&self) -> &Totals {
        &self.totals
    }

    pub fn totals_mut(&mut self) -> &mut Totals {
        &mut self.totals
    }

    /// Load `account`'s record and settle its reward up to this call's clock.
    pub fn settle(&self, account: &Address) -> Result<StakeRecord, ContractError> {
        let mut record = state::load_record(&self.env, account);
        rewards::settle(&self.env, &mut record, self.config.reward_rate, self.now)?;
        Ok(record)
    }

    /// Queue `record` to be written for `account` on commit.
    pub fn stage(&mut self, account: &Address, record: StakeRecord) {
        self.staged = Some((account.clone(), record));
    }

    /// Write the staged record and totals. Returns the committed totals.
    pub fn commit(self) -> Totals {
        if let Some((account, record)) = &self.staged {
            state::store_record(&self.env, account, record);
        }
        state::store_totals(&self.env, &self.totals);
        self.totals
    }
}

// ── Stake ledger mutations ───────────────────────────────────────────────────

/// Principal and reward released by a full unstake.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Withdrawal {
    pub principal: i128,
    pub reward: i128,
}

/// Add `amount` of principal to a settled record.
pub fn deposit(
    totals: &mut Totals,
    record: &mut StakeRecord,
    amount: i128,
) -> Result<(), ContractError> {
    if amount <= 0 {
        return Err(ContractError::InvalidAmount);
    }
    record.amount = record
        .amount
        .checked_add(amount)
        .ok_or(ContractError::MathOverflow)?;
    totals.total_staked = totals
        .total_staked
        .checked_add(amount)
        .ok_or(ContractError::MathOverflow)?;
    Ok(())
}

/// Zero a settled record and release its principal and reward debt.
///
/// `last_settled` is kept so the record's clock never moves backwards.
///
/// # Errors
/// - [`ContractError::NothingStaked`] — the record holds no principal.
pub fn withdraw_all(
    totals: &mut Totals,
    record: &mut StakeRecord,
) -> Result<Withdrawal, ContractError> {
    if record.amount <= 0 {
        return Err(ContractError::NothingStaked);
    }

    let withdrawal = Withdrawal {
        principal: record.amount,
        reward: record.accrued_reward,
    };

    totals.total_staked = totals
        .total_staked
        .checked_sub(withdrawal.principal)
        .ok_or(ContractError::MathOverflow)?;
    record.amount = 0;
    record.accrued_reward = 0;

    Ok(withdrawal)
}

/// Clear a settled record's reward debt and return it.
///
/// # Errors
/// - [`ContractError::NoRewardAvailable`] — nothing has accrued.
pub fn take_reward(record: &mut StakeRecord) -> Result<i128, ContractError> {
    if record.accrued_reward <= 0 {
        return Err(ContractError::NoRewardAvailable);
    }
    let reward = record.accrued_reward;
    record.accrued_reward = 0;
    Ok(reward)
}
