//! Reward accrual engine.
//!
//! A position earns `elapsed × rate × amount / SCALE` reward units, rounded
//! down. The product is formed before the division so that small stakes and
//! short intervals are not truncated to zero.
//!
//! `elapsed × rate` is taken in checked `u128` and the multiplication by
//! `amount` in host-side `U256`: a value below 2^128 times a value below
//! 2^127 always fits in 256 bits, so the wide step cannot wrap. Only the final
//! narrowing back to `i128` can fail, and it reports `MathOverflow`.

use soroban_sdk::{Env, U256};

use crate::state::StakeRecord;
use crate::ContractError;

/// Fixed-point scaling factor for the reward rate (10^18).
pub const SCALE: u128 = 1_000_000_000_000_000_000;

/// Reward earned by `amount` over `elapsed` seconds at `rate`.
///
/// Zero amount, zero rate or zero elapsed time short-circuit to zero.
pub fn accrue(env: &Env, amount: i128, rate: i128, elapsed: u64) -> Result<i128, ContractError> {
    if amount <= 0 || rate <= 0 || elapsed == 0 {
        return Ok(0);
    }

    let amount = u128::try_from(amount).map_err(|_| ContractError::MathOverflow)?;
    let rate = u128::try_from(rate).map_err(|_| ContractError::MathOverflow)?;

    let per_unit = u128::from(elapsed)
        .checked_mul(rate)
        .ok_or(ContractError::MathOverflow)?;

    let reward = U256::from_u128(env, per_unit)
        .mul(&U256::from_u128(env, amount))
        .div(&U256::from_u128(env, SCALE));

    let reward = reward.to_u128().ok_or(ContractError::MathOverflow)?;
    i128::try_from(reward).map_err(|_| ContractError::MathOverflow)
}

/// Fold everything earned since `last_settled` into `accrued_reward` and move
/// the settlement point to `now`.
///
/// An empty position skips the arithmetic but still advances `last_settled`.
///
/// # Errors
/// - [`ContractError::InvalidTimestamp`] — `now` is earlier than the last settlement.
/// - [`ContractError::MathOverflow`] — the reward does not fit the ledger's range.
pub fn settle(
    env: &Env,
    record: &mut StakeRecord,
    rate: i128,
    now: u64,
) -> Result<(), ContractError> {
    let elapsed = now
        .checked_sub(record.last_settled)
        .ok_or(ContractError::InvalidTimestamp)?;

    let earned = accrue(env, record.amount, rate, elapsed)?;
    record.accrued_reward = record
        .accrued_reward
        .checked_add(earned)
        .ok_or(ContractError::MathOverflow)?;
    record.last_settled = now;

    Ok(())
}

/// Accrued plus not-yet-settled reward, computed without touching `record`.
pub fn pending(
    env: &Env,
    record: &StakeRecord,
    rate: i128,
    now: u64,
) -> Result<i128, ContractError> {
    let elapsed = now.saturating_sub(record.last_settled);
    let earned = accrue(env, record.amount, rate, elapsed)?;
    record
        .accrued_reward
        .checked_add(earned)
        .ok_or(ContractError::MathOverflow)
}
