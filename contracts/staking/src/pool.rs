//! Reward pool accounting.
//!
//! The pool balance only grows through a successful admin funding call and
//! only shrinks through an actual reward payout. Solvency, `reward_pool >=
//! reward`, is the single gate in front of every payout.

use crate::state::Totals;
use crate::ContractError;

/// Return `true` if the pool can cover a payout of `reward`.
pub fn is_solvent(totals: &Totals, reward: i128) -> bool {
    totals.reward_pool >= reward
}

/// Add freshly funded tokens to the pool.
pub fn credit(totals: &mut Totals, amount: i128) -> Result<(), ContractError> {
    totals.reward_pool = totals
        .reward_pool
        .checked_add(amount)
        .ok_or(ContractError::MathOverflow)?;
    Ok(())
}

/// Remove a reward payout from the pool.
///
/// # Errors
/// - [`ContractError::PoolInsolvent`] — the pool cannot cover `reward`.
pub fn debit(totals: &mut Totals, reward: i128) -> Result<(), ContractError> {
    if !is_solvent(totals, reward) {
        return Err(ContractError::PoolInsolvent);
    }
    totals.reward_pool = totals
        .reward_pool
        .checked_sub(reward)
        .ok_or(ContractError::MathOverflow)?;
    Ok(())
}
