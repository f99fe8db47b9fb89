//! # Per-account Reentrancy Guard
//!
//! Blocks an account from re-entering its own in-flight state-mutating call.
//! Each account owns an independent flag in temporary storage, so a call made
//! on behalf of one account never blocks another account.
//!
//! ## Usage pattern
//!
//! Acquire the guard at the top of the entry point and keep it bound for the
//! rest of the call. Dropping the guard releases the flag, on the success path
//! and on every `?` early return alike:
//! ```ignore
//! let _guard = ReentrancyGuard::acquire(&env, &staker)?;
//! // ... settle, transfer, commit
//! ```

use soroban_sdk::{contracttype, Address, Env};

use crate::CommonError;

// ── Storage key ──────────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
enum GuardKey {
    Locked(Address),
}

fn guard_key(account: &Address) -> GuardKey {
    GuardKey::Locked(account.clone())
}

// ── Guard ────────────────────────────────────────────────────────────────────

/// Scoped lock on one account. Released when dropped.
pub struct ReentrancyGuard {
    env: Env,
    account: Address,
}

impl ReentrancyGuard {
    /// Take the lock for `account`.
    ///
    /// # Errors
    /// - [`CommonError::ReentrantCall`] — a call for `account` already holds the lock.
    pub fn acquire(env: &Env, account: &Address) -> Result<Self, CommonError> {
        let key = guard_key(account);
        if env.storage().temporary().has(&key) {
            return Err(CommonError::ReentrantCall);
        }
        env.storage().temporary().set(&key, &true);

        Ok(Self {
            env: env.clone(),
            account: account.clone(),
        })
    }

    /// Return `true` while some call holds the lock for `account`.
    pub fn is_locked(env: &Env, account: &Address) -> bool {
        env.storage().temporary().has(&guard_key(account))
    }
}

impl Drop for ReentrancyGuard {
    fn drop(&mut self) {
        self.env
            .storage()
            .temporary()
            .remove(&guard_key(&self.account));
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
