#![no_std]

pub mod asset;
pub mod events;
pub mod ledger;
pub mod pool;
pub mod rewards;
pub mod state;

use common::{CommonError, ReentrancyGuard};
use soroban_sdk::{contract, contractimpl, contracttype, Address, Env};

use asset::{AssetInterface, TokenAsset};
use ledger::{Transaction, Withdrawal};
use state::{Config, StakeRecord, Totals};

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    InvalidAmount = 4,
    TransferFailure = 5,
    NothingStaked = 6,
    NoRewardAvailable = 7,
    PoolInsolvent = 8,
    ReentrantCall = 9,
    MathOverflow = 10,
    InvalidTimestamp = 11,
    InvalidRewardRate = 12,
}

impl From<CommonError> for ContractError {
    fn from(err: CommonError) -> Self {
        match err {
            CommonError::ReentrantCall => ContractError::ReentrantCall,
        }
    }
}

// ── Public-facing types (re-exported for test consumers) ─────────────────────

/// Global figures returned by `get_contract_info`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContractInfo {
    pub total_staked: i128,
    pub reward_pool_balance: i128,
    pub reward_rate: i128,
}

/// Outcome of a full unstake.
///
/// `reward_forfeited` is the reward debt that was cleared without payment
/// because the pool could not cover it. It is not recoverable.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnstakeReceipt {
    pub principal: i128,
    pub reward_paid: i128,
    pub reward_forfeited: i128,
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct StakingContract;

#[contractimpl]
impl StakingContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the contract.
    ///
    /// * `admin`       – the only address allowed to fund the reward pool. Fixed forever.
    /// * `token`       – SAC address of the token staked and paid as reward.
    /// * `reward_rate` – reward units per second per 10^18 units staked. Fixed forever.
    pub fn initialize(
        env: Env,
        admin: Address,
        token: Address,
        reward_rate: i128,
    ) -> Result<(), ContractError> {
        if state::is_initialized(&env) {
            return Err(ContractError::AlreadyInitialized);
        }
        if reward_rate < 0 {
            return Err(ContractError::InvalidRewardRate);
        }

        state::store_config(
            &env,
            &Config {
                admin: admin.clone(),
                token: token.clone(),
                reward_rate,
            },
        );
        state::store_totals(&env, &Totals::default());

        events::publish_initialized(&env, admin, token, reward_rate, env.ledger().timestamp());

        Ok(())
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Deposit `amount` tokens.
    ///
    /// Reward on the existing position is settled first, so the new principal
    /// only starts earning from this call's timestamp.
    pub fn stake(env: Env, staker: Address, amount: i128) -> Result<(), ContractError> {
        staker.require_auth();

        let mut tx = Transaction::begin(&env)?;
        let _guard = ReentrancyGuard::acquire(&env, &staker)?;

        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }

        // 1. Settle before touching principal.
        let mut record = tx.settle(&staker)?;

        // 2. Pull tokens into custody. A failed pull leaves nothing staged.
        TokenAsset::new(&env, &tx.config().token).transfer_in(&staker, amount)?;

        // 3. Book the principal.
        ledger::deposit(tx.totals_mut(), &mut record, amount)?;
        tx.stage(&staker, record);
        let now = tx.now();
        let totals = tx.commit();

        events::publish_staked(&env, staker, amount, totals.total_staked, now);

        Ok(())
    }

    // ── Unstaking ───────────────────────────────────────────────────────────

    /// Withdraw the whole position.
    ///
    /// Principal is always returned. The settled reward is paid only if the
    /// pool can cover it; otherwise the debt is cleared without payment and
    /// reported as `reward_forfeited`.
    pub fn unstake(env: Env, staker: Address) -> Result<UnstakeReceipt, ContractError> {
        staker.require_auth();

        let mut tx = Transaction::begin(&env)?;
        let _guard = ReentrancyGuard::acquire(&env, &staker)?;

        let mut record = tx.settle(&staker)?;
        let Withdrawal { principal, reward } = ledger::withdraw_all(tx.totals_mut(), &mut record)?;

        let asset = TokenAsset::new(&env, &tx.config().token);
        asset.transfer_out(&staker, principal)?;

        let reward_paid = if reward > 0 && pool::is_solvent(tx.totals(), reward) {
            pool::debit(tx.totals_mut(), reward)?;
            asset.transfer_out(&staker, reward)?;
            reward
        } else {
            0
        };
        let reward_forfeited = reward - reward_paid;

        tx.stage(&staker, record);
        let now = tx.now();
        let totals = tx.commit();

        events::publish_unstaked(
            &env,
            staker,
            principal,
            reward_paid,
            reward_forfeited,
            totals.total_staked,
            now,
        );

        Ok(UnstakeReceipt {
            principal,
            reward_paid,
            reward_forfeited,
        })
    }

    // ── Rewards ─────────────────────────────────────────────────────────────

    /// Pay out all accrued reward for `staker`, leaving the principal staked.
    ///
    /// If the pool cannot cover the full amount the call fails with
    /// `PoolInsolvent` and the reward stays owed for a later retry.
    pub fn claim_reward(env: Env, staker: Address) -> Result<i128, ContractError> {
        staker.require_auth();

        let mut tx = Transaction::begin(&env)?;
        let _guard = ReentrancyGuard::acquire(&env, &staker)?;

        let mut record = tx.settle(&staker)?;
        let reward = ledger::take_reward(&mut record)?;
        pool::debit(tx.totals_mut(), reward)?;

        TokenAsset::new(&env, &tx.config().token).transfer_out(&staker, reward)?;

        tx.stage(&staker, record);
        let now = tx.now();
        let totals = tx.commit();

        events::publish_reward_claimed(&env, staker, reward, totals.reward_pool, now);

        Ok(reward)
    }

    /// Move `amount` tokens from the admin into the reward pool.
    pub fn fund_pool(env: Env, funder: Address, amount: i128) -> Result<(), ContractError> {
        funder.require_auth();

        let mut tx = Transaction::begin(&env)?;
        Self::require_admin(tx.config(), &funder)?;
        let _guard = ReentrancyGuard::acquire(&env, &funder)?;

        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }

        let asset = TokenAsset::new(&env, &tx.config().token);
        asset.transfer_in(&funder, amount)?;

        pool::credit(tx.totals_mut(), amount)?;
        let now = tx.now();
        let totals = tx.commit();

        let custody_balance = asset.balance_of(&env.current_contract_address());
        events::publish_pool_funded(
            &env,
            funder,
            amount,
            totals.reward_pool,
            custody_balance,
            now,
        );

        Ok(())
    }

    // ── View functions ───────────────────────────────────────────────────────

    /// Accrued plus not-yet-settled reward for `account`, without mutating state.
    pub fn get_pending_reward(env: Env, account: Address) -> Result<i128, ContractError> {
        let Some(config) = state::load_config(&env) else {
            return Ok(0);
        };
        let record = state::load_record(&env, &account);
        rewards::pending(&env, &record, config.reward_rate, env.ledger().timestamp())
    }

    /// Return the stored position for `account` (all zeros if never seen).
    pub fn get_stake(env: Env, account: Address) -> StakeRecord {
        state::load_record(&env, &account)
    }

    /// Return the global totals and the reward rate.
    pub fn get_contract_info(env: Env) -> ContractInfo {
        let totals = state::load_totals(&env);
        let reward_rate = state::load_config(&env).map_or(0, |c| c.reward_rate);
        ContractInfo {
            total_staked: totals.total_staked,
            reward_pool_balance: totals.reward_pool,
            reward_rate,
        }
    }

    /// Return the token balance held in contract custody (principal plus pool).
    pub fn get_custody_balance(env: Env) -> Result<i128, ContractError> {
        let config = state::load_config(&env).ok_or(ContractError::NotInitialized)?;
        Ok(TokenAsset::new(&env, &config.token).balance_of(&env.current_contract_address()))
    }

    pub fn is_initialized(env: Env) -> bool {
        state::is_initialized(&env)
    }

    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        state::load_config(&env)
            .map(|c| c.admin)
            .ok_or(ContractError::NotInitialized)
    }

    pub fn get_token(env: Env) -> Result<Address, ContractError> {
        state::load_config(&env)
            .map(|c| c.token)
            .ok_or(ContractError::NotInitialized)
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    /// Guard: revert if `caller` is not the stored admin.
    fn require_admin(config: &Config, caller: &Address) -> Result<(), ContractError> {
        if *caller != config.admin {
            return Err(ContractError::Unauthorized);
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
