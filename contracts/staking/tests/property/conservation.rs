//! Property-based tests for ledger conservation.
//!
//! Invariants tested:
//! - `total_staked` always equals the sum of every position's principal
//! - custody always holds exactly `total_staked + reward_pool`
//! - no position ever holds a negative principal or reward

use proptest::prelude::*;

use crate::fixture::{Fixture, RATE, UNIT};

const ACCOUNTS: usize = 3;

#[derive(Clone, Debug)]
enum Op {
    Stake { who: usize, amount: i128 },
    Unstake { who: usize },
    Claim { who: usize },
    Fund { amount: i128 },
    Advance { seconds: u64 },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..ACCOUNTS, 0i128..=1_000).prop_map(|(who, whole)| Op::Stake {
            who,
            amount: whole * UNIT
        }),
        (0..ACCOUNTS).prop_map(|who| Op::Unstake { who }),
        (0..ACCOUNTS).prop_map(|who| Op::Claim { who }),
        (1i128..=50).prop_map(|whole| Op::Fund {
            amount: whole * UNIT
        }),
        (0u64..=5_000).prop_map(|seconds| Op::Advance { seconds }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// After every operation, successful or not, the global counters agree
    /// with the individual positions and with the tokens actually held.
    #[test]
    fn prop_ledger_is_conserved(ops in prop::collection::vec(op_strategy(), 1..40)) {
        let fx = Fixture::new(RATE);
        let accounts: Vec<_> = (0..ACCOUNTS)
            .map(|_| fx.account_with(1_000_000 * UNIT))
            .collect();

        for op in ops {
            match op {
                Op::Stake { who, amount } => {
                    let _ = fx.client.try_stake(&accounts[who], &amount);
                }
                Op::Unstake { who } => {
                    let _ = fx.client.try_unstake(&accounts[who]);
                }
                Op::Claim { who } => {
                    let _ = fx.client.try_claim_reward(&accounts[who]);
                }
                Op::Fund { amount } => fx.fund_pool(amount),
                Op::Advance { seconds } => fx.advance(seconds),
            }

            let info = fx.client.get_contract_info();
            let mut sum = 0i128;
            for account in &accounts {
                let record = fx.client.get_stake(account);
                prop_assert!(record.amount >= 0);
                prop_assert!(record.accrued_reward >= 0);
                sum += record.amount;
            }

            prop_assert_eq!(info.total_staked, sum);
            prop_assert!(info.reward_pool_balance >= 0);
            prop_assert_eq!(
                fx.client.get_custody_balance(),
                info.total_staked + info.reward_pool_balance
            );
        }
    }

    /// A full unstake always returns exactly the staked principal, whatever
    /// the state of the reward pool.
    #[test]
    fn prop_unstake_always_returns_principal(
        whole in 1i128..=10_000,
        seconds in 0u64..=1_000_000,
        pool_whole in 0i128..=100,
    ) {
        let fx = Fixture::new(RATE);
        if pool_whole > 0 {
            fx.fund_pool(pool_whole * UNIT);
        }
        let amount = whole * UNIT;
        let staker = fx.account_with(amount);

        fx.client.stake(&staker, &amount);
        fx.advance(seconds);
        let owed = fx.client.get_pending_reward(&staker);
        let receipt = fx.client.unstake(&staker);

        prop_assert_eq!(receipt.principal, amount);
        prop_assert_eq!(receipt.reward_paid + receipt.reward_forfeited, owed);
        if owed <= pool_whole * UNIT {
            prop_assert_eq!(receipt.reward_paid, owed);
        } else {
            prop_assert_eq!(receipt.reward_paid, 0);
        }
        prop_assert_eq!(fx.client.get_contract_info().total_staked, 0);
    }
}
