//! Property-based tests for reward accrual.
//!
//! Invariants tested:
//! - pending reward is zero at elapsed = 0 and non-decreasing in time
//! - pending reward matches `floor(elapsed × rate × amount / 10^18)`
//! - topping up a position never rewrites reward already earned
//! - querying pending reward is idempotent and leaves storage untouched

use proptest::prelude::*;
use soroban_sdk::{Env, U256};

use crate::fixture::{Fixture, RATE, UNIT};

const SCALE: u128 = 1_000_000_000_000_000_000;

/// `floor(elapsed × rate × amount / 10^18)`, widened so `amount` up to 10^21
/// at the fixture rate cannot overflow the reference value.
fn expected_reward(env: &Env, amount: i128, rate: i128, elapsed: u64) -> i128 {
    let per_unit = u128::from(elapsed)
        .checked_mul(u128::try_from(rate).unwrap())
        .unwrap();
    let reward = U256::from_u128(env, per_unit)
        .mul(&U256::from_u128(env, u128::try_from(amount).unwrap()))
        .div(&U256::from_u128(env, SCALE))
        .to_u128()
        .unwrap();
    i128::try_from(reward).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_pending_is_monotonic_in_time(
        whole in 1i128..=1_000_000,
        steps in prop::collection::vec(0u64..=100_000, 1..10),
    ) {
        let fx = Fixture::new(RATE);
        let amount = whole * UNIT / 1_000;
        let staker = fx.account_with(amount);

        fx.client.stake(&staker, &amount);
        prop_assert_eq!(fx.client.get_pending_reward(&staker), 0);

        let mut previous = 0i128;
        for step in steps {
            fx.advance(step);
            let current = fx.client.get_pending_reward(&staker);
            prop_assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn prop_pending_matches_formula(
        amount in 1i128..=1_000_000_000_000_000_000_000,
        rate in 0i128..=1_000_000_000_000,
        elapsed in 0u64..=100_000,
    ) {
        let fx = Fixture::new(rate);
        let staker = fx.account_with(amount);

        fx.client.stake(&staker, &amount);
        fx.advance(elapsed);

        prop_assert_eq!(
            fx.client.get_pending_reward(&staker),
            expected_reward(&fx.env, amount, rate, elapsed)
        );
    }

    #[test]
    fn prop_top_up_does_not_rewrite_earned_reward(
        first in 1i128..=1_000,
        second in 1i128..=1_000,
        before in 0u64..=50_000,
    ) {
        let fx = Fixture::new(RATE);
        let staker = fx.account_with((first + second) * UNIT);

        fx.set_time(0);
        fx.client.stake(&staker, &(first * UNIT));
        fx.set_time(before);
        let earned = fx.client.get_pending_reward(&staker);

        fx.client.stake(&staker, &(second * UNIT));

        let record = fx.client.get_stake(&staker);
        prop_assert_eq!(record.accrued_reward, earned);
        prop_assert_eq!(earned, expected_reward(&fx.env, first * UNIT, RATE, before));
        prop_assert_eq!(fx.client.get_pending_reward(&staker), earned);
    }

    #[test]
    fn prop_pending_query_is_idempotent(
        whole in 1i128..=1_000,
        elapsed in 0u64..=100_000,
    ) {
        let fx = Fixture::new(RATE);
        let staker = fx.account_with(whole * UNIT);

        fx.client.stake(&staker, &(whole * UNIT));
        fx.advance(elapsed);

        let stored = fx.client.get_stake(&staker);
        let first = fx.client.get_pending_reward(&staker);
        let second = fx.client.get_pending_reward(&staker);

        prop_assert_eq!(first, second);
        prop_assert_eq!(fx.client.get_stake(&staker), stored);
    }
}
