//! Property-based tests using `proptest` for curve and pricing laws.
//!
//! Covers six properties:
//!
//! 1. **Invariant bounds** — `n·(Πx)^(1/n) ≤ D ≤ Σx` for every pool.
//! 2. **Balance round-trip** — re-solving a known balance at the pool's
//!    own `D` recovers it.
//! 3. **Output monotonicity** — a larger sell never returns less.
//! 4. **No free output at the peg** — a balanced pool never pays out
//!    more than it takes in.
//! 5. **Price movement direction** — selling pushes the sell-side spot
//!    price down for any valid pool, so impact is positive.
//! 6. **Effective price bound** — the realised trade price never beats
//!    the pre-trade marginal price.

use proptest::prelude::*;

use crate::pool::StablePool;
use crate::pricing::price_impact;
use crate::solver::{compute_invariant, solve_for_balance};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Balances in [10 000, 10 000 000], generated on an integer grid so
/// shrinking stays readable.
fn balance_strategy() -> impl Strategy<Value = f64> {
    (10_000u64..=10_000_000u64).prop_map(|v| v as f64)
}

/// Amplification in [1, 500], the range the dashboard sweeps around.
fn amplification_strategy() -> impl Strategy<Value = f64> {
    (1u32..=500u32).prop_map(f64::from)
}

/// Ratio of the second balance to the first in [0.1, 10], so direction
/// properties are exercised well away from the peg in both directions.
fn imbalance_ratio_strategy() -> impl Strategy<Value = f64> {
    (10u32..=1_000u32).prop_map(|v| f64::from(v) / 100.0)
}

fn make_pool(balance_a: f64, balance_b: f64, amp: f64) -> StablePool {
    let Ok(pool) = StablePool::from_raw(&[("DAI", balance_a), ("USDC", balance_b)], amp) else {
        panic!("valid pool");
    };
    pool
}

// ---------------------------------------------------------------------------
// Property 1: Invariant bounds
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_invariant_between_product_and_sum(
        a in balance_strategy(),
        b in balance_strategy(),
        amp in amplification_strategy(),
    ) {
        let Ok(d) = compute_invariant(&[a, b], amp) else {
            return Err(TestCaseError::fail("invariant must converge"));
        };
        let sum = a + b;
        let geometric = 2.0 * (a * b).sqrt();
        prop_assert!(d <= sum * (1.0 + 1e-8), "D={d} exceeds sum={sum}");
        prop_assert!(
            d >= geometric * (1.0 - 1e-8),
            "D={d} below constant-product floor={geometric}"
        );
    }

    #[test]
    fn prop_invariant_bounds_three_assets(
        a in balance_strategy(),
        b in balance_strategy(),
        c in balance_strategy(),
        amp in amplification_strategy(),
    ) {
        let Ok(d) = compute_invariant(&[a, b, c], amp) else {
            return Err(TestCaseError::fail("invariant must converge"));
        };
        let sum = a + b + c;
        let geometric = 3.0 * (a * b * c).cbrt();
        prop_assert!(d <= sum * (1.0 + 1e-8));
        prop_assert!(d >= geometric * (1.0 - 1e-8));
    }
}

// ---------------------------------------------------------------------------
// Property 2: Balance round-trip
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_solving_for_a_known_balance_recovers_it(
        a in balance_strategy(),
        b in balance_strategy(),
        amp in amplification_strategy(),
    ) {
        let Ok(d) = compute_invariant(&[a, b], amp) else {
            return Err(TestCaseError::fail("invariant must converge"));
        };
        let Ok(recovered) = solve_for_balance(&[a, b], 1, d, amp) else {
            return Err(TestCaseError::fail("balance solve must converge"));
        };
        prop_assert!(
            ((recovered - b) / b).abs() < 1e-6,
            "recovered {recovered} for known balance {b}"
        );
    }
}

// ---------------------------------------------------------------------------
// Properties 3 and 4: Trade output laws
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_larger_sell_never_returns_less(
        a in balance_strategy(),
        b in balance_strategy(),
        amp in amplification_strategy(),
    ) {
        let pool = make_pool(a, b, amp);
        let small = a / 100.0;
        let large = a / 10.0;

        let Ok(trade_small) = pool.simulate_trade("DAI", "USDC", small) else {
            return Err(TestCaseError::fail("small trade must simulate"));
        };
        let Ok(trade_large) = pool.simulate_trade("DAI", "USDC", large) else {
            return Err(TestCaseError::fail("large trade must simulate"));
        };
        prop_assert!(trade_large.amount_out() > trade_small.amount_out());
    }

    #[test]
    fn prop_balanced_pool_never_pays_more_than_it_takes(
        reserve in balance_strategy(),
        amp in amplification_strategy(),
    ) {
        let pool = make_pool(reserve, reserve, amp);
        let amount_in = reserve / 10.0;
        let Ok(trade) = pool.simulate_trade("DAI", "USDC", amount_in) else {
            return Err(TestCaseError::fail("trade must simulate"));
        };
        prop_assert!(trade.amount_out() < amount_in);
    }
}

// ---------------------------------------------------------------------------
// Properties 5 and 6: Price movement and effective price
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_selling_has_positive_price_impact(
        a in balance_strategy(),
        ratio in imbalance_ratio_strategy(),
        amp in amplification_strategy(),
    ) {
        let pool = make_pool(a, a * ratio, amp);
        let Ok(trade) = pool.simulate_trade("DAI", "USDC", a / 10.0) else {
            return Err(TestCaseError::fail("trade must simulate"));
        };
        let (before, after) = trade.balances_in();
        let Ok(price_before) = pool.spot_price_at("DAI", "USDC", before) else {
            return Err(TestCaseError::fail("pre-trade price"));
        };
        let Ok(price_after) = pool.spot_price_at("DAI", "USDC", after) else {
            return Err(TestCaseError::fail("post-trade price"));
        };
        prop_assert!(price_after < price_before);
        prop_assert!(price_impact(price_before, price_after) > 0.0);
    }

    #[test]
    fn prop_effective_price_never_beats_pre_trade_marginal(
        a in balance_strategy(),
        b in balance_strategy(),
        amp in amplification_strategy(),
    ) {
        let pool = make_pool(a, b, amp);
        let Ok(trade) = pool.simulate_trade("DAI", "USDC", a / 10.0) else {
            return Err(TestCaseError::fail("trade must simulate"));
        };
        let Ok(price_before) = pool.spot_price("DAI", "USDC") else {
            return Err(TestCaseError::fail("pre-trade price"));
        };
        let effective = trade.effective_price().get();
        prop_assert!(
            effective <= price_before.get() * (1.0 + 1e-9),
            "effective {effective} above pre-trade marginal {price_before}"
        );
    }
}
