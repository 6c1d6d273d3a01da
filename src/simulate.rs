//! Trade simulator.
//!
//! Simulates selling one asset for another against a fixed pool
//! snapshot: the invariant `D` is computed from the recorded balances,
//! the input balance is bumped by the trade amount, and the output
//! balance is re-solved at the same `D`. The pool itself is never
//! mutated: every simulation starts from the same snapshot, which is
//! what makes scenario comparison and parallel evaluation trivial.

use tracing::debug;

use crate::domain::{Price, TradeResult};
use crate::error::{EngineError, Result};
use crate::pool::StablePool;
use crate::solver;

impl StablePool {
    /// Simulates selling `amount_in` of `asset_in` for `asset_out`,
    /// holding every other balance fixed.
    ///
    /// The result is deterministic: identical inputs produce bit-for-bit
    /// identical outputs, with no randomness and no hidden state.
    ///
    /// The returned [`TradeResult`] carries the `(before, after)` balance
    /// pairs for both assets and the point labels the dashboard plots,
    /// plus the effective price quoted as output-per-input (see
    /// [`TradeResult::effective_price_inverse`] for the other direction).
    ///
    /// # Errors
    ///
    /// - [`EngineError::UnknownAsset`] if either name is not in the pool.
    /// - [`EngineError::DuplicateAsset`] if the two names are equal.
    /// - [`EngineError::InvalidAmount`] if `amount_in` is non-positive,
    ///   non-finite, or exceeds the recorded balance of `asset_in` (a
    ///   zero-amount trade is rejected, never a silent zero-output
    ///   success).
    /// - [`EngineError::Convergence`] if either Newton solve fails.
    /// - [`EngineError::NegativeOutput`] if the solved output balance
    ///   implies a non-positive amount out, a numerical inconsistency
    ///   that must not be papered over.
    pub fn simulate_trade(
        &self,
        asset_in: &str,
        asset_out: &str,
        amount_in: f64,
    ) -> Result<TradeResult> {
        let index_in = self.index_of(asset_in)?;
        let index_out = self.index_of(asset_out)?;
        if index_in == index_out {
            return Err(EngineError::DuplicateAsset(asset_in.to_string()));
        }

        if !amount_in.is_finite() || amount_in <= 0.0 {
            return Err(EngineError::InvalidAmount(
                "trade amount must be a strictly positive finite number",
            ));
        }
        let balances = self.balances();
        let balance_in = balances[index_in];
        let balance_out = balances[index_out];
        if amount_in > balance_in {
            return Err(EngineError::InvalidAmount(
                "trade amount exceeds the recorded balance of the input asset",
            ));
        }

        let d = self.invariant()?;

        let mut shifted = balances;
        shifted[index_in] = balance_in + amount_in;
        let new_balance_out = solver::solve_for_balance(
            &shifted,
            index_out,
            d,
            self.amplification().get(),
        )?;

        let amount_out = balance_out - new_balance_out;
        if amount_out <= 0.0 {
            return Err(EngineError::NegativeOutput(
                "solved output balance does not decrease for a positive input",
            ));
        }

        let effective_price = Price::new(amount_out / amount_in)?;
        debug!(
            asset_in,
            asset_out,
            amount_in,
            amount_out,
            %effective_price,
            "trade simulated"
        );

        Ok(TradeResult::new(
            self.assets()[index_in].name().clone(),
            self.assets()[index_out].name().clone(),
            amount_in,
            amount_out,
            balance_in,
            balance_in + amount_in,
            balance_out,
            new_balance_out,
            effective_price,
        ))
    }
}
