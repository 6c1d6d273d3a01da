//! Pricing engine: spot prices, price impact and depth cost.
//!
//! Spot price is the negative partial derivative of the implicit
//! invariant curve: the marginal rate at which the output asset is given
//! up per unit of the input asset. It is computed in closed form rather
//! than by finite differences, so Newton error from the invariant solve
//! is not compounded.
//!
//! Writing the invariant as
//!
//! ```text
//! F(x) = ann·Σxᵢ + D − ann·D − D^(n+1) / (nⁿ·Πxᵢ)      (ann = A·nⁿ)
//! ```
//!
//! implicit differentiation gives
//!
//! ```text
//! price(in → out) = (∂F/∂x_in) / (∂F/∂x_out)
//! ∂F/∂xᵢ          = ann + D^(n+1) / (nⁿ·xᵢ·Πx)
//! ```
//!
//! The partials are only a derivative of the curve when evaluated *on*
//! the curve, so a balance override re-solves the output balance at the
//! pool's invariant before the ratio is taken. On-curve the price is
//! continuous and strictly decreasing in the input balance for every
//! valid pool, which is what makes the depth-cost inversion a plain
//! bisection.

use tracing::{debug, trace};

use crate::domain::{DepthQuote, Price, TradeSide};
use crate::error::{EngineError, Result};
use crate::pool::StablePool;
use crate::solver::{self, MAX_ITERATIONS};

/// Relative interval width at which the depth-cost bisection stops.
const BISECTION_TOLERANCE: f64 = 1e-12;

/// Computes the relative price impact between two spot prices:
/// `1 − after/before`.
///
/// Zero when the prices are equal; positive when the price moved *down*
/// (the trade moved the market against the seller of the input asset),
/// negative when it moved up.
#[must_use]
pub fn price_impact(before: Price, after: Price) -> f64 {
    1.0 - after.get() / before.get()
}

impl StablePool {
    /// Computes the spot price of `asset_in` quoted in `asset_out` at the
    /// recorded balances.
    ///
    /// A balanced two-asset pool prices exactly 1.0. Quoting an asset
    /// against itself also returns 1.0.
    ///
    /// # Errors
    ///
    /// - [`EngineError::UnknownAsset`] if either name is not in the pool.
    /// - [`EngineError::Convergence`] if the invariant solve fails.
    pub fn spot_price(&self, asset_in: &str, asset_out: &str) -> Result<Price> {
        let balance_in = self.balance_of(asset_in)?;
        self.spot_price_at(asset_in, asset_out, balance_in)
    }

    /// Computes the spot price of `asset_in` quoted in `asset_out`, with
    /// the input-asset balance overridden to `balance_in`.
    ///
    /// The invariant `D` is computed from the recorded balances, and the
    /// output-asset balance is re-solved at that `D` so the sampled point
    /// stays on the recorded curve; the remaining balances are held at
    /// their recorded levels. This is the primitive behind the
    /// dashboard's price-versus-balance charts and the depth-cost
    /// inversion, and it is what keeps the price strictly decreasing in
    /// the override for every valid pool, balanced or not.
    ///
    /// # Errors
    ///
    /// - [`EngineError::UnknownAsset`] if either name is not in the pool.
    /// - [`EngineError::InvalidBalance`] if the override is non-positive
    ///   or non-finite.
    /// - [`EngineError::Convergence`] if the invariant or balance solve
    ///   fails.
    pub fn spot_price_at(
        &self,
        asset_in: &str,
        asset_out: &str,
        balance_in: f64,
    ) -> Result<Price> {
        let index_in = self.index_of(asset_in)?;
        let index_out = self.index_of(asset_out)?;
        if !balance_in.is_finite() || balance_in <= 0.0 {
            return Err(EngineError::InvalidBalance(
                "balance override must be a strictly positive finite number",
            ));
        }
        if index_in == index_out {
            return Ok(Price::ONE);
        }

        let d = self.invariant()?;

        let mut balances = self.balances();
        // The recorded point is already on the curve; an override moves
        // along it, so the output balance must be re-solved at the same D.
        if balance_in != balances[index_in] {
            balances[index_in] = balance_in;
            balances[index_out] =
                solver::solve_for_balance(&balances, index_out, d, self.amplification().get())?;
        }

        let n = balances.len() as f64;
        let ann = self.amplification().get() * n.powf(n);

        // K = D^(n+1) / n^n, so each partial is ann + K/(xᵢ·Πx).
        let k = d.powf(n + 1.0) / n.powf(n);
        let prod: f64 = balances.iter().product();

        let numerator = ann + k / (balances[index_in] * prod);
        let denominator = ann + k / (balances[index_out] * prod);
        Price::new(numerator / denominator)
    }

    /// Finds the amount of `asset_in` that must be traded so the
    /// post-trade spot price of `asset_in` in `asset_out` equals `target`.
    ///
    /// The direction follows from the target's side of the current price:
    ///
    /// - **Below** current: the input asset must be *sold*. The search
    ///   domain is one recorded balance's worth of input (the dashboard
    ///   caps a sale at the pool's recorded balance); a target beyond
    ///   that depth fails with
    ///   [`EngineError::UnreachableTarget`].
    /// - **Above** current: the input asset must be *bought* out of the
    ///   pool. The price grows without bound as the balance drains, so
    ///   every such target is reachable.
    /// - **Equal**: a zero-cost quote.
    ///
    /// Solved by expanding-bracket bisection on the on-curve spot price,
    /// which is strictly decreasing in the input balance.
    ///
    /// # Errors
    ///
    /// - [`EngineError::UnknownAsset`] if either name is not in the pool.
    /// - [`EngineError::DuplicateAsset`] if the two names are equal: an
    ///   asset has no depth against itself.
    /// - [`EngineError::UnreachableTarget`] if no amount in the searched
    ///   domain produces the target price.
    /// - [`EngineError::Convergence`] if the bisection interval fails to
    ///   collapse within its iteration bound.
    pub fn cost_to_reach_price(
        &self,
        asset_in: &str,
        asset_out: &str,
        target: Price,
    ) -> Result<DepthQuote> {
        let index_in = self.index_of(asset_in)?;
        let index_out = self.index_of(asset_out)?;
        if index_in == index_out {
            return Err(EngineError::DuplicateAsset(asset_in.to_string()));
        }

        let balance_in = self.balance_of(asset_in)?;
        let current = self.spot_price(asset_in, asset_out)?;

        if target == current {
            return Ok(DepthQuote::new(TradeSide::Sell, 0.0, current));
        }

        let (side, mut lo, mut hi) = if target < current {
            // Selling adds input balance and pushes the price down. One
            // recorded balance's worth of depth is the searchable domain.
            let lo = balance_in;
            let hi = 2.0 * balance_in;
            let floor = self.spot_price_at(asset_in, asset_out, hi)?;
            if floor > target {
                debug!(%target, %floor, "target below the sellable depth");
                return Err(EngineError::UnreachableTarget(
                    "target price is below what selling the full balance reaches",
                ));
            }
            (TradeSide::Sell, lo, hi)
        } else {
            // Buying drains input balance and pushes the price up;
            // expand the bracket downward until it straddles the target.
            let mut probe = balance_in / 2.0;
            let mut bracketed = false;
            for _ in 0..MAX_ITERATIONS {
                if self.spot_price_at(asset_in, asset_out, probe)? >= target {
                    bracketed = true;
                    break;
                }
                probe /= 2.0;
            }
            if !bracketed {
                return Err(EngineError::UnreachableTarget(
                    "could not bracket the target price on the buy side",
                ));
            }
            (TradeSide::Buy, probe, balance_in)
        };

        // Invariant of the bracket: price(lo) ≥ target ≥ price(hi).
        for iteration in 0..MAX_ITERATIONS {
            let mid = 0.5 * (lo + hi);
            let price = self.spot_price_at(asset_in, asset_out, mid)?;
            trace!(iteration, mid, %price, "depth-cost bisection step");

            if price >= target {
                lo = mid;
            } else {
                hi = mid;
            }
            if hi - lo <= BISECTION_TOLERANCE * hi {
                let solved = 0.5 * (lo + hi);
                let achieved = self.spot_price_at(asset_in, asset_out, solved)?;
                let amount = match side {
                    TradeSide::Sell => solved - balance_in,
                    TradeSide::Buy => balance_in - solved,
                };
                debug!(%side, amount, %achieved, "depth-cost search converged");
                return Ok(DepthQuote::new(side, amount, achieved));
            }
        }

        Err(EngineError::Convergence(
            "depth-cost bisection did not collapse within the iteration bound",
        ))
    }
}
