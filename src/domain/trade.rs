//! Result records returned by the trade simulator and depth-cost analysis.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::{AssetName, Price};

/// Label for the pre-trade sample point.
pub const LABEL_BEFORE_TRADE: &str = "before trade";

/// Label for the post-trade sample point.
pub const LABEL_AFTER_TRADE: &str = "after trade";

/// Outcome of a simulated trade against a fixed pool snapshot.
///
/// Carries the two-point sampling the dashboard plots on the curve and
/// spot-price charts: the input-asset balance before and after the
/// trade, the output-asset balance before and after, and the
/// human-readable labels for the two sampled points.
///
/// Effective price is quoted in both directions:
/// [`effective_price`](Self::effective_price) is units of the output
/// asset per unit of the input asset (`amount_out / amount_in`), and
/// [`effective_price_inverse`](Self::effective_price_inverse) is its
/// reciprocal (input per output).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeResult {
    asset_in: AssetName,
    asset_out: AssetName,
    amount_in: f64,
    amount_out: f64,
    balance_in_before: f64,
    balance_in_after: f64,
    balance_out_before: f64,
    balance_out_after: f64,
    effective_price: Price,
}

impl TradeResult {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        asset_in: AssetName,
        asset_out: AssetName,
        amount_in: f64,
        amount_out: f64,
        balance_in_before: f64,
        balance_in_after: f64,
        balance_out_before: f64,
        balance_out_after: f64,
        effective_price: Price,
    ) -> Self {
        Self {
            asset_in,
            asset_out,
            amount_in,
            amount_out,
            balance_in_before,
            balance_in_after,
            balance_out_before,
            balance_out_after,
            effective_price,
        }
    }

    /// Returns the name of the asset sold into the pool.
    #[must_use]
    pub const fn asset_in(&self) -> &AssetName {
        &self.asset_in
    }

    /// Returns the name of the asset bought from the pool.
    #[must_use]
    pub const fn asset_out(&self) -> &AssetName {
        &self.asset_out
    }

    /// Returns the amount of the input asset sold.
    #[must_use]
    pub const fn amount_in(&self) -> f64 {
        self.amount_in
    }

    /// Returns the amount of the output asset received.
    #[must_use]
    pub const fn amount_out(&self) -> f64 {
        self.amount_out
    }

    /// Returns the `(before, after)` pool balances of the input asset.
    #[must_use]
    pub const fn balances_in(&self) -> (f64, f64) {
        (self.balance_in_before, self.balance_in_after)
    }

    /// Returns the `(before, after)` pool balances of the output asset.
    #[must_use]
    pub const fn balances_out(&self) -> (f64, f64) {
        (self.balance_out_before, self.balance_out_after)
    }

    /// Returns the effective price: output asset per unit of input asset.
    #[must_use]
    pub const fn effective_price(&self) -> Price {
        self.effective_price
    }

    /// Returns the effective price quoted the other way: input asset per
    /// unit of output asset.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPrice`](crate::error::EngineError::InvalidPrice)
    /// only for subnormal extremes where the reciprocal is not finite.
    pub fn effective_price_inverse(&self) -> Result<Price> {
        self.effective_price.inverse()
    }

    /// Returns the labels of the two sampled points, in order.
    #[must_use]
    pub const fn point_labels(&self) -> [&'static str; 2] {
        [LABEL_BEFORE_TRADE, LABEL_AFTER_TRADE]
    }
}

/// Direction of a depth-cost trade relative to the input asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeSide {
    /// Input asset is sold into the pool; its spot price falls.
    Sell,
    /// Input asset is bought out of the pool; its spot price rises.
    Buy,
}

impl fmt::Display for TradeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sell => write!(f, "sell"),
            Self::Buy => write!(f, "buy"),
        }
    }
}

/// Result of a cost-to-target-price search: how much of the input asset
/// must be traded, and in which direction, to move the spot price to the
/// requested target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepthQuote {
    side: TradeSide,
    amount_in: f64,
    achieved_price: Price,
}

impl DepthQuote {
    pub(crate) const fn new(side: TradeSide, amount_in: f64, achieved_price: Price) -> Self {
        Self {
            side,
            amount_in,
            achieved_price,
        }
    }

    /// Returns the trade direction.
    #[must_use]
    pub const fn side(&self) -> TradeSide {
        self.side
    }

    /// Returns the input-asset amount that reaches the target price.
    /// Always non-negative; zero when the pool already sits at the target.
    #[must_use]
    pub const fn amount_in(&self) -> f64 {
        self.amount_in
    }

    /// Returns the spot price actually achieved at the solved amount.
    #[must_use]
    pub const fn achieved_price(&self) -> Price {
        self.achieved_price
    }
}
