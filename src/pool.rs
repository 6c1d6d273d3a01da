//! Immutable stable-pool snapshots.
//!
//! A [`StablePool`] is an ordered set of named balances plus a single
//! amplification factor, validated at construction and never mutated
//! afterwards. Trades are *simulated* against a snapshot rather than
//! applied to it, matching a what-if dashboard rather than a live ledger:
//! comparing a current and a candidate amplification factor is two
//! independent snapshots run through the same pure functions.

use serde::{Deserialize, Serialize};

use crate::domain::{Amplification, Asset, AssetName};
use crate::error::{EngineError, Result};
use crate::solver;

/// An immutable N-asset stable-pool snapshot.
///
/// # Invariants
///
/// - At least two assets, with unique names.
/// - Every balance is strictly positive and finite.
/// - The amplification factor is strictly positive and finite.
///
/// # Examples
///
/// ```
/// use stableswap_sim::pool::StablePool;
///
/// let pool = StablePool::from_raw(
///     &[("DAI", 1_000_000.0), ("USDC", 1_000_000.0)],
///     200.0,
/// )?;
/// assert_eq!(pool.len(), 2);
/// # Ok::<(), stableswap_sim::error::EngineError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StablePool {
    assets: Vec<Asset>,
    amplification: Amplification,
}

impl StablePool {
    /// Creates a pool from validated assets and amplification.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidBalance`] if fewer than two assets are given.
    /// - [`EngineError::DuplicateAsset`] if two assets share a name.
    /// - [`EngineError::InvalidAmplification`] if the factor is zero:
    ///   the degenerate constant-product limit is admitted by the raw
    ///   solver but not by a pool snapshot.
    pub fn new(assets: Vec<Asset>, amplification: Amplification) -> Result<Self> {
        if assets.len() < 2 {
            return Err(EngineError::InvalidBalance(
                "a stable pool needs at least two assets",
            ));
        }
        for (i, asset) in assets.iter().enumerate() {
            if assets[..i].iter().any(|other| other.name() == asset.name()) {
                return Err(EngineError::DuplicateAsset(asset.name().to_string()));
            }
        }
        if amplification.is_zero() {
            return Err(EngineError::InvalidAmplification(
                "pool amplification must be strictly positive",
            ));
        }
        Ok(Self {
            assets,
            amplification,
        })
    }

    /// Convenience constructor from raw `(name, balance)` pairs and a raw
    /// amplification value, the shape the presentation layer receives
    /// from its subgraph query.
    ///
    /// # Errors
    ///
    /// Propagates the domain validation errors plus those of
    /// [`StablePool::new`].
    pub fn from_raw(entries: &[(&str, f64)], amplification: f64) -> Result<Self> {
        let assets = entries
            .iter()
            .map(|(name, balance)| Asset::try_from_raw(*name, *balance))
            .collect::<Result<Vec<_>>>()?;
        Self::new(assets, Amplification::new(amplification)?)
    }

    /// Returns a new snapshot with the same assets and a different
    /// amplification factor. The dashboard's "current vs new amp"
    /// scenario pair is two calls away from one query result.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidAmplification`] if the factor is zero.
    pub fn with_amplification(&self, amplification: Amplification) -> Result<Self> {
        Self::new(self.assets.clone(), amplification)
    }

    /// Returns the number of assets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Returns `true` if the pool has no assets. Never true for a
    /// constructed pool; provided for API completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Returns the ordered assets.
    #[must_use]
    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    /// Returns the amplification factor.
    #[must_use]
    pub const fn amplification(&self) -> Amplification {
        self.amplification
    }

    /// Returns the position of the named asset.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownAsset`] if the name is not present.
    pub fn index_of(&self, name: &str) -> Result<usize> {
        self.assets
            .iter()
            .position(|asset| asset.name() == name)
            .ok_or_else(|| EngineError::UnknownAsset(name.to_string()))
    }

    /// Returns the recorded balance of the named asset.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownAsset`] if the name is not present.
    pub fn balance_of(&self, name: &str) -> Result<f64> {
        Ok(self.assets[self.index_of(name)?].balance().get())
    }

    /// Returns the asset names in pool order.
    #[must_use]
    pub fn names(&self) -> Vec<&AssetName> {
        self.assets.iter().map(Asset::name).collect()
    }

    /// Returns the balances in pool order as raw values.
    #[must_use]
    pub fn balances(&self) -> Vec<f64> {
        self.assets.iter().map(|a| a.balance().get()).collect()
    }

    /// Computes the StableSwap invariant `D` for the current balances.
    ///
    /// Recomputed on every call: the snapshot holds no derived state, so
    /// the invariant can never be stale.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Convergence`] if the Newton iteration does
    /// not converge (see [`solver::compute_invariant`]).
    pub fn invariant(&self) -> Result<f64> {
        solver::compute_invariant(&self.balances(), self.amplification.get())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn two_asset_pool() -> StablePool {
        let Ok(pool) =
            StablePool::from_raw(&[("DAI", 1_000_000.0), ("USDC", 1_000_000.0)], 200.0)
        else {
            panic!("valid pool");
        };
        pool
    }

    fn three_asset_pool() -> StablePool {
        let Ok(pool) = StablePool::from_raw(
            &[
                ("DAI", 1_000_000.0),
                ("USDC", 1_500_000.0),
                ("USDT", 800_000.0),
            ],
            120.0,
        ) else {
            panic!("valid pool");
        };
        pool
    }

    // -- Construction -------------------------------------------------------

    #[test]
    fn valid_two_asset_pool() {
        let pool = two_asset_pool();
        assert_eq!(pool.len(), 2);
        assert!(!pool.is_empty());
        assert!((pool.amplification().get() - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn valid_three_asset_pool() {
        let pool = three_asset_pool();
        assert_eq!(pool.len(), 3);
        assert_eq!(pool.names(), ["DAI", "USDC", "USDT"]);
    }

    #[test]
    fn single_asset_rejected() {
        let result = StablePool::from_raw(&[("DAI", 1_000_000.0)], 200.0);
        assert!(matches!(result, Err(EngineError::InvalidBalance(_))));
    }

    #[test]
    fn duplicate_names_rejected() {
        let result =
            StablePool::from_raw(&[("DAI", 1_000_000.0), ("DAI", 500_000.0)], 200.0);
        assert!(matches!(result, Err(EngineError::DuplicateAsset(_))));
    }

    #[test]
    fn zero_balance_rejected() {
        let result = StablePool::from_raw(&[("DAI", 1_000_000.0), ("USDC", 0.0)], 200.0);
        assert!(matches!(result, Err(EngineError::InvalidBalance(_))));
    }

    #[test]
    fn zero_amplification_rejected() {
        let result = StablePool::from_raw(&[("DAI", 1.0), ("USDC", 1.0)], 0.0);
        assert!(matches!(result, Err(EngineError::InvalidAmplification(_))));
    }

    #[test]
    fn negative_amplification_rejected() {
        let result = StablePool::from_raw(&[("DAI", 1.0), ("USDC", 1.0)], -5.0);
        assert!(matches!(result, Err(EngineError::InvalidAmplification(_))));
    }

    // -- with_amplification -------------------------------------------------

    #[test]
    fn with_amplification_builds_scenario_pair() {
        let current = two_asset_pool();
        let Ok(new_amp) = Amplification::new(20.0) else {
            panic!("valid amp");
        };
        let Ok(candidate) = current.with_amplification(new_amp) else {
            panic!("expected Ok");
        };
        assert_eq!(candidate.balances(), current.balances());
        assert!((candidate.amplification().get() - 20.0).abs() < f64::EPSILON);
        // The original snapshot is untouched.
        assert!((current.amplification().get() - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn with_zero_amplification_rejected() {
        let pool = two_asset_pool();
        let result = pool.with_amplification(Amplification::ZERO);
        assert!(matches!(result, Err(EngineError::InvalidAmplification(_))));
    }

    // -- Lookup -------------------------------------------------------------

    #[test]
    fn index_and_balance_lookup() {
        let pool = three_asset_pool();
        let Ok(index) = pool.index_of("USDT") else {
            panic!("expected Ok");
        };
        assert_eq!(index, 2);
        let Ok(balance) = pool.balance_of("USDC") else {
            panic!("expected Ok");
        };
        assert!((balance - 1_500_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn unknown_asset_lookup_fails() {
        let pool = two_asset_pool();
        let result = pool.index_of("WBTC");
        assert!(matches!(result, Err(EngineError::UnknownAsset(name)) if name == "WBTC"));
    }

    // -- Invariant ----------------------------------------------------------

    #[test]
    fn invariant_of_balanced_pool() {
        let pool = two_asset_pool();
        let Ok(d) = pool.invariant() else {
            panic!("expected Ok");
        };
        assert!((d - 2_000_000.0).abs() <= 1e-6 * 2_000_000.0, "D = {d}");
    }

    #[test]
    fn snapshot_round_trips_through_serde() {
        let pool = two_asset_pool();
        let Ok(json) = serde_json::to_string(&pool) else {
            panic!("expected Ok");
        };
        let Ok(back) = serde_json::from_str::<StablePool>(&json) else {
            panic!("expected Ok");
        };
        assert_eq!(back, pool);
    }
}
