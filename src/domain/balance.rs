//! Validated asset balance.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// An asset balance as a strictly positive, finite real.
///
/// Wraps an `f64` value. Zero is rejected: a zero balance makes the
/// StableSwap product term degenerate and every downstream computation
/// meaningless, so the boundary is enforced at construction.
///
/// # Examples
///
/// ```
/// use stableswap_sim::domain::Balance;
///
/// let balance = Balance::new(1_000_000.0);
/// assert!(balance.is_ok());
/// assert!(Balance::new(0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Balance(f64);

impl Balance {
    /// Creates a new `Balance` from an `f64` value.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidBalance`] if the value is zero,
    /// negative, NaN, or infinite.
    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(EngineError::InvalidBalance(
                "balance must be a strictly positive finite number",
            ));
        }
        Ok(Self(value))
    }

    /// Returns the underlying `f64` value.
    #[must_use]
    pub const fn get(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
