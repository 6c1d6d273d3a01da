//! Exchange rate between two assets.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Exchange rate between two assets as a dimensionless ratio
/// (units of the output asset per unit of the input asset).
///
/// Wraps an `f64` value that must be finite and strictly positive. A
/// StableSwap spot price is a ratio of two strictly positive derivative
/// terms, so zero is never a legitimate price here.
///
/// # Examples
///
/// ```
/// use stableswap_sim::domain::Price;
///
/// let price = Price::new(1.002);
/// assert!(price.is_ok());
/// assert!(Price::new(0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Price(f64);

impl Price {
    /// Price ratio of 1:1, a balanced pool at peg.
    pub const ONE: Self = Self(1.0);

    /// Creates a new `Price` from an `f64` value.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPrice`] if the value is zero,
    /// negative, NaN, or infinite.
    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(EngineError::InvalidPrice(
                "price must be finite and strictly positive",
            ));
        }
        Ok(Self(value))
    }

    /// Returns the underlying `f64` value.
    #[must_use]
    pub const fn get(&self) -> f64 {
        self.0
    }

    /// Computes the reciprocal price (`1 / self`), quoting the same
    /// exchange rate in the opposite direction.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPrice`] if the reciprocal is not
    /// finite (only possible for subnormal extremes).
    pub fn inverse(&self) -> Result<Self> {
        Self::new(1.0 / self.0)
    }

    /// Returns this price shifted by a relative change, e.g. `-0.02`
    /// for a 2% lower target. This is how the dashboard derives its
    /// depth-cost price targets.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPrice`] if the shifted value is
    /// not strictly positive (e.g. `change <= -1.0`).
    pub fn shifted(&self, change: f64) -> Result<Self> {
        Self::new(self.0 * (1.0 + change))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
