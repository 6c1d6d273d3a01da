//! StableSwap amplification factor.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// The StableSwap amplification factor `A`.
///
/// Controls the curvature of the invariant:
///
/// | A | Curve |
/// |---|-------|
/// | → 0 | Constant product (maximum slippage) |
/// | 50–5 000 | Flat near peg, typical stable pools |
/// | → ∞ | Constant sum (1:1 swaps) |
///
/// The dashboard's slider spans four to six orders of magnitude around a
/// pool's base value, so no upper bound is imposed here.
///
/// Zero is representable ([`Amplification::ZERO`]) because the invariant
/// solver must handle the degenerate constant-product limit, but pool
/// construction requires a strictly positive value.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Amplification(f64);

impl Amplification {
    /// The degenerate constant-product limit.
    pub const ZERO: Self = Self(0.0);

    /// Creates a new `Amplification` from an `f64` value.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidAmplification`] if the value is
    /// negative, NaN, or infinite.
    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(EngineError::InvalidAmplification(
                "amplification must be a non-negative finite number",
            ));
        }
        Ok(Self(value))
    }

    /// Returns the underlying `f64` value.
    #[must_use]
    pub const fn get(&self) -> f64 {
        self.0
    }

    /// Returns `true` for the degenerate constant-product limit.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Scales this factor by `multiplier`, as the dashboard's slider does
    /// when sweeping `base_amp × 10^k`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidAmplification`] if the scaled value
    /// is negative or non-finite.
    pub fn scaled(&self, multiplier: f64) -> Result<Self> {
        Self::new(self.0 * multiplier)
    }
}

impl fmt::Display for Amplification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    // -- Construction -------------------------------------------------------

    #[test]
    fn new_valid() {
        let Ok(amp) = Amplification::new(200.0) else {
            panic!("expected Ok");
        };
        assert!((amp.get() - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn new_zero_allowed() {
        let Ok(amp) = Amplification::new(0.0) else {
            panic!("expected Ok");
        };
        assert!(amp.is_zero());
    }

    #[test]
    fn new_negative_rejected() {
        assert!(Amplification::new(-1.0).is_err());
    }

    #[test]
    fn new_nan_rejected() {
        assert!(Amplification::new(f64::NAN).is_err());
    }

    #[test]
    fn new_infinity_rejected() {
        assert!(Amplification::new(f64::INFINITY).is_err());
    }

    // -- Constants ----------------------------------------------------------

    #[test]
    fn zero_constant() {
        assert!(Amplification::ZERO.is_zero());
    }

    // -- scaled -------------------------------------------------------------

    #[test]
    fn scaled_up_and_down() {
        let Ok(base) = Amplification::new(200.0) else {
            panic!("expected Ok");
        };
        let Ok(up) = base.scaled(1e3) else {
            panic!("expected Ok");
        };
        let Ok(down) = base.scaled(1e-3) else {
            panic!("expected Ok");
        };
        assert!((up.get() - 200_000.0).abs() < 1e-9);
        assert!((down.get() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn scaled_negative_rejected() {
        let Ok(base) = Amplification::new(200.0) else {
            panic!("expected Ok");
        };
        assert!(base.scaled(-1.0).is_err());
    }

    // -- Display ------------------------------------------------------------

    #[test]
    fn display() {
        let Ok(amp) = Amplification::new(200.0) else {
            panic!("expected Ok");
        };
        assert_eq!(format!("{amp}"), "200");
    }
}
