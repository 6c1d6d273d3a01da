//! Unified error types for the StableSwap simulation engine.
//!
//! All fallible operations across the crate return [`EngineError`] as their
//! error type, ensuring a consistent error handling experience for consumers.
//! Every variant is a local, recoverable-by-caller condition: the engine
//! never retries beyond its bounded numerical iteration, and no partial
//! results are returned on failure.

use thiserror::Error;

/// Convenience alias used by every fallible operation in the crate.
pub type Result<T> = core::result::Result<T, EngineError>;

/// Unified error enum for the StableSwap engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// A balance was non-positive, non-finite, or missing.
    #[error("invalid balance: {0}")]
    InvalidBalance(&'static str),

    /// The amplification factor was negative or non-finite, or zero
    /// where a strictly positive value is required.
    #[error("invalid amplification factor: {0}")]
    InvalidAmplification(&'static str),

    /// A price value was non-positive or non-finite.
    #[error("invalid price: {0}")]
    InvalidPrice(&'static str),

    /// A trade amount was non-positive, non-finite, or exceeded the
    /// available balance.
    #[error("invalid trade amount: {0}")]
    InvalidAmount(&'static str),

    /// Newton iteration exceeded its bound without reaching tolerance.
    ///
    /// Surfaced rather than silently truncated: downstream prices computed
    /// from a half-converged root would be wrong.
    #[error("iteration did not converge: {0}")]
    Convergence(&'static str),

    /// A solved output balance implies a non-positive amount out,
    /// signaling a numerical or input inconsistency.
    #[error("trade produced non-positive output: {0}")]
    NegativeOutput(&'static str),

    /// The cost-to-target-price search cannot bracket a root in its
    /// domain (e.g. target price unreachable within the pool's depth).
    #[error("target price unreachable: {0}")]
    UnreachableTarget(&'static str),

    /// An asset name is not present in the pool.
    #[error("unknown asset: {0}")]
    UnknownAsset(String),

    /// Two assets in a pool share the same name.
    #[error("duplicate asset name: {0}")]
    DuplicateAsset(String),
}
