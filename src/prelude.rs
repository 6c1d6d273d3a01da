//! Convenience re-exports for common types.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use stableswap_sim::prelude::*;
//! ```
//!
//! This re-exports the pool type, the domain newtypes, the pricing
//! helper, and the error types so that consumers don't need to import
//! from individual submodules.

// Re-export domain types
pub use crate::domain::{
    Amplification, Asset, AssetName, Balance, DepthQuote, Price, TradeResult, TradeSide,
    LABEL_AFTER_TRADE, LABEL_BEFORE_TRADE,
};

// Re-export the pool
pub use crate::pool::StablePool;

// Re-export free pricing helpers
pub use crate::pricing::price_impact;

// Re-export solver entry points and constants
pub use crate::solver::{compute_invariant, solve_for_balance, MAX_ITERATIONS, REL_TOLERANCE};

// Re-export error types
pub use crate::error::{EngineError, Result};
