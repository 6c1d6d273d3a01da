//! Fundamental domain value types used throughout the engine.
//!
//! This module contains the core value types that model the simulation
//! domain: asset names, balances, amplification factors, prices, and the
//! result records returned by trade simulation and depth-cost analysis.
//! All types use newtypes with validated constructors to enforce invariants.

mod amplification;
mod asset;
mod balance;
mod price;
mod trade;

pub use amplification::Amplification;
pub use asset::{Asset, AssetName};
pub use balance::Balance;
pub use price::Price;
pub use trade::{DepthQuote, TradeResult, TradeSide, LABEL_AFTER_TRADE, LABEL_BEFORE_TRADE};
