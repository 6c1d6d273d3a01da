//! # StableSwap Sim
//!
//! Analytical engine for stable-pool trading: invariant solving, spot
//! pricing, price impact, depth costing, and single-trade simulation on
//! the StableSwap curve.
//!
//! At amplification `A` the curve interpolates between a constant-sum
//! market (large `A`, flat around the peg) and a constant-product market
//! (`A → 0`, Uniswap-shaped). The engine answers three questions about a
//! pool snapshot:
//!
//! - **Where is the curve?** Solve the invariant `D` and, given `D`, any
//!   single unknown balance ([`solver`]).
//! - **What is the price?** Closed-form marginal price at any point on
//!   the curve, plus the input amount required to move the pool to a
//!   target price ([`pricing`]).
//! - **What does a trade do?** Simulate a sell against a fixed snapshot
//!   and report amounts, balances, and effective price ([`simulate`]).
//!
//! All arithmetic is `f64`. Pools are immutable value snapshots, so a
//! shared reference can be priced and simulated from many threads at
//! once.
//!
//! # Quick Start
//!
//! ```rust
//! use stableswap_sim::prelude::*;
//!
//! // Two-asset pool at the peg, amplification 200.
//! let pool = StablePool::from_raw(
//!     &[("DAI", 1_000_000.0), ("USDC", 1_000_000.0)],
//!     200.0,
//! ).expect("valid pool");
//!
//! // Balanced pool: D equals the sum of balances, spot price is 1.
//! let d = pool.invariant().expect("converges");
//! assert!((d - 2_000_000.0).abs() < 1.0);
//! let spot = pool.spot_price("DAI", "USDC").expect("same pool assets");
//! assert!((spot.get() - 1.0).abs() < 1e-12);
//!
//! // Sell 10 000 DAI: high amplification keeps slippage small.
//! let trade = pool.simulate_trade("DAI", "USDC", 10_000.0).expect("trade ok");
//! assert!(trade.amount_out() > 9_900.0 && trade.amount_out() < 10_000.0);
//!
//! // Depth question: how much DAI must be sold to push the
//! // DAI -> USDC price 2% below spot?
//! let target = spot.shifted(-0.02).expect("valid target");
//! let quote = pool.cost_to_reach_price("DAI", "USDC", target).expect("reachable");
//! // Amplification 200 concentrates depth at the peg, so a 2% move
//! // costs a large share of the pool.
//! assert!(quote.amount_in() > 100_000.0);
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Balance`](domain::Balance), [`Amplification`](domain::Amplification), [`Price`](domain::Price), [`TradeResult`](domain::TradeResult), etc. |
//! | [`pool`] | [`StablePool`](pool::StablePool) snapshot: validated assets plus an amplification coefficient |
//! | [`solver`] | Newton iteration for the invariant `D` and for one unknown balance |
//! | [`pricing`] | Closed-form spot price, [`price_impact`](pricing::price_impact), and bisection depth costing |
//! | [`simulate`] | Trade simulation against a fixed snapshot |
//! | [`error`]  | [`EngineError`](error::EngineError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types |

pub mod domain;
pub mod error;
pub mod pool;
pub mod prelude;
pub mod pricing;
pub mod simulate;
pub mod solver;

#[cfg(test)]
mod proptest_properties;
