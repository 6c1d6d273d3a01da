//! StableSwap invariant solver.
//!
//! Computes the invariant constant `D` for an N-asset pool and solves the
//! same polynomial for a single unknown balance at a fixed `D`. Both are
//! bounded Newton iterations over the rearranged polynomial form standard
//! to stable-pool implementations.
//!
//! # Invariant (N assets)
//!
//! ```text
//! A·nⁿ·Σxᵢ + D = A·D·nⁿ + D^(n+1) / (nⁿ·Πxᵢ)
//! ```
//!
//! where `A` is the amplification factor, `n` the number of assets and
//! `xᵢ` the balances. No closed form exists for n > 2, so `D` is found by
//! Newton's method seeded from `Σxᵢ`:
//!
//! ```text
//! D_next = (ann·S + n·D_P) · D / ((ann − 1)·D + (n + 1)·D_P)
//! ```
//!
//! with `ann = A·nⁿ`, `S = Σxᵢ` and `D_P = D^(n+1) / (nⁿ·Πxᵢ)`.
//!
//! These functions operate on raw `f64` slices: they are the numerical
//! primitive under every pool operation, and validate their inputs at the
//! boundary so callers cannot feed them degenerate configurations.

use tracing::{debug, trace, warn};

use crate::error::{EngineError, Result};

/// Maximum Newton iterations before declaring non-convergence.
pub const MAX_ITERATIONS: u32 = 255;

/// Relative convergence tolerance for consecutive Newton iterates.
pub const REL_TOLERANCE: f64 = 1e-10;

fn validate_balances(balances: &[f64]) -> Result<()> {
    if balances.len() < 2 {
        return Err(EngineError::InvalidBalance(
            "a stable pool needs at least two balances",
        ));
    }
    if balances.iter().any(|x| !x.is_finite() || *x <= 0.0) {
        return Err(EngineError::InvalidBalance(
            "every balance must be a strictly positive finite number",
        ));
    }
    Ok(())
}

fn validate_amp(amp: f64) -> Result<()> {
    if !amp.is_finite() || amp < 0.0 {
        return Err(EngineError::InvalidAmplification(
            "amplification must be a non-negative finite number",
        ));
    }
    Ok(())
}

/// `ann = A·nⁿ` for an n-asset pool.
fn ann(amp: f64, n: f64) -> f64 {
    amp * n.powf(n)
}

/// Computes the StableSwap invariant `D` for the given balances and
/// amplification factor via Newton iteration.
///
/// `amp = 0` is the degenerate constant-product limit and still
/// converges (to `n·(Πxᵢ)^(1/n)`); `amp → ∞` approaches the constant-sum
/// value `Σxᵢ`.
///
/// # Errors
///
/// - [`EngineError::InvalidBalance`] if fewer than two balances are given
///   or any balance is non-positive or non-finite.
/// - [`EngineError::InvalidAmplification`] if `amp` is negative or
///   non-finite.
/// - [`EngineError::Convergence`] if the iteration does not reach the
///   relative tolerance within [`MAX_ITERATIONS`].
pub fn compute_invariant(balances: &[f64], amp: f64) -> Result<f64> {
    validate_balances(balances)?;
    validate_amp(amp)?;

    let n = balances.len() as f64;
    let sum: f64 = balances.iter().sum();
    let ann = ann(amp, n);

    let mut d = sum;
    for iteration in 0..MAX_ITERATIONS {
        // D_P = D^(n+1) / (n^n · Πxᵢ), accumulated one factor at a time.
        let mut d_p = d;
        for x in balances {
            d_p = d_p * d / (x * n);
        }

        let d_prev = d;
        d = (ann * sum + n * d_p) * d / ((ann - 1.0) * d + (n + 1.0) * d_p);

        trace!(iteration, d, d_prev, "invariant Newton step");

        if !d.is_finite() || d <= 0.0 {
            warn!(iteration, d_prev, "invariant iteration diverged");
            return Err(EngineError::Convergence(
                "invariant iteration produced a non-positive or non-finite D",
            ));
        }
        if (d - d_prev).abs() <= REL_TOLERANCE * d {
            debug!(iterations = iteration + 1, d, "invariant converged");
            return Ok(d);
        }
    }

    warn!(amp, "invariant iteration exhausted its bound");
    Err(EngineError::Convergence(
        "invariant D did not converge within the iteration bound",
    ))
}

/// Solves the invariant polynomial for the balance at `index`, given all
/// other balances and a target invariant `target_d`.
///
/// The entry of `balances` at `index` is ignored; every other entry is
/// held fixed. This answers "what must balance *i* be so the invariant
/// equals `D`", the primitive under every trade and depth computation.
///
/// For the unknown `y`, the invariant rearranges to `y² + (b − D)·y = c`
/// with
///
/// ```text
/// c = D^(n+1) / (nⁿ · Π_{k≠i} x_k · ann)
/// b = Σ_{k≠i} x_k + D / ann
/// ```
///
/// iterated as `y_next = (y² + c) / (2y + b − D)`, seeded from `D`
/// (itself produced from the sum-based invariant seed), which bounds the
/// root from above and keeps the iteration monotone.
///
/// # Errors
///
/// - [`EngineError::InvalidBalance`] on degenerate balances or a
///   non-positive `target_d`.
/// - [`EngineError::InvalidAmplification`] if `amp` is zero, negative or
///   non-finite: the `b`/`c` terms divide by `ann`, so the degenerate
///   constant-product limit is not solvable here.
/// - [`EngineError::Convergence`] if the iteration does not reach the
///   relative tolerance within [`MAX_ITERATIONS`].
pub fn solve_for_balance(balances: &[f64], index: usize, target_d: f64, amp: f64) -> Result<f64> {
    validate_amp(amp)?;
    if amp == 0.0 {
        return Err(EngineError::InvalidAmplification(
            "balance solving requires a strictly positive amplification",
        ));
    }
    if index >= balances.len() {
        return Err(EngineError::InvalidBalance(
            "asset index is out of range for the balance set",
        ));
    }
    if balances.len() < 2 {
        return Err(EngineError::InvalidBalance(
            "a stable pool needs at least two balances",
        ));
    }
    if !target_d.is_finite() || target_d <= 0.0 {
        return Err(EngineError::InvalidBalance(
            "target invariant must be a strictly positive finite number",
        ));
    }

    let n = balances.len() as f64;
    let ann = ann(amp, n);

    // c = D^(n+1) / (n^n · Π_{k≠i} x_k · ann) and b = Σ_{k≠i} x_k + D/ann,
    // accumulated over the fixed balances.
    let mut c = target_d;
    let mut s = 0.0;
    for (k, x) in balances.iter().enumerate() {
        if k == index {
            continue;
        }
        if !x.is_finite() || *x <= 0.0 {
            return Err(EngineError::InvalidBalance(
                "every fixed balance must be a strictly positive finite number",
            ));
        }
        s += x;
        c = c * target_d / (x * n);
    }
    c = c * target_d / (ann * n);
    let b = s + target_d / ann;

    let mut y = target_d;
    for iteration in 0..MAX_ITERATIONS {
        let y_prev = y;
        y = (y * y + c) / (2.0 * y + b - target_d);

        trace!(iteration, y, y_prev, "balance Newton step");

        if !y.is_finite() || y <= 0.0 {
            warn!(iteration, y_prev, "balance iteration diverged");
            return Err(EngineError::Convergence(
                "balance iteration produced a non-positive or non-finite value",
            ));
        }
        if (y - y_prev).abs() <= REL_TOLERANCE * y {
            debug!(iterations = iteration + 1, y, "balance solve converged");
            return Ok(y);
        }
    }

    warn!(amp, target_d, "balance iteration exhausted its bound");
    Err(EngineError::Convergence(
        "balance did not converge within the iteration bound",
    ))
}
