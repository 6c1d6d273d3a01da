//! Amplification sweep over a stable pair.
//!
//! Recreates the central chart of the stable-curve dashboard: the same
//! pool priced and traded across amplification values spanning six
//! orders of magnitude, showing the curve morph from constant product
//! toward constant sum.
//!
//! # Run
//!
//! ```bash
//! cargo run --example amp_sweep
//! ```

use stableswap_sim::domain::{LABEL_AFTER_TRADE, LABEL_BEFORE_TRADE};
use stableswap_sim::pool::StablePool;
use stableswap_sim::pricing::price_impact;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== StableSwap amplification sweep ===\n");

    // ── 1. Pool snapshot ────────────────────────────────────────────────
    let base_amp = 200.0;
    let pool = StablePool::from_raw(&[("DAI", 1_000_000.0), ("USDC", 1_000_000.0)], base_amp)?;

    println!("Assets:          DAI / USDC");
    println!("Balances:        1 000 000 / 1 000 000");
    println!("Base amp:        {base_amp}");

    // ── 2. Sweep: base amp scaled by 10^k for k in -3..=3 ───────────────
    let trade_size = 100_000.0;
    println!("\n--- Sell {trade_size} DAI at each amplification ---");
    println!("{:>12}  {:>14}  {:>14}  {:>10}", "amp", "invariant D", "amount out", "impact");

    for exponent in -3i32..=3 {
        let multiplier = 10f64.powi(exponent);
        let scaled = pool.amplification().scaled(multiplier)?;
        let swept = pool.with_amplification(scaled)?;

        let d = swept.invariant()?;
        let trade = swept.simulate_trade("DAI", "USDC", trade_size)?;

        let (before, after) = trade.balances_in();
        let price_before = swept.spot_price_at("DAI", "USDC", before)?;
        let price_after = swept.spot_price_at("DAI", "USDC", after)?;
        let impact = price_impact(price_before, price_after);

        println!(
            "{:>12.1}  {:>14.2}  {:>14.2}  {:>9.4}%",
            scaled.get(),
            d,
            trade.amount_out(),
            impact * 100.0
        );
    }

    // ── 3. The two sampled points behind each row ───────────────────────
    let trade = pool.simulate_trade("DAI", "USDC", trade_size)?;
    let (in_before, in_after) = trade.balances_in();
    let (out_before, out_after) = trade.balances_out();
    println!("\n--- Sampled points at amp {base_amp} ---");
    println!("  {}: DAI {in_before:.2}, USDC {out_before:.2}", LABEL_BEFORE_TRADE);
    println!("  {}: DAI {in_after:.2}, USDC {out_after:.2}", LABEL_AFTER_TRADE);
    println!("  Effective price: {}", trade.effective_price());

    Ok(())
}
