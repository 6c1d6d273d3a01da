//! Depth costing: how much must be traded to move the price?
//!
//! Asks the dashboard's liquidity question for several amplification
//! values: the input amount that pushes the DAI -> USDC spot price 2%
//! off its current level, in both directions. Flat curves concentrate
//! liquidity at the peg, so the same move costs more input as the
//! amplification grows; a target beyond what selling the whole recorded
//! balance can reach is reported as unreachable instead of a number.
//!
//! # Run
//!
//! ```bash
//! cargo run --example depth_cost
//! ```

use stableswap_sim::domain::DepthQuote;
use stableswap_sim::error::EngineError;
use stableswap_sim::pool::StablePool;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== StableSwap depth cost ===\n");

    let balances = [("DAI", 1_000_000.0), ("USDC", 1_000_000.0)];
    println!("Assets:    DAI / USDC");
    println!("Balances:  1 000 000 / 1 000 000");
    println!("Targets:   spot -2% (sell side), spot +2% (buy side)\n");

    println!("{:>8}  {:>10}  {:>18}  {:>18}", "amp", "spot", "cost to -2%", "cost to +2%");

    for amp in [0.5, 2.0, 4.0, 10.0, 20.0, 200.0] {
        let pool = StablePool::from_raw(&balances, amp)?;
        let spot = pool.spot_price("DAI", "USDC")?;

        let down = spot.shifted(-0.02)?;
        let up = spot.shifted(0.02)?;

        let sell = describe(pool.cost_to_reach_price("DAI", "USDC", down));
        let buy = describe(pool.cost_to_reach_price("DAI", "USDC", up));

        println!("{amp:>8.1}  {:>10.6}  {sell:>18}  {buy:>18}", spot.get());
    }

    println!("\nHigher amplification buys depth near the peg: the same 2%");
    println!("move costs more input on a flatter curve.");

    Ok(())
}

fn describe(quote: stableswap_sim::error::Result<DepthQuote>) -> String {
    match quote {
        Ok(quote) => format!("{} {:.2}", quote.side(), quote.amount_in()),
        Err(EngineError::UnreachableTarget(_)) => String::from("unreachable"),
        Err(error) => format!("error: {error}"),
    }
}
