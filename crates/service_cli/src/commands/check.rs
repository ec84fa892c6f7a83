//! Check command implementation
//!
//! Reports the host, the thread pool and the effective configuration, then
//! validates the configured inputs and runs a short smoke pricing.

use pricer_pricing::analytical::black_scholes_call;
use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
use tracing::info;

use crate::config::CliConfig;
use crate::Result;

/// Paths used by the smoke pricing.
const SMOKE_PATHS: usize = 1 << 14;

/// Run the check command
pub fn run(config: &CliConfig) -> Result<()> {
    println!("mcprice {}", env!("CARGO_PKG_VERSION"));
    println!(
        "  CPUs: {} logical, {} physical",
        num_cpus::get(),
        num_cpus::get_physical()
    );
    println!("  Rayon threads: {}", rayon::current_num_threads());
    println!("  Configuration:");
    for line in serde_json::to_string_pretty(config)?.lines() {
        println!("    {}", line);
    }

    let params = config.option.to_params();
    params.validate()?;
    let engine = config.simulation.to_engine_config()?;
    println!("  Inputs: ok");

    let smoke = MonteCarloConfig::builder()
        .n_paths(SMOKE_PATHS.min(engine.n_paths()))
        .seed(engine.seed())
        .block_size(engine.block_size())
        .normal_method(engine.normal_method())
        .build()?;
    let result = MonteCarloPricer::new(smoke)?.price_european_call(&params)?;
    let reference = black_scholes_call(&params)?;
    info!(price = result.price, reference, "Smoke pricing complete");

    println!(
        "  Smoke run: {:.4} +/- {:.4} ({} paths), Black-Scholes {:.4}",
        result.price,
        result.confidence_95(),
        result.n_paths,
        reference
    );
    Ok(())
}
