//! Price command implementation
//!
//! Prices one European call with the Monte Carlo engine and prints the
//! discounted estimate to stdout.

use clap::{Args, ValueEnum};
use pricer_core::types::SimulationParams;
use pricer_pricing::analytical::black_scholes_call;
use pricer_pricing::mc::{MonteCarloPricer, PricingResult};
use pricer_pricing::rng::NormalMethod;
use serde::Serialize;
use tracing::info;

use crate::config::CliConfig;
use crate::Result;

/// First line of the text output.
pub const TEXT_BANNER: &str = "=== Monte Carlo for European Call ===";

/// Output format of the price command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Banner, then `Option Price ~= 15.0401`
    #[default]
    Text,
    /// Pretty-printed JSON report
    Json,
}

/// Flags of the price command; each one overrides the loaded configuration.
#[derive(Debug, Clone, Default, Args)]
pub struct PriceArgs {
    /// Initial asset price S0
    #[arg(long, allow_negative_numbers = true)]
    pub spot: Option<f64>,

    /// Strike price K
    #[arg(long, allow_negative_numbers = true)]
    pub strike: Option<f64>,

    /// Risk-free rate r (continuously compounded)
    #[arg(long, allow_negative_numbers = true)]
    pub rate: Option<f64>,

    /// Annualised volatility sigma
    #[arg(long, allow_negative_numbers = true)]
    pub volatility: Option<f64>,

    /// Time to maturity T in years
    #[arg(long, allow_negative_numbers = true)]
    pub maturity: Option<f64>,

    /// Discount factor (defaults to exp(-r*T))
    #[arg(long, allow_negative_numbers = true)]
    pub discount: Option<f64>,

    /// Number of Monte Carlo paths
    #[arg(short = 'n', long)]
    pub paths: Option<u64>,

    /// Run seed
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Contributions accumulated per reduction block
    #[arg(long)]
    pub block_size: Option<usize>,

    /// Normal transform (ziggurat, box-muller)
    #[arg(long)]
    pub normal: Option<NormalMethod>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also print the standard error and the Black-Scholes closed form
    #[arg(long)]
    pub compare: bool,
}

impl PriceArgs {
    /// Applies every flag that was given on top of `config`.
    pub fn apply(&self, config: &mut CliConfig) {
        let option = &mut config.option;
        if let Some(spot) = self.spot {
            option.spot = spot;
        }
        if let Some(strike) = self.strike {
            option.strike = strike;
        }
        if let Some(rate) = self.rate {
            option.rate = rate;
        }
        if let Some(volatility) = self.volatility {
            option.volatility = volatility;
        }
        if let Some(maturity) = self.maturity {
            option.maturity = maturity;
        }
        if let Some(discount) = self.discount {
            option.discount = Some(discount);
        }

        let simulation = &mut config.simulation;
        if let Some(paths) = self.paths {
            simulation.paths = paths;
        }
        if let Some(seed) = self.seed {
            simulation.seed = seed;
        }
        if let Some(block_size) = self.block_size {
            simulation.block_size = block_size;
        }
        if let Some(normal) = self.normal {
            simulation.normal = normal;
        }
    }
}

/// Everything printed by `--format json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceReport {
    /// Model inputs as priced
    pub params: SimulationParams,
    /// Normal transform used
    pub normal: NormalMethod,
    /// Reduction block size used
    pub block_size: usize,
    /// Monte Carlo estimate
    pub result: PricingResult,
    /// Closed-form reference, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub black_scholes: Option<f64>,
}

/// Run the price command
pub fn run(config: &CliConfig, format: OutputFormat, compare: bool) -> Result<()> {
    let report = price(config, compare)?;
    println!("{}", render(&report, format)?);
    Ok(())
}

/// Prices the configured option; nothing is printed.
pub fn price(config: &CliConfig, compare: bool) -> Result<PriceReport> {
    let params = config.option.to_params();
    let engine = config.simulation.to_engine_config()?;

    info!(
        spot = params.spot,
        strike = params.strike,
        rate = params.rate,
        volatility = params.volatility,
        maturity = params.maturity,
        n_paths = engine.n_paths(),
        "Starting pricing"
    );

    let pricer = MonteCarloPricer::new(engine.clone())?;
    let result = pricer.price_european_call(&params)?;
    let black_scholes = if compare {
        Some(black_scholes_call(&params)?)
    } else {
        None
    };

    info!(price = result.price, std_error = result.std_error, "Pricing complete");

    Ok(PriceReport {
        params,
        normal: engine.normal_method(),
        block_size: engine.block_size(),
        result,
        black_scholes,
    })
}

/// Formats a report for stdout.
pub fn render(report: &PriceReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Text => {
            let result = &report.result;
            let mut out = format!("{}\nOption Price ~= {:.4}", TEXT_BANNER, result.price);
            if let Some(reference) = report.black_scholes {
                let diff = result.price - reference;
                out.push_str(&format!(
                    "\nStd Error ~= {:.6} (N = {}, seed = {})",
                    result.std_error, result.n_paths, result.seed
                ));
                out.push_str(&format!("\nBlack-Scholes ~= {:.4} (diff = {:+.6})", reference, diff));
            }
            Ok(out)
        }
    }
}
