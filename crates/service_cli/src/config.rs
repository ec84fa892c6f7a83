//! CLI configuration management
//!
//! Layers, lowest precedence first: built-in defaults, an optional TOML file,
//! `MCPRICE_*` environment variables (`__` between nested keys, e.g.
//! `MCPRICE_SIMULATION__PATHS`), then explicit command-line flags.
//!
//! ```toml
//! log_level = "info"
//! threads = 0
//!
//! [option]
//! spot = 106.162
//! strike = 95.0
//!
//! [simulation]
//! paths = 16777216
//! normal = "box-muller"
//! ```
//!
//! Values are not range-checked here; the engine validates them when the run
//! starts.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use config::{Config, ConfigError, Environment, File, FileFormat, Source};
use pricer_core::types::{PricingError, SimulationParams};
use pricer_pricing::mc::MonteCarloConfig;
use pricer_pricing::rng::NormalMethod;
use serde::{Deserialize, Serialize};

/// Prefix of environment variables read by the CLI.
pub const ENV_PREFIX: &str = "MCPRICE";

/// Configuration file read when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "mcprice.toml";

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Everything, including per-span events
    Trace,
    /// Run timings and throughput
    Debug,
    /// Run start and completion
    Info,
    /// Numeric anomalies only
    #[default]
    Warn,
    /// Failures only
    Error,
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!(
                "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                s
            )),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

/// Option contract and market inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionConfig {
    /// Initial asset price S₀
    pub spot: f64,
    /// Strike K
    pub strike: f64,
    /// Continuously compounded risk-free rate r
    pub rate: f64,
    /// Annualised volatility σ
    pub volatility: f64,
    /// Time to maturity T in years
    pub maturity: f64,
    /// Discount factor; `None` means `exp(-r·T)`
    pub discount: Option<f64>,
}

impl Default for OptionConfig {
    fn default() -> Self {
        Self {
            spot: 106.162,
            strike: 95.0,
            rate: 0.01,
            volatility: 0.5,
            maturity: 2.0 / 12.0,
            discount: None,
        }
    }
}

impl OptionConfig {
    /// Engine parameters for this contract (not yet validated).
    pub fn to_params(&self) -> SimulationParams {
        let params =
            SimulationParams::new(self.spot, self.strike, self.rate, self.volatility, self.maturity);
        match self.discount {
            Some(discount) => params.with_discount(discount),
            None => params,
        }
    }
}

/// Simulation controls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of paths N
    pub paths: u64,
    /// Run seed
    pub seed: u64,
    /// Reducer leaf block size
    pub block_size: usize,
    /// Uniform-to-normal transform
    pub normal: NormalMethod,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            paths: 1 << 24,
            seed: 1234,
            block_size: pricer_pricing::reduce::DEFAULT_BLOCK_SIZE,
            normal: NormalMethod::default(),
        }
    }
}

impl SimulationConfig {
    /// Engine configuration for these controls.
    ///
    /// # Errors
    ///
    /// Returns the engine's `InvalidParameter` error for a zero path count or
    /// block size, or a path count that does not fit in `usize`.
    pub fn to_engine_config(&self) -> Result<MonteCarloConfig, PricingError> {
        let n_paths = usize::try_from(self.paths).map_err(|_| {
            PricingError::invalid(
                "n_paths",
                format!("{} does not fit in the address space", self.paths),
            )
        })?;

        MonteCarloConfig::builder()
            .n_paths(n_paths)
            .seed(self.seed)
            .block_size(self.block_size)
            .normal_method(self.normal)
            .build()
    }
}

/// Full CLI configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level used when `RUST_LOG` is unset
    pub log_level: LogLevel,
    /// Size of the global rayon pool; 0 keeps rayon's default
    pub threads: usize,
    /// Contract inputs
    pub option: OptionConfig,
    /// Simulation controls
    pub simulation: SimulationConfig,
}

impl CliConfig {
    /// Loads defaults, the TOML file at `path` and `MCPRICE_*` variables.
    ///
    /// A missing file is an error only when `required` is set.
    pub fn load(path: &Path, required: bool) -> Result<Self, ConfigError> {
        let file = File::from(path).format(FileFormat::Toml).required(required);
        Self::from_sources(file, environment())
    }

    /// Builds a configuration from one file-like source and an environment source.
    fn from_sources<S>(file: S, env: Environment) -> Result<Self, ConfigError>
    where
        S: Source + Send + Sync + 'static,
    {
        Config::builder()
            .add_source(file)
            .add_source(env)
            .build()?
            .try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::collections::HashMap;
    use std::io::Write;

    fn env_from(pairs: &[(&str, &str)]) -> Environment {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        environment().source(Some(map))
    }

    fn from_toml(toml: &str, env: &[(&str, &str)]) -> Result<CliConfig, ConfigError> {
        CliConfig::from_sources(File::from_str(toml, FileFormat::Toml), env_from(env))
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.threads, 0);
        assert_eq!(config.option.spot, 106.162);
        assert_eq!(config.option.strike, 95.0);
        assert_eq!(config.option.rate, 0.01);
        assert_eq!(config.option.volatility, 0.5);
        assert_relative_eq!(config.option.maturity, 1.0 / 6.0, epsilon = 1e-15);
        assert_eq!(config.option.discount, None);
        assert_eq!(config.simulation.paths, 16_777_216);
        assert_eq!(config.simulation.seed, 1234);
        assert_eq!(config.simulation.block_size, 1024);
        assert_eq!(config.simulation.normal, NormalMethod::Ziggurat);
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!("trace".parse::<LogLevel>().unwrap(), LogLevel::Trace);
        assert_eq!("DEBUG".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert!("loud".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevel::Info.to_string(), "info");
        assert_eq!(LogLevel::Error.as_filter_str(), "error");
    }

    #[test]
    fn test_empty_sources_give_defaults() {
        let config = from_toml("", &[]).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_partial_toml_deserialization() {
        let toml = r#"
            log_level = "debug"

            [simulation]
            paths = 4096
            normal = "box-muller"
        "#;
        let config = from_toml(toml, &[]).unwrap();

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.simulation.paths, 4096);
        assert_eq!(config.simulation.normal, NormalMethod::BoxMuller);
        assert_eq!(config.simulation.seed, 1234);
        assert_eq!(config.option, OptionConfig::default());
    }

    #[test]
    fn test_environment_overrides_file() {
        let toml = r#"
            threads = 2

            [option]
            strike = 100.0
        "#;
        let env = [
            ("MCPRICE_THREADS", "8"),
            ("MCPRICE_OPTION__STRIKE", "90.5"),
            ("MCPRICE_SIMULATION__SEED", "7"),
            ("MCPRICE_SIMULATION__BLOCK_SIZE", "256"),
        ];
        let config = from_toml(toml, &env).unwrap();

        assert_eq!(config.threads, 8);
        assert_eq!(config.option.strike, 90.5);
        assert_eq!(config.simulation.seed, 7);
        assert_eq!(config.simulation.block_size, 256);
    }

    #[test]
    fn test_unknown_log_level_rejected() {
        assert!(from_toml(r#"log_level = "loud""#, &[]).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[option]\nspot = 50.0\ndiscount = 0.97").unwrap();

        let config = CliConfig::load(file.path(), true).unwrap();
        assert_eq!(config.option.spot, 50.0);
        assert_eq!(config.option.discount, Some(0.97));
    }

    #[test]
    fn test_missing_optional_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        assert!(CliConfig::load(&path, false).is_ok());
        assert!(CliConfig::load(&path, true).is_err());
    }

    #[test]
    fn test_to_params_uses_discount_override() {
        let mut option = OptionConfig::default();
        let params = option.to_params();
        assert_relative_eq!(params.discount, (-0.01_f64 / 6.0).exp(), max_relative = 1e-15);

        option.discount = Some(0.5);
        assert_eq!(option.to_params().discount, 0.5);
    }

    #[test]
    fn test_to_engine_config() {
        let simulation = SimulationConfig {
            paths: 1000,
            seed: 3,
            block_size: 64,
            normal: NormalMethod::BoxMuller,
        };
        let engine = simulation.to_engine_config().unwrap();
        assert_eq!(engine.n_paths(), 1000);
        assert_eq!(engine.seed(), 3);
        assert_eq!(engine.block_size(), 64);
        assert_eq!(engine.normal_method(), NormalMethod::BoxMuller);

        let zero = SimulationConfig {
            paths: 0,
            ..simulation
        };
        assert!(zero.to_engine_config().unwrap_err().is_invalid_parameter());
    }
}
