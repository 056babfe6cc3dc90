//! CLI configuration management.
//!
//! Configuration is resolved in three layers, later layers winning:
//!
//! 1. TOML file (`dcf.toml` by default; optional)
//! 2. `DCF_*` environment variables
//! 3. Command-line flags ([`AssumptionOverrides`], `--data-dir`, `--format`)
//!
//! # Example file
//!
//! ```toml
//! data_dir = "data"
//! log_level = "info"
//! format = "table"
//!
//! [assumptions]
//! risk_free_rate = 0.03
//! market_risk_premium = 0.06
//! projection_years = 5
//! ```

use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::Args;
use pricer_valuation::dcf::ValuationAssumptions;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::output::OutputFormat;

/// Configuration errors
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("IO error reading {}: {message}", .path.display())]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying error message
        message: String,
    },

    /// Config file is not valid TOML for [`CliConfig`]
    #[error("Parse error: {0}")]
    Parse(String),

    /// Unknown log level
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// One or more settings rejected
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace
    Trace,
    /// Debug
    Debug,
    /// Info
    #[default]
    Info,
    /// Warn
    Warn,
    /// Error
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
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

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Directory holding `<TICKER>.json` snapshot files
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Default output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Model assumptions
    #[serde(default)]
    pub assumptions: ValuationAssumptions,

    /// File the configuration was loaded from, if any
    #[serde(skip)]
    pub source: Option<PathBuf>,

    /// Environment variables that could not be parsed
    #[serde(skip)]
    env_errors: Vec<String>,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: LogLevel::default(),
            format: OutputFormat::default(),
            assumptions: ValuationAssumptions::default(),
            source: None,
            env_errors: Vec::new(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let mut config = Self::from_toml(&content)?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or defaults if the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply `DCF_*` environment variable overrides
    pub fn with_env_override(self) -> Self {
        self.with_overrides_from(|name| std::env::var(name).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    ///
    /// Unparsable values are kept out of the configuration and reported by
    /// [`CliConfig::validate`].
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut errors = Vec::new();

        if let Some(data_dir) = lookup("DCF_DATA_DIR") {
            self.data_dir = PathBuf::from(data_dir);
        }
        override_parsed(&lookup, "DCF_LOG_LEVEL", &mut self.log_level, &mut errors);

        let a = &mut self.assumptions;
        override_parsed(&lookup, "DCF_RISK_FREE_RATE", &mut a.risk_free_rate, &mut errors);
        override_parsed(
            &lookup,
            "DCF_MARKET_RISK_PREMIUM",
            &mut a.market_risk_premium,
            &mut errors,
        );
        override_parsed(&lookup, "DCF_COST_OF_DEBT", &mut a.cost_of_debt, &mut errors);
        override_parsed(&lookup, "DCF_TAX_RATE", &mut a.tax_rate, &mut errors);
        override_parsed(
            &lookup,
            "DCF_TERMINAL_GROWTH_RATE",
            &mut a.terminal_growth_rate,
            &mut errors,
        );
        override_parsed(
            &lookup,
            "DCF_PROJECTION_YEARS",
            &mut a.projection_years,
            &mut errors,
        );

        self.env_errors.extend(errors);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = self.env_errors.clone();

        if self.data_dir.as_os_str().is_empty() {
            errors.push("data_dir cannot be empty".to_string());
        }

        if let Err(e) = self.assumptions.validate() {
            errors.push(e.to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

fn override_parsed<F, T>(lookup: &F, name: &str, slot: &mut T, errors: &mut Vec<String>)
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    if let Some(raw) = lookup(name) {
        match raw.trim().parse() {
            Ok(value) => *slot = value,
            Err(_) => errors.push(format!("{} has invalid value '{}'", name, raw)),
        }
    }
}

/// Per-invocation assumption overrides
#[derive(Args, Debug, Clone, Default)]
pub struct AssumptionOverrides {
    /// Risk-free rate, e.g. 0.03
    #[arg(long, allow_negative_numbers = true)]
    pub risk_free_rate: Option<f64>,

    /// Market risk premium, e.g. 0.06
    #[arg(long, allow_negative_numbers = true)]
    pub market_risk_premium: Option<f64>,

    /// Pre-tax cost of debt, e.g. 0.04
    #[arg(long, allow_negative_numbers = true)]
    pub cost_of_debt: Option<f64>,

    /// Corporate tax rate in [0, 1]
    #[arg(long)]
    pub tax_rate: Option<f64>,

    /// Perpetual growth rate after the projection horizon
    #[arg(long, allow_negative_numbers = true)]
    pub terminal_growth_rate: Option<f64>,

    /// Explicit projection horizon in years
    #[arg(long)]
    pub projection_years: Option<u32>,

    /// FCF growth rate used when no positive growth signal exists
    #[arg(long, allow_negative_numbers = true)]
    pub fallback_growth_rate: Option<f64>,
}

impl AssumptionOverrides {
    /// Apply the overrides on top of `assumptions`
    pub fn apply(&self, assumptions: ValuationAssumptions) -> ValuationAssumptions {
        let mut a = assumptions;
        if let Some(v) = self.risk_free_rate {
            a = a.with_risk_free_rate(v);
        }
        if let Some(v) = self.market_risk_premium {
            a = a.with_market_risk_premium(v);
        }
        if let Some(v) = self.cost_of_debt {
            a = a.with_cost_of_debt(v);
        }
        if let Some(v) = self.tax_rate {
            a = a.with_tax_rate(v);
        }
        if let Some(v) = self.terminal_growth_rate {
            a = a.with_terminal_growth_rate(v);
        }
        if let Some(v) = self.projection_years {
            a = a.with_projection_years(v);
        }
        if let Some(v) = self.fallback_growth_rate {
            a = a.with_fallback_growth_rate(v);
        }
        a
    }
}
