//! Assumptions command implementation
//!
//! Prints the model assumptions after config, environment and flag
//! overrides have been applied.

use std::io::{self, Write};

use clap::Args;

use crate::config::{AssumptionOverrides, CliConfig};
use crate::output::{write_assumptions, OutputFormat};
use crate::Result;

/// Arguments for `dcf assumptions`
#[derive(Args, Debug, Clone, Default)]
pub struct AssumptionsArgs {
    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(flatten)]
    pub overrides: AssumptionOverrides,
}

/// Run the assumptions command
pub fn run(args: &AssumptionsArgs, config: &CliConfig) -> Result<()> {
    execute(args, config, &mut io::stdout().lock())
}

/// Validate and write the effective assumptions to `out`
pub fn execute<W: Write>(args: &AssumptionsArgs, config: &CliConfig, out: &mut W) -> Result<()> {
    let assumptions = args.overrides.apply(config.assumptions.clone());
    assumptions.validate()?;
    write_assumptions(out, &assumptions, args.format.unwrap_or(config.format))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;

    #[test]
    fn test_json_reflects_overrides() {
        let args = AssumptionsArgs {
            format: Some(OutputFormat::Json),
            overrides: AssumptionOverrides {
                risk_free_rate: Some(0.045),
                ..Default::default()
            },
        };
        let mut out = Vec::new();
        execute(&args, &CliConfig::default(), &mut out).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed["risk_free_rate"], 0.045);
        assert_eq!(parsed["projection_years"], 5);
    }

    #[test]
    fn test_invalid_assumptions_rejected() {
        let args = AssumptionsArgs {
            overrides: AssumptionOverrides {
                projection_years: Some(0),
                ..Default::default()
            },
            ..Default::default()
        };
        let mut out = Vec::new();
        let result = execute(&args, &CliConfig::default(), &mut out);
        assert!(matches!(result, Err(CliError::Valuation(_))));
        assert!(out.is_empty());
    }
}
