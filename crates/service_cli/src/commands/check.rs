//! Check command implementation
//!
//! Validates the configuration and inspects the snapshot data directory.
//! Incomplete snapshots are listed but do not fail the check.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use adapter_feeds::{JsonFileProvider, SnapshotProvider};
use clap::Args;

use crate::config::{CliConfig, ConfigError};
use crate::{CliError, Result};

/// Arguments for `dcf check`
#[derive(Args, Debug, Clone, Default)]
pub struct CheckArgs {
    /// Directory holding `<TICKER>.json` snapshot files
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,
}

/// Run the check command
pub fn run(args: &CheckArgs, config: &CliConfig, config_path: &Path) -> Result<()> {
    execute(args, config, config_path, &mut io::stdout().lock())
}

/// Write the check report to `out`
pub fn execute<W: Write>(
    args: &CheckArgs,
    config: &CliConfig,
    config_path: &Path,
    out: &mut W,
) -> Result<()> {
    let mut problems = Vec::new();

    match &config.source {
        Some(path) => writeln!(out, "Config file:    {}", path.display())?,
        None => writeln!(
            out,
            "Config file:    {} (not found, using defaults)",
            config_path.display()
        )?,
    }

    match config.validate() {
        Ok(()) => writeln!(out, "Configuration:  OK")?,
        Err(ConfigError::Validation(errors)) => {
            writeln!(out, "Configuration:  {} problem(s)", errors.len())?;
            for e in &errors {
                writeln!(out, "  - {}", e)?;
            }
            problems.extend(errors);
        }
        Err(other) => {
            writeln!(out, "Configuration:  {}", other)?;
            problems.push(other.to_string());
        }
    }

    let data_dir = args.data_dir.as_ref().unwrap_or(&config.data_dir);
    let provider = JsonFileProvider::new(data_dir);
    match provider.available_tickers() {
        Ok(tickers) => {
            writeln!(
                out,
                "Data directory: {} ({} snapshot(s))",
                data_dir.display(),
                tickers.len()
            )?;
            for ticker in &tickers {
                let status = match provider.fetch(ticker) {
                    Ok(snapshot) => match snapshot.validate() {
                        Ok(_) => "complete".to_string(),
                        Err(e) => e.to_string(),
                    },
                    Err(e) => e.to_string(),
                };
                writeln!(out, "  {:<10} {}", ticker.as_str(), status)?;
            }
        }
        Err(e) => {
            writeln!(out, "Data directory: {} (unreadable)", data_dir.display())?;
            problems.push(e.to_string());
        }
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(CliError::Config(ConfigError::Validation(problems)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn check(args: &CheckArgs, config: &CliConfig) -> (Result<()>, String) {
        let mut out = Vec::new();
        let result = execute(args, config, Path::new("dcf.toml"), &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_healthy_setup() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("ACME.json"), r#"{ "beta": 1.0 }"#).unwrap();
        let args = CheckArgs {
            data_dir: Some(dir.path().to_path_buf()),
        };

        let (result, out) = check(&args, &CliConfig::default());
        assert!(result.is_ok());
        assert!(out.contains("not found, using defaults"));
        assert!(out.contains("Configuration:  OK"));
        assert!(out.contains("(1 snapshot(s))"));
        assert!(out.contains("Missing data for ACME: freeCashflow"));
    }

    #[test]
    fn test_missing_data_dir_fails() {
        let args = CheckArgs {
            data_dir: Some(PathBuf::from("/no/such/snapshot/dir")),
        };
        let (result, out) = check(&args, &CliConfig::default());
        assert!(matches!(
            result,
            Err(CliError::Config(ConfigError::Validation(_)))
        ));
        assert!(out.contains("(unreadable)"));
    }

    #[test]
    fn test_invalid_config_fails() {
        let dir = TempDir::new().unwrap();
        let mut config = CliConfig::default();
        config.assumptions.projection_years = 0;
        let args = CheckArgs {
            data_dir: Some(dir.path().to_path_buf()),
        };

        let (result, out) = check(&args, &config);
        assert!(result.is_err());
        assert!(out.contains("Configuration:  1 problem(s)"));
        assert!(out.contains("projection_years"));
    }
}
