//! Value command implementation
//!
//! Fetches a snapshot per ticker from the data directory and values each
//! with the DCF engine. A ticker that fails is reported on stderr and
//! skipped; the command fails only if no ticker could be valued.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use adapter_feeds::{JsonFileProvider, SnapshotProvider};
use clap::Args;
use pricer_core::types::{FinancialSnapshot, Ticker};
use pricer_valuation::dcf::{
    summarise, summarise_reports, value_batch, value_batch_detailed, BatchSummary,
    ValuationEngine,
};
use tracing::{debug, info};

use crate::config::{AssumptionOverrides, CliConfig};
use crate::output::{write_reports, write_results, OutputFormat};
use crate::{CliError, Result};

const PROMPT: &str = "Enter the stock ticker symbol: ";

/// Arguments for `dcf value`
#[derive(Args, Debug, Clone, Default)]
pub struct ValueArgs {
    /// Ticker symbols; prompts on stdin when omitted
    pub tickers: Vec<String>,

    /// Directory holding `<TICKER>.json` snapshot files
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Print the intermediate valuation breakdown
    #[arg(long)]
    pub detailed: bool,

    #[command(flatten)]
    pub overrides: AssumptionOverrides,
}

/// Run the value command against stdin, stdout and stderr
pub fn run(args: &ValueArgs, config: &CliConfig) -> Result<()> {
    run_with_io(
        args,
        config,
        &mut io::stdin().lock(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )
}

/// Prompt on `err` when no tickers were given, then value them
///
/// Only valuation output reaches `out`, so piped JSON stays parseable.
pub fn run_with_io<R: BufRead, W: Write, E: Write>(
    args: &ValueArgs,
    config: &CliConfig,
    input: &mut R,
    out: &mut W,
    err: &mut E,
) -> Result<()> {
    let tickers = if args.tickers.is_empty() {
        vec![prompt_ticker(input, err)?]
    } else {
        args.tickers.clone()
    };

    execute(&tickers, args, config, out, err)
}

/// Ask for a single ticker symbol
pub fn prompt_ticker<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(CliError::InvalidArgument(
            "no ticker symbol given".to_string(),
        ));
    }
    Ok(line.trim().to_string())
}

/// Value `tickers`, writing results to `out` and per-ticker failures to `err`
pub fn execute<W: Write, E: Write>(
    tickers: &[String],
    args: &ValueArgs,
    config: &CliConfig,
    out: &mut W,
    err: &mut E,
) -> Result<()> {
    let engine = ValuationEngine::new(args.overrides.apply(config.assumptions.clone()))?;
    let data_dir = args.data_dir.as_ref().unwrap_or(&config.data_dir);
    let format = args.format.unwrap_or(config.format);
    let provider = JsonFileProvider::new(data_dir);

    info!(
        tickers = tickers.len(),
        data_dir = %data_dir.display(),
        "Starting valuation"
    );

    let mut failed = 0;
    let mut snapshots = Vec::with_capacity(tickers.len());
    for raw in tickers {
        match fetch(&provider, raw) {
            Ok(snapshot) => snapshots.push(snapshot),
            Err(e) => {
                failed += 1;
                debug!(ticker = %raw, error = ?e, "skipping ticker");
                writeln!(err, "{}", e)?;
            }
        }
    }

    let succeeded = if args.detailed {
        let outcomes = value_batch_detailed(&engine, &snapshots);
        log_summary(&summarise_reports(&outcomes));

        let mut reports = Vec::with_capacity(outcomes.len());
        for outcome in outcomes {
            match outcome {
                Ok(report) => reports.push(report),
                Err(e) => {
                    failed += 1;
                    writeln!(err, "{}", e)?;
                }
            }
        }
        if !reports.is_empty() {
            write_reports(out, &reports, format)?;
        }
        reports.len()
    } else {
        let outcomes = value_batch(&engine, &snapshots);
        let summary = summarise(&outcomes);
        log_summary(&summary);

        let mut results = Vec::with_capacity(summary.succeeded);
        for outcome in outcomes {
            match outcome {
                Ok(result) => results.push(result),
                Err(e) => writeln!(err, "{}", e)?,
            }
        }
        failed += summary.failed;
        if !results.is_empty() {
            write_results(out, &results, format)?;
        }
        results.len()
    };

    if succeeded == 0 && failed > 0 {
        return Err(CliError::AllFailed(failed));
    }
    Ok(())
}

fn log_summary(summary: &BatchSummary) {
    info!(
        succeeded = summary.succeeded,
        failed = summary.failed,
        undervalued = summary.undervalued,
        "Valuation batch complete"
    );
}

fn fetch(provider: &JsonFileProvider, raw: &str) -> Result<FinancialSnapshot> {
    let ticker = Ticker::parse(raw)?;
    Ok(provider.fetch(&ticker)?)
}
