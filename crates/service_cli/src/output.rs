//! Result rendering for the CLI.
//!
//! Three formats are supported:
//!
//! - `table`: box-drawn summary table
//! - `json`: pretty-printed JSON array
//! - `text`: four `Label: value` lines per ticker

use std::io::Write;

use clap::ValueEnum;
use pricer_valuation::dcf::{ValuationAssumptions, ValuationReport, ValuationResult};
use serde::{Deserialize, Serialize};

use crate::Result;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Summary table
    #[default]
    Table,
    /// JSON
    Json,
    /// Plain `Label: value` lines
    Text,
}

/// Write headline results in `format`.
pub fn write_results<W: Write>(
    out: &mut W,
    results: &[ValuationResult],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Table => write_table(out, results)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, results)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for (i, result) in results.iter().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                write_text(out, result)?;
            }
        }
    }
    Ok(())
}

/// Write full valuation reports in `format`.
///
/// Table and text output append the intermediate breakdown of each report
/// to the headline output; JSON output serialises the reports themselves.
pub fn write_reports<W: Write>(
    out: &mut W,
    reports: &[ValuationReport],
    format: OutputFormat,
) -> Result<()> {
    if format == OutputFormat::Json {
        serde_json::to_writer_pretty(&mut *out, reports)?;
        writeln!(out)?;
        return Ok(());
    }

    let results: Vec<ValuationResult> = reports.iter().map(|r| r.result.clone()).collect();
    write_results(out, &results, format)?;
    for report in reports {
        writeln!(out)?;
        write_breakdown(out, report)?;
    }
    Ok(())
}

/// Write the effective model assumptions in `format`.
pub fn write_assumptions<W: Write>(
    out: &mut W,
    assumptions: &ValuationAssumptions,
    format: OutputFormat,
) -> Result<()> {
    if format == OutputFormat::Json {
        serde_json::to_writer_pretty(&mut *out, assumptions)?;
        writeln!(out)?;
        return Ok(());
    }

    let rows = [
        ("Risk-free rate", percent(assumptions.risk_free_rate)),
        ("Market risk premium", percent(assumptions.market_risk_premium)),
        ("Cost of debt", percent(assumptions.cost_of_debt)),
        ("Tax rate", percent(assumptions.tax_rate)),
        ("Terminal growth rate", percent(assumptions.terminal_growth_rate)),
        ("Projection years", assumptions.projection_years.to_string()),
        ("Fallback growth rate", percent(assumptions.fallback_growth_rate)),
    ];
    for (label, value) in rows {
        writeln!(out, "{:<22}{:>10}", format!("{}:", label), value)?;
    }
    Ok(())
}

fn write_text<W: Write>(out: &mut W, result: &ValuationResult) -> Result<()> {
    writeln!(out, "Ticker: {}", result.ticker)?;
    writeln!(
        out,
        "Intrinsic Value per Share: ${:.2}",
        result.intrinsic_value_per_share
    )?;
    writeln!(out, "Current Market Price: ${:.2}", result.current_price)?;
    writeln!(out, "Undervalued: {}", result.undervalued)?;
    Ok(())
}

fn write_table<W: Write>(out: &mut W, results: &[ValuationResult]) -> Result<()> {
    writeln!(out, "┌──────────┬──────────────┬──────────────┬──────────┬─────────────┐")?;
    writeln!(out, "│ Ticker   │ Intrinsic    │ Price        │ Upside   │ Undervalued │")?;
    writeln!(out, "├──────────┼──────────────┼──────────────┼──────────┼─────────────┤")?;
    if results.is_empty() {
        writeln!(out, "│ (no data)│              │              │          │             │")?;
    }
    for r in results {
        let upside = r
            .upside()
            .map(|u| format!("{:+.1}%", u * 100.0))
            .unwrap_or_else(|| "n/a".to_string());
        writeln!(
            out,
            "│ {:<8} │ {:>12.2} │ {:>12.2} │ {:>8} │ {:<11} │",
            r.ticker.as_str(),
            r.intrinsic_value_per_share,
            r.current_price,
            upside,
            if r.undervalued { "yes" } else { "no" }
        )?;
    }
    writeln!(out, "└──────────┴──────────────┴──────────────┴──────────┴─────────────┘")?;
    Ok(())
}

fn write_breakdown<W: Write>(out: &mut W, report: &ValuationReport) -> Result<()> {
    let rate = &report.discount_rate;

    writeln!(out, "{} breakdown", report.result.ticker)?;
    writeln!(out, "  Cost of equity:          {:>10}", percent(rate.cost_of_equity))?;
    writeln!(out, "  After-tax cost of debt:  {:>10}", percent(rate.after_tax_cost_of_debt))?;
    writeln!(out, "  Weight of equity:        {:>10}", percent(rate.weight_of_equity))?;
    writeln!(out, "  Weight of debt:          {:>10}", percent(rate.weight_of_debt))?;
    writeln!(out, "  WACC:                    {:>10}", percent(rate.wacc))?;
    writeln!(
        out,
        "  FCF growth:              {:>10} ({})",
        percent(report.growth.rate),
        report.growth.source
    )?;

    writeln!(out, "  {:>4}  {:>16}  {:>16}", "Year", "FCF", "PV")?;
    for (i, (fcf, pv)) in report
        .projected_cash_flows
        .iter()
        .zip(&report.present_values.values)
        .enumerate()
    {
        writeln!(out, "  {:>4}  {:>16.2}  {:>16.2}", i + 1, fcf, pv)?;
    }

    writeln!(out, "  PV of cash flows:        {:>16.2}", report.present_values.sum)?;
    writeln!(out, "  Terminal value:          {:>16.2}", report.terminal_value)?;
    writeln!(out, "  PV of terminal value:    {:>16.2}", report.terminal_present_value)?;
    writeln!(out, "  Enterprise value:        {:>16.2}", report.enterprise_value)?;
    writeln!(out, "  Equity value:            {:>16.2}", report.equity_value)?;
    if let Some(weight) = report.terminal_weight() {
        writeln!(out, "  Terminal share of EV:    {:>16}", percent(weight))?;
    }
    Ok(())
}

fn percent(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}
