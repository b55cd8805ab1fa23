//! Report output for CLI commands
//!
//! Text output mirrors the classic console report; JSON output is a single
//! object per command. Writers are generic so tests can capture output.

use std::io::Write;

use serde::Serialize;

use crate::executor::{ExecutionResult, ResultRow};
use crate::planner::{Cost, ExplainPlan, PlanChoice, PlanId};

use super::args::OutputFormat;
use super::errors::CliResult;

/// JSON body of the `run` report
#[derive(Debug, Serialize)]
pub struct RunReport<'a> {
    pub plan: &'a PlanId,
    pub cost: Cost,
    pub total_rows: usize,
    pub rows: &'a [ResultRow],
}

/// Writes the plan choice and a preview of the result rows
pub fn write_run_report<W: Write>(
    out: &mut W,
    choice: &PlanChoice,
    result: &ExecutionResult,
    preview_rows: usize,
    format: OutputFormat,
) -> CliResult<()> {
    let preview = result.preview(preview_rows);

    match format {
        OutputFormat::Text => {
            writeln!(
                out,
                "Best Plan: {}, Estimated Cost: {}",
                choice.plan, choice.cost
            )?;
            writeln!(out, "Query Result (First {} Rows):", preview_rows)?;
            for row in preview {
                writeln!(out, "{}", row)?;
            }
        }
        OutputFormat::Json => {
            let report = RunReport {
                plan: &choice.plan,
                cost: choice.cost,
                total_rows: result.len(),
                rows: preview,
            };
            serde_json::to_writer(&mut *out, &report)?;
            writeln!(out)?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Writes an explain plan
pub fn write_explain<W: Write>(
    out: &mut W,
    explain: &ExplainPlan,
    format: OutputFormat,
) -> CliResult<()> {
    match format {
        OutputFormat::Text => write!(out, "{}", explain)?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, explain)?;
            writeln!(out)?;
        }
    }

    out.flush()?;
    Ok(())
}
