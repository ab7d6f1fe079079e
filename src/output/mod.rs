// mod.rs - Dry-run plan formatters

use std::io::Write;

use serde::Serialize;

use crate::cli::{PlanFormat, SwapConfig};
use crate::core::SwapPlan;
use crate::error::{Result, SwapError};

#[derive(Debug, Serialize)]
struct StepRecord {
    from: String,
    to: String,
}

#[derive(Debug, Serialize)]
struct PairRecord {
    source: String,
    destination: String,
    temp: String,
    steps: Vec<StepRecord>,
}

#[derive(Debug, Serialize)]
struct PlanRecord<'a> {
    command: &'a str,
    generated: String,
    version: &'static str,
    config: &'a SwapConfig,
    pairs: Vec<PairRecord>,
}

fn write_error(e: std::io::Error) -> SwapError {
    SwapError::io("cannot write plan", e)
}

fn pair_records(plan: &SwapPlan) -> Vec<PairRecord> {
    plan.pairs()
        .iter()
        .map(|pair| PairRecord {
            source: pair.source.display().to_string(),
            destination: pair.destination.display().to_string(),
            temp: pair.temp.display().to_string(),
            steps: pair
                .steps()
                .iter()
                .map(|step| StepRecord {
                    from: step.from.display().to_string(),
                    to: step.to.display().to_string(),
                })
                .collect(),
        })
        .collect()
}

fn timestamp() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Write the renames in execution order, one per line
pub fn write_text<W: Write>(writer: &mut W, plan: &SwapPlan, command_line: &str) -> Result<()> {
    writeln!(writer, "# Command: {}", command_line).map_err(write_error)?;
    writeln!(writer, "# Generated: {}", timestamp()).map_err(write_error)?;
    writeln!(writer, "# sw v{}", crate::VERSION).map_err(write_error)?;
    writeln!(writer, "# {} pair(s), nothing was renamed", plan.len()).map_err(write_error)?;

    for (index, pair) in plan.pairs().iter().enumerate() {
        writeln!(
            writer,
            "pair {}: \"{}\" <-> \"{}\"",
            index + 1,
            pair.source.display(),
            pair.destination.display()
        )
        .map_err(write_error)?;
        for step in pair.steps() {
            writeln!(writer, "  mv \"{}\" \"{}\"", step.from.display(), step.to.display())
                .map_err(write_error)?;
        }
    }

    writer.flush().map_err(write_error)?;
    Ok(())
}

/// Write the plan as a pretty-printed JSON document
pub fn write_json<W: Write>(
    writer: &mut W,
    plan: &SwapPlan,
    config: &SwapConfig,
    command_line: &str,
) -> Result<()> {
    let record = PlanRecord {
        command: command_line,
        generated: timestamp(),
        version: crate::VERSION,
        config,
        pairs: pair_records(plan),
    };
    serde_json::to_writer_pretty(&mut *writer, &record)
        .map_err(|e| SwapError::io("cannot serialize plan", e.into()))?;
    writeln!(writer).map_err(write_error)?;
    writer.flush().map_err(write_error)?;
    Ok(())
}

/// Write the plan in the format selected by `config`
pub fn write_plan<W: Write>(
    writer: &mut W,
    plan: &SwapPlan,
    config: &SwapConfig,
    command_line: &str,
) -> Result<()> {
    match config.format {
        PlanFormat::Text => write_text(writer, plan, command_line),
        PlanFormat::Json => write_json(writer, plan, config, command_line),
    }
}
