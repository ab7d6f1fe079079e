// validation.rs - Argument classification and input validation

use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::Path;

use argh::FromArgs;

use crate::cli::args::Args;
use crate::cli::config::SwapConfig;
use crate::core::{entry_exists, SwapPlan};
use crate::error::{Result, SwapError};

/// What the command line asks for
#[derive(Debug)]
pub enum Classification {
    HelpRequested,
    VersionRequested,
    Pairs(ValidationResult),
}

/// A batch that passed every pre-flight check on the file system
#[derive(Debug)]
pub struct ValidationResult {
    pub config: SwapConfig,
    pub plan: SwapPlan,
}

/// Outcome of parsing the `swx` option surface, before any file system check
#[derive(Debug)]
pub enum Parsed {
    Help,
    Version,
    Args(Args),
}

/// First of `--help` / `--version` to appear anywhere in `tokens`
pub fn detect_informational<S: AsRef<OsStr>>(tokens: &[S]) -> Option<Classification> {
    tokens.iter().find_map(|token| {
        let token = token.as_ref();
        if token == "--help" {
            Some(Classification::HelpRequested)
        } else if token == "--version" {
            Some(Classification::VersionRequested)
        } else {
            None
        }
    })
}

/// Classify the raw `sw` command line (program name excluded).
///
/// Every token other than an exact `--help` or `--version` is a filename,
/// whatever it looks like.
pub fn classify<S: AsRef<OsStr>>(tokens: &[S]) -> Result<Classification> {
    if let Some(informational) = detect_informational(tokens) {
        return Ok(informational);
    }
    let filenames: Vec<&Path> = tokens.iter().map(|t| Path::new(t.as_ref())).collect();
    validate_filenames(&filenames, SwapConfig::default()).map(Classification::Pairs)
}

/// Count, existence and duplicate checks, in that order. Nothing is modified.
fn check_filenames<F: AsRef<Path>>(filenames: &[F]) -> Result<()> {
    if filenames.is_empty() {
        return Err(SwapError::NoArguments);
    }
    if filenames.len() % 2 != 0 {
        return Err(SwapError::UnpairedFilename {
            count: filenames.len(),
        });
    }

    let paths: Vec<&Path> = filenames.iter().map(|f| f.as_ref()).collect();
    if let Some(missing) = paths.iter().find(|p| !entry_exists(p)) {
        return Err(SwapError::PathNotFound {
            path: missing.to_path_buf(),
        });
    }

    let mut seen = HashSet::with_capacity(paths.len());
    if let Some(duplicate) = paths.iter().find(|p| !seen.insert(**p)) {
        return Err(SwapError::DuplicatePath {
            path: duplicate.to_path_buf(),
        });
    }
    Ok(())
}

/// Validate `filenames` against the file system and build the plan
pub fn validate_filenames<F: AsRef<Path>>(filenames: &[F], config: SwapConfig) -> Result<ValidationResult> {
    check_filenames(filenames)?;
    Ok(build(filenames, config))
}

fn build<F: AsRef<Path>>(filenames: &[F], config: SwapConfig) -> ValidationResult {
    let plan = SwapPlan::from_filenames(filenames, &config.suffix);
    tracing::debug!(pairs = plan.len(), suffix = %config.suffix, "arguments validated");
    ValidationResult { config, plan }
}

/// Parse `swx` tokens (program name excluded) without touching the file system
pub fn parse_args<S: AsRef<str>>(command_name: &str, tokens: &[S]) -> Result<Parsed> {
    let tokens: Vec<&str> = tokens.iter().map(AsRef::as_ref).collect();
    match detect_informational(&tokens) {
        Some(Classification::VersionRequested) => return Ok(Parsed::Version),
        Some(_) => return Ok(Parsed::Help),
        None => {}
    }

    match Args::from_args(&[command_name], &tokens) {
        Ok(args) => Ok(Parsed::Args(args)),
        // argh's own help, e.g. for -h
        Err(early) if early.status.is_ok() => Ok(Parsed::Help),
        Err(early) => Err(SwapError::Usage(early.output.trim_end().to_string())),
    }
}

/// Validate parsed `swx` arguments: filenames first, then option values
pub fn validate_args(args: &Args) -> Result<ValidationResult> {
    check_filenames(&args.filenames)?;
    let config = SwapConfig::from_args(args)?;
    Ok(build(&args.filenames, config))
}
