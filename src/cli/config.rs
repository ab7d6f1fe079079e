// config.rs - Validated run settings

use std::str::FromStr;

use serde::Serialize;

use crate::cli::args::{Args, DEFAULT_SUFFIX};
use crate::error::{Result, SwapError};

/// Output format of a dry-run plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanFormat {
    Text,
    Json,
}

impl FromStr for PlanFormat {
    type Err = SwapError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(PlanFormat::Text),
            "json" => Ok(PlanFormat::Json),
            other => Err(SwapError::Usage(format!(
                "invalid plan format '{}'. Available: text, json",
                other
            ))),
        }
    }
}

/// Settings for one invocation, derived from the command line only
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwapConfig {
    pub suffix: String,
    pub dry_run: bool,
    pub format: PlanFormat,
    pub verify: bool,
    pub verbose: bool,
}

impl SwapConfig {
    /// Build and validate the settings carried by `args`
    pub fn from_args(args: &Args) -> Result<Self> {
        validate_suffix(&args.suffix)?;
        Ok(Self {
            suffix: args.suffix.clone(),
            dry_run: args.dry_run,
            format: args.format.parse()?,
            verify: args.verify,
            verbose: args.verbose,
        })
    }
}

impl Default for SwapConfig {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_SUFFIX.to_string(),
            dry_run: false,
            format: PlanFormat::Text,
            verify: false,
            verbose: false,
        }
    }
}

/// A suffix must keep the temporary name next to its source
fn validate_suffix(suffix: &str) -> Result<()> {
    if suffix.is_empty() {
        return Err(SwapError::Usage("--suffix must not be empty".to_string()));
    }
    if suffix.contains(std::path::is_separator) || suffix.contains('\0') {
        return Err(SwapError::Usage(format!(
            "--suffix '{}' must not contain a path separator",
            suffix
        )));
    }
    Ok(())
}
