// mod.rs - CLI module

pub mod args;
pub mod config;
pub mod frontend;
pub mod validation;

// Re-export main types for convenience
pub use args::{Args, DEFAULT_SUFFIX, EXTENDED_USAGE, USAGE};
pub use config::{PlanFormat, SwapConfig};
pub use validation::{
    classify, detect_informational, parse_args, validate_args, validate_filenames, Classification, Parsed,
    ValidationResult,
};
