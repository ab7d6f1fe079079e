// lib.rs - sw library root

//! # sw - swap filenames
//!
//! Exchanges the names of pairs of files. The filename list is split at its
//! midpoint: the first half are sources, the second half destinations, and
//! `sources[i]` trades names with `destinations[i]`. File contents are never
//! read or written (except by the optional SHA256 verification).
//!
//! Each swap goes through a temporary name (`<source>_swtmp` by default):
//!
//! ```text
//! a -> a_swtmp
//! b -> a
//! a_swtmp -> b
//! ```
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use sw::prelude::*;
//!
//! let plan = SwapPlan::from_filenames(&["a.txt", "b.txt"], DEFAULT_SUFFIX);
//! let engine = SwapEngine::new(CancellationToken::new());
//! let report = engine.execute(&plan)?;
//! assert_eq!(report.swapped, 1);
//! # Ok::<(), sw::SwapError>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;
pub mod hashers;
pub mod output;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{
        classify, validate_args, validate_filenames, Args, Classification, SwapConfig, DEFAULT_SUFFIX,
    };
    pub use crate::core::{install_interrupt_handler, CancellationToken, Pair, SwapEngine, SwapPlan};
    pub use crate::error::{Result, SwapError};
    pub use crate::hashers::{ContentSnapshot, Sha256Hasher};
    pub use crate::output::write_plan;
}

// Re-export main types at the root level for convenience
pub use crate::cli::{Args, SwapConfig};
pub use crate::core::{SwapEngine, SwapPlan, SwapReport};
pub use crate::error::SwapError;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version line printed by `sw --version` and `swx --version`: `sw version <major>.<minor>`
pub fn version_line() -> String {
    format!(
        "sw version {}.{}",
        env!("CARGO_PKG_VERSION_MAJOR"),
        env!("CARGO_PKG_VERSION_MINOR")
    )
}
