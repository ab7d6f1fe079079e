// error.rs - Error taxonomy and exit codes

//! Every way an invocation of `sw` can fail.
//!
//! All errors are terminal for the invocation. Each variant maps to a stable
//! process exit code (see [`SwapError::exit_code`]) that scripts may rely on.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for swap operations.
pub type Result<T> = std::result::Result<T, SwapError>;

/// Stable exit codes, one per failure class.
pub mod codes {
    pub const SUCCESS: i32 = 0;
    pub const USER_QUIT: i32 = 1;
    pub const NO_ARGUMENTS: i32 = 2;
    pub const UNPAIRED_FILENAME: i32 = 3;
    pub const FILE_NOT_FOUND: i32 = 4;
    pub const BUMP: i32 = 5;
    pub const RENAME_FAILED: i32 = 6;
    pub const DUPLICATE_PATH: i32 = 7;
    pub const USAGE: i32 = 8;
    pub const VERIFY_FAILED: i32 = 9;
    pub const IO: i32 = 10;
}

#[derive(Debug, Error)]
pub enum SwapError {
    /// Interrupted before pair `completed` started.
    #[error("interrupted by user after {completed} of {total} pair(s)")]
    UserCancelled { completed: usize, total: usize },

    #[error("no filenames given")]
    NoArguments,

    #[error("every filename requires a pair ({count} filename(s) given)")]
    UnpairedFilename { count: usize },

    #[error("filename \"{}\" does not exist", path.display())]
    PathNotFound { path: PathBuf },

    #[error("filename \"{}\" is given more than once", path.display())]
    DuplicatePath { path: PathBuf },

    /// A temporary name is already taken on disk.
    #[error(
        "bumped into file \"{}\" that shouldn't exist; {}",
        path.display(),
        progress_note(*completed)
    )]
    TempNameCollision { path: PathBuf, completed: usize },

    #[error(
        "cannot rename \"{}\" to \"{}\": {source}; {}",
        from.display(),
        to.display(),
        rename_note(*completed, *restored)
    )]
    RenameFailed {
        from: PathBuf,
        to: PathBuf,
        completed: usize,
        restored: bool,
        #[source]
        source: io::Error,
    },

    #[error("{0}")]
    Usage(String),

    #[error(
        "content of \"{}\" changed during the swap (expected sha256 {expected}, found {actual})",
        path.display()
    )]
    VerifyFailed {
        path: PathBuf,
        expected: String,
        actual: String,
    },

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    #[error("cannot install interrupt handler: {0}")]
    SignalHandler(#[from] ctrlc::Error),
}

impl SwapError {
    /// Process exit status for this error.
    pub const fn exit_code(&self) -> i32 {
        match self {
            SwapError::UserCancelled { .. } => codes::USER_QUIT,
            SwapError::NoArguments => codes::NO_ARGUMENTS,
            SwapError::UnpairedFilename { .. } => codes::UNPAIRED_FILENAME,
            SwapError::PathNotFound { .. } => codes::FILE_NOT_FOUND,
            SwapError::DuplicatePath { .. } => codes::DUPLICATE_PATH,
            SwapError::TempNameCollision { .. } => codes::BUMP,
            SwapError::RenameFailed { .. } => codes::RENAME_FAILED,
            SwapError::Usage(_) => codes::USAGE,
            SwapError::VerifyFailed { .. } => codes::VERIFY_FAILED,
            SwapError::Io { .. } | SwapError::SignalHandler(_) => codes::IO,
        }
    }

    pub(crate) fn io(context: impl Into<String>, source: io::Error) -> Self {
        SwapError::Io {
            context: context.into(),
            source,
        }
    }
}

fn progress_note(completed: usize) -> String {
    if completed == 0 {
        "no changes were made".to_string()
    } else {
        format!("the first {} pair(s) were already swapped", completed)
    }
}

fn rename_note(completed: usize, restored: bool) -> String {
    let pair_state = if restored {
        "the pair in progress was put back"
    } else {
        "the pair in progress could NOT be put back, check its temporary file"
    };
    format!("{}, {}", progress_note(completed), pair_state)
}
