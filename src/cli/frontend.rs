// frontend.rs - Process-level helpers shared by the sw and swx binaries

use std::ffi::OsString;
use std::io::{self, IsTerminal};

use crate::error::SwapError;

/// Program name and the remaining raw arguments
pub fn command_tokens() -> (String, Vec<OsString>) {
    let mut raw = std::env::args_os();
    let command_name = raw
        .next()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "sw".to_string());
    (command_name, raw.collect())
}

/// The invocation as one line, for plan headers
pub fn command_line(command_name: &str, tokens: &[OsString]) -> String {
    std::iter::once(command_name.to_string())
        .chain(tokens.iter().map(|t| t.to_string_lossy().into_owned()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Console logging on stderr: WARN by default so a successful run stays silent
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

/// Print `e` the way the user should see it and return its exit code
pub fn report(e: &SwapError, usage: &str) -> i32 {
    match e {
        SwapError::NoArguments => print!("{}", usage),
        SwapError::UserCancelled { completed, .. } => {
            println!(" - Exiting.");
            if *completed > 0 {
                eprintln!("{}", e);
            }
        }
        _ => eprintln!("Error: {}.", e),
    }
    e.exit_code()
}
