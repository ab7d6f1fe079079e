// main.rs - CLI entry point

use std::process;

use sw::cli::frontend::{command_tokens, init_logging, report};
use sw::cli::{classify, Classification, ValidationResult, USAGE};
use sw::core::{install_interrupt_handler, SwapEngine};
use sw::error::{codes, Result};

fn main() {
    let code = match run_main() {
        Ok(()) => codes::SUCCESS,
        Err(e) => report(&e, USAGE),
    };
    process::exit(code);
}

fn run_main() -> Result<()> {
    let (_, tokens) = command_tokens();

    // --help and --version win before anything touches the file system
    let ValidationResult { plan, .. } = match classify(&tokens)? {
        Classification::HelpRequested => {
            print!("{}", USAGE);
            return Ok(());
        }
        Classification::VersionRequested => {
            println!("{}", sw::version_line());
            return Ok(());
        }
        Classification::Pairs(result) => result,
    };

    init_logging(false);
    let cancel = install_interrupt_handler()?;

    let report = SwapEngine::new(cancel).execute(&plan)?;
    tracing::info!(swapped = report.swapped, "all pairs swapped");
    Ok(())
}
