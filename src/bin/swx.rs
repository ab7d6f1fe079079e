// swx.rs - Entry point for the option-taking variant of sw

use std::ffi::OsString;
use std::io;
use std::process;

use sw::cli::frontend::{command_line, command_tokens, init_logging, report};
use sw::cli::{parse_args, validate_args, Parsed, ValidationResult, EXTENDED_USAGE};
use sw::core::{install_interrupt_handler, SwapEngine};
use sw::error::{codes, Result, SwapError};

fn main() {
    let code = match run_main() {
        Ok(()) => codes::SUCCESS,
        Err(e) => report(&e, EXTENDED_USAGE),
    };
    process::exit(code);
}

fn run_main() -> Result<()> {
    let (command_name, raw) = command_tokens();
    let command_line = command_line(&command_name, &raw);
    // argh works on &str
    let tokens = raw
        .into_iter()
        .map(OsString::into_string)
        .collect::<std::result::Result<Vec<String>, OsString>>()
        .map_err(|bad| SwapError::Usage(format!("argument {:?} is not valid UTF-8, use sw for such names", bad)))?;

    let args = match parse_args(&command_name, &tokens)? {
        Parsed::Help => {
            print!("{}", EXTENDED_USAGE);
            return Ok(());
        }
        Parsed::Version => {
            println!("{}", sw::version_line());
            return Ok(());
        }
        Parsed::Args(args) => args,
    };

    init_logging(args.verbose);
    let cancel = install_interrupt_handler()?;

    let ValidationResult { config, plan } = validate_args(&args)?;
    let engine = SwapEngine::new(cancel).with_verification(config.verify);

    if config.dry_run {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        return engine.dry_run(&plan, &config, &command_line, &mut handle);
    }

    let report = engine.execute(&plan)?;
    tracing::info!(
        swapped = report.swapped,
        verified = report.verified,
        "all pairs swapped"
    );
    Ok(())
}
