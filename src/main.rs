//! pwd-gauge - password strength report window
//!
//! Scores the password given on the command line and shows the result in a
//! static desktop window.

use std::process::ExitCode;

use clap::Parser;
use pwd_gauge::assess_password;
use pwd_gauge::gui::{self, ReportStyle};
use secrecy::SecretString;

#[derive(Parser, Debug)]
#[command(name = "pwd-gauge")]
#[command(author, version, about = "Analyze password strength", long_about = None)]
struct Cli {
    /// Password to analyze
    #[arg(value_name = "PASSWORD")]
    password: String,
}

/// Routes `log` records (and `tracing` events, via its `log` feature) to
/// stderr. Dependencies stay at warn; this crate logs at info.
fn init_logging() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .filter_module(env!("CARGO_CRATE_NAME"), log::LevelFilter::Info)
        .target(env_logger::Target::Stderr)
        .init();
}

fn main() -> ExitCode {
    init_logging();

    let cli = Cli::parse();
    let password = SecretString::new(cli.password.into());

    println!("Analyzing password strength...");
    let assessment = assess_password(&password);
    drop(password);

    log::info!(
        "Launching report window: {} ({}), crack time {}",
        assessment.strength,
        assessment.score,
        assessment.crack_time
    );

    match gui::show(assessment, ReportStyle::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
