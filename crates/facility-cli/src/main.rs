//! Facility Sync CLI
//!
//! Imports VRC alias (and optionally position) definitions into
//! gzip-compressed vSTARS/vERAM facility files.

mod cli;
mod error;
mod interactive;
mod run;
mod status;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::Cli;
use status::{FailureCategory, RunReport};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap renders its own help/usage text; map real usage errors
            // onto the usage exit flag, keep --help/--version clean.
            let _ = err.print();
            let code = if err.use_stderr() {
                FailureCategory::Usage as i32
            } else {
                0
            };
            std::process::exit(code);
        }
    };

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let mut report = RunReport::new();
    run::run(&cli, &mut report);

    if !report.is_clean() {
        tracing::debug!(
            failures = report.failures(),
            exit_code = report.exit_code(),
            "Run finished with failures"
        );
        std::process::exit(report.exit_code());
    }
}
