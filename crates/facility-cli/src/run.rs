//! Run orchestration
//!
//! The replacement blocks are built once and reused read-only for every
//! facility document. Documents process strictly in argument order, one at
//! a time; a failure aborts only its own document, so earlier outputs stay
//! valid and later pairs still run.

use std::fs::File;
use std::io::{BufReader, IsTerminal};
use std::path::{Path, PathBuf};

use chrono::Utc;
use colored::Colorize;
use facility_content::{ClassificationConfig, build_alias_block, build_positions_block};
use facility_patch::{COMMAND_ALIASES, POSITIONS, patch_document};

use crate::cli::Cli;
use crate::error::{CliError, Result};
use crate::interactive::{self, CollisionChoice, ConfigBootstrap};
use crate::status::{FailureCategory, RunReport};

/// Config file the tool auto-loads from the working directory.
const DEFAULT_CONFIG: &str = "default.v2xcfg";

pub fn run(cli: &Cli, report: &mut RunReport) {
    let Some(pairs) = cli.facility_pairs() else {
        report.record(FailureCategory::Usage);
        print_error("Facility paths must come in input/output pairs");
        return;
    };

    let Some(config) = load_config(cli, report) else {
        return;
    };

    let timestamp = match facility_content::last_imported(Utc::now()) {
        Ok(ts) => ts,
        Err(err) => {
            report.record(FailureCategory::Timestamp);
            print_warning(&format!("{err}; continuing with an empty import timestamp"));
            String::new()
        }
    };

    let alias_block = match build_alias_block_from(&cli.alias_file, &timestamp) {
        Ok(block) => block,
        Err(err) => {
            report.record(FailureCategory::of(&err));
            print_error(&format!(
                "Unable to convert alias file {}: {err}",
                cli.alias_file.display()
            ));
            return;
        }
    };

    let positions_block = match &cli.pof {
        Some(path) => match build_positions_block_from(path, &config) {
            Ok(block) => Some(block),
            Err(err) => {
                report.record(FailureCategory::of(&err));
                print_error(&format!(
                    "Unable to convert position file {}: {err}",
                    path.display()
                ));
                return;
            }
        },
        None => None,
    };

    // All prompting happens here, before the first document is touched.
    let Some(pairs) = resolve_collisions(pairs, cli.force, report) else {
        return;
    };

    println!("This will take a moment, please wait...");
    for (input, output) in &pairs {
        match patch_one(input, output, &alias_block, positions_block.as_deref()) {
            Ok(()) => {
                println!(
                    "{} {} -> {}",
                    "Updated".green().bold(),
                    input.display(),
                    output.display()
                );
            }
            Err(err) => {
                report.record(FailureCategory::of(&err));
                print_error(&format!(
                    "Error updating facility file {}: {err}",
                    input.display()
                ));
            }
        }
    }
}

/// Decompress, patch, recompress one facility document.
///
/// The patched text exists only in memory until both patch passes succeed;
/// the output file is written atomically afterwards.
fn patch_one(
    input: &Path,
    output: &Path,
    alias_block: &str,
    positions_block: Option<&str>,
) -> Result<()> {
    let document = facility_fs::read_gzipped(input)?;

    let mut patched = patch_document(&document, &COMMAND_ALIASES, alias_block)?;
    if let Some(block) = positions_block {
        patched = patch_document(&patched, &POSITIONS, block)?;
    }

    if output.exists() {
        facility_fs::remove_file(output)?;
    }
    facility_fs::write_gzipped(output, &patched)?;
    Ok(())
}

fn build_alias_block_from(path: &Path, timestamp: &str) -> Result<String> {
    let file = File::open(path).map_err(CliError::Io)?;
    Ok(build_alias_block(BufReader::new(file), timestamp)?)
}

fn build_positions_block_from(path: &Path, config: &ClassificationConfig) -> Result<String> {
    let file = File::open(path).map_err(CliError::Io)?;
    Ok(build_positions_block(BufReader::new(file), config)?)
}

/// Load the classification config, prompting only when positions are being
/// imported and nothing was found on disk. `None` means the run is over
/// (fatal config error or prompt failure), already recorded.
fn load_config(cli: &Cli, report: &mut RunReport) -> Option<ClassificationConfig> {
    if let Some(path) = &cli.config {
        return match ClassificationConfig::load(path) {
            Ok(config) => Some(config),
            Err(err) => {
                report.record(FailureCategory::ConfigFormat);
                print_error(&format!("Could not load config {}: {err}", path.display()));
                None
            }
        };
    }

    let default_path = Path::new(DEFAULT_CONFIG);
    if default_path.exists() {
        return match ClassificationConfig::load(default_path) {
            Ok(config) => Some(config),
            Err(err) => {
                report.record(FailureCategory::ConfigFormat);
                print_error(&format!("Could not load config {DEFAULT_CONFIG}: {err}"));
                None
            }
        };
    }

    // Classification only matters for position imports, and prompting
    // needs a terminal; everything else runs with the empty config.
    if cli.pof.is_none() || cli.force || !std::io::stdin().is_terminal() {
        return Some(ClassificationConfig::default());
    }

    match interactive::bootstrap_config(DEFAULT_CONFIG) {
        Ok(ConfigBootstrap::Existing(path)) => match ClassificationConfig::load(&path) {
            Ok(config) => Some(config),
            Err(err) => {
                report.record(FailureCategory::ConfigFormat);
                print_error(&format!("Could not load config {}: {err}", path.display()));
                None
            }
        },
        Ok(ConfigBootstrap::New(config, save_path)) => {
            if let Err(err) =
                facility_fs::write_atomic(&save_path, config.to_config_string().as_bytes())
            {
                let err = CliError::from(err);
                report.record(FailureCategory::of(&err));
                print_warning(&format!(
                    "Could not save config {}: {err}; continuing with the in-memory config",
                    save_path.display()
                ));
            } else {
                println!("Saved new config to {}", save_path.display().to_string().cyan());
            }
            Some(config)
        }
        Ok(ConfigBootstrap::Skip) => Some(ClassificationConfig::default()),
        Err(err) => {
            report.record(FailureCategory::of(&err));
            print_error(&format!("{err}"));
            None
        }
    }
}

/// Resolve every output-path collision up front. `None` means the user
/// aborted; the run exits clean in that case.
fn resolve_collisions(
    pairs: Vec<(PathBuf, PathBuf)>,
    force: bool,
    report: &mut RunReport,
) -> Option<Vec<(PathBuf, PathBuf)>> {
    let mut resolved = Vec::with_capacity(pairs.len());
    for (input, mut output) in pairs {
        if !force {
            // Same path in and out means the operator asked to overwrite
            // in place; only a differing pre-existing output needs a prompt.
            while output != input && output.exists() {
                match interactive::resolve_collision(&output) {
                    Ok(CollisionChoice::Overwrite) => break,
                    Ok(CollisionChoice::NewPath(path)) => output = path,
                    Ok(CollisionChoice::Abort) => {
                        println!("Aborted.");
                        return None;
                    }
                    Err(err) => {
                        report.record(FailureCategory::of(&err));
                        print_error(&format!("{err}"));
                        return None;
                    }
                }
            }
        }
        resolved.push((input, output));
    }
    Some(resolved)
}

fn print_error(message: &str) {
    eprintln!("{}: {message}", "error".red().bold());
}

fn print_warning(message: &str) {
    eprintln!("{}: {message}", "warning".yellow().bold());
}
