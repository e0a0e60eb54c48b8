//! Interactive prompts for CLI commands
//!
//! Uses dialoguer for terminal-based prompts. All prompting happens before
//! the patch pipeline runs so the core never blocks on user input.

use std::path::{Path, PathBuf};

use colored::Colorize;
use dialoguer::{Confirm, Input, Select};
use facility_content::ClassificationConfig;

use crate::error::Result;

/// What the user chose to do about an existing output path.
#[derive(Debug, PartialEq, Eq)]
pub enum CollisionChoice {
    Overwrite,
    NewPath(PathBuf),
    Abort,
}

/// Ask what to do about an output file that already exists.
pub fn resolve_collision(path: &Path) -> Result<CollisionChoice> {
    println!(
        "Output file {} already exists.",
        path.display().to_string().cyan()
    );
    let choice = Select::new()
        .with_prompt("Would you like to")
        .items(&["Overwrite it", "Enter a new output path", "Abort"])
        .default(0)
        .interact()?;

    match choice {
        0 => Ok(CollisionChoice::Overwrite),
        1 => {
            let new_path: String = Input::new()
                .with_prompt("New output path")
                .interact_text()?;
            Ok(CollisionChoice::NewPath(PathBuf::from(new_path)))
        }
        _ => Ok(CollisionChoice::Abort),
    }
}

/// Where the classification config should come from when none was found.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigBootstrap {
    /// The user pointed at an existing `.v2xcfg` file.
    Existing(PathBuf),
    /// The user assembled a new config; save it at the given path.
    New(ClassificationConfig, PathBuf),
    /// Continue without classification; every position is `Other`.
    Skip,
}

/// Run the config bootstrap prompts.
///
/// Mirrors the flow operators already know: offer to load an existing
/// config first, then to assemble and save a new one, then fall back to no
/// classification at all.
pub fn bootstrap_config(default_name: &str) -> Result<ConfigBootstrap> {
    let have_config = Confirm::new()
        .with_prompt(format!("{default_name} not found. Do you have a config file?"))
        .default(false)
        .interact()?;

    if have_config {
        let path: String = Input::new()
            .with_prompt("Path to config file")
            .interact_text()?;
        return Ok(ConfigBootstrap::Existing(PathBuf::from(path)));
    }

    let create = Confirm::new()
        .with_prompt(
            "Set up a new config? Without one, all positions will be marked \"Other\"",
        )
        .default(false)
        .interact()?;

    if !create {
        println!("Continuing without \"Adjacent\" or \"In Facility\" position config...");
        return Ok(ConfigBootstrap::Skip);
    }

    let in_facility: String = Input::new()
        .with_prompt("\"In Facility\" sector IDs, separated by spaces")
        .allow_empty(true)
        .interact_text()?;
    let adjacent: String = Input::new()
        .with_prompt("\"Adjacent\" sector IDs, separated by spaces")
        .allow_empty(true)
        .interact_text()?;

    let save_as: String = Input::new()
        .with_prompt("Save the new config as (without extension)")
        .default("default".to_string())
        .interact_text()?;
    let save_path = PathBuf::from(format!("{save_as}.v2xcfg"));

    let config = ClassificationConfig::new(
        in_facility.split_whitespace().map(str::to_owned),
        adjacent.split_whitespace().map(str::to_owned),
    );
    Ok(ConfigBootstrap::New(config, save_path))
}
