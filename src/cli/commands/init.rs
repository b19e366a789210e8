use std::fs;

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::{args::InitArgs, exit_status::ExitStatus, report::SUCCESS_MARK};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Write the default `.keycheckrc.json` into the target directory.
///
/// An existing config is left untouched unless `--force` is given.
pub fn init(args: InitArgs) -> Result<ExitStatus> {
    let config_path = args.dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !args.force {
        eprintln!(
            "Error: {} already exists (use --force to overwrite)",
            config_path.display()
        );
        return Ok(ExitStatus::Failure);
    }

    fs::write(&config_path, default_config_json()?)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", config_path.display()).green()
    );

    Ok(ExitStatus::Success)
}
