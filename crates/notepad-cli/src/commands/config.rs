use std::path::Path;

use notepad_core::config::AppConfig;

use crate::cli::ConfigCommands;
use crate::commands::common::load_config;
use crate::error::CliError;

pub fn run_config(command: ConfigCommands, config_path: &Path) -> Result<(), CliError> {
    match command {
        ConfigCommands::Show => run_config_show(config_path),
        ConfigCommands::Init { force } => run_config_init(config_path, force),
    }
}

pub fn run_config_show(config_path: &Path) -> Result<(), CliError> {
    let config = load_config(config_path)?;
    let source = if config_path.exists() {
        config_path.display().to_string()
    } else {
        format!("{} (missing, using defaults)", config_path.display())
    };
    println!("# {source}");
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

pub fn run_config_init(config_path: &Path, force: bool) -> Result<(), CliError> {
    write_default_config(config_path, force)?;
    println!("Wrote default config to {}", config_path.display());
    Ok(())
}

pub fn write_default_config(config_path: &Path, force: bool) -> Result<(), CliError> {
    if config_path.exists() && !force {
        return Err(CliError::Config(format!(
            "{} already exists; pass --force to overwrite",
            config_path.display()
        )));
    }
    AppConfig::default().save_to_path(config_path)?;
    Ok(())
}
