use std::env;
use std::path::{Path, PathBuf};

use notepad_core::config::AppConfig;
use notepad_core::render::RenderFormat;

use crate::error::CliError;

const CONFIG_FILE_NAME: &str = "config.json";

pub fn resolve_config_path(cli_config_path: Option<PathBuf>) -> Result<PathBuf, CliError> {
    cli_config_path
        .or_else(|| env::var_os("NOTEPAD_CONFIG").map(PathBuf::from))
        .or_else(default_config_path)
        .ok_or_else(|| CliError::Config("Failed to resolve config directory".to_string()))
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("notepad").join(CONFIG_FILE_NAME))
}

pub fn load_config(path: &Path) -> Result<AppConfig, CliError> {
    let config = AppConfig::load_from_path(path)?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

pub const fn render_format(as_json: bool) -> RenderFormat {
    if as_json {
        RenderFormat::Json
    } else {
        RenderFormat::Text
    }
}
