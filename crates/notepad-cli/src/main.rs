//! Notepad CLI - drive the note pad from the terminal
//!
//! Starts an interactive session by default; scripts replay the same line
//! commands non-interactively.

mod cli;
mod commands;
mod error;


use clap::Parser;
use notepad_core::App;

use crate::cli::{Cli, Commands};
use crate::commands::common::{load_config, render_format, resolve_config_path};
use crate::commands::completions::run_completions;
use crate::commands::config::run_config;
use crate::commands::run::{run_repl, run_script};
use crate::error::CliError;

const LOG_DIRECTIVE: &str = "notepad=info";

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(LOG_DIRECTIVE.parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let format = render_format(cli.json);

    match cli.command {
        Some(Commands::Completions { shell, output }) => {
            run_completions(shell, output.as_deref())?;
        }
        Some(Commands::Config { command }) => {
            let config_path = resolve_config_path(cli.config)?;
            run_config(command, &config_path)?;
        }
        Some(Commands::Run { script, strict }) => {
            let app = open_app(cli.config)?;
            run_script(app, &script, format, strict)?;
        }
        Some(Commands::Repl) | None => {
            let app = open_app(cli.config)?;
            run_repl(app, format)?;
        }
    }

    Ok(())
}

fn open_app(cli_config_path: Option<std::path::PathBuf>) -> Result<App, CliError> {
    let config_path = resolve_config_path(cli_config_path)?;
    let config = load_config(&config_path)?;
    tracing::info!(
        seed_demo_notes = config.seed_demo_notes,
        "Starting session"
    );
    Ok(App::new(&config))
}
