use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use notepad_core::render::RenderFormat;
use notepad_core::App;

use crate::commands::session::{run_session, SessionMode};
use crate::error::CliError;

pub fn run_repl(mut app: App, format: RenderFormat) -> Result<(), CliError> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    run_session(&mut app, stdin.lock(), &mut stdout, format, SessionMode::Interactive)?;
    Ok(())
}

pub fn run_script(
    mut app: App,
    script_path: &Path,
    format: RenderFormat,
    strict: bool,
) -> Result<(), CliError> {
    let file = File::open(script_path).map_err(|error| {
        CliError::Config(format!(
            "Failed to open script {}: {error}",
            script_path.display()
        ))
    })?;
    let mut stdout = io::stdout().lock();
    let summary = run_session(
        &mut app,
        BufReader::new(file),
        &mut stdout,
        format,
        SessionMode::Script { strict },
    )?;
    tracing::info!(
        commands = summary.commands,
        errors = summary.errors,
        "Script {} finished",
        script_path.display()
    );
    Ok(())
}
