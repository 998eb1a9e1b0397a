use std::io::{BufRead, Write};

use notepad_core::render::{render_outcome, render_view, RenderFormat};
use notepad_core::view::project;
use notepad_core::{App, Outcome};

use crate::commands::line::{parse_line, LineAction};
use crate::error::CliError;

const PROMPT: &str = "notepad> ";

/// How input lines are consumed
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SessionMode {
    /// Prompt, print a frame after every command, keep going on bad input
    Interactive,
    /// Print notifications only, then one final frame
    Script {
        /// Abort on the first error notification
        strict: bool,
    },
}

/// Counters reported when a session ends
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SessionSummary {
    pub commands: usize,
    pub errors: usize,
}

/// Drive `app` from `input` until end of input or `quit`.
pub fn run_session<R: BufRead, W: Write>(
    app: &mut App,
    input: R,
    out: &mut W,
    format: RenderFormat,
    mode: SessionMode,
) -> Result<SessionSummary, CliError> {
    let mut summary = SessionSummary::default();
    let interactive = mode == SessionMode::Interactive;

    if interactive {
        write_frame(app, out, format)?;
        write_prompt(out)?;
    }

    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;

        let action = match parse_line(&line, app.draft()) {
            Ok(Some(action)) => action,
            Ok(None) => {
                if interactive {
                    write_prompt(out)?;
                }
                continue;
            }
            Err(error) => {
                summary.errors += 1;
                match mode {
                    SessionMode::Interactive => {
                        writeln!(out, "{}", error.to_string().trim_end())?;
                        write_prompt(out)?;
                        continue;
                    }
                    SessionMode::Script { .. } => {
                        return Err(CliError::Script {
                            line: line_number,
                            message: error.to_string().trim_end().to_string(),
                        });
                    }
                }
            }
        };

        match action {
            LineAction::Quit => break,
            LineAction::Help(text) => writeln!(out, "{}", text.trim_end())?,
            LineAction::Show => write_frame(app, out, format)?,
            LineAction::Dispatch(command) => {
                summary.commands += 1;
                let outcome = app.dispatch(command);
                write_outcome(&outcome, out, format)?;

                if outcome.has_errors() {
                    summary.errors += 1;
                    if let SessionMode::Script { strict: true } = mode {
                        return Err(CliError::Script {
                            line: line_number,
                            message: first_error_message(&outcome),
                        });
                    }
                }
                if interactive {
                    write_frame(app, out, format)?;
                }
            }
        }

        if interactive {
            write_prompt(out)?;
        }
    }

    if !interactive {
        write_frame(app, out, format)?;
    }

    tracing::debug!(
        commands = summary.commands,
        errors = summary.errors,
        "Session finished"
    );
    Ok(summary)
}

fn write_frame<W: Write>(app: &App, out: &mut W, format: RenderFormat) -> Result<(), CliError> {
    let rendered = render_view(&project(app), format)?;
    writeln!(out, "{}", rendered.trim_end())?;
    Ok(())
}

fn write_outcome<W: Write>(
    outcome: &Outcome,
    out: &mut W,
    format: RenderFormat,
) -> Result<(), CliError> {
    for line in render_outcome(outcome, format)? {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn write_prompt<W: Write>(out: &mut W) -> Result<(), CliError> {
    write!(out, "{PROMPT}")?;
    out.flush()?;
    Ok(())
}

fn first_error_message(outcome: &Outcome) -> String {
    outcome
        .notifications
        .iter()
        .find(|notification| notification.level == notepad_core::NotificationLevel::Error)
        .map(|notification| notification.message.clone())
        .unwrap_or_default()
}
