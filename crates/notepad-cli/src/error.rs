use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] notepad_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Could not split command line: {0}")]
    Tokenize(#[from] shell_words::ParseError),
    #[error("{0}")]
    UnknownCommand(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Script failed at line {line}: {message}")]
    Script { line: usize, message: String },
}
