use thiserror::Error;

use crate::core::commands::CommandError;
use crate::core::config::ConfigError;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Flag error: {0}")]
    Flag(String),
    /// An error the session cannot recover from; the process exits non-zero.
    #[error("fatal: {0}")]
    Fatal(CommandError),
}
