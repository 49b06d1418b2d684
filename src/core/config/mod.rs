use std::path::PathBuf;

use thiserror::Error;

mod loader;
mod paths;

use crate::core::env::MatchMode;
use crate::flags::Flags;
use crate::input::LongLinePolicy;
use loader::ConfigLoader;
pub use paths::ConfigPaths;

/// Limits and compatibility switches for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Arguments kept per line, command name included.
    pub max_args: usize,
    /// Entries the environment table may hold.
    pub max_env: usize,
    /// Lines kept in history.
    pub history_size: usize,
    /// Longest accepted input line in bytes, terminator included.
    pub max_line: usize,
    pub env_match: MatchMode,
    pub long_lines: LongLinePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_args: 16,
            max_env: 64,
            history_size: 500,
            max_line: 1024,
            env_match: MatchMode::Exact,
            long_lines: LongLinePolicy::Truncate,
        }
    }
}

impl Config {
    /// Defaults overlaid with the rc file, if there is one.
    pub fn load(flags: &Flags) -> Result<Self, ConfigError> {
        let paths = match flags.get_value("config") {
            Some(path) => ConfigPaths::explicit(PathBuf::from(path)),
            None => ConfigPaths::new(),
        };

        let mut config = Config::default();
        ConfigLoader::new(&paths).load_configs(&mut config)?;
        Ok(config)
    }

    /// Applies one `key = value` setting.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason,
        };

        match key {
            "max_args" => self.max_args = parse_count(value, 1).map_err(invalid)?,
            "max_env" => self.max_env = parse_count(value, 0).map_err(invalid)?,
            "history_size" => self.history_size = parse_count(value, 0).map_err(invalid)?,
            "max_line" => self.max_line = parse_count(value, 2).map_err(invalid)?,
            "env_match" => self.env_match = value.parse().map_err(invalid)?,
            "long_lines" => self.long_lines = value.parse().map_err(invalid)?,
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }
}

fn parse_count(value: &str, min: usize) -> Result<usize, String> {
    let n: usize = value
        .parse()
        .map_err(|_| format!("expected a whole number, got `{}`", value))?;
    if n < min {
        return Err(format!("must be at least {}", min));
    }
    Ok(n)
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {}", .0.display())]
    ConfigFileNotFound(PathBuf),
    #[error("{}: {}", .0.display(), .1)]
    IoError(PathBuf, #[source] std::io::Error),
    #[error("unknown setting `{0}`")]
    UnknownKey(String),
    #[error("invalid value `{value}` for `{key}`: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
    #[error("{}:{}: {}", .path.display(), .line, .message)]
    Syntax {
        path: PathBuf,
        line: usize,
        message: Box<ConfigError>,
    },
}
