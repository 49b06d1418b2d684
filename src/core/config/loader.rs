use std::{fs, path::Path};

use super::{Config, ConfigError, ConfigPaths};

pub struct ConfigLoader<'a> {
    paths: &'a ConfigPaths,
}

impl<'a> ConfigLoader<'a> {
    pub fn new(paths: &'a ConfigPaths) -> Self {
        Self { paths }
    }

    pub fn load_configs(&self, config: &mut Config) -> Result<(), ConfigError> {
        let Some(path) = self.paths.rc_path.as_deref() else {
            return Ok(());
        };

        if path.exists() {
            self.source(path, config)
        } else if self.paths.required {
            Err(ConfigError::ConfigFileNotFound(path.to_path_buf()))
        } else {
            Ok(())
        }
    }

    fn source(&self, path: &Path, config: &mut Config) -> Result<(), ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|e| ConfigError::IoError(path.to_path_buf(), e))?;

        for (i, line) in content.lines().enumerate() {
            self.process_line(line, config).map_err(|e| ConfigError::Syntax {
                path: path.to_path_buf(),
                line: i + 1,
                message: Box::new(e),
            })?;
        }
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(())
    }

    fn process_line(&self, line: &str, config: &mut Config) -> Result<(), ConfigError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }

        let Some((key, value)) = line.split_once('=') else {
            return Err(ConfigError::InvalidValue {
                key: line.to_string(),
                value: String::new(),
                reason: "expected `key = value`".to_string(),
            });
        };

        // Remove quotes if present
        let mut value = value.trim();
        if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
            value = &value[1..value.len() - 1];
        }

        match config.set(key.trim(), value) {
            Err(ConfigError::UnknownKey(key)) => {
                tracing::warn!("ignoring unknown setting `{}`", key);
                Ok(())
            }
            other => other,
        }
    }
}
