use std::env;
use std::io::{self, Write};

use thiserror::Error;

use super::env::{EnvError, EnvTable};

#[derive(Debug, Error)]
pub enum DirError {
    #[error("cd: {path}: {source}")]
    ChangeFailed {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("cd: no current directory to resolve `{0}` against")]
    NoCurrent(String),
    #[error("There was an error printing the working directory.")]
    Unset,
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Env(#[from] EnvError),
}

/// The shell's own idea of the working directory.
///
/// Paths are joined textually: `cd ..` from `/a/b` becomes `/a/b/..`, not
/// `/a`. The OS resolves the path, the tracker keeps the text.
#[derive(Debug, Clone, Default)]
pub struct WorkingDir {
    current: Option<String>,
}

impl WorkingDir {
    pub fn new(current: Option<String>) -> Self {
        Self { current }
    }

    /// Starts at `$HOME`, or untracked when it is not set.
    pub fn from_home() -> Self {
        Self::new(env::var("HOME").ok())
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Absolute candidate for `requested`, without touching the OS.
    pub fn resolve(&self, requested: &str) -> Result<String, DirError> {
        if requested.starts_with('/') {
            return Ok(requested.to_string());
        }
        match &self.current {
            Some(current) => Ok(format!("{}/{}", current, requested)),
            None => Err(DirError::NoCurrent(requested.to_string())),
        }
    }

    /// Moves the process to `requested` and, only if that worked, updates
    /// the tracked path and `PWD`.
    pub fn change_directory(
        &mut self,
        requested: &str,
        vars: &mut EnvTable,
    ) -> Result<(), DirError> {
        let candidate = self.resolve(requested)?;

        env::set_current_dir(&candidate).map_err(|source| DirError::ChangeFailed {
            path: candidate.clone(),
            source,
        })?;

        vars.upsert("PWD", &candidate)?;
        tracing::debug!(path = %candidate, "working directory changed");
        self.current = Some(candidate);
        Ok(())
    }

    pub fn print_working_directory(&self, out: &mut dyn Write) -> Result<(), DirError> {
        let current = self.current.as_deref().ok_or(DirError::Unset)?;
        write!(out, "\nPath\n----\n{}\n\n\n", current)?;
        Ok(())
    }

    pub fn prompt(&self) -> String {
        match self.current.as_deref() {
            Some(path) if path.starts_with('/') => format!("bsh{}> ", path),
            Some(path) => format!("bsh/{}> ", path),
            None => "bsh> ".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::env::MatchMode;
    use std::fs;

    fn tracked(dir: &std::path::Path) -> WorkingDir {
        WorkingDir::new(Some(dir.to_string_lossy().into_owned()))
    }

    #[test]
    fn test_resolve_absolute_and_relative() -> Result<(), DirError> {
        let wd = WorkingDir::new(Some("/home/u".to_string()));
        assert_eq!(wd.resolve("/tmp")?, "/tmp");
        assert_eq!(wd.resolve("sub")?, "/home/u/sub");
        assert_eq!(wd.resolve("../x")?, "/home/u/../x");
        Ok(())
    }

    #[test]
    fn test_resolve_relative_without_current() {
        let wd = WorkingDir::new(None);
        assert!(matches!(wd.resolve("sub"), Err(DirError::NoCurrent(_))));
        assert!(wd.resolve("/tmp").is_ok());
    }

    #[test]
    fn test_cd_relative_updates_current_and_pwd() -> Result<(), Box<dyn std::error::Error>> {
        let temp = tempfile::tempdir()?;
        fs::create_dir(temp.path().join("sub"))?;
        let mut wd = tracked(temp.path());
        let mut env = EnvTable::new(8, MatchMode::Exact);

        wd.change_directory("sub", &mut env)?;

        let expected = format!("{}/sub", temp.path().display());
        assert_eq!(wd.current(), Some(expected.as_str()));
        assert_eq!(env.get("PWD"), Some(expected.as_str()));
        Ok(())
    }

    #[test]
    fn test_cd_missing_leaves_state_alone() -> Result<(), Box<dyn std::error::Error>> {
        let temp = tempfile::tempdir()?;
        let mut wd = tracked(temp.path());
        let mut env = EnvTable::from_vars([("PWD", "/before")], 8, MatchMode::Exact);
        let before = wd.current().map(str::to_string);

        let result = wd.change_directory("does-not-exist", &mut env);

        assert!(matches!(result, Err(DirError::ChangeFailed { .. })));
        assert_eq!(wd.current().map(str::to_string), before);
        assert_eq!(env.get("PWD"), Some("/before"));
        Ok(())
    }

    #[test]
    fn test_print_working_directory_framing() -> Result<(), DirError> {
        let wd = WorkingDir::new(Some("/home/u/sub".to_string()));
        let mut out = Vec::new();
        wd.print_working_directory(&mut out)?;
        assert_eq!(
            String::from_utf8_lossy(&out),
            "\nPath\n----\n/home/u/sub\n\n\n"
        );
        Ok(())
    }

    #[test]
    fn test_print_without_directory() {
        let wd = WorkingDir::new(None);
        let mut out = Vec::new();
        assert!(matches!(
            wd.print_working_directory(&mut out),
            Err(DirError::Unset)
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_prompt_forms() {
        assert_eq!(WorkingDir::new(Some("/home/u".into())).prompt(), "bsh/home/u> ");
        assert_eq!(WorkingDir::new(Some("rel".into())).prompt(), "bsh/rel> ");
        assert_eq!(WorkingDir::new(None).prompt(), "bsh> ");
    }
}
