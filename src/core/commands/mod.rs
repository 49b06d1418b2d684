use std::collections::BTreeMap;
use std::io::Write;

mod builtin;
mod cd;
mod env;
mod history;
mod pwd;

pub use builtin::ExitCommand;
pub use cd::CdCommand;
pub use env::{EnvCommand, SetEnvCommand, UnsetEnvCommand};
pub use history::HistoryCommand;
pub use pwd::PwdCommand;

use thiserror::Error;

use super::env::EnvError;
use super::state::ShellState;
use super::workdir::DirError;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("command not found: {0}")]
    NotFound(String),
    /// Wrong argument count; the text is the builtin's usage line.
    #[error("Usage: {0}")]
    Usage(&'static str),
    #[error(transparent)]
    Dir(#[from] DirError),
    #[error(transparent)]
    Env(#[from] EnvError),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl CommandError {
    /// Capacity exhaustion ends the session; everything else is reported
    /// and the loop carries on.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            CommandError::Env(EnvError::CapacityExceeded { .. })
                | CommandError::Dir(DirError::Env(EnvError::CapacityExceeded { .. }))
        )
    }
}

/// What the read loop does after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub trait Command {
    fn execute(
        &self,
        args: &[String],
        state: &mut ShellState,
        out: &mut dyn Write,
    ) -> Result<Flow, CommandError>;
}

/// Fails with the usage line unless exactly `expected` arguments follow
/// the command name.
pub(crate) fn expect_args(
    args: &[String],
    expected: usize,
    usage: &'static str,
) -> Result<(), CommandError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(CommandError::Usage(usage))
    }
}

#[derive(Clone)]
enum CommandType {
    Exit(ExitCommand),
    Env(EnvCommand),
    SetEnv(SetEnvCommand),
    UnsetEnv(UnsetEnvCommand),
    Cd(CdCommand),
    Pwd(PwdCommand),
    History(HistoryCommand),
}

impl Command for CommandType {
    fn execute(
        &self,
        args: &[String],
        state: &mut ShellState,
        out: &mut dyn Write,
    ) -> Result<Flow, CommandError> {
        match self {
            CommandType::Exit(cmd) => cmd.execute(args, state, out),
            CommandType::Env(cmd) => cmd.execute(args, state, out),
            CommandType::SetEnv(cmd) => cmd.execute(args, state, out),
            CommandType::UnsetEnv(cmd) => cmd.execute(args, state, out),
            CommandType::Cd(cmd) => cmd.execute(args, state, out),
            CommandType::Pwd(cmd) => cmd.execute(args, state, out),
            CommandType::History(cmd) => cmd.execute(args, state, out),
        }
    }
}

/// Routes a command name to its builtin.
#[derive(Clone)]
pub struct CommandExecutor {
    commands: BTreeMap<&'static str, CommandType>,
}

impl Default for CommandExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandExecutor {
    pub fn new() -> Self {
        let mut commands = BTreeMap::new();
        commands.insert("exit", CommandType::Exit(ExitCommand));
        commands.insert("env", CommandType::Env(EnvCommand));
        commands.insert("setenv", CommandType::SetEnv(SetEnvCommand));
        commands.insert("unsetenv", CommandType::UnsetEnv(UnsetEnvCommand));
        commands.insert("cd", CommandType::Cd(CdCommand));
        commands.insert("pwd", CommandType::Pwd(PwdCommand));
        commands.insert("history", CommandType::History(HistoryCommand));

        Self { commands }
    }

    pub fn execute(
        &self,
        command: &str,
        args: &[String],
        state: &mut ShellState,
        out: &mut dyn Write,
    ) -> Result<Flow, CommandError> {
        match self.commands.get(command) {
            Some(cmd) => cmd.execute(args, state, out),
            None => Err(CommandError::NotFound(command.to_string())),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::core::env::{EnvTable, MatchMode};
    use crate::core::workdir::WorkingDir;
    use crate::input::HistoryRing;

    pub(crate) fn test_state(vars: &[(&str, &str)]) -> ShellState {
        ShellState::with_parts(
            EnvTable::from_vars(vars.iter().copied(), 64, MatchMode::Exact),
            WorkingDir::new(Some("/".to_string())),
            HistoryRing::new(500),
        )
    }

    pub(crate) fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_builtin_command_detection() {
        let executor = CommandExecutor::new();
        let mut state = test_state(&[]);
        let mut out = Vec::new();
        for name in ["exit", "env", "setenv", "unsetenv", "cd", "pwd", "history"] {
            let result = executor.execute(name, &args(&["x", "y", "z"]), &mut state, &mut out);
            assert!(
                !matches!(result, Err(CommandError::NotFound(_))),
                "{} should be a builtin",
                name
            );
        }
        for name in ["ls", "", "EXIT"] {
            let result = executor.execute(name, &[], &mut state, &mut out);
            assert!(matches!(result, Err(CommandError::NotFound(_))));
        }
    }

    #[test]
    fn test_execute_unknown_command() {
        let executor = CommandExecutor::new();
        let mut state = test_state(&[]);
        let mut out = Vec::new();

        let result = executor.execute("ls", &args(&["-l"]), &mut state, &mut out);
        assert!(matches!(result, Err(CommandError::NotFound(ref name)) if name == "ls"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_exit_ends_loop() {
        let executor = CommandExecutor::new();
        let mut state = test_state(&[]);
        let mut out = Vec::new();
        let flow = executor.execute("exit", &[], &mut state, &mut out).unwrap();
        assert_eq!(flow, Flow::Exit);
    }

    #[test]
    fn test_fatal_classification() {
        let full = EnvError::CapacityExceeded { capacity: 64 };
        assert!(CommandError::Env(full).is_fatal());
        assert!(
            CommandError::Dir(DirError::Env(EnvError::CapacityExceeded { capacity: 1 }))
                .is_fatal()
        );
        assert!(!CommandError::Usage("pwd").is_fatal());
        assert!(!CommandError::Dir(DirError::Unset).is_fatal());
        assert!(!CommandError::NotFound("ls".into()).is_fatal());
    }

    #[test]
    fn test_command_error_display() {
        assert_eq!(
            CommandError::Usage("setenv <name> <value>").to_string(),
            "Usage: setenv <name> <value>"
        );
        assert_eq!(
            CommandError::NotFound("ls".to_string()).to_string(),
            "command not found: ls"
        );
    }
}
