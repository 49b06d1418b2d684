use std::io::Write;

use super::{expect_args, Command, CommandError, Flow};
use crate::core::env::is_valid_name;
use crate::core::state::ShellState;

/// `env`: lists every entry as `name=value`.
#[derive(Clone, Debug, Default)]
pub struct EnvCommand;

/// `setenv <name> <value>`
#[derive(Clone, Debug, Default)]
pub struct SetEnvCommand;

/// `unsetenv <name>`
#[derive(Clone, Debug, Default)]
pub struct UnsetEnvCommand;

impl Command for EnvCommand {
    fn execute(
        &self,
        args: &[String],
        state: &mut ShellState,
        out: &mut dyn Write,
    ) -> Result<Flow, CommandError> {
        expect_args(args, 0, "env")?;
        for entry in state.env.iter() {
            writeln!(out, "{}", entry)?;
        }
        Ok(Flow::Continue)
    }
}

impl Command for SetEnvCommand {
    fn execute(
        &self,
        args: &[String],
        state: &mut ShellState,
        _out: &mut dyn Write,
    ) -> Result<Flow, CommandError> {
        expect_args(args, 2, "setenv <name> <value>")?;
        if !is_valid_name(&args[0]) {
            return Err(CommandError::Usage("setenv <name> <value>"));
        }
        state.env.upsert(&args[0], &args[1])?;
        Ok(Flow::Continue)
    }
}

impl Command for UnsetEnvCommand {
    fn execute(
        &self,
        args: &[String],
        state: &mut ShellState,
        _out: &mut dyn Write,
    ) -> Result<Flow, CommandError> {
        expect_args(args, 1, "unsetenv <name>")?;
        if state.env.remove(&args[0]).is_none() {
            tracing::debug!(name = %args[0], "unsetenv: no such variable");
        }
        Ok(Flow::Continue)
    }
}
