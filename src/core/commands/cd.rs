use std::io::Write;

use super::{expect_args, Command, CommandError, Flow};
use crate::core::state::ShellState;

/// `cd <directory>`
#[derive(Clone, Debug, Default)]
pub struct CdCommand;

impl Command for CdCommand {
    fn execute(
        &self,
        args: &[String],
        state: &mut ShellState,
        _out: &mut dyn Write,
    ) -> Result<Flow, CommandError> {
        expect_args(args, 1, "cd <directory>")?;
        let ShellState { env, cwd, .. } = state;
        cwd.change_directory(&args[0], env)?;
        Ok(Flow::Continue)
    }
}
