use std::io::Write;

use super::{expect_args, Command, CommandError, Flow};
use crate::core::state::ShellState;

#[derive(Clone, Debug, Default)]
pub struct PwdCommand;

impl Command for PwdCommand {
    fn execute(
        &self,
        args: &[String],
        state: &mut ShellState,
        out: &mut dyn Write,
    ) -> Result<Flow, CommandError> {
        expect_args(args, 0, "pwd")?;
        state.cwd.print_working_directory(out)?;
        Ok(Flow::Continue)
    }
}
