use std::io::Write;

use super::{Command, CommandError, Flow};
use crate::core::state::ShellState;

/// `exit`: leaves the read loop. Extra arguments are ignored.
#[derive(Clone, Debug, Default)]
pub struct ExitCommand;

impl Command for ExitCommand {
    fn execute(
        &self,
        _args: &[String],
        _state: &mut ShellState,
        _out: &mut dyn Write,
    ) -> Result<Flow, CommandError> {
        Ok(Flow::Exit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::tests::{args, test_state};

    #[test]
    fn test_exit_command() {
        let mut state = test_state(&[]);
        let mut out = Vec::new();
        let flow = ExitCommand
            .execute(&args(&["now"]), &mut state, &mut out)
            .unwrap();
        assert_eq!(flow, Flow::Exit);
        assert!(out.is_empty());
    }
}
