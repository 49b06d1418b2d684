use std::io::Write;

use super::{expect_args, Command, CommandError, Flow};
use crate::core::state::ShellState;

/// `history`: every remembered line, oldest first.
#[derive(Clone, Debug, Default)]
pub struct HistoryCommand;

impl Command for HistoryCommand {
    fn execute(
        &self,
        args: &[String],
        state: &mut ShellState,
        out: &mut dyn Write,
    ) -> Result<Flow, CommandError> {
        expect_args(args, 0, "history")?;
        state.history.print_all(out)?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::tests::{args, test_state};

    #[test]
    fn test_history_listing() {
        let mut state = test_state(&[]);
        state.history.record("cd sub");
        state.history.record("pwd");
        let mut out = Vec::new();

        HistoryCommand.execute(&[], &mut state, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1: cd sub\n2: pwd\n");
    }

    #[test]
    fn test_history_usage() {
        let mut state = test_state(&[]);
        let mut out = Vec::new();
        let err = HistoryCommand
            .execute(&args(&["-c"]), &mut state, &mut out)
            .unwrap_err();
        assert_eq!(err.to_string(), "Usage: history");
    }
}
