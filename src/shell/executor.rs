use std::io::Write;

use crate::core::commands::{CommandError, Flow};
use crate::error::ShellError;

pub trait CommandHandler {
    /// Dispatches one line and records it in history.
    fn execute_line(&mut self, line: &str) -> Result<Flow, ShellError>;
}

impl CommandHandler for super::Shell {
    fn execute_line(&mut self, line: &str) -> Result<Flow, ShellError> {
        let args = self.tokenizer.tokenize(line);
        if args.truncated() {
            tracing::warn!(
                max_args = self.tokenizer.max_args(),
                "extra arguments dropped"
            );
        }

        if self.debug {
            for (i, arg) in args.args().iter().enumerate() {
                writeln!(self.out, "\t{} ({})", i, arg)?;
            }
        }

        let result = self.executor.execute(
            args.command(),
            args.rest(),
            &mut self.state,
            &mut *self.out,
        );

        let flow = match result {
            Ok(Flow::Exit) => {
                if self.debug {
                    writeln!(self.out, "exiting")?;
                }
                return Ok(Flow::Exit);
            }
            Ok(flow) => flow,
            Err(e) if e.is_fatal() => return Err(ShellError::Fatal(e)),
            Err(CommandError::Usage(usage)) => {
                writeln!(self.out, "Usage: {}", usage)?;
                Flow::Continue
            }
            // A blank line or a stray leading space is not worth a message.
            Err(CommandError::NotFound(name)) if name.is_empty() => Flow::Continue,
            Err(e) => {
                tracing::debug!(command = args.command(), error = %e, "command failed");
                self.report(&e.to_string());
                Flow::Continue
            }
        };

        self.state.history.record(line);
        Ok(flow)
    }
}
