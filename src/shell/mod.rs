use std::io::{self, Write};

mod executor;

use crate::{
    core::{
        commands::{CommandExecutor, Flow},
        config::Config,
        state::ShellState,
    },
    error::ShellError,
    flags::Flags,
    highlight::Highlighter,
    input::{reader, BufSource, EditorSource, LineLimit, LineSource, Tokenizer},
};

pub use executor::CommandHandler;

pub struct Shell {
    pub(crate) state: ShellState,
    pub(crate) executor: CommandExecutor,
    pub(crate) tokenizer: Tokenizer,
    pub(crate) limit: LineLimit,
    pub(crate) source: Box<dyn LineSource>,
    pub(crate) out: Box<dyn Write>,
    pub(crate) highlighter: Highlighter,
    pub(crate) debug: bool,
    pub(crate) quiet: bool,
}

impl Shell {
    /// A shell on the real stdin/stdout, configured from flags and the rc
    /// file.
    pub fn new(flags: Flags) -> Result<Self, ShellError> {
        let config = Config::load(&flags)?;
        tracing::debug!(?config, "configuration loaded");

        let source: Box<dyn LineSource> = if reader::stdin_is_tty() {
            Box::new(EditorSource::new()?)
        } else {
            Box::new(BufSource::new(io::stdin().lock()).with_limit(config.max_line))
        };

        let mut shell = Self::with_io(
            &config,
            ShellState::new(&config),
            source,
            Box::new(io::stdout()),
        );
        shell.debug = flags.is_set("debug");
        shell.quiet = flags.is_set("quiet");
        shell.highlighter = Highlighter::new();
        Ok(shell)
    }

    /// A shell over arbitrary input and output.
    pub fn with_io(
        config: &Config,
        state: ShellState,
        source: Box<dyn LineSource>,
        out: Box<dyn Write>,
    ) -> Self {
        Self {
            state,
            executor: CommandExecutor::new(),
            tokenizer: Tokenizer::new(config.max_args),
            limit: LineLimit::new(config.max_line, config.long_lines),
            source,
            out,
            highlighter: Highlighter::plain(),
            debug: false,
            quiet: false,
        }
    }

    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    /// Reads and dispatches lines until `exit` or end of input.
    pub fn run(&mut self) -> Result<(), ShellError> {
        loop {
            let prompt = self.state.cwd.prompt();
            let Some(line) = self.source.read_line(&prompt, &mut *self.out)? else {
                tracing::debug!("end of input");
                break;
            };

            let line = match self.limit.enforce(line) {
                Ok(line) => line,
                Err(e) => {
                    self.warn(&e.to_string());
                    continue;
                }
            };

            if self.execute_line(&line)? == Flow::Exit {
                break;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    /// One-line diagnostic on stderr, unless quiet.
    pub(crate) fn report(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", self.highlighter.highlight_error(&format!("bsh: {}", message)));
        }
    }

    /// Like `report`, for input the shell skipped rather than failed on.
    pub(crate) fn warn(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", self.highlighter.highlight_warning(&format!("bsh: {}", message)));
        }
    }
}
