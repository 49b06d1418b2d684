use std::fmt;
use std::io::{self, BufRead, Read, Write};
use std::str::FromStr;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::error::ShellError;

/// Where command lines come from.
pub trait LineSource {
    /// Shows `prompt` and returns the next line without its terminator, or
    /// `None` at end of input.
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write)
        -> Result<Option<String>, ShellError>;
}

/// Line editing for a terminal on stdin.
pub struct EditorSource {
    editor: DefaultEditor,
}

impl EditorSource {
    pub fn new() -> Result<Self, ShellError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineSource for EditorSource {
    fn read_line(
        &mut self,
        prompt: &str,
        _out: &mut dyn Write,
    ) -> Result<Option<String>, ShellError> {
        loop {
            match self.editor.readline(prompt) {
                Ok(line) => {
                    if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                        tracing::warn!("couldn't add line to editor history: {}", e);
                    }
                    return Ok(Some(line));
                }
                // Ctrl-C discards the partial line and prompts again.
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => return Ok(None),
                Err(e) => return Err(e.into()),
            }
        }
    }
}

/// Plain buffered reads, for piped input and tests.
///
/// At most `max_bytes` of a line are buffered; the remainder up to the next
/// newline is read and thrown away.
pub struct BufSource<R> {
    reader: R,
    buf: Vec<u8>,
    max_bytes: usize,
}

impl<R: BufRead> BufSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            max_bytes: usize::MAX,
        }
    }

    /// Caps buffering at `max_line` bytes, enough for `LineLimit` to see
    /// that a line ran over.
    pub fn with_limit(mut self, max_line: usize) -> Self {
        self.max_bytes = max_line.max(1);
        self
    }

    /// Consumes input through the next newline. Returns the bytes dropped,
    /// newline excluded.
    fn discard_rest_of_line(&mut self) -> io::Result<usize> {
        let mut dropped = 0;
        loop {
            let available = self.reader.fill_buf()?;
            if available.is_empty() {
                return Ok(dropped);
            }
            match available.iter().position(|&b| b == b'\n') {
                Some(i) => {
                    self.reader.consume(i + 1);
                    return Ok(dropped + i);
                }
                None => {
                    let n = available.len();
                    self.reader.consume(n);
                    dropped += n;
                }
            }
        }
    }
}

impl<R: BufRead> LineSource for BufSource<R> {
    fn read_line(
        &mut self,
        prompt: &str,
        out: &mut dyn Write,
    ) -> Result<Option<String>, ShellError> {
        write!(out, "{}", prompt)?;
        out.flush()?;

        self.buf.clear();
        let limit = u64::try_from(self.max_bytes).unwrap_or(u64::MAX);
        let read = (&mut self.reader)
            .take(limit)
            .read_until(b'\n', &mut self.buf)?;
        if read == 0 {
            return Ok(None);
        }

        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        } else if self.buf.len() >= self.max_bytes {
            let dropped = self.discard_rest_of_line()?;
            tracing::debug!(kept = self.buf.len(), dropped, "overlong input line");
        }
        Ok(Some(String::from_utf8_lossy(&self.buf).into_owned()))
    }
}

/// True when stdin is attached to a terminal.
pub fn stdin_is_tty() -> bool {
    // SAFETY: isatty only inspects the descriptor.
    unsafe { libc::isatty(libc::STDIN_FILENO) == 1 }
}

/// What to do with a line longer than the configured maximum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LongLinePolicy {
    #[default]
    Truncate,
    Reject,
}

impl FromStr for LongLinePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "truncate" => Ok(LongLinePolicy::Truncate),
            "reject" => Ok(LongLinePolicy::Reject),
            other => Err(format!("expected `truncate` or `reject`, got `{}`", other)),
        }
    }
}

impl fmt::Display for LongLinePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LongLinePolicy::Truncate => write!(f, "truncate"),
            LongLinePolicy::Reject => write!(f, "reject"),
        }
    }
}

/// Input may already be cut at the read limit, so only the bound is
/// reported.
#[derive(Debug, PartialEq, Eq)]
pub struct LineTooLong {
    pub max: usize,
}

impl fmt::Display for LineTooLong {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line too long (limit {} bytes)", self.max)
    }
}

/// Line length bound. `max_line` counts the terminator, so a line may
/// carry at most `max_line - 1` bytes of text.
#[derive(Debug, Clone, Copy)]
pub struct LineLimit {
    max_line: usize,
    policy: LongLinePolicy,
}

impl LineLimit {
    pub fn new(max_line: usize, policy: LongLinePolicy) -> Self {
        Self { max_line, policy }
    }

    pub fn enforce(&self, mut line: String) -> Result<String, LineTooLong> {
        let max = self.max_line.saturating_sub(1);
        if line.len() <= max {
            return Ok(line);
        }

        match self.policy {
            LongLinePolicy::Reject => Err(LineTooLong { max }),
            LongLinePolicy::Truncate => {
                let mut cut = max;
                while !line.is_char_boundary(cut) {
                    cut -= 1;
                }
                tracing::warn!(len = line.len(), max, "input line truncated");
                line.truncate(cut);
                Ok(line)
            }
        }
    }
}
