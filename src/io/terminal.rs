//! # Terminal Prompt Stream
//!
//! Production implementation reading answers from stdin and writing prompts
//! to stdout.

use super::PromptStream;
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

pub struct TerminalPromptStream<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl TerminalPromptStream<io::StdinLock<'static>, io::Stdout> {
    /// Create a prompt stream on the process's stdin and stdout
    pub fn new() -> Self {
        Self {
            reader: io::stdin().lock(),
            writer: io::stdout(),
        }
    }
}

impl Default for TerminalPromptStream<io::StdinLock<'static>, io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> TerminalPromptStream<R, W> {
    /// Create a prompt stream with custom reader and writer
    pub fn with_streams(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> PromptStream for TerminalPromptStream<R, W> {
    fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.writer, "{message}").context("failed to write prompt")?;
        self.writer.flush().context("failed to flush prompt")?;

        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .context("failed to read from stdin")?;
        if read == 0 {
            tracing::debug!("stdin reached end of input while prompting");
        }

        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }
}
