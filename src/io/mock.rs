//! # Mock Prompt Stream
//!
//! Scripted answers for driving interactive mode without a terminal.

use super::PromptStream;
use anyhow::Result;
use std::collections::VecDeque;

/// Mock prompt stream for testing
///
/// Hands out pre-programmed answers in order and records every prompt shown.
/// Once the answers run out it behaves like stdin at end of input.
#[derive(Debug, Default)]
pub struct MockPromptStream {
    answers: VecDeque<String>,
    prompts: Vec<String>,
}

impl MockPromptStream {
    /// Create a mock stream with pre-programmed answers
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Create a mock stream that is already at end of input
    pub fn empty() -> Self {
        Self::default()
    }

    /// Prompts shown so far, in order
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl PromptStream for MockPromptStream {
    fn prompt(&mut self, message: &str) -> Result<String> {
        self.prompts.push(message.to_string());
        Ok(self.answers.pop_front().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answers_in_order_and_records_prompts() {
        let mut stream = MockPromptStream::new(["70", "170"]);
        assert_eq!(stream.prompt("a").unwrap(), "70");
        assert_eq!(stream.prompt("b").unwrap(), "170");
        assert_eq!(stream.prompts(), ["a", "b"]);
        assert_eq!(stream.remaining(), 0);
    }

    #[test]
    fn test_exhausted_stream_returns_empty() {
        let mut stream = MockPromptStream::empty();
        assert_eq!(stream.prompt("a").unwrap(), "");
    }
}
