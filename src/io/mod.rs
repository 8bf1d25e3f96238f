//! # I/O Abstraction Layer
//!
//! Interactive mode needs exactly one capability from the terminal: show a
//! prompt and read back one line. Hiding it behind [`PromptStream`] lets the
//! resolver run against a scripted stream in tests.
//!
//! ```text
//! Production:  InputResolver ──▶ TerminalPromptStream ──▶ stdin / stdout
//! Testing:     InputResolver ──▶ MockPromptStream     ──▶ VecDeque<String>
//! ```

use anyhow::Result;

pub mod mock;
pub mod terminal;

pub use mock::MockPromptStream;
pub use terminal::TerminalPromptStream;

/// Line-oriented prompt abstraction
pub trait PromptStream {
    /// Display `message` and block until one line of input is available.
    ///
    /// The trailing line terminator is removed. End of input yields an
    /// empty string.
    fn prompt(&mut self, message: &str) -> Result<String>;
}
