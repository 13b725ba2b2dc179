//! Line-oriented console abstraction
//!
//! `Console` is the seam between the interactive prompts and the process
//! streams, so every prompt sequence can be scripted and inspected in tests
//! without touching stdin or stdout.

use std::collections::VecDeque;
use std::io::{self, Write};

use crate::error::Result;

/// Blocking, line-oriented console access.
pub trait Console {
    /// Write without a trailing newline (prompt style); flushed immediately.
    fn write(&mut self, text: &str) -> Result<()>;

    /// Write one full line.
    fn write_line(&mut self, text: &str) -> Result<()>;

    /// Read one line without its terminator; `None` once input is exhausted.
    fn read_line(&mut self) -> Result<Option<String>>;
}

/// Console over the process stdin/stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdConsole;

impl StdConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn write(&mut self, text: &str) -> Result<()> {
        let mut stdout = io::stdout();
        stdout.write_all(text.as_bytes())?;
        // Prompts have no newline, so flush or the user sees nothing.
        stdout.flush()?;
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> Result<()> {
        let mut stdout = io::stdout();
        stdout.write_all(text.as_bytes())?;
        stdout.write_all(b"\n")?;
        stdout.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}

/// Scripted console for tests
///
/// Answers prompts from a queue of input lines and records every write in
/// order, so a whole interactive session can be asserted against.
///
/// # Example
/// ```
/// use fx_exchange::console::{Console, ScriptedConsole};
///
/// let mut console = ScriptedConsole::new(["EUR/USD"]);
/// console.write("pair: ").unwrap();
/// assert_eq!(console.read_line().unwrap(), Some("EUR/USD".to_string()));
/// assert_eq!(console.read_line().unwrap(), None);
/// assert_eq!(console.transcript(), "pair: ");
/// ```
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    written: Vec<String>,
}

impl ScriptedConsole {
    /// Console that answers prompts with `lines`, then reports end of input.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            written: Vec::new(),
        }
    }

    /// Every write in order; line writes include their trailing newline.
    pub fn written(&self) -> &[String] {
        &self.written
    }

    /// The whole output as one string.
    pub fn transcript(&self) -> String {
        self.written.concat()
    }
}

impl Console for ScriptedConsole {
    fn write(&mut self, text: &str) -> Result<()> {
        self.written.push(text.to_string());
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> Result<()> {
        self.written.push(format!("{}\n", text));
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        Ok(self.input.pop_front())
    }
}
