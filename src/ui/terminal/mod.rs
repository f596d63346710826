// Wed Jan 15 2026 - Alex

pub mod color;

pub use color::{ColorSource, FixedColor, RandomColors, SequenceColors, Style, Styler, TerminalColor};

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

pub const MIN_WRAP_WIDTH: usize = 20;
pub const MAX_WRAP_WIDTH: usize = 80;

pub trait ConsoleSink {
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

/// Stdout sink, locked and flushed per line.
pub struct Terminal {
    stdout: io::Stdout,
}

impl Terminal {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    pub fn writeln(&mut self, text: &str) -> io::Result<()> {
        let mut out = self.stdout.lock();
        writeln!(out, "{}", text)?;
        out.flush()
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleSink for Terminal {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.writeln(line)
    }
}

/// In-memory sink. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemoryConsole {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Everything written so far, one physical line per entry.
    pub fn output(&self) -> String {
        self.lines.lock().join("\n")
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl ConsoleSink for MemoryConsole {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.lines.lock().push(line.to_string());
        Ok(())
    }
}

pub fn clamp_wrap_width(columns: usize) -> usize {
    columns.clamp(MIN_WRAP_WIDTH, MAX_WRAP_WIDTH)
}

/// Wrap width for the current terminal, 80 when the size is unknown.
pub fn default_wrap_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| clamp_wrap_width(w.0 as usize))
        .unwrap_or(MAX_WRAP_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_wrap_width() {
        assert_eq!(clamp_wrap_width(5), 20);
        assert_eq!(clamp_wrap_width(42), 42);
        assert_eq!(clamp_wrap_width(200), 80);
    }

    #[test]
    fn test_default_wrap_width_in_range() {
        let width = default_wrap_width();
        assert!((MIN_WRAP_WIDTH..=MAX_WRAP_WIDTH).contains(&width));
    }

    #[test]
    fn test_memory_console_shares_buffer() {
        let console = MemoryConsole::new();
        let mut sink = console.clone();
        sink.write_line("first").unwrap();
        sink.write_line("").unwrap();
        sink.write_line("a\nb").unwrap();

        assert_eq!(console.lines().len(), 3);
        assert_eq!(console.output(), "first\n\na\nb");

        console.clear();
        assert!(console.lines().is_empty());
    }
}
