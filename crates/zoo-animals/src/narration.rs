//! The narration seam.
//!
//! Narration is the only user-visible behavior of the simulation: one
//! line of text per event. Everything that speaks does so through a
//! [`Narrator`], so the binary can print to stdout while tests record
//! the exact lines.

/// A sink for narrated lines.
pub trait Narrator {
    /// Emit one complete line of narration (without a trailing newline).
    fn narrate(&mut self, line: &str);
}

/// Prints every narrated line to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNarrator;

impl ConsoleNarrator {
    /// Create a new console narrator.
    pub const fn new() -> Self {
        Self
    }
}

impl Narrator for ConsoleNarrator {
    fn narrate(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Records narrated lines in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    /// Create an empty transcript.
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// All lines recorded so far.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines recorded.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Drain the recorded lines, leaving the transcript empty.
    pub fn take(&mut self) -> Vec<String> {
        core::mem::take(&mut self.lines)
    }
}

impl Narrator for Transcript {
    fn narrate(&mut self, line: &str) {
        self.lines.push(line.to_owned());
    }
}
