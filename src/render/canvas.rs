//! Terminal dimensions and the terminal itself.

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{self, Clear, ClearType},
};
use std::io::{self, Write};

/// Columns kept free on the right edge of the terminal.
pub const CANVAS_MARGIN: usize = 2;

/// Capability to query and clear the terminal (allows dependency injection for testing)
pub trait Screen {
    /// Terminal size as `(columns, rows)`.
    fn size(&self) -> io::Result<(u16, u16)>;
    fn clear(&mut self) -> io::Result<()>;
}

/// Production screen backed by crossterm
#[derive(Debug, Default)]
pub struct TerminalScreen;

impl Screen for TerminalScreen {
    fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    fn clear(&mut self) -> io::Result<()> {
        let mut stdout = io::stdout();
        execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
        stdout.flush()
    }
}

/// The usable area of the terminal, as of the last refresh.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Canvas {
    pub width: usize,
    pub height: usize,
}

impl Canvas {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Build a canvas from a raw terminal size.
    pub fn from_terminal(columns: u16, rows: u16) -> Self {
        Self {
            width: usize::from(columns).saturating_sub(CANVAS_MARGIN),
            height: usize::from(rows),
        }
    }

    /// Re-read the terminal size.
    pub fn refresh(&mut self, screen: &dyn Screen) -> io::Result<()> {
        let (columns, rows) = screen.size()?;
        *self = Self::from_terminal(columns, rows);
        Ok(())
    }
}
