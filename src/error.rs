//! Library error types.
//!
//! The rendering layer reports failures through [`Error`]. The binary and the
//! configuration layer wrap these in `anyhow` with context.

use crate::component::WidgetKind;
use std::fmt;
use std::io;

/// The read-only slots a widget can be submitted to outside the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Header,
    Footer,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Header => f.write_str("header"),
            Slot::Footer => f.write_str("footer"),
        }
    }
}

/// Errors raised while sizing, laying out or drawing widgets.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An interactive widget was placed in the header or footer
    #[error("{kind} widgets cannot be rendered in the {slot}; only text is allowed there")]
    InteractiveOutsideBody { slot: Slot, kind: WidgetKind },

    /// The external rendering tool could not be started
    #[error("Failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// Querying or clearing the terminal failed
    #[error("Terminal error: {0}")]
    Terminal(#[from] io::Error),

    /// A colour string is neither hex nor an ANSI index
    #[error("Invalid color '{0}': expected #RGB, #RRGGBB or an ANSI index 0-255")]
    InvalidColor(String),
}

/// Convenience type alias for Result with [`Error`]
pub type Result<T> = std::result::Result<T, Error>;
