//! # Backend
//!
//! A [`Backend`] turns widget descriptions into terminal output. Implementors
//! provide the per-kind primitives; the slot-level methods
//! ([`Backend::render_header`], [`Backend::render_body`],
//! [`Backend::render_footer`]) have default implementations that dispatch on
//! the widget kind.
//!
//! ## Implementations
//!
//! - [`GumBackend`] - shells out to [gum](https://github.com/charmbracelet/gum)

pub mod gum;

pub use gum::{is_gum_available, GumBackend};

use crate::component::{Confirm, List, Spinner, Text, Widget};
use crate::error::{Error, Result, Slot};
use crate::render::canvas::Canvas;
use crate::render::layout::leading_blank_lines;

/// What the user picked from a [`List`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Single-select lists yield exactly one item. An empty string means the
    /// user aborted and is never one of the list's items.
    Single(String),
    /// Multi-select lists yield the picked items in list order.
    Multiple(Vec<String>),
}

/// The answer produced by an interactive body widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Confirmed(bool),
    Selection(Selection),
}

/// How body widgets are spaced vertically.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BodyLayout {
    pub distribute_evenly: bool,
    /// Blank lines per slot, see [`crate::render::layout::slot_padding`].
    pub padding: usize,
}

pub trait Backend {
    fn render_text(&mut self, text: &Text, canvas: &Canvas) -> Result<()>;

    /// Returns `true` when the user accepted.
    fn render_confirm(&mut self, confirm: &Confirm, canvas: &Canvas) -> Result<bool>;

    fn render_list(&mut self, list: &List, canvas: &Canvas) -> Result<Selection>;

    /// Runs the spinner's command to completion while animating.
    fn render_script(&mut self, spinner: &Spinner, canvas: &Canvas) -> Result<()>;

    fn render_empty_line(&mut self, count: usize) -> Result<()>;

    fn render_header(&mut self, widgets: &[Widget], canvas: &Canvas) -> Result<()> {
        render_read_only(self, Slot::Header, widgets, canvas)
    }

    /// Draws the body in order and returns the response of the last
    /// interactive widget, if any.
    fn render_body(
        &mut self,
        widgets: &[Widget],
        canvas: &Canvas,
        layout: BodyLayout,
    ) -> Result<Option<Response>> {
        let mut response = None;
        for widget in widgets {
            if layout.distribute_evenly {
                self.render_empty_line(leading_blank_lines(widget.kind(), layout.padding))?;
            }
            match widget {
                Widget::Text(text) => self.render_text(text, canvas)?,
                Widget::Confirm(confirm) => {
                    response = Some(Response::Confirmed(self.render_confirm(confirm, canvas)?));
                }
                Widget::List(list) => {
                    response = Some(Response::Selection(self.render_list(list, canvas)?));
                }
                Widget::Spinner(spinner) => self.render_script(spinner, canvas)?,
            }
        }
        Ok(response)
    }

    fn render_footer(&mut self, widgets: &[Widget], canvas: &Canvas) -> Result<()> {
        render_read_only(self, Slot::Footer, widgets, canvas)
    }
}

/// Reject anything but text in a read-only slot.
pub fn check_read_only(slot: Slot, widgets: &[Widget]) -> Result<()> {
    match widgets.iter().find(|w| w.kind().is_interactive()) {
        Some(widget) => Err(Error::InteractiveOutsideBody {
            slot,
            kind: widget.kind(),
        }),
        None => Ok(()),
    }
}

fn render_read_only<B: Backend + ?Sized>(
    backend: &mut B,
    slot: Slot,
    widgets: &[Widget],
    canvas: &Canvas,
) -> Result<()> {
    check_read_only(slot, widgets)?;
    for widget in widgets {
        if let Widget::Text(text) = widget {
            backend.render_text(text, canvas)?;
        }
    }
    Ok(())
}
