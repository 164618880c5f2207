//! Vertical layout arithmetic.
//!
//! Body widgets are spread over the terminal height by inserting the same
//! number of blank lines before each of them. A spinner is drawn over by the
//! next spinner, so only the first one counts: heights and slots are summed up
//! to and including the first [`Widget::Spinner`] and ignored after it.

use crate::component::{Widget, WidgetKind};

/// Blank lines taken off the padding in front of a confirm prompt.
///
/// Tuned by eye against gum's confirm output, which draws an extra line of its own.
pub const CONFIRM_PADDING_DISCOUNT: usize = 1;

/// Widgets that take part in the layout: everything up to and including the
/// first spinner.
fn counted(widgets: &[Widget]) -> &[Widget] {
    match widgets
        .iter()
        .position(|w| w.kind() == WidgetKind::Spinner)
    {
        Some(index) => &widgets[..=index],
        None => widgets,
    }
}

/// Sum of the header heights.
pub fn header_height(widgets: &mut [Widget]) -> usize {
    widgets
        .iter_mut()
        .map(|w| {
            w.update_dimensions();
            w.size().height
        })
        .sum()
}

/// Sum of the body heights, stopping after the first spinner.
pub fn body_height(widgets: &mut [Widget]) -> usize {
    let end = counted(widgets).len();
    widgets[..end]
        .iter_mut()
        .map(|w| {
            w.update_dimensions();
            w.size().height
        })
        .sum()
}

/// Number of body widgets sharing the padding, stopping after the first spinner.
pub fn slot_count(widgets: &[Widget]) -> usize {
    counted(widgets).len()
}

/// Blank lines per slot: `floor((canvas - body - header) / (slots + 1))`,
/// clamped at zero when the content overflows the canvas.
pub fn slot_padding(canvas_height: usize, header: usize, body: usize, slots: usize) -> usize {
    canvas_height.saturating_sub(body).saturating_sub(header) / (slots + 1)
}

/// Blank lines to emit before a body widget.
pub fn leading_blank_lines(kind: WidgetKind, padding: usize) -> usize {
    match kind {
        WidgetKind::Confirm => padding.saturating_sub(CONFIRM_PADDING_DISCOUNT),
        _ => padding,
    }
}
