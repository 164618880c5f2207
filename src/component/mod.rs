//! # Component Model
//!
//! Describes what can be drawn. Every widget carries a [`Style`] and a cached
//! [`Size`] that is recomputed by `update_dimensions()` from its current
//! attributes.
//!
//! ## Kinds
//!
//! | Kind | Content | Height |
//! |------|---------|--------|
//! | [`Text`] | a string | 1 |
//! | [`Confirm`] | prompt + button row | 3 |
//! | [`List`] | items, optional title | items + title padding + title |
//! | [`Spinner`] | message + command | 1 |
//!
//! Every height is extended by twice the vertical padding and margin, and by
//! two lines when bordered. Widths follow the same rule horizontally.

pub mod confirm;
pub mod list;
pub mod spinner;
pub mod style;
pub mod text;

pub use confirm::{ButtonColors, Confirm};
pub use list::{List, Title};
pub use spinner::{Spinner, SpinnerType};
pub use style::{Alignment, Border, BorderType, Color, Spacing, Style};
pub use text::Text;

use std::fmt;

/// Width in columns and height in lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Size {
    pub width: usize,
    pub height: usize,
}

impl Size {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

/// Discriminant of a [`Widget`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    Text,
    Confirm,
    List,
    Spinner,
}

impl WidgetKind {
    /// Whether drawing this kind waits on the user or on a command.
    pub fn is_interactive(self) -> bool {
        !matches!(self, WidgetKind::Text)
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WidgetKind::Text => "text",
            WidgetKind::Confirm => "confirm",
            WidgetKind::List => "list",
            WidgetKind::Spinner => "spinner",
        };
        f.write_str(name)
    }
}

/// Anything the renderer can lay out and hand to a backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Widget {
    Text(Text),
    Confirm(Confirm),
    List(List),
    Spinner(Spinner),
}

impl Widget {
    pub fn kind(&self) -> WidgetKind {
        match self {
            Widget::Text(_) => WidgetKind::Text,
            Widget::Confirm(_) => WidgetKind::Confirm,
            Widget::List(_) => WidgetKind::List,
            Widget::Spinner(_) => WidgetKind::Spinner,
        }
    }

    pub fn style(&self) -> &Style {
        match self {
            Widget::Text(w) => &w.style,
            Widget::Confirm(w) => &w.style,
            Widget::List(w) => &w.style,
            Widget::Spinner(w) => &w.style,
        }
    }

    pub fn style_mut(&mut self) -> &mut Style {
        match self {
            Widget::Text(w) => &mut w.style,
            Widget::Confirm(w) => &mut w.style,
            Widget::List(w) => &mut w.style,
            Widget::Spinner(w) => &mut w.style,
        }
    }

    /// Last computed size. Call [`Widget::update_dimensions`] after mutating.
    pub fn size(&self) -> Size {
        match self {
            Widget::Text(w) => w.size(),
            Widget::Confirm(w) => w.size(),
            Widget::List(w) => w.size(),
            Widget::Spinner(w) => w.size(),
        }
    }

    pub fn update_dimensions(&mut self) {
        match self {
            Widget::Text(w) => w.update_dimensions(),
            Widget::Confirm(w) => w.update_dimensions(),
            Widget::List(w) => w.update_dimensions(),
            Widget::Spinner(w) => w.update_dimensions(),
        }
    }
}

impl From<Text> for Widget {
    fn from(text: Text) -> Self {
        Widget::Text(text)
    }
}

impl From<Confirm> for Widget {
    fn from(confirm: Confirm) -> Self {
        Widget::Confirm(confirm)
    }
}

impl From<List> for Widget {
    fn from(list: List) -> Self {
        Widget::List(list)
    }
}

impl From<Spinner> for Widget {
    fn from(spinner: Spinner) -> Self {
        Widget::Spinner(spinner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(Widget::from(Text::new("a")).kind(), WidgetKind::Text);
        assert_eq!(Widget::from(Confirm::new("a")).kind(), WidgetKind::Confirm);
        assert_eq!(Widget::from(List::new(["a"])).kind(), WidgetKind::List);
        assert_eq!(Widget::from(Spinner::new(["true"])).kind(), WidgetKind::Spinner);
    }

    #[test]
    fn test_only_text_is_passive() {
        assert!(!WidgetKind::Text.is_interactive());
        assert!(WidgetKind::Confirm.is_interactive());
        assert!(WidgetKind::List.is_interactive());
        assert!(WidgetKind::Spinner.is_interactive());
    }

    #[test]
    fn test_update_through_style_mut() {
        let mut widget = Widget::from(Text::new("abc"));
        widget.style_mut().padding = Spacing::new(1, 1);
        assert_eq!(widget.size(), Size::new(3, 1));
        widget.update_dimensions();
        assert_eq!(widget.size(), Size::new(5, 3));
    }
}
