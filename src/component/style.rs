//! Style attributes shared by every widget kind.

use crate::error::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Hex (`#RGB`, `#RRGGBB`) or ANSI 256 index.
const COLOR_PATTERN: &str =
    r"^(?:#(?:[0-9A-Fa-f]{3}|[0-9A-Fa-f]{6})|25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])$";

/// A colour understood by the rendering tool.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(Cow<'static, str>);

impl Color {
    /// Parse and validate a colour string.
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        let pattern = Regex::new(COLOR_PATTERN).map_err(|_| Error::InvalidColor(value.clone()))?;
        if !pattern.is_match(&value) {
            return Err(Error::InvalidColor(value));
        }
        Ok(Self(Cow::Owned(value)))
    }

    /// Build a colour from a literal known to be valid (palette tables).
    pub const fn from_static(value: &'static str) -> Self {
        Self(Cow::Borrowed(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub const WHITE: Color = Color::from_static("#FFFFFF");
    pub const BLACK: Color = Color::from_static("#000000");
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.0.into_owned()
    }
}

/// Horizontal and vertical spacing, in columns and lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spacing {
    pub x: usize,
    pub y: usize,
}

impl Spacing {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alignment {
    Left,
    #[default]
    Center,
    Right,
}

impl Alignment {
    pub fn as_str(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BorderType {
    None,
    Hidden,
    Normal,
    Rounded,
    #[default]
    Thick,
    Double,
}

impl BorderType {
    pub fn as_str(self) -> &'static str {
        match self {
            BorderType::None => "none",
            BorderType::Hidden => "hidden",
            BorderType::Normal => "normal",
            BorderType::Rounded => "rounded",
            BorderType::Thick => "thick",
            BorderType::Double => "double",
        }
    }
}

/// A border drawn around a widget. Adds one column/line on every side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Border {
    pub kind: BorderType,
    pub fg: Color,
}

impl Default for Border {
    fn default() -> Self {
        Self {
            kind: BorderType::Thick,
            fg: Color::WHITE,
        }
    }
}

/// Attributes common to every widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    pub padding: Spacing,
    pub margin: Spacing,
    pub border: Option<Border>,
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
    pub italic: bool,
    pub alignment: Alignment,
    /// Stretch the widget over the full canvas width.
    pub stretch: bool,
    /// Explicit width, used when not stretching. `None` lets the content decide.
    pub width: Option<usize>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            padding: Spacing::default(),
            margin: Spacing::default(),
            border: None,
            fg: Some(Color::WHITE),
            bg: None,
            bold: false,
            italic: false,
            alignment: Alignment::Center,
            stretch: true,
            width: None,
        }
    }
}

impl Style {
    pub fn has_border(&self) -> bool {
        self.border.is_some()
    }

    /// Columns taken by padding, margin and border around the content.
    pub fn horizontal_frame(&self) -> usize {
        self.padding.x * 2 + self.margin.x * 2 + self.border_extent()
    }

    /// Lines taken by padding, margin and border around the content.
    pub fn vertical_frame(&self) -> usize {
        self.padding.y * 2 + self.margin.y * 2 + self.border_extent()
    }

    /// The width handed to the rendering tool, if any.
    pub fn resolved_width(&self, canvas_width: usize) -> Option<usize> {
        if self.stretch {
            Some(canvas_width)
        } else {
            self.width.filter(|w| *w != 0)
        }
    }

    fn border_extent(&self) -> usize {
        if self.has_border() {
            2
        } else {
            0
        }
    }
}

/// Character count, the unit every size formula is expressed in.
pub(crate) fn content_len(s: &str) -> usize {
    s.chars().count()
}
