use super::style::{content_len, Color, Style};
use super::Size;

/// Columns taken by the spinner glyph and the gap after it.
const SPINNER_GLYPH_WIDTH: usize = 2;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SpinnerType {
    Line,
    #[default]
    Dot,
    MiniDot,
    Jump,
    Pulse,
    Points,
    Globe,
    Moon,
    Monkey,
    Meter,
    Hamburger,
}

impl SpinnerType {
    pub fn as_str(self) -> &'static str {
        match self {
            SpinnerType::Line => "line",
            SpinnerType::Dot => "dot",
            SpinnerType::MiniDot => "minidot",
            SpinnerType::Jump => "jump",
            SpinnerType::Pulse => "pulse",
            SpinnerType::Points => "points",
            SpinnerType::Globe => "globe",
            SpinnerType::Moon => "moon",
            SpinnerType::Monkey => "monkey",
            SpinnerType::Meter => "meter",
            SpinnerType::Hamburger => "hamburger",
        }
    }
}

/// An animated spinner shown while an external command runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spinner {
    pub message: String,
    pub command: Vec<String>,
    pub spinner: SpinnerType,
    pub spinner_fg: Color,
    pub style: Style,
    size: Size,
}

impl Spinner {
    pub fn new<I, S>(command: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_message(command, "Executing...")
    }

    pub fn with_message<I, S>(command: I, message: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut widget = Self {
            message: message.into(),
            command: command.into_iter().map(Into::into).collect(),
            spinner: SpinnerType::default(),
            spinner_fg: Color::WHITE,
            style: Style::default(),
            size: Size::default(),
        };
        widget.update_dimensions();
        widget
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self.update_dimensions();
        self
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn update_dimensions(&mut self) {
        self.size = Size {
            width: self.style.horizontal_frame() + SPINNER_GLYPH_WIDTH + content_len(&self.message),
            height: self.style.vertical_frame() + 1,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_message() {
        let spinner = Spinner::new(["sleep", "3"]);
        assert_eq!(spinner.message, "Executing...");
        assert_eq!(spinner.command, vec!["sleep", "3"]);
        assert_eq!(spinner.size(), Size::new(2 + 12, 1));
    }

    #[test]
    fn test_custom_message() {
        let spinner = Spinner::with_message(["true"], "Linking");
        assert_eq!(spinner.size().width, 9);
    }

    #[test]
    fn test_spinner_type_names() {
        assert_eq!(SpinnerType::default().as_str(), "dot");
        assert_eq!(SpinnerType::MiniDot.as_str(), "minidot");
        assert_eq!(SpinnerType::Hamburger.as_str(), "hamburger");
    }
}
