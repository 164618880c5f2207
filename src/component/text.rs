use super::style::{content_len, Style};
use super::Size;

/// A block of styled text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub text: String,
    pub style: Style,
    size: Size,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        let mut widget = Self {
            text: text.into(),
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
            width: self.style.horizontal_frame() + content_len(&self.text),
            height: self.style.vertical_frame() + 1,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{Border, Spacing};

    #[test]
    fn test_plain_text_size() {
        let text = Text::new("hello");
        assert_eq!(text.size(), Size::new(5, 1));
    }

    #[test]
    fn test_empty_text_has_one_line() {
        let text = Text::new("");
        assert_eq!(text.size(), Size::new(0, 1));
    }

    #[test]
    fn test_size_follows_mutation_after_update() {
        let mut text = Text::new("Nordic");
        text.style.padding = Spacing::new(1, 1);
        text.style.margin = Spacing::new(2, 0);
        text.style.border = Some(Border::default());
        // Stale until recomputed.
        assert_eq!(text.size(), Size::new(6, 1));

        text.update_dimensions();
        assert_eq!(text.size(), Size::new(2 + 4 + 6 + 2, 2 + 1 + 2));
    }
}
