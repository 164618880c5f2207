use super::style::{content_len, Color, Style};
use super::Size;

/// Lines taken by the prompt and the button row.
const CONFIRM_LINES: usize = 3;

/// Foreground and background of a button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonColors {
    pub fg: Color,
    pub bg: Color,
}

/// A yes/no prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirm {
    pub prompt: String,
    pub affirmative: String,
    pub negative: String,
    pub button: ButtonColors,
    pub selected_button: ButtonColors,
    pub style: Style,
    size: Size,
}

impl Confirm {
    pub fn new(prompt: impl Into<String>) -> Self {
        let mut widget = Self {
            prompt: prompt.into(),
            affirmative: "Yes".to_string(),
            negative: "No".to_string(),
            button: ButtonColors {
                fg: Color::WHITE,
                bg: Color::BLACK,
            },
            selected_button: ButtonColors {
                fg: Color::BLACK,
                bg: Color::WHITE,
            },
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

    pub fn with_labels(mut self, affirmative: impl Into<String>, negative: impl Into<String>) -> Self {
        self.affirmative = affirmative.into();
        self.negative = negative.into();
        self
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn update_dimensions(&mut self) {
        self.size = Size {
            width: self.style.horizontal_frame() + content_len(&self.prompt),
            height: self.style.vertical_frame() + CONFIRM_LINES,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{Border, Spacing};

    #[test]
    fn test_confirm_defaults() {
        let confirm = Confirm::new("Proceed?");
        assert_eq!(confirm.affirmative, "Yes");
        assert_eq!(confirm.negative, "No");
        assert_eq!(confirm.size(), Size::new(8, 3));
    }

    #[test]
    fn test_confirm_size_with_frame() {
        let mut confirm = Confirm::new("Continue?");
        confirm.style.padding = Spacing::new(1, 2);
        confirm.style.border = Some(Border::default());
        confirm.update_dimensions();
        assert_eq!(confirm.size(), Size::new(2 + 9 + 2, 4 + 3 + 2));
    }

    #[test]
    fn test_with_labels() {
        let confirm = Confirm::new("Install?").with_labels("Sure", "Nope");
        assert_eq!(confirm.affirmative, "Sure");
        assert_eq!(confirm.negative, "Nope");
    }
}
