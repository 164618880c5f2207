use super::style::{content_len, Color, Style};
use super::Size;

/// Styling for the optional line above a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    /// Blank lines between the title and the first item.
    pub padding: usize,
}

impl Default for Title {
    fn default() -> Self {
        Self {
            text: String::new(),
            bold: false,
            italic: false,
            fg: Some(Color::WHITE),
            bg: None,
            padding: 0,
        }
    }
}

/// A selectable list of items.
///
/// `limit` is the maximum number of items the user may pick: `1` is a single
/// choice, `0` is unlimited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List {
    pub items: Vec<String>,
    pub limit: usize,
    /// Visible rows. `None` or `Some(0)` shows the whole list.
    pub height: Option<usize>,
    pub title: Title,
    pub cursor: String,
    pub cursor_fg: Color,
    pub cursor_bold: bool,
    pub selected_fg: Color,
    pub style: Style,
    size: Size,
}

impl List {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut widget = Self {
            items: items.into_iter().map(Into::into).collect(),
            limit: 1,
            height: None,
            title: Title::default(),
            cursor: ">".to_string(),
            cursor_fg: Color::WHITE,
            cursor_bold: true,
            selected_fg: Color::WHITE,
            style: Style::default(),
            size: Size::default(),
        };
        widget.update_dimensions();
        widget
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self.update_dimensions();
        self
    }

    pub fn with_title(mut self, text: impl Into<String>, padding: usize) -> Self {
        self.title.text = text.into();
        self.title.padding = padding;
        self.update_dimensions();
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self.update_dimensions();
        self
    }

    pub fn is_single_select(&self) -> bool {
        self.limit == 1
    }

    pub fn has_title(&self) -> bool {
        !self.title.text.is_empty()
    }

    /// Width of the widest item, plus the selection marker on multi-select lists.
    pub fn widest_item(&self) -> usize {
        let widest = self
            .items
            .iter()
            .map(String::as_str)
            .map(content_len)
            .max()
            .unwrap_or(0);
        if self.is_single_select() {
            widest
        } else {
            widest + 1
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn update_dimensions(&mut self) {
        let title_lines = usize::from(self.has_title());
        self.size = Size {
            width: self.style.horizontal_frame() + self.widest_item(),
            height: self.style.vertical_frame()
                + self.items.len()
                + self.title.padding
                + title_lines,
        };
    }
}
