//! Visual attributes attached to elements.

pub use crossterm::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Row,
    #[default]
    Column,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
    pub reverse: bool,
}

impl TextStyle {
    pub const fn new() -> Self {
        Self {
            bold: false,
            dim: false,
            italic: false,
            underline: false,
            reverse: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub text_style: TextStyle,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.text_style.bold = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.text_style.dim = true;
        self
    }

    pub fn reverse(mut self) -> Self {
        self.text_style.reverse = true;
        self
    }

    /// Layer `other` on top of `self`. Colors set in `other` win; text
    /// attributes are combined.
    pub fn merge(self, other: Style) -> Self {
        Self {
            background: other.background.or(self.background),
            foreground: other.foreground.or(self.foreground),
            text_style: TextStyle {
                bold: self.text_style.bold || other.text_style.bold,
                dim: self.text_style.dim || other.text_style.dim,
                italic: self.text_style.italic || other.text_style.italic,
                underline: self.text_style.underline || other.text_style.underline,
                reverse: self.text_style.reverse || other.text_style.reverse,
            },
        }
    }
}
