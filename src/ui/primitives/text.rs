use std::fmt;

use crossterm::style::{Color, Stylize};

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticColor {
    Success,
    Error,
    Warning,
    Info,
    Dim,
}

impl SemanticColor {
    fn color(self) -> Color {
        match self {
            SemanticColor::Success => theme::colors::SUCCESS,
            SemanticColor::Error => theme::colors::ERROR,
            SemanticColor::Warning => theme::colors::WARNING,
            SemanticColor::Info => theme::colors::INFO,
            SemanticColor::Dim => theme::colors::DIM,
        }
    }
}

/// Text with an optional semantic color, rendered plain when color is off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredText {
    text: String,
    color: Option<SemanticColor>,
    bold: bool,
    reverse: bool,
}

impl ColoredText {
    fn new(text: impl Into<String>, color: Option<SemanticColor>) -> Self {
        Self {
            text: text.into(),
            color,
            bold: false,
            reverse: false,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, None)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, Some(SemanticColor::Success))
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, Some(SemanticColor::Error))
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(text, Some(SemanticColor::Warning))
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, Some(SemanticColor::Info))
    }

    pub fn dim(text: impl Into<String>) -> Self {
        Self::new(text, Some(SemanticColor::Dim))
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Inverse video, used for the active row and the selected section tab
    pub fn reverse(mut self) -> Self {
        self.reverse = true;
        self
    }

    pub fn render(&self, supports_color: bool) -> String {
        if !supports_color {
            return self.text.clone();
        }

        let mut styled = self.text.as_str().stylize();
        if let Some(color) = self.color {
            styled = styled.with(color.color());
        }
        if self.bold {
            styled = styled.bold();
        }
        if self.reverse {
            styled = styled.reverse();
        }
        format!("{}", styled)
    }
}

impl fmt::Display for ColoredText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// `[label]`-style tag shown after a file name (version, date, score).
pub fn tag(label: &str, supports_color: bool) -> String {
    ColoredText::dim(format!("[{}]", label)).render(supports_color)
}
