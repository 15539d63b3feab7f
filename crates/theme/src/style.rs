use crossterm::style::{Color, Stylize};

/// Visual settings for one logical output section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub color: Color,
    pub bold:  bool,
}

impl TextStyle {
    pub const fn plain(color: Color) -> Self {
        Self { color, bold: false }
    }

    pub const fn bold(color: Color) -> Self {
        Self { color, bold: true }
    }

    /// Wrap `text` in the escape sequences for this style.
    pub fn apply(&self, text: &str) -> String {
        let styled = text.with(self.color);
        if self.bold {
            styled.bold().to_string()
        } else {
            styled.to_string()
        }
    }
}
