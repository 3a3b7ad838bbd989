//! Text style definitions and the ANSI codec.
//!
//! A [`TextStyle`] collects boolean attributes and colors and knows how to
//! wrap text in the corresponding escape sequences. A [`Glyph`] is a single
//! character carrying its own style, used for border characters.
//!
//! # Example
//!
//! ```rust
//! use hatbox::TextStyle;
//!
//! let style = TextStyle::new().bold().foreground("#ff0000");
//! let out = style.apply("Hello");
//! assert!(out.starts_with("\x1b[1m"));
//! assert!(out.ends_with("\x1b[0m"));
//! ```

use bitflags::bitflags;

use crate::color::Color;

bitflags! {
    /// Boolean text attributes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attrs: u16 {
        const BOLD = 1 << 0;
        const FAINT = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const BLINK = 1 << 4;
        const REVERSE = 1 << 5;
        const STRIKETHROUGH = 1 << 6;
    }
}

/// SGR codes in the order attributes are emitted.
const ATTR_CODES: [(Attrs, &str); 7] = [
    (Attrs::BOLD, "\x1b[1m"),
    (Attrs::FAINT, "\x1b[2m"),
    (Attrs::ITALIC, "\x1b[3m"),
    (Attrs::UNDERLINE, "\x1b[4m"),
    (Attrs::BLINK, "\x1b[5m"),
    (Attrs::REVERSE, "\x1b[7m"),
    (Attrs::STRIKETHROUGH, "\x1b[9m"),
];

/// A style for a run of text: attributes plus optional colors.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextStyle {
    attrs: Attrs,
    fg: Option<Color>,
    bg: Option<Color>,
}

impl TextStyle {
    /// Creates a new empty style.
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Boolean Attributes ====================

    /// Enable bold text.
    pub fn bold(mut self) -> Self {
        self.attrs |= Attrs::BOLD;
        self
    }

    /// Enable faint/dim text.
    pub fn faint(mut self) -> Self {
        self.attrs |= Attrs::FAINT;
        self
    }

    /// Enable italic text.
    pub fn italic(mut self) -> Self {
        self.attrs |= Attrs::ITALIC;
        self
    }

    /// Enable underlined text.
    pub fn underline(mut self) -> Self {
        self.attrs |= Attrs::UNDERLINE;
        self
    }

    /// Enable blinking text.
    pub fn blink(mut self) -> Self {
        self.attrs |= Attrs::BLINK;
        self
    }

    /// Enable reverse video (swap fg/bg).
    pub fn reverse(mut self) -> Self {
        self.attrs |= Attrs::REVERSE;
        self
    }

    /// Enable strikethrough text.
    pub fn strikethrough(mut self) -> Self {
        self.attrs |= Attrs::STRIKETHROUGH;
        self
    }

    // ==================== Colors ====================

    /// Set the foreground color.
    pub fn foreground(mut self, color: impl Into<Color>) -> Self {
        self.fg = Some(color.into());
        self
    }

    /// Set the background color.
    pub fn background(mut self, color: impl Into<Color>) -> Self {
        self.bg = Some(color.into());
        self
    }

    // ==================== Queries ====================

    /// Returns true if no attribute or color is set.
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty() && self.fg.is_none() && self.bg.is_none()
    }

    /// The escape-sequence prefix this style opens with.
    pub fn sequence(&self) -> String {
        let mut seq = String::new();
        for (attr, code) in ATTR_CODES {
            if self.attrs.contains(attr) {
                seq.push_str(code);
            }
        }
        if let Some(ref fg) = self.fg {
            seq.push_str(&fg.to_ansi_fg());
        }
        if let Some(ref bg) = self.bg {
            seq.push_str(&bg.to_ansi_bg());
        }
        seq
    }

    // ==================== Rendering ====================

    /// Wrap `text` in this style's escape sequences.
    ///
    /// Styling is applied per line so styled text survives being sliced and
    /// recomposed by the layout passes. An empty style returns the text
    /// unchanged.
    pub fn apply(&self, text: &str) -> String {
        let seq = self.sequence();
        if seq.is_empty() || text.is_empty() {
            return text.to_string();
        }
        text.split('\n')
            .map(|line| format!("{seq}{line}\x1b[0m"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A single character with its own style, for border edges and corners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    /// The bare character.
    pub ch: char,
    /// Style applied when the character is emitted.
    pub style: TextStyle,
}

impl Glyph {
    /// Creates a styled character.
    pub fn new(ch: char, style: TextStyle) -> Self {
        Self { ch, style }
    }
}

impl From<char> for Glyph {
    fn from(ch: char) -> Self {
        Self {
            ch,
            style: TextStyle::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_style_is_identity() {
        let s = TextStyle::new();
        assert_eq!(s.apply("hello"), "hello");
    }

    #[test]
    fn test_bold_wraps_text() {
        let s = TextStyle::new().bold();
        assert_eq!(s.apply("hi"), "\x1b[1mhi\x1b[0m");
    }

    #[test]
    fn test_attr_sequence_order() {
        let s = TextStyle::new().strikethrough().bold();
        // Bold is always emitted before strikethrough regardless of call order.
        assert_eq!(s.sequence(), "\x1b[1m\x1b[9m");
    }

    #[test]
    fn test_colors_in_sequence() {
        let s = TextStyle::new().foreground("#ff0000").background("21");
        assert_eq!(s.sequence(), "\x1b[38;2;255;0;0m\x1b[48;5;21m");
    }

    #[test]
    fn test_apply_per_line() {
        let s = TextStyle::new().bold();
        assert_eq!(s.apply("a\nb"), "\x1b[1ma\x1b[0m\n\x1b[1mb\x1b[0m");
    }

    #[test]
    fn test_apply_empty_text() {
        let s = TextStyle::new().bold();
        assert_eq!(s.apply(""), "");
    }

    #[test]
    fn test_glyph_from_char() {
        let g = Glyph::from('│');
        assert_eq!(g.ch, '│');
        assert!(g.style.is_empty());
    }
}
