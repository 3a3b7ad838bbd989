//! Terminal color values.
//!
//! Colors are string-backed and accept two formats:
//! - Hex: `"#ff00ff"` or the short form `"#f0f"`
//! - ANSI 256: a numeric index such as `"196"`
//!
//! # Example
//!
//! ```rust
//! use hatbox::Color;
//!
//! let magenta = Color::from("#ff00ff");
//! assert_eq!(magenta.as_rgb(), Some((255, 0, 255)));
//!
//! let red = Color::from("196");
//! assert_eq!(red.as_ansi(), Some(196));
//! ```

use serde::{Deserialize, Serialize};

/// A color specified by hex string or ANSI-256 index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub String);

impl Color {
    /// Create a new color from a string.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Parse as RGB if this is a hex color.
    pub fn as_rgb(&self) -> Option<(u8, u8, u8)> {
        let raw = self.0.trim();
        let s = raw.strip_prefix('#')?;
        if s.len() == 6 {
            let r = u8::from_str_radix(&s[0..2], 16).ok()?;
            let g = u8::from_str_radix(&s[2..4], 16).ok()?;
            let b = u8::from_str_radix(&s[4..6], 16).ok()?;
            Some((r, g, b))
        } else if s.len() == 3 {
            let r = u8::from_str_radix(&s[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&s[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&s[2..3], 16).ok()? * 17;
            Some((r, g, b))
        } else {
            None
        }
    }

    /// Parse as an ANSI-256 color index.
    pub fn as_ansi(&self) -> Option<u8> {
        self.0.trim().parse::<u8>().ok()
    }

    /// Returns true if this color is a valid hex or ANSI value.
    pub fn is_valid(&self) -> bool {
        self.as_rgb().is_some() || self.as_ansi().is_some()
    }

    /// Foreground escape sequence for this color.
    ///
    /// Unparseable colors degrade to an empty sequence rather than erroring.
    pub fn to_ansi_fg(&self) -> String {
        if let Some((r, g, b)) = self.as_rgb() {
            format!("\x1b[38;2;{r};{g};{b}m")
        } else if let Some(n) = self.as_ansi() {
            format!("\x1b[38;5;{n}m")
        } else {
            String::new()
        }
    }

    /// Background escape sequence for this color.
    pub fn to_ansi_bg(&self) -> String {
        if let Some((r, g, b)) = self.as_rgb() {
            format!("\x1b[48;2;{r};{g};{b}m")
        } else if let Some(n) = self.as_ansi() {
            format!("\x1b[48;5;{n}m")
        } else {
            String::new()
        }
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Color {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_long_form() {
        let c = Color::from("#ff8000");
        assert_eq!(c.as_rgb(), Some((255, 128, 0)));
        assert!(c.is_valid());
    }

    #[test]
    fn test_hex_short_form() {
        let c = Color::from("#f0f");
        assert_eq!(c.as_rgb(), Some((255, 0, 255)));
    }

    #[test]
    fn test_ansi_index() {
        let c = Color::from("196");
        assert_eq!(c.as_ansi(), Some(196));
        assert_eq!(c.as_rgb(), None);
    }

    #[test]
    fn test_invalid_color_degrades() {
        let c = Color::from("not-a-color");
        assert!(!c.is_valid());
        assert_eq!(c.to_ansi_fg(), "");
        assert_eq!(c.to_ansi_bg(), "");
    }

    #[test]
    fn test_fg_escape() {
        assert_eq!(Color::from("#ff0000").to_ansi_fg(), "\x1b[38;2;255;0;0m");
        assert_eq!(Color::from("21").to_ansi_fg(), "\x1b[38;5;21m");
    }

    #[test]
    fn test_bg_escape() {
        assert_eq!(Color::from("#0000ff").to_ansi_bg(), "\x1b[48;2;0;0;255m");
    }

    #[test]
    fn test_serde_round_trip() {
        let c = Color::from("#1a2b3c");
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"#1a2b3c\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
