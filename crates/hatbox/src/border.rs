//! Border styles and the border applicator.
//!
//! A border is assembled from three layers of configuration, later wins
//! per key: a named preset ([`BorderStyle`]), explicit edge overrides, and
//! explicit corner overrides. Any subset of the four sides may be present
//! (a "partial border"), and every edge or corner character can carry its
//! own style or be resolved dynamically by hooks.
//!
//! # Preset Borders
//!
//! - [`BorderStyle::Single`] - `┌───┐`
//! - [`BorderStyle::Rounded`] - `╭───╮`
//! - [`BorderStyle::Thick`] - `┏━━━┓`
//! - [`BorderStyle::Double`] - `╔═══╗`
//! - [`BorderStyle::Ascii`] - `+---+`
//!
//! # Example
//!
//! ```rust
//! use hatbox::{apply_border, BorderConfig, BorderHooks, BorderStyle};
//!
//! let out = apply_border(
//!     "Hi",
//!     &BorderConfig::from(BorderStyle::Single),
//!     &BorderHooks::default(),
//! );
//! assert_eq!(out, "┌──┐\n│Hi│\n└──┘");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::hand::{Corners, Edges};
use crate::hook::{self, ColCtx, CornerCtx, Hook, RowCtx};
use crate::style::{Glyph, TextStyle};
use crate::visible_width;

/// A named border preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    /// Standard single-line border with 90-degree corners.
    Single,
    /// Single-line border with rounded corners.
    Rounded,
    /// Heavy single-line border.
    Thick,
    /// Double-line border.
    Double,
    /// ASCII-only border.
    Ascii,
}

/// The character set of a border preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderChars {
    pub top: char,
    pub right: char,
    pub bottom: char,
    pub left: char,
    pub top_left: char,
    pub top_right: char,
    pub bottom_right: char,
    pub bottom_left: char,
}

impl BorderStyle {
    /// The characters this preset draws with.
    pub fn chars(self) -> BorderChars {
        match self {
            Self::Single => BorderChars {
                top: '─',
                right: '│',
                bottom: '─',
                left: '│',
                top_left: '┌',
                top_right: '┐',
                bottom_right: '┘',
                bottom_left: '└',
            },
            Self::Rounded => BorderChars {
                top: '─',
                right: '│',
                bottom: '─',
                left: '│',
                top_left: '╭',
                top_right: '╮',
                bottom_right: '╯',
                bottom_left: '╰',
            },
            Self::Thick => BorderChars {
                top: '━',
                right: '┃',
                bottom: '━',
                left: '┃',
                top_left: '┏',
                top_right: '┓',
                bottom_right: '┛',
                bottom_left: '┗',
            },
            Self::Double => BorderChars {
                top: '═',
                right: '║',
                bottom: '═',
                left: '║',
                top_left: '╔',
                top_right: '╗',
                bottom_right: '╝',
                bottom_left: '╚',
            },
            Self::Ascii => BorderChars {
                top: '-',
                right: '|',
                bottom: '-',
                left: '|',
                top_left: '+',
                top_right: '+',
                bottom_right: '+',
                bottom_left: '+',
            },
        }
    }

    /// The preset's lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Rounded => "rounded",
            Self::Thick => "thick",
            Self::Double => "double",
            Self::Ascii => "ascii",
        }
    }
}

impl fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error parsing a border preset name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown border style '{0}'")]
pub struct BorderStyleParseError(pub String);

impl FromStr for BorderStyle {
    type Err = BorderStyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(Self::Single),
            "rounded" => Ok(Self::Rounded),
            "thick" => Ok(Self::Thick),
            "double" => Ok(Self::Double),
            "ascii" => Ok(Self::Ascii),
            other => Err(BorderStyleParseError(other.to_string())),
        }
    }
}

/// A border character: bare, or carrying its own style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BorderChar {
    Plain(char),
    Styled(Glyph),
}

impl BorderChar {
    /// The bare character.
    pub fn ch(&self) -> char {
        match self {
            Self::Plain(ch) => *ch,
            Self::Styled(glyph) => glyph.ch,
        }
    }

    /// The style, if this character carries one.
    pub fn style(&self) -> Option<&TextStyle> {
        match self {
            Self::Plain(_) => None,
            Self::Styled(glyph) => Some(&glyph.style),
        }
    }
}

impl From<char> for BorderChar {
    fn from(ch: char) -> Self {
        Self::Plain(ch)
    }
}

impl From<Glyph> for BorderChar {
    fn from(glyph: Glyph) -> Self {
        Self::Styled(glyph)
    }
}

/// A corner position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

/// Border configuration: preset base plus explicit overrides.
#[derive(Debug, Clone, Default)]
pub struct BorderConfig {
    /// Named preset providing the base character set.
    pub style: Option<BorderStyle>,
    /// Per-edge overrides, applied over the preset.
    pub edges: Edges<BorderChar>,
    /// Per-corner overrides, applied over the preset.
    pub corners: Corners<BorderChar>,
}

impl BorderConfig {
    /// An empty border configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the preset style.
    pub fn style(mut self, style: BorderStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Set edge overrides.
    pub fn edges(mut self, edges: impl Into<Edges<BorderChar>>) -> Self {
        self.edges = edges.into();
        self
    }

    /// Set corner overrides.
    pub fn corners(mut self, corners: impl Into<Corners<BorderChar>>) -> Self {
        self.corners = corners.into();
        self
    }
}

impl From<BorderStyle> for BorderConfig {
    fn from(style: BorderStyle) -> Self {
        Self::new().style(style)
    }
}

/// A hook for the left/right edges, invoked per content line.
pub type RowHook = Hook<RowCtx, char>;
/// A hook for the top/bottom edges, invoked per column.
pub type ColHook = Hook<ColCtx, char>;
/// A hook for a corner.
pub type CornerHook = Hook<CornerCtx, char>;

/// Registered border hooks.
#[derive(Debug, Clone, Default)]
pub struct BorderHooks {
    top: Vec<ColHook>,
    bottom: Vec<ColHook>,
    left: Vec<RowHook>,
    right: Vec<RowHook>,
    top_left: Vec<CornerHook>,
    top_right: Vec<CornerHook>,
    bottom_right: Vec<CornerHook>,
    bottom_left: Vec<CornerHook>,
}

impl BorderHooks {
    /// Register a top-edge hook.
    pub fn push_top(&mut self, hook: ColHook) {
        self.top.push(hook);
    }

    /// Register a bottom-edge hook.
    pub fn push_bottom(&mut self, hook: ColHook) {
        self.bottom.push(hook);
    }

    /// Register a left-edge hook.
    pub fn push_left(&mut self, hook: RowHook) {
        self.left.push(hook);
    }

    /// Register a right-edge hook.
    pub fn push_right(&mut self, hook: RowHook) {
        self.right.push(hook);
    }

    /// Register a corner hook.
    pub fn push_corner(&mut self, corner: Corner, hook: CornerHook) {
        self.corner_table_mut(corner).push(hook);
    }

    /// Returns true if no hook is registered.
    pub fn is_empty(&self) -> bool {
        self.top.is_empty()
            && self.bottom.is_empty()
            && self.left.is_empty()
            && self.right.is_empty()
            && self.top_left.is_empty()
            && self.top_right.is_empty()
            && self.bottom_right.is_empty()
            && self.bottom_left.is_empty()
    }

    fn corner_table(&self, corner: Corner) -> &[CornerHook] {
        match corner {
            Corner::TopLeft => &self.top_left,
            Corner::TopRight => &self.top_right,
            Corner::BottomRight => &self.bottom_right,
            Corner::BottomLeft => &self.bottom_left,
        }
    }

    fn corner_table_mut(&mut self, corner: Corner) -> &mut Vec<CornerHook> {
        match corner {
            Corner::TopLeft => &mut self.top_left,
            Corner::TopRight => &mut self.top_right,
            Corner::BottomRight => &mut self.bottom_right,
            Corner::BottomLeft => &mut self.bottom_left,
        }
    }
}

/// Emit a character wrapped in its style, if any.
fn emit(ch: char, style: Option<&TextStyle>) -> String {
    match style {
        Some(s) if !s.is_empty() => s.apply(&ch.to_string()),
        _ => ch.to_string(),
    }
}

/// A corner participates only when it has a static character or a hook.
fn corner_present(corners: &Corners<BorderChar>, hooks: &BorderHooks, corner: Corner) -> bool {
    let static_set = match corner {
        Corner::TopLeft => corners.top_left.is_some(),
        Corner::TopRight => corners.top_right.is_some(),
        Corner::BottomRight => corners.bottom_right.is_some(),
        Corner::BottomLeft => corners.bottom_left.is_some(),
    };
    static_set || !hooks.corner_table(corner).is_empty()
}

/// Resolve a corner to its final emitted string.
fn resolve_corner(corners: &Corners<BorderChar>, hooks: &BorderHooks, corner: Corner) -> String {
    let static_char = match corner {
        Corner::TopLeft => corners.top_left.as_ref(),
        Corner::TopRight => corners.top_right.as_ref(),
        Corner::BottomRight => corners.bottom_right.as_ref(),
        Corner::BottomLeft => corners.bottom_left.as_ref(),
    };
    let seed = static_char.map_or(' ', BorderChar::ch);
    let ch = hook::resolve(hooks.corner_table(corner), &CornerCtx { ch: seed }, seed);
    emit(ch, static_char.and_then(BorderChar::style))
}

/// Build a horizontal border run, one resolved character per column.
fn resolve_run(
    static_char: Option<&BorderChar>,
    hooks: &[ColHook],
    width: usize,
) -> String {
    let seed = static_char.map_or(' ', BorderChar::ch);
    let run: String = (0..width)
        .map(|col| {
            let ctx = ColCtx {
                col_index: col,
                total_cols: width,
                ch: seed,
            };
            hook::resolve(hooks, &ctx, seed)
        })
        .collect();
    match static_char.and_then(BorderChar::style) {
        Some(style) if !style.is_empty() => style.apply(&run),
        _ => run,
    }
}

/// Apply a border frame around a block of text.
///
/// Effective characters merge preset base, edge overrides, and corner
/// overrides, later wins per key. A side is present when the merged record
/// defines its edge or a hook is registered for it, so a border configured
/// purely through hooks still renders. A corner is emitted only when its
/// adjacent sides are present and a resolved corner character exists.
pub fn apply_border(text: &str, config: &BorderConfig, hooks: &BorderHooks) -> String {
    let preset = config.style.map(BorderStyle::chars);

    let base_edges = preset.map_or_else(Edges::none, |c| Edges {
        top: Some(BorderChar::Plain(c.top)),
        right: Some(BorderChar::Plain(c.right)),
        bottom: Some(BorderChar::Plain(c.bottom)),
        left: Some(BorderChar::Plain(c.left)),
    });
    let edges = base_edges.merge(config.edges.clone());

    let base_corners = preset.map_or_else(Corners::none, |c| Corners {
        top_left: Some(BorderChar::Plain(c.top_left)),
        top_right: Some(BorderChar::Plain(c.top_right)),
        bottom_right: Some(BorderChar::Plain(c.bottom_right)),
        bottom_left: Some(BorderChar::Plain(c.bottom_left)),
    });
    let corners = base_corners.merge(config.corners.clone());

    let has_top = edges.top.is_some() || !hooks.top.is_empty();
    let has_bottom = edges.bottom.is_some() || !hooks.bottom.is_empty();
    let has_left = edges.left.is_some() || !hooks.left.is_empty();
    let has_right = edges.right.is_some() || !hooks.right.is_empty();

    if !(has_top || has_bottom || has_left || has_right) {
        return text.to_string();
    }

    let mut lines: Vec<String> = text.split('\n').map(str::to_string).collect();
    let width = lines.iter().map(|l| visible_width(l)).max().unwrap_or(0);
    for line in &mut lines {
        let w = visible_width(line);
        if w < width {
            line.extend(std::iter::repeat(' ').take(width - w));
        }
    }

    let total = lines.len();
    let left_seed = edges.left.as_ref().map_or(' ', BorderChar::ch);
    let right_seed = edges.right.as_ref().map_or(' ', BorderChar::ch);
    let mut rows = Vec::with_capacity(total + 2);

    if has_top {
        let mut top_line = String::new();
        if has_left && corner_present(&corners, hooks, Corner::TopLeft) {
            top_line.push_str(&resolve_corner(&corners, hooks, Corner::TopLeft));
        }
        top_line.push_str(&resolve_run(edges.top.as_ref(), &hooks.top, width));
        if has_right && corner_present(&corners, hooks, Corner::TopRight) {
            top_line.push_str(&resolve_corner(&corners, hooks, Corner::TopRight));
        }
        rows.push(top_line);
    }

    for (index, line) in lines.into_iter().enumerate() {
        let mut row = String::new();
        if has_left {
            let ctx = RowCtx {
                line_index: index,
                total_lines: total,
                ch: left_seed,
            };
            let ch = hook::resolve(&hooks.left, &ctx, left_seed);
            row.push_str(&emit(ch, edges.left.as_ref().and_then(BorderChar::style)));
        }
        row.push_str(&line);
        if has_right {
            let ctx = RowCtx {
                line_index: index,
                total_lines: total,
                ch: right_seed,
            };
            let ch = hook::resolve(&hooks.right, &ctx, right_seed);
            row.push_str(&emit(ch, edges.right.as_ref().and_then(BorderChar::style)));
        }
        rows.push(row);
    }

    if has_bottom {
        let mut bottom_line = String::new();
        if has_left && corner_present(&corners, hooks, Corner::BottomLeft) {
            bottom_line.push_str(&resolve_corner(&corners, hooks, Corner::BottomLeft));
        }
        bottom_line.push_str(&resolve_run(edges.bottom.as_ref(), &hooks.bottom, width));
        if has_right && corner_present(&corners, hooks, Corner::BottomRight) {
            bottom_line.push_str(&resolve_corner(&corners, hooks, Corner::BottomRight));
        }
        rows.push(bottom_line);
    }

    rows.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_chars() {
        let single = BorderStyle::Single.chars();
        assert_eq!(single.top_left, '┌');
        assert_eq!(single.top, '─');

        let rounded = BorderStyle::Rounded.chars();
        assert_eq!(rounded.top_left, '╭');

        let ascii = BorderStyle::Ascii.chars();
        assert_eq!(ascii.top_left, '+');
    }

    #[test]
    fn test_from_str() {
        assert_eq!("double".parse::<BorderStyle>(), Ok(BorderStyle::Double));
        let err = "dashed".parse::<BorderStyle>().unwrap_err();
        assert_eq!(err.to_string(), "unknown border style 'dashed'");
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&BorderStyle::Rounded).unwrap();
        assert_eq!(json, "\"rounded\"");
    }

    #[test]
    fn test_full_border() {
        let out = apply_border(
            "Hi",
            &BorderConfig::from(BorderStyle::Single),
            &BorderHooks::default(),
        );
        assert_eq!(out, "┌──┐\n│Hi│\n└──┘");
    }

    #[test]
    fn test_multiline_normalizes_width() {
        let out = apply_border(
            "abc\nd",
            &BorderConfig::from(BorderStyle::Ascii),
            &BorderHooks::default(),
        );
        assert_eq!(out, "+---+\n|abc|\n|d  |\n+---+");
    }

    #[test]
    fn test_partial_border_top_only() {
        let config = BorderConfig::new().edges(Edges {
            top: Some(BorderChar::Plain('=')),
            ..Edges::default()
        });
        let out = apply_border("abc", &config, &BorderHooks::default());
        assert_eq!(out, "===\nabc");
    }

    #[test]
    fn test_edge_override_wins_over_preset() {
        let config = BorderConfig::from(BorderStyle::Single).edges(Edges {
            top: Some(BorderChar::Plain('=')),
            ..Edges::default()
        });
        let out = apply_border("x", &config, &BorderHooks::default());
        assert_eq!(out, "┌=┐\n│x│\n└─┘");
    }

    #[test]
    fn test_corner_override_wins_over_preset() {
        let config = BorderConfig::from(BorderStyle::Ascii).corners(Corners {
            top_left: Some(BorderChar::Plain('*')),
            ..Corners::default()
        });
        let out = apply_border("x", &config, &BorderHooks::default());
        assert_eq!(out, "*-+\n|x|\n+-+");
    }

    #[test]
    fn test_hook_only_side_renders() {
        let mut hooks = BorderHooks::default();
        hooks.push_left(RowHook::literal('>'));
        let out = apply_border("a\nb", &BorderConfig::new(), &hooks);
        assert_eq!(out, ">a\n>b");
    }

    #[test]
    fn test_row_hook_varies_per_line() {
        let mut hooks = BorderHooks::default();
        hooks.push_left(RowHook::generator(|ctx: &RowCtx| {
            if ctx.line_index == 0 { '>' } else { ctx.ch }
        }));
        let config = BorderConfig::new().edges(Edges {
            left: Some(BorderChar::Plain('|')),
            ..Edges::default()
        });
        let out = apply_border("a\nb", &config, &hooks);
        assert_eq!(out, ">a\n|b");
    }

    #[test]
    fn test_col_hook_varies_per_column() {
        let mut hooks = BorderHooks::default();
        hooks.push_top(ColHook::generator(|ctx: &ColCtx| {
            if ctx.col_index % 2 == 0 { '-' } else { '+' }
        }));
        let out = apply_border("abcd", &BorderConfig::new(), &hooks);
        assert_eq!(out, "-+-+\nabcd");
    }

    #[test]
    fn test_styled_edge_independent_of_content() {
        let config = BorderConfig::new().edges(Edges {
            left: Some(BorderChar::Styled(Glyph::new(
                '│',
                TextStyle::new().bold(),
            ))),
            ..Edges::default()
        });
        let out = apply_border("x", &config, &BorderHooks::default());
        assert_eq!(out, "\x1b[1m│\x1b[0mx");
    }

    #[test]
    fn test_corner_needs_adjacent_edges() {
        // A corner with both adjacent edges missing is never emitted.
        let config = BorderConfig::new()
            .edges(Edges {
                top: Some(BorderChar::Plain('-')),
                ..Edges::default()
            })
            .corners(Corners {
                top_left: Some(BorderChar::Plain('*')),
                ..Corners::default()
            });
        let out = apply_border("ab", &config, &BorderHooks::default());
        assert_eq!(out, "--\nab");
    }

    #[test]
    fn test_empty_border_config_is_identity() {
        let out = apply_border("ab", &BorderConfig::new(), &BorderHooks::default());
        assert_eq!(out, "ab");
    }
}
