//! Frame content and the list compositor.
//!
//! A frame's content is a plain string, a styled string, or an ordered
//! list whose items may themselves be nested frames. List items stack
//! along the main axis: vertically they are newline-joined, horizontally
//! they are zipped row by row into columns.

use crate::frame::Frame;
use crate::style::TextStyle;
use crate::visible_width;

/// Orientation of a frame's main axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Main axis runs down the rows (the default).
    #[default]
    Vertical,
    /// Main axis runs across the columns.
    Horizontal,
}

/// Spacing between list items, per logical axis.
///
/// The main slot separates items: newlines when stacking vertically,
/// spaces between columns when composing horizontally. The cross slot is
/// carried for shorthand symmetry and does not alter stacking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Gap {
    pub main: usize,
    pub cross: usize,
}

impl From<usize> for Gap {
    /// Single value: both axes.
    fn from(n: usize) -> Self {
        Self { main: n, cross: n }
    }
}

impl From<(usize, usize)> for Gap {
    /// Pair: `(main, cross)`.
    fn from((main, cross): (usize, usize)) -> Self {
        Self { main, cross }
    }
}

/// A run of text with a style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledText {
    pub text: String,
    pub style: TextStyle,
}

impl StyledText {
    /// Creates styled text.
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// What a frame holds.
#[derive(Debug, Clone)]
pub enum Content {
    /// A plain string, rendered verbatim.
    Text(String),
    /// A styled string.
    Styled(StyledText),
    /// An ordered list of items, composed along the main axis.
    List(Vec<Item>),
}

impl From<&str> for Content {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Content {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<StyledText> for Content {
    fn from(styled: StyledText) -> Self {
        Self::Styled(styled)
    }
}

impl From<Vec<Item>> for Content {
    fn from(items: Vec<Item>) -> Self {
        Self::List(items)
    }
}

/// One item of list content.
#[derive(Debug, Clone)]
pub enum Item {
    Text(String),
    Styled(StyledText),
    Frame(Frame),
}

impl From<&str> for Item {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Item {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<StyledText> for Item {
    fn from(styled: StyledText) -> Self {
        Self::Styled(styled)
    }
}

impl From<Frame> for Item {
    fn from(frame: Frame) -> Self {
        Self::Frame(frame)
    }
}

/// Parent-available space for percentage span resolution, in the child's
/// logical axes: lines on the main axis, character columns on the cross
/// axis.
///
/// Nested renders receive the context verbatim: percentage resolution is
/// transitively inherited, never recomputed per level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderContext {
    pub available_main: Option<usize>,
    pub available_cross: Option<usize>,
}

impl RenderContext {
    /// A context with space on both axes.
    pub fn new(main: usize, cross: usize) -> Self {
        Self {
            available_main: Some(main),
            available_cross: Some(cross),
        }
    }

    /// No parent space: percentage spans stay unresolved.
    pub fn none() -> Self {
        Self::default()
    }
}

/// Flatten content into a string, composing list items along the main
/// axis.
///
/// Nested frames render recursively with the same context passed down.
/// Vertical lists are joined with `1 + gap.main` newlines; horizontal
/// lists pad every item to the tallest item's height and its own widest
/// line, then zip rows with `gap.main` spaces between columns.
pub fn render_content(
    content: &Content,
    orientation: Orientation,
    ctx: &RenderContext,
    gap: Gap,
) -> String {
    match content {
        Content::Text(text) => text.clone(),
        Content::Styled(styled) => styled.style.apply(&styled.text),
        Content::List(items) => {
            let rendered: Vec<String> = items
                .iter()
                .map(|item| match item {
                    Item::Text(text) => text.clone(),
                    Item::Styled(styled) => styled.style.apply(&styled.text),
                    Item::Frame(frame) => frame.render_with(ctx),
                })
                .collect();
            match orientation {
                Orientation::Vertical => rendered.join(&"\n".repeat(1 + gap.main)),
                Orientation::Horizontal => zip_columns(&rendered, gap.main),
            }
        }
    }
}

/// Compose blocks side by side, one output line per row.
fn zip_columns(blocks: &[String], gap: usize) -> String {
    if blocks.is_empty() {
        return String::new();
    }

    let split: Vec<Vec<&str>> = blocks.iter().map(|b| b.split('\n').collect()).collect();
    let widths: Vec<usize> = split
        .iter()
        .map(|lines| lines.iter().map(|l| visible_width(l)).max().unwrap_or(0))
        .collect();
    let height = split.iter().map(Vec::len).max().unwrap_or(0);
    let gap_str = " ".repeat(gap);

    let mut out = Vec::with_capacity(height);
    for row in 0..height {
        let line: Vec<String> = split
            .iter()
            .zip(&widths)
            .map(|(lines, &width)| {
                let cell = lines.get(row).copied().unwrap_or("");
                let pad = width.saturating_sub(visible_width(cell));
                format!("{cell}{}", " ".repeat(pad))
            })
            .collect();
        out.push(line.join(&gap_str));
    }
    out.join("\n")
}
