#![forbid(unsafe_code)]
// Allow these clippy lints for API ergonomics and terminal layout code
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::manual_repeat_n)]
#![allow(clippy::new_without_default)]

//! # Hatbox
//!
//! A terminal box-model layout engine: nest boxes of text, style them,
//! and render the tree to a single string.
//!
//! Hatbox lays out content the way CSS lays out boxes, in logical axes
//! (main = flow direction, cross = perpendicular):
//! - **Padding and margins** with CSS-like shorthand and per-line dynamic
//!   overrides ("hooks")
//! - **Borders** from presets or explicit edge/corner characters, with
//!   partial sides and independent border styling
//! - **Spans**: absolute or percentage-of-parent sizing with min/max
//!   clamping
//! - **Composition**: stack list items vertically or zip them into
//!   side-by-side columns, recursing into nested frames
//!
//! ## Quick Start
//!
//! ```rust
//! use hatbox::{BorderStyle, Frame};
//!
//! let card = Frame::new("Hello, Hatbox!")
//!     .padding((1, 2))
//!     .border(BorderStyle::Rounded);
//!
//! println!("{}", card.render());
//! ```
//!
//! ## Layering order
//!
//! Rendering recurses depth-first into content, then layers outside-in:
//! content → span → padding → border → margin. Each layer is a pure
//! function from `(String, config)` to `String`; the layer functions
//! ([`enforce_span`], [`apply_inset`], [`apply_border`]) are exported so
//! a render can be reproduced by composing them by hand.
//!
//! ## Hooks
//!
//! Any spacing or border-character leaf can be resolved dynamically:
//!
//! ```rust
//! use hatbox::{Frame, Hook, InsetSlot, PadCtx};
//!
//! // Indent each line one step further than the last.
//! let stairs = Frame::new("a\nb\nc").padding_hook(
//!     InsetSlot::CrossStart,
//!     Hook::generator(|ctx: &PadCtx| ctx.line.map_or(0, |l| l.index)),
//! );
//! assert_eq!(stairs.render(), "a\n b\n  c");
//! ```
//!
//! Rendering is one-way by design: there is no parser for rendered
//! output, so the reverse direction fails at compile time rather than at
//! runtime.

pub mod border;
pub mod color;
pub mod content;
pub mod frame;
pub mod hand;
pub mod hook;
pub mod inset;
pub mod span;
pub mod style;

// Re-exports
pub use border::{
    apply_border, BorderChar, BorderChars, BorderConfig, BorderHooks, BorderStyle,
    BorderStyleParseError, ColHook, Corner, CornerHook, RowHook,
};
pub use color::Color;
pub use content::{render_content, Content, Gap, Item, Orientation, RenderContext, StyledText};
pub use frame::{Frame, FrameHooks};
pub use hand::{AxisEdges, Corners, Edges};
pub use hook::{ColCtx, CornerCtx, Hook, LinePos, PadCtx, RowCtx};
pub use inset::{apply_inset, InsetHooks, InsetSlot, PadHook};
pub use span::{enforce_span, AxisRange, AxisSpan, Span, SpanRange};
pub use style::{Attrs, Glyph, TextStyle};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::border::{BorderChar, BorderConfig, BorderStyle, Corner};
    pub use crate::content::{Content, Gap, Item, Orientation, RenderContext, StyledText};
    pub use crate::frame::Frame;
    pub use crate::hand::{AxisEdges, Corners, Edges};
    pub use crate::hook::{Hook, PadCtx};
    pub use crate::inset::InsetSlot;
    pub use crate::span::{AxisSpan, Span, SpanRange};
    pub use crate::style::{Glyph, TextStyle};
}

// Convenience constructors

/// Create a frame holding the given content.
///
/// This is equivalent to `Frame::new(content)`.
pub fn frame(content: impl Into<Content>) -> Frame {
    Frame::new(content)
}

/// Calculate the visible width of a single line (excluding ANSI escapes).
pub fn visible_width(s: &str) -> usize {
    let mut width = 0;
    #[derive(Clone, Copy, PartialEq)]
    enum State {
        Normal,
        Esc,
        Csi,
        Osc,
    }
    let mut state = State::Normal;

    for c in s.chars() {
        match state {
            State::Normal => {
                if c == '\x1b' {
                    state = State::Esc;
                } else {
                    width += unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
                }
            }
            State::Esc => {
                if c == '[' {
                    state = State::Csi;
                } else if c == ']' {
                    state = State::Osc;
                } else {
                    // Simple escapes are a single char after ESC.
                    state = State::Normal;
                }
            }
            State::Csi => {
                // CSI sequence: [params] [intermediate] final
                // Final byte is 0x40-0x7E (@ to ~)
                if ('@'..='~').contains(&c) {
                    state = State::Normal;
                }
            }
            State::Osc => {
                if c == '\x07' {
                    state = State::Normal;
                } else if c == '\x1b' {
                    // ST (ESC \) terminates: handle the backslash as Esc.
                    state = State::Esc;
                }
            }
        }
    }

    width
}

/// Get the width of the widest line in a string.
pub fn width(s: &str) -> usize {
    s.lines().map(visible_width).max().unwrap_or(0)
}

/// Get the number of lines in a string.
pub fn height(s: &str) -> usize {
    s.lines().count().max(1)
}
