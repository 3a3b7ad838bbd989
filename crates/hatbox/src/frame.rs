//! The frame value and the render pipeline.
//!
//! A [`Frame`] bundles content with styling directives: orientation,
//! padding, margin, border, span constraints, and inter-item gaps.
//! Rendering recurses depth-first into content and then layers the
//! transformations outside-in, in a fixed order:
//!
//! **content → span → padding → border → margin**
//!
//! Each layer is a pure function from `(String, config)` to `String`; the
//! order is the defining contract of the engine and is never reordered.
//!
//! # Example
//!
//! ```rust
//! use hatbox::{BorderStyle, Frame};
//!
//! let out = Frame::new("Hi")
//!     .padding((1, 2))
//!     .border(BorderStyle::Single)
//!     .render();
//! assert_eq!(out, "┌──────┐\n│      │\n│  Hi  │\n│      │\n└──────┘");
//! ```

use std::fmt;

use tracing::trace;

use crate::border::{
    apply_border, BorderConfig, BorderHooks, ColHook, Corner, CornerHook, RowHook,
};
use crate::content::{render_content, Content, Gap, Orientation, RenderContext};
use crate::hand::AxisEdges;
use crate::inset::{apply_inset, InsetHooks, InsetSlot, PadHook};
use crate::span::{enforce_span, AxisRange, AxisSpan};

/// Registered hooks for one frame, carried alongside the static
/// configuration. Populated only by the mutating registration methods.
#[derive(Debug, Clone, Default)]
pub struct FrameHooks {
    pub padding: InsetHooks,
    pub margin: InsetHooks,
    pub border: BorderHooks,
}

/// A box of content with styling directives.
#[derive(Debug, Clone)]
pub struct Frame {
    content: Content,
    orientation: Orientation,
    padding: AxisEdges<usize>,
    margin: AxisEdges<usize>,
    border: Option<BorderConfig>,
    span: AxisSpan,
    span_range: AxisRange,
    gap: Gap,
    hooks: FrameHooks,
}

impl Frame {
    /// Creates a frame holding the given content.
    pub fn new(content: impl Into<Content>) -> Self {
        Self {
            content: content.into(),
            orientation: Orientation::default(),
            padding: AxisEdges::none(),
            margin: AxisEdges::none(),
            border: None,
            span: AxisSpan::default(),
            span_range: AxisRange::default(),
            gap: Gap::default(),
            hooks: FrameHooks::default(),
        }
    }

    // ==================== Value-returning configuration ====================
    //
    // Each method delegates to its mutating counterpart on the moved value.

    /// Set the orientation.
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.set_orientation(orientation);
        self
    }

    /// Set padding from shorthand or an explicit record.
    pub fn padding(mut self, padding: impl Into<AxisEdges<usize>>) -> Self {
        self.set_padding(padding);
        self
    }

    /// Set margin from shorthand or an explicit record.
    pub fn margin(mut self, margin: impl Into<AxisEdges<usize>>) -> Self {
        self.set_margin(margin);
        self
    }

    /// Set the border configuration.
    pub fn border(mut self, border: impl Into<BorderConfig>) -> Self {
        self.set_border(border);
        self
    }

    /// Set the desired span per axis.
    pub fn span(mut self, span: impl Into<AxisSpan>) -> Self {
        self.set_span(span);
        self
    }

    /// Set span-range constraints per axis.
    pub fn span_range(mut self, range: impl Into<AxisRange>) -> Self {
        self.set_span_range(range);
        self
    }

    /// Set the inter-item gap.
    pub fn gap(mut self, gap: impl Into<Gap>) -> Self {
        self.set_gap(gap);
        self
    }

    /// Register a padding hook on a logical slot.
    pub fn padding_hook(mut self, slot: InsetSlot, hook: PadHook) -> Self {
        self.push_padding_hook(slot, hook);
        self
    }

    /// Register a margin hook on a logical slot.
    pub fn margin_hook(mut self, slot: InsetSlot, hook: PadHook) -> Self {
        self.push_margin_hook(slot, hook);
        self
    }

    /// Register a top-edge border hook.
    pub fn border_top_hook(mut self, hook: ColHook) -> Self {
        self.push_border_top_hook(hook);
        self
    }

    /// Register a bottom-edge border hook.
    pub fn border_bottom_hook(mut self, hook: ColHook) -> Self {
        self.push_border_bottom_hook(hook);
        self
    }

    /// Register a left-edge border hook.
    pub fn border_left_hook(mut self, hook: RowHook) -> Self {
        self.push_border_left_hook(hook);
        self
    }

    /// Register a right-edge border hook.
    pub fn border_right_hook(mut self, hook: RowHook) -> Self {
        self.push_border_right_hook(hook);
        self
    }

    /// Register a corner border hook.
    pub fn border_corner_hook(mut self, corner: Corner, hook: CornerHook) -> Self {
        self.push_border_corner_hook(corner, hook);
        self
    }

    // ==================== Mutating configuration ====================

    /// Set the orientation in place.
    pub fn set_orientation(&mut self, orientation: Orientation) -> &mut Self {
        self.orientation = orientation;
        self
    }

    /// Set padding in place.
    pub fn set_padding(&mut self, padding: impl Into<AxisEdges<usize>>) -> &mut Self {
        self.padding = padding.into();
        self
    }

    /// Set margin in place.
    pub fn set_margin(&mut self, margin: impl Into<AxisEdges<usize>>) -> &mut Self {
        self.margin = margin.into();
        self
    }

    /// Set the border in place.
    pub fn set_border(&mut self, border: impl Into<BorderConfig>) -> &mut Self {
        self.border = Some(border.into());
        self
    }

    /// Set the span in place.
    pub fn set_span(&mut self, span: impl Into<AxisSpan>) -> &mut Self {
        self.span = span.into();
        self
    }

    /// Set the span range in place.
    pub fn set_span_range(&mut self, range: impl Into<AxisRange>) -> &mut Self {
        self.span_range = range.into();
        self
    }

    /// Set the gap in place.
    pub fn set_gap(&mut self, gap: impl Into<Gap>) -> &mut Self {
        self.gap = gap.into();
        self
    }

    /// Append a padding hook in place.
    pub fn push_padding_hook(&mut self, slot: InsetSlot, hook: PadHook) -> &mut Self {
        self.hooks.padding.push(slot, hook);
        self
    }

    /// Append a margin hook in place.
    pub fn push_margin_hook(&mut self, slot: InsetSlot, hook: PadHook) -> &mut Self {
        self.hooks.margin.push(slot, hook);
        self
    }

    /// Append a top-edge border hook in place.
    pub fn push_border_top_hook(&mut self, hook: ColHook) -> &mut Self {
        self.hooks.border.push_top(hook);
        self
    }

    /// Append a bottom-edge border hook in place.
    pub fn push_border_bottom_hook(&mut self, hook: ColHook) -> &mut Self {
        self.hooks.border.push_bottom(hook);
        self
    }

    /// Append a left-edge border hook in place.
    pub fn push_border_left_hook(&mut self, hook: RowHook) -> &mut Self {
        self.hooks.border.push_left(hook);
        self
    }

    /// Append a right-edge border hook in place.
    pub fn push_border_right_hook(&mut self, hook: RowHook) -> &mut Self {
        self.hooks.border.push_right(hook);
        self
    }

    /// Append a corner border hook in place.
    pub fn push_border_corner_hook(&mut self, corner: Corner, hook: CornerHook) -> &mut Self {
        self.hooks.border.push_corner(corner, hook);
        self
    }

    // ==================== Queries ====================

    /// The frame's registered hooks.
    pub fn hooks(&self) -> &FrameHooks {
        &self.hooks
    }

    // ==================== Rendering ====================

    /// Render with no parent context: percentage spans stay unresolved and
    /// fall back to intrinsic size.
    pub fn render(&self) -> String {
        self.render_with(&RenderContext::none())
    }

    /// Render against parent-available space.
    ///
    /// Non-destructive and repeatable: the frame is read-only during the
    /// render, and nested frames receive `ctx` verbatim.
    pub fn render_with(&self, ctx: &RenderContext) -> String {
        let mut out = render_content(&self.content, self.orientation, ctx, self.gap);

        if !self.span.is_unset() || !self.span_range.is_unset() {
            let main = self
                .span
                .main
                .and_then(|span| span.resolve(ctx.available_main));
            let cross = self
                .span
                .cross
                .and_then(|span| span.resolve(ctx.available_cross));
            trace!(span.main = ?main, span.cross = ?cross, "span targets resolved");
            out = enforce_span(
                &out,
                main,
                cross,
                self.span_range.main.as_ref(),
                self.span_range.cross.as_ref(),
            );
        }

        if !self.padding.is_unset() || !self.hooks.padding.is_empty() {
            out = apply_inset(&out, &self.padding, &self.hooks.padding, self.orientation);
        }

        if self.border.is_some() || !self.hooks.border.is_empty() {
            let config = self.border.clone().unwrap_or_default();
            out = apply_border(&out, &config, &self.hooks.border);
        }

        if !self.margin.is_unset() || !self.hooks.margin.is_empty() {
            out = apply_inset(&out, &self.margin, &self.hooks.margin, self.orientation);
        }

        trace!(
            frame.width = crate::width(&out),
            frame.height = crate::height(&out),
            "frame rendered"
        );
        out
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
