//! Span resolution and enforcement.
//!
//! A [`Span`] is a frame's desired size along one logical axis, either an
//! absolute character count or a percentage of the parent's available
//! space. [`enforce_span`] applies resolved targets to a block of text.
//!
//! # Example
//!
//! ```rust
//! use hatbox::Span;
//!
//! assert_eq!(Span::Abs(12).resolve(None), Some(12));
//! assert_eq!(Span::Percent(50).resolve(Some(9)), Some(4));
//! // A percentage with no parent space stays unresolved.
//! assert_eq!(Span::Percent(50).resolve(None), None);
//! ```

use serde::{Deserialize, Serialize};

use crate::visible_width;

/// Desired size along one logical axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Span {
    /// An absolute character count.
    Abs(usize),
    /// A percentage of the parent's available space.
    Percent(u16),
}

impl Span {
    /// Resolve to a concrete size.
    ///
    /// A percentage resolves to `floor(available * pct / 100)`, or stays
    /// unresolved (`None`) when no parent space was supplied, in which
    /// case the caller falls back to the intrinsic size.
    pub fn resolve(&self, available: Option<usize>) -> Option<usize> {
        match *self {
            Self::Abs(n) => Some(n),
            Self::Percent(pct) => available.map(|space| space * pct as usize / 100),
        }
    }
}

/// Min/max constraints applied after span resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpanRange {
    pub min: Option<usize>,
    pub max: Option<usize>,
}

impl SpanRange {
    /// A range with both bounds.
    pub fn new(min: usize, max: usize) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// A lower bound only.
    pub fn at_least(min: usize) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// An upper bound only.
    pub fn at_most(max: usize) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    /// Clamp a resolved size to this range. The minimum wins when the
    /// bounds conflict.
    pub fn clamp(&self, n: usize) -> usize {
        let mut v = n;
        if let Some(max) = self.max {
            v = v.min(max);
        }
        if let Some(min) = self.min {
            v = v.max(min);
        }
        v
    }
}

/// Desired spans per logical axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AxisSpan {
    pub main: Option<Span>,
    pub cross: Option<Span>,
}

impl AxisSpan {
    /// Main-axis span only.
    pub fn main(span: Span) -> Self {
        Self {
            main: Some(span),
            cross: None,
        }
    }

    /// Cross-axis span only.
    pub fn cross(span: Span) -> Self {
        Self {
            main: None,
            cross: Some(span),
        }
    }

    /// Returns true if neither axis has a span.
    pub fn is_unset(&self) -> bool {
        self.main.is_none() && self.cross.is_none()
    }
}

impl From<Span> for AxisSpan {
    /// Single span: both axes.
    fn from(span: Span) -> Self {
        Self {
            main: Some(span),
            cross: Some(span),
        }
    }
}

impl From<(Span, Span)> for AxisSpan {
    /// Pair: `(main, cross)`.
    fn from((main, cross): (Span, Span)) -> Self {
        Self {
            main: Some(main),
            cross: Some(cross),
        }
    }
}

/// Span-range constraints per logical axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AxisRange {
    pub main: Option<SpanRange>,
    pub cross: Option<SpanRange>,
}

impl AxisRange {
    /// Main-axis range only.
    pub fn main(range: SpanRange) -> Self {
        Self {
            main: Some(range),
            cross: None,
        }
    }

    /// Cross-axis range only.
    pub fn cross(range: SpanRange) -> Self {
        Self {
            main: None,
            cross: Some(range),
        }
    }

    /// Returns true if neither axis has a range.
    pub fn is_unset(&self) -> bool {
        self.main.is_none() && self.cross.is_none()
    }
}

impl From<SpanRange> for AxisRange {
    /// Single range: both axes.
    fn from(range: SpanRange) -> Self {
        Self {
            main: Some(range),
            cross: Some(range),
        }
    }
}

impl From<(SpanRange, SpanRange)> for AxisRange {
    /// Pair: `(main, cross)`.
    fn from((main, cross): (SpanRange, SpanRange)) -> Self {
        Self {
            main: Some(main),
            cross: Some(cross),
        }
    }
}

/// Enforce resolved span targets on a block of text.
///
/// Per axis, the target is the desired size if given, else the intrinsic
/// size (line count on the main axis, max visible line width on the cross
/// axis), then clamped by the range. An axis with neither a desired size
/// nor a range is left untouched, so an unresolved percentage span
/// degrades to the intrinsic layout. The cross axis is applied first
/// (each line padded with trailing spaces to the target width, or
/// truncated from the right) and only then the main axis, so blank
/// filler lines match the final cross width, not the pre-resolution
/// width.
pub fn enforce_span(
    text: &str,
    main: Option<usize>,
    cross: Option<usize>,
    main_range: Option<&SpanRange>,
    cross_range: Option<&SpanRange>,
) -> String {
    let mut lines: Vec<String> = text.split('\n').map(str::to_string).collect();

    let intrinsic_cross = lines.iter().map(|l| visible_width(l)).max().unwrap_or(0);
    let mut filler_width = intrinsic_cross;
    if cross.is_some() || cross_range.is_some() {
        let mut cross_target = cross.unwrap_or(intrinsic_cross);
        if let Some(range) = cross_range {
            cross_target = range.clamp(cross_target);
        }
        for line in &mut lines {
            fit_line(line, cross_target);
        }
        filler_width = cross_target;
    }

    if main.is_some() || main_range.is_some() {
        let mut main_target = main.unwrap_or(lines.len());
        if let Some(range) = main_range {
            main_target = range.clamp(main_target);
        }
        if lines.len() > main_target {
            lines.truncate(main_target);
        } else {
            let filler = " ".repeat(filler_width);
            while lines.len() < main_target {
                lines.push(filler.clone());
            }
        }
    }

    lines.join("\n")
}

/// Pad a line with trailing spaces to the target width, or truncate it
/// from the right. Escape sequences are kept but not re-terminated when a
/// truncation cut lands inside styled text.
fn fit_line(line: &mut String, target: usize) {
    let current = visible_width(line);
    if current < target {
        line.extend(std::iter::repeat(' ').take(target - current));
    } else if current > target {
        let mut out = String::with_capacity(line.len());
        let mut width = 0;
        let mut in_escape = false;
        for c in line.chars() {
            if in_escape {
                out.push(c);
                if c == 'm' {
                    in_escape = false;
                }
                continue;
            }
            if c == '\x1b' {
                out.push(c);
                in_escape = true;
                continue;
            }
            let cw = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
            if width + cw > target {
                break;
            }
            out.push(c);
            width += cw;
        }
        *line = out;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{height, width};

    #[test]
    fn test_resolve_absolute() {
        assert_eq!(Span::Abs(7).resolve(None), Some(7));
        assert_eq!(Span::Abs(7).resolve(Some(100)), Some(7));
    }

    #[test]
    fn test_resolve_percentage_floors() {
        assert_eq!(Span::Percent(50).resolve(Some(9)), Some(4));
        assert_eq!(Span::Percent(100).resolve(Some(9)), Some(9));
        assert_eq!(Span::Percent(33).resolve(Some(10)), Some(3));
    }

    #[test]
    fn test_resolve_percentage_without_parent() {
        assert_eq!(Span::Percent(50).resolve(None), None);
    }

    #[test]
    fn test_range_clamp() {
        let r = SpanRange::new(2, 5);
        assert_eq!(r.clamp(1), 2);
        assert_eq!(r.clamp(3), 3);
        assert_eq!(r.clamp(9), 5);
    }

    #[test]
    fn test_range_min_wins_on_conflict() {
        let r = SpanRange::new(6, 2);
        assert_eq!(r.clamp(4), 6);
    }

    #[test]
    fn test_enforce_pads_cross() {
        let out = enforce_span("ab\nc", None, Some(4), None, None);
        assert_eq!(out, "ab  \nc   ");
    }

    #[test]
    fn test_enforce_truncates_cross() {
        let out = enforce_span("abcdef", None, Some(3), None, None);
        assert_eq!(out, "abc");
    }

    #[test]
    fn test_enforce_extends_main_with_final_cross_width() {
        // Filler lines must match the resolved cross width, not the
        // intrinsic width of the input.
        let out = enforce_span("ab", Some(3), Some(5), None, None);
        assert_eq!(out, "ab   \n     \n     ");
    }

    #[test]
    fn test_enforce_drops_trailing_lines() {
        let out = enforce_span("a\nb\nc", Some(2), None, None, None);
        assert_eq!(out, "a\nb");
    }

    #[test]
    fn test_enforce_range_only() {
        let out = enforce_span("abcdef", None, None, None, Some(&SpanRange::at_most(4)));
        assert_eq!(out, "abcd");
        let out = enforce_span("ab", None, None, Some(&SpanRange::at_least(3)), None);
        assert_eq!(height(&out), 3);
        assert_eq!(width(&out), 2);
    }

    #[test]
    fn test_enforce_inactive_axes_untouched() {
        // Ragged lines stay ragged when neither target nor range is given.
        assert_eq!(enforce_span("ab\nc", None, None, None, None), "ab\nc");
        // Main-only enforcement leaves line widths alone.
        let out = enforce_span("ab\nc", Some(3), None, None, None);
        assert_eq!(out, "ab\nc\n  ");
    }

    #[test]
    fn test_enforce_zero_targets() {
        assert_eq!(enforce_span("abc", Some(0), None, None, None), "");
        assert_eq!(enforce_span("abc", None, Some(0), None, None), "");
    }

    #[test]
    fn test_serde_span() {
        let json = serde_json::to_string(&Span::Percent(40)).unwrap();
        assert_eq!(json, "{\"percent\":40}");
        let back: Span = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Span::Percent(40));
    }
}
