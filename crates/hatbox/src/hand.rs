//! Shorthand notations for edge-valued configuration.
//!
//! Two families of shorthand expand compact inputs into fully-keyed records:
//!
//! - [`AxisEdges`] is the logical-axis form used by padding and margin:
//!   a scalar, a `(main, cross)` pair, a pair of pairs, or an explicit
//!   record.
//! - [`Edges`] and [`Corners`] are the physical clockwise form used by
//!   borders: a scalar or a 4-element clockwise array starting at the top /
//!   top-left.
//!
//! Both are generic over the leaf type: reshaping never inspects or disturbs
//! the leaves, so composite values (styled characters, hooks) pass through
//! untouched.
//!
//! # Example
//!
//! ```rust
//! use hatbox::AxisEdges;
//!
//! let pad: AxisEdges<usize> = (1, 2).into();
//! assert_eq!(pad.main_start, Some(1));
//! assert_eq!(pad.main_end, Some(1));
//! assert_eq!(pad.cross_start, Some(2));
//! assert_eq!(pad.cross_end, Some(2));
//! ```

/// Logical-axis edge values: main = flow direction, cross = perpendicular.
///
/// Unspecified slots stay `None`, meaning "no insertion"; they are never
/// defaulted to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisEdges<T> {
    pub main_start: Option<T>,
    pub main_end: Option<T>,
    pub cross_start: Option<T>,
    pub cross_end: Option<T>,
}

impl<T> Default for AxisEdges<T> {
    fn default() -> Self {
        Self {
            main_start: None,
            main_end: None,
            cross_start: None,
            cross_end: None,
        }
    }
}

impl<T> AxisEdges<T> {
    /// No slots set.
    pub fn none() -> Self {
        Self::default()
    }

    /// Returns true if no slot is set.
    pub fn is_unset(&self) -> bool {
        self.main_start.is_none()
            && self.main_end.is_none()
            && self.cross_start.is_none()
            && self.cross_end.is_none()
    }
}

impl<T: Clone> AxisEdges<T> {
    /// Set only the main-axis slots (both start and end).
    pub fn main(value: T) -> Self {
        Self {
            main_start: Some(value.clone()),
            main_end: Some(value),
            ..Self::default()
        }
    }

    /// Set only the cross-axis slots (both start and end).
    pub fn cross(value: T) -> Self {
        Self {
            cross_start: Some(value.clone()),
            cross_end: Some(value),
            ..Self::default()
        }
    }
}

impl<T: Clone> From<T> for AxisEdges<T> {
    /// Single value: all four slots.
    fn from(all: T) -> Self {
        Self {
            main_start: Some(all.clone()),
            main_end: Some(all.clone()),
            cross_start: Some(all.clone()),
            cross_end: Some(all),
        }
    }
}

impl<T: Clone> From<(T, T)> for AxisEdges<T> {
    /// Two values: `(main, cross)`, each applied to both ends of its axis.
    fn from((main, cross): (T, T)) -> Self {
        Self {
            main_start: Some(main.clone()),
            main_end: Some(main),
            cross_start: Some(cross.clone()),
            cross_end: Some(cross),
        }
    }
}

impl<T> From<((T, T), (T, T))> for AxisEdges<T> {
    /// Pair of pairs: `((main_start, main_end), (cross_start, cross_end))`.
    fn from(((main_start, main_end), (cross_start, cross_end)): ((T, T), (T, T))) -> Self {
        Self {
            main_start: Some(main_start),
            main_end: Some(main_end),
            cross_start: Some(cross_start),
            cross_end: Some(cross_end),
        }
    }
}

/// Physical edge values in top/right/bottom/left terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edges<T> {
    pub top: Option<T>,
    pub right: Option<T>,
    pub bottom: Option<T>,
    pub left: Option<T>,
}

impl<T> Default for Edges<T> {
    fn default() -> Self {
        Self {
            top: None,
            right: None,
            bottom: None,
            left: None,
        }
    }
}

impl<T> Edges<T> {
    /// No edges set.
    pub fn none() -> Self {
        Self::default()
    }

    /// Returns true if no edge is set.
    pub fn is_unset(&self) -> bool {
        self.top.is_none() && self.right.is_none() && self.bottom.is_none() && self.left.is_none()
    }

    /// Overlay `other` on top of `self`: slots set in `other` win.
    pub fn merge(self, other: Self) -> Self {
        Self {
            top: other.top.or(self.top),
            right: other.right.or(self.right),
            bottom: other.bottom.or(self.bottom),
            left: other.left.or(self.left),
        }
    }
}

impl<T: Clone> From<T> for Edges<T> {
    /// Single value: all four edges.
    fn from(all: T) -> Self {
        Self {
            top: Some(all.clone()),
            right: Some(all.clone()),
            bottom: Some(all.clone()),
            left: Some(all),
        }
    }
}

impl<T> From<[T; 4]> for Edges<T> {
    /// Clockwise array: `[top, right, bottom, left]`.
    fn from([top, right, bottom, left]: [T; 4]) -> Self {
        Self {
            top: Some(top),
            right: Some(right),
            bottom: Some(bottom),
            left: Some(left),
        }
    }
}

/// Physical corner values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Corners<T> {
    pub top_left: Option<T>,
    pub top_right: Option<T>,
    pub bottom_right: Option<T>,
    pub bottom_left: Option<T>,
}

impl<T> Default for Corners<T> {
    fn default() -> Self {
        Self {
            top_left: None,
            top_right: None,
            bottom_right: None,
            bottom_left: None,
        }
    }
}

impl<T> Corners<T> {
    /// No corners set.
    pub fn none() -> Self {
        Self::default()
    }

    /// Returns true if no corner is set.
    pub fn is_unset(&self) -> bool {
        self.top_left.is_none()
            && self.top_right.is_none()
            && self.bottom_right.is_none()
            && self.bottom_left.is_none()
    }

    /// Overlay `other` on top of `self`: slots set in `other` win.
    pub fn merge(self, other: Self) -> Self {
        Self {
            top_left: other.top_left.or(self.top_left),
            top_right: other.top_right.or(self.top_right),
            bottom_right: other.bottom_right.or(self.bottom_right),
            bottom_left: other.bottom_left.or(self.bottom_left),
        }
    }
}

impl<T: Clone> From<T> for Corners<T> {
    /// Single value: all four corners.
    fn from(all: T) -> Self {
        Self {
            top_left: Some(all.clone()),
            top_right: Some(all.clone()),
            bottom_right: Some(all.clone()),
            bottom_left: Some(all),
        }
    }
}

impl<T> From<[T; 4]> for Corners<T> {
    /// Clockwise array starting at the top slot, remapped to corners:
    /// top → top-left, right → top-right, bottom → bottom-right,
    /// left → bottom-left.
    fn from([top, right, bottom, left]: [T; 4]) -> Self {
        Self {
            top_left: Some(top),
            top_right: Some(right),
            bottom_right: Some(bottom),
            bottom_left: Some(left),
        }
    }
}
