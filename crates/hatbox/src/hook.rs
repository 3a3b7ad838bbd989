//! Dynamic value hooks.
//!
//! A [`Hook`] resolves a spacing or character value at render time, either
//! by producing a value from position context or by transforming the value
//! resolved so far. The variant is fixed when the hook is registered, so
//! resolution is a plain match with no runtime shape inspection.
//!
//! Hooks are stored in per-slot tables and folded in registration order
//! over the statically-configured seed value.
//!
//! # Example
//!
//! ```rust
//! use hatbox::{Hook, PadCtx};
//!
//! // Indent each line by its index.
//! let hook: Hook<PadCtx, usize> =
//!     Hook::generator(|ctx: &PadCtx| ctx.line.map_or(0, |l| l.index));
//! ```

use std::fmt;
use std::sync::Arc;

/// A generator callback: position context in, value out.
pub type GenFn<C, T> = Arc<dyn Fn(&C) -> T + Send + Sync>;

/// A transformer callback: position context and previous value in, value out.
pub type MapFn<C, T> = Arc<dyn Fn(&C, T) -> T + Send + Sync>;

/// A dynamically-resolved configuration value.
pub enum Hook<C, T> {
    /// A fixed replacement value.
    Literal(T),
    /// Generates a value from position context.
    Generator(GenFn<C, T>),
    /// Transforms the previously-resolved value.
    Transformer(MapFn<C, T>),
}

impl<C, T> Hook<C, T> {
    /// A fixed replacement value.
    pub fn literal(value: T) -> Self {
        Self::Literal(value)
    }

    /// A generator hook.
    pub fn generator<F>(f: F) -> Self
    where
        F: Fn(&C) -> T + Send + Sync + 'static,
    {
        Self::Generator(Arc::new(f))
    }

    /// A transformer hook.
    pub fn transformer<F>(f: F) -> Self
    where
        F: Fn(&C, T) -> T + Send + Sync + 'static,
    {
        Self::Transformer(Arc::new(f))
    }

    /// Resolve this hook against the running value.
    fn step(&self, ctx: &C, prev: T) -> T
    where
        T: Clone,
    {
        match self {
            Self::Literal(v) => v.clone(),
            Self::Generator(f) => f(ctx),
            Self::Transformer(f) => f(ctx, prev),
        }
    }
}

impl<C, T: Clone> Clone for Hook<C, T> {
    fn clone(&self) -> Self {
        match self {
            Self::Literal(v) => Self::Literal(v.clone()),
            Self::Generator(f) => Self::Generator(Arc::clone(f)),
            Self::Transformer(f) => Self::Transformer(Arc::clone(f)),
        }
    }
}

impl<C, T: fmt::Debug> fmt::Debug for Hook<C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(v) => f.debug_tuple("Literal").field(v).finish(),
            Self::Generator(_) => f.write_str("Generator(..)"),
            Self::Transformer(_) => f.write_str("Transformer(..)"),
        }
    }
}

/// Fold registered hooks over the seed value, in registration order.
///
/// With no hooks registered the seed is returned untouched.
pub fn resolve<C, T: Clone>(hooks: &[Hook<C, T>], ctx: &C, seed: T) -> T {
    hooks.iter().fold(seed, |prev, hook| hook.step(ctx, prev))
}

// ==================== Position contexts ====================

/// Line position within a block of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinePos {
    /// Zero-based index of the line being processed.
    pub index: usize,
    /// Total number of lines in the pass.
    pub total: usize,
}

/// Context for padding/margin hooks.
///
/// The per-line space roles carry the line position; the whole-axis newline
/// roles resolve once with `line: None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PadCtx {
    pub line: Option<LinePos>,
}

/// Context for left/right border edge hooks, per content line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowCtx {
    pub line_index: usize,
    pub total_lines: usize,
    /// The statically-resolved character for this edge.
    pub ch: char,
}

/// Context for top/bottom border edge hooks, per column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColCtx {
    pub col_index: usize,
    pub total_cols: usize,
    /// The statically-resolved character for this edge.
    pub ch: char,
}

/// Context for corner hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CornerCtx {
    /// The statically-resolved character for this corner.
    pub ch: char,
}
