//! Padding and margin application.
//!
//! Padding and margin share one algorithm over different field namespaces:
//! the four logical slots of an [`AxisEdges`] value resolve to four physical
//! roles (blank lines before/after, leading/trailing spaces per line)
//! according to the active orientation. Each slot can carry registered
//! hooks that resolve its value dynamically, per line for the space roles.

use crate::content::Orientation;
use crate::hand::AxisEdges;
use crate::hook::{self, Hook, LinePos, PadCtx};
use crate::visible_width;

/// A padding/margin hook.
pub type PadHook = Hook<PadCtx, usize>;

/// The logical slot a padding/margin hook attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsetSlot {
    MainStart,
    MainEnd,
    CrossStart,
    CrossEnd,
}

/// Registered hooks for one inset layer (padding or margin).
#[derive(Debug, Clone, Default)]
pub struct InsetHooks {
    main_start: Vec<PadHook>,
    main_end: Vec<PadHook>,
    cross_start: Vec<PadHook>,
    cross_end: Vec<PadHook>,
}

impl InsetHooks {
    /// Append a hook to a slot's table. Hooks run in registration order.
    pub fn push(&mut self, slot: InsetSlot, hook: PadHook) {
        self.table_mut(slot).push(hook);
    }

    /// The hooks registered for a slot.
    pub fn get(&self, slot: InsetSlot) -> &[PadHook] {
        match slot {
            InsetSlot::MainStart => &self.main_start,
            InsetSlot::MainEnd => &self.main_end,
            InsetSlot::CrossStart => &self.cross_start,
            InsetSlot::CrossEnd => &self.cross_end,
        }
    }

    /// Returns true if no slot has hooks.
    pub fn is_empty(&self) -> bool {
        self.main_start.is_empty()
            && self.main_end.is_empty()
            && self.cross_start.is_empty()
            && self.cross_end.is_empty()
    }

    fn table_mut(&mut self, slot: InsetSlot) -> &mut Vec<PadHook> {
        match slot {
            InsetSlot::MainStart => &mut self.main_start,
            InsetSlot::MainEnd => &mut self.main_end,
            InsetSlot::CrossStart => &mut self.cross_start,
            InsetSlot::CrossEnd => &mut self.cross_end,
        }
    }
}

fn slot_value(values: &AxisEdges<usize>, slot: InsetSlot) -> Option<usize> {
    match slot {
        InsetSlot::MainStart => values.main_start,
        InsetSlot::MainEnd => values.main_end,
        InsetSlot::CrossStart => values.cross_start,
        InsetSlot::CrossEnd => values.cross_end,
    }
}

/// A role runs only when its slot has a static value or registered hooks.
/// A hook currently resolving to zero still runs its per-line pass.
fn active(values: &AxisEdges<usize>, hooks: &InsetHooks, slot: InsetSlot) -> bool {
    slot_value(values, slot).is_some() || !hooks.get(slot).is_empty()
}

fn max_width(lines: &[String]) -> usize {
    lines.iter().map(|l| visible_width(l)).max().unwrap_or(0)
}

/// Apply one inset layer (padding or margin) to a block of text.
///
/// The logical slots map to physical roles by orientation: vertical puts
/// the main axis on rows (main start/end become blank lines before/after,
/// cross start/end become per-line leading/trailing spaces); horizontal
/// swaps the pairings. Roles apply in strict order: blank lines before,
/// leading spaces, trailing spaces, blank lines after. Inserted blank
/// lines are width-matched to the block at the time they are inserted.
pub fn apply_inset(
    text: &str,
    values: &AxisEdges<usize>,
    hooks: &InsetHooks,
    orientation: Orientation,
) -> String {
    let (nl_before, nl_after, sp_before, sp_after) = match orientation {
        Orientation::Vertical => (
            InsetSlot::MainStart,
            InsetSlot::MainEnd,
            InsetSlot::CrossStart,
            InsetSlot::CrossEnd,
        ),
        Orientation::Horizontal => (
            InsetSlot::CrossStart,
            InsetSlot::CrossEnd,
            InsetSlot::MainStart,
            InsetSlot::MainEnd,
        ),
    };

    let mut lines: Vec<String> = text.split('\n').map(str::to_string).collect();

    if active(values, hooks, nl_before) {
        let seed = slot_value(values, nl_before).unwrap_or(0);
        let n = hook::resolve(hooks.get(nl_before), &PadCtx { line: None }, seed);
        let blank = " ".repeat(max_width(&lines));
        for _ in 0..n {
            lines.insert(0, blank.clone());
        }
    }

    if active(values, hooks, sp_before) {
        let seed = slot_value(values, sp_before).unwrap_or(0);
        let table = hooks.get(sp_before);
        let total = lines.len();
        for (index, line) in lines.iter_mut().enumerate() {
            let ctx = PadCtx {
                line: Some(LinePos { index, total }),
            };
            let n = hook::resolve(table, &ctx, seed);
            if n > 0 {
                line.insert_str(0, &" ".repeat(n));
            }
        }
    }

    if active(values, hooks, sp_after) {
        let seed = slot_value(values, sp_after).unwrap_or(0);
        let table = hooks.get(sp_after);
        let total = lines.len();
        for (index, line) in lines.iter_mut().enumerate() {
            let ctx = PadCtx {
                line: Some(LinePos { index, total }),
            };
            let n = hook::resolve(table, &ctx, seed);
            if n > 0 {
                line.push_str(&" ".repeat(n));
            }
        }
    }

    if active(values, hooks, nl_after) {
        let seed = slot_value(values, nl_after).unwrap_or(0);
        let n = hook::resolve(hooks.get(nl_after), &PadCtx { line: None }, seed);
        let blank = " ".repeat(max_width(&lines));
        for _ in 0..n {
            lines.push(blank.clone());
        }
    }

    lines.join("\n")
}
