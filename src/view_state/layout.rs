//! Column layout state: visibility, order, pinning, and sizing.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::column::MIN_COLUMN_WIDTH;

// ============================================================================
// PinSide
// ============================================================================

/// Side a column is pinned to.
///
/// A column pins to at most one side; pinning to the other side moves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PinSide {
    Left,
    Right,
}

// ============================================================================
// LayoutState
// ============================================================================

/// Per-table column layout, all keyed by column id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayoutState {
    /// Columns explicitly hidden; everything else is visible.
    hidden: BTreeSet<String>,
    /// Display order. Empty means definition order; ids missing from the
    /// permutation keep definition order after the permuted ones.
    order: Vec<String>,
    /// Pinned columns. Keying by column id keeps the left/right sets
    /// disjoint by construction.
    pins: BTreeMap<String, PinSide>,
    /// Width overrides in terminal cells.
    sizing: BTreeMap<String, u16>,
}

impl LayoutState {
    /// Show or hide a column.
    pub fn set_visible(&mut self, column: &str, visible: bool) {
        if visible {
            self.hidden.remove(column);
        } else {
            self.hidden.insert(column.to_string());
        }
    }

    /// Whether a column is currently shown.
    pub fn is_visible(&self, column: &str) -> bool {
        !self.hidden.contains(column)
    }

    /// Replace the order permutation.
    pub fn set_order<I, S>(&mut self, order: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.order = order.into_iter().map(Into::into).collect();
    }

    /// Resolve display order against the definition order: permuted ids
    /// first (those actually defined), then remaining defined ids.
    pub fn ordered(&self, definition_order: &[String]) -> Vec<String> {
        let mut result: Vec<String> = self
            .order
            .iter()
            .filter(|id| definition_order.contains(id))
            .cloned()
            .collect();
        for id in definition_order {
            if !result.contains(id) {
                result.push(id.clone());
            }
        }
        result
    }

    /// Pin a column to a side, or unpin with `None`.
    pub fn pin(&mut self, column: &str, side: Option<PinSide>) {
        match side {
            Some(side) => {
                self.pins.insert(column.to_string(), side);
            }
            None => {
                self.pins.remove(column);
            }
        }
    }

    /// Pin side of a column, if pinned.
    pub fn pin_of(&self, column: &str) -> Option<PinSide> {
        self.pins.get(column).copied()
    }

    /// Set a width override, clamped to the minimum column width.
    pub fn resize(&mut self, column: &str, width: u16) {
        self.sizing
            .insert(column.to_string(), width.max(MIN_COLUMN_WIDTH));
    }

    /// Width override for a column, or the given default.
    pub fn width_of(&self, column: &str, default: u16) -> u16 {
        self.sizing.get(column).copied().unwrap_or(default)
    }

    /// Current width overrides.
    pub fn sizing(&self) -> &BTreeMap<String, u16> {
        &self.sizing
    }

    /// Extract the persistable subset (order + sizing).
    pub fn profile(&self) -> LayoutProfile {
        LayoutProfile {
            order: self.order.clone(),
            sizing: self.sizing.clone(),
        }
    }

    /// Apply a previously persisted profile.
    pub fn apply_profile(&mut self, profile: LayoutProfile) {
        self.order = profile.order;
        self.sizing = profile
            .sizing
            .into_iter()
            .map(|(id, w)| (id, w.max(MIN_COLUMN_WIDTH)))
            .collect();
    }
}

// ============================================================================
// LayoutProfile
// ============================================================================

/// Durable subset of the layout state: column order and sizing.
///
/// Persisted (opt-in) through `storage`, keyed by a caller-supplied opaque
/// profile string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutProfile {
    pub order: Vec<String>,
    pub sizing: BTreeMap<String, u16>,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn defs() -> Vec<String> {
        vec!["a".into(), "b".into(), "c".into()]
    }

    #[test]
    fn test_default_everything_visible_in_definition_order() {
        let layout = LayoutState::default();
        assert!(layout.is_visible("a"));
        assert_eq!(layout.ordered(&defs()), defs());
    }

    #[test]
    fn test_partial_order_permutation() {
        let mut layout = LayoutState::default();
        layout.set_order(["c"]);
        assert_eq!(
            layout.ordered(&defs()),
            vec!["c".to_string(), "a".into(), "b".into()]
        );
    }

    #[test]
    fn test_order_ignores_unknown_ids() {
        let mut layout = LayoutState::default();
        layout.set_order(["ghost", "b"]);
        assert_eq!(
            layout.ordered(&defs()),
            vec!["b".to_string(), "a".into(), "c".into()]
        );
    }

    #[test]
    fn test_pin_sides_stay_disjoint() {
        let mut layout = LayoutState::default();
        layout.pin("a", Some(PinSide::Left));
        layout.pin("a", Some(PinSide::Right));
        assert_eq!(layout.pin_of("a"), Some(PinSide::Right));

        layout.pin("a", None);
        assert_eq!(layout.pin_of("a"), None);
    }

    #[test]
    fn test_resize_clamps_to_minimum() {
        let mut layout = LayoutState::default();
        layout.resize("a", 2);
        assert_eq!(layout.width_of("a", 20), MIN_COLUMN_WIDTH);
        layout.resize("a", 30);
        assert_eq!(layout.width_of("a", 20), 30);
    }

    #[test]
    fn test_profile_round_trip() {
        let mut layout = LayoutState::default();
        layout.set_order(["b", "a"]);
        layout.resize("b", 22);

        let mut restored = LayoutState::default();
        restored.apply_profile(layout.profile());
        assert_eq!(restored.ordered(&defs()), layout.ordered(&defs()));
        assert_eq!(restored.width_of("b", 10), 22);
    }
}
