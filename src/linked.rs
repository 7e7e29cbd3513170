//! Linked chart + table view state.
//!
//! One `LinkedState` is shared between a chart and a table rendering the
//! same dataset. Chart clicks build a filter set over the table; table
//! selection reflects back into the chart as highlighting or filtering;
//! hover is transient and never affects filtering.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::dataset::RowId;

/// Callback invoked by `clear_all` with the (now empty) chart-filter and
/// selection sets.
pub type ClearCallback = Box<dyn FnMut(&[RowId], &[RowId])>;

/// How table selection feeds back into the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LinkMode {
    /// Dim every non-selected chart element.
    #[default]
    Highlight,
    /// Render only the selected elements.
    Filter,
}

impl LinkMode {
    /// Flip between the two modes (bound to a UI toggle).
    pub fn toggled(&self) -> Self {
        match self {
            LinkMode::Highlight => LinkMode::Filter,
            LinkMode::Filter => LinkMode::Highlight,
        }
    }
}

/// Shared view state linking one chart and one table.
#[derive(Default)]
pub struct LinkedState {
    chart_filter: BTreeSet<RowId>,
    selected: BTreeSet<RowId>,
    hovered: Option<RowId>,
    mode: LinkMode,
    on_clear: Option<ClearCallback>,
}

impl LinkedState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the clear-all callback.
    pub fn on_clear<F>(&mut self, f: F)
    where
        F: FnMut(&[RowId], &[RowId]) + 'static,
    {
        self.on_clear = Some(Box::new(f));
    }

    // ------------------------------------------------------------------
    // Chart-side interaction
    // ------------------------------------------------------------------

    /// Toggle a clicked chart point's membership in the chart filter.
    pub fn toggle_chart_point(&mut self, row: RowId) {
        if !self.chart_filter.remove(&row) {
            self.chart_filter.insert(row);
        }
    }

    /// Rows the chart filter restricts the table to. Empty means no
    /// restriction.
    pub fn chart_filter(&self) -> Vec<RowId> {
        self.chart_filter.iter().copied().collect()
    }

    /// Apply the chart filter to a candidate row list (the table's filtered
    /// ids). An empty filter set passes everything through.
    pub fn table_rows<'a>(&self, candidates: &'a [RowId]) -> Vec<RowId> {
        if self.chart_filter.is_empty() {
            candidates.to_vec()
        } else {
            candidates
                .iter()
                .filter(|id| self.chart_filter.contains(id))
                .copied()
                .collect()
        }
    }

    // ------------------------------------------------------------------
    // Table-side interaction
    // ------------------------------------------------------------------

    /// Toggle a table row's membership in the selection set.
    pub fn toggle_selected(&mut self, row: RowId) {
        if !self.selected.remove(&row) {
            self.selected.insert(row);
        }
    }

    /// Selected rows in ascending id order.
    pub fn selected(&self) -> Vec<RowId> {
        self.selected.iter().copied().collect()
    }

    /// Whether a row is selected.
    pub fn is_selected(&self, row: RowId) -> bool {
        self.selected.contains(&row)
    }

    // ------------------------------------------------------------------
    // Hover & mode
    // ------------------------------------------------------------------

    /// Set or clear the transient hovered row.
    pub fn set_hovered(&mut self, row: Option<RowId>) {
        self.hovered = row;
    }

    /// Currently hovered row, if any.
    pub fn hovered(&self) -> Option<RowId> {
        self.hovered
    }

    /// Current selection feedback mode.
    pub fn mode(&self) -> LinkMode {
        self.mode
    }

    /// Set the selection feedback mode.
    pub fn set_mode(&mut self, mode: LinkMode) {
        self.mode = mode;
    }

    /// Flip the selection feedback mode.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    // ------------------------------------------------------------------
    // Chart-side rendering queries
    // ------------------------------------------------------------------

    /// Whether a chart element should render at all.
    ///
    /// Only `Filter` mode with a non-empty selection hides elements.
    pub fn chart_visible(&self, row: RowId) -> bool {
        match self.mode {
            LinkMode::Filter if !self.selected.is_empty() => self.selected.contains(&row),
            _ => true,
        }
    }

    /// Whether a chart element should render dimmed.
    ///
    /// Hover always wins: when a row is hovered, everything else dims. In
    /// `Highlight` mode a non-empty selection dims the non-selected rest.
    pub fn chart_dimmed(&self, row: RowId) -> bool {
        if let Some(hovered) = self.hovered {
            return hovered != row;
        }
        match self.mode {
            LinkMode::Highlight if !self.selected.is_empty() => !self.selected.contains(&row),
            _ => false,
        }
    }

    // ------------------------------------------------------------------
    // Reset
    // ------------------------------------------------------------------

    /// Reset chart filter, selection, and hover; notifies the caller with
    /// the now-empty collections.
    pub fn clear_all(&mut self) {
        self.chart_filter.clear();
        self.selected.clear();
        self.hovered = None;
        if let Some(callback) = &mut self.on_clear {
            callback(&[], &[]);
        }
        tracing::debug!("linked view state cleared");
    }
}

impl std::fmt::Debug for LinkedState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinkedState")
            .field("chart_filter", &self.chart_filter)
            .field("selected", &self.selected)
            .field("hovered", &self.hovered)
            .field("mode", &self.mode)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_chart_point_click_toggles_to_empty() {
        let mut linked = LinkedState::new();
        linked.toggle_chart_point(RowId(2));
        assert_eq!(linked.chart_filter(), vec![RowId(2)]);
        linked.toggle_chart_point(RowId(2));
        assert!(linked.chart_filter().is_empty());
    }

    #[test]
    fn test_empty_chart_filter_passes_all_rows() {
        let linked = LinkedState::new();
        let candidates = vec![RowId(0), RowId(1), RowId(2)];
        assert_eq!(linked.table_rows(&candidates), candidates);
    }

    #[test]
    fn test_chart_filter_restricts_table_rows() {
        let mut linked = LinkedState::new();
        linked.toggle_chart_point(RowId(1));
        let candidates = vec![RowId(0), RowId(1), RowId(2)];
        assert_eq!(linked.table_rows(&candidates), vec![RowId(1)]);
    }

    #[test]
    fn test_default_mode_is_highlight() {
        let linked = LinkedState::new();
        assert_eq!(linked.mode(), LinkMode::Highlight);
    }

    #[test]
    fn test_highlight_mode_dims_non_selected() {
        let mut linked = LinkedState::new();
        linked.toggle_selected(RowId(1));
        assert!(linked.chart_dimmed(RowId(0)));
        assert!(!linked.chart_dimmed(RowId(1)));
        assert!(linked.chart_visible(RowId(0)));
    }

    #[test]
    fn test_filter_mode_hides_non_selected() {
        let mut linked = LinkedState::new();
        linked.toggle_mode();
        linked.toggle_selected(RowId(1));
        assert!(!linked.chart_visible(RowId(0)));
        assert!(linked.chart_visible(RowId(1)));
        assert!(!linked.chart_dimmed(RowId(0)));
    }

    #[test]
    fn test_hover_dims_without_filtering() {
        let mut linked = LinkedState::new();
        linked.toggle_chart_point(RowId(0));
        linked.set_hovered(Some(RowId(0)));
        assert!(linked.chart_dimmed(RowId(1)));
        assert!(!linked.chart_dimmed(RowId(0)));
        // Hover never changes which table rows show.
        let candidates = vec![RowId(0), RowId(1)];
        assert_eq!(linked.table_rows(&candidates), vec![RowId(0)]);
    }

    #[test]
    fn test_clear_all_resets_and_notifies_empty() {
        let seen: Rc<RefCell<Option<(usize, usize)>>> = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&seen);
        let mut linked = LinkedState::new();
        linked.on_clear(move |filter, selected| {
            *sink.borrow_mut() = Some((filter.len(), selected.len()));
        });

        linked.toggle_chart_point(RowId(0));
        linked.toggle_selected(RowId(1));
        linked.set_hovered(Some(RowId(2)));
        linked.clear_all();

        assert!(linked.chart_filter().is_empty());
        assert!(linked.selected().is_empty());
        assert_eq!(linked.hovered(), None);
        assert_eq!(*seen.borrow(), Some((0, 0)));
    }
}
