//! `DataTable`: the tabular view state manager.
//!
//! Owns a dataset, its column definitions, and one `ViewState`, and exposes
//! the mutator operations user interaction maps onto. Every mutation is
//! synchronous; the presented view is recomputed on demand via `derived()`.

use std::path::PathBuf;

use crate::column::{column_by_id, ColumnDef};
use crate::dataset::{Dataset, RowId};
use crate::error::{DeckError, DeckResult};
use crate::storage;
use crate::view_state::{
    derive, filtered_row_ids, DerivedView, FilterValue, PinSide, SortDirection, ViewState,
};

/// Callback invoked with the selected row ids after selection changes.
pub type SelectionCallback = Box<dyn FnMut(&[RowId])>;

/// Callback invoked with the filtered row ids after the filtered set changes.
pub type FilteredCallback = Box<dyn FnMut(&[RowId])>;

/// Tabular view state manager over a caller-owned dataset.
pub struct DataTable {
    dataset: Dataset,
    columns: Vec<ColumnDef>,
    state: ViewState,
    persist_profile: Option<String>,
    persist_dir: Option<PathBuf>,
    on_selection_change: Option<SelectionCallback>,
    on_filtered_change: Option<FilteredCallback>,
}

impl DataTable {
    /// Create a table with default view state.
    pub fn new(dataset: Dataset, columns: Vec<ColumnDef>) -> Self {
        Self {
            dataset,
            columns,
            state: ViewState::default(),
            persist_profile: None,
            persist_dir: None,
            on_selection_change: None,
            on_filtered_change: None,
        }
    }

    /// Start from a caller-supplied view state (e.g. pre-set sort/pinning).
    pub fn with_view_state(mut self, state: ViewState) -> Self {
        self.state = state;
        self
    }

    /// Opt in to layout persistence under an opaque profile key. Any stored
    /// profile is applied immediately; later order/size changes are saved.
    pub fn with_persistence(mut self, profile: impl Into<String>) -> Self {
        self.persist_profile = Some(profile.into());
        self.load_stored_layout();
        self
    }

    /// Override the persistence directory (tests and embedded callers). The
    /// stored profile is re-applied from the new location, so this chains in
    /// either order around `with_persistence`.
    pub fn with_persistence_dir(mut self, dir: PathBuf) -> Self {
        self.persist_dir = Some(dir);
        self.load_stored_layout();
        self
    }

    fn load_stored_layout(&mut self) {
        let Some(profile) = self.persist_profile.as_deref() else {
            return;
        };
        match storage::load_layout(self.persist_dir.as_deref(), profile) {
            Ok(Some(stored)) => self.state.layout.apply_profile(stored),
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(profile = %profile, error = %err, "failed to load layout profile");
            }
        }
    }

    /// Register a selection-changed callback.
    pub fn on_selection_change<F>(&mut self, f: F)
    where
        F: FnMut(&[RowId]) + 'static,
    {
        self.on_selection_change = Some(Box::new(f));
    }

    /// Register a filtered-set-changed callback.
    pub fn on_filtered_change<F>(&mut self, f: F)
    where
        F: FnMut(&[RowId]) + 'static,
    {
        self.on_filtered_change = Some(Box::new(f));
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// The underlying dataset (read-only).
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Column definitions in definition order.
    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    /// Current view state.
    pub fn view_state(&self) -> &ViewState {
        &self.state
    }

    /// Replace the view state wholesale (external control surface).
    pub fn set_view_state(&mut self, state: ViewState) {
        self.state = state;
        self.notify_filtered();
        self.notify_selection();
    }

    /// Derive the currently presented view.
    pub fn derived(&self) -> DerivedView {
        derive(&self.dataset, &self.columns, &self.state)
    }

    /// Row ids surviving the active filters, in dataset order.
    pub fn filtered_ids(&self) -> Vec<RowId> {
        filtered_row_ids(&self.dataset, &self.columns, &self.state)
    }

    // ------------------------------------------------------------------
    // Sort
    // ------------------------------------------------------------------

    /// Header-click sort cycle; `additive` corresponds to the multi-sort
    /// modifier being engaged.
    pub fn cycle_sort(&mut self, column: &str, additive: bool) {
        if !column_by_id(&self.columns, column).is_some_and(|c| c.sortable) {
            return;
        }
        self.state.sort.cycle(column, additive);
        tracing::debug!(column, additive, "sort cycled");
    }

    /// Set or clear a column's sort direction explicitly.
    pub fn set_sort(&mut self, column: &str, direction: Option<SortDirection>, additive: bool) {
        self.state.sort.set(column, direction, additive);
    }

    // ------------------------------------------------------------------
    // Filters
    // ------------------------------------------------------------------

    /// Set or clear one column's filter. Resets to page 0 since the row set
    /// changes underneath the page grid.
    pub fn set_column_filter(&mut self, column: &str, value: Option<FilterValue>) {
        self.state.filters.set_column(column, value);
        self.state.pagination.set_page_index(0);
        self.notify_filtered();
    }

    /// Set the global free-text filter.
    pub fn set_global_filter(&mut self, text: &str) {
        self.state.filters.set_global(text);
        self.state.pagination.set_page_index(0);
        self.notify_filtered();
    }

    /// Per-option match counts for a select/multiselect column, evaluated
    /// against the rows surviving every *other* filter.
    pub fn facet_counts(&self, column: &str) -> DeckResult<Vec<(String, usize)>> {
        let def = column_by_id(&self.columns, column)
            .ok_or_else(|| DeckError::UnknownColumn(column.to_string()))?;

        let mut others = self.state.clone();
        others.filters.set_column(column, None);
        let candidate_ids = filtered_row_ids(&self.dataset, &self.columns, &others);

        let counts = def
            .filter
            .options()
            .iter()
            .map(|option| {
                let count = candidate_ids
                    .iter()
                    .filter(|id| def.display(&self.dataset, **id) == *option)
                    .count();
                (option.clone(), count)
            })
            .collect();
        Ok(counts)
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    /// Toggle one row's selection.
    pub fn toggle_row_selection(&mut self, id: RowId) {
        self.state.selection.toggle(id);
        self.notify_selection();
    }

    /// Select every row in the currently filtered set. Hidden (filtered-out)
    /// rows are deliberately left untouched.
    pub fn select_all(&mut self) {
        let ids = self.filtered_ids();
        self.state.selection.insert_all(ids);
        self.notify_selection();
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        self.state.selection.clear();
        self.notify_selection();
    }

    // ------------------------------------------------------------------
    // Pagination
    // ------------------------------------------------------------------

    /// Jump to a page (clamped at derivation time).
    pub fn set_page_index(&mut self, index: usize) {
        self.state.pagination.set_page_index(index);
    }

    /// Change the page size; always resets to page 0.
    pub fn set_page_size(&mut self, size: usize) {
        self.state.pagination.set_page_size(size);
    }

    // ------------------------------------------------------------------
    // Layout
    // ------------------------------------------------------------------

    /// Pin a column to a side, or unpin with `None`.
    pub fn pin_column(&mut self, column: &str, side: Option<PinSide>) {
        if !column_by_id(&self.columns, column).is_some_and(|c| c.pinnable) {
            return;
        }
        self.state.layout.pin(column, side);
    }

    /// Resize a column (clamped to the minimum width); persisted when the
    /// caller opted in.
    pub fn resize_column(&mut self, column: &str, width: u16) {
        if !column_by_id(&self.columns, column).is_some_and(|c| c.resizable) {
            return;
        }
        self.state.layout.resize(column, width);
        self.persist_layout();
    }

    /// Show or hide a column.
    pub fn set_column_visible(&mut self, column: &str, visible: bool) {
        self.state.layout.set_visible(column, visible);
    }

    /// Replace the column order permutation; persisted when opted in.
    pub fn set_column_order<I, S>(&mut self, order: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.state.layout.set_order(order);
        self.persist_layout();
    }

    // ------------------------------------------------------------------
    // Grouping
    // ------------------------------------------------------------------

    /// Group rows by a column's value, or clear grouping with `None`.
    pub fn set_group_by(&mut self, column: Option<&str>) {
        if let Some(column) = column {
            if !column_by_id(&self.columns, column).is_some_and(|c| c.groupable) {
                return;
            }
        }
        self.state.grouping.set_group_by(column);
        self.state.pagination.set_page_index(0);
    }

    /// Expand new groups by default instead of collapsing them.
    pub fn set_auto_expand(&mut self, auto_expand: bool) {
        self.state.grouping.auto_expand = auto_expand;
    }

    /// Flip one group between expanded and collapsed.
    pub fn toggle_group(&mut self, key: &str) {
        self.state.grouping.toggle(key);
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn persist_layout(&self) {
        let Some(profile) = &self.persist_profile else {
            return;
        };
        let stored = self.state.layout.profile();
        if let Err(err) = storage::save_layout(self.persist_dir.as_deref(), profile, &stored) {
            tracing::warn!(profile = %profile, error = %err, "failed to save layout profile");
        }
    }

    fn notify_selection(&mut self) {
        if let Some(callback) = &mut self.on_selection_change {
            let ids = self.state.selection.ids();
            callback(&ids);
        }
    }

    fn notify_filtered(&mut self) {
        if self.on_filtered_change.is_some() {
            let ids = filtered_row_ids(&self.dataset, &self.columns, &self.state);
            if let Some(callback) = &mut self.on_filtered_change {
                callback(&ids);
            }
        }
    }
}

impl std::fmt::Debug for DataTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataTable")
            .field("rows", &self.dataset.len())
            .field("columns", &self.columns.len())
            .field("state", &self.state)
            .field("persist_profile", &self.persist_profile)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::FilterKind;
    use crate::dataset::Record;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn table() -> DataTable {
        let dataset = Dataset::from_records(
            ["city", "region", "revenue"],
            vec![
                Record::new(vec!["Oslo".into(), "North".into(), 120.into()]),
                Record::new(vec!["Bergen".into(), "West".into(), 80.into()]),
                Record::new(vec!["Tromso".into(), "North".into(), 60.into()]),
            ],
        );
        let columns = vec![
            ColumnDef::new("city", "City"),
            ColumnDef::new("region", "Region")
                .with_groupable(true)
                .with_filter(FilterKind::Select {
                    options: vec!["North".into(), "West".into()],
                }),
            ColumnDef::new("revenue", "Revenue").with_filter(FilterKind::Number),
        ];
        DataTable::new(dataset, columns)
    }

    #[test]
    fn test_select_all_covers_only_filtered_rows() {
        let mut table = table();
        table.set_column_filter("region", Some(FilterValue::Select("North".into())));
        table.select_all();
        assert_eq!(table.view_state().selection.ids(), vec![RowId(0), RowId(2)]);

        table.clear_selection();
        assert!(table.view_state().selection.is_empty());
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut table = table();
        table.set_page_size(1);
        table.set_page_index(2);
        table.set_global_filter("berg");
        assert_eq!(table.view_state().pagination.page_index, 0);
    }

    #[test]
    fn test_sort_respects_sortable_flag() {
        let mut table = table();
        table.columns[0].sortable = false;
        table.cycle_sort("city", false);
        assert!(table.view_state().sort.keys().is_empty());
    }

    #[test]
    fn test_selection_callback_fires_with_ids() {
        let seen: Rc<RefCell<Vec<Vec<RowId>>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut table = table();
        table.on_selection_change(move |ids| sink.borrow_mut().push(ids.to_vec()));

        table.toggle_row_selection(RowId(1));
        table.clear_selection();
        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], vec![RowId(1)]);
        assert!(seen[1].is_empty());
    }

    #[test]
    fn test_filtered_callback_fires_on_filter_change() {
        let seen: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut table = table();
        table.on_filtered_change(move |ids| sink.borrow_mut().push(ids.len()));

        table.set_global_filter("o"); // Oslo, Tromso
        table.set_global_filter("");
        assert_eq!(*seen.borrow(), vec![2, 3]);
    }

    #[test]
    fn test_facet_counts_ignore_own_filter() {
        let mut table = table();
        table.set_column_filter("region", Some(FilterValue::Select("North".into())));
        let facets = table.facet_counts("region").unwrap();
        assert_eq!(facets, vec![("North".into(), 2), ("West".into(), 1)]);
    }

    #[test]
    fn test_facet_counts_unknown_column_errors() {
        let table = table();
        assert!(matches!(
            table.facet_counts("ghost"),
            Err(DeckError::UnknownColumn(_))
        ));
    }

    #[test]
    fn test_group_by_requires_groupable() {
        let mut table = table();
        table.set_group_by(Some("city"));
        assert!(table.view_state().grouping.group_by.is_none());
        table.set_group_by(Some("region"));
        assert_eq!(
            table.view_state().grouping.group_by.as_deref(),
            Some("region")
        );
    }
}
