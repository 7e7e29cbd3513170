//! Pure derivation of the presented view from (dataset, columns, state).
//!
//! Applied strictly in this order: column filters (AND) -> global filter
//! (AND) -> stable multi-key sort -> grouping -> pagination. The same inputs
//! always produce the same ordered output; nothing is cached between calls.

use std::cmp::Ordering;

use crate::column::{column_by_id, ColumnDef};
use crate::dataset::{CellValue, Dataset, Record, RowId};

use super::{PinSide, SortDirection, ViewState};

// ============================================================================
// Output types
// ============================================================================

/// One row of the derived view.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewRow {
    /// A dataset row, referenced by identity.
    Data { id: RowId },
    /// Materialized header for one group.
    GroupHeader {
        key: String,
        count: usize,
        expanded: bool,
    },
}

impl ViewRow {
    /// Row id if this is a data row.
    pub fn row_id(&self) -> Option<RowId> {
        match self {
            ViewRow::Data { id } => Some(*id),
            ViewRow::GroupHeader { .. } => None,
        }
    }
}

/// Resolved layout for one visible column.
#[derive(Debug, Clone)]
pub struct ColumnLayout {
    pub id: String,
    pub header: String,
    pub width: u16,
    pub pin: Option<PinSide>,
    /// Sort priority (0 = primary) and direction, if sorted.
    pub sort: Option<(usize, SortDirection)>,
}

/// The derived view: current page of rows plus resolved column layout.
#[derive(Debug, Clone)]
pub struct DerivedView {
    /// Visible columns: left-pinned, then unpinned, then right-pinned,
    /// each section in display order.
    pub columns: Vec<ColumnLayout>,
    /// Rows of the current page (group headers included when grouping).
    pub rows: Vec<ViewRow>,
    /// Data rows surviving the filters, before pagination.
    pub total_filtered: usize,
    /// Clamped current page index.
    pub page_index: usize,
    /// Total number of pages.
    pub page_count: usize,
}

// ============================================================================
// Filtering
// ============================================================================

fn cell_for(column: &ColumnDef, dataset: &Dataset, record: &Record) -> CellValue {
    column.accessor.value(dataset.schema(), record)
}

fn display_for(column: &ColumnDef, dataset: &Dataset, record: &Record) -> String {
    let value = cell_for(column, dataset, record);
    match &column.format {
        Some(f) => f(&value),
        None => value.display(),
    }
}

fn record_passes_filters(
    dataset: &Dataset,
    columns: &[ColumnDef],
    state: &ViewState,
    record: &Record,
) -> bool {
    for (column_id, filter) in state.filters.columns() {
        // A filter on an unknown column is a caller contract violation;
        // treat it as unconstrained rather than crashing the derivation.
        let Some(column) = column_by_id(columns, column_id) else {
            continue;
        };
        if !filter.matches(&cell_for(column, dataset, record)) {
            return false;
        }
    }

    let global = state.filters.global();
    if !global.is_empty() {
        let hit = columns
            .iter()
            .any(|c| super::global_matches(global, &display_for(c, dataset, record)));
        if !hit {
            return false;
        }
    }

    true
}

/// Row ids surviving the active filters, in dataset order.
///
/// This is the set `select_all` and the filtered-data callbacks operate on.
pub fn filtered_row_ids(dataset: &Dataset, columns: &[ColumnDef], state: &ViewState) -> Vec<RowId> {
    dataset
        .rows()
        .iter()
        .filter(|(_, record)| record_passes_filters(dataset, columns, state, record))
        .map(|(id, _)| *id)
        .collect()
}

// ============================================================================
// Sorting
// ============================================================================

fn sort_filtered(dataset: &Dataset, columns: &[ColumnDef], state: &ViewState, ids: &mut [RowId]) {
    let keys: Vec<(&ColumnDef, SortDirection)> = state
        .sort
        .keys()
        .iter()
        .filter_map(|k| column_by_id(columns, &k.column).map(|c| (c, k.direction)))
        .collect();
    if keys.is_empty() {
        return;
    }

    // sort_by is stable: equal keys keep their filtered (dataset) order.
    ids.sort_by(|a, b| {
        for (column, direction) in &keys {
            let va = column.value(dataset, *a);
            let vb = column.value(dataset, *b);
            let ord = va.compare(&vb);
            let ord = match direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            };
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    });
}

// ============================================================================
// Columns
// ============================================================================

fn derive_columns(columns: &[ColumnDef], state: &ViewState) -> Vec<ColumnLayout> {
    let definition_order: Vec<String> = columns.iter().map(|c| c.id.clone()).collect();
    let ordered = state.layout.ordered(&definition_order);

    let mut left = Vec::new();
    let mut middle = Vec::new();
    let mut right = Vec::new();

    for id in ordered {
        if !state.layout.is_visible(&id) {
            continue;
        }
        let Some(column) = column_by_id(columns, &id) else {
            continue;
        };
        let pin = state.layout.pin_of(&id);
        let layout = ColumnLayout {
            width: state.layout.width_of(&id, column.width),
            header: column.header.clone(),
            sort: state.sort.position_of(&id),
            pin,
            id,
        };
        match pin {
            Some(PinSide::Left) => left.push(layout),
            Some(PinSide::Right) => right.push(layout),
            None => middle.push(layout),
        }
    }

    left.extend(middle);
    left.extend(right);
    left
}

// ============================================================================
// Derivation
// ============================================================================

/// Derive the presented view. Pure: no caching, no dataset mutation.
pub fn derive(dataset: &Dataset, columns: &[ColumnDef], state: &ViewState) -> DerivedView {
    let mut ids = filtered_row_ids(dataset, columns, state);
    let total_filtered = ids.len();

    sort_filtered(dataset, columns, state, &mut ids);

    // Materialize rows, grouping if a group column is set.
    let rows: Vec<ViewRow> = match state
        .grouping
        .group_by
        .as_deref()
        .and_then(|id| column_by_id(columns, id))
    {
        None => ids.iter().map(|id| ViewRow::Data { id: *id }).collect(),
        Some(group_column) => {
            // Partition in sorted order, keeping first-appearance key order.
            let mut groups: Vec<(String, Vec<RowId>)> = Vec::new();
            for id in &ids {
                let key = group_column.display(dataset, *id);
                match groups.iter_mut().find(|(k, _)| *k == key) {
                    Some((_, members)) => members.push(*id),
                    None => groups.push((key, vec![*id])),
                }
            }

            let mut rows = Vec::new();
            for (key, members) in groups {
                let expanded = state.grouping.is_expanded(&key);
                rows.push(ViewRow::GroupHeader {
                    count: members.len(),
                    key,
                    expanded,
                });
                if expanded {
                    rows.extend(members.into_iter().map(|id| ViewRow::Data { id }));
                }
            }
            rows
        }
    };

    let (start, end) = state.pagination.page_bounds(rows.len());
    let page_count = state.pagination.page_count(rows.len());
    let page_index = state.pagination.clamped_index(rows.len());
    let page_rows = rows[start..end].to_vec();

    tracing::trace!(
        total = dataset.len(),
        filtered = total_filtered,
        page = page_index,
        pages = page_count,
        "derived table view"
    );

    DerivedView {
        columns: derive_columns(columns, state),
        rows: page_rows,
        total_filtered,
        page_index,
        page_count,
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
    use crate::view_state::FilterValue;

    fn dataset() -> Dataset {
        Dataset::from_records(
            ["city", "region", "revenue"],
            vec![
                Record::new(vec!["Oslo".into(), "North".into(), 120.into()]),
                Record::new(vec!["Bergen".into(), "West".into(), 80.into()]),
                Record::new(vec!["Tromso".into(), "North".into(), 80.into()]),
                Record::new(vec!["Stavanger".into(), "West".into(), 95.into()]),
            ],
        )
    }

    fn columns() -> Vec<ColumnDef> {
        vec![
            ColumnDef::new("city", "City"),
            ColumnDef::new("region", "Region")
                .with_groupable(true)
                .with_filter(FilterKind::Select {
                    options: vec!["North".into(), "West".into()],
                }),
            ColumnDef::new("revenue", "Revenue").with_filter(FilterKind::Number),
        ]
    }

    fn data_ids(view: &DerivedView) -> Vec<u64> {
        view.rows
            .iter()
            .filter_map(|r| r.row_id())
            .map(|id| id.value())
            .collect()
    }

    #[test]
    fn test_default_state_preserves_dataset_order() {
        let view = derive(&dataset(), &columns(), &ViewState::default());
        assert_eq!(data_ids(&view), vec![0, 1, 2, 3]);
        assert_eq!(view.columns.len(), 3);
        assert_eq!(view.total_filtered, 4);
    }

    #[test]
    fn test_column_filter_then_global_filter_and() {
        let mut state = ViewState::default();
        state
            .filters
            .set_column("region", Some(FilterValue::Select("North".into())));
        state.filters.set_global("tro");
        let view = derive(&dataset(), &columns(), &state);
        assert_eq!(data_ids(&view), vec![2]);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let mut state = ViewState::default();
        state.sort.cycle("revenue", false);
        let view = derive(&dataset(), &columns(), &state);
        // Bergen (id 1) and Tromso (id 2) tie at 80; filtered order keeps
        // Bergen first.
        assert_eq!(data_ids(&view), vec![1, 2, 3, 0]);
    }

    #[test]
    fn test_descending_reverses_ascending_for_distinct_keys() {
        let mut state = ViewState::default();
        state.sort.cycle("city", false);
        let ascending = data_ids(&derive(&dataset(), &columns(), &state));
        state.sort.cycle("city", false);
        let descending = data_ids(&derive(&dataset(), &columns(), &state));
        let mut reversed = ascending.clone();
        reversed.reverse();
        assert_eq!(descending, reversed);
    }

    #[test]
    fn test_multi_sort_tie_break_order() {
        let mut state = ViewState::default();
        state.sort.cycle("revenue", false);
        state.sort.cycle("city", true);
        let view = derive(&dataset(), &columns(), &state);
        // revenue ties at 80 broken by city: Bergen before Tromso.
        assert_eq!(data_ids(&view), vec![1, 2, 3, 0]);

        // Flip the secondary key; the tie now resolves the other way.
        state.sort.cycle("city", true);
        let view = derive(&dataset(), &columns(), &state);
        assert_eq!(data_ids(&view), vec![2, 1, 3, 0]);
    }

    #[test]
    fn test_grouping_materializes_headers_with_counts() {
        let mut state = ViewState::default();
        state.grouping.set_group_by(Some("region"));
        let view = derive(&dataset(), &columns(), &state);
        let headers: Vec<(String, usize, bool)> = view
            .rows
            .iter()
            .filter_map(|r| match r {
                ViewRow::GroupHeader {
                    key,
                    count,
                    expanded,
                } => Some((key.clone(), *count, *expanded)),
                _ => None,
            })
            .collect();
        assert_eq!(
            headers,
            vec![("North".into(), 2, false), ("West".into(), 2, false)]
        );
        // Collapsed groups hide their member rows.
        assert!(data_ids(&view).is_empty());
    }

    #[test]
    fn test_expanding_one_group_reveals_only_its_members() {
        let mut state = ViewState::default();
        state.grouping.set_group_by(Some("region"));
        state.grouping.toggle("North");
        let view = derive(&dataset(), &columns(), &state);
        assert_eq!(data_ids(&view), vec![0, 2]);
    }

    #[test]
    fn test_pagination_clamps_and_partitions() {
        let mut state = ViewState::default();
        state.pagination.set_page_size(3);
        let first = derive(&dataset(), &columns(), &state);
        assert_eq!(data_ids(&first), vec![0, 1, 2]);
        assert_eq!(first.page_count, 2);

        state.pagination.set_page_index(1);
        let second = derive(&dataset(), &columns(), &state);
        assert_eq!(data_ids(&second), vec![3]);

        state.pagination.set_page_index(9);
        let clamped = derive(&dataset(), &columns(), &state);
        assert_eq!(clamped.page_index, 1);
    }

    #[test]
    fn test_pinned_columns_partition_layout() {
        let mut state = ViewState::default();
        state.layout.pin("revenue", Some(PinSide::Left));
        state.layout.pin("city", Some(PinSide::Right));
        let view = derive(&dataset(), &columns(), &state);
        let ids: Vec<&str> = view.columns.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["revenue", "region", "city"]);
        assert_eq!(view.columns[0].pin, Some(PinSide::Left));
        assert_eq!(view.columns[2].pin, Some(PinSide::Right));
    }

    #[test]
    fn test_hidden_column_leaves_layout() {
        let mut state = ViewState::default();
        state.layout.set_visible("region", false);
        let view = derive(&dataset(), &columns(), &state);
        assert_eq!(view.columns.len(), 2);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let mut state = ViewState::default();
        state.filters.set_global("o");
        let once = filtered_row_ids(&dataset(), &columns(), &state);
        let twice = filtered_row_ids(&dataset(), &columns(), &state);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_on_unknown_column_is_tolerated() {
        let mut state = ViewState::default();
        state
            .filters
            .set_column("ghost", Some(FilterValue::Text("x".into())));
        let view = derive(&dataset(), &columns(), &state);
        assert_eq!(view.total_filtered, 4);
    }
}
