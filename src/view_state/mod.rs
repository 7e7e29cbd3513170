//! Table view state
//!
//! Everything a user does to a table (sorting, filtering, pagination,
//! selection, column layout, grouping) lives here as a serializable value
//! object. The dataset itself is never touched; `derive` recomputes the
//! presented view from (dataset, columns, view state) on demand.

mod derive;
mod filters;
mod grouping;
mod layout;
mod pagination;
mod selection;
mod sort;

pub use derive::{derive, filtered_row_ids, ColumnLayout, DerivedView, ViewRow};
pub use filters::{global_matches, FilterState, FilterValue};
pub use grouping::GroupState;
pub use layout::{LayoutProfile, LayoutState, PinSide};
pub use pagination::{PageState, DEFAULT_PAGE_SIZE};
pub use selection::SelectionState;
pub use sort::{SortDirection, SortKey, SortState};

use serde::{Deserialize, Serialize};

/// Complete view state for one table instance.
///
/// Created with defaults when the table mounts, mutated synchronously by
/// user interaction, and discardable/serializable as a whole.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewState {
    /// Multi-column sort keys, list order is tie-break priority.
    pub sort: SortState,
    /// Per-column filters plus the global free-text filter.
    pub filters: FilterState,
    /// Column visibility, order, pinning, and sizing.
    pub layout: LayoutState,
    /// Selected row ids.
    pub selection: SelectionState,
    /// Zero-indexed pagination.
    pub pagination: PageState,
    /// Grouping column and expansion state.
    pub grouping: GroupState,
}
