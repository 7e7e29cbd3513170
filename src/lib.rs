//! datadeck: terminal UI components for tabular data.
//!
//! The core is a pure view-state pipeline: a [`table::DataTable`] owns a
//! [`dataset::Dataset`], a set of [`column::ColumnDef`]s, and a serializable
//! [`view_state::ViewState`]; every render calls [`view_state::derive`] to
//! turn those into the visible rows (filter, sort, group, paginate) with no
//! caching in between. On top of that sit a chart model ([`chart`]), a
//! linked chart+table composition ([`linked`], [`ui::linked_chart`]), and a
//! handful of small widgets ([`ui`]).

pub mod chart;
pub mod column;
pub mod dataset;
pub mod debounce;
pub mod error;
pub mod linked;
pub mod storage;
pub mod table;
pub mod ui;
pub mod view_state;

pub use column::{Accessor, Alignment, ColumnDef, FilterKind};
pub use dataset::{CellValue, Dataset, Record, RowId, Schema};
pub use error::{DeckError, DeckResult};
pub use linked::{LinkMode, LinkedState};
pub use table::DataTable;
pub use view_state::{DerivedView, SortDirection, ViewState};
