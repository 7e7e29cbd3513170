//! Column descriptors for the data table.
//!
//! A `ColumnDef` says how to read a value out of a row, how to label and
//! format it, which filter variant applies, and which table capabilities
//! (sort/group/pin/resize) the column opts into. Each filter kind is its own
//! variant so its required fields are enforced at the type level instead of
//! being validated at render time.

use std::fmt;
use std::sync::Arc;

use crate::dataset::{CellValue, Dataset, Record, RowId, Schema};

/// Default column width in terminal cells.
pub const DEFAULT_COLUMN_WIDTH: u16 = 14;

/// Smallest width a column can be resized to.
pub const MIN_COLUMN_WIDTH: u16 = 4;

// ============================================================================
// Accessor
// ============================================================================

/// How a column reads its value from a record.
#[derive(Clone)]
pub enum Accessor {
    /// Read a named schema field directly.
    Field(String),
    /// Compute the value from the whole record. Returning `None` renders
    /// as an empty cell; a failing computed accessor never aborts derivation.
    Computed(Arc<dyn Fn(&Record) -> Option<CellValue> + Send + Sync>),
}

impl Accessor {
    /// Evaluate against one record. Missing fields and `None` results both
    /// collapse to `CellValue::Empty`.
    pub fn value(&self, schema: &Schema, record: &Record) -> CellValue {
        match self {
            Accessor::Field(name) => match schema.index_of(name) {
                Some(index) => record.value_at(index).clone(),
                None => CellValue::Empty,
            },
            Accessor::Computed(f) => f(record).unwrap_or(CellValue::Empty),
        }
    }
}

impl fmt::Debug for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accessor::Field(name) => f.debug_tuple("Field").field(name).finish(),
            Accessor::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

// ============================================================================
// FilterKind
// ============================================================================

/// Filter variant a column supports, one variant per filter UI shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FilterKind {
    /// Free-text substring filter.
    #[default]
    Text,
    /// Single choice among fixed options.
    Select { options: Vec<String> },
    /// Any-of choice among fixed options.
    MultiSelect { options: Vec<String> },
    /// Numeric range filter.
    Number,
    /// True/false filter.
    Boolean,
}

impl FilterKind {
    /// Options for select-style kinds, empty otherwise.
    pub fn options(&self) -> &[String] {
        match self {
            FilterKind::Select { options } | FilterKind::MultiSelect { options } => options,
            _ => &[],
        }
    }
}

// ============================================================================
// Alignment
// ============================================================================

/// Horizontal cell alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

// ============================================================================
// ColumnDef
// ============================================================================

/// Declarative description of one presented column.
#[derive(Clone)]
pub struct ColumnDef {
    /// Stable column id, referenced by view state maps.
    pub id: String,
    /// Header label.
    pub header: String,
    /// How to read the value from a row.
    pub accessor: Accessor,
    /// Filter variant this column participates in.
    pub filter: FilterKind,
    /// Optional display formatter applied on top of `CellValue::display`.
    pub format: Option<Arc<dyn Fn(&CellValue) -> String + Send + Sync>>,
    /// Cell alignment.
    pub align: Alignment,
    /// Whether header clicks may sort this column.
    pub sortable: bool,
    /// Whether this column may be used as the grouping key.
    pub groupable: bool,
    /// Whether this column may be pinned left/right.
    pub pinnable: bool,
    /// Whether this column may be resized.
    pub resizable: bool,
    /// Default width in terminal cells.
    pub width: u16,
}

impl ColumnDef {
    /// Column reading the schema field of the same name.
    pub fn new(id: impl Into<String>, header: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            accessor: Accessor::Field(id.clone()),
            id,
            header: header.into(),
            filter: FilterKind::Text,
            format: None,
            align: Alignment::Left,
            sortable: true,
            groupable: false,
            pinnable: true,
            resizable: true,
            width: DEFAULT_COLUMN_WIDTH,
        }
    }

    /// Column computed from the whole record.
    pub fn computed<F>(id: impl Into<String>, header: impl Into<String>, f: F) -> Self
    where
        F: Fn(&Record) -> Option<CellValue> + Send + Sync + 'static,
    {
        let mut col = Self::new(id, header);
        col.accessor = Accessor::Computed(Arc::new(f));
        col
    }

    /// Builder-style setter for the filter kind.
    pub fn with_filter(mut self, filter: FilterKind) -> Self {
        self.filter = filter;
        self
    }

    /// Builder-style setter for the display formatter.
    pub fn with_format<F>(mut self, f: F) -> Self
    where
        F: Fn(&CellValue) -> String + Send + Sync + 'static,
    {
        self.format = Some(Arc::new(f));
        self
    }

    /// Builder-style setter for alignment.
    pub fn with_align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Builder-style setter for sortability.
    pub fn with_sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Mark the column as a grouping candidate.
    pub fn with_groupable(mut self, groupable: bool) -> Self {
        self.groupable = groupable;
        self
    }

    /// Builder-style setter for pinnability.
    pub fn with_pinnable(mut self, pinnable: bool) -> Self {
        self.pinnable = pinnable;
        self
    }

    /// Builder-style setter for resizability.
    pub fn with_resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    /// Builder-style setter for default width, clamped to the minimum.
    pub fn with_width(mut self, width: u16) -> Self {
        self.width = width.max(MIN_COLUMN_WIDTH);
        self
    }

    /// Raw value for one row of a dataset.
    pub fn value(&self, dataset: &Dataset, id: RowId) -> CellValue {
        match dataset.record(id) {
            Some(record) => self.accessor.value(dataset.schema(), record),
            None => CellValue::Empty,
        }
    }

    /// Display text for one row, after the optional formatter.
    pub fn display(&self, dataset: &Dataset, id: RowId) -> String {
        let value = self.value(dataset, id);
        match &self.format {
            Some(f) => f(&value),
            None => value.display(),
        }
    }
}

impl fmt::Debug for ColumnDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDef")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("accessor", &self.accessor)
            .field("filter", &self.filter)
            .field("sortable", &self.sortable)
            .field("groupable", &self.groupable)
            .field("pinnable", &self.pinnable)
            .field("resizable", &self.resizable)
            .field("width", &self.width)
            .finish()
    }
}

/// Find a column definition by id.
pub fn column_by_id<'a>(columns: &'a [ColumnDef], id: &str) -> Option<&'a ColumnDef> {
    columns.iter().find(|c| c.id == id)
}

// ============================================================================
// Tests
// ============================================================================
