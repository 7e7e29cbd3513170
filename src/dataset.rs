//! Dataset model: rows, cell values, and stable row identity.
//!
//! The dataset is owned by the caller and never mutated by the view layer.
//! Every row receives a synthetic `RowId` at ingestion time; all selection,
//! filtering, and chart-correlation sets are keyed by that id, so rows with
//! identical values stay unambiguous.

use std::cmp::Ordering;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

// ============================================================================
// RowId
// ============================================================================

/// Stable synthetic identifier for one dataset row.
///
/// Assigned sequentially at ingestion and never reused within a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RowId(pub u64);

impl RowId {
    /// Raw numeric value, mainly for logging.
    pub fn value(&self) -> u64 {
        self.0
    }
}

// ============================================================================
// CellValue
// ============================================================================

/// A single cell value.
///
/// Cells are loosely typed on purpose: filters and sorts do best-effort
/// coercion and treat anything that cannot be coerced as a non-match or
/// an empty cell rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    /// Text value
    Text(String),
    /// Floating point value
    Number(f64),
    /// Integer value
    Int(i64),
    /// Boolean value
    Bool(bool),
    /// Calendar date
    Date(NaiveDate),
    /// Missing/empty cell
    Empty,
}

impl CellValue {
    /// Display text for the cell. Empty cells render as an empty string.
    pub fn display(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{:.2}", n)
                }
            }
            CellValue::Int(n) => n.to_string(),
            CellValue::Bool(b) => if *b { "Yes" } else { "No" }.to_string(),
            CellValue::Date(d) => d.format("%Y-%m-%d").to_string(),
            CellValue::Empty => String::new(),
        }
    }

    /// Best-effort numeric view of the cell.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Int(n) => Some(*n as f64),
            CellValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            CellValue::Text(s) => s.trim().parse::<f64>().ok(),
            CellValue::Date(d) => Some(d.num_days_from_ce() as f64),
            CellValue::Empty => None,
        }
    }

    /// Best-effort boolean view of the cell.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CellValue::Bool(b) => Some(*b),
            CellValue::Int(n) => Some(*n != 0),
            CellValue::Number(n) => Some(*n != 0.0),
            CellValue::Text(s) => match s.trim().to_lowercase().as_str() {
                "true" | "yes" => Some(true),
                "false" | "no" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    /// Whether the cell carries no value.
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Total ordering used by the sort pipeline.
    ///
    /// Empty cells always sort last regardless of direction inversion being
    /// applied on top. Numeric kinds compare numerically across each other;
    /// text compares case-insensitively with raw text as the tie-break.
    pub fn compare(&self, other: &CellValue) -> Ordering {
        use CellValue::*;
        match (self, other) {
            (Empty, Empty) => Ordering::Equal,
            (Empty, _) => Ordering::Greater,
            (_, Empty) => Ordering::Less,
            (Date(a), Date(b)) => a.cmp(b),
            (Bool(a), Bool(b)) => a.cmp(b),
            (Text(a), Text(b)) => {
                let la = a.to_lowercase();
                let lb = b.to_lowercase();
                la.cmp(&lb).then_with(|| a.cmp(b))
            }
            _ => match (self.as_number(), other.as_number()) {
                (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => self.display().cmp(&other.display()),
            },
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Int(n)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Int(n as i64)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(d: NaiveDate) -> Self {
        CellValue::Date(d)
    }
}

// ============================================================================
// Schema & Record
// ============================================================================

/// Field names shared by every record in a dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    fields: Vec<String>,
}

impl Schema {
    /// Build a schema from field names.
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Position of a field, if present.
    pub fn index_of(&self, field: &str) -> Option<usize> {
        self.fields.iter().position(|f| f == field)
    }

    /// Field names in declaration order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the schema has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// One row of cell values, positionally aligned with a `Schema`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    values: Vec<CellValue>,
}

impl Record {
    /// Build a record from cell values.
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator<Item = CellValue>,
    {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Value at a schema position. Out-of-range positions read as empty,
    /// so a short record never takes down the table.
    pub fn value_at(&self, index: usize) -> &CellValue {
        self.values.get(index).unwrap_or(&CellValue::Empty)
    }

    /// All values in schema order.
    pub fn values(&self) -> &[CellValue] {
        &self.values
    }
}

// ============================================================================
// Dataset
// ============================================================================

/// Ordered, caller-owned collection of records.
///
/// The view layer only derives over the dataset; nothing here mutates rows
/// after ingestion apart from appending new ones.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    schema: Schema,
    rows: Vec<(RowId, Record)>,
    next_id: u64,
}

impl Dataset {
    /// Create an empty dataset with the given field names.
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            schema: Schema::new(fields),
            rows: Vec::new(),
            next_id: 0,
        }
    }

    /// Ingest a batch of records, assigning row ids in order.
    pub fn from_records<I, S, R>(fields: I, records: R) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        R: IntoIterator<Item = Record>,
    {
        let mut ds = Self::new(fields);
        for record in records {
            ds.push(record);
        }
        ds
    }

    /// Append one record, returning its assigned id.
    pub fn push(&mut self, record: Record) -> RowId {
        let id = RowId(self.next_id);
        self.next_id += 1;
        self.rows.push((id, record));
        id
    }

    /// The shared schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Rows in ingestion order.
    pub fn rows(&self) -> &[(RowId, Record)] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Record for a given row id.
    pub fn record(&self, id: RowId) -> Option<&Record> {
        self.rows.iter().find(|(rid, _)| *rid == id).map(|(_, r)| r)
    }

    /// Cell value for (row id, field name). Missing row or field reads empty.
    pub fn cell(&self, id: RowId, field: &str) -> CellValue {
        let Some(index) = self.schema.index_of(field) else {
            return CellValue::Empty;
        };
        match self.record(id) {
            Some(record) => record.value_at(index).clone(),
            None => CellValue::Empty,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
