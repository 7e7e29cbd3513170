//! Filter state: per-column filter values and the global free-text filter.
//!
//! Filters are best-effort: a value that cannot be coerced to the filter's
//! shape is a non-match, never an error. Clearing a filter removes its map
//! entry instead of storing an empty value.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::dataset::CellValue;

// ============================================================================
// FilterValue
// ============================================================================

/// Value of one per-column filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FilterValue {
    /// Case-insensitive substring match on the displayed value.
    Text(String),
    /// Exact match against one option.
    Select(String),
    /// Match against any of the chosen options.
    MultiSelect(Vec<String>),
    /// Inclusive numeric range; either end may be open.
    NumberRange { min: Option<f64>, max: Option<f64> },
    /// Boolean equality with best-effort coercion.
    Bool(bool),
}

impl FilterValue {
    /// Whether this value constrains nothing and should be removed.
    pub fn is_empty(&self) -> bool {
        match self {
            FilterValue::Text(s) => s.trim().is_empty(),
            FilterValue::Select(s) => s.is_empty(),
            FilterValue::MultiSelect(options) => options.is_empty(),
            FilterValue::NumberRange { min, max } => min.is_none() && max.is_none(),
            FilterValue::Bool(_) => false,
        }
    }

    /// Whether a cell passes this filter.
    pub fn matches(&self, cell: &CellValue) -> bool {
        match self {
            FilterValue::Text(query) => {
                let query = query.trim().to_lowercase();
                query.is_empty() || cell.display().to_lowercase().contains(&query)
            }
            FilterValue::Select(option) => cell.display() == *option,
            FilterValue::MultiSelect(options) => {
                let display = cell.display();
                options.iter().any(|o| *o == display)
            }
            FilterValue::NumberRange { min, max } => match cell.as_number() {
                // Non-numeric cell under a numeric filter: no match.
                None => false,
                Some(n) => min.is_none_or(|lo| n >= lo) && max.is_none_or(|hi| n <= hi),
            },
            FilterValue::Bool(want) => cell.as_bool() == Some(*want),
        }
    }
}

// ============================================================================
// Global filter matching
// ============================================================================

/// Case-insensitive global-filter match for one stringified value.
///
/// A value matches if it contains the query, or if any whitespace-delimited
/// token of it starts with the query. "jan" matches "January" and
/// "San Jan Diego" but not "February".
pub fn global_matches(query: &str, value: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    let value = value.to_lowercase();
    value.contains(&query)
        || value
            .split_whitespace()
            .any(|token| token.starts_with(&query))
}

// ============================================================================
// FilterState
// ============================================================================

/// Per-column filters (AND'd together) plus the global free-text filter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterState {
    columns: BTreeMap<String, FilterValue>,
    global: String,
}

impl FilterState {
    /// Set or clear a column's filter. Empty values remove the entry.
    pub fn set_column(&mut self, column: &str, value: Option<FilterValue>) {
        match value {
            Some(value) if !value.is_empty() => {
                self.columns.insert(column.to_string(), value);
            }
            _ => {
                self.columns.remove(column);
            }
        }
    }

    /// Current filter for a column, if set.
    pub fn column(&self, column: &str) -> Option<&FilterValue> {
        self.columns.get(column)
    }

    /// All column filters.
    pub fn columns(&self) -> &BTreeMap<String, FilterValue> {
        &self.columns
    }

    /// Set the global free-text filter. Whitespace-only clears it.
    pub fn set_global(&mut self, text: &str) {
        self.global = if text.trim().is_empty() {
            String::new()
        } else {
            text.to_string()
        };
    }

    /// Current global filter text.
    pub fn global(&self) -> &str {
        &self.global
    }

    /// Whether no filter is active at all.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() && self.global.is_empty()
    }

    /// Remove every filter.
    pub fn clear(&mut self) {
        self.columns.clear();
        self.global.clear();
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_filter_is_case_insensitive_substring() {
        let filter = FilterValue::Text("erg".into());
        assert!(filter.matches(&CellValue::Text("Bergen".into())));
        assert!(!filter.matches(&CellValue::Text("Oslo".into())));
    }

    #[test]
    fn test_number_range_open_ends() {
        let at_least = FilterValue::NumberRange {
            min: Some(10.0),
            max: None,
        };
        assert!(at_least.matches(&CellValue::Int(10)));
        assert!(!at_least.matches(&CellValue::Int(9)));

        let at_most = FilterValue::NumberRange {
            min: None,
            max: Some(5.0),
        };
        assert!(at_most.matches(&CellValue::Number(4.5)));
        assert!(!at_most.matches(&CellValue::Number(5.5)));
    }

    #[test]
    fn test_non_numeric_cell_fails_numeric_filter() {
        let filter = FilterValue::NumberRange {
            min: Some(0.0),
            max: Some(100.0),
        };
        assert!(!filter.matches(&CellValue::Text("not a number".into())));
        assert!(!filter.matches(&CellValue::Empty));
    }

    #[test]
    fn test_multi_select_any_of() {
        let filter = FilterValue::MultiSelect(vec!["North".into(), "West".into()]);
        assert!(filter.matches(&CellValue::Text("West".into())));
        assert!(!filter.matches(&CellValue::Text("South".into())));
    }

    #[test]
    fn test_bool_filter_coerces() {
        let filter = FilterValue::Bool(true);
        assert!(filter.matches(&CellValue::Bool(true)));
        assert!(filter.matches(&CellValue::Text("yes".into())));
        assert!(!filter.matches(&CellValue::Text("no".into())));
        assert!(!filter.matches(&CellValue::Text("gibberish".into())));
    }

    #[test]
    fn test_clearing_removes_map_entry() {
        let mut state = FilterState::default();
        state.set_column("city", Some(FilterValue::Text("oslo".into())));
        assert_eq!(state.columns().len(), 1);

        state.set_column("city", Some(FilterValue::Text("   ".into())));
        assert!(state.columns().is_empty());

        state.set_column("city", Some(FilterValue::Text("oslo".into())));
        state.set_column("city", None);
        assert!(state.columns().is_empty());
    }

    #[test]
    fn test_global_matches_token_prefix() {
        assert!(global_matches("jan", "January"));
        assert!(global_matches("jan", "San Jan Diego"));
        assert!(!global_matches("jan", "February"));
    }

    #[test]
    fn test_global_matches_substring() {
        assert!(global_matches("uar", "January"));
        assert!(global_matches("JAN", "january"));
    }

    #[test]
    fn test_empty_global_matches_everything() {
        assert!(global_matches("", "anything"));
        assert!(global_matches("   ", "anything"));
    }
}
