// Integration tests for global filter semantics: case-insensitive substring
// OR whitespace-token-prefix match, evaluated against displayed values.

use datadeck::column::ColumnDef;
use datadeck::dataset::{Dataset, Record};
use datadeck::table::DataTable;
use datadeck::view_state::global_matches;

// =============================================================================
// Matcher semantics
// =============================================================================

#[test]
fn test_substring_match_is_case_insensitive() {
    assert!(global_matches("jan", "January"));
    assert!(global_matches("JAN", "january"));
    assert!(global_matches("uar", "January"));
    assert!(!global_matches("jan", "February"));
}

#[test]
fn test_token_prefix_matches_inner_words() {
    assert!(global_matches("jan", "San Jan Diego"));
    assert!(global_matches("die", "San Jan Diego"));
    // "an" is a substring of "San", so it still matches; prefix matching
    // only widens the substring rule.
    assert!(global_matches("an", "San Jan Diego"));
    assert!(!global_matches("ego", "San Jan"));
}

#[test]
fn test_blank_query_matches_everything() {
    assert!(global_matches("", "anything"));
    assert!(global_matches("   ", "anything"));
    assert!(global_matches("", ""));
}

#[test]
fn test_query_is_trimmed() {
    assert!(global_matches("  jan  ", "January"));
}

// =============================================================================
// Table-level behavior
// =============================================================================

fn cities() -> DataTable {
    let dataset = Dataset::from_records(
        ["city", "population"],
        vec![
            Record::new(vec!["San Jan Diego".into(), 1_400_000.into()]),
            Record::new(vec!["January Falls".into(), 52_000.into()]),
            Record::new(vec!["Bergen".into(), 285_000.into()]),
        ],
    );
    let columns = vec![
        ColumnDef::new("city", "City"),
        ColumnDef::new("population", "Population")
            .with_format(|v| format!("{} people", v.display())),
    ];
    DataTable::new(dataset, columns)
}

fn filtered(table: &DataTable) -> Vec<u64> {
    table.filtered_ids().iter().map(|id| id.value()).collect()
}

#[test]
fn test_any_column_may_satisfy_the_query() {
    let mut table = cities();
    table.set_global_filter("jan");
    assert_eq!(filtered(&table), vec![0, 1]);
}

#[test]
fn test_formatted_display_is_what_gets_matched() {
    let mut table = cities();
    // "people" only exists in the formatter output, not in any raw cell.
    table.set_global_filter("people");
    assert_eq!(filtered(&table), vec![0, 1, 2]);
}

#[test]
fn test_numbers_match_through_their_display_text() {
    let mut table = cities();
    table.set_global_filter("285000");
    assert_eq!(filtered(&table), vec![2]);
}

#[test]
fn test_whitespace_query_clears_the_filter() {
    let mut table = cities();
    table.set_global_filter("bergen");
    assert_eq!(filtered(&table), vec![2]);
    table.set_global_filter("   ");
    assert_eq!(filtered(&table), vec![0, 1, 2]);
    assert!(table.view_state().filters.is_empty());
}
