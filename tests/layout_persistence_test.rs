// Integration tests for layout profile persistence: explicit directories,
// the environment override, and the DataTable opt-in path.

use serial_test::serial;
use tempfile::TempDir;

use datadeck::column::ColumnDef;
use datadeck::dataset::{Dataset, Record};
use datadeck::storage::{self, DATA_DIR_ENV};
use datadeck::table::DataTable;
use datadeck::view_state::{LayoutState, ViewState};

fn table_with_dir(dir: &TempDir) -> DataTable {
    let dataset = Dataset::from_records(
        ["city", "population"],
        vec![
            Record::new(vec!["Oslo".into(), 709_000.into()]),
            Record::new(vec!["Bergen".into(), 285_000.into()]),
        ],
    );
    let columns = vec![
        ColumnDef::new("city", "City"),
        ColumnDef::new("population", "Population"),
    ];
    DataTable::new(dataset, columns)
        .with_persistence_dir(dir.path().to_path_buf())
        .with_persistence("sales-view")
}

// =============================================================================
// Storage round trips
// =============================================================================

#[test]
fn test_save_load_round_trip_in_explicit_dir() {
    let dir = TempDir::new().expect("tempdir");
    let mut layout = LayoutState::default();
    layout.set_order(["population", "city"]);
    layout.resize("city", 20);

    let profile = layout.profile();
    storage::save_layout(Some(dir.path()), "sales-view", &profile).expect("save");

    let loaded = storage::load_layout(Some(dir.path()), "sales-view")
        .expect("load")
        .expect("profile exists");

    let mut restored = LayoutState::default();
    restored.apply_profile(loaded);
    let order = restored.ordered(&["city".into(), "population".into()]);
    assert_eq!(order, vec!["population", "city"]);
    assert_eq!(restored.width_of("city", 14), 20);
}

#[test]
fn test_missing_profile_loads_as_none() {
    let dir = TempDir::new().expect("tempdir");
    let loaded = storage::load_layout(Some(dir.path()), "never-saved").expect("load");
    assert!(loaded.is_none());
}

#[test]
fn test_delete_removes_profile() {
    let dir = TempDir::new().expect("tempdir");
    let layout = LayoutState::default();
    storage::save_layout(Some(dir.path()), "sales-view", &layout.profile()).expect("save");
    storage::delete_layout(Some(dir.path()), "sales-view").expect("delete");
    assert!(storage::load_layout(Some(dir.path()), "sales-view")
        .expect("load")
        .is_none());
}

#[test]
fn test_profile_keys_are_sanitized_to_file_names() {
    let dir = TempDir::new().expect("tempdir");
    let layout = LayoutState::default();
    storage::save_layout(Some(dir.path()), "team/euw profile", &layout.profile())
        .expect("save with hostile key");
    assert!(storage::load_layout(Some(dir.path()), "team/euw profile")
        .expect("load")
        .is_some());
    // Nothing escaped the directory.
    let entries: Vec<_> = std::fs::read_dir(dir.path())
        .expect("read dir")
        .collect();
    assert_eq!(entries.len(), 1);
}

// =============================================================================
// Environment override
// =============================================================================

#[test]
#[serial]
fn test_env_override_redirects_default_dir() {
    let dir = TempDir::new().expect("tempdir");
    std::env::set_var(DATA_DIR_ENV, dir.path());

    let layout = LayoutState::default();
    storage::save_layout(None, "env-profile", &layout.profile()).expect("save");
    assert!(dir.path().join("profiles").join("env-profile.json").exists());

    std::env::remove_var(DATA_DIR_ENV);
}

// =============================================================================
// DataTable opt-in
// =============================================================================

#[test]
fn test_resize_persists_and_reloads_through_the_table() {
    let dir = TempDir::new().expect("tempdir");

    {
        let mut table = table_with_dir(&dir);
        table.resize_column("city", 24);
        table.set_column_order(["population", "city"]);
    }

    // A fresh table with the same profile picks the layout back up.
    let table = table_with_dir(&dir);
    let view = table.derived();
    let ids: Vec<&str> = view.columns.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["population", "city"]);
    assert_eq!(
        view.columns.iter().find(|c| c.id == "city").map(|c| c.width),
        Some(24)
    );
}

#[test]
#[serial]
fn test_builder_order_does_not_matter_for_the_load() {
    // Point the default location at an empty tempdir so the key-first load
    // has somewhere harmless to look before the directory override lands.
    let default_dir = TempDir::new().expect("tempdir");
    std::env::set_var(DATA_DIR_ENV, default_dir.path());

    let dir = TempDir::new().expect("tempdir");
    {
        let mut table = table_with_dir(&dir);
        table.resize_column("city", 21);
    }

    // Profile key first, directory second: the load still comes from `dir`.
    let dataset = Dataset::from_records(["city"], vec![Record::new(vec!["Oslo".into()])]);
    let table = DataTable::new(dataset, vec![ColumnDef::new("city", "City")])
        .with_persistence("sales-view")
        .with_persistence_dir(dir.path().to_path_buf());
    assert_eq!(table.derived().columns[0].width, 21);

    std::env::remove_var(DATA_DIR_ENV);
}

#[test]
fn test_persistence_covers_only_order_and_sizing() {
    let dir = TempDir::new().expect("tempdir");

    {
        let mut table = table_with_dir(&dir);
        table.cycle_sort("city", false);
        table.toggle_row_selection(datadeck::dataset::RowId(0));
        // Trigger a save.
        table.resize_column("city", 18);
    }

    let table = table_with_dir(&dir);
    assert!(table.view_state().sort.keys().is_empty());
    assert!(table.view_state().selection.is_empty());
    assert_eq!(table.derived().columns[0].width, 18);
}

#[test]
fn test_without_opt_in_nothing_is_written() {
    let dir = TempDir::new().expect("tempdir");
    let dataset = Dataset::from_records(
        ["city"],
        vec![Record::new(vec!["Oslo".into()])],
    );
    let mut table = DataTable::new(dataset, vec![ColumnDef::new("city", "City")])
        .with_persistence_dir(dir.path().to_path_buf())
        .with_view_state(ViewState::default());
    table.resize_column("city", 30);

    let entries: Vec<_> = std::fs::read_dir(dir.path()).expect("read dir").collect();
    assert!(entries.is_empty(), "no profile key means no writes");
}
