//! Row selection state, keyed by synthetic row id.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::dataset::RowId;

/// Set of selected rows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectionState {
    rows: BTreeSet<RowId>,
}

impl SelectionState {
    /// Toggle one row's membership.
    pub fn toggle(&mut self, id: RowId) {
        if !self.rows.remove(&id) {
            self.rows.insert(id);
        }
    }

    /// Add a set of rows (used by select-all over the filtered set).
    pub fn insert_all<I: IntoIterator<Item = RowId>>(&mut self, ids: I) {
        self.rows.extend(ids);
    }

    /// Remove every selection.
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Whether a row is selected.
    pub fn contains(&self, id: RowId) -> bool {
        self.rows.contains(&id)
    }

    /// Selected ids in ascending order.
    pub fn ids(&self) -> Vec<RowId> {
        self.rows.iter().copied().collect()
    }

    /// Number of selected rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
