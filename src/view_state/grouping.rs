//! Grouping state: partition rows by one column's value into collapsible
//! groups.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Grouping column and per-group expansion state.
///
/// New groups default to collapsed unless `auto_expand` is set; `toggled`
/// records the keys the user flipped away from that default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupState {
    /// Column id rows are partitioned by, if any.
    pub group_by: Option<String>,
    /// Expand new groups by default.
    pub auto_expand: bool,
    toggled: BTreeSet<String>,
}

impl GroupState {
    /// Set or clear the grouping column. Changing the column drops all
    /// expansion state since the group keys change with it.
    pub fn set_group_by(&mut self, column: Option<&str>) {
        let next = column.map(str::to_string);
        if next != self.group_by {
            self.toggled.clear();
        }
        self.group_by = next;
    }

    /// Flip one group between expanded and collapsed.
    pub fn toggle(&mut self, key: &str) {
        if !self.toggled.remove(key) {
            self.toggled.insert(key.to_string());
        }
    }

    /// Whether a group's member rows are currently shown.
    pub fn is_expanded(&self, key: &str) -> bool {
        self.auto_expand ^ self.toggled.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_default_collapsed() {
        let grouping = GroupState {
            group_by: Some("region".into()),
            ..Default::default()
        };
        assert!(!grouping.is_expanded("North"));
    }

    #[test]
    fn test_auto_expand_flips_default() {
        let mut grouping = GroupState {
            group_by: Some("region".into()),
            auto_expand: true,
            ..Default::default()
        };
        assert!(grouping.is_expanded("North"));
        grouping.toggle("North");
        assert!(!grouping.is_expanded("North"));
        assert!(grouping.is_expanded("South"));
    }

    #[test]
    fn test_toggle_is_per_key() {
        let mut grouping = GroupState::default();
        grouping.set_group_by(Some("region"));
        grouping.toggle("North");
        assert!(grouping.is_expanded("North"));
        assert!(!grouping.is_expanded("South"));
    }

    #[test]
    fn test_changing_group_column_resets_expansion() {
        let mut grouping = GroupState::default();
        grouping.set_group_by(Some("region"));
        grouping.toggle("North");
        grouping.set_group_by(Some("status"));
        assert!(!grouping.is_expanded("North"));
    }
}
