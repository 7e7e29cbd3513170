//! Sort state: ordered multi-column sort keys with header-click cycling.

use serde::{Deserialize, Serialize};

// ============================================================================
// SortDirection
// ============================================================================

/// Direction of one sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn toggled(&self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Header marker for this direction.
    pub fn indicator(&self) -> char {
        match self {
            SortDirection::Ascending => '\u{25B2}',  // ▲
            SortDirection::Descending => '\u{25BC}', // ▼
        }
    }
}

// ============================================================================
// SortState
// ============================================================================

/// One (column, direction) sort key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    pub column: String,
    pub direction: SortDirection,
}

/// Ordered list of sort keys. List order is tie-break priority: the first
/// key is primary, later keys break ties.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SortState {
    keys: Vec<SortKey>,
}

impl SortState {
    /// Current keys in priority order.
    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }

    /// Direction and priority position of a column, if it is sorted.
    pub fn position_of(&self, column: &str) -> Option<(usize, SortDirection)> {
        self.keys
            .iter()
            .position(|k| k.column == column)
            .map(|i| (i, self.keys[i].direction))
    }

    /// Header-click cycle for one column:
    /// unsorted -> ascending -> descending -> unsorted.
    ///
    /// When `additive` is false the clicked column replaces the whole sort
    /// list; when true (modifier engaged) it cycles in place, appending as
    /// the lowest-priority key if previously unsorted.
    pub fn cycle(&mut self, column: &str, additive: bool) {
        let existing = self.keys.iter().position(|k| k.column == column);
        match existing {
            None => {
                let key = SortKey {
                    column: column.to_string(),
                    direction: SortDirection::Ascending,
                };
                if additive {
                    self.keys.push(key);
                } else {
                    self.keys = vec![key];
                }
            }
            Some(i) => match self.keys[i].direction {
                SortDirection::Ascending => {
                    let direction = SortDirection::Descending;
                    if additive {
                        self.keys[i].direction = direction;
                    } else {
                        self.keys = vec![SortKey {
                            column: column.to_string(),
                            direction,
                        }];
                    }
                }
                SortDirection::Descending => {
                    if additive {
                        self.keys.remove(i);
                    } else {
                        self.keys.clear();
                    }
                }
            },
        }
    }

    /// Set or clear a column's direction explicitly. `None` removes the key.
    pub fn set(&mut self, column: &str, direction: Option<SortDirection>, additive: bool) {
        match direction {
            None => self.keys.retain(|k| k.column != column),
            Some(direction) => {
                if !additive {
                    self.keys.clear();
                }
                match self.keys.iter_mut().find(|k| k.column == column) {
                    Some(key) => key.direction = direction,
                    None => self.keys.push(SortKey {
                        column: column.to_string(),
                        direction,
                    }),
                }
            }
        }
    }

    /// Remove all sort keys.
    pub fn clear(&mut self) {
        self.keys.clear();
    }
}

// ============================================================================
// Tests
// ============================================================================
