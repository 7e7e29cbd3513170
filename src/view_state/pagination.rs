//! Pagination state: zero-indexed page over the filtered+sorted row set.

use serde::{Deserialize, Serialize};

/// Default rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Zero-indexed pagination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    pub page_index: usize,
    pub page_size: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageState {
    /// Jump to a page. Derivation clamps against the current total, so an
    /// out-of-range index is tolerated here.
    pub fn set_page_index(&mut self, index: usize) {
        self.page_index = index;
    }

    /// Change the page size. Always resets to page 0 so the view never
    /// points past the end of the new page grid.
    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size.max(1);
        self.page_index = 0;
    }

    /// Number of pages for a given total (at least 1).
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    /// Page index clamped into range for a given total.
    pub fn clamped_index(&self, total: usize) -> usize {
        self.page_index.min(self.page_count(total) - 1)
    }

    /// Half-open row range `[start, end)` of the current page.
    pub fn page_bounds(&self, total: usize) -> (usize, usize) {
        let index = self.clamped_index(total);
        let start = index * self.page_size;
        let end = (start + self.page_size).min(total);
        (start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_size_change_resets_index() {
        let mut page = PageState::default();
        page.set_page_index(4);
        page.set_page_size(25);
        assert_eq!(page.page_index, 0);
        assert_eq!(page.page_size, 25);
    }

    #[test]
    fn test_page_size_never_zero() {
        let mut page = PageState::default();
        page.set_page_size(0);
        assert_eq!(page.page_size, 1);
    }

    #[test]
    fn test_bounds_partition_exactly() {
        let mut page = PageState::default();
        page.set_page_size(4);
        let total = 10;

        let mut covered = Vec::new();
        for index in 0..page.page_count(total) {
            page.set_page_index(index);
            let (start, end) = page.page_bounds(total);
            assert!(start <= end);
            covered.extend(start..end);
        }
        assert_eq!(covered, (0..total).collect::<Vec<_>>());
    }

    #[test]
    fn test_out_of_range_index_clamps() {
        let mut page = PageState::default();
        page.set_page_size(5);
        page.set_page_index(99);
        assert_eq!(page.clamped_index(12), 2);
        assert_eq!(page.page_bounds(12), (10, 12));
    }

    #[test]
    fn test_empty_total_is_single_empty_page() {
        let page = PageState::default();
        assert_eq!(page.page_count(0), 1);
        assert_eq!(page.page_bounds(0), (0, 0));
    }
}
