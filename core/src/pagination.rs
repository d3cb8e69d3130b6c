//! Page-number arithmetic and the list view's page state machine.
//!
//! # Design
//! The backend paginates with a zero-based `skip`/`limit` pair while the UI
//! thinks in 1-based page numbers. `to_offset` and `to_page_count` are the
//! only two conversions; neither clamps — bounds validation belongs to
//! `PageWindow::go_to`, the single place a page transition is decided.

/// Fixed number of records per list page.
pub const PAGE_SIZE: u32 = 10;

/// Zero-based skip count for a 1-based page number. `page` must be ≥ 1.
pub fn to_offset(page: u32, page_size: u32) -> u32 {
    debug_assert!(page >= 1, "page numbers are 1-based");
    (page - 1) * page_size
}

/// Number of pages needed for `total` records; 0 when there are none.
pub fn to_page_count(total: u64, page_size: u32) -> u32 {
    total.div_ceil(page_size as u64) as u32
}

/// The list view's page state: `current ∈ [1, total_pages]`, or the empty
/// state when `total_pages` is 0. Lives as long as the list view does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    current: u32,
    total_pages: u32,
}

impl PageWindow {
    /// Initial state: page 1, no pages known yet.
    pub fn new() -> Self {
        Self {
            current: 1,
            total_pages: 0,
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Move to page `n`. Returns false, with no state change, unless
    /// `1 ≤ n ≤ total_pages`; the caller re-fetches on true.
    pub fn go_to(&mut self, n: u32) -> bool {
        if n < 1 || n > self.total_pages {
            return false;
        }
        self.current = n;
        true
    }

    /// Recomputed from the server total on every list fetch.
    pub fn set_total_pages(&mut self, total_pages: u32) {
        self.total_pages = total_pages;
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_zero_based() {
        assert_eq!(to_offset(1, 10), 0);
        assert_eq!(to_offset(2, 10), 10);
        assert_eq!(to_offset(7, 25), 150);
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(to_page_count(0, 10), 0);
        assert_eq!(to_page_count(1, 10), 1);
        assert_eq!(to_page_count(10, 10), 1);
        assert_eq!(to_page_count(11, 10), 2);
        assert_eq!(to_page_count(101, 10), 11);
    }

    #[test]
    fn offset_and_page_count_agree() {
        // The offset of the last page always lands inside the total.
        for total in [1u64, 9, 10, 11, 95, 100] {
            let pages = to_page_count(total, PAGE_SIZE);
            let last_offset = to_offset(pages, PAGE_SIZE);
            assert!((last_offset as u64) < total, "total={total}");
        }
    }

    #[test]
    fn window_starts_empty_on_page_one() {
        let window = PageWindow::new();
        assert_eq!(window.current(), 1);
        assert_eq!(window.total_pages(), 0);
    }

    #[test]
    fn go_to_rejects_out_of_range() {
        let mut window = PageWindow::new();
        window.set_total_pages(3);
        assert!(!window.go_to(0));
        assert!(!window.go_to(4));
        assert_eq!(window.current(), 1);
    }

    #[test]
    fn go_to_accepts_in_range() {
        let mut window = PageWindow::new();
        window.set_total_pages(3);
        assert!(window.go_to(3));
        assert_eq!(window.current(), 3);
        assert!(window.go_to(2));
        assert_eq!(window.current(), 2);
    }

    #[test]
    fn empty_window_rejects_every_target() {
        let mut window = PageWindow::new();
        assert!(!window.go_to(1));
        assert_eq!(window.current(), 1);
    }
}
