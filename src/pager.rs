//! Page cursor with silent clamping

/// 1-based pagination cursor.
///
/// `total_pages` is reported by the listing view after each fetch and
/// defaults to 1 until known. Out-of-range page requests are ignored
/// rather than clamped to the nearest edge, matching the disabled-button
/// semantics of the pagination controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    pub current_page: usize,
    pub total_pages: usize,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
        }
    }
}

impl PageCursor {
    /// Move to `page` if it is in range and different from the current
    /// page. Returns whether the cursor moved.
    pub fn go_to(&mut self, page: usize) -> bool {
        if page >= 1 && page <= self.total_pages && page != self.current_page {
            self.current_page = page;
            true
        } else {
            false
        }
    }

    /// Return to the first page without touching `total_pages`
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Record the page count reported by the listing view.
    ///
    /// Does not move the cursor: a deep link past the last page stays
    /// where it is (and renders an empty page) rather than silently
    /// jumping, so the address bar and the view agree.
    pub fn set_total(&mut self, total: usize) {
        self.total_pages = total.max(1);
    }

    /// Page count for `item_count` items at `page_size` per page, never 0
    pub fn pages_for(item_count: usize, page_size: usize) -> usize {
        if page_size == 0 {
            return 1;
        }
        item_count.div_ceil(page_size).max(1)
    }
}
