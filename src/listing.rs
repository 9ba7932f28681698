//! In-memory state for the filterable listing view

use crate::filter::{ActiveFilter, FilterState};
use crate::pager::PageCursor;

/// Everything the listing view needs to build its query: the active
/// filter inputs and the pagination cursor.
///
/// Mutations only happen through the event coordinator, so
/// `filter.search_term` is always the last *submitted* term (the search
/// box's live text never lands here until the user submits).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListingState {
    pub filter: FilterState,
    pub pager: PageCursor,
}

impl ListingState {
    pub fn active_filter(&self) -> ActiveFilter {
        self.filter.active_filter()
    }

    pub fn search_term(&self) -> &str {
        &self.filter.search_term
    }

    pub fn selected_categories(&self) -> &[String] {
        &self.filter.selected_categories
    }

    pub fn current_page(&self) -> usize {
        self.pager.current_page
    }
}
