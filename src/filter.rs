//! Filter inputs for the listing view

/// Which filter currently governs the listing query.
///
/// At most one filter is active at a time; this is derived from
/// [`FilterState`] and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveFilter {
    None,
    Search,
    Category,
}

/// The two mutually exclusive filter inputs.
///
/// The exclusivity invariant (a non-empty search term implies no selected
/// categories, and vice versa) is enforced by the event coordinator, not
/// here; these are plain fields the rest of the crate reads.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub search_term: String,
    /// Slugs in the order the user toggled them on
    pub selected_categories: Vec<String>,
}

impl FilterState {
    pub fn active_filter(&self) -> ActiveFilter {
        debug_assert!(
            self.search_term.is_empty() || self.selected_categories.is_empty(),
            "search and category filters are mutually exclusive"
        );

        if !self.search_term.is_empty() {
            ActiveFilter::Search
        } else if !self.selected_categories.is_empty() {
            ActiveFilter::Category
        } else {
            ActiveFilter::None
        }
    }

    pub fn has_category(&self, slug: &str) -> bool {
        self.selected_categories.iter().any(|c| c == slug)
    }

    /// True when neither filter is set
    pub fn is_empty(&self) -> bool {
        self.search_term.is_empty() && self.selected_categories.is_empty()
    }
}
