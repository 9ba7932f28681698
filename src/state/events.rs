//! State events and changes

/// Events that can trigger listing state changes
#[derive(Debug, Clone)]
pub enum StateEvent {
    /// User submitted the search box
    SearchSubmitted { term: String },

    /// User toggled a category chip
    CategoryToggled { slug: String },

    /// User clicked a pagination control
    PageRequested { page: usize },

    /// The router reported a navigation this component did not cause
    /// (initial load, back/forward, direct link)
    ExternalNavigation { query: String },

    /// The route moved away from the listing view
    ViewLeft,
}

/// Changes to apply to listing state.
///
/// Fields left `None` are untouched, so a change describes only the
/// delta an event produced.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StateChange {
    pub search_term: Option<String>,
    pub categories: Option<Vec<String>>,
    pub page: Option<usize>,
}

impl StateChange {
    pub fn is_empty(&self) -> bool {
        self.search_term.is_none() && self.categories.is_none() && self.page.is_none()
    }

    /// Create a change that sets the search term
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search_term: Some(term.into()),
            ..Default::default()
        }
    }

    /// Create a change that replaces the category set
    pub fn categories(slugs: Vec<String>) -> Self {
        Self {
            categories: Some(slugs),
            ..Default::default()
        }
    }

    /// Create a change that moves the page cursor
    pub fn page(page: usize) -> Self {
        Self {
            page: Some(page),
            ..Default::default()
        }
    }

    /// Create a change that returns pagination to the first page
    pub fn reset_page() -> Self {
        Self::page(1)
    }

    /// Combine with another change; `other`'s fields win where both are set
    pub fn and(mut self, other: StateChange) -> Self {
        if other.search_term.is_some() {
            self.search_term = other.search_term;
        }
        if other.categories.is_some() {
            self.categories = other.categories;
        }
        if other.page.is_some() {
            self.page = other.page;
        }
        self
    }
}
