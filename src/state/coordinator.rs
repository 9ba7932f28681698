//! Event processing for ListingState
//!
//! All of the filter invariants live here: submitting a search clears the
//! category set, a non-empty category set clears the search term, and the
//! page cursor resets exactly when the active filter changes identity.

use crate::listing::ListingState;
use crate::params::AddressBarParams;
use crate::state::events::{StateChange, StateEvent};
use tracing::{debug, info};

/// Trait for coordinating listing state changes
pub trait ListingCoordinator {
    /// Process a state event and return the changes to apply
    fn process_event(&self, event: &StateEvent) -> StateChange;

    /// Apply a state change
    fn apply_change(&mut self, change: StateChange);
}

impl ListingCoordinator for ListingState {
    fn process_event(&self, event: &StateEvent) -> StateChange {
        match event {
            StateEvent::SearchSubmitted { term } => self.process_search(term),
            StateEvent::CategoryToggled { slug } => self.process_toggle(slug),
            StateEvent::PageRequested { page } => self.process_page(*page),
            StateEvent::ExternalNavigation { query } => self.process_navigation(query),
            StateEvent::ViewLeft => self.process_leave(),
        }
    }

    fn apply_change(&mut self, change: StateChange) {
        debug!("applying state change: {:?}", change);

        if let Some(term) = change.search_term {
            self.filter.search_term = term;
        }
        if let Some(slugs) = change.categories {
            self.filter.selected_categories = slugs;
        }
        if let Some(page) = change.page {
            self.pager.current_page = page;
        }
    }
}

impl ListingState {
    /// A newly submitted term takes over the listing: it displaces any
    /// category selection and resets pagination. Re-submitting the
    /// identical term keeps the current page (guard against duplicate
    /// Enter presses).
    fn process_search(&self, term: &str) -> StateChange {
        let mut change = StateChange::default();

        if term != self.filter.search_term {
            info!("search term changed to {:?} -> page reset", term);
            change = StateChange::search(term).and(StateChange::reset_page());
        } else {
            debug!("identical search term re-submitted, keeping page");
        }

        if !term.is_empty() && !self.filter.selected_categories.is_empty() {
            change = change.and(StateChange::categories(Vec::new()));
        }

        change
    }

    /// Any membership change in the category set resets pagination, and a
    /// resulting non-empty set displaces an active search term.
    fn process_toggle(&self, slug: &str) -> StateChange {
        let mut slugs = self.filter.selected_categories.clone();
        if let Some(pos) = slugs.iter().position(|c| c == slug) {
            slugs.remove(pos);
        } else {
            slugs.push(slug.to_string());
        }

        let clears_search = !slugs.is_empty() && !self.filter.search_term.is_empty();
        let mut change = StateChange::categories(slugs).and(StateChange::reset_page());
        if clears_search {
            info!("category selected -> clearing active search");
            change = change.and(StateChange::search(""));
        }

        change
    }

    /// Out-of-range or same-page requests are silently ignored, matching
    /// the disabled pagination buttons in the consuming view.
    fn process_page(&self, page: usize) -> StateChange {
        let mut probe = self.pager;
        if probe.go_to(page) {
            StateChange::page(page)
        } else {
            debug!(
                "page request {} ignored (current {}, total {})",
                page, self.pager.current_page, self.pager.total_pages
            );
            StateChange::default()
        }
    }

    /// Rehydrate from a navigated-to query string. Parsing never fails;
    /// malformed values fall back to defaults. A hand-crafted URL carrying
    /// both filters is resolved in favor of the search term. The page is
    /// deliberately not range-checked here: a deep link may point past the
    /// last page before the item count is known.
    fn process_navigation(&self, query: &str) -> StateChange {
        let params = AddressBarParams::parse(query);

        let categories = if !params.search.is_empty() && !params.categories.is_empty() {
            debug!("url carried both filters, search wins");
            Vec::new()
        } else {
            params.categories
        };

        StateChange::search(params.search)
            .and(StateChange::categories(categories))
            .and(StateChange::page(params.page))
    }

    /// Leaving the listing clears the search term; the rest of the state
    /// dies with the component.
    fn process_leave(&self) -> StateChange {
        if self.filter.search_term.is_empty() {
            StateChange::default()
        } else {
            StateChange::search("")
        }
    }
}
