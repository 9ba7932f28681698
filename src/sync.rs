//! QueryStateSynchronizer: the public facade
//!
//! Reconciles in-memory listing state with the address-bar query string
//! in both directions. The central correctness rule is the inbound /
//! outbound distinction: outbound writes (caused by the four mutation
//! operations) bump a write epoch and record the exact query written, so
//! that when the host's router echoes our own rewrite back as a
//! navigation event we acknowledge it instead of re-parsing it. Without
//! that guard an outbound write is indistinguishable from a back/forward
//! navigation and reconciliation can loop.

use std::time::Duration;

use crate::config::SyncConfig;
use crate::debounce::Debouncer;
use crate::listing::ListingState;
use crate::params::AddressBarParams;
use crate::state::{
    ListingCoordinator, StateDispatcher, StateEvent, StateSubscriber, ViewEffect,
};
use tracing::{debug, info, warn};

/// Routing facility the host provides.
///
/// Implementations wrap the framework router in production and a plain
/// recorder in tests and the probe binary.
pub trait Navigator {
    /// The current query string, without the leading `?`
    fn current_query(&self) -> String;

    /// Replace the current URL's query without pushing a history entry
    fn replace_query(&mut self, query: &str);
}

pub struct QueryStateSynchronizer<N: Navigator> {
    state: ListingState,
    dispatcher: StateDispatcher,
    navigator: N,
    debouncer: Option<Debouncer>,
    scroll_to_top: bool,

    /// Bumped on every outbound flush
    write_epoch: u64,
    /// Epoch most recently acknowledged by an inbound echo
    acked_epoch: u64,
    /// Exact query string of the latest outbound write
    last_written_query: String,
}

impl<N: Navigator> QueryStateSynchronizer<N> {
    /// Mount the synchronizer, rehydrating state from the current URL.
    pub fn new(navigator: N, config: &SyncConfig) -> Self {
        let mut sync = Self {
            state: ListingState::default(),
            dispatcher: StateDispatcher::new(),
            navigator,
            debouncer: (config.debounce_ms > 0)
                .then(|| Debouncer::new(Duration::from_millis(config.debounce_ms))),
            scroll_to_top: config.scroll_to_top,
            write_epoch: 0,
            acked_epoch: 0,
            last_written_query: String::new(),
        };

        let query = sync.navigator.current_query();
        debug!("mount: rehydrating from {:?}", query);
        sync.on_external_navigation(&query);
        sync
    }

    pub fn subscribe(&mut self, subscriber: Box<dyn StateSubscriber>) {
        self.dispatcher.subscribe(subscriber);
    }

    pub fn state(&self) -> &ListingState {
        &self.state
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn event_history(&self) -> &[StateEvent] {
        self.dispatcher.event_history()
    }

    /// Record the page count the listing view computed from its fetch
    pub fn set_total_pages(&mut self, total: usize) {
        self.state.pager.set_total(total);
    }

    /// Submit the search box. Always succeeds; a non-empty term displaces
    /// any category selection, and a term different from the last
    /// submitted one resets pagination.
    pub fn submit_search(&mut self, term: &str) {
        self.mutate(StateEvent::SearchSubmitted {
            term: term.to_string(),
        });
    }

    /// Toggle a category chip. A resulting non-empty set displaces an
    /// active search term; any membership change resets pagination.
    pub fn toggle_category(&mut self, slug: &str) {
        self.mutate(StateEvent::CategoryToggled {
            slug: slug.to_string(),
        });
    }

    /// Move the page cursor. Out-of-range requests are silently ignored;
    /// an accepted move also signals a scroll-to-top to subscribers.
    pub fn go_to_page(&mut self, page: usize) {
        self.mutate(StateEvent::PageRequested { page });
    }

    /// Inbound synchronization, fed by the router on mount and on
    /// back/forward navigation. Never triggers an outbound rewrite.
    pub fn on_external_navigation(&mut self, query: &str) {
        let query = query.strip_prefix('?').unwrap_or(query);

        if self.write_epoch > self.acked_epoch {
            if query == self.last_written_query {
                self.acked_epoch = self.write_epoch;
                debug!(epoch = self.write_epoch, "suppressed echo of own write");
                return;
            }
            // A genuine navigation supersedes any unacked write; stop
            // treating its eventual echo as pending and drop a queued
            // rewrite so stale state cannot clobber the new URL.
            warn!(
                "navigation to {:?} while write {:?} unacked, taking inbound",
                query, self.last_written_query
            );
            self.acked_epoch = self.write_epoch;
        }
        if let Some(debouncer) = &mut self.debouncer {
            debouncer.clear();
        }

        let event = StateEvent::ExternalNavigation {
            query: query.to_string(),
        };
        let change = self.state.process_event(&event);
        self.state.apply_change(change);
        info!("inbound navigation -> {:?}", self.state);
        self.dispatcher.notify(&event, &self.state, ViewEffect::None);
    }

    /// The route moved away from the listing: clear the search term and
    /// drop any queued rewrite (the next route owns the URL now).
    pub fn on_leave_view(&mut self) {
        if let Some(debouncer) = &mut self.debouncer {
            debouncer.clear();
        }

        let event = StateEvent::ViewLeft;
        let change = self.state.process_event(&event);
        if !change.is_empty() {
            self.state.apply_change(change);
            self.dispatcher.notify(&event, &self.state, ViewEffect::None);
        }
    }

    /// Pump from the host loop: flush a debounced rewrite whose delay has
    /// elapsed. A no-op without a debouncer (writes go out immediately).
    pub fn flush_pending(&mut self) {
        if let Some(debouncer) = &mut self.debouncer {
            if let Some(query) = debouncer.poll() {
                self.write(query);
            }
        }
    }

    /// Force any queued rewrite out now (teardown, tests)
    pub fn flush_now(&mut self) {
        if let Some(debouncer) = &mut self.debouncer {
            if let Some(query) = debouncer.flush() {
                self.write(query);
            }
        }
    }

    fn mutate(&mut self, event: StateEvent) {
        let change = self.state.process_event(&event);
        if change.is_empty() {
            debug!("event produced no state change: {:?}", event);
            return;
        }

        let page_changed = matches!(event, StateEvent::PageRequested { .. });
        self.state.apply_change(change);

        let effect = if page_changed && self.scroll_to_top {
            ViewEffect::ScrollToTop
        } else {
            ViewEffect::None
        };
        self.dispatcher.notify(&event, &self.state, effect);

        self.schedule_rewrite();
    }

    /// Outbound path: state is already updated, mirror it into the URL.
    /// With a debouncer only the last of a burst of mutations is written;
    /// echo suppression compares the recorded query string, so a
    /// coalesced flush is still recognized.
    fn schedule_rewrite(&mut self) {
        let query =
            AddressBarParams::from_state(&self.state.filter, &self.state.pager).to_query_string();

        match &mut self.debouncer {
            Some(debouncer) => {
                debug!("queueing url rewrite to {:?}", query);
                debouncer.record(query);
            }
            None => self.write(query),
        }
    }

    fn write(&mut self, query: String) {
        self.write_epoch += 1;
        debug!(epoch = self.write_epoch, "outbound url write: {:?}", query);
        self.last_written_query = query.clone();
        self.navigator.replace_query(&query);
    }
}
