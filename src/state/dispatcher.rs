//! Subscriber notification for applied state changes

use crate::listing::ListingState;
use crate::state::events::StateEvent;
use tracing::{debug, info};

/// Side effects the consuming view should perform after a change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEffect {
    None,
    /// Scroll the content area back to the top (emitted on page changes)
    ScrollToTop,
}

/// Trait for components that subscribe to listing state changes
pub trait StateSubscriber {
    /// Handle an applied state event; `state` is the post-change state
    fn on_state_event(&mut self, event: &StateEvent, state: &ListingState, effect: ViewEffect);

    /// Get subscriber name for debugging
    fn name(&self) -> &str;
}

/// Fans applied changes out to subscribers and keeps a bounded event
/// history for debugging. The synchronizer owns both the state and this
/// dispatcher, so notification happens after each `apply_change`.
pub struct StateDispatcher {
    subscribers: Vec<Box<dyn StateSubscriber>>,
    event_history: Vec<StateEvent>,
    max_history: usize,
}

impl StateDispatcher {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
            event_history: Vec::new(),
            max_history: 100,
        }
    }

    /// Add a subscriber
    pub fn subscribe(&mut self, subscriber: Box<dyn StateSubscriber>) {
        info!("StateDispatcher: adding subscriber: {}", subscriber.name());
        self.subscribers.push(subscriber);
    }

    /// Notify all subscribers of an applied event
    pub fn notify(&mut self, event: &StateEvent, state: &ListingState, effect: ViewEffect) {
        self.event_history.push(event.clone());
        if self.event_history.len() > self.max_history {
            self.event_history.remove(0);
        }

        for subscriber in &mut self.subscribers {
            debug!("StateDispatcher: notifying subscriber: {}", subscriber.name());
            subscriber.on_state_event(event, state, effect);
        }
    }

    /// Get event history for debugging
    pub fn event_history(&self) -> &[StateEvent] {
        &self.event_history
    }
}

impl Default for StateDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
