//! Poll-based debounce for outbound URL writes
//!
//! The host pumps [`Debouncer::poll`] from its tick/frame loop; only the
//! most recent value survives until its deadline passes. In-memory state
//! is never debounced, only the address-bar mirror goes through here.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<(Instant, String)>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Record a value, replacing any pending one and restarting the delay
    pub fn record(&mut self, value: String) {
        self.pending = Some((Instant::now() + self.delay, value));
    }

    /// Take the pending value if its deadline has passed
    pub fn poll(&mut self) -> Option<String> {
        match &self.pending {
            Some((deadline, _)) if Instant::now() >= *deadline => {
                self.pending.take().map(|(_, value)| value)
            }
            _ => None,
        }
    }

    /// Take the pending value regardless of the deadline
    pub fn flush(&mut self) -> Option<String> {
        self.pending.take().map(|(_, value)| value)
    }

    /// Drop the pending value without delivering it
    pub fn clear(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
