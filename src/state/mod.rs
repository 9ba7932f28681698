//! Event-driven coordination for listing state

pub mod coordinator;
pub mod dispatcher;
pub mod events;

pub use coordinator::ListingCoordinator;
pub use dispatcher::{StateDispatcher, StateSubscriber, ViewEffect};
pub use events::{StateChange, StateEvent};
