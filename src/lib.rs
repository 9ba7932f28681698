pub mod config;
pub mod debounce;
pub mod filter;
pub mod listing;
pub mod logging;
pub mod pager;
pub mod params;
pub mod state;
pub mod sync;

pub use config::SyncConfig;
pub use filter::{ActiveFilter, FilterState};
pub use listing::ListingState;
pub use pager::PageCursor;
pub use params::AddressBarParams;
pub use sync::{Navigator, QueryStateSynchronizer};
