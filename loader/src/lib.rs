//! Page-data loading for the event pages.
//!
//! An [`EventLoader`] pulls the static `events.json` asset through a
//! [`Fetch`] capability and hands back a [`LoadResult`]. How a failure is
//! surfaced is chosen per call site with a [`LoadPolicy`]:
//!
//! - [`LoadPolicy::Resilient`] logs the failure and degrades to an empty list.
//! - [`LoadPolicy::Propagate`] returns the [`LoadError`] to the caller.

pub mod error;
pub mod fallback;
pub mod fetch;
pub mod loader;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::LoadError;
pub use fallback::Fallback;
pub use fetch::{Fetch, FetchResponse, HttpFetcher, HttpResponse};
pub use loader::{load_events, try_load_events, EventLoader, LoadPolicy, DEFAULT_EVENTS_PATH};
pub use shared::{Event, EventDocument, LoadResult};
