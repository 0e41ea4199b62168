//! exovision-client — The request/cache layer.
//!
//! Talks to the external classification backend over REST and exposes the
//! three observable query states (pending, ready, failed) the dashboard
//! renders from. The `CatalogProvider` trait is the seam between the UI and
//! the data source: the live implementation wraps the HTTP client, the mock
//! implementation serves a fixture catalog, and pages cannot tell them
//! apart.

pub mod api;
pub mod error;
pub mod provider;
pub mod query;

pub use api::ApiClient;
pub use error::{ClientError, Result};
pub use provider::{CatalogProvider, LiveProvider, MockProvider};
pub use query::QueryState;
