//! Error types surfaced by the search entry point.

use crate::search::InstanceId;

/// Failures a search request can produce.
///
/// Matching itself is infallible; the only way a request fails is if its
/// catalog cannot be found.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SearchError {
    /// The instance handle does not resolve to a catalog.
    #[error("invalid instance: {0}")]
    InvalidInstance(InstanceId),
}
