//! libseek-core — fuzzy search over a library catalog.
//!
//! This crate exposes the search pipeline as public modules, plus the catalog
//! types it reads and the response shapes it produces.
//!
//! # Architecture
//!
//! ```text
//! query ──► Normalizer ──► {raw, cleaned}
//!                               │
//! Catalog ──────────────────► Matcher ──► Mapper ──► SearchResponse
//! ```
//!
//! Everything runs synchronously on the caller's thread. The catalog is only
//! borrowed; results are freshly allocated per call.

pub mod config;
pub mod error;
pub mod mapper;
pub mod matcher;
pub mod normalizer;
pub mod result;
pub mod search;
pub mod types;

pub use error::SearchError;
pub use result::{
    DownloadResource, LibraryDependency, LibraryRelease, SearchResponse, SearchResult,
    SearchStatus,
};
pub use search::{
    library_search, search, CatalogResolver, InstanceId, InstanceRegistry, SearchEngine,
    SearchRequest,
};
pub use types::{Catalog, Dependency, Package, Release, Resource};
