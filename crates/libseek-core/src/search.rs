//! Search layer — fuzzy library search over a catalog.
//!
//! Each package is tested against the raw query first and, failing that,
//! against the query with separator noise removed. Matching packages are
//! returned in catalog order; there is no relevance sort.
//!
//! An empty (or all-space) query returns the whole catalog.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::mapper::map_package;
use crate::matcher::{matches, Thresholds};
use crate::normalizer::clean_query;
use crate::result::{SearchResponse, SearchResult, SearchStatus};
use crate::types::{Catalog, Package};

// ---------------------------------------------------------------------------
// Catalog resolution
// ---------------------------------------------------------------------------

/// Opaque handle a host uses to name one loaded catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstanceId(pub u32);

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Looks up the catalog behind an instance handle.
///
/// Implemented by whatever owns the catalogs; the engine only reads through it.
pub trait CatalogResolver {
    fn resolve(&self, instance: &InstanceId) -> Option<&Catalog>;
}

/// In-memory table of loaded catalogs.
#[derive(Debug, Default)]
pub struct InstanceRegistry {
    catalogs: HashMap<InstanceId, Catalog>,
    next_id: u32,
}

impl InstanceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `catalog` under a fresh handle.
    pub fn insert(&mut self, catalog: Catalog) -> InstanceId {
        self.next_id = self.next_id.wrapping_add(1);
        let id = InstanceId(self.next_id);
        tracing::debug!(instance = %id, packages = catalog.len(), "catalog registered");
        self.catalogs.insert(id, catalog);
        id
    }

    pub fn remove(&mut self, instance: &InstanceId) -> Option<Catalog> {
        self.catalogs.remove(instance)
    }

    pub fn len(&self) -> usize {
        self.catalogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalogs.is_empty()
    }
}

impl CatalogResolver for InstanceRegistry {
    fn resolve(&self, instance: &InstanceId) -> Option<&Catalog> {
        self.catalogs.get(instance)
    }
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub instance: InstanceId,
    pub query: String,
}

impl SearchRequest {
    pub fn new(instance: InstanceId, query: impl Into<String>) -> Self {
        Self {
            instance,
            query: query.into(),
        }
    }
}

/// Resolve the request's catalog and search it.
///
/// Fails with [`SearchError::InvalidInstance`] before any matching if the
/// handle is unknown.
pub fn library_search<R>(
    resolver: &R,
    engine: &SearchEngine,
    request: &SearchRequest,
) -> Result<SearchResponse, SearchError>
where
    R: CatalogResolver + ?Sized,
{
    let catalog = resolver
        .resolve(&request.instance)
        .ok_or(SearchError::InvalidInstance(request.instance))?;

    Ok(SearchResponse {
        libraries: engine.search(catalog, &request.query),
        status: SearchStatus::Success,
    })
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Stateless search over borrowed catalogs. Safe to share across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchEngine {
    thresholds: Thresholds,
}

impl SearchEngine {
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn search(&self, catalog: &Catalog, raw_query: &str) -> Vec<SearchResult> {
        if raw_query.trim_matches(' ').is_empty() {
            tracing::debug!(packages = catalog.len(), "empty query, returning whole catalog");
            return catalog.iter().map(map_package).collect();
        }

        let cleaned = clean_query(raw_query);
        // Measured on the untrimmed query, unlike the emptiness check above.
        let max_distance = self.thresholds.max_distance_for(raw_query);
        tracing::debug!(query = raw_query, cleaned = %cleaned, max_distance, "searching catalog");

        let queries = [raw_query, cleaned.as_str()];
        let results: Vec<SearchResult> = catalog
            .iter()
            .filter(|package| package_matches(package, &queries, max_distance))
            .map(map_package)
            .collect();

        tracing::debug!(matched = results.len(), total = catalog.len(), "search complete");
        results
    }
}

/// Search `catalog` with the default thresholds.
pub fn search(catalog: &Catalog, raw_query: &str) -> Vec<SearchResult> {
    SearchEngine::default().search(catalog, raw_query)
}

fn package_matches(package: &Package, queries: &[&str], max_distance: usize) -> bool {
    let fields = [
        package.name.as_str(),
        package.latest.paragraph.as_str(),
        package.latest.sentence.as_str(),
    ];
    let hit = queries.iter().any(|query| matches(query, &fields, max_distance));
    tracing::trace!(package = %package.name, hit, "package tested");
    hit
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
