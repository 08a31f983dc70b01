//! Response shapes returned to callers.
//!
//! These mirror the catalog types in [`crate::types`] but are kept separate so
//! the catalog representation can change without touching the response
//! contract. Everything here serializes with camelCase keys.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Outcome of a search request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub libraries: Vec<SearchResult>,
    pub status: SearchStatus,
}

/// Reserved for partial-failure signalling; always `Success` today.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
    #[default]
    Success,
}

impl std::fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchStatus::Success => write!(f, "success"),
        }
    }
}

/// One matched library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub name: String,
    pub latest: LibraryRelease,
    pub releases: BTreeMap<String, LibraryRelease>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryRelease {
    pub author: String,
    pub version: String,
    pub maintainer: String,
    pub sentence: String,
    pub paragraph: String,
    pub website: String,
    pub category: String,
    pub architectures: Vec<String>,
    pub types: Vec<String>,
    pub license: String,
    pub provides_includes: Vec<String>,
    pub dependencies: Vec<LibraryDependency>,
    pub resources: DownloadResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryDependency {
    pub name: String,
    pub version_constraint: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadResource {
    pub url: String,
    #[serde(rename = "archivefilename")]
    pub archive_filename: String,
    pub checksum: String,
    pub size: u64,
    #[serde(rename = "cachepath")]
    pub cache_path: String,
}
