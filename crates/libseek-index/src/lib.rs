//! libseek-index — builds a [`Catalog`] from a library index document.
//!
//! The index is a flat JSON list of releases:
//!
//! ```json
//! { "libraries": [ { "name": "Servo", "version": "1.2.1", "sentence": "...", ... } ] }
//! ```
//!
//! Releases are grouped by name into [`Package`]s. Packages keep the order in
//! which their first release appears, and each package's `latest` is its
//! highest version.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use libseek_core::{Catalog, Dependency, Package, Release, Resource};
use serde::Deserialize;

/// Errors raised while reading an index.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("failed to read index {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed index: {0}")]
    Parse(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// On-disk format
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawIndex {
    #[serde(default)]
    libraries: Vec<RawRelease>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRelease {
    name: String,
    version: String,
    #[serde(default)]
    author: String,
    #[serde(default)]
    maintainer: String,
    #[serde(default)]
    sentence: String,
    #[serde(default)]
    paragraph: String,
    #[serde(default)]
    website: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    architectures: Vec<String>,
    #[serde(default)]
    types: Vec<String>,
    #[serde(default)]
    license: String,
    #[serde(default)]
    provides_includes: Vec<String>,
    #[serde(default)]
    dependencies: Vec<RawDependency>,
    #[serde(default)]
    url: String,
    #[serde(default)]
    archive_file_name: String,
    #[serde(default)]
    size: u64,
    #[serde(default)]
    checksum: String,
}

#[derive(Debug, Deserialize)]
struct RawDependency {
    name: String,
    #[serde(default)]
    version: String,
}

// ---------------------------------------------------------------------------
// Loader
// ---------------------------------------------------------------------------

/// Turns index documents into catalogs.
#[derive(Debug, Clone)]
pub struct IndexLoader {
    cache_path: String,
}

impl Default for IndexLoader {
    fn default() -> Self {
        Self::new("libraries")
    }
}

impl IndexLoader {
    /// `cache_path` is recorded on every release's download resource.
    pub fn new(cache_path: impl Into<String>) -> Self {
        Self {
            cache_path: cache_path.into(),
        }
    }

    /// Read and parse the index file at `path`.
    pub fn load(&self, path: &Path) -> Result<Catalog, IndexError> {
        let content = std::fs::read_to_string(path).map_err(|source| IndexError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = self.parse(&content)?;
        tracing::debug!(path = %path.display(), packages = catalog.len(), "index loaded");
        Ok(catalog)
    }

    /// Parse an index document held in memory.
    pub fn parse(&self, content: &str) -> Result<Catalog, IndexError> {
        let raw: RawIndex = serde_json::from_str(content)?;

        // (name, releases) in first-seen order
        let mut groups: Vec<(String, Vec<Release>)> = Vec::new();
        let mut slots: HashMap<String, usize> = HashMap::new();

        for entry in raw.libraries {
            let Some(version) = parse_version(&entry.version) else {
                tracing::warn!(
                    library = %entry.name,
                    version = %entry.version,
                    "skipping release with unparseable version"
                );
                continue;
            };
            let name = entry.name.clone();
            let release = self.release(entry, version);

            match slots.get(&name) {
                Some(&slot) => groups[slot].1.push(release),
                None => {
                    slots.insert(name.clone(), groups.len());
                    groups.push((name, vec![release]));
                }
            }
        }

        Ok(groups
            .into_iter()
            .filter_map(|(name, releases)| build_package(name, releases))
            .collect())
    }

    fn release(&self, entry: RawRelease, version: semver::Version) -> Release {
        Release {
            author: entry.author,
            maintainer: entry.maintainer,
            sentence: entry.sentence,
            paragraph: entry.paragraph,
            website: entry.website,
            category: entry.category,
            architectures: entry.architectures,
            types: entry.types,
            license: entry.license,
            provides_includes: entry.provides_includes,
            version,
            dependencies: entry
                .dependencies
                .into_iter()
                .map(|dep| Dependency {
                    name: dep.name,
                    version_constraint: dep.version,
                })
                .collect(),
            resource: Resource {
                url: entry.url,
                archive_filename: entry.archive_file_name,
                checksum: entry.checksum,
                size: entry.size,
                cache_path: self.cache_path.clone(),
            },
        }
    }
}

fn build_package(name: String, releases: Vec<Release>) -> Option<Package> {
    let mut latest: Option<&Release> = None;
    for release in &releases {
        if latest.map_or(true, |l| release.version > l.version) {
            latest = Some(release);
        }
    }
    let latest = latest?.clone();

    let mut by_version = BTreeMap::new();
    for release in releases {
        by_version
            .entry(release.version.to_string())
            .or_insert(release);
    }

    Some(Package {
        name,
        latest,
        releases: by_version,
    })
}

/// Parse a version leniently: a leading `v` is dropped and missing minor or
/// patch components are filled with zero (`1.2` becomes `1.2.0`).
pub fn parse_version(input: &str) -> Option<semver::Version> {
    let trimmed = input.trim();
    let trimmed = trimmed.strip_prefix('v').unwrap_or(trimmed);

    let split = trimmed
        .find(|c: char| c == '-' || c == '+')
        .unwrap_or(trimmed.len());
    let (core, suffix) = trimmed.split_at(split);

    let padded = match core.split('.').count() {
        1 => format!("{core}.0.0{suffix}"),
        2 => format!("{core}.0{suffix}"),
        _ => trimmed.to_string(),
    };
    semver::Version::parse(&padded).ok()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
