//! Core types for libseek-core.
//!
//! This module defines the read-only catalog the search engine works over:
//! the [`Catalog`] of [`Package`]s, each carrying its [`Release`] history,
//! plus the [`Dependency`] and [`Resource`] records nested inside a release.
//!
//! The catalog is built elsewhere (see `libseek-index`) and handed to the
//! engine by reference. Nothing in this crate mutates it during a search.

use std::collections::BTreeMap;

/// An ordered, read-only collection of packages.
///
/// Iteration order is insertion order. Names are expected to be unique but
/// the catalog does not enforce it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    packages: Vec<Package>,
}

impl Catalog {
    pub fn new(packages: Vec<Package>) -> Self {
        Self { packages }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Package> {
        self.packages.iter()
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// First package with the given name, if any.
    pub fn get(&self, name: &str) -> Option<&Package> {
        self.packages.iter().find(|p| p.name == name)
    }
}

impl FromIterator<Package> for Catalog {
    fn from_iter<I: IntoIterator<Item = Package>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Package;
    type IntoIter = std::slice::Iter<'a, Package>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A named library with its release history.
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    /// Library name, unique within a catalog.
    pub name: String,
    /// The most recent release. Also present in `releases`.
    pub latest: Release,
    /// Every known release keyed by its version string.
    pub releases: BTreeMap<String, Release>,
}

/// Version-specific metadata and download descriptor for one package version.
#[derive(Debug, Clone, PartialEq)]
pub struct Release {
    pub author: String,
    pub maintainer: String,
    /// Short, one-line description.
    pub sentence: String,
    /// Long description.
    pub paragraph: String,
    pub website: String,
    pub category: String,
    pub architectures: Vec<String>,
    pub types: Vec<String>,
    pub license: String,
    /// Header files the library makes available to sketches.
    pub provides_includes: Vec<String>,
    pub version: semver::Version,
    /// Declared dependencies, in index order.
    pub dependencies: Vec<Dependency>,
    pub resource: Resource,
}

/// A dependency on another library.
///
/// The constraint is kept as the opaque string the index declared; the engine
/// never evaluates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    pub name: String,
    pub version_constraint: String,
}

/// Where a release archive lives and how to verify it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resource {
    pub url: String,
    pub archive_filename: String,
    /// Checksum in `ALGO:hex` form, e.g. `SHA-256:...`.
    pub checksum: String,
    /// Archive size in bytes.
    pub size: u64,
    /// Directory (relative to the download cache) the archive is stored in.
    pub cache_path: String,
}
