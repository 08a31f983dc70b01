//! Test builders — ergonomic constructors for `Package` and `Release`.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use libseek_core::{Catalog, Dependency, Package, Release, Resource};
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// ReleaseBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Release`] test fixtures.
///
/// # Example
///
/// ```rust
/// let release = ReleaseBuilder::new("1.2.1")
///     .sentence("Allows Arduino boards to control a variety of servo motors.")
///     .dependency("SPI", ">=1.0.0")
///     .build();
/// ```
pub struct ReleaseBuilder {
    release: Release,
}

impl ReleaseBuilder {
    pub fn new(version: &str) -> Self {
        let version = semver::Version::parse(version).expect("test version must be valid semver");
        Self {
            release: Release {
                author: "Test Author".to_string(),
                maintainer: "Test Maintainer <test@example.com>".to_string(),
                sentence: String::new(),
                paragraph: String::new(),
                website: "https://example.com".to_string(),
                category: "Other".to_string(),
                architectures: vec!["*".to_string()],
                types: vec!["Contributed".to_string()],
                license: "MIT".to_string(),
                provides_includes: Vec::new(),
                resource: Resource {
                    url: format!("https://example.com/lib-{version}.zip"),
                    archive_filename: format!("lib-{version}.zip"),
                    checksum: "SHA-256:00".to_string(),
                    size: 1024,
                    cache_path: "libraries".to_string(),
                },
                version,
                dependencies: Vec::new(),
            },
        }
    }

    pub fn sentence(mut self, sentence: impl Into<String>) -> Self {
        self.release.sentence = sentence.into();
        self
    }

    pub fn paragraph(mut self, paragraph: impl Into<String>) -> Self {
        self.release.paragraph = paragraph.into();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.release.author = author.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.release.category = category.into();
        self
    }

    pub fn architectures(mut self, archs: &[&str]) -> Self {
        self.release.architectures = archs.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn provides(mut self, header: impl Into<String>) -> Self {
        self.release.provides_includes.push(header.into());
        self
    }

    pub fn dependency(mut self, name: impl Into<String>, constraint: impl Into<String>) -> Self {
        self.release.dependencies.push(Dependency {
            name: name.into(),
            version_constraint: constraint.into(),
        });
        self
    }

    pub fn build(self) -> Release {
        self.release
    }
}

// ---------------------------------------------------------------------------
// PackageBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Package`] fixtures. The last release added becomes
/// `latest`; every release lands in `releases`.
pub struct PackageBuilder {
    name: String,
    releases: Vec<Release>,
}

impl PackageBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            releases: Vec::new(),
        }
    }

    pub fn release(mut self, release: ReleaseBuilder) -> Self {
        self.releases.push(release.build());
        self
    }

    pub fn build(self) -> Package {
        let latest = self
            .releases
            .last()
            .cloned()
            .unwrap_or_else(|| ReleaseBuilder::new("1.0.0").build());
        let mut releases: BTreeMap<String, Release> = self
            .releases
            .into_iter()
            .map(|r| (r.version.to_string(), r))
            .collect();
        releases
            .entry(latest.version.to_string())
            .or_insert_with(|| latest.clone());

        Package {
            name: self.name,
            latest,
            releases,
        }
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// A single-release package with the given description fields.
pub fn package(name: &str, sentence: &str, paragraph: &str) -> Package {
    PackageBuilder::new(name)
        .release(ReleaseBuilder::new("1.0.0").sentence(sentence).paragraph(paragraph))
        .build()
}

/// A package whose only searchable text is its name.
pub fn bare_package(name: &str) -> Package {
    package(name, "", "")
}

/// A catalog of bare packages with the given names, in order.
pub fn catalog_of(names: &[&str]) -> Catalog {
    names.iter().map(|n| bare_package(n)).collect()
}
