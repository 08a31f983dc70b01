//! Mapper — converts catalog entries into response shapes.
//!
//! Pure structural copies. The only transformations are the version, which
//! becomes its canonical string, and dependencies, which become
//! name/constraint pairs in their original order.

use crate::result::{DownloadResource, LibraryDependency, LibraryRelease, SearchResult};
use crate::types::{Dependency, Package, Release, Resource};

pub fn map_package(package: &Package) -> SearchResult {
    let releases = package
        .releases
        .iter()
        .map(|(version, release)| (version.clone(), map_release(release)))
        .collect();

    SearchResult {
        name: package.name.clone(),
        latest: map_release(&package.latest),
        releases,
    }
}

pub fn map_release(release: &Release) -> LibraryRelease {
    LibraryRelease {
        author: release.author.clone(),
        version: release.version.to_string(),
        maintainer: release.maintainer.clone(),
        sentence: release.sentence.clone(),
        paragraph: release.paragraph.clone(),
        website: release.website.clone(),
        category: release.category.clone(),
        architectures: release.architectures.clone(),
        types: release.types.clone(),
        license: release.license.clone(),
        provides_includes: release.provides_includes.clone(),
        dependencies: map_dependencies(&release.dependencies),
        resources: map_resource(&release.resource),
    }
}

pub fn map_dependencies(dependencies: &[Dependency]) -> Vec<LibraryDependency> {
    dependencies
        .iter()
        .map(|dep| LibraryDependency {
            name: dep.name.clone(),
            version_constraint: dep.version_constraint.clone(),
        })
        .collect()
}

fn map_resource(resource: &Resource) -> DownloadResource {
    DownloadResource {
        url: resource.url.clone(),
        archive_filename: resource.archive_filename.clone(),
        checksum: resource.checksum.clone(),
        size: resource.size,
        cache_path: resource.cache_path.clone(),
    }
}
