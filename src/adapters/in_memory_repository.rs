//! In-memory package repository for testing and embedding.
//!
//! This adapter provides a pure in-memory implementation of PackageRepository,
//! enabling fast tests without any manifest files on disk.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{Result, package::Package, ports::PackageRepository};

/// In-memory package repository.
///
/// Holds module packages in insertion order. Every package added here is
/// reported as a module; no type filtering is applied.
///
/// # Examples
///
/// ```
/// use phplist4_modules::adapters::InMemoryPackageRepository;
/// use phplist4_modules::ports::PackageRepository;
/// use phplist4_modules::Package;
///
/// let repo = InMemoryPackageRepository::new();
/// repo.add(Package::new("phplist/foo"));
///
/// assert_eq!(repo.find_modules()?.len(), 1);
/// # Ok::<(), phplist4_modules::Error>(())
/// ```
///
/// # Thread Safety
///
/// This repository is thread-safe and can be safely cloned and shared across
/// threads. All clones share the same underlying storage.
#[derive(Clone, Default)]
pub struct InMemoryPackageRepository {
    packages: Arc<Mutex<Vec<Package>>>,
}

impl InMemoryPackageRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with the given packages.
    pub fn with_packages(packages: impl IntoIterator<Item = Package>) -> Self {
        Self {
            packages: Arc::new(Mutex::new(packages.into_iter().collect())),
        }
    }

    /// Append a package after the ones already stored.
    pub fn add(&self, package: Package) {
        self.lock().push(package);
    }

    /// Get the number of packages currently stored.
    pub fn count(&self) -> usize {
        self.lock().len()
    }

    /// Remove all stored packages.
    pub fn clear(&self) {
        self.lock().clear();
    }

    // A poisoned lock still holds a consistent Vec, so keep using it.
    fn lock(&self) -> MutexGuard<'_, Vec<Package>> {
        self.packages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl PackageRepository for InMemoryPackageRepository {
    fn find_modules(&self) -> Result<Vec<Package>> {
        Ok(self.lock().clone())
    }
}
