//! Repository port for installed package metadata.

use std::sync::Arc;

use crate::{Result, package::Package};

/// Port supplying the modules installed in a project.
///
/// Implementations decide where package metadata comes from (a manifest on
/// disk, an in-memory fixture, ...). Callers only rely on the order of the
/// returned packages being stable between calls when nothing was installed or
/// removed in the meantime.
///
/// # Examples
///
/// ```
/// use phplist4_modules::ports::PackageRepository;
///
/// fn module_names<R: PackageRepository>(repo: &R) -> phplist4_modules::Result<Vec<String>> {
///     Ok(repo
///         .find_modules()?
///         .iter()
///         .map(|package| package.name().to_string())
///         .collect())
/// }
/// ```
pub trait PackageRepository {
    /// Return the installed module packages in a stable order.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying package metadata cannot be read or
    /// parsed.
    fn find_modules(&self) -> Result<Vec<Package>>;
}

impl<R: PackageRepository + ?Sized> PackageRepository for Arc<R> {
    fn find_modules(&self) -> Result<Vec<Package>> {
        (**self).find_modules()
    }
}

impl<R: PackageRepository + ?Sized> PackageRepository for &R {
    fn find_modules(&self) -> Result<Vec<Package>> {
        (**self).find_modules()
    }
}
