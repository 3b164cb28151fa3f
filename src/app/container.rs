//! Dependency injection container for module discovery.
//!
//! The container owns the package repository and the project configuration
//! and wires them into finders and file generation.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use tracing::info;

use super::config::ProjectConfig;
use crate::{
    Result, adapters::InstalledPackageRepository, discovery::ModuleFinder, error::Error,
    ports::PackageRepository,
};

/// Paths of the configuration files written by [`App::write_configuration`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFiles {
    pub bundles: PathBuf,
    pub routes: PathBuf,
}

/// Application with dependency injection.
///
/// # Examples
///
/// ## Production usage
///
/// ```no_run
/// use phplist4_modules::app::{App, ProjectConfig};
///
/// let app = App::with_config(ProjectConfig::new("/var/www/phplist"));
/// let files = app.write_configuration()?;
/// println!("wrote {}", files.bundles.display());
/// # Ok::<(), phplist4_modules::Error>(())
/// ```
///
/// ## Testing with dependency injection
///
/// ```
/// use phplist4_modules::adapters::InMemoryPackageRepository;
/// use phplist4_modules::app::App;
///
/// let app = App::for_testing()
///     .with_repository(InMemoryPackageRepository::new())
///     .build();
///
/// assert!(app.module_finder().find_bundle_classes()?.is_empty());
/// # Ok::<(), phplist4_modules::Error>(())
/// ```
pub struct App {
    /// Source of installed module packages
    package_repository: Arc<dyn PackageRepository + Send + Sync>,
    /// Project layout and output locations
    config: ProjectConfig,
}

impl App {
    /// Create an app for the current directory.
    ///
    /// Uses `InstalledPackageRepository` rooted at `.` and the default module
    /// type.
    pub fn new() -> Self {
        Self::with_config(ProjectConfig::default())
    }

    /// Create an app reading installed packages of the configured project.
    pub fn with_config(config: ProjectConfig) -> Self {
        Self {
            package_repository: installed_repository(&config),
            config,
        }
    }

    /// Create a builder for constructing an app with custom dependencies.
    ///
    /// Primarily used for testing with in-memory repositories.
    pub fn for_testing() -> AppBuilder {
        AppBuilder::new()
    }

    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    /// Get the package repository.
    pub fn package_repository(&self) -> Arc<dyn PackageRepository + Send + Sync> {
        Arc::clone(&self.package_repository)
    }

    /// Create a finder over this app's package repository.
    pub fn module_finder(&self) -> ModuleFinder {
        ModuleFinder::with_shared_repository(self.package_repository())
    }

    /// Generate the bundle and route files into the configured directory.
    ///
    /// Both documents are rendered before anything is written, so invalid
    /// module metadata leaves existing files untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if module metadata is invalid or the files cannot be
    /// written.
    pub fn write_configuration(&self) -> Result<GeneratedFiles> {
        let finder = self.module_finder();
        let bundles_yaml = finder.create_bundle_configuration_yaml()?;
        let routes_yaml = finder.create_route_configuration_yaml()?;

        let output_dir = self.config.output_dir();
        fs::create_dir_all(&output_dir).map_err(|source| Error::Io {
            operation: format!("create configuration directory {output_dir:?}"),
            source,
        })?;

        let files = GeneratedFiles {
            bundles: self.config.bundles_path(),
            routes: self.config.routes_path(),
        };
        write_file(&files.bundles, &bundles_yaml)?;
        write_file(&files.routes, &routes_yaml)?;

        info!(
            bundles = %files.bundles.display(),
            routes = %files.routes.display(),
            "wrote module configuration"
        );
        Ok(files)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

fn installed_repository(config: &ProjectConfig) -> Arc<dyn PackageRepository + Send + Sync> {
    Arc::new(
        InstalledPackageRepository::new(config.project_root.clone())
            .with_module_type(config.module_type.clone()),
    )
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| Error::Io {
        operation: format!("write {path:?}"),
        source,
    })
}

/// Builder for constructing app with custom dependencies.
///
/// # Examples
///
/// ```
/// use phplist4_modules::adapters::InMemoryPackageRepository;
/// use phplist4_modules::app::{AppBuilder, ProjectConfig};
///
/// let app = AppBuilder::new()
///     .with_repository(InMemoryPackageRepository::new())
///     .with_config(ProjectConfig::new("/tmp/project"))
///     .build();
/// ```
pub struct AppBuilder {
    package_repository: Option<Arc<dyn PackageRepository + Send + Sync>>,
    config: ProjectConfig,
}

impl AppBuilder {
    /// Create a new app builder.
    pub fn new() -> Self {
        Self {
            package_repository: None,
            config: ProjectConfig::default(),
        }
    }

    /// Set a custom package repository.
    pub fn with_repository<R: PackageRepository + Send + Sync + 'static>(
        mut self,
        repo: R,
    ) -> Self {
        self.package_repository = Some(Arc::new(repo));
        self
    }

    /// Set the project configuration.
    pub fn with_config(mut self, config: ProjectConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the app with the configured dependencies.
    ///
    /// If no repository was specified, reads installed packages of the
    /// configured project.
    pub fn build(self) -> App {
        let package_repository = self
            .package_repository
            .unwrap_or_else(|| installed_repository(&self.config));

        App {
            package_repository,
            config: self.config,
        }
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}
