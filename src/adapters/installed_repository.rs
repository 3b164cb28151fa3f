//! Package repository backed by the package manager's files on disk.
//!
//! Reads the project's root `composer.json` and the installed-package
//! manifest the package manager keeps at `<vendor-dir>/composer/installed.json`.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::{
    Result,
    error::Error,
    package::{DEFAULT_PACKAGE_TYPE, Package, deserialize_extra},
    ports::PackageRepository,
};

/// Package type that marks a package as a phpList module.
pub const DEFAULT_MODULE_TYPE: &str = "phplist-module";

/// Name reported for a root package whose manifest does not declare one.
pub const ROOT_PACKAGE_NAME: &str = "__root__";

const ROOT_MANIFEST: &str = "composer.json";
const DEFAULT_VENDOR_DIR: &str = "vendor";
const INSTALLED_MANIFEST: &str = "composer/installed.json";

#[derive(Debug, Deserialize)]
struct RootManifest {
    #[serde(default)]
    name: Option<String>,

    #[serde(rename = "type", default)]
    package_type: Option<String>,

    #[serde(default, deserialize_with = "deserialize_extra")]
    extra: Map<String, Value>,

    #[serde(default)]
    config: RootConfig,
}

#[derive(Debug, Default, Deserialize)]
struct RootConfig {
    #[serde(rename = "vendor-dir")]
    vendor_dir: Option<PathBuf>,
}

impl RootManifest {
    fn vendor_dir(&self) -> &Path {
        self.config
            .vendor_dir
            .as_deref()
            .unwrap_or(Path::new(DEFAULT_VENDOR_DIR))
    }

    fn into_package(self) -> Package {
        Package::new(self.name.unwrap_or_else(|| ROOT_PACKAGE_NAME.to_string()))
            .with_type(
                self.package_type
                    .unwrap_or_else(|| DEFAULT_PACKAGE_TYPE.to_string()),
            )
            .with_extra(self.extra)
    }
}

/// Current `installed.json` layout: an object with a `packages` list. Older
/// package manager releases write the bare list instead.
#[derive(Debug, Deserialize)]
struct InstalledManifest {
    packages: Vec<Package>,
}

/// Parse either `installed.json` layout.
///
/// The layout is picked from the top-level value first, so a malformed
/// package reports its own error and position.
fn parse_installed_manifest(contents: &str) -> serde_json::Result<Vec<Package>> {
    match serde_json::from_str::<Value>(contents)? {
        Value::Object(_) => Ok(serde_json::from_str::<InstalledManifest>(contents)?.packages),
        _ => serde_json::from_str(contents),
    }
}

/// Repository reading installed packages of a project directory.
///
/// Manifests are re-read on every call, so packages installed or removed
/// between two calls are picked up.
///
/// # Examples
///
/// ```no_run
/// use phplist4_modules::adapters::InstalledPackageRepository;
/// use phplist4_modules::ports::PackageRepository;
///
/// let repo = InstalledPackageRepository::new("/var/www/phplist");
/// for module in repo.find_modules()? {
///     println!("{}", module.name());
/// }
/// # Ok::<(), phplist4_modules::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct InstalledPackageRepository {
    project_root: PathBuf,
    module_type: String,
}

impl InstalledPackageRepository {
    /// Create a repository for the project rooted at `project_root`.
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            module_type: DEFAULT_MODULE_TYPE.to_string(),
        }
    }

    /// Override the package type that identifies modules.
    pub fn with_module_type(mut self, module_type: impl Into<String>) -> Self {
        self.module_type = module_type.into();
        self
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn module_type(&self) -> &str {
        &self.module_type
    }

    /// Return the root package followed by every installed package.
    ///
    /// # Errors
    ///
    /// Returns an error if the root manifest is missing or unreadable, or if
    /// the installed manifest exists but cannot be read or parsed.
    pub fn find_all(&self) -> Result<Vec<Package>> {
        let root = self.load_root_manifest()?;
        let installed_path = self
            .project_root
            .join(root.vendor_dir())
            .join(INSTALLED_MANIFEST);

        let mut packages = vec![root.into_package()];
        packages.extend(load_installed_manifest(&installed_path)?);
        Ok(packages)
    }

    fn load_root_manifest(&self) -> Result<RootManifest> {
        let path = self.project_root.join(ROOT_MANIFEST);
        let contents = fs::read_to_string(&path).map_err(|source| Error::Io {
            operation: format!("read root manifest {path:?}"),
            source,
        })?;

        serde_json::from_str(&contents).map_err(|source| Error::Manifest { path, source })
    }
}

fn load_installed_manifest(path: &Path) -> Result<Vec<Package>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no installed package manifest");
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(Error::Io {
                operation: format!("read installed package manifest {path:?}"),
                source,
            });
        }
    };

    parse_installed_manifest(&contents).map_err(|source| Error::Manifest {
        path: path.to_path_buf(),
        source,
    })
}

impl PackageRepository for InstalledPackageRepository {
    fn find_modules(&self) -> Result<Vec<Package>> {
        let modules: Vec<Package> = self
            .find_all()?
            .into_iter()
            .filter(|package| package.is_of_type(&self.module_type))
            .collect();

        debug!(
            root = %self.project_root.display(),
            module_type = %self.module_type,
            count = modules.len(),
            "found installed modules"
        );
        Ok(modules)
    }
}
