//! Project configuration for module discovery.

use std::path::{Path, PathBuf};

use crate::adapters::DEFAULT_MODULE_TYPE;

/// Directory, relative to the project root, receiving generated files.
pub const DEFAULT_CONFIG_DIR: &str = "config";

/// File name of the generated bundle list.
pub const DEFAULT_BUNDLES_FILE: &str = "bundles.yml";

/// File name of the generated route list.
pub const DEFAULT_ROUTES_FILE: &str = "routing_modules.yml";

/// Where a project lives and where its generated configuration goes.
///
/// # Examples
///
/// ```
/// use phplist4_modules::app::ProjectConfig;
/// use std::path::Path;
///
/// let config = ProjectConfig::new("/var/www/phplist").with_config_dir("app/config");
///
/// assert_eq!(
///     config.bundles_path(),
///     Path::new("/var/www/phplist/app/config/bundles.yml")
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    /// Directory containing the root `composer.json`
    pub project_root: PathBuf,
    /// Package type identifying modules
    pub module_type: String,
    /// Output directory, relative to the project root
    pub config_dir: PathBuf,
    /// File name of the generated bundle list
    pub bundles_file: String,
    /// File name of the generated route list
    pub routes_file: String,
}

impl ProjectConfig {
    /// Create a configuration for the project at `project_root` with default
    /// module type and output locations.
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            module_type: DEFAULT_MODULE_TYPE.to_string(),
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            bundles_file: DEFAULT_BUNDLES_FILE.to_string(),
            routes_file: DEFAULT_ROUTES_FILE.to_string(),
        }
    }

    pub fn with_module_type(mut self, module_type: impl Into<String>) -> Self {
        self.module_type = module_type.into();
        self
    }

    pub fn with_config_dir(mut self, config_dir: impl Into<PathBuf>) -> Self {
        self.config_dir = config_dir.into();
        self
    }

    pub fn with_bundles_file(mut self, file_name: impl Into<String>) -> Self {
        self.bundles_file = file_name.into();
        self
    }

    pub fn with_routes_file(mut self, file_name: impl Into<String>) -> Self {
        self.routes_file = file_name.into();
        self
    }

    /// Absolute (or root-relative) output directory.
    pub fn output_dir(&self) -> PathBuf {
        self.project_root.join(&self.config_dir)
    }

    pub fn bundles_path(&self) -> PathBuf {
        self.output_dir().join(&self.bundles_file)
    }

    pub fn routes_path(&self) -> PathBuf {
        self.output_dir().join(&self.routes_file)
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self::new(".")
    }
}
