//! Bundle and route discovery across module packages.

use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::shape::{Section, as_section, as_sequence, kind};
use crate::{Result, error::Error, package::Package, ports::PackageRepository, yaml};

/// Key in a package's `extra` metadata under which modules declare what they
/// contribute to the application.
pub const CORE_EXTRA_KEY: &str = "phplist/phplist4-core";

/// First line of every generated configuration file.
pub const YAML_COMMENT: &str = "# This file is autogenerated. Please do not edit.";

const BUNDLES_KEY: &str = "bundles";
const ROUTES_KEY: &str = "routes";

/// Bundle class names per package name, in repository order.
pub type BundleMap = IndexMap<String, Vec<String>>;

/// Route definitions keyed by `<package name>.<route name>`.
pub type RouteMap = IndexMap<String, Value>;

/// Collects the bundles and routes declared by installed modules.
///
/// Every call reads the repository again; nothing is cached between calls.
///
/// # Examples
///
/// ```
/// use phplist4_modules::adapters::InMemoryPackageRepository;
/// use phplist4_modules::{ModuleFinder, Package};
/// use serde_json::json;
///
/// let extra = json!({
///     "phplist/phplist4-core": {
///         "bundles": ["PhpList\\PhpList4\\EmptyStartPageBundle\\PhpListEmptyStartPageBundle"]
///     }
/// });
/// let package = Package::new("phplist/foo").with_extra(extra.as_object().cloned().unwrap());
///
/// let finder = ModuleFinder::new(InMemoryPackageRepository::with_packages([package]));
/// let bundles = finder.find_bundle_classes()?;
///
/// assert_eq!(
///     bundles["phplist/foo"],
///     ["PhpList\\PhpList4\\EmptyStartPageBundle\\PhpListEmptyStartPageBundle"]
/// );
/// # Ok::<(), phplist4_modules::Error>(())
/// ```
#[derive(Clone)]
pub struct ModuleFinder {
    repository: Arc<dyn PackageRepository + Send + Sync>,
}

impl ModuleFinder {
    pub fn new<R: PackageRepository + Send + Sync + 'static>(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a finder reading from a repository shared with other owners.
    pub fn with_shared_repository(repository: Arc<dyn PackageRepository + Send + Sync>) -> Self {
        Self { repository }
    }

    /// The modules as reported by the repository, unvalidated.
    pub fn find_modules(&self) -> Result<Vec<Package>> {
        self.repository.find_modules()
    }

    /// Collect the bundle class names declared by each module.
    ///
    /// Modules that declare no bundles (or an empty list) are left out of the
    /// result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidModuleConfiguration`] for the first module whose
    /// core section is not a mapping, whose `bundles` entry is not a list, or
    /// whose list contains anything but non-empty strings.
    pub fn find_bundle_classes(&self) -> Result<BundleMap> {
        let mut bundles = BundleMap::new();

        for package in self.repository.find_modules()? {
            let Some(section) = core_section(&package)? else {
                debug!(package = package.name(), "no core section");
                continue;
            };
            let Some(value) = section.get(BUNDLES_KEY) else {
                continue;
            };

            let classes = bundle_classes(&package, value)?;
            if classes.is_empty() {
                continue;
            }
            debug!(package = package.name(), count = classes.len(), "found bundles");
            bundles.insert(package.name().to_string(), classes);
        }

        Ok(bundles)
    }

    /// Collect the routes declared by all modules into one flat map.
    ///
    /// Each route name is prefixed with the declaring package's name and a dot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidModuleConfiguration`] for the first module whose
    /// core section or `routes` entry is not a mapping, or which maps a route
    /// name to anything but a mapping.
    pub fn find_routes(&self) -> Result<RouteMap> {
        let mut routes = RouteMap::new();

        for package in self.repository.find_modules()? {
            let Some(section) = core_section(&package)? else {
                debug!(package = package.name(), "no core section");
                continue;
            };
            let Some(value) = section.get(ROUTES_KEY) else {
                continue;
            };

            let declared = route_definitions(&package, value)?;
            debug!(package = package.name(), count = declared.len(), "found routes");
            for (name, definition) in declared {
                let key = format!("{}.{name}", package.name());
                if routes.insert(key.clone(), definition.clone()).is_some() {
                    warn!(route = %key, "route declared twice, keeping the later definition");
                }
            }
        }

        Ok(routes)
    }

    /// Render the bundle map as a generated YAML document.
    pub fn create_bundle_configuration_yaml(&self) -> Result<String> {
        let bundles: Map<String, Value> = self
            .find_bundle_classes()?
            .into_iter()
            .map(|(package, classes)| (package, Value::from(classes)))
            .collect();

        Ok(generated_yaml(&Value::Object(bundles)))
    }

    /// Render the route map as a generated YAML document.
    pub fn create_route_configuration_yaml(&self) -> Result<String> {
        let routes: Map<String, Value> = self.find_routes()?.into_iter().collect();

        Ok(generated_yaml(&Value::Object(routes)))
    }
}

fn generated_yaml(value: &Value) -> String {
    format!("{YAML_COMMENT}\n{}", yaml::dump(value))
}

fn core_section(package: &Package) -> Result<Option<Section<'_>>> {
    let Some(value) = package.extra().get(CORE_EXTRA_KEY) else {
        return Ok(None);
    };

    as_section(value).map(Some).ok_or_else(|| {
        Error::invalid(
            package.name(),
            format!("extra.{CORE_EXTRA_KEY}"),
            format!("core extra section must be an object, found {}", kind(value)),
        )
    })
}

fn bundle_classes(package: &Package, value: &Value) -> Result<Vec<String>> {
    let path = format!("extra.{CORE_EXTRA_KEY}.{BUNDLES_KEY}");
    let items = as_sequence(value).ok_or_else(|| {
        Error::invalid(
            package.name(),
            &path,
            format!("bundles must be a list of class names, found {}", kind(value)),
        )
    })?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::String(class) if !class.is_empty() => Ok(class.clone()),
            other => Err(Error::invalid(
                package.name(),
                format!("{path}[{index}]"),
                format!(
                    "bundle class name must be a non-empty string, found {}",
                    if other.is_string() { "empty string" } else { kind(other) }
                ),
            )),
        })
        .collect()
}

fn route_definitions<'a>(
    package: &Package,
    value: &'a Value,
) -> Result<Vec<(&'a String, &'a Value)>> {
    let path = format!("extra.{CORE_EXTRA_KEY}.{ROUTES_KEY}");
    let section = as_section(value).ok_or_else(|| {
        Error::invalid(
            package.name(),
            &path,
            format!("routes must map route names to definitions, found {}", kind(value)),
        )
    })?;

    section
        .iter()
        .map(|(name, definition)| match as_section(definition) {
            Some(_) => Ok((name, definition)),
            None => Err(Error::invalid(
                package.name(),
                format!("{path}.{name}"),
                format!("route definition must be an object, found {}", kind(definition)),
            )),
        })
        .collect()
}
