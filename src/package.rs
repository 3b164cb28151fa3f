//! Package descriptors as reported by the package manager.

use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use serde_json::{Map, Value};

/// Package type assumed when a manifest does not declare one.
pub const DEFAULT_PACKAGE_TYPE: &str = "library";

/// An installed package: its name, type, and free-form `extra` metadata.
///
/// Packages are read-only snapshots; nothing in this crate mutates them after
/// they leave a repository.
///
/// # Examples
///
/// ```
/// use phplist4_modules::Package;
/// use serde_json::json;
///
/// let package: Package = serde_json::from_value(json!({
///     "name": "phplist/web-frontend",
///     "type": "phplist-module",
///     "extra": { "phplist/phplist4-core": { "bundles": [] } }
/// }))?;
///
/// assert_eq!(package.name(), "phplist/web-frontend");
/// assert!(package.is_of_type("phplist-module"));
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    name: String,

    #[serde(rename = "type", default = "default_package_type")]
    package_type: String,

    #[serde(default, deserialize_with = "deserialize_extra")]
    extra: Map<String, Value>,
}

impl Package {
    /// Create a package with no extra metadata and the default type.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package_type: default_package_type(),
            extra: Map::new(),
        }
    }

    /// Set the package type.
    pub fn with_type(mut self, package_type: impl Into<String>) -> Self {
        self.package_type = package_type.into();
        self
    }

    /// Replace the extra metadata.
    pub fn with_extra(mut self, extra: Map<String, Value>) -> Self {
        self.extra = extra;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn package_type(&self) -> &str {
        &self.package_type
    }

    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    pub fn is_of_type(&self, package_type: &str) -> bool {
        self.package_type == package_type
    }
}

fn default_package_type() -> String {
    DEFAULT_PACKAGE_TYPE.to_string()
}

/// Manifests written by the package manager encode an empty `extra` as `[]`.
pub(crate) fn deserialize_extra<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        Value::Array(items) if items.is_empty() => Ok(Map::new()),
        other => Err(D::Error::custom(format!(
            "expected `extra` to be an object, found {other}"
        ))),
    }
}
