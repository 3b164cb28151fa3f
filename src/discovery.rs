//! Discovery of bundles and routes declared by module packages

pub mod finder;
mod shape;

pub use finder::{BundleMap, CORE_EXTRA_KEY, ModuleFinder, RouteMap, YAML_COMMENT};
