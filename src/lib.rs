//! Module discovery for phpList 4
//!
//! This crate provides:
//! - A port for reading installed packages, with on-disk and in-memory adapters
//! - Discovery and validation of the bundles and routes modules declare
//! - A YAML dumper producing the generated configuration files
//! - An application container and CLI wiring it all together

pub mod adapters;
pub mod app;
pub mod cli;
pub mod discovery;
pub mod error;
pub mod logging;
pub mod package;
pub mod ports;
pub mod yaml;

pub use discovery::{BundleMap, CORE_EXTRA_KEY, ModuleFinder, RouteMap, YAML_COMMENT};
pub use error::{Error, Result};
pub use package::Package;
