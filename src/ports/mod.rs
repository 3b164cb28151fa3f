//! Ports (trait boundaries) for external dependencies.
//!
//! The finder only ever talks to the package manager through these traits;
//! concrete sources of package metadata live in the adapters module.

pub mod repository;

pub use repository::PackageRepository;
