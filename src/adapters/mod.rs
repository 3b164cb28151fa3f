//! Adapters implementing domain ports.
//!
//! This module contains infrastructure implementations of the traits defined
//! in the ports module. Adapters depend on ports, never the other way around.

pub mod in_memory_repository;
pub mod installed_repository;

pub use in_memory_repository::InMemoryPackageRepository;
pub use installed_repository::{DEFAULT_MODULE_TYPE, InstalledPackageRepository};
