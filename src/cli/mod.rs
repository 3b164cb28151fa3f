//! CLI infrastructure for the module discovery tool
//!
//! This module provides the command-line interface for listing installed
//! modules and generating their bundle and route configuration.

pub mod commands;
pub mod config;
pub mod output;
