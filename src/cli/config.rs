//! Shared configuration for CLI commands

use std::path::PathBuf;

use clap::Args;

use crate::{adapters::DEFAULT_MODULE_TYPE, app::ProjectConfig};

/// Options common to every command
#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
    /// Project directory containing composer.json
    #[arg(long, short = 'd', global = true, default_value = ".")]
    pub project_dir: PathBuf,

    /// Package type that marks a package as a module
    #[arg(long, global = true, default_value = DEFAULT_MODULE_TYPE)]
    pub module_type: String,

    /// Show debug output on stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

impl ProjectArgs {
    pub fn project_config(&self) -> ProjectConfig {
        ProjectConfig::new(self.project_dir.clone()).with_module_type(self.module_type.clone())
    }
}
