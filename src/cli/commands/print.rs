//! Bundles/routes commands - Print generated configuration to stdout

use anyhow::{Context, Result};

use crate::{app::App, cli::config::ProjectArgs};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Document {
    /// Bundle classes per module
    Bundles,
    /// Routes of all modules
    Routes,
}

pub fn execute(project: &ProjectArgs, document: Document) -> Result<()> {
    let finder = App::with_config(project.project_config()).module_finder();

    let yaml = match document {
        Document::Bundles => finder
            .create_bundle_configuration_yaml()
            .context("failed to collect module bundles")?,
        Document::Routes => finder
            .create_route_configuration_yaml()
            .context("failed to collect module routes")?,
    };

    print!("{yaml}");
    if !yaml.ends_with('\n') {
        println!();
    }
    Ok(())
}
