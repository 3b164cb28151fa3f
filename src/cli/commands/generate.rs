//! Generate command - Write bundle and route configuration files

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    app::App,
    cli::{config::ProjectArgs, output::print_kv},
};

#[derive(Parser, Debug, Default)]
#[command(about = "Write bundle and route configuration files")]
pub struct GenerateArgs {
    /// Output directory, relative to the project directory
    #[arg(long)]
    pub config_dir: Option<PathBuf>,

    /// File name for the bundle list
    #[arg(long)]
    pub bundles_file: Option<String>,

    /// File name for the route list
    #[arg(long)]
    pub routes_file: Option<String>,
}

pub fn execute(project: &ProjectArgs, args: GenerateArgs) -> Result<()> {
    let mut config = project.project_config();
    if let Some(config_dir) = args.config_dir {
        config = config.with_config_dir(config_dir);
    }
    if let Some(bundles_file) = args.bundles_file {
        config = config.with_bundles_file(bundles_file);
    }
    if let Some(routes_file) = args.routes_file {
        config = config.with_routes_file(routes_file);
    }

    let files = App::with_config(config)
        .write_configuration()
        .context("failed to generate module configuration")?;

    println!("✓ Module configuration generated");
    print_kv("bundles", &files.bundles.display().to_string());
    print_kv("routes", &files.routes.display().to_string());
    Ok(())
}
