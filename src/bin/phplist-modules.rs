//! phplist-modules - Collects bundles and routes declared by installed modules
//!
//! This CLI provides:
//! - Listing the installed modules and what they declare
//! - Printing the generated bundle and route configuration
//! - Writing the generated configuration files into the project

use anyhow::Result;
use clap::{Parser, Subcommand};
use phplist4_modules::{
    cli::{
        commands::{generate, list, print},
        config::ProjectArgs,
    },
    logging,
};

#[derive(Parser)]
#[command(name = "phplist-modules")]
#[command(version, about = "Discover phpList modules and generate their configuration", long_about = None)]
struct Cli {
    #[command(flatten)]
    project: ProjectArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List installed modules with their bundles and routes
    List,

    /// Print the generated bundle configuration
    Bundles,

    /// Print the generated route configuration
    Routes,

    /// Write bundle and route configuration files
    Generate(generate::GenerateArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.project.verbose);

    match cli.command {
        Commands::List => list::execute(&cli.project),
        Commands::Bundles => print::execute(&cli.project, print::Document::Bundles),
        Commands::Routes => print::execute(&cli.project, print::Document::Routes),
        Commands::Generate(args) => generate::execute(&cli.project, args),
    }
}
