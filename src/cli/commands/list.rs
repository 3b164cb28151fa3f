//! List command - Show installed modules and what they declare

use anyhow::{Context, Result};

use crate::{
    app::App,
    cli::{
        config::ProjectArgs,
        output::{format_list, print_kv, print_section},
    },
};

pub fn execute(project: &ProjectArgs) -> Result<()> {
    let app = App::with_config(project.project_config());
    let finder = app.module_finder();

    let modules = finder
        .find_modules()
        .with_context(|| format!("failed to read packages in {}", project.project_dir.display()))?;
    let bundles = finder.find_bundle_classes()?;
    let routes = finder.find_routes()?;

    print_section(&format!("Modules of type '{}'", project.module_type));
    if modules.is_empty() {
        println!("  (none)");
        return Ok(());
    }

    for module in &modules {
        let prefix = format!("{}.", module.name());
        let bundle_classes = bundles.get(module.name()).cloned().unwrap_or_default();
        let route_names: Vec<String> = routes
            .keys()
            .filter_map(|key| key.strip_prefix(&prefix))
            .map(str::to_string)
            .collect();

        println!("\n{}", module.name());
        print_kv("bundles", &format_list(&bundle_classes));
        print_kv("routes", &format_list(&route_names));
    }

    Ok(())
}
