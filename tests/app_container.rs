//! Integration tests for the application container.
//!
//! These cover wiring a repository into the app and writing the generated
//! files into a project directory.

use std::fs;

use phplist4_modules::{
    adapters::InMemoryPackageRepository,
    app::{App, ProjectConfig},
};
use serde_json::json;
use tempfile::TempDir;

mod common;

use common::*;

#[test]
fn test_write_configuration_with_in_memory_repository() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let repo = InMemoryPackageRepository::with_packages([package(
        "phplist/foo",
        core_extra(json!({
            "bundles": [FRAMEWORK_BUNDLE],
            "routes": { "homepage": homepage_route() }
        })),
    )]);

    let app = App::for_testing()
        .with_repository(repo)
        .with_config(ProjectConfig::new(dir.path()))
        .build();

    let files = app.write_configuration().unwrap();

    assert_eq!(files.bundles, dir.path().join("config/bundles.yml"));
    assert_eq!(files.routes, dir.path().join("config/routing_modules.yml"));

    let bundles = fs::read_to_string(&files.bundles).unwrap();
    assert_eq!(
        bundles,
        format!("{YAML_COMMENT}\nphplist/foo:\n    - {FRAMEWORK_BUNDLE}\n")
    );

    let routes = fs::read_to_string(&files.routes).unwrap();
    assert!(routes.starts_with(&format!("{YAML_COMMENT}\nphplist/foo.homepage:\n")));
}

#[test]
fn test_write_configuration_without_modules_writes_empty_maps() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let app = App::for_testing()
        .with_repository(InMemoryPackageRepository::new())
        .with_config(
            ProjectConfig::new(dir.path())
                .with_config_dir("app/config")
                .with_routes_file("routing.yml"),
        )
        .build();

    let files = app.write_configuration().unwrap();

    assert_eq!(files.routes, dir.path().join("app/config/routing.yml"));
    for path in [&files.bundles, &files.routes] {
        let contents = fs::read_to_string(path).unwrap();
        assert_eq!(contents, format!("{YAML_COMMENT}\n{{  }}"));
    }
}

#[test]
fn test_invalid_modules_leave_existing_files_untouched() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = ProjectConfig::new(dir.path());
    fs::create_dir_all(config.output_dir()).unwrap();
    fs::write(config.bundles_path(), "previous").unwrap();

    let repo = InMemoryPackageRepository::with_packages([package(
        "phplist/foo",
        core_extra(json!({ "bundles": [FRAMEWORK_BUNDLE], "routes": "broken" })),
    )]);
    let app = App::for_testing()
        .with_repository(repo)
        .with_config(config.clone())
        .build();

    let err = app.write_configuration().unwrap_err();

    assert!(err.is_validation());
    assert_eq!(fs::read_to_string(config.bundles_path()).unwrap(), "previous");
    assert!(!config.routes_path().exists());
}

#[test]
fn test_default_repository_reads_project_directory() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(
        dir.path().join("composer.json"),
        json!({
            "name": "phplist/core",
            "type": "phplist-module",
            "extra": { "phplist/phplist4-core": { "bundles": [START_PAGE_BUNDLE] } }
        })
        .to_string(),
    )
    .unwrap();

    let app = App::with_config(ProjectConfig::new(dir.path()));
    let bundles = app.module_finder().find_bundle_classes().unwrap();

    assert_eq!(bundles["phplist/core"], [START_PAGE_BUNDLE]);
}

#[test]
fn test_builder_without_repository_falls_back_to_installed_packages() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(dir.path().join("composer.json"), "{}").unwrap();

    let app = App::for_testing()
        .with_config(ProjectConfig::new(dir.path()))
        .build();

    // the root package defaults to type "library", so it is not a module
    assert!(app.module_finder().find_modules().unwrap().is_empty());
}
