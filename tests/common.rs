//! Common fixtures for the module discovery test suite.
//!
//! Builds packages with `extra` metadata and finders over in-memory
//! repositories.

#![allow(dead_code)]

use phplist4_modules::{
    CORE_EXTRA_KEY, ModuleFinder, Package, adapters::InMemoryPackageRepository,
};
use serde_json::{Value, json};

pub const YAML_COMMENT: &str = "# This file is autogenerated. Please do not edit.";

pub const FRAMEWORK_BUNDLE: &str = "Symfony\\Bundle\\FrameworkBundle\\FrameworkBundle";
pub const START_PAGE_BUNDLE: &str =
    "PhpList\\PhpList4\\EmptyStartPageBundle\\PhpListEmptyStartPageBundle";

/// Build a package from a JSON object of extra metadata.
///
/// # Panics
///
/// Panics if `extra` is not a JSON object
pub fn package(name: &str, extra: Value) -> Package {
    let Value::Object(extra) = extra else {
        panic!("extra must be a JSON object, got {extra}");
    };
    Package::new(name).with_extra(extra)
}

/// Extra metadata with `section` as the core extension section.
pub fn core_extra(section: Value) -> Value {
    let mut extra = serde_json::Map::new();
    extra.insert(CORE_EXTRA_KEY.to_string(), section);
    Value::Object(extra)
}

/// A finder over a single package named `phplist/test`.
pub fn finder_for_extra(extra: Value) -> ModuleFinder {
    finder_for(vec![package("phplist/test", extra)])
}

pub fn finder_for(packages: Vec<Package>) -> ModuleFinder {
    ModuleFinder::new(InMemoryPackageRepository::with_packages(packages))
}

pub fn homepage_route() -> Value {
    json!({
        "path": "/",
        "defaults": { "_controller": "PhpListEmptyStartPageBundle:Default:index" }
    })
}

pub fn blog_route() -> Value {
    json!({
        "path": "/blog",
        "defaults": { "_controller": "PhpListEmptyStartPageBundle:Blog:index" }
    })
}

/// Extra metadata sets under which a package declares nothing in `key`.
pub fn extras_declaring_nothing(key: &str) -> Vec<(&'static str, Value)> {
    vec![
        ("empty extras", json!({})),
        (
            "extras for other stuff",
            json!({ "branch-alias": { "dev-master": "4.0.x-dev" } }),
        ),
        ("empty core section", core_extra(json!({}))),
        ("empty core section as list", core_extra(json!([]))),
        ("empty section", core_extra(json!({ key: [] }))),
        ("empty section as object", core_extra(json!({ key: {} }))),
    ]
}

/// Extra metadata sets with a wrongly shaped core section or `key` section.
pub fn extras_with_invalid_section(key: &str) -> Vec<(&'static str, Value)> {
    vec![
        ("core section as string", core_extra(json!("foo"))),
        ("core section as int", core_extra(json!(42))),
        ("core section as float", core_extra(json!(3.14159))),
        ("core section as bool", core_extra(json!(true))),
        ("core section as null", core_extra(json!(null))),
        ("section as string", core_extra(json!({ key: "foo" }))),
        ("section as int", core_extra(json!({ key: 42 }))),
        ("section as float", core_extra(json!({ key: 3.14159 }))),
        ("section as bool", core_extra(json!({ key: true }))),
        ("section as null", core_extra(json!({ key: null }))),
    ]
}
