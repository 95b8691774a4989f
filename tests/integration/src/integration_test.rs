//! Cross-crate consistency between the catalog and the tool transforms

use std::collections::HashSet;

use pretty_assertions::assert_eq;
use tooltopia_catalog::{Page, Registry, Route};
use tooltopia_tools::{Error, ToolInput, Transform};

#[test]
fn test_builtin_registry_is_valid() {
    Registry::builtin().validate().unwrap();
}

#[test]
fn test_every_transform_is_in_catalog() {
    let registry = Registry::builtin();
    for transform in tooltopia_tools::transforms() {
        assert!(
            registry.tool_by_id(transform.id()).is_some(),
            "transform {} has no catalog entry",
            transform.id()
        );
    }
}

#[test]
fn test_transform_ids_are_unique() {
    let mut seen = HashSet::new();
    for transform in tooltopia_tools::transforms() {
        assert!(seen.insert(transform.id()), "duplicate transform {}", transform.id());
    }
}

#[test]
fn test_catalog_tools_without_transform_are_unavailable() {
    let registry = Registry::builtin();
    let input = ToolInput::new("42");
    for tool in registry.tools() {
        if tooltopia_tools::is_runnable(&tool.id) {
            continue;
        }
        let err = tooltopia_tools::run(&tool.id, &input).unwrap_err();
        assert!(matches!(err, Error::Unavailable { .. }), "{}", tool.id);
    }
}

#[test]
fn test_every_tool_route_resolves() {
    let registry = Registry::builtin();
    for tool in registry.tools() {
        let route = Route::parse(&tool.url).unwrap();
        match registry.resolve(&route) {
            Page::Tool { tool: found, category } => {
                assert_eq!(found.id, tool.id);
                assert_eq!(category.id, tool.category);
            }
            other => panic!("{} resolved to {other:?}", tool.url),
        }
    }
}

#[test]
fn test_every_category_route_resolves() {
    let registry = Registry::builtin();
    for category in registry.categories() {
        let route = Route::parse(&category.path()).unwrap();
        let Page::Category { category: found, tools } = registry.resolve(&route) else {
            panic!("{} did not resolve to a category", category.path());
        };
        assert_eq!(found.id, category.id);
        assert!(!tools.is_empty(), "{} has no tools", category.id);
    }
}

#[test]
fn test_featured_tools_are_runnable() {
    let registry = Registry::builtin();
    for tool in registry.featured_tools() {
        assert!(tooltopia_tools::is_runnable(&tool.id), "{} is featured", tool.id);
    }
}
