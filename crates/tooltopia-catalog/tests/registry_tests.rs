//! Invariants of the built-in catalog content

use std::collections::HashSet;

use tooltopia_catalog::{
    BUILTIN_CATEGORY_COUNT, BUILTIN_TOOL_COUNT, Icon, Registry, Route,
};

#[test]
fn test_builtin_registry_validates() {
    Registry::builtin().validate().expect("built-in registry is valid");
}

#[test]
fn test_builtin_counts() {
    let registry = Registry::builtin();
    assert_eq!(registry.len(), BUILTIN_TOOL_COUNT);
    assert_eq!(registry.categories().len(), BUILTIN_CATEGORY_COUNT);
}

#[test]
fn test_tool_ids_unique() {
    let registry = Registry::builtin();
    let ids: HashSet<_> = registry.tools().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids.len(), registry.len());
}

#[test]
fn test_every_tool_category_resolves() {
    let registry = Registry::builtin();
    for tool in registry.tools() {
        assert!(
            registry.category_of(tool).is_some(),
            "{} has unknown category {}",
            tool.id,
            tool.category
        );
    }
}

#[test]
fn test_ids_are_slugs() {
    let registry = Registry::builtin();
    let is_slug = |s: &str| {
        !s.is_empty()
            && s.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    };
    for tool in registry.tools() {
        assert!(is_slug(&tool.id), "{}", tool.id);
    }
    for category in registry.categories() {
        assert!(is_slug(&category.id), "{}", category.id);
    }
}

#[test]
fn test_tool_urls_embed_their_id() {
    let registry = Registry::builtin();
    for tool in registry.tools() {
        assert_eq!(tool.url, Route::Tool(tool.id.clone()).path());
        assert_eq!(Route::parse(&tool.url).unwrap(), Route::Tool(tool.id.clone()));
    }
}

#[test]
fn test_every_tool_has_a_score() {
    let registry = Registry::builtin();
    assert!(registry.tools().iter().all(|t| t.popularity_score.is_some()));
}

#[test]
fn test_category_icons_are_not_the_fallback() {
    let registry = Registry::builtin();
    for category in registry.categories() {
        assert_ne!(category.icon, Icon::FALLBACK, "{}", category.id);
    }
}

#[test]
fn test_display_order_of_categories() {
    let registry = Registry::builtin();
    let ids: Vec<_> = registry.categories().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["text", "web", "image", "math", "conversion", "security", "developer"]
    );
}
