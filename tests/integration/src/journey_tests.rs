//! Scenario tests: browse the catalog the way a visitor would, then run a tool

use pretty_assertions::assert_eq;
use rstest::rstest;
use tooltopia_catalog::{Page, Registry, Route};
use tooltopia_tools::ToolInput;

/// Follow a redirect once, the way the router does.
fn visit<'a>(registry: &'a Registry, path: &str) -> Page<'a> {
    let route = Route::parse(path).unwrap();
    match registry.resolve(&route) {
        Page::Redirect(target) => registry.resolve(&target),
        page => page,
    }
}

#[test]
fn test_home_to_tool_to_result() {
    let registry = Registry::builtin();

    let Page::Home { featured, popular } = visit(&registry, "/") else {
        panic!("home did not resolve");
    };
    assert!(!featured.is_empty());
    assert_eq!(popular[0].id, "text-case-converter");

    let Page::Tool { tool, .. } = visit(&registry, &popular[0].url) else {
        panic!("popular tool did not resolve");
    };
    let input = ToolInput::new("Hello World").with_option("case", "kebabcase");
    let output = tooltopia_tools::run(&tool.id, &input).unwrap();
    assert_eq!(output.text, "hello-world");
}

#[test]
fn test_search_then_run() {
    let registry = Registry::builtin();
    let Page::Search { query, results } = visit(&registry, "/search?q=base64") else {
        panic!("search did not resolve");
    };
    assert_eq!(query, "base64");
    let encoder = results
        .iter()
        .find(|t| tooltopia_tools::is_runnable(&t.id))
        .expect("a runnable base64 tool");
    let output = tooltopia_tools::run(&encoder.id, &ToolInput::new("hello")).unwrap();
    assert_eq!(output.text, "aGVsbG8=");
}

#[rstest]
#[case("/tool/not-a-tool")]
#[case("/category/not-a-category")]
fn test_unknown_pages_land_on_categories(#[case] path: &str) {
    let registry = Registry::builtin();
    match visit(&registry, path) {
        Page::Categories(categories) => assert_eq!(categories.len(), registry.categories().len()),
        other => panic!("{path} resolved to {other:?}"),
    }
}

#[test]
fn test_category_page_lists_runnable_developer_tools() {
    let registry = Registry::builtin();
    let Page::Category { tools, .. } = visit(&registry, "/category/developer") else {
        panic!("developer category did not resolve");
    };
    let runnable: Vec<&str> = tools
        .iter()
        .filter(|t| tooltopia_tools::is_runnable(&t.id))
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(
        runnable,
        vec!["json-formatter", "regex-tester", "jwt-decoder", "yaml-formatter"]
    );
}

#[test]
fn test_json_formatter_round_trips_catalog_entry() {
    let registry = Registry::builtin();
    let tool = registry.tool_by_id("jwt-decoder").unwrap();
    let raw = serde_json::to_string(tool).unwrap();
    let input = ToolInput::new(raw).with_option("mode", "format");
    let output = tooltopia_tools::run("json-formatter", &input).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output.text).unwrap();
    assert_eq!(parsed["id"], "jwt-decoder");
    assert!(output.text.contains("\n  \"name\": \"JWT Decoder\""));
}
