use proptest::prelude::*;
use tooltopia_catalog::{Category, ColorToken, Icon, Registry, Tool};

/// Registry of `scores.len()` tools spread over two categories.
fn scored_registry(scores: &[Option<u32>]) -> Registry {
    let categories = vec![
        Category::new("even", "Even", "", Icon::File, ColorToken::Blue),
        Category::new("odd", "Odd", "", Icon::Code, ColorToken::Red),
    ];
    let tools = scores
        .iter()
        .enumerate()
        .map(|(i, score)| {
            let category = if i % 2 == 0 { "even" } else { "odd" };
            let tool = Tool::new(format!("tool-{i}"), format!("Tool {i}"), "", category);
            match score {
                Some(s) => tool.with_popularity(*s),
                None => tool,
            }
        })
        .collect();
    Registry::new(categories, tools)
}

proptest! {
    #[test]
    fn test_search_ignores_case(query in "[a-zA-Z -]{0,8}") {
        let registry = Registry::builtin();
        let lower = registry.search_tools(&query.to_lowercase());
        let upper = registry.search_tools(&query.to_uppercase());
        prop_assert_eq!(lower, upper);
    }

    #[test]
    fn test_search_membership_is_substring(query in "[a-z]{1,4}") {
        let registry = Registry::builtin();
        let found = registry.search_tools(&query);
        for tool in registry.tools() {
            let expected = tool.name.to_lowercase().contains(&query)
                || tool.description.to_lowercase().contains(&query);
            prop_assert_eq!(found.contains(&tool), expected);
        }
    }

    #[test]
    fn test_popular_is_stable_descending(
        scores in prop::collection::vec(prop::option::of(0u32..5), 0..30),
        limit in 0usize..40,
    ) {
        let registry = scored_registry(&scores);
        let popular = registry.popular_tools(limit);

        prop_assert_eq!(popular.len(), limit.min(registry.len()));

        let position = |t: &Tool| registry.tools().iter().position(|r| r.id == t.id).unwrap();
        for pair in popular.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            prop_assert!(a.popularity() >= b.popularity());
            if a.popularity() == b.popularity() {
                prop_assert!(position(a) < position(b));
            }
        }
    }

    #[test]
    fn test_by_category_partitions_registry(
        scores in prop::collection::vec(prop::option::of(0u32..100), 0..30),
    ) {
        let registry = scored_registry(&scores);
        let even = registry.tools_by_category("even");
        let odd = registry.tools_by_category("odd");
        prop_assert_eq!(even.len() + odd.len(), registry.len());
        prop_assert!(even.iter().all(|t| t.category == "even"));
        prop_assert!(odd.iter().all(|t| t.category == "odd"));
    }
}
