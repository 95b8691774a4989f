//! Search command

use colored::Colorize;
use tooltopia_catalog::Registry;

use crate::commands::browse::print_tool_list;
use crate::error::{CliError, Result};

/// Run the search command
pub fn run_search(registry: &Registry, query: &str, json: bool) -> Result<()> {
    let query = query.trim();
    if query.is_empty() {
        return Err(CliError::user("Please enter a search query"));
    }
    let results = registry.search_tools(query);
    tracing::debug!(query, results = results.len(), "Searched catalog");

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&results).unwrap_or_default()
        );
        return Ok(());
    }

    if results.is_empty() {
        println!("No tools found matching '{}'.", query);
        println!(
            "Try a different search term or browse with {}.",
            "tooltopia categories".cyan()
        );
        return Ok(());
    }

    println!("Found {} tool(s) matching your query", results.len());
    println!();
    print_tool_list(&results);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_query_rejected() {
        let registry = Registry::builtin();
        let err = run_search(&registry, "   ", false).unwrap_err();
        assert_eq!(err.to_string(), "Please enter a search query");
    }

    #[test]
    fn test_search_runs() {
        let registry = Registry::builtin();
        assert!(run_search(&registry, "json", false).is_ok());
        assert!(run_search(&registry, "zzz", true).is_ok());
    }
}
