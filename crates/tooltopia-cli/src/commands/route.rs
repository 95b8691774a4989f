//! Route command: resolve a navigation path to the page it shows

use colored::Colorize;
use tooltopia_catalog::{Page, Registry, Route};

use crate::commands::browse::{print_categories, print_tool_list};
use crate::error::Result;

fn render(registry: &Registry, page: &Page<'_>) {
    match page {
        Page::Home { featured, popular } => {
            println!("{}", "Home".bold());
            println!();
            println!("{}:", "Featured".cyan().bold());
            print_tool_list(featured);
            println!();
            println!("{}:", "Popular".cyan().bold());
            print_tool_list(popular);
        }
        Page::Categories(categories) => print_categories(registry, categories),
        Page::Category { category, tools } => {
            println!("{} {}", category.icon.glyph(), category.name.bold());
            println!();
            print_tool_list(tools);
        }
        Page::Tool { tool, category } => {
            println!("{} {}", tool.display_icon().glyph(), tool.name.bold());
            println!("{}", tool.description);
            println!("  {:<12} {}", "Category:".dimmed(), category.path());
        }
        Page::Search { query, results } => {
            if query.trim().is_empty() {
                println!("Enter a search query to find tools.");
            } else if results.is_empty() {
                println!("No tools found matching '{query}'.");
            } else {
                println!("Found {} tool(s) matching your query", results.len());
                println!();
                print_tool_list(results);
            }
        }
        // Redirects are followed before rendering
        Page::Redirect(route) => println!("{}", route.path()),
    }
}

/// Run the route command
pub fn run_route(registry: &Registry, path: &str) -> Result<()> {
    let route = Route::parse(path)?;
    let mut page = registry.resolve(&route);
    if let Page::Redirect(target) = &page {
        eprintln!(
            "{} {} not found, showing {}",
            "redirect:".yellow().bold(),
            route,
            target
        );
        let target = target.clone();
        page = registry.resolve(&target);
    }
    render(registry, &page);
    Ok(())
}
