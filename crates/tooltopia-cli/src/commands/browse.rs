//! Catalog browsing commands: categories, tools, featured, popular, show

use colored::Colorize;
use tooltopia_catalog::{Category, Page, Registry, Route, Tool};

use crate::error::{CliError, Result};

fn print_json(value: &serde_json::Value) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

/// One line per tool: id, name and description.
pub(crate) fn print_tool_list(tools: &[&Tool]) {
    for tool in tools {
        let marker = if tool.featured { "*".yellow() } else { " ".normal() };
        println!(
            "  {} {:<26} {} {}",
            marker,
            tool.id.green(),
            tool.name,
            format!("- {}", tool.description).dimmed()
        );
    }
}

pub(crate) fn print_categories(registry: &Registry, categories: &[Category]) {
    println!("{}", "Categories".bold());
    println!();
    for category in categories {
        let count = registry.tools_by_category(&category.id).len();
        println!(
            "  {} {:<12} {} ({} tools)",
            category.icon.glyph(),
            category.id.green(),
            category.name,
            count
        );
        println!("    {}", category.description.dimmed());
    }
    println!();
    println!(
        "{} {} categories. Use {} to open one.",
        "Total:".dimmed(),
        categories.len(),
        "tooltopia category <id>".cyan()
    );
}

fn unknown_category(id: &str) -> CliError {
    CliError::user(format!(
        "Unknown category '{id}'. Run 'tooltopia categories' to see all categories."
    ))
}

fn unknown_tool(id: &str) -> CliError {
    CliError::user(format!(
        "Unknown tool '{id}'. Run 'tooltopia tools' to see all tools."
    ))
}

/// Run the categories command
pub fn run_categories(registry: &Registry, json: bool) -> Result<()> {
    if json {
        let categories: Vec<_> = registry
            .categories()
            .iter()
            .map(|c| {
                serde_json::json!({
                    "id": c.id,
                    "name": c.name,
                    "description": c.description,
                    "icon": c.icon,
                    "color": c.color,
                    "path": c.path(),
                    "tool_count": registry.tools_by_category(&c.id).len(),
                })
            })
            .collect();
        print_json(&serde_json::Value::Array(categories));
        return Ok(());
    }
    print_categories(registry, registry.categories());
    Ok(())
}

/// Run the category command
pub fn run_category(registry: &Registry, id: &str, json: bool) -> Result<()> {
    let Page::Category { category, tools } = registry.resolve(&Route::Category(id.to_string()))
    else {
        return Err(unknown_category(id));
    };

    if json {
        print_json(&serde_json::json!({
            "category": category,
            "tools": tools,
        }));
        return Ok(());
    }

    println!("{} {}", category.icon.glyph(), category.name.bold());
    println!("{}", category.description.dimmed());
    println!();
    if tools.is_empty() {
        println!("  {}", "No tools in this category yet.".dimmed());
    } else {
        print_tool_list(&tools);
    }
    Ok(())
}

/// Run the tools command
pub fn run_tools(registry: &Registry, category: Option<&str>, json: bool) -> Result<()> {
    let tools: Vec<&Tool> = match category {
        Some(id) => {
            if registry.category_by_id(id).is_none() {
                return Err(unknown_category(id));
            }
            registry.tools_by_category(id)
        }
        None => registry.tools().iter().collect(),
    };

    if json {
        print_json(&serde_json::json!(tools));
        return Ok(());
    }

    println!("{}", "Available Tools".bold());
    println!();
    print_tool_list(&tools);
    println!();
    println!(
        "{} {} tools. Use {} to try one.",
        "Total:".dimmed(),
        tools.len(),
        "tooltopia run <id>".cyan()
    );
    Ok(())
}

/// Run the featured command
pub fn run_featured(registry: &Registry, json: bool) -> Result<()> {
    let tools = registry.featured_tools();
    if json {
        print_json(&serde_json::json!(tools));
        return Ok(());
    }
    println!("{}", "Featured Tools".bold());
    println!();
    print_tool_list(&tools);
    Ok(())
}

/// Run the popular command
pub fn run_popular(registry: &Registry, limit: usize, json: bool) -> Result<()> {
    let tools = registry.popular_tools(limit);
    if json {
        print_json(&serde_json::json!(tools));
        return Ok(());
    }
    println!("{}", "Popular Tools".bold());
    println!();
    for (rank, tool) in tools.iter().enumerate() {
        println!(
            "  {:>2}. {:<26} {} {}",
            rank + 1,
            tool.id.green(),
            tool.name,
            format!("({})", tool.popularity()).dimmed()
        );
    }
    Ok(())
}

/// Run the show command
pub fn run_show(registry: &Registry, id: &str, json: bool) -> Result<()> {
    let Page::Tool { tool, category } = registry.resolve(&Route::Tool(id.to_string())) else {
        return Err(unknown_tool(id));
    };
    let runnable = tooltopia_tools::is_runnable(&tool.id);

    if json {
        print_json(&serde_json::json!({
            "tool": tool,
            "category": category.id,
            "icon": tool.display_icon(),
            "runnable": runnable,
        }));
        return Ok(());
    }

    println!("{} {}", tool.display_icon().glyph(), tool.name.bold());
    println!("{}", tool.description);
    println!();
    println!("  {:<12} {}", "Id:".dimmed(), tool.id);
    println!("  {:<12} {} ({})", "Category:".dimmed(), category.name, category.id);
    println!("  {:<12} {}", "Icon:".dimmed(), tool.display_icon().name());
    println!("  {:<12} {}", "Path:".dimmed(), tool.url);
    println!("  {:<12} {}", "Popularity:".dimmed(), tool.popularity());
    if tool.featured {
        println!("  {:<12} {}", "Featured:".dimmed(), "yes".yellow());
    }
    let status = if runnable {
        "available".green()
    } else {
        "under development".yellow()
    };
    println!("  {:<12} {}", "Status:".dimmed(), status);
    Ok(())
}
