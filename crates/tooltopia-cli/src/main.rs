//! Tooltopia CLI
//!
//! Browse the tool catalog and run tools from the command line.

mod cli;
mod commands;
mod config;
mod error;
mod logging;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use tooltopia_catalog::Registry;

use cli::{Cli, Commands};
use commands::RunArgs;
use config::Config;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    cli.color.unwrap_or(config.output.color).apply();

    let level = if cli.verbose {
        "debug"
    } else {
        config.output.log_level.as_str()
    };
    if let Err(e) = logging::init(level) {
        eprintln!("{} logging disabled: {}", "warning:".yellow().bold(), e);
    }
    tracing::debug!(?config, "Configuration resolved");

    let registry = Registry::builtin();

    match cli.command {
        Some(cmd) => execute_command(cmd, &registry, &config),
        None => {
            // No command provided - show help hint
            println!(
                "{} {} tools in {} categories",
                "tooltopia".green().bold(),
                registry.len(),
                registry.categories().len()
            );
            println!();
            println!("Run {} for available commands.", "tooltopia --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands, registry: &Registry, config: &Config) -> Result<()> {
    match cmd {
        Commands::Categories { json } => commands::run_categories(registry, json),
        Commands::Category { id, json } => commands::run_category(registry, &id, json),
        Commands::Tools { category, json } => {
            commands::run_tools(registry, category.as_deref(), json)
        }
        Commands::Featured { json } => commands::run_featured(registry, json),
        Commands::Popular { limit, json } => {
            let limit = limit.unwrap_or(config.catalog.popular_limit);
            commands::run_popular(registry, limit, json)
        }
        Commands::Search { query, json } => commands::run_search(registry, &query, json),
        Commands::Show { id, json } => commands::run_show(registry, &id, json),
        Commands::Run {
            id,
            input,
            file,
            other,
            options,
        } => commands::run_tool(
            registry,
            &RunArgs {
                id,
                input,
                file,
                other,
                options,
            },
        ),
        Commands::Route { path } => commands::run_route(registry, &path),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "tooltopia", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_error_user() {
        let error = crate::error::CliError::user("test error");
        assert_eq!(format!("{}", error), "test error");
    }

    #[test]
    fn test_popular_uses_config_limit() {
        let registry = Registry::builtin();
        let mut config = Config::default();
        config.catalog.popular_limit = 2;
        let cmd = Commands::Popular {
            limit: None,
            json: true,
        };
        assert!(execute_command(cmd, &registry, &config).is_ok());
    }
}
