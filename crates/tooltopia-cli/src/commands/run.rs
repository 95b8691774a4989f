//! Run command: feed input through a tool transform

use std::io::{IsTerminal, Read};
use std::path::PathBuf;

use colored::Colorize;
use tooltopia_catalog::Registry;
use tooltopia_tools::{ToolInput, ToolOutput};

use crate::error::{CliError, Result};

/// Arguments of `tooltopia run`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunArgs {
    pub id: String,
    pub input: Option<String>,
    pub file: Option<PathBuf>,
    pub other: Option<String>,
    pub options: Vec<(String, String)>,
}

/// Main text from `--input`, `--file` or piped stdin. An interactive
/// terminal yields empty input rather than blocking.
fn read_input(args: &RunArgs) -> Result<String> {
    if let Some(text) = &args.input {
        return Ok(text.clone());
    }
    if let Some(path) = &args.file {
        return std::fs::read_to_string(path).map_err(|e| {
            CliError::user(format!("Cannot read input file {}: {e}", path.display()))
        });
    }
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(String::new());
    }
    let mut buffer = String::new();
    stdin.lock().read_to_string(&mut buffer)?;
    Ok(buffer)
}

/// Build the panel input and run the tool, without printing.
pub fn execute(registry: &Registry, args: &RunArgs, text: String) -> Result<ToolOutput> {
    let tool = registry.tool_by_id(&args.id).ok_or_else(|| {
        CliError::user(format!(
            "Unknown tool '{}'. Run 'tooltopia tools' to see all tools.",
            args.id
        ))
    })?;

    let mut input = ToolInput::new(text);
    if let Some(other) = &args.other {
        input = input.with_other(other.clone());
    }
    for (key, value) in &args.options {
        input = input.with_option(key.clone(), value.clone());
    }

    Ok(tooltopia_tools::run(&tool.id, &input)?)
}

/// Run the run command
pub fn run_tool(registry: &Registry, args: &RunArgs) -> Result<()> {
    let text = read_input(args)?;
    let output = execute(registry, args, text)?;
    println!("{}", output.text);
    if let Some(notice) = &output.notice {
        eprintln!("{} {}", "✓".green().bold(), notice);
    }
    Ok(())
}
