//! Registry storage

use std::collections::HashSet;

use super::{Category, Tool, builtin_categories, builtin_tools};
use crate::error::{Error, Result};

/// Immutable collection of categories and tools.
///
/// Construct it once (usually with [`Registry::builtin`]) and pass it by
/// reference to whatever needs to read the catalog. Insertion order of both
/// sequences is the default display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    categories: Vec<Category>,
    tools: Vec<Tool>,
}

impl Registry {
    /// Create a registry from explicit records.
    ///
    /// No validation is performed here; see [`Registry::validate`].
    pub fn new(categories: Vec<Category>, tools: Vec<Tool>) -> Self {
        tracing::trace!(
            categories = categories.len(),
            tools = tools.len(),
            "registry constructed"
        );
        Self { categories, tools }
    }

    /// Create the registry shipped with Tooltopia.
    pub fn builtin() -> Self {
        Self::new(builtin_categories(), builtin_tools())
    }

    /// All categories in display order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All tools in display order.
    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    /// Number of tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Check the registry invariants.
    ///
    /// Category ids and tool ids must be unique, and every tool must point
    /// at a known category. Returns the first violation found.
    pub fn validate(&self) -> Result<()> {
        let mut category_ids = HashSet::new();
        for category in &self.categories {
            if !category_ids.insert(category.id.as_str()) {
                return Err(Error::DuplicateCategory {
                    id: category.id.clone(),
                });
            }
        }

        let mut tool_ids = HashSet::new();
        for tool in &self.tools {
            if !tool_ids.insert(tool.id.as_str()) {
                return Err(Error::DuplicateTool {
                    id: tool.id.clone(),
                });
            }
            if !category_ids.contains(tool.category.as_str()) {
                return Err(Error::UnknownCategory {
                    tool: tool.id.clone(),
                    category: tool.category.clone(),
                });
            }
        }

        Ok(())
    }
}
