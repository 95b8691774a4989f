//! Query layer over the registry
//!
//! Every function here is a pure view: it borrows the registry, never
//! mutates it, and returns results in registry order unless stated
//! otherwise. Unknown ids are not errors; lookups return `None` and
//! filters return an empty list.

use crate::registry::{Category, Registry, Tool};

/// Default number of tools returned by [`Registry::popular_tools`].
pub const DEFAULT_POPULAR_LIMIT: usize = 8;

impl Registry {
    /// Tools flagged as featured, in registry order.
    pub fn featured_tools(&self) -> Vec<&Tool> {
        self.tools().iter().filter(|t| t.featured).collect()
    }

    /// The `limit` most popular tools.
    ///
    /// Sorted by descending popularity score with absent scores counted as
    /// zero. Equal scores keep their registry order. A limit larger than
    /// the registry returns every tool.
    pub fn popular_tools(&self, limit: usize) -> Vec<&Tool> {
        let mut tools: Vec<&Tool> = self.tools().iter().collect();
        // `sort_by_key` is stable, which gives the registry-order tie break.
        tools.sort_by_key(|t| std::cmp::Reverse(t.popularity()));
        tools.truncate(limit);
        tools
    }

    /// Tools belonging to `category_id`, in registry order.
    pub fn tools_by_category(&self, category_id: &str) -> Vec<&Tool> {
        self.tools()
            .iter()
            .filter(|t| t.category == category_id)
            .collect()
    }

    pub fn category_by_id(&self, category_id: &str) -> Option<&Category> {
        self.categories().iter().find(|c| c.id == category_id)
    }

    pub fn tool_by_id(&self, tool_id: &str) -> Option<&Tool> {
        self.tools().iter().find(|t| t.id == tool_id)
    }

    /// Category a tool belongs to.
    pub fn category_of(&self, tool: &Tool) -> Option<&Category> {
        self.category_by_id(&tool.category)
    }

    /// Case-insensitive substring search over tool names and descriptions.
    ///
    /// The search is literal: an empty query matches every tool, so callers
    /// should handle blank input before calling.
    pub fn search_tools(&self, query: &str) -> Vec<&Tool> {
        let folded = query.to_lowercase();
        self.tools()
            .iter()
            .filter(|t| t.matches_folded(&folded))
            .collect()
    }
}
