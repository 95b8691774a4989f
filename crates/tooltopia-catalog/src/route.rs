//! Navigation paths
//!
//! Every page of the catalog is addressable by a stable path derived from
//! an id (or, for search, from the query):
//!
//! | Route | Path |
//! |-------|------|
//! | `Home` | `/` |
//! | `Categories` | `/categories` |
//! | `Category(id)` | `/category/{id}` |
//! | `Tool(id)` | `/tool/{id}` |
//! | `Search(q)` | `/search?q={percent-encoded q}` |
//!
//! Search queries are encoded like a browser's `encodeURIComponent`:
//! `!*'()` stay literal alongside `-_.~`.

use std::fmt;

use crate::error::{Error, Result};
use crate::registry::{Category, Registry, Tool};

/// A navigable location in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Categories,
    Category(String),
    Tool(String),
    Search(String),
}

impl Route {
    /// Build the path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Categories => "/categories".to_string(),
            Route::Category(id) => format!("/category/{id}"),
            Route::Tool(id) => format!("/tool/{id}"),
            Route::Search(query) => format!("/search?q={}", encode_component(query)),
        }
    }

    /// Parse a path produced by [`Route::path`].
    ///
    /// A trailing slash is tolerated. In search query strings `+` decodes
    /// to a space, like a browser form submission.
    pub fn parse(path: &str) -> Result<Self> {
        let invalid = || Error::InvalidRoute {
            path: path.to_string(),
        };

        let (location, query) = match path.split_once('?') {
            Some((location, query)) => (location, Some(query)),
            None => (path, None),
        };

        if !location.starts_with('/') {
            return Err(invalid());
        }
        let trimmed = location.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').skip(1).collect();

        match segments.as_slice() {
            [] => Ok(Route::Home),
            ["categories"] => Ok(Route::Categories),
            ["category", id] if is_slug(id) => Ok(Route::Category((*id).to_string())),
            ["tool", id] if is_slug(id) => Ok(Route::Tool((*id).to_string())),
            ["search"] => {
                let raw = query
                    .into_iter()
                    .flat_map(|q| q.split('&'))
                    .find_map(|pair| pair.strip_prefix("q="))
                    .unwrap_or("");
                let spaced = raw.replace('+', " ");
                let decoded = urlencoding::decode(&spaced).map_err(|_| invalid())?;
                Ok(Route::Search(decoded.into_owned()))
            }
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

fn is_slug(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Marks `encodeURIComponent` leaves alone but `urlencoding` escapes.
const URI_COMPONENT_MARKS: [(&str, &str); 5] = [
    ("%21", "!"),
    ("%2A", "*"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
];

fn encode_component(query: &str) -> String {
    URI_COMPONENT_MARKS
        .iter()
        .fold(urlencoding::encode(query).into_owned(), |encoded, (escape, mark)| {
            encoded.replace(escape, mark)
        })
}

/// What a route renders once resolved against a registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page<'a> {
    Home {
        featured: Vec<&'a Tool>,
        popular: Vec<&'a Tool>,
    },
    Categories(&'a [Category]),
    Category {
        category: &'a Category,
        tools: Vec<&'a Tool>,
    },
    Tool {
        tool: &'a Tool,
        category: &'a Category,
    },
    Search {
        query: String,
        results: Vec<&'a Tool>,
    },
    /// The route named something that does not exist; go here instead.
    Redirect(Route),
}

impl Registry {
    /// Resolve a route to the data its page shows.
    ///
    /// Unknown categories and tools (or tools whose category is missing)
    /// redirect to the category listing. A blank search query yields no
    /// results rather than the whole catalog.
    pub fn resolve(&self, route: &Route) -> Page<'_> {
        match route {
            Route::Home => Page::Home {
                featured: self.featured_tools(),
                popular: self.popular_tools(crate::query::DEFAULT_POPULAR_LIMIT),
            },
            Route::Categories => Page::Categories(self.categories()),
            Route::Category(id) => match self.category_by_id(id) {
                Some(category) => Page::Category {
                    category,
                    tools: self.tools_by_category(id),
                },
                None => Page::Redirect(Route::Categories),
            },
            Route::Tool(id) => {
                let found = self
                    .tool_by_id(id)
                    .and_then(|tool| self.category_of(tool).map(|category| (tool, category)));
                match found {
                    Some((tool, category)) => Page::Tool { tool, category },
                    None => Page::Redirect(Route::Categories),
                }
            }
            Route::Search(query) => {
                let results = if query.trim().is_empty() {
                    Vec::new()
                } else {
                    self.search_tools(query)
                };
                Page::Search {
                    query: query.clone(),
                    results,
                }
            }
        }
    }
}
