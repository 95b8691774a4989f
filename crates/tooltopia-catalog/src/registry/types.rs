//! Core record types for the registry

use serde::Serialize;

use crate::icon::Icon;
use crate::route::Route;
use crate::theme::ColorToken;

/// A named grouping of tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    /// Machine identifier (e.g., "text", "security")
    pub id: String,
    /// Display name (e.g., "Text Tools")
    pub name: String,
    pub description: String,
    pub icon: Icon,
    pub color: ColorToken,
}

impl Category {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        icon: Icon,
        color: ColorToken,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            icon,
            color,
        }
    }

    /// Navigation path of the category page.
    pub fn path(&self) -> String {
        Route::Category(self.id.clone()).path()
    }
}

/// A single utility listed in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tool {
    /// Machine identifier (e.g., "json-formatter")
    pub id: String,
    /// Display name (e.g., "JSON Formatter")
    pub name: String,
    pub description: String,
    /// Id of the owning category
    pub category: String,
    /// Navigation path of the tool page
    pub url: String,
    /// Shown in the featured section of the home page
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub featured: bool,
    /// Ordering hint for the popular section (higher = more popular)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popularity_score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
}

impl Tool {
    /// Create a tool whose navigation path is derived from its id.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        let id = id.into();
        let url = Route::Tool(id.clone()).path();
        Self {
            id,
            name: name.into(),
            description: description.into(),
            category: category.into(),
            url,
            featured: false,
            popularity_score: None,
            icon: None,
        }
    }

    /// Mark the tool as featured (builder pattern).
    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    /// Set the popularity score (builder pattern).
    pub fn with_popularity(mut self, score: u32) -> Self {
        self.popularity_score = Some(score);
        self
    }

    /// Set an explicit icon (builder pattern).
    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Popularity used for ordering; an absent score counts as 0.
    pub fn popularity(&self) -> u32 {
        self.popularity_score.unwrap_or(0)
    }

    /// Icon to display: the tool's own, else its category default.
    pub fn display_icon(&self) -> Icon {
        self.icon.unwrap_or_else(|| Icon::for_category(&self.category))
    }

    /// Substring match against name and description.
    ///
    /// `folded_query` must already be lower-cased.
    pub(crate) fn matches_folded(&self, folded_query: &str) -> bool {
        self.name.to_lowercase().contains(folded_query)
            || self.description.to_lowercase().contains(folded_query)
    }
}
