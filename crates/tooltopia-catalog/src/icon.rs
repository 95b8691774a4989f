//! Symbolic icon references
//!
//! Categories and tools name their icon symbolically. The set of names the
//! catalog understands is closed: anything else resolves to [`Icon::FALLBACK`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Icon handle understood by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Icon {
    File,
    FileText,
    Globe,
    Image,
    Calculator,
    RefreshCw,
    Lock,
    Code,
    Folder,
    Tool,
}

impl Icon {
    /// Icon used when a symbolic name is not recognized.
    pub const FALLBACK: Icon = Icon::Folder;

    /// Every icon, in declaration order.
    pub const ALL: [Icon; 10] = [
        Icon::File,
        Icon::FileText,
        Icon::Globe,
        Icon::Image,
        Icon::Calculator,
        Icon::RefreshCw,
        Icon::Lock,
        Icon::Code,
        Icon::Folder,
        Icon::Tool,
    ];

    /// Look up an icon by its symbolic name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|icon| icon.name() == name)
    }

    /// Resolve a symbolic name, falling back to [`Icon::FALLBACK`].
    pub fn resolve(name: &str) -> Self {
        Self::from_name(name).unwrap_or(Self::FALLBACK)
    }

    /// Default icon for tools of a category that carry no icon of their own.
    ///
    /// Unknown categories get the generic tool icon.
    pub fn for_category(category_id: &str) -> Self {
        match category_id {
            "text" => Icon::FileText,
            "web" => Icon::Globe,
            "image" => Icon::Image,
            "math" => Icon::Calculator,
            "conversion" => Icon::RefreshCw,
            "security" => Icon::Lock,
            "developer" => Icon::Code,
            _ => Icon::Tool,
        }
    }

    /// Symbolic name of the icon.
    pub fn name(&self) -> &'static str {
        match self {
            Icon::File => "File",
            Icon::FileText => "FileText",
            Icon::Globe => "Globe",
            Icon::Image => "Image",
            Icon::Calculator => "Calculator",
            Icon::RefreshCw => "RefreshCw",
            Icon::Lock => "Lock",
            Icon::Code => "Code",
            Icon::Folder => "Folder",
            Icon::Tool => "Tool",
        }
    }

    /// Terminal glyph rendered in place of the icon.
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::File => "▤",
            Icon::FileText => "≣",
            Icon::Globe => "◍",
            Icon::Image => "▣",
            Icon::Calculator => "±",
            Icon::RefreshCw => "↻",
            Icon::Lock => "⚿",
            Icon::Code => "‹›",
            Icon::Folder => "▭",
            Icon::Tool => "⚒",
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
