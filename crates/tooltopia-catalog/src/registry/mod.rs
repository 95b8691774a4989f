//! Category and tool registry
//!
//! The registry is the single source of truth for what the catalog offers.
//! It is built once from the literal data in `builtins` and never mutated.

mod builtins;
mod store;
mod types;

pub use builtins::{BUILTIN_CATEGORY_COUNT, BUILTIN_TOOL_COUNT, builtin_categories, builtin_tools};
pub use store::Registry;
pub use types::{Category, Tool};
