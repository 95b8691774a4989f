//! Tool catalog for Tooltopia.
//!
//! This crate owns the fixed set of categories and tools and the pure
//! query functions the shell uses to render them.
//!
//! # Architecture
//!
//! - [`Registry`] is built once at startup from literal data
//!   ([`Registry::builtin`]) and handed out by reference. It has no
//!   mutation operations.
//! - The query layer ([`query`]) derives views (featured, popular, by
//!   category, search) without touching the registry.
//! - [`Icon`] and [`ColorToken`] are closed sets resolved from symbolic
//!   names, each with a single fallback.
//! - [`Route`] builds and parses the navigation paths that address
//!   categories, tools and searches.

pub mod error;
pub mod icon;
pub mod query;
pub mod registry;
pub mod route;
pub mod theme;

pub use error::{Error, Result};
pub use icon::Icon;
pub use query::DEFAULT_POPULAR_LIMIT;
pub use registry::{BUILTIN_CATEGORY_COUNT, BUILTIN_TOOL_COUNT, Category, Registry, Tool};
pub use route::{Page, Route};
pub use theme::ColorToken;
