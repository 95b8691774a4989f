//! Command implementations for tooltopia-cli

pub mod browse;
pub mod route;
pub mod run;
pub mod search;

pub use browse::{
    run_categories, run_category, run_featured, run_popular, run_show, run_tools,
};
pub use route::run_route;
pub use run::{RunArgs, run_tool};
pub use search::run_search;
