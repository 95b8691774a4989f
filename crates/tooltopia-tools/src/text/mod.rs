//! Text tools

pub mod case;
pub mod count;
pub mod diff;
pub mod lines;
pub mod lorem;
pub mod slug;
