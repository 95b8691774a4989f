//! Runnable transforms behind the Tooltopia catalog.
//!
//! Every tool page is an input panel, an action and an output panel. This
//! crate models that as [`ToolInput`] → [`Transform`] → [`ToolOutput`] and
//! provides one transform per runnable catalog tool, grouped the same way
//! the catalog groups them:
//!
//! - [`text`]: case conversion, counting, lorem ipsum, diff, slugs, line edits
//! - [`web`]: colours, QR payloads, entity and URL encoding, meta tags, minifiers
//! - [`security`]: passwords, digests, Base64, UUIDs, htpasswd
//! - [`developer`]: JSON, YAML, JWT and regex tools
//! - [`math`]: GCD/LCM and temperature conversion
//!
//! [`dispatcher::run`] looks a transform up by catalog id. Ids without a
//! transform report [`Error::Unavailable`].

pub mod developer;
pub mod dispatcher;
pub mod error;
pub mod math;
pub mod panel;
pub mod security;
pub mod text;
pub mod web;

pub use dispatcher::{is_runnable, run, transform_for, transforms};
pub use error::{Error, Result};
pub use panel::{FnTransform, ToolInput, ToolOutput, Transform};
