//! Tool id → transform lookup
//!
//! Runnable tools are a static table. A catalog id missing from the table
//! is a tool that is listed but not built yet.

use crate::developer::{json, jwt, regex_tester, yaml};
use crate::error::{Error, Result};
use crate::math::{gcd, temperature};
use crate::panel::{FnTransform, ToolInput, ToolOutput, Transform};
use crate::security::{encoding, hash, password, uuid};
use crate::text::{case, count, diff, lines, lorem, slug};
use crate::web::{color, entities, meta, minify, qr, url};

static TRANSFORMS: &[FnTransform] = &[
    // Text
    FnTransform::new("text-case-converter", case::run),
    FnTransform::new("word-counter", count::run),
    FnTransform::new("lorem-ipsum-generator", lorem::run),
    FnTransform::new("text-diff-checker", diff::run),
    FnTransform::new("text-to-slug", slug::run),
    FnTransform::new("find-and-replace", lines::run_find_and_replace),
    FnTransform::new("remove-line-breaks", lines::run_remove_line_breaks),
    FnTransform::new("remove-duplicate-lines", lines::run_remove_duplicate_lines),
    // Web
    FnTransform::new("color-picker", color::run),
    FnTransform::new("qr-code-generator", qr::run),
    FnTransform::new("html-entities-encoder", entities::run),
    FnTransform::new("url-encoder", url::run),
    FnTransform::new("meta-tag-generator", meta::run),
    FnTransform::new("css-minifier", minify::run_css),
    FnTransform::new("js-minifier", minify::run_js),
    FnTransform::new("html-minifier", minify::run_html),
    // Security
    FnTransform::new("password-generator", password::run_generator),
    FnTransform::new("password-strength-checker", password::run_checker),
    FnTransform::new("md5-generator", hash::run_md5),
    FnTransform::new("sha1-generator", hash::run_sha1),
    FnTransform::new("sha256-generator", hash::run_sha256),
    FnTransform::new("base64-encoder", encoding::run),
    FnTransform::new("uuid-generator", uuid::run),
    FnTransform::new("htpasswd-generator", hash::run_htpasswd),
    // Developer
    FnTransform::new("json-formatter", json::run),
    FnTransform::new("yaml-formatter", yaml::run),
    FnTransform::new("jwt-decoder", jwt::run),
    FnTransform::new("regex-tester", regex_tester::run),
    // Math and conversion
    FnTransform::new("gcd-lcm-calculator", gcd::run),
    FnTransform::new("temperature-converter", temperature::run),
];

/// Every transform, grouped by category.
pub fn transforms() -> impl Iterator<Item = &'static dyn Transform> {
    TRANSFORMS.iter().map(|t| t as &dyn Transform)
}

pub fn transform_for(id: &str) -> Option<&'static dyn Transform> {
    TRANSFORMS
        .iter()
        .find(|t| t.id() == id)
        .map(|t| t as &dyn Transform)
}

pub fn is_runnable(id: &str) -> bool {
    transform_for(id).is_some()
}

/// Run tool `id` on `input`.
///
/// # Errors
///
/// [`Error::Unavailable`] when no transform exists for `id`, otherwise
/// whatever the transform reports.
pub fn run(id: &str, input: &ToolInput) -> Result<ToolOutput> {
    let Some(transform) = transform_for(id) else {
        tracing::debug!(tool = id, "No transform registered");
        return Err(Error::Unavailable {
            tool: id.to_string(),
        });
    };
    tracing::debug!(tool = id, options = input.options.len(), "Running transform");
    let result = transform.run(input);
    match &result {
        Ok(_) => {
            for option in input.unread_options() {
                tracing::warn!(tool = id, option, "Ignoring option this tool does not use");
            }
        }
        Err(e) => tracing::debug!(tool = id, error = %e, "Transform failed"),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<_> = transforms().map(|t| t.id()).collect();
        assert_eq!(ids.len(), TRANSFORMS.len());
    }

    #[test]
    fn test_lookup() {
        assert_eq!(transform_for("css-minifier").map(|t| t.id()), Some("css-minifier"));
        assert!(transform_for("image-resizer").is_none());
        assert!(is_runnable("jwt-decoder"));
    }

    #[test]
    fn test_run_unavailable() {
        let err = run("image-resizer", &ToolInput::new("x")).unwrap_err();
        assert_eq!(err.to_string(), "image-resizer is currently under development");
    }

    #[test]
    fn test_run_dispatches() {
        let out = run("md5-generator", &ToolInput::new("hello")).unwrap();
        assert_eq!(out.text, "5d41402abc4b2a76b9719d911017c592");
    }

    #[test]
    fn test_run_leaves_misspelt_option_unread() {
        let input = ToolInput::new("Hello World")
            .with_option("max_length", "5")
            .with_option("lenght", "8");
        let out = run("text-to-slug", &input).unwrap();
        assert_eq!(out.text, "hello");
        assert_eq!(input.unread_options(), vec!["lenght"]);
    }

    #[test]
    fn test_run_reads_mode_on_every_minifier() {
        for id in ["css-minifier", "js-minifier", "html-minifier"] {
            let input = ToolInput::new("a").with_option("mode", "format");
            run(id, &input).unwrap();
            assert!(input.unread_options().is_empty(), "{id} ignored mode");
        }
    }
}
