//! Regex-based CSS, JavaScript and HTML minifiers
//!
//! These are whitespace and comment strippers, not parsers. String
//! literals are not protected: a `//` inside a JavaScript string is treated
//! as a comment.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::error::Result;
use crate::panel::{ToolInput, ToolOutput, reduction_percent};

macro_rules! pattern {
    ($name:ident, $re:expr) => {
        static $name: LazyLock<Regex> =
            LazyLock::new(|| Regex::new($re).expect(concat!("Invalid ", stringify!($name), " regex")));
    };
}

pattern!(BLOCK_COMMENT, r"/\*[\s\S]*?\*/");
pattern!(HEX_COLOR, r"#([0-9a-fA-F]{6})");
pattern!(OPEN_BRACE, r"\s*\{\s*");
pattern!(CLOSE_BRACE, r"\s*\}\s*");
pattern!(COLON, r"\s*:\s*");
pattern!(SEMICOLON, r"\s*;\s*");
pattern!(WHITESPACE, r"\s+");
pattern!(SEMICOLON_AFTER, r";\s*");
pattern!(BLANK_LINES, r"\n\s*\n");
pattern!(COMMA, r"\s*,\s*");
pattern!(LINE_COMMENT, r"(?m)//.*$");
pattern!(LINE_EDGES, r"(?m)^\s+|\s+$");
pattern!(JS_PUNCTUATION, r"\s*([=:+\-*/&|!<>{}()\[\],;])\s*");
pattern!(SEMICOLON_BRACE, r";\s*\}");
pattern!(HTML_COMMENT, r"<!--[\s\S]*?-->");
pattern!(EMPTY_ATTRIBUTE, r#"\s+(\w+)="""#);
pattern!(TYPE_TEXT, r#"\s+type="text""#);
pattern!(METHOD_GET, r#"\s+method="get""#);
pattern!(WHITESPACE_RUN, r"\s{2,}");
pattern!(BETWEEN_TAGS, r">\s+<");
pattern!(JS_OPERATOR, r"\s*([=:+\-*/&|!<>])\s*");
pattern!(SPACE_RUN, r"[ \t]+");
pattern!(FUNCTION_PAREN, r"function\s*\(\s*");
pattern!(PAREN_BRACE, r"\)\s*\{");
pattern!(TAG, r"<[^<]+>");
pattern!(CLOSING_TAG, r"</[^>]+>");

const OPTIONAL_CLOSING_TAGS: [&str; 5] = ["</li>", "</dt>", "</dd>", "</p>", "</option>"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CssOptions {
    pub remove_comments: bool,
    pub compress_colors: bool,
    pub compress_braces: bool,
    pub remove_whitespace: bool,
    pub remove_newlines: bool,
}

impl Default for CssOptions {
    fn default() -> Self {
        Self {
            remove_comments: true,
            compress_colors: true,
            compress_braces: true,
            remove_whitespace: true,
            remove_newlines: true,
        }
    }
}

/// `#aabbcc` to `#abc`; six-digit colours with unequal pairs are kept.
fn compress_colors(css: &str) -> String {
    HEX_COLOR
        .replace_all(css, |caps: &Captures| {
            let hex = caps[1].as_bytes();
            let pairs_match = hex
                .chunks(2)
                .all(|pair| pair[0].eq_ignore_ascii_case(&pair[1]));
            if pairs_match {
                let short: String = hex.chunks(2).map(|pair| pair[0] as char).collect();
                format!("#{short}")
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}

pub fn minify_css(css: &str, options: CssOptions) -> String {
    let mut out = css.to_string();
    if options.remove_comments {
        out = BLOCK_COMMENT.replace_all(&out, "").into_owned();
    }
    if options.compress_colors {
        out = compress_colors(&out);
    }
    if options.compress_braces {
        out = OPEN_BRACE.replace_all(&out, "{").into_owned();
        out = CLOSE_BRACE.replace_all(&out, "}").into_owned();
        out = COLON.replace_all(&out, ":").into_owned();
        out = SEMICOLON.replace_all(&out, ";").into_owned();
        out = out.replace(";}", "}");
    }
    if options.remove_whitespace {
        out = WHITESPACE.replace_all(&out, " ").trim().to_string();
    }
    if options.remove_newlines {
        out = out.replace('\n', "");
    }
    out
}

/// Expand CSS to one declaration per line with two-space indentation.
pub fn format_css(css: &str) -> String {
    let out = BLOCK_COMMENT.replace_all(css, |caps: &Captures| caps[0].trim().to_string());
    let out = OPEN_BRACE.replace_all(&out, " {\n  ");
    let out = SEMICOLON_AFTER.replace_all(&out, ";\n  ");
    let out = CLOSE_BRACE.replace_all(&out, "\n}\n");
    let out = BLANK_LINES.replace_all(&out, "\n");
    let out = COLON.replace_all(&out, ": ");
    let out = COMMA.replace_all(&out, ", ");
    out.trim().to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsOptions {
    pub remove_comments: bool,
    pub remove_whitespace: bool,
    pub remove_newlines: bool,
    pub trim_semicolons: bool,
}

impl Default for JsOptions {
    fn default() -> Self {
        Self {
            remove_comments: true,
            remove_whitespace: true,
            remove_newlines: true,
            trim_semicolons: true,
        }
    }
}

pub fn minify_js(js: &str, options: JsOptions) -> String {
    let mut out = js.to_string();
    if options.remove_comments {
        out = LINE_COMMENT.replace_all(&out, "").into_owned();
        out = BLOCK_COMMENT.replace_all(&out, "").into_owned();
    }
    if options.remove_whitespace {
        out = LINE_EDGES.replace_all(&out, "").into_owned();
        out = WHITESPACE.replace_all(&out, " ").into_owned();
        out = JS_PUNCTUATION.replace_all(&out, "${1}").into_owned();
    }
    if options.remove_newlines {
        out = out.replace('\n', "");
    }
    if options.trim_semicolons {
        out = SEMICOLON_BRACE.replace_all(&out, "}").into_owned();
    }
    out
}

/// Put statements and braces on their own lines and space out operators.
///
/// Indentation is not tracked: every line comes out flush left.
pub fn format_js(js: &str) -> String {
    let out = LINE_COMMENT.replace_all(js, |caps: &Captures| caps[0].trim_end().to_string());
    let out = OPEN_BRACE.replace_all(&out, " {\n  ");
    let out = SEMICOLON_AFTER.replace_all(&out, ";\n  ");
    let out = CLOSE_BRACE.replace_all(&out, "\n}\n");
    let out = BLANK_LINES.replace_all(&out, "\n");
    let out = JS_OPERATOR.replace_all(&out, " ${1} ");
    let out = SPACE_RUN.replace_all(&out, " ");
    let out = FUNCTION_PAREN.replace_all(&out, "function(");
    let out = PAREN_BRACE.replace_all(&out, ") {");
    out.lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HtmlOptions {
    pub remove_comments: bool,
    pub remove_empty_attributes: bool,
    pub remove_redundant_attributes: bool,
    pub collapse_whitespace: bool,
    /// Drop closing tags HTML lets the parser infer
    pub remove_optional_tags: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            remove_comments: true,
            remove_empty_attributes: true,
            remove_redundant_attributes: true,
            collapse_whitespace: true,
            remove_optional_tags: false,
        }
    }
}

pub fn minify_html(html: &str, options: HtmlOptions) -> String {
    let mut out = html.to_string();
    if options.remove_comments {
        out = HTML_COMMENT.replace_all(&out, "").into_owned();
    }
    if options.remove_empty_attributes {
        out = EMPTY_ATTRIBUTE.replace_all(&out, "").into_owned();
    }
    if options.remove_redundant_attributes {
        out = TYPE_TEXT.replace_all(&out, "").into_owned();
        out = METHOD_GET.replace_all(&out, "").into_owned();
    }
    if options.collapse_whitespace {
        out = WHITESPACE_RUN.replace_all(&out, " ").into_owned();
        out = BETWEEN_TAGS.replace_all(&out, "><").trim().to_string();
    }
    if options.remove_optional_tags {
        for tag in OPTIONAL_CLOSING_TAGS {
            out = out.replace(tag, "");
        }
    }
    out
}

/// True when `line` has an opening tag with no closing tag after it.
fn opens_block(line: &str) -> bool {
    line.match_indices('<').any(|(start, _)| {
        let mut rest = line[start + 1..].chars();
        match rest.next() {
            None | Some('/') => false,
            Some(_) => {
                let after = rest.as_str();
                after
                    .find('>')
                    .is_some_and(|end| !CLOSING_TAG.is_match(&after[end + 1..]))
            }
        }
    })
}

/// One tag per line, two-space indentation by nesting depth.
///
/// A line that starts with a closing tag outdents; a line that leaves a
/// tag open indents the lines after it.
pub fn format_html(html: &str) -> String {
    let split = html.replace("><", ">\n<");
    let split = TAG.replace_all(&split, |caps: &Captures| {
        WHITESPACE.replace_all(&caps[0], " ").into_owned()
    });

    let mut out = String::new();
    let mut depth: usize = 0;
    for line in split.lines().map(str::trim) {
        if line.starts_with("</") {
            depth = depth.saturating_sub(1);
        }
        out.push_str(&"  ".repeat(depth));
        out.push_str(line);
        out.push('\n');
        if opens_block(line) {
            depth += 1;
        }
    }
    out.trim().to_string()
}

fn minified(before: &str, after: String, language: &str) -> ToolOutput {
    let notice = format!(
        "{language} minified successfully! Size reduced by {}%",
        reduction_percent(before, &after)
    );
    ToolOutput::new(after).with_notice(notice)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Minify,
    Format,
}

const MODES: [(&str, Mode); 2] = [("minify", Mode::Minify), ("format", Mode::Format)];

pub fn run_css(input: &ToolInput) -> Result<ToolOutput> {
    if input.choice("mode", Mode::Minify, &MODES)? == Mode::Format {
        let css = input.require_text("CSS to format")?;
        return Ok(ToolOutput::new(format_css(css)).with_notice("CSS formatted successfully"));
    }
    let css = input.require_text("CSS to minify")?;
    let defaults = CssOptions::default();
    let options = CssOptions {
        remove_comments: input.flag("remove_comments", defaults.remove_comments)?,
        compress_colors: input.flag("compress_colors", defaults.compress_colors)?,
        compress_braces: input.flag("compress_braces", defaults.compress_braces)?,
        remove_whitespace: input.flag("remove_whitespace", defaults.remove_whitespace)?,
        remove_newlines: input.flag("remove_newlines", defaults.remove_newlines)?,
    };
    Ok(minified(css, minify_css(css, options), "CSS"))
}

pub fn run_js(input: &ToolInput) -> Result<ToolOutput> {
    if input.choice("mode", Mode::Minify, &MODES)? == Mode::Format {
        let js = input.require_text("JavaScript to format")?;
        return Ok(
            ToolOutput::new(format_js(js)).with_notice("JavaScript formatted successfully")
        );
    }
    let js = input.require_text("JavaScript to minify")?;
    let defaults = JsOptions::default();
    let options = JsOptions {
        remove_comments: input.flag("remove_comments", defaults.remove_comments)?,
        remove_whitespace: input.flag("remove_whitespace", defaults.remove_whitespace)?,
        remove_newlines: input.flag("remove_newlines", defaults.remove_newlines)?,
        trim_semicolons: input.flag("trim_semicolons", defaults.trim_semicolons)?,
    };
    Ok(minified(js, minify_js(js, options), "JavaScript"))
}

pub fn run_html(input: &ToolInput) -> Result<ToolOutput> {
    if input.choice("mode", Mode::Minify, &MODES)? == Mode::Format {
        let html = input.require_text("HTML to format")?;
        return Ok(ToolOutput::new(format_html(html)).with_notice("HTML formatted successfully"));
    }
    let html = input.require_text("HTML to minify")?;
    let defaults = HtmlOptions::default();
    let options = HtmlOptions {
        remove_comments: input.flag("remove_comments", defaults.remove_comments)?,
        remove_empty_attributes: input
            .flag("remove_empty_attributes", defaults.remove_empty_attributes)?,
        remove_redundant_attributes: input
            .flag("remove_redundant_attributes", defaults.remove_redundant_attributes)?,
        collapse_whitespace: input.flag("collapse_whitespace", defaults.collapse_whitespace)?,
        remove_optional_tags: input.flag("remove_optional_tags", defaults.remove_optional_tags)?,
    };
    Ok(minified(html, minify_html(html, options), "HTML"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const CSS: &str = "/* header */\nbody {\n  color : #FFFFFF;\n  background: #123456;\n}\n\na { margin: 0 ; }\n";

    #[test]
    fn test_minify_css() {
        assert_eq!(
            minify_css(CSS, CssOptions::default()),
            "body{color:#FFF;background:#123456}a{margin:0}"
        );
    }

    #[rstest]
    #[case("#aabbcc", "#abc")]
    #[case("#AaBbCc", "#ABC")]
    #[case("#aabbcd", "#aabbcd")]
    #[case("#abc", "#abc")]
    fn test_compress_colors(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(compress_colors(input), expected);
    }

    #[test]
    fn test_minify_css_keeps_comments_when_asked() {
        let options = CssOptions {
            remove_comments: false,
            ..CssOptions::default()
        };
        assert!(minify_css(CSS, options).starts_with("/* header */"));
    }

    #[test]
    fn test_format_css() {
        insta::assert_snapshot!(format_css("a{color:red;background:blue}"), @r"
        a {
          color: red;
          background: blue
        }
        ");
    }

    #[test]
    fn test_minify_js() {
        let js = "// greet\nfunction greet(name) {\n  /* say hi */\n  return 'Hi ' + name;\n}\n";
        assert_eq!(
            minify_js(js, JsOptions::default()),
            "function greet(name){return 'Hi '+name}"
        );
    }

    #[test]
    fn test_minify_html() {
        let html = "<!-- nav -->\n<form method=\"get\" class=\"\">\n  <input type=\"text\"   name=\"q\">\n</form>\n";
        assert_eq!(
            minify_html(html, HtmlOptions::default()),
            "<form><input name=\"q\"></form>"
        );
    }

    #[test]
    fn test_minify_html_optional_tags() {
        let options = HtmlOptions {
            remove_optional_tags: true,
            ..HtmlOptions::default()
        };
        assert_eq!(
            minify_html("<ul>\n  <li>a</li>\n  <li>b</li>\n</ul>", options),
            "<ul><li>a<li>b</ul>"
        );
    }

    #[test]
    fn test_run_css_reports_reduction() {
        let out = run_css(&ToolInput::new("a  {  }")).unwrap();
        assert_eq!(out.text, "a{}");
        assert_eq!(
            out.notice.as_deref(),
            Some("CSS minified successfully! Size reduced by 57.14%")
        );
    }

    #[test]
    fn test_run_css_format_mode() {
        let out = run_css(&ToolInput::new("a{b:c}").with_option("mode", "format")).unwrap();
        assert_eq!(out.text, "a {\n  b: c\n}");
    }

    #[test]
    fn test_format_js() {
        insta::assert_snapshot!(format_js("var x=1;if(x>0){y=2}"), @r"
        var x = 1;
        if(x > 0) {
        y = 2
        }
        ");
    }

    #[test]
    fn test_format_js_tightens_function_parens() {
        assert_eq!(
            format_js("function ( a ){return a}"),
            "function(a ) {\nreturn a\n}"
        );
    }

    #[test]
    fn test_run_js_format_mode() {
        let input = ToolInput::new("function a(){return 1;}").with_option("mode", "format");
        let out = run_js(&input).unwrap();
        assert_eq!(out.text, "function a() {\nreturn 1;\n}");
        assert_eq!(out.notice.as_deref(), Some("JavaScript formatted successfully"));
    }

    #[test]
    fn test_format_html() {
        let html = "<div class=\"a\n  b\"><p>x</p><ul><li>1</li></ul></div>";
        insta::assert_snapshot!(format_html(html), @r#"
        <div class="a b">
          <p>x</p>
          <ul>
            <li>1</li>
          </ul>
        </div>
        "#);
    }

    #[rstest]
    #[case("<div>", true)]
    #[case("<p>x</p>", false)]
    #[case("</div>", false)]
    #[case("text", false)]
    #[case("<b>x</b><i>", true)]
    #[case("<é>", true)]
    fn test_opens_block(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(opens_block(line), expected);
    }

    #[test]
    fn test_run_html_format_mode() {
        let input = ToolInput::new("<div><p>x</p></div>").with_option("mode", "format");
        let out = run_html(&input).unwrap();
        assert_eq!(out.text, "<div>\n  <p>x</p>\n</div>");
        assert_eq!(out.notice.as_deref(), Some("HTML formatted successfully"));
    }

    #[test]
    fn test_format_mode_blank_input_message() {
        let input = ToolInput::new(" ").with_option("mode", "format");
        assert_eq!(
            run_js(&input).unwrap_err().to_string(),
            "Please enter some JavaScript to format"
        );
    }
}
