//! Built-in catalog content
//!
//! Literal categories and tools shipped with Tooltopia. Order matters: it is
//! the default display order everywhere the catalog is listed.

use super::{Category, Tool};
use crate::icon::Icon;
use crate::theme::ColorToken;

/// Number of built-in categories.
pub const BUILTIN_CATEGORY_COUNT: usize = 7;

/// Number of built-in tools.
pub const BUILTIN_TOOL_COUNT: usize = 56;

/// Returns all built-in categories in display order.
pub fn builtin_categories() -> Vec<Category> {
    vec![
        Category::new(
            "text",
            "Text Tools",
            "Transform, analyze and convert text with these powerful utilities",
            Icon::File,
            ColorToken::Purple,
        ),
        Category::new(
            "web",
            "Web Tools",
            "Useful tools for web developers and designers",
            Icon::Globe,
            ColorToken::Blue,
        ),
        Category::new(
            "image",
            "Image Tools",
            "Create, edit and convert images easily",
            Icon::Image,
            ColorToken::Green,
        ),
        Category::new(
            "math",
            "Math Tools",
            "Calculators and converters for mathematical operations",
            Icon::Calculator,
            ColorToken::Red,
        ),
        Category::new(
            "conversion",
            "Conversion Tools",
            "Convert between different units and formats",
            Icon::RefreshCw,
            ColorToken::Yellow,
        ),
        Category::new(
            "security",
            "Security Tools",
            "Tools for encryption, decryption and security",
            Icon::Lock,
            ColorToken::Pink,
        ),
        Category::new(
            "developer",
            "Developer Tools",
            "Helpful utilities for software developers",
            Icon::Code,
            ColorToken::Indigo,
        ),
    ]
}

/// Returns all built-in tools in display order.
pub fn builtin_tools() -> Vec<Tool> {
    vec![
        // Text tools (8)
        Tool::new(
            "text-case-converter",
            "Text Case Converter",
            "Convert text between different cases: lowercase, UPPERCASE, Title Case, and more",
            "text",
        )
        .featured()
        .with_popularity(98),
        Tool::new(
            "word-counter",
            "Word Counter",
            "Count words, characters, sentences and paragraphs in your text",
            "text",
        )
        .featured()
        .with_popularity(95),
        Tool::new(
            "lorem-ipsum-generator",
            "Lorem Ipsum Generator",
            "Generate lorem ipsum placeholder text for your designs",
            "text",
        )
        .with_popularity(88),
        Tool::new(
            "text-diff-checker",
            "Text Diff Checker",
            "Compare two texts and highlight the differences",
            "text",
        )
        .with_popularity(85),
        Tool::new(
            "text-to-slug",
            "Text to Slug Converter",
            "Convert text to URL-friendly slug format",
            "text",
        )
        .with_popularity(80),
        Tool::new(
            "find-and-replace",
            "Find and Replace",
            "Find and replace text in a string or paragraph",
            "text",
        )
        .with_popularity(78),
        Tool::new(
            "remove-line-breaks",
            "Remove Line Breaks",
            "Remove line breaks from your text",
            "text",
        )
        .with_popularity(75),
        Tool::new(
            "remove-duplicate-lines",
            "Remove Duplicate Lines",
            "Remove duplicate lines from your text",
            "text",
        )
        .with_popularity(73),
        // Web tools (8)
        Tool::new(
            "color-picker",
            "Color Picker",
            "Select colors and get their HEX, RGB, and HSL values",
            "web",
        )
        .featured()
        .with_popularity(97),
        Tool::new(
            "qr-code-generator",
            "QR Code Generator",
            "Generate QR codes for URLs, text, contact details, and more",
            "web",
        )
        .featured()
        .with_popularity(96),
        Tool::new(
            "html-entities-encoder",
            "HTML Entities Encoder/Decoder",
            "Encode or decode HTML entities in your text",
            "web",
        )
        .with_popularity(87),
        Tool::new(
            "url-encoder",
            "URL Encoder/Decoder",
            "Encode or decode URLs for use in web applications",
            "web",
        )
        .with_popularity(86),
        Tool::new(
            "meta-tag-generator",
            "Meta Tag Generator",
            "Generate meta tags for your website's SEO",
            "web",
        )
        .with_popularity(84),
        Tool::new(
            "css-minifier",
            "CSS Minifier",
            "Minify your CSS code to reduce file size",
            "web",
        )
        .with_popularity(83),
        Tool::new(
            "js-minifier",
            "JavaScript Minifier",
            "Minify your JavaScript code to reduce file size",
            "web",
        )
        .with_popularity(82),
        Tool::new(
            "html-minifier",
            "HTML Minifier",
            "Minify your HTML code to reduce file size",
            "web",
        )
        .with_popularity(81),
        // Image tools (8)
        Tool::new(
            "image-converter",
            "Image Converter",
            "Convert images between different formats",
            "image",
        )
        .featured()
        .with_popularity(94),
        Tool::new(
            "image-resizer",
            "Image Resizer",
            "Resize images to specific dimensions",
            "image",
        )
        .featured()
        .with_popularity(93),
        Tool::new(
            "image-compressor",
            "Image Compressor",
            "Compress images to reduce file size",
            "image",
        )
        .with_popularity(92),
        Tool::new(
            "image-cropper",
            "Image Cropper",
            "Crop images to specific dimensions",
            "image",
        )
        .with_popularity(90),
        Tool::new(
            "image-color-picker",
            "Image Color Picker",
            "Pick colors from an image",
            "image",
        )
        .with_popularity(89),
        Tool::new(
            "image-to-base64",
            "Image to Base64",
            "Convert images to Base64 encoding",
            "image",
        )
        .with_popularity(87),
        Tool::new(
            "svg-to-png",
            "SVG to PNG Converter",
            "Convert SVG images to PNG format",
            "image",
        )
        .with_popularity(85),
        Tool::new(
            "image-watermark",
            "Image Watermark",
            "Add watermarks to your images",
            "image",
        )
        .with_popularity(83),
        // Math tools (8)
        Tool::new(
            "calculator",
            "Scientific Calculator",
            "Perform complex mathematical calculations",
            "math",
        )
        .featured()
        .with_popularity(91),
        Tool::new(
            "percentage-calculator",
            "Percentage Calculator",
            "Calculate percentages, increases, decreases, and more",
            "math",
        )
        .with_popularity(89),
        Tool::new(
            "bmi-calculator",
            "BMI Calculator",
            "Calculate your Body Mass Index",
            "math",
        )
        .with_popularity(87),
        Tool::new(
            "random-number-generator",
            "Random Number Generator",
            "Generate random numbers within a range",
            "math",
        )
        .with_popularity(86),
        Tool::new(
            "number-to-words",
            "Number to Words Converter",
            "Convert numbers to words",
            "math",
        )
        .with_popularity(84),
        Tool::new(
            "gcd-lcm-calculator",
            "GCD & LCM Calculator",
            "Calculate Greatest Common Divisor and Least Common Multiple",
            "math",
        )
        .with_popularity(80),
        Tool::new(
            "age-calculator",
            "Age Calculator",
            "Calculate age based on date of birth",
            "math",
        )
        .with_popularity(83),
        Tool::new(
            "date-calculator",
            "Date Calculator",
            "Calculate days, weeks, months between two dates",
            "math",
        )
        .with_popularity(81),
        // Conversion tools (8)
        Tool::new(
            "unit-converter",
            "Unit Converter",
            "Convert between different units of measurement",
            "conversion",
        )
        .featured()
        .with_popularity(95),
        Tool::new(
            "currency-converter",
            "Currency Converter",
            "Convert between different currencies",
            "conversion",
        )
        .with_popularity(94),
        Tool::new(
            "temperature-converter",
            "Temperature Converter",
            "Convert between Celsius, Fahrenheit, and Kelvin",
            "conversion",
        )
        .with_popularity(92),
        Tool::new(
            "length-converter",
            "Length Converter",
            "Convert between different units of length",
            "conversion",
        )
        .with_popularity(90),
        Tool::new(
            "weight-converter",
            "Weight Converter",
            "Convert between different units of weight",
            "conversion",
        )
        .with_popularity(89),
        Tool::new(
            "time-converter",
            "Time Converter",
            "Convert between different units of time",
            "conversion",
        )
        .with_popularity(88),
        Tool::new(
            "speed-converter",
            "Speed Converter",
            "Convert between different units of speed",
            "conversion",
        )
        .with_popularity(86),
        Tool::new(
            "area-converter",
            "Area Converter",
            "Convert between different units of area",
            "conversion",
        )
        .with_popularity(85),
        // Security tools (8)
        Tool::new(
            "password-generator",
            "Password Generator",
            "Generate strong, secure passwords",
            "security",
        )
        .featured()
        .with_popularity(96),
        Tool::new(
            "md5-generator",
            "MD5 Generator",
            "Generate MD5 hash for your text",
            "security",
        )
        .with_popularity(87),
        Tool::new(
            "sha1-generator",
            "SHA-1 Generator",
            "Generate SHA-1 hash for your text",
            "security",
        )
        .with_popularity(86),
        Tool::new(
            "sha256-generator",
            "SHA-256 Generator",
            "Generate SHA-256 hash for your text",
            "security",
        )
        .with_popularity(85),
        Tool::new(
            "base64-encoder",
            "Base64 Encoder/Decoder",
            "Encode or decode text to/from Base64",
            "security",
        )
        .with_popularity(84),
        Tool::new(
            "password-strength-checker",
            "Password Strength Checker",
            "Check the strength of your passwords",
            "security",
        )
        .with_popularity(88),
        Tool::new(
            "htpasswd-generator",
            "Htpasswd Generator",
            "Generate Htpasswd entries for basic authentication",
            "security",
        )
        .with_popularity(78),
        Tool::new(
            "uuid-generator",
            "UUID Generator",
            "Generate random UUID/GUID values",
            "security",
        )
        .with_popularity(82),
        // Developer tools (8)
        Tool::new(
            "json-formatter",
            "JSON Formatter",
            "Format and validate JSON data",
            "developer",
        )
        .featured()
        .with_popularity(97),
        Tool::new(
            "sql-formatter",
            "SQL Formatter",
            "Format and beautify SQL queries",
            "developer",
        )
        .with_popularity(89),
        Tool::new(
            "code-formatter",
            "Code Formatter",
            "Format and beautify code in various languages",
            "developer",
        )
        .with_popularity(91),
        Tool::new(
            "regex-tester",
            "Regex Tester",
            "Test and debug regular expressions",
            "developer",
        )
        .with_popularity(93),
        Tool::new(
            "jwt-decoder",
            "JWT Decoder",
            "Decode and verify JWT tokens",
            "developer",
        )
        .with_popularity(88),
        Tool::new(
            "cron-expression-generator",
            "Cron Expression Generator",
            "Generate and validate cron expressions",
            "developer",
        )
        .with_popularity(85),
        Tool::new(
            "xml-formatter",
            "XML Formatter",
            "Format and validate XML data",
            "developer",
        )
        .with_popularity(84),
        Tool::new(
            "yaml-formatter",
            "YAML Formatter",
            "Format and validate YAML data",
            "developer",
        )
        .with_popularity(83),
    ]
}
