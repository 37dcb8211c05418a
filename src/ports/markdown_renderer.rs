//! Markdown Renderer Port - markdown to HTML fragment conversion.
//!
//! The planner pages embed model output as an HTML fragment. Implementations
//! must support fenced code blocks and tables and decide what to do with raw
//! HTML found in the input.

/// Port for converting model markdown output into an HTML fragment.
///
/// # Contract
///
/// - The output is a fragment (no `<html>`/`<body>` wrapper)
/// - Headings, ordered/unordered lists, fenced code and tables are preserved
/// - Conversion is pure and never fails; malformed markdown renders as text
pub trait MarkdownRenderer: Send + Sync {
    /// Convert markdown content to an HTML fragment.
    fn to_html(&self, markdown: &str) -> String;
}
