//! Markdown rendering configuration

use serde::Deserialize;

/// Controls how model output is turned into HTML
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarkdownConfig {
    /// Pass raw HTML from model output through unescaped
    #[serde(default)]
    pub allow_raw_html: bool,
}
