//! Pulldown-cmark based markdown renderer.
//!
//! Converts model output to an HTML fragment with fenced code blocks and
//! tables. Model output is untrusted: unless raw HTML is explicitly allowed,
//! HTML found in the markdown is emitted as escaped text, and links or images
//! pointing at script-capable URL schemes are rewritten to `#`.

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

use crate::config::MarkdownConfig;
use crate::ports::MarkdownRenderer;

/// URL schemes that execute or embed content when followed.
const BLOCKED_SCHEMES: [&str; 3] = ["javascript:", "vbscript:", "data:"];

/// Markdown renderer using pulldown-cmark.
///
/// # Example
///
/// ```rust,ignore
/// let renderer = PulldownMarkdownRenderer::new();
/// let html = renderer.to_html("## Day 1\n\n| Item | Cost |\n|---|---|\n| Hotel | 5000 |");
/// assert!(html.contains("<table>"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PulldownMarkdownRenderer {
    /// Pass raw HTML through unescaped.
    allow_raw_html: bool,
}

impl PulldownMarkdownRenderer {
    /// Create a renderer that escapes raw HTML.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer from application config.
    pub fn from_config(config: &MarkdownConfig) -> Self {
        Self {
            allow_raw_html: config.allow_raw_html,
        }
    }

    /// Pass raw HTML in the markdown through to the output.
    pub fn allow_raw_html(mut self) -> Self {
        self.allow_raw_html = true;
        self
    }

    fn sanitize<'a>(&self, event: Event<'a>) -> Event<'a> {
        match event {
            Event::Html(raw) | Event::InlineHtml(raw) if !self.allow_raw_html => Event::Text(raw),
            Event::Start(Tag::Link {
                link_type,
                dest_url,
                title,
                id,
            }) if is_blocked_url(&dest_url) => Event::Start(Tag::Link {
                link_type,
                dest_url: CowStr::Borrowed("#"),
                title,
                id,
            }),
            Event::Start(Tag::Image {
                link_type,
                dest_url,
                title,
                id,
            }) if is_blocked_url(&dest_url) => Event::Start(Tag::Image {
                link_type,
                dest_url: CowStr::Borrowed("#"),
                title,
                id,
            }),
            other => other,
        }
    }
}

impl MarkdownRenderer for PulldownMarkdownRenderer {
    fn to_html(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, Options::ENABLE_TABLES);

        let mut html_body = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut html_body, parser.map(|event| self.sanitize(event)));
        html_body
    }
}

/// Browsers ignore leading whitespace, control characters and case in schemes.
fn is_blocked_url(url: &str) -> bool {
    let normalized: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .take(16)
        .collect::<String>()
        .to_ascii_lowercase();

    BLOCKED_SCHEMES
        .iter()
        .any(|scheme| normalized.starts_with(scheme))
}
