//! Markdown adapters - Implementations of the MarkdownRenderer port.
//!
//! - `PulldownMarkdownRenderer` - pulldown-cmark with table support and output sanitization

mod pulldown_renderer;

pub use pulldown_renderer::PulldownMarkdownRenderer;
