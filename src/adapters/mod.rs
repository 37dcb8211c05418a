//! Adapters - Implementations of port interfaces.
//!
//! - `ai` - Gemini and mock text-generation providers
//! - `markdown` - pulldown-cmark markdown renderer
//! - `templates` - Handlebars page renderer
//! - `http` - axum routes, handlers and middleware

pub mod ai;
pub mod http;
pub mod markdown;
pub mod templates;
