//! Template adapters - Implementations of the PageRenderer port.
//!
//! - `HandlebarsPageRenderer` - Handlebars with compiled-in page templates

mod handlebars_pages;

pub use handlebars_pages::HandlebarsPageRenderer;
