//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the planner and the outside world. Adapters implement these ports.
//!
//! ## Generation
//!
//! - `AIProvider` - Text generation by an external model
//!
//! ## Presentation
//!
//! - `MarkdownRenderer` - Markdown to HTML fragment conversion
//! - `PageRenderer` - Page templates filled with request data

mod ai_provider;
mod markdown_renderer;
mod page_renderer;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, RequestMetadata, TokenUsage,
};
pub use markdown_renderer::MarkdownRenderer;
pub use page_renderer::{
    DestinationPage, Page, PageRenderer, PlanPage, QuickIdeasPage, TemplateError,
    UpdateResultPage,
};
