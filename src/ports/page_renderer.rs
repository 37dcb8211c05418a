//! Page Renderer Port - fills page templates with request data.
//!
//! Each planner response is one [`Page`]. The variant selects the template
//! and carries exactly the values that template displays; generated HTML
//! fragments are inserted unescaped, everything else is escaped by the
//! implementation.

use serde::Serialize;
use thiserror::Error;

/// Port for turning a [`Page`] into a complete HTML document.
pub trait PageRenderer: Send + Sync {
    /// Render the page to an HTML string.
    fn render(&self, page: &Page) -> Result<String, TemplateError>;
}

/// Every page the planner can serve.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Page {
    /// Landing page with the trip form.
    Home,
    /// A freshly generated travel plan.
    Plan(PlanPage),
    /// A revised travel plan.
    UpdateResult(UpdateResultPage),
    /// Destination guide.
    DestinationInfo(DestinationPage),
    /// Short activity ideas.
    QuickIdeas(QuickIdeasPage),
}

impl Page {
    /// Name of the template that renders this page.
    pub fn template_name(&self) -> &'static str {
        match self {
            Page::Home => "index",
            Page::Plan(_) => "travel_plan",
            Page::UpdateResult(_) => "update_result",
            Page::DestinationInfo(_) => "destination_info",
            Page::QuickIdeas(_) => "quick_ideas",
        }
    }
}

/// Context for the travel plan page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanPage {
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    pub interests: String,
    pub budget: String,
    /// Rendered plan fragment.
    pub travel_plan: String,
    /// Plan markdown, resubmitted as `current_plan` for revisions.
    pub plan_markdown: String,
}

/// Context for the updated plan page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateResultPage {
    pub update_request: String,
    /// Rendered plan fragment.
    pub updated_plan: String,
    pub plan_markdown: String,
}

/// Context for the destination guide page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DestinationPage {
    pub destination: String,
    /// Rendered guide fragment.
    pub info: String,
    /// Interests offered as quick-idea links.
    pub suggested_interests: Vec<String>,
}

/// Context for the quick ideas page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickIdeasPage {
    pub destination: String,
    pub interest: String,
    /// Rendered ideas fragment.
    pub ideas: String,
}

/// Page rendering failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// No template is registered under the page's name.
    #[error("template not found: {0}")]
    NotFound(String),

    /// A template failed to compile.
    #[error("invalid template {template}: {message}")]
    Invalid { template: String, message: String },

    /// The template failed while rendering.
    #[error("failed to render template {template}: {message}")]
    Render { template: String, message: String },
}
