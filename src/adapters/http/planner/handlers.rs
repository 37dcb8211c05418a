//! HTTP handlers for planner endpoints.
//!
//! These handlers connect Axum routes to the planner command handlers.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Form, Json, Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};

use crate::application::{
    ContentGenerator, CreatePlanHandler, ExploreDestinationHandler, PlannerError,
    QuickIdeasHandler, UpdatePlanHandler,
};
use crate::domain::IdeasRequest;
use crate::ports::{AIProvider, MarkdownRenderer, Page, PageRenderer, TemplateError};

use super::dto::{CreatePlanForm, ErrorResponse, HealthResponse, UpdatePlanForm};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
#[derive(Clone)]
pub struct PlannerAppState {
    pub ai_provider: Arc<dyn AIProvider>,
    pub markdown: Arc<dyn MarkdownRenderer>,
    pub pages: Arc<dyn PageRenderer>,
    /// Deadline for each upstream model call.
    pub ai_timeout: Duration,
}

impl PlannerAppState {
    pub fn new(
        ai_provider: Arc<dyn AIProvider>,
        markdown: Arc<dyn MarkdownRenderer>,
        pages: Arc<dyn PageRenderer>,
        ai_timeout: Duration,
    ) -> Self {
        Self {
            ai_provider,
            markdown,
            pages,
            ai_timeout,
        }
    }

    fn generator(&self) -> ContentGenerator {
        ContentGenerator::new(
            self.ai_provider.clone(),
            self.markdown.clone(),
            self.ai_timeout,
        )
    }

    pub fn create_plan_handler(&self) -> CreatePlanHandler {
        CreatePlanHandler::new(self.generator(), self.pages.clone())
    }

    pub fn update_plan_handler(&self) -> UpdatePlanHandler {
        UpdatePlanHandler::new(self.generator(), self.pages.clone())
    }

    pub fn explore_destination_handler(&self) -> ExploreDestinationHandler {
        ExploreDestinationHandler::new(self.generator(), self.pages.clone())
    }

    pub fn quick_ideas_handler(&self) -> QuickIdeasHandler {
        QuickIdeasHandler::new(self.generator(), self.pages.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Page Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET / - Landing page
pub async fn home(State(state): State<PlannerAppState>) -> Result<Html<String>, PlannerApiError> {
    Ok(Html(state.pages.render(&Page::Home)?))
}

/// POST /create-plan - Generate a new travel plan
pub async fn create_plan(
    State(state): State<PlannerAppState>,
    Form(form): Form<CreatePlanForm>,
) -> Result<Html<String>, PlannerApiError> {
    let html = state.create_plan_handler().handle(form.into()).await?;
    Ok(Html(html))
}

/// POST /update-plan - Revise an existing plan
pub async fn update_plan(
    State(state): State<PlannerAppState>,
    Form(form): Form<UpdatePlanForm>,
) -> Result<Html<String>, PlannerApiError> {
    let html = state.update_plan_handler().handle(form.into()).await?;
    Ok(Html(html))
}

/// GET /explore-destination/:destination - Destination guide
pub async fn explore_destination(
    State(state): State<PlannerAppState>,
    Path(destination): Path<String>,
) -> Result<Html<String>, PlannerApiError> {
    let html = state.explore_destination_handler().handle(destination).await?;
    Ok(Html(html))
}

/// GET /quick-ideas/:destination/:interest - Short activity ideas
pub async fn quick_ideas(
    State(state): State<PlannerAppState>,
    Path((destination, interest)): Path<(String, String)>,
) -> Result<Html<String>, PlannerApiError> {
    let html = state
        .quick_ideas_handler()
        .handle(IdeasRequest {
            destination,
            interest,
        })
        .await?;
    Ok(Html(html))
}

/// GET /health - Liveness check
pub async fn health(State(state): State<PlannerAppState>) -> Json<HealthResponse> {
    Json(state.ai_provider.provider_info().into())
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts planner errors to HTTP responses.
#[derive(Debug)]
pub enum PlannerApiError {
    /// Blank input field.
    Unprocessable(String),
    /// The model call failed.
    Upstream(String),
    /// A page failed to render.
    Template(String),
}

impl From<PlannerError> for PlannerApiError {
    fn from(err: PlannerError) -> Self {
        let detail = err.to_string();
        match err {
            PlannerError::Validation(_) => PlannerApiError::Unprocessable(detail),
            PlannerError::Upstream(_) => PlannerApiError::Upstream(detail),
            PlannerError::Template(_) => PlannerApiError::Template(detail),
        }
    }
}

impl From<TemplateError> for PlannerApiError {
    fn from(err: TemplateError) -> Self {
        PlannerError::from(err).into()
    }
}

impl IntoResponse for PlannerApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            PlannerApiError::Unprocessable(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, ErrorResponse::validation(msg))
            }
            PlannerApiError::Upstream(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::upstream(msg))
            }
            PlannerApiError::Template(msg) => {
                tracing::error!(error = %msg, "Page rendering failed");
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::template(msg))
            }
        };

        (status, Json(error)).into_response()
    }
}
