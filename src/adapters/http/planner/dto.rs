//! HTTP DTOs (Data Transfer Objects) for planner endpoints.
//!
//! Form bodies arrive URL-encoded; errors and health are returned as JSON.

use serde::{Deserialize, Serialize};

use crate::domain::{TripRequest, UpdateRequest};
use crate::ports::ProviderInfo;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Form submitted to `POST /create-plan`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlanForm {
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    pub interests: String,
    pub budget: String,
}

impl From<CreatePlanForm> for TripRequest {
    fn from(form: CreatePlanForm) -> Self {
        Self {
            destination: form.destination,
            start_date: form.start_date,
            end_date: form.end_date,
            interests: form.interests,
            budget: form.budget,
        }
    }
}

/// Form submitted to `POST /update-plan`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePlanForm {
    /// Previous plan markdown.
    pub current_plan: String,
    /// Free-form revision instruction.
    pub update_request: String,
}

impl From<UpdatePlanForm> for UpdateRequest {
    fn from(form: UpdatePlanForm) -> Self {
        Self {
            current_plan: form.current_plan,
            update_instruction: form.update_request,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response for `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub provider: String,
    pub model: String,
}

impl From<ProviderInfo> for HealthResponse {
    fn from(info: ProviderInfo) -> Self {
        Self {
            status: "ok".to_string(),
            provider: info.name,
            model: info.model,
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code.
    pub code: String,
    /// Description of the failure.
    pub detail: String,
}

impl ErrorResponse {
    pub fn validation(detail: impl Into<String>) -> Self {
        Self {
            code: "VALIDATION_ERROR".to_string(),
            detail: detail.into(),
        }
    }

    pub fn upstream(detail: impl Into<String>) -> Self {
        Self {
            code: "UPSTREAM_ERROR".to_string(),
            detail: detail.into(),
        }
    }

    pub fn template(detail: impl Into<String>) -> Self {
        Self {
            code: "TEMPLATE_ERROR".to_string(),
            detail: detail.into(),
        }
    }
}
