//! Error type shared by the planner command handlers.

use thiserror::Error;

use crate::domain::FieldError;
use crate::ports::{AIError, TemplateError};

/// Failure of a planner operation.
///
/// The display text is the detail reported to the client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlannerError {
    /// A required field was blank.
    #[error(transparent)]
    Validation(#[from] FieldError),

    /// The model call failed.
    #[error(transparent)]
    Upstream(#[from] AIError),

    /// The page could not be rendered.
    #[error(transparent)]
    Template(#[from] TemplateError),
}

impl PlannerError {
    /// Whether the caller supplied bad input (as opposed to a server-side failure).
    pub fn is_client_error(&self) -> bool {
        matches!(self, PlannerError::Validation(_))
    }
}
