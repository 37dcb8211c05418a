//! UpdatePlanHandler - Command handler for revising an existing plan.

use std::sync::Arc;

use tracing::info;

use crate::domain::{prompt, UpdateRequest};
use crate::ports::{Page, PageRenderer, UpdateResultPage};

use super::error::PlannerError;
use super::generation::ContentGenerator;

/// Handler for `UpdatePlan`.
pub struct UpdatePlanHandler {
    generator: ContentGenerator,
    pages: Arc<dyn PageRenderer>,
}

impl UpdatePlanHandler {
    pub fn new(generator: ContentGenerator, pages: Arc<dyn PageRenderer>) -> Self {
        Self { generator, pages }
    }

    /// Asks the model to revise the plan according to the instruction.
    #[tracing::instrument(
        name = "update_plan",
        skip_all,
        fields(plan_bytes = update.current_plan.len(), instruction = %update.update_instruction)
    )]
    pub async fn handle(&self, update: UpdateRequest) -> Result<String, PlannerError> {
        update.validate()?;

        let content = self
            .generator
            .generate("update_plan", prompt::plan_update(&update))
            .await?;
        info!(plan_bytes = content.markdown.len(), "Travel plan updated");

        let page = Page::UpdateResult(UpdateResultPage {
            update_request: update.update_instruction,
            updated_plan: content.html,
            plan_markdown: content.markdown,
        });

        Ok(self.pages.render(&page)?)
    }
}
