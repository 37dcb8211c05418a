//! CreatePlanHandler - Command handler for generating a new travel plan.

use std::sync::Arc;

use tracing::info;

use crate::domain::{prompt, TripRequest};
use crate::ports::{Page, PageRenderer, PlanPage};

use super::error::PlannerError;
use super::generation::ContentGenerator;

/// Handler for `CreatePlan`.
pub struct CreatePlanHandler {
    generator: ContentGenerator,
    pages: Arc<dyn PageRenderer>,
}

impl CreatePlanHandler {
    pub fn new(generator: ContentGenerator, pages: Arc<dyn PageRenderer>) -> Self {
        Self { generator, pages }
    }

    /// Generates a plan and renders it with the request fields echoed back.
    #[tracing::instrument(
        name = "create_plan",
        skip_all,
        fields(destination = %trip.destination, start_date = %trip.start_date, end_date = %trip.end_date)
    )]
    pub async fn handle(&self, trip: TripRequest) -> Result<String, PlannerError> {
        trip.validate()?;

        let content = self
            .generator
            .generate("create_plan", prompt::trip_plan(&trip))
            .await?;
        info!(plan_bytes = content.markdown.len(), "Travel plan generated");

        let page = Page::Plan(PlanPage {
            destination: trip.destination,
            start_date: trip.start_date,
            end_date: trip.end_date,
            interests: trip.interests,
            budget: trip.budget,
            travel_plan: content.html,
            plan_markdown: content.markdown,
        });

        Ok(self.pages.render(&page)?)
    }
}
