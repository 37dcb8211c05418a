//! QuickIdeasHandler - Query handler for short activity suggestions.

use std::sync::Arc;

use crate::domain::{prompt, IdeasRequest};
use crate::ports::{Page, PageRenderer, QuickIdeasPage};

use super::error::PlannerError;
use super::generation::ContentGenerator;

/// Handler for `QuickIdeas`.
pub struct QuickIdeasHandler {
    generator: ContentGenerator,
    pages: Arc<dyn PageRenderer>,
}

impl QuickIdeasHandler {
    pub fn new(generator: ContentGenerator, pages: Arc<dyn PageRenderer>) -> Self {
        Self { generator, pages }
    }

    #[tracing::instrument(
        name = "quick_ideas",
        skip_all,
        fields(destination = %request.destination, interest = %request.interest)
    )]
    pub async fn handle(&self, request: IdeasRequest) -> Result<String, PlannerError> {
        request.validate()?;

        let content = self
            .generator
            .generate("quick_ideas", prompt::quick_ideas(&request))
            .await?;

        let page = Page::QuickIdeas(QuickIdeasPage {
            destination: request.destination,
            interest: request.interest,
            ideas: content.html,
        });

        Ok(self.pages.render(&page)?)
    }
}
