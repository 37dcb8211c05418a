//! ExploreDestinationHandler - Query handler for a destination guide.

use std::sync::Arc;

use crate::domain::{prompt, validate_destination};
use crate::ports::{DestinationPage, Page, PageRenderer};

use super::error::PlannerError;
use super::generation::ContentGenerator;

/// Interests offered as quick-idea links on the destination page.
pub const SUGGESTED_INTERESTS: [&str; 5] = ["food", "culture", "history", "nature", "nightlife"];

/// Handler for `ExploreDestination`.
pub struct ExploreDestinationHandler {
    generator: ContentGenerator,
    pages: Arc<dyn PageRenderer>,
}

impl ExploreDestinationHandler {
    pub fn new(generator: ContentGenerator, pages: Arc<dyn PageRenderer>) -> Self {
        Self { generator, pages }
    }

    #[tracing::instrument(name = "explore_destination", skip(self))]
    pub async fn handle(&self, destination: String) -> Result<String, PlannerError> {
        validate_destination(&destination)?;

        let content = self
            .generator
            .generate("explore_destination", prompt::destination_guide(&destination))
            .await?;

        let page = Page::DestinationInfo(DestinationPage {
            destination,
            info: content.html,
            suggested_interests: SUGGESTED_INTERESTS.iter().map(|s| s.to_string()).collect(),
        });

        Ok(self.pages.render(&page)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use crate::adapters::markdown::PulldownMarkdownRenderer;
    use crate::adapters::templates::HandlebarsPageRenderer;
    use crate::ports::AIError;
    use std::time::Duration;

    fn handler(provider: &MockAIProvider) -> ExploreDestinationHandler {
        let generator = ContentGenerator::new(
            Arc::new(provider.clone()),
            Arc::new(PulldownMarkdownRenderer::new()),
            Duration::from_secs(5),
        );
        ExploreDestinationHandler::new(generator, Arc::new(HandlebarsPageRenderer::new().unwrap()))
    }

    #[tokio::test]
    async fn renders_guide_with_idea_links() {
        let provider = MockAIProvider::new().with_response("## TOP ATTRACTIONS\n\n* Hallgrímskirkja");

        let html = handler(&provider)
            .handle("Reykjavik".to_string())
            .await
            .unwrap();

        assert!(html.contains("Discover Reykjavik"));
        assert!(html.contains("<h2>TOP ATTRACTIONS</h2>"));
        for interest in SUGGESTED_INTERESTS {
            assert!(html.contains(&format!(r#"href="/quick-ideas/Reykjavik/{interest}""#)));
        }
        assert!(provider.prompts()[0].contains("information about Reykjavik as a travel destination"));
    }

    #[tokio::test]
    async fn content_filter_is_reported() {
        let provider = MockAIProvider::new().with_error(MockError::ContentFiltered {
            reason: "SAFETY".to_string(),
        });

        let err = handler(&provider)
            .handle("Atlantis".to_string())
            .await
            .unwrap_err();

        assert_eq!(err, PlannerError::Upstream(AIError::content_filtered("SAFETY")));
    }
}
