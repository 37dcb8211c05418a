//! ContentGenerator - prompt in, rendered markdown out.
//!
//! Every planner operation runs the same pipeline: wrap the prompt in a
//! completion request, call the provider under a deadline, and convert the
//! returned markdown to an HTML fragment.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::GeneratedContent;
use crate::ports::{AIError, AIProvider, CompletionRequest, MarkdownRenderer, MessageRole, RequestMetadata};

/// Shared generation pipeline.
#[derive(Clone)]
pub struct ContentGenerator {
    ai_provider: Arc<dyn AIProvider>,
    markdown: Arc<dyn MarkdownRenderer>,
    timeout: Duration,
}

impl ContentGenerator {
    pub fn new(
        ai_provider: Arc<dyn AIProvider>,
        markdown: Arc<dyn MarkdownRenderer>,
        timeout: Duration,
    ) -> Self {
        Self {
            ai_provider,
            markdown,
            timeout,
        }
    }

    /// Upstream deadline applied to each call.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Sends `prompt` upstream and renders the reply.
    ///
    /// # Errors
    ///
    /// Returns the provider's `AIError`, or `AIError::Timeout` when the call
    /// does not finish within the configured deadline.
    pub async fn generate(
        &self,
        operation: &'static str,
        prompt: String,
    ) -> Result<GeneratedContent, AIError> {
        let metadata = RequestMetadata::for_operation(operation);
        let trace_id = metadata.trace_id.clone();
        let request = CompletionRequest::new(metadata).with_message(MessageRole::User, prompt);

        let response = match tokio::time::timeout(self.timeout, self.ai_provider.complete(request))
            .await
        {
            Ok(Ok(response)) => response,
            Ok(Err(err)) => {
                warn!(operation, %trace_id, error = %err, "Model call failed");
                return Err(err);
            }
            Err(_) => {
                let err = AIError::timeout(self.timeout.as_secs());
                warn!(operation, %trace_id, error = %err, "Model call exceeded deadline");
                return Err(err);
            }
        };

        debug!(
            operation,
            %trace_id,
            model = %response.model,
            prompt_tokens = response.usage.prompt_tokens,
            completion_tokens = response.usage.completion_tokens,
            finish_reason = ?response.finish_reason,
            "Model call succeeded"
        );

        let html = self.markdown.to_html(&response.content);
        Ok(GeneratedContent {
            markdown: response.content,
            html,
        })
    }
}
