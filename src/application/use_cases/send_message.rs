use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::interfaces::CompletionService;
use crate::application::session::ChatSession;
use crate::domain::Turn;

/// Assistant text substituted when the provider answers without usable
/// content.
pub const NO_RESPONSE_FALLBACK: &str = "No response";

/// Assistant text substituted when the exchange fails outright.
pub const EXCHANGE_FAILURE_MESSAGE: &str = "❌ Error fetching response.";

/// Runs one request/response exchange cycle per user submission.
///
/// The user turn is committed before the network result is known, so the
/// conversation always reflects what the user actually sent; it is never
/// rolled back on failure. Exactly one assistant turn is appended per
/// non-empty submission, success or failure.
pub struct SendMessageUseCase {
    completion_service: Arc<dyn CompletionService>,
}

impl SendMessageUseCase {
    pub fn new(completion_service: Arc<dyn CompletionService>) -> Self {
        Self { completion_service }
    }

    /// Submit `text` on `session` and run the exchange to completion.
    ///
    /// Whitespace-only input is a no-op: no state transition, no append, no
    /// outbound call. Callers observe the outcome through the session
    /// snapshot and busy flag; nothing is returned and no error escapes
    /// this boundary.
    pub async fn execute(&self, session: &ChatSession, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }

        // Busy until the guard drops; cycles are serialized across callers.
        let _guard = session.begin_exchange().await;

        session.append(Turn::user(text)).await;

        // Config and history are read after the user turn is committed, so
        // the request carries exactly what readers can already see.
        let config = session.config().await;
        let history = session.snapshot().await;

        debug!(
            session = %session.id(),
            model = config.model().as_str(),
            turns = history.len(),
            "sending exchange request"
        );

        let reply = match self.completion_service.complete(&history, &config).await {
            Ok(Some(content)) => content,
            Ok(None) => NO_RESPONSE_FALLBACK.to_string(),
            Err(e) => {
                warn!(session = %session.id(), "exchange failed: {e}");
                EXCHANGE_FAILURE_MESSAGE.to_string()
            }
        };

        session.append(Turn::assistant(reply)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::connector::MockCompletion;
    use crate::domain::SessionConfig;

    fn setup(mock: MockCompletion) -> (ChatSession, Arc<MockCompletion>, SendMessageUseCase) {
        let mock = Arc::new(mock);
        let session = ChatSession::new(SessionConfig::default());
        let use_case = SendMessageUseCase::new(mock.clone());
        (session, mock, use_case)
    }

    #[tokio::test]
    async fn test_empty_submission_is_a_noop() {
        let (session, mock, use_case) = setup(MockCompletion::new());

        use_case.execute(&session, "").await;
        use_case.execute(&session, "   \t\n").await;

        assert_eq!(session.turn_count().await, 0);
        assert_eq!(mock.call_count(), 0);
        assert!(!session.is_busy());
    }

    #[tokio::test]
    async fn test_submission_text_is_trimmed() {
        let (session, _, use_case) = setup(MockCompletion::new());

        use_case.execute(&session, "  hello  ").await;

        let turns = session.snapshot().await;
        assert_eq!(turns[0].content(), "hello");
    }

    #[tokio::test]
    async fn test_failure_is_absorbed_into_the_conversation() {
        let (session, _, use_case) = setup(MockCompletion::failing());

        use_case.execute(&session, "hello").await;

        let turns = session.snapshot().await;
        assert_eq!(turns.len(), 2);
        assert!(turns[1].is_assistant());
        assert_eq!(turns[1].content(), EXCHANGE_FAILURE_MESSAGE);
    }
}
