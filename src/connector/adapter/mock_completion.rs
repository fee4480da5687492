use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::application::CompletionService;
use crate::domain::{DomainError, ModelId, SessionConfig, Turn};

#[derive(Debug, Clone)]
enum ScriptedReply {
    Content(String),
    Missing,
    Failure,
}

/// One request as observed by the mock.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub turns: Vec<Turn>,
    pub model: ModelId,
    pub api_key: String,
}

/// Scriptable [`CompletionService`] for tests.
///
/// Replies are served from a queue in push order; once the queue is empty
/// the fallback reply is served instead. Every request is recorded so tests
/// can assert on the forwarded history and configuration. An optional
/// latency keeps the call suspended, which lets tests observe the busy flag
/// and overlapping submissions.
pub struct MockCompletion {
    script: Mutex<VecDeque<ScriptedReply>>,
    fallback: ScriptedReply,
    latency: Option<Duration>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockCompletion {
    pub fn new() -> Self {
        Self::with_fallback(ScriptedReply::Content("mock reply".to_string()))
    }

    /// Every unscripted call fails with a network error.
    pub fn failing() -> Self {
        Self::with_fallback(ScriptedReply::Failure)
    }

    /// Every unscripted call succeeds without usable content.
    pub fn without_content() -> Self {
        Self::with_fallback(ScriptedReply::Missing)
    }

    fn with_fallback(fallback: ScriptedReply) -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            fallback,
            latency: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn push_reply(&self, content: impl Into<String>) {
        self.push(ScriptedReply::Content(content.into()));
    }

    pub fn push_missing(&self) {
        self.push(ScriptedReply::Missing);
    }

    pub fn push_failure(&self) {
        self.push(ScriptedReply::Failure);
    }

    fn push(&self, reply: ScriptedReply) {
        self.script.lock().unwrap().push_back(reply);
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for MockCompletion {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionService for MockCompletion {
    async fn complete(
        &self,
        turns: &[Turn],
        config: &SessionConfig,
    ) -> Result<Option<String>, DomainError> {
        self.calls.lock().unwrap().push(RecordedCall {
            turns: turns.to_vec(),
            model: config.model(),
            api_key: config.api_key().to_string(),
        });

        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        let reply = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone());

        match reply {
            ScriptedReply::Content(content) => Ok(Some(content)),
            ScriptedReply::Missing => Ok(None),
            ScriptedReply::Failure => {
                Err(DomainError::network("MockCompletion: scripted failure"))
            }
        }
    }
}
