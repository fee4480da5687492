use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::{Mutex, MutexGuard, RwLock};
use uuid::Uuid;

use crate::domain::{Conversation, ModelId, SessionConfig, Turn};

/// Session-scoped context shared between the exchange controller and the
/// presentation layer: the conversation store, the current configuration,
/// and the busy/idle flag.
///
/// The conversation is append-only and appends go through the exchange
/// controller only. Both locks are held for short synchronous sections,
/// never across an await; `exchange` serializes whole exchange cycles so
/// overlapping submissions cannot interleave their append pairs.
pub struct ChatSession {
    id: Uuid,
    conversation: RwLock<Conversation>,
    config: RwLock<SessionConfig>,
    busy: AtomicBool,
    exchange: Mutex<()>,
}

impl ChatSession {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            conversation: RwLock::new(Conversation::new()),
            config: RwLock::new(config),
            busy: AtomicBool::new(false),
            exchange: Mutex::new(()),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Owned copy of the conversation as of now.
    pub async fn snapshot(&self) -> Vec<Turn> {
        self.conversation.read().await.snapshot()
    }

    pub async fn turn_count(&self) -> usize {
        self.conversation.read().await.len()
    }

    pub async fn last_turn(&self) -> Option<Turn> {
        self.conversation.read().await.last().cloned()
    }

    /// Current configuration, read at call time.
    pub async fn config(&self) -> SessionConfig {
        self.config.read().await.clone()
    }

    pub async fn set_model(&self, model: ModelId) {
        self.config.write().await.set_model(model);
    }

    pub async fn set_api_key(&self, api_key: impl Into<String>) {
        self.config.write().await.set_api_key(api_key);
    }

    /// Whether an exchange cycle is currently in flight.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    pub(crate) async fn append(&self, turn: Turn) {
        self.conversation.write().await.append(turn);
    }

    /// Enter an exchange cycle: waits for any in-flight cycle to finish,
    /// then flips idle to busy. The returned guard flips back on drop.
    pub(crate) async fn begin_exchange(&self) -> ExchangeGuard<'_> {
        let serial = self.exchange.lock().await;
        self.busy.store(true, Ordering::SeqCst);
        ExchangeGuard {
            session: self,
            _serial: serial,
        }
    }
}

/// Restores busy to idle unconditionally when the cycle ends, including on
/// unwind.
pub(crate) struct ExchangeGuard<'a> {
    session: &'a ChatSession,
    _serial: MutexGuard<'a, ()>,
}

impl Drop for ExchangeGuard<'_> {
    fn drop(&mut self) {
        self.session.busy.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_session_starts_idle_and_empty() {
        let session = ChatSession::new(SessionConfig::default());

        assert!(!session.is_busy());
        assert!(session.snapshot().await.is_empty());
        assert!(session.last_turn().await.is_none());
    }

    #[tokio::test]
    async fn test_exchange_guard_restores_idle() {
        let session = ChatSession::new(SessionConfig::default());

        {
            let _guard = session.begin_exchange().await;
            assert!(session.is_busy());
        }
        assert!(!session.is_busy());
    }

    #[tokio::test]
    async fn test_config_is_mutable_at_any_time() {
        let session = ChatSession::new(SessionConfig::new(ModelId::default(), "k1"));

        session.set_model(ModelId::GptOss20b).await;
        session.set_api_key("k2").await;

        let config = session.config().await;
        assert_eq!(config.model(), ModelId::GptOss20b);
        assert_eq!(config.api_key(), "k2");
    }
}
