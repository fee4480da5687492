use async_trait::async_trait;

use crate::domain::{DomainError, SessionConfig, Turn};

/// An interface for exchanging a conversation with a hosted completion
/// service and receiving the assistant's reply.
///
/// Implementors encapsulate transport, serialization, and vendor-specific
/// API details.  Consumers (e.g. [`crate::application::SendMessageUseCase`])
/// remain decoupled from any particular provider or HTTP client library.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Send the full conversation, ending with the newest `user` turn, and
    /// return the assistant's reply text.
    ///
    /// `Ok(None)` means the provider answered with a well-formed body that
    /// carries no usable content.  Transport, HTTP-status, and parse
    /// failures surface as `Err`.
    async fn complete(
        &self,
        turns: &[Turn],
        config: &SessionConfig,
    ) -> Result<Option<String>, DomainError>;
}
