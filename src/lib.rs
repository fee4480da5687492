pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    ChatSession, CompletionService, SendMessageUseCase, EXCHANGE_FAILURE_MESSAGE,
    NO_RESPONSE_FALLBACK,
};

pub use connector::{GroqClient, MockCompletion, RecordedCall};

pub use domain::{Conversation, DomainError, ModelId, Role, SessionConfig, Turn};
