use std::fmt;

use super::ModelId;

/// Model selection plus the authorization credential for outbound calls.
///
/// Both values are externally supplied, mutable at any time through the
/// settings surface, and read at call time only. The credential lives in
/// process memory for the duration of the session and must never be
/// persisted or logged; `Debug` redacts it.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SessionConfig {
    model: ModelId,
    api_key: String,
}

impl SessionConfig {
    pub fn new(model: ModelId, api_key: impl Into<String>) -> Self {
        Self {
            model,
            api_key: api_key.into(),
        }
    }

    pub fn model(&self) -> ModelId {
        self.model
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    pub fn set_model(&mut self, model: ModelId) {
        self.model = model;
    }

    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        self.api_key = api_key.into();
    }
}

impl fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionConfig")
            .field("model", &self.model)
            .field("api_key", &"<redacted>")
            .finish()
    }
}
