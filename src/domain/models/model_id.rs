use std::fmt;

/// The fixed set of Groq-hosted model identifiers selectable for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelId {
    Llama4Maverick17b,
    Llama4Scout17b,
    KimiK2Instruct,
    #[default]
    GptOss120b,
    Llama33Versatile70b,
    GptOss20b,
    DeepseekR1Llama70b,
}

impl ModelId {
    /// Every selectable identifier, in display order.
    pub const ALL: [ModelId; 7] = [
        ModelId::Llama4Maverick17b,
        ModelId::Llama4Scout17b,
        ModelId::KimiK2Instruct,
        ModelId::GptOss120b,
        ModelId::Llama33Versatile70b,
        ModelId::GptOss20b,
        ModelId::DeepseekR1Llama70b,
    ];

    /// The identifier string sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelId::Llama4Maverick17b => "meta-llama/llama-4-maverick-17b-128e-instruct",
            ModelId::Llama4Scout17b => "meta-llama/llama-4-scout-17b-16e-instruct",
            ModelId::KimiK2Instruct => "moonshotai/kimi-k2-instruct-0905",
            ModelId::GptOss120b => "openai/gpt-oss-120b",
            ModelId::Llama33Versatile70b => "llama-3.3-70b-versatile",
            ModelId::GptOss20b => "openai/gpt-oss-20b",
            ModelId::DeepseekR1Llama70b => "deepseek-r1-distill-llama-70b",
        }
    }

    /// Parse a user-supplied identifier. Unknown identifiers are rejected,
    /// never silently substituted.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|m| m.as_str() == s)
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
