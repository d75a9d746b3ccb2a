use anyhow::Result;
use async_trait::async_trait;

use crate::config::Settings;
use crate::llm::groq::GroqClient;

/// Chat completion request payload.
pub struct ChatRequest<'a> {
    pub system: &'a str,
    pub user: &'a str,
    pub temperature: f32,
}

#[async_trait]
pub trait ChatProvider: Send + Sync {
    async fn complete(&self, request: ChatRequest<'_>) -> Result<String>;
}

/// Build a chat provider from runtime settings.
pub fn build_provider(settings: &Settings) -> Result<Box<dyn ChatProvider>> {
    match settings.llm.provider.to_lowercase().as_str() {
        "groq" => Ok(Box::new(GroqClient::from_settings(settings)?)),
        other => anyhow::bail!(
            "Unsupported llm.provider '{}'. Supported providers: groq",
            other
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    #[test]
    fn unsupported_provider_returns_error() {
        let mut settings = Settings::default();
        settings.llm.provider = "unknown".to_string();

        let err = match build_provider(&settings) {
            Ok(_) => panic!("expected provider creation to fail"),
            Err(e) => e.to_string(),
        };
        assert!(err.contains("Unsupported llm.provider"));
    }

    #[test]
    fn groq_provider_requires_api_key() {
        let settings = Settings::default();

        let err = match build_provider(&settings) {
            Ok(_) => panic!("expected provider creation to fail"),
            Err(e) => e.to_string(),
        };
        assert!(err.contains("Groq API key is missing"));
    }
}
