use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::llm::client::{ChatProvider, ChatRequest};

const DEFAULT_GROQ_ENDPOINT: &str = "https://api.groq.com/openai/v1";
const DEFAULT_GROQ_MODEL: &str = "llama-3.3-70b-versatile";

pub struct GroqClient {
    http: Client,
    api_key: String,
    model: String,
    endpoint: String,
    max_tokens: u32,
}

impl GroqClient {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let api_key = settings.llm.api_key.trim().to_string();
        if api_key.is_empty() {
            anyhow::bail!(
                "Groq API key is missing. Set llm.api_key in config or WORKDESK_GROQ_API_KEY."
            );
        }

        let model = if settings.llm.model.trim().is_empty() {
            DEFAULT_GROQ_MODEL.to_string()
        } else {
            settings.llm.model.trim().to_string()
        };

        let endpoint = if settings.llm.endpoint.trim().is_empty() {
            DEFAULT_GROQ_ENDPOINT.to_string()
        } else {
            settings
                .llm
                .endpoint
                .trim()
                .trim_end_matches('/')
                .to_string()
        };

        Ok(Self {
            http: Client::builder()
                .timeout(std::time::Duration::from_secs(45))
                .build()
                .context("Failed to build Groq HTTP client")?,
            api_key,
            model,
            endpoint,
            max_tokens: settings.llm.max_tokens,
        })
    }

    fn request_url(&self) -> String {
        format!("{}/chat/completions", self.endpoint)
    }
}

#[async_trait]
impl ChatProvider for GroqClient {
    async fn complete(&self, request: ChatRequest<'_>) -> Result<String> {
        let body = GroqChatCompletionRequest {
            model: &self.model,
            messages: vec![
                GroqMessage {
                    role: "system",
                    content: request.system,
                },
                GroqMessage {
                    role: "user",
                    content: request.user,
                },
            ],
            temperature: request.temperature,
            max_tokens: self.max_tokens,
        };

        let response = self
            .http
            .post(self.request_url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .context("Groq request failed")?;

        let response = response
            .error_for_status()
            .context("Groq returned an error status")?;

        let payload: GroqChatCompletionResponse = response
            .json()
            .await
            .context("Failed to parse Groq response")?;

        let text = payload
            .choices
            .into_iter()
            .filter_map(|c| c.message.content)
            .map(|t| t.trim().to_string())
            .find(|t| !t.is_empty())
            .context("Groq response did not contain completion text")?;

        Ok(text)
    }
}

#[derive(Debug, Serialize)]
struct GroqChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<GroqMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct GroqMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct GroqChatCompletionResponse {
    #[serde(default)]
    choices: Vec<GroqChoice>,
}

#[derive(Debug, Deserialize)]
struct GroqChoice {
    message: GroqResponseMessage,
}

#[derive(Debug, Deserialize)]
struct GroqResponseMessage {
    content: Option<String>,
}
