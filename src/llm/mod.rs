use async_trait::async_trait;
use log::{error, info, warn};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tokio::time::timeout;

use crate::config::LlmConfig;
use crate::errors::LlmError;

// sampling settings shared by every analyzer
pub const TEMPERATURE: f32 = 0.7;
pub const MAX_OUTPUT_TOKENS: u32 = 1000;

/// provider error bodies are cut to this many characters before they reach a client
pub const MAX_ERROR_BODY_CHARS: usize = 200;

/// boundary to the external model: one system prompt, one user message, raw text back.
///
/// the returned text is expected to be JSON but is not validated here.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    async fn complete(&self, system_prompt: &str, user_content: &str) -> Result<String, LlmError>;
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: [PromptMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct PromptMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// chat-completions client for OpenAI and compatible endpoints
pub struct OpenAiGateway {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    deadline: Duration,
}

impl OpenAiGateway {
    pub fn new(config: &LlmConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            deadline: config.timeout,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    async fn send(&self, system_prompt: &str, user_content: &str) -> Result<String, LlmError> {
        let request = CompletionRequest {
            model: &self.model,
            messages: [
                PromptMessage {
                    role: "system",
                    content: system_prompt,
                },
                PromptMessage {
                    role: "user",
                    content: user_content,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_OUTPUT_TOKENS,
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            error!("LLM provider returned HTTP {}: {}", status, body);
            return Err(LlmError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        let completion: CompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmError::MalformedEnvelope(e.to_string()))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        if content.trim().is_empty() {
            return Err(LlmError::EmptyResponse);
        }

        Ok(content)
    }
}

#[async_trait]
impl LlmGateway for OpenAiGateway {
    async fn complete(&self, system_prompt: &str, user_content: &str) -> Result<String, LlmError> {
        info!("Querying LLM with model: {}", self.model);
        let started = Instant::now();

        match timeout(self.deadline, self.send(system_prompt, user_content)).await {
            Ok(Ok(content)) => {
                info!(
                    "Received LLM response of length {} in {}ms",
                    content.len(),
                    started.elapsed().as_millis()
                );
                Ok(content)
            }
            Ok(Err(e)) => {
                error!("LLM call failed after {}ms: {}", started.elapsed().as_millis(), e);
                Err(e)
            }
            Err(_elapsed) => {
                warn!("LLM call exceeded its {}s deadline", self.deadline.as_secs());
                Err(LlmError::Timeout(self.deadline))
            }
        }
    }
}

fn truncate_body(body: &str) -> String {
    let mut chars = body.chars();
    let head: String = chars.by_ref().take(MAX_ERROR_BODY_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}
