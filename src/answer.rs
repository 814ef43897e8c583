use std::time::Duration;

use anyhow::Result;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Config;

const SYSTEM_PROMPT: &str = "You are a helpful and knowledgeable assistant.";

// Fixed generation settings, sent with every request.
const TEMPERATURE: f32 = 0.7;
const TOP_P: f32 = 0.9;
const MAX_TOKENS: u32 = 512;

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    top_p: f32,
    max_tokens: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

/// Client for the OpenAI-style chat completion backend that generates
/// explanatory answers.
pub struct AnswerClient {
    client: Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl AnswerClient {
    pub fn new(config: &Config) -> Result<AnswerClient> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()?;

        Ok(AnswerClient {
            client,
            api_url: config.mistral_api_url.clone(),
            api_key: config.mistral_api_key.clone(),
            model: config.mistral_model.clone(),
        })
    }

    /// Ask the model to explain the given question and return the text of
    /// the first completion choice.
    pub async fn generate(&self, question: &str) -> Result<String> {
        let request = self.build_request(question);

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            anyhow::bail!("chat completion API returned {status}: {error_text}");
        }

        let completion: ChatCompletion = response.json().await?;
        let answer = completion
            .choices
            .first()
            .map(|choice| choice.message.content.trim().to_string())
            .ok_or_else(|| anyhow::anyhow!("chat completion response contained no choices"))?;

        Ok(answer)
    }

    fn build_request(&self, question: &str) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: format!("Explain in detail: {question}"),
                },
            ],
            temperature: TEMPERATURE,
            top_p: TOP_P,
            max_tokens: MAX_TOKENS,
        }
    }
}
