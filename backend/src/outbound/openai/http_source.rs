//! Reqwest-backed completion source against the OpenAI chat API.
//!
//! The HTTP client is lazily initialised on first use and reused for the
//! process lifetime. The credential is optional at construction: the advice
//! path degrades to `None` without it, the Q&A path reports
//! [`AdviceSourceError::MissingCredential`].

use std::sync::OnceLock;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::json;

use crate::domain::advice::{AdvicePrompt, QuestionPrompt};
use crate::domain::ports::{AdviceSource, AdviceSourceError};

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const ADVICE_MODEL: &str = "gpt-4.1";
const ANSWER_MODEL: &str = "gpt-4o-mini";
const ANSWER_TEMPERATURE: f64 = 0.6;

/// Completion adapter holding the optional credential and a lazily built
/// client.
pub struct OpenAiAdviceSource {
    api_key: Option<String>,
    client: OnceLock<Client>,
}

impl OpenAiAdviceSource {
    /// Create the adapter; a blank key counts as absent.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            client: OnceLock::new(),
        }
    }

    /// Whether a credential is configured.
    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// The shared HTTP client, built on first use and reused afterwards.
    fn client(&self) -> Result<&Client, AdviceSourceError> {
        if let Some(client) = self.client.get() {
            return Ok(client);
        }
        let built = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| AdviceSourceError::transport(err.to_string()))?;
        Ok(self.client.get_or_init(|| built))
    }

    async fn chat(
        &self,
        api_key: &str,
        payload: &serde_json::Value,
    ) -> Result<Option<String>, AdviceSourceError> {
        let response = self
            .client()?
            .post(CHAT_COMPLETIONS_URL)
            .header("Authorization", format!("Bearer {api_key}"))
            .json(payload)
            .send()
            .await
            .map_err(|err| AdviceSourceError::transport(err.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| AdviceSourceError::transport(err.to_string()))?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        extract_completion(body.as_ref())
    }
}

#[async_trait]
impl AdviceSource for OpenAiAdviceSource {
    async fn travel_advice(
        &self,
        prompt: &AdvicePrompt,
    ) -> Result<Option<String>, AdviceSourceError> {
        let Some(api_key) = self.api_key.as_deref() else {
            // Advice is optional; without a credential the record simply
            // carries no advice.
            return Ok(None);
        };

        let payload = json!({
            "model": ADVICE_MODEL,
            "messages": [
                { "role": "system", "content": prompt.instructions },
                { "role": "user", "content": prompt.input },
            ],
        });
        let completion = self.chat(api_key, &payload).await?;
        Ok(completion
            .map(|text| text.trim().to_owned())
            .filter(|text| !text.is_empty()))
    }

    async fn answer(&self, prompt: &QuestionPrompt) -> Result<Option<String>, AdviceSourceError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(AdviceSourceError::MissingCredential);
        };

        let payload = json!({
            "model": ANSWER_MODEL,
            "temperature": ANSWER_TEMPERATURE,
            "messages": [
                { "role": "system", "content": prompt.system },
                { "role": "user", "content": prompt.context },
                { "role": "user", "content": prompt.question },
            ],
        });
        self.chat(api_key, &payload).await
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionDto {
    #[serde(default)]
    choices: Vec<ChoiceDto>,
}

#[derive(Debug, Deserialize)]
struct ChoiceDto {
    message: MessageDto,
}

#[derive(Debug, Deserialize)]
struct MessageDto {
    #[serde(default)]
    content: Option<String>,
}

fn extract_completion(body: &[u8]) -> Result<Option<String>, AdviceSourceError> {
    let decoded: ChatCompletionDto = serde_json::from_slice(body)
        .map_err(|err| AdviceSourceError::decode(format!("invalid completion payload: {err}")))?;
    Ok(decoded
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content))
}

fn map_status_error(status: StatusCode, body: &[u8]) -> AdviceSourceError {
    let preview = String::from_utf8_lossy(body)
        .chars()
        .take(160)
        .collect::<String>();
    AdviceSourceError::status(status.as_u16(), preview)
}
