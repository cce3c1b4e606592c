use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;

use crate::config::AppConfig;
use crate::core::error::AppError;
use crate::core::http_client::build_http_client;
use crate::features::ai::dto::GenerateContentRequest;
use crate::features::ai::helpers::{build_prompt, candidate_text, first_word};

/// Source of single-word answers for the `AI` operation.
#[async_trait]
pub trait OneWordAnswerer: Send + Sync {
    async fn answer(&self, question: &str) -> Result<String, AppError>;
}

pub struct GeminiClient {
    config: Arc<AppConfig>,
    http_client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: Arc<AppConfig>) -> Result<Self, AppError> {
        let http_client = build_http_client(config.disable_proxy)
            .map_err(|err| AppError::internal(format!("failed to build HTTP client: {err}")))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    fn endpoint(&self, api_key: &str) -> Result<Url, AppError> {
        let gemini = &self.config.gemini;
        let mut url = Url::parse(&format!(
            "{}/v1beta/models/{}:generateContent",
            gemini.api_base.trim_end_matches('/'),
            gemini.model
        ))
        .map_err(|err| AppError::internal(format!("invalid Gemini url: {err}")))?;

        url.query_pairs_mut().append_pair("key", api_key);
        Ok(url)
    }

    pub async fn generate_text(&self, prompt: String) -> Result<String, AppError> {
        let api_key = self
            .config
            .gemini
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::configuration("GEMINI_API_KEY is not configured"))?;

        let url = self.endpoint(api_key)?;
        let body = GenerateContentRequest::from_prompt(prompt);

        tracing::debug!(model = %self.config.gemini.model, "calling Gemini generateContent");
        let response = self
            .http_client
            .post(url)
            .json(&body)
            .send()
            .await
            // without_url keeps the API key out of the error message
            .map_err(|err| {
                AppError::internal(format!(
                    "failed to reach Gemini API: {}",
                    err.without_url()
                ))
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read body>".to_string());
            tracing::warn!(status = status.as_u16(), "Gemini API returned an error");
            return Err(AppError::upstream(status.as_u16(), &text));
        }

        let payload = response.json::<Value>().await.map_err(|err| {
            AppError::internal(format!(
                "failed to parse Gemini response: {}",
                err.without_url()
            ))
        })?;

        Ok(candidate_text(&payload).to_string())
    }
}

#[async_trait]
impl OneWordAnswerer for GeminiClient {
    async fn answer(&self, question: &str) -> Result<String, AppError> {
        let text = self.generate_text(build_prompt(question)).await?;
        let word = first_word(&text);
        if word.is_empty() {
            tracing::warn!("Gemini response did not contain an answer word");
        }

        Ok(word)
    }
}
