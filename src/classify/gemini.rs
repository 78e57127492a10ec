//! Google Gemini `generateContent` classifier.
//!
//! One POST per note, API key in the `key` query parameter, low temperature
//! and a small token cap so the model answers with a short JSON object. No
//! retries and no client-side timeout beyond reqwest's defaults.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Url;
use serde_json::{json, Value};

use super::{Classification, Classifier, ClassifyError, FallbackReason};
use crate::config::ClassifierConfig;

/// Sampling parameters sent with every request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub temperature: f64,
    pub max_output_tokens: u32,
    pub top_p: f64,
    pub top_k: u32,
}

/// Classifier backed by the Gemini generative-language REST API.
pub struct GeminiClassifier {
    client: reqwest::Client,
    endpoint: Url,
    api_key: Option<String>,
    params: GenerationParams,
}

impl GeminiClassifier {
    pub fn new(config: &ClassifierConfig) -> Result<Self> {
        let base = config.base_url.trim_end_matches('/');
        let endpoint = format!("{base}/models/{}:generateContent", config.model);
        let endpoint = Url::parse(&endpoint)
            .with_context(|| format!("invalid classifier endpoint: {endpoint}"))?;

        let client = reqwest::Client::builder()
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoint,
            api_key: config.api_key().map(str::to_string),
            params: GenerationParams {
                temperature: config.temperature,
                max_output_tokens: config.max_output_tokens,
                top_p: config.top_p,
                top_k: config.top_k,
            },
        })
    }

    /// The `generateContent` URL, without the key.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// JSON body for one prompt.
    pub fn request_body(&self, prompt: &str) -> Value {
        json!({
            "contents": [{
                "parts": [{ "text": prompt }]
            }],
            "generationConfig": {
                "temperature": self.params.temperature,
                "maxOutputTokens": self.params.max_output_tokens,
                "topP": self.params.top_p,
                "topK": self.params.top_k,
            }
        })
    }

    /// Send the prompt and return the completion text (empty if the envelope
    /// has no candidate text).
    async fn generate(&self, api_key: &str, prompt: &str) -> Result<String, ClassifyError> {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("key", api_key);

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(self.request_body(prompt).to_string())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClassifyError::HttpStatus(status.as_u16()));
        }

        let body = response.text().await?;
        let envelope: Value = serde_json::from_str(&body)?;
        Ok(completion_text(&envelope).to_string())
    }
}

/// `candidates[0].content.parts[0].text`, or `""` if any step is missing.
pub fn completion_text(envelope: &Value) -> &str {
    envelope
        .pointer("/candidates/0/content/parts/0/text")
        .and_then(Value::as_str)
        .unwrap_or_default()
}

#[async_trait]
impl Classifier for GeminiClassifier {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn classify(&self, text: &str) -> Classification {
        let Some(api_key) = self.api_key.as_deref() else {
            tracing::debug!("no Gemini API key configured, using fallback classification");
            return Classification::fallback(FallbackReason::MissingCredential);
        };

        tracing::debug!(text_len = text.len(), "sending classification request");

        match self.generate(api_key, &super::prompt::build_prompt(text)).await {
            Ok(completion) => {
                tracing::debug!(completion = %completion, "raw model completion");
                let result = Classification::from_completion(&completion);
                tracing::info!(
                    category = %result.category,
                    thought_type = %result.thought_type,
                    provenance = ?result.provenance,
                    "thought classified"
                );
                result
            }
            Err(e) => {
                tracing::warn!(error = %e, "classification failed, using fallback");
                Classification::fallback(e.fallback_reason())
            }
        }
    }
}
