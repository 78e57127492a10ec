//! AI categorization of captured thoughts.
//!
//! A [`Classifier`] turns note text into a [`Classification`]: one
//! [`Category`], one [`ThoughtType`], and a [`Provenance`] recording whether the
//! answer came from the model or from the fixed fallback. Classification is
//! total. Missing credentials, transport failures, bad statuses, and garbage
//! completions all degrade to `(random, thought)` rather than surfacing an
//! error, so a broken provider never blocks capture.
//!
//! Providers are created via [`create_classifier`] from configuration.

pub mod gemini;
pub mod normalize;
pub mod prompt;
pub mod types;

use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;

pub use prompt::ParsePath;
pub use types::{Category, ThoughtType};

/// Why a classification fell back to the default pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "reason", content = "status")]
pub enum FallbackReason {
    /// No API key configured. Expected, not an error.
    MissingCredential,
    /// The classifier is switched off in config.
    Disabled,
    /// The request never produced a response (DNS, connect, reset).
    Transport,
    /// The provider answered with a non-success status.
    HttpStatus(u16),
    /// The response body was not the JSON envelope we expected.
    InvalidResponse,
}

/// Where a classification came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    Model(ParsePath),
    Fallback(FallbackReason),
}

impl Provenance {
    /// Short label stored alongside the thought.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Model(_) => "model",
            Self::Fallback(_) => "fallback",
        }
    }
}

/// The result of classifying one note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub category: Category,
    #[serde(rename = "type")]
    pub thought_type: ThoughtType,
    pub provenance: Provenance,
}

impl Classification {
    /// The fixed `(random, thought)` answer used whenever the model can't be asked.
    pub fn fallback(reason: FallbackReason) -> Self {
        Self {
            category: Category::Random,
            thought_type: ThoughtType::Thought,
            provenance: Provenance::Fallback(reason),
        }
    }

    /// Build a model-derived result from raw completion text.
    pub fn from_completion(raw: &str) -> Self {
        let (category, thought_type, path) = prompt::parse_completion(raw);
        Self {
            category,
            thought_type,
            provenance: Provenance::Model(path),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.provenance, Provenance::Fallback(_))
    }
}

/// Failures inside a single classification attempt. Never escapes
/// [`Classifier::classify`]; each variant maps to a [`FallbackReason`].
#[derive(Debug, thiserror::Error)]
pub enum ClassifyError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider returned HTTP {0}")]
    HttpStatus(u16),

    #[error("invalid response body: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}

impl ClassifyError {
    pub fn fallback_reason(&self) -> FallbackReason {
        match self {
            Self::Transport(_) => FallbackReason::Transport,
            Self::HttpStatus(status) => FallbackReason::HttpStatus(*status),
            Self::InvalidResponse(_) => FallbackReason::InvalidResponse,
        }
    }
}

/// Something that can put a note into a category and a type.
///
/// `classify` is total: implementations must return a well-formed
/// [`Classification`] for every input and never panic on bad provider output.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Provider name, for logs and diagnostics.
    fn name(&self) -> &str;

    /// Classify a single note. Makes at most one outbound call.
    async fn classify(&self, text: &str) -> Classification;
}

/// Provider used when classification is switched off. Never touches the network.
pub struct DisabledClassifier;

#[async_trait]
impl Classifier for DisabledClassifier {
    fn name(&self) -> &str {
        "disabled"
    }

    async fn classify(&self, _text: &str) -> Classification {
        Classification::fallback(FallbackReason::Disabled)
    }
}

/// Create a classifier from config.
///
/// Supported providers: `"gemini"` and `"disabled"`.
pub fn create_classifier(
    config: &crate::config::ClassifierConfig,
) -> Result<Box<dyn Classifier>> {
    match config.provider.as_str() {
        "gemini" => Ok(Box::new(gemini::GeminiClassifier::new(config)?)),
        "disabled" => Ok(Box::new(DisabledClassifier)),
        other => anyhow::bail!("unknown classifier provider: {other}. Supported: gemini, disabled"),
    }
}
