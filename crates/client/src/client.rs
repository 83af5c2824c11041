//! Client facade
//!
//! [`ComprehendClient`] is the only entry point callers need. It holds the
//! configured language code and a shared handle to the remote capability and
//! keeps no per-call state, so one client can be cloned and used from many
//! tasks at once.
//!
//! Every operation sends exactly one request. If that request fails, the
//! error is returned as-is and no partial result is produced. Per-item
//! failures inside a batch are data, reported in the response's `errors`.

use std::sync::Arc;

use comprehend_core::{
    BatchEntitiesResponse, BatchKeyPhrasesResponse, BatchLanguageResponse, BatchResponse,
    BatchSentimentsResponse, ComprehendService, Entity, Error, KeyPhrase, LanguageGuess, Result,
    Sentiment,
};

use crate::aggregator::{aggregate, entities_item, key_phrases_item, language_item, sentiment_item};
use crate::mapper::{map_entities, map_key_phrases, map_languages, map_sentiment};

/// Facade configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Sent with sentiment, entity and key-phrase requests
    pub language_code: String,
}

impl ClientConfig {
    pub fn new(language_code: impl Into<String>) -> Self {
        Self {
            language_code: language_code.into(),
        }
    }
}

impl From<&comprehend_config::Settings> for ClientConfig {
    fn from(settings: &comprehend_config::Settings) -> Self {
        Self::new(settings.language_code.clone())
    }
}

#[derive(Clone)]
pub struct ComprehendClient {
    config: ClientConfig,
    service: Arc<dyn ComprehendService>,
}

impl std::fmt::Debug for ComprehendClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComprehendClient")
            .field("config", &self.config)
            .field("service", &self.service.name())
            .finish()
    }
}

impl ComprehendClient {
    /// Attach to an existing service handle
    pub fn new(language_code: impl Into<String>, service: Arc<dyn ComprehendService>) -> Self {
        Self::with_config(ClientConfig::new(language_code), service)
    }

    pub fn with_config(config: ClientConfig, service: Arc<dyn ComprehendService>) -> Self {
        Self { config, service }
    }

    /// Connect to AWS Comprehend using ambient credentials
    ///
    /// Settings are validated first; a missing region fails here rather than
    /// on the first request.
    #[cfg(feature = "aws")]
    pub async fn connect(settings: &comprehend_config::Settings) -> Result<Self> {
        settings.validate()?;
        let service = crate::aws::AwsComprehend::from_settings(&settings.aws).await?;
        Ok(Self::with_config(settings.into(), Arc::new(service)))
    }

    pub fn language_code(&self) -> &str {
        &self.config.language_code
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub async fn get_sentiment(&self, text: &str) -> Result<Sentiment> {
        tracing::debug!(service = self.service.name(), "DetectSentiment");
        let output = self
            .service
            .detect_sentiment(text, &self.config.language_code)
            .await
            .map_err(|e| log_failure("DetectSentiment", e))?;
        map_sentiment(output)
    }

    pub async fn get_entities(&self, text: &str) -> Result<Vec<Entity>> {
        tracing::debug!(service = self.service.name(), "DetectEntities");
        let entities = self
            .service
            .detect_entities(text, &self.config.language_code)
            .await
            .map_err(|e| log_failure("DetectEntities", e))?;
        map_entities(entities)
    }

    pub async fn get_key_phrases(&self, text: &str) -> Result<Vec<KeyPhrase>> {
        tracing::debug!(service = self.service.name(), "DetectKeyPhrases");
        let phrases = self
            .service
            .detect_key_phrases(text, &self.config.language_code)
            .await
            .map_err(|e| log_failure("DetectKeyPhrases", e))?;
        map_key_phrases(phrases)
    }

    /// Detect the language(s) of a text; no language code is sent
    pub async fn get_dominant_language(&self, text: &str) -> Result<Vec<LanguageGuess>> {
        tracing::debug!(service = self.service.name(), "DetectDominantLanguage");
        let languages = self
            .service
            .detect_dominant_language(text)
            .await
            .map_err(|e| log_failure("DetectDominantLanguage", e))?;
        map_languages(languages)
    }

    pub async fn get_sentiment_batch(&self, texts: &[String]) -> Result<BatchSentimentsResponse> {
        log_batch("BatchDetectSentiment", self.service.name(), texts);
        let output = self
            .service
            .batch_detect_sentiment(texts, &self.config.language_code)
            .await
            .map_err(|e| log_failure("BatchDetectSentiment", e))?;
        let response = aggregate(output, texts.len(), sentiment_item)?;
        log_aggregated("BatchDetectSentiment", &response);
        Ok(response)
    }

    pub async fn get_entities_batch(&self, texts: &[String]) -> Result<BatchEntitiesResponse> {
        log_batch("BatchDetectEntities", self.service.name(), texts);
        let output = self
            .service
            .batch_detect_entities(texts, &self.config.language_code)
            .await
            .map_err(|e| log_failure("BatchDetectEntities", e))?;
        let response = aggregate(output, texts.len(), entities_item)?;
        log_aggregated("BatchDetectEntities", &response);
        Ok(response)
    }

    pub async fn get_key_phrases_batch(&self, texts: &[String]) -> Result<BatchKeyPhrasesResponse> {
        log_batch("BatchDetectKeyPhrases", self.service.name(), texts);
        let output = self
            .service
            .batch_detect_key_phrases(texts, &self.config.language_code)
            .await
            .map_err(|e| log_failure("BatchDetectKeyPhrases", e))?;
        let response = aggregate(output, texts.len(), key_phrases_item)?;
        log_aggregated("BatchDetectKeyPhrases", &response);
        Ok(response)
    }

    /// Detect languages for many texts; no language code is sent
    pub async fn get_language_batch(&self, texts: &[String]) -> Result<BatchLanguageResponse> {
        log_batch("BatchDetectDominantLanguage", self.service.name(), texts);
        let output = self
            .service
            .batch_detect_dominant_language(texts)
            .await
            .map_err(|e| log_failure("BatchDetectDominantLanguage", e))?;
        let response = aggregate(output, texts.len(), language_item)?;
        log_aggregated("BatchDetectDominantLanguage", &response);
        Ok(response)
    }
}

fn log_batch(operation: &str, service: &str, texts: &[String]) {
    tracing::debug!(service, items = texts.len(), "{}", operation);
}

fn log_aggregated<T>(operation: &str, response: &BatchResponse<T>) {
    tracing::debug!(
        succeeded = response.items.len(),
        failed = response.errors.len(),
        "{} aggregated",
        operation
    );
}

fn log_failure(operation: &str, err: Error) -> Error {
    tracing::debug!(error = %err, "{} request failed", operation);
    err
}
