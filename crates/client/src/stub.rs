//! In-memory stub service
//!
//! Deterministic stand-in for the remote service. Responses are configured
//! per operation and returned as-is on every call; every request is recorded
//! so callers can check what was sent.
//!
//! # Example
//!
//! ```ignore
//! let stub = StubComprehend::new()
//!     .with_key_phrases(vec![RemoteKeyPhrase::new("quick fox", 0.99)]);
//! let client = ComprehendClient::new("en", Arc::new(stub));
//! ```

use async_trait::async_trait;
use parking_lot::Mutex;

use comprehend_core::{
    BatchOutput, ComprehendService, EntitiesItem, Error, KeyPhrasesItem, LanguageItem, RemoteEntity,
    RemoteKeyPhrase, RemoteLanguage, Result, SentimentItem, SentimentOutput,
};

/// A request the stub received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub operation: &'static str,
    pub texts: Vec<String>,
    /// `None` for language detection, which sends no language code
    pub language_code: Option<String>,
}

#[derive(Default)]
pub struct StubComprehend {
    sentiment: Option<SentimentOutput>,
    entities: Option<Vec<RemoteEntity>>,
    key_phrases: Option<Vec<RemoteKeyPhrase>>,
    languages: Option<Vec<RemoteLanguage>>,
    sentiment_batch: Option<BatchOutput<SentimentItem>>,
    entities_batch: Option<BatchOutput<EntitiesItem>>,
    key_phrases_batch: Option<BatchOutput<KeyPhrasesItem>>,
    language_batch: Option<BatchOutput<LanguageItem>>,
    failure: Option<String>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StubComprehend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sentiment(mut self, output: SentimentOutput) -> Self {
        self.sentiment = Some(output);
        self
    }

    pub fn with_entities(mut self, entities: Vec<RemoteEntity>) -> Self {
        self.entities = Some(entities);
        self
    }

    pub fn with_key_phrases(mut self, phrases: Vec<RemoteKeyPhrase>) -> Self {
        self.key_phrases = Some(phrases);
        self
    }

    pub fn with_languages(mut self, languages: Vec<RemoteLanguage>) -> Self {
        self.languages = Some(languages);
        self
    }

    pub fn with_sentiment_batch(mut self, output: BatchOutput<SentimentItem>) -> Self {
        self.sentiment_batch = Some(output);
        self
    }

    pub fn with_entities_batch(mut self, output: BatchOutput<EntitiesItem>) -> Self {
        self.entities_batch = Some(output);
        self
    }

    pub fn with_key_phrases_batch(mut self, output: BatchOutput<KeyPhrasesItem>) -> Self {
        self.key_phrases_batch = Some(output);
        self
    }

    pub fn with_language_batch(mut self, output: BatchOutput<LanguageItem>) -> Self {
        self.language_batch = Some(output);
        self
    }

    /// Make every operation fail as if the request never reached the service
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    /// Requests received so far, oldest first
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    fn respond<T: Clone>(
        &self,
        operation: &'static str,
        texts: Vec<String>,
        language_code: Option<&str>,
        response: Option<&T>,
    ) -> Result<T> {
        self.calls.lock().push(RecordedCall {
            operation,
            texts,
            language_code: language_code.map(str::to_string),
        });

        if let Some(message) = &self.failure {
            return Err(Error::remote(message.clone()));
        }

        match response {
            Some(response) => Ok(response.clone()),
            None => Err(Error::remote(format!("no stub response for {}", operation))),
        }
    }
}

#[async_trait]
impl ComprehendService for StubComprehend {
    async fn detect_sentiment(&self, text: &str, language_code: &str) -> Result<SentimentOutput> {
        self.respond(
            "DetectSentiment",
            vec![text.to_string()],
            Some(language_code),
            self.sentiment.as_ref(),
        )
    }

    async fn detect_entities(&self, text: &str, language_code: &str) -> Result<Vec<RemoteEntity>> {
        self.respond(
            "DetectEntities",
            vec![text.to_string()],
            Some(language_code),
            self.entities.as_ref(),
        )
    }

    async fn detect_key_phrases(
        &self,
        text: &str,
        language_code: &str,
    ) -> Result<Vec<RemoteKeyPhrase>> {
        self.respond(
            "DetectKeyPhrases",
            vec![text.to_string()],
            Some(language_code),
            self.key_phrases.as_ref(),
        )
    }

    async fn detect_dominant_language(&self, text: &str) -> Result<Vec<RemoteLanguage>> {
        self.respond(
            "DetectDominantLanguage",
            vec![text.to_string()],
            None,
            self.languages.as_ref(),
        )
    }

    async fn batch_detect_sentiment(
        &self,
        texts: &[String],
        language_code: &str,
    ) -> Result<BatchOutput<SentimentItem>> {
        self.respond(
            "BatchDetectSentiment",
            texts.to_vec(),
            Some(language_code),
            self.sentiment_batch.as_ref(),
        )
    }

    async fn batch_detect_entities(
        &self,
        texts: &[String],
        language_code: &str,
    ) -> Result<BatchOutput<EntitiesItem>> {
        self.respond(
            "BatchDetectEntities",
            texts.to_vec(),
            Some(language_code),
            self.entities_batch.as_ref(),
        )
    }

    async fn batch_detect_key_phrases(
        &self,
        texts: &[String],
        language_code: &str,
    ) -> Result<BatchOutput<KeyPhrasesItem>> {
        self.respond(
            "BatchDetectKeyPhrases",
            texts.to_vec(),
            Some(language_code),
            self.key_phrases_batch.as_ref(),
        )
    }

    async fn batch_detect_dominant_language(
        &self,
        texts: &[String],
    ) -> Result<BatchOutput<LanguageItem>> {
        self.respond(
            "BatchDetectDominantLanguage",
            texts.to_vec(),
            None,
            self.language_batch.as_ref(),
        )
    }

    fn name(&self) -> &str {
        "stub"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unconfigured_operation_is_remote_error() {
        let stub = StubComprehend::new();
        let err = stub.detect_entities("hello", "en").await.unwrap_err();
        assert!(err.is_remote());
        assert_eq!(stub.call_count(), 1);
    }

    #[tokio::test]
    async fn test_records_requests() {
        let stub = StubComprehend::new().with_languages(vec![RemoteLanguage::new("en", 0.99)]);

        stub.detect_dominant_language("good morning").await.unwrap();

        let calls = stub.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].operation, "DetectDominantLanguage");
        assert_eq!(calls[0].texts, vec!["good morning".to_string()]);
        assert!(calls[0].language_code.is_none());
    }

    #[tokio::test]
    async fn test_failing_overrides_configured_response() {
        let stub = StubComprehend::new()
            .with_key_phrases(Vec::new())
            .failing("AccessDeniedException");
        let err = stub.detect_key_phrases("text", "en").await.unwrap_err();
        assert_eq!(err, Error::remote("AccessDeniedException"));
    }
}
