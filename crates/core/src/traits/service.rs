//! Remote NLP capability

use async_trait::async_trait;

use crate::remote::{
    BatchOutput, EntitiesItem, KeyPhrasesItem, LanguageItem, RemoteEntity, RemoteKeyPhrase,
    RemoteLanguage, SentimentItem, SentimentOutput,
};
use crate::Result;

/// Narrow interface over the remote NLP service
///
/// Each method performs exactly one outbound request. Implementations own
/// transport, credentials, retries and throttling; a failed request is
/// reported as [`crate::Error::Remote`].
///
/// Implementations:
/// - `AwsComprehend` - adapter over the AWS SDK client
/// - `StubComprehend` - deterministic in-memory stub for tests
///
/// # Example
///
/// ```ignore
/// let service: Arc<dyn ComprehendService> = Arc::new(StubComprehend::new());
/// let output = service.detect_sentiment("I love it", "en").await?;
/// ```
#[async_trait]
pub trait ComprehendService: Send + Sync + 'static {
    async fn detect_sentiment(&self, text: &str, language_code: &str) -> Result<SentimentOutput>;

    async fn detect_entities(&self, text: &str, language_code: &str) -> Result<Vec<RemoteEntity>>;

    async fn detect_key_phrases(
        &self,
        text: &str,
        language_code: &str,
    ) -> Result<Vec<RemoteKeyPhrase>>;

    /// Language detection takes no language code; detecting it is the point
    async fn detect_dominant_language(&self, text: &str) -> Result<Vec<RemoteLanguage>>;

    async fn batch_detect_sentiment(
        &self,
        texts: &[String],
        language_code: &str,
    ) -> Result<BatchOutput<SentimentItem>>;

    async fn batch_detect_entities(
        &self,
        texts: &[String],
        language_code: &str,
    ) -> Result<BatchOutput<EntitiesItem>>;

    async fn batch_detect_key_phrases(
        &self,
        texts: &[String],
        language_code: &str,
    ) -> Result<BatchOutput<KeyPhrasesItem>>;

    async fn batch_detect_dominant_language(
        &self,
        texts: &[String],
    ) -> Result<BatchOutput<LanguageItem>>;

    /// Get service name for logging
    fn name(&self) -> &str;
}
