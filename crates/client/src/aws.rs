//! AWS Comprehend adapter
//!
//! Implements [`ComprehendService`] over `aws_sdk_comprehend::Client`.
//! Credentials, region, retries and throttling all come from the SDK's
//! default chain; this adapter only translates request and response shapes.
//!
//! ## Conversions
//! - SDK scores are `f32`; they are widened losslessly to `f64`
//! - SDK enums (sentiment class, entity type) are carried as their wire strings
//! - Any `SdkError` becomes [`Error::Remote`] with the full error context

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_comprehend::config::Region;
use aws_sdk_comprehend::error::DisplayErrorContext;
use aws_sdk_comprehend::types::{
    BatchItemError, DominantLanguage, Entity, KeyPhrase, LanguageCode, SentimentScore,
    SentimentType,
};
use aws_sdk_comprehend::Client;

use comprehend_config::AwsSettings;
use comprehend_core::{
    BatchOutput, ComprehendService, EntitiesItem, Error, KeyPhrasesItem, LanguageItem, RemoteEntity,
    RemoteItemError, RemoteKeyPhrase, RemoteLanguage, RemoteSentimentScore, Result, SentimentItem,
    SentimentOutput,
};

/// Network-backed service using the AWS SDK
#[derive(Clone, Debug)]
pub struct AwsComprehend {
    client: Client,
}

impl AwsComprehend {
    /// Wrap an already configured SDK client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build an SDK client from the ambient AWS configuration plus overrides
    ///
    /// Fails when no region can be discovered, since every request would
    /// fail the same way.
    pub async fn from_settings(settings: &AwsSettings) -> Result<Self> {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());

        if let Some(region) = &settings.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(profile) = &settings.profile {
            loader = loader.profile_name(profile);
        }
        if let Some(endpoint_url) = &settings.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }

        let sdk_config = loader.load().await;
        if sdk_config.region().is_none() {
            return Err(Error::Config(
                "No AWS region configured (set AWS_REGION, a profile region, or aws.region)"
                    .to_string(),
            ));
        }

        tracing::debug!(region = ?sdk_config.region(), "Created Comprehend SDK client");

        Ok(Self::new(Client::new(&sdk_config)))
    }
}

fn remote_error<E>(operation: &str, err: E) -> Error
where
    E: std::error::Error + 'static,
{
    let context = DisplayErrorContext(err);
    Error::remote(format!("{} failed: {}", operation, context))
}

fn score(value: Option<f32>) -> Option<f64> {
    value.map(f64::from)
}

fn convert_sentiment_score(score_in: Option<&SentimentScore>) -> Option<RemoteSentimentScore> {
    score_in.map(|s| RemoteSentimentScore {
        mixed: score(s.mixed()),
        negative: score(s.negative()),
        positive: score(s.positive()),
        neutral: score(s.neutral()),
    })
}

fn convert_sentiment_class(sentiment: Option<&SentimentType>) -> Option<String> {
    sentiment.map(|s| s.as_str().to_string())
}

fn convert_entities(entities: &[Entity]) -> Vec<RemoteEntity> {
    entities
        .iter()
        .map(|e| RemoteEntity {
            text: e.text().map(str::to_string),
            entity_type: e.r#type().map(|t| t.as_str().to_string()),
            score: score(e.score()),
        })
        .collect()
}

fn convert_key_phrases(phrases: &[KeyPhrase]) -> Vec<RemoteKeyPhrase> {
    phrases
        .iter()
        .map(|p| RemoteKeyPhrase {
            text: p.text().map(str::to_string),
            score: score(p.score()),
        })
        .collect()
}

fn convert_languages(languages: &[DominantLanguage]) -> Vec<RemoteLanguage> {
    languages
        .iter()
        .map(|l| RemoteLanguage {
            language_code: l.language_code().map(str::to_string),
            score: score(l.score()),
        })
        .collect()
}

fn convert_item_errors(errors: &[BatchItemError]) -> Vec<RemoteItemError> {
    errors
        .iter()
        .map(|e| RemoteItemError {
            index: e.index(),
            error_code: e.error_code().map(str::to_string),
            error_message: e.error_message().map(str::to_string),
        })
        .collect()
}

#[async_trait]
impl ComprehendService for AwsComprehend {
    async fn detect_sentiment(&self, text: &str, language_code: &str) -> Result<SentimentOutput> {
        let output = self
            .client
            .detect_sentiment()
            .text(text)
            .language_code(LanguageCode::from(language_code))
            .send()
            .await
            .map_err(|e| remote_error("DetectSentiment", e))?;

        Ok(SentimentOutput {
            sentiment: convert_sentiment_class(output.sentiment()),
            sentiment_score: convert_sentiment_score(output.sentiment_score()),
        })
    }

    async fn detect_entities(&self, text: &str, language_code: &str) -> Result<Vec<RemoteEntity>> {
        let output = self
            .client
            .detect_entities()
            .text(text)
            .language_code(LanguageCode::from(language_code))
            .send()
            .await
            .map_err(|e| remote_error("DetectEntities", e))?;

        Ok(convert_entities(output.entities()))
    }

    async fn detect_key_phrases(
        &self,
        text: &str,
        language_code: &str,
    ) -> Result<Vec<RemoteKeyPhrase>> {
        let output = self
            .client
            .detect_key_phrases()
            .text(text)
            .language_code(LanguageCode::from(language_code))
            .send()
            .await
            .map_err(|e| remote_error("DetectKeyPhrases", e))?;

        Ok(convert_key_phrases(output.key_phrases()))
    }

    async fn detect_dominant_language(&self, text: &str) -> Result<Vec<RemoteLanguage>> {
        let output = self
            .client
            .detect_dominant_language()
            .text(text)
            .send()
            .await
            .map_err(|e| remote_error("DetectDominantLanguage", e))?;

        Ok(convert_languages(output.languages()))
    }

    async fn batch_detect_sentiment(
        &self,
        texts: &[String],
        language_code: &str,
    ) -> Result<BatchOutput<SentimentItem>> {
        let output = self
            .client
            .batch_detect_sentiment()
            .set_text_list(Some(texts.to_vec()))
            .language_code(LanguageCode::from(language_code))
            .send()
            .await
            .map_err(|e| remote_error("BatchDetectSentiment", e))?;

        let result_list = output
            .result_list()
            .iter()
            .map(|r| SentimentItem {
                index: r.index(),
                sentiment: convert_sentiment_class(r.sentiment()),
                sentiment_score: convert_sentiment_score(r.sentiment_score()),
            })
            .collect();

        Ok(BatchOutput::new(
            result_list,
            convert_item_errors(output.error_list()),
        ))
    }

    async fn batch_detect_entities(
        &self,
        texts: &[String],
        language_code: &str,
    ) -> Result<BatchOutput<EntitiesItem>> {
        let output = self
            .client
            .batch_detect_entities()
            .set_text_list(Some(texts.to_vec()))
            .language_code(LanguageCode::from(language_code))
            .send()
            .await
            .map_err(|e| remote_error("BatchDetectEntities", e))?;

        let result_list = output
            .result_list()
            .iter()
            .map(|r| EntitiesItem {
                index: r.index(),
                entities: convert_entities(r.entities()),
            })
            .collect();

        Ok(BatchOutput::new(
            result_list,
            convert_item_errors(output.error_list()),
        ))
    }

    async fn batch_detect_key_phrases(
        &self,
        texts: &[String],
        language_code: &str,
    ) -> Result<BatchOutput<KeyPhrasesItem>> {
        let output = self
            .client
            .batch_detect_key_phrases()
            .set_text_list(Some(texts.to_vec()))
            .language_code(LanguageCode::from(language_code))
            .send()
            .await
            .map_err(|e| remote_error("BatchDetectKeyPhrases", e))?;

        let result_list = output
            .result_list()
            .iter()
            .map(|r| KeyPhrasesItem {
                index: r.index(),
                key_phrases: convert_key_phrases(r.key_phrases()),
            })
            .collect();

        Ok(BatchOutput::new(
            result_list,
            convert_item_errors(output.error_list()),
        ))
    }

    async fn batch_detect_dominant_language(
        &self,
        texts: &[String],
    ) -> Result<BatchOutput<LanguageItem>> {
        let output = self
            .client
            .batch_detect_dominant_language()
            .set_text_list(Some(texts.to_vec()))
            .send()
            .await
            .map_err(|e| remote_error("BatchDetectDominantLanguage", e))?;

        let result_list = output
            .result_list()
            .iter()
            .map(|r| LanguageItem {
                index: r.index(),
                languages: convert_languages(r.languages()),
            })
            .collect();

        Ok(BatchOutput::new(
            result_list,
            convert_item_errors(output.error_list()),
        ))
    }

    fn name(&self) -> &str {
        "aws-comprehend"
    }
}
