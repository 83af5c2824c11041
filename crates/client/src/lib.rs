//! Comprehend client
//!
//! Features:
//! - Sentiment, entity, key-phrase and dominant-language detection
//! - Single-text and batch variants of each
//! - Batch responses split into index-tagged successes and failures
//! - Pluggable service: AWS SDK adapter or in-memory stub
//!
//! ## Example
//! ```ignore
//! let settings = comprehend_config::load_settings(None)?;
//! let client = ComprehendClient::connect(&settings).await?;
//! let sentiment = client.get_sentiment("I love this").await?;
//! ```

pub mod aggregator;
#[cfg(feature = "aws")]
pub mod aws;
pub mod client;
pub mod mapper;
pub mod stub;

#[cfg(feature = "aws")]
pub use aws::AwsComprehend;
pub use client::{ClientConfig, ComprehendClient};
pub use stub::{RecordedCall, StubComprehend};

pub use comprehend_config::{load_settings, Settings};
pub use comprehend_core::{
    BatchEntitiesResponse, BatchError, BatchItem, BatchKeyPhrasesResponse, BatchLanguageResponse,
    BatchResponse, BatchSentimentsResponse, ComprehendService, Entity, Error, KeyPhrase,
    LanguageGuess, Result, Sentiment, SentimentScore,
};
