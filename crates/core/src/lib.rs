//! Core traits and types for the Comprehend client
//!
//! This crate provides foundational types used across the other crates:
//! - Normalized result types (sentiment, entities, key phrases, languages)
//! - Batch response types with per-item errors
//! - Remote response shapes as reported by the service (nullable fields)
//! - The `ComprehendService` capability trait
//! - Error types

pub mod error;
pub mod remote;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use remote::{
    BatchOutput, EntitiesItem, KeyPhrasesItem, LanguageItem, RemoteEntity, RemoteItemError,
    RemoteKeyPhrase, RemoteLanguage, RemoteSentimentScore, SentimentItem, SentimentOutput,
};
pub use traits::ComprehendService;
pub use types::{
    BatchEntitiesResponse, BatchError, BatchItem, BatchKeyPhrasesResponse, BatchLanguageResponse,
    BatchResponse, BatchSentimentsResponse, Entity, KeyPhrase, LanguageGuess, Sentiment,
    SentimentScore,
};
