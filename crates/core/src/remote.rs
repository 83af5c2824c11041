//! Remote response shapes
//!
//! These mirror what the service reports, including its nullable fields.
//! Adapters fill them in; the client's mapper turns them into the normalized
//! types in [`crate::types`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RemoteSentimentScore {
    pub mixed: Option<f64>,
    pub negative: Option<f64>,
    pub positive: Option<f64>,
    pub neutral: Option<f64>,
}

impl RemoteSentimentScore {
    pub fn new(mixed: f64, negative: f64, positive: f64, neutral: f64) -> Self {
        Self {
            mixed: Some(mixed),
            negative: Some(negative),
            positive: Some(positive),
            neutral: Some(neutral),
        }
    }
}

/// Single-text sentiment response
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SentimentOutput {
    pub sentiment: Option<String>,
    pub sentiment_score: Option<RemoteSentimentScore>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RemoteEntity {
    pub text: Option<String>,
    pub entity_type: Option<String>,
    pub score: Option<f64>,
}

impl RemoteEntity {
    pub fn new(text: impl Into<String>, entity_type: impl Into<String>, score: f64) -> Self {
        Self {
            text: Some(text.into()),
            entity_type: Some(entity_type.into()),
            score: Some(score),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RemoteKeyPhrase {
    pub text: Option<String>,
    pub score: Option<f64>,
}

impl RemoteKeyPhrase {
    pub fn new(text: impl Into<String>, score: f64) -> Self {
        Self {
            text: Some(text.into()),
            score: Some(score),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RemoteLanguage {
    pub language_code: Option<String>,
    pub score: Option<f64>,
}

impl RemoteLanguage {
    pub fn new(language_code: impl Into<String>, score: f64) -> Self {
        Self {
            language_code: Some(language_code.into()),
            score: Some(score),
        }
    }
}

/// Per-item failure entry of a batch response
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RemoteItemError {
    pub index: Option<i32>,
    pub error_code: Option<String>,
    pub error_message: Option<String>,
}

impl RemoteItemError {
    pub fn new(
        index: i32,
        error_code: impl Into<String>,
        error_message: impl Into<String>,
    ) -> Self {
        Self {
            index: Some(index),
            error_code: Some(error_code.into()),
            error_message: Some(error_message.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SentimentItem {
    pub index: Option<i32>,
    pub sentiment: Option<String>,
    pub sentiment_score: Option<RemoteSentimentScore>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EntitiesItem {
    pub index: Option<i32>,
    pub entities: Vec<RemoteEntity>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct KeyPhrasesItem {
    pub index: Option<i32>,
    pub key_phrases: Vec<RemoteKeyPhrase>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LanguageItem {
    pub index: Option<i32>,
    pub languages: Vec<RemoteLanguage>,
}

/// Raw batch response: results and per-item errors in service order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchOutput<R> {
    pub result_list: Vec<R>,
    pub error_list: Vec<RemoteItemError>,
}

impl<R> Default for BatchOutput<R> {
    fn default() -> Self {
        Self {
            result_list: Vec::new(),
            error_list: Vec::new(),
        }
    }
}

impl<R> BatchOutput<R> {
    pub fn new(result_list: Vec<R>, error_list: Vec<RemoteItemError>) -> Self {
        Self {
            result_list,
            error_list,
        }
    }
}
