//! Normalized result types
//!
//! These are the shapes callers see. Every response is a fresh value; nothing
//! here is shared between calls.

use serde::{Deserialize, Serialize};

/// Confidence distribution over the four sentiment classes
///
/// Values are copied verbatim from the service. No sum-to-one invariant is
/// enforced locally.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SentimentScore {
    pub mixed: f64,
    pub negative: f64,
    pub positive: f64,
    pub neutral: f64,
}

/// Overall polarity of a text plus its confidence distribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    /// POSITIVE, NEGATIVE, NEUTRAL or MIXED, as returned by the service
    pub class: String,
    pub score: SentimentScore,
}

/// A named span of text classified into a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    /// Category label such as PERSON or LOCATION
    pub entity_type: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyPhrase {
    pub phrase: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageGuess {
    pub language_code: String,
    pub score: f64,
}

/// Failure of a single item inside a batch call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchError {
    /// Position in the submitted text list, as reported by the service
    pub index: usize,
    pub message: String,
    /// Service error code, when one was reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Successful result of a single item inside a batch call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchItem<T> {
    /// Position in the submitted text list, as reported by the service
    pub index: usize,
    pub payload: T,
}

impl<T> BatchItem<T> {
    pub fn new(index: usize, payload: T) -> Self {
        Self { index, payload }
    }
}

/// Result of a batch call: successes and per-item failures, each in the
/// order the service reported them
///
/// Indices are never renumbered or re-sorted. An index may be missing from
/// both lists if the service dropped it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchResponse<T> {
    pub items: Vec<BatchItem<T>>,
    pub errors: Vec<BatchError>,
}

impl<T> Default for BatchResponse<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            errors: Vec::new(),
        }
    }
}

impl<T> BatchResponse<T> {
    /// Number of reported items, successes and failures together
    pub fn len(&self) -> usize {
        self.items.len() + self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.errors.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Successful payload for an input position, if the service returned one
    pub fn item(&self, index: usize) -> Option<&T> {
        self.items
            .iter()
            .find(|item| item.index == index)
            .map(|item| &item.payload)
    }

    /// Per-item failure for an input position, if the service reported one
    pub fn error(&self, index: usize) -> Option<&BatchError> {
        self.errors.iter().find(|err| err.index == index)
    }
}

pub type BatchSentimentsResponse = BatchResponse<Sentiment>;
pub type BatchEntitiesResponse = BatchResponse<Vec<Entity>>;
pub type BatchKeyPhrasesResponse = BatchResponse<Vec<KeyPhrase>>;
pub type BatchLanguageResponse = BatchResponse<Vec<LanguageGuess>>;
