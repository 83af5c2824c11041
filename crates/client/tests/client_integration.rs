//! Integration tests for the client facade against the in-memory stub
//!
//! These tests verify the mapping and aggregation contract end to end.

use std::sync::Arc;

use comprehend_client::{ComprehendClient, Error, StubComprehend};
use comprehend_core::{
    BatchOutput, EntitiesItem, KeyPhrasesItem, LanguageItem, RemoteEntity, RemoteItemError,
    RemoteKeyPhrase, RemoteLanguage, RemoteSentimentScore, SentimentItem, SentimentOutput,
};

fn client_with(stub: StubComprehend) -> (ComprehendClient, Arc<StubComprehend>) {
    let stub = Arc::new(stub);
    let client = ComprehendClient::new("en", stub.clone());
    (client, stub)
}

fn texts(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("text number {}", i)).collect()
}

fn sentiment_at(index: i32, class: &str) -> SentimentItem {
    SentimentItem {
        index: Some(index),
        sentiment: Some(class.to_string()),
        sentiment_score: Some(RemoteSentimentScore::new(0.05, 0.1, 0.8, 0.05)),
    }
}

/// Every field of the stub's sentiment is copied unchanged
#[tokio::test]
async fn test_sentiment_copy_fidelity() {
    let stub = StubComprehend::new().with_sentiment(SentimentOutput {
        sentiment: Some("NEGATIVE".to_string()),
        sentiment_score: Some(RemoteSentimentScore::new(0.012, 0.953, 0.004, 0.031)),
    });
    let (client, stub) = client_with(stub);

    let sentiment = client.get_sentiment("this is awful").await.unwrap();

    assert_eq!(sentiment.class, "NEGATIVE");
    assert_eq!(sentiment.score.mixed, 0.012);
    assert_eq!(sentiment.score.negative, 0.953);
    assert_eq!(sentiment.score.positive, 0.004);
    assert_eq!(sentiment.score.neutral, 0.031);

    let calls = stub.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].operation, "DetectSentiment");
    assert_eq!(calls[0].language_code.as_deref(), Some("en"));
}

#[tokio::test]
async fn test_single_item_lists() {
    let (client, stub) = client_with(
        StubComprehend::new()
            .with_entities(vec![
                RemoteEntity::new("Ada Lovelace", "PERSON", 0.99),
                RemoteEntity::new("London", "LOCATION", 0.97),
            ])
            .with_key_phrases(vec![RemoteKeyPhrase::new("analytical engine", 0.95)])
            .with_languages(vec![RemoteLanguage::new("en", 0.98)]),
    );

    let text = "Ada Lovelace lived in London";
    let entities = client.get_entities(text).await.unwrap();
    assert_eq!(entities.len(), 2);
    assert_eq!(entities[0].text, "Ada Lovelace");
    assert_eq!(entities[1].entity_type, "LOCATION");

    let phrases = client.get_key_phrases("analytical engine").await.unwrap();
    assert_eq!(phrases.len(), 1);
    assert_eq!(phrases[0].phrase, "analytical engine");

    let languages = client.get_dominant_language("hello there").await.unwrap();
    assert_eq!(languages[0].language_code, "en");
    assert_eq!(languages[0].score, 0.98);

    assert_eq!(stub.call_count(), 3);
}

#[tokio::test]
async fn test_empty_single_item_lists() {
    let (client, _) = client_with(
        StubComprehend::new()
            .with_entities(Vec::new())
            .with_key_phrases(Vec::new()),
    );

    let entities = client.get_entities("nothing here").await.unwrap();
    assert!(entities.is_empty());
    let phrases = client.get_key_phrases("nothing here").await.unwrap();
    assert!(phrases.is_empty());
}

/// Language detection never forwards the configured language code
#[tokio::test]
async fn test_language_detection_sends_no_language_code() {
    let (client, stub) = client_with(
        StubComprehend::new()
            .with_languages(vec![RemoteLanguage::new("fr", 0.9)])
            .with_language_batch(BatchOutput::new(
                vec![LanguageItem {
                    index: Some(0),
                    languages: vec![RemoteLanguage::new("fr", 0.9)],
                }],
                Vec::new(),
            )),
    );

    client.get_dominant_language("bonjour").await.unwrap();
    client.get_language_batch(&texts(1)).await.unwrap();

    let calls = stub.calls();
    assert_eq!(calls.len(), 2);
    assert!(calls.iter().all(|c| c.language_code.is_none()));
    assert_eq!(calls[1].operation, "BatchDetectDominantLanguage");
}

/// Indices {1: success, 3: error} come back exactly as reported
#[tokio::test]
async fn test_batch_partial_failure() {
    let output = BatchOutput::new(
        vec![sentiment_at(1, "POSITIVE")],
        vec![RemoteItemError::new(3, "TEXT_SIZE_LIMIT_EXCEEDED", "long")],
    );
    let (client, _) = client_with(StubComprehend::new().with_sentiment_batch(output));

    let input = texts(4);
    let response = client.get_sentiment_batch(&input).await.unwrap();

    assert_eq!(response.items.len(), 1);
    assert_eq!(response.items[0].index, 1);
    assert_eq!(response.items[0].payload.class, "POSITIVE");
    assert_eq!(response.errors.len(), 1);
    assert_eq!(response.errors[0].index, 3);
    assert_eq!(response.errors[0].message, "long");

    for missing in [0, 2] {
        assert!(response.item(missing).is_none());
        assert!(response.error(missing).is_none());
    }
}

/// Successes plus failures never exceed the input, and indices stay in range
#[tokio::test]
async fn test_batch_indices_within_input() {
    let output = BatchOutput::new(
        vec![
            EntitiesItem {
                index: Some(0),
                entities: vec![RemoteEntity::new("Amazon", "ORGANIZATION", 0.93)],
            },
            EntitiesItem {
                index: Some(2),
                entities: Vec::new(),
            },
        ],
        vec![RemoteItemError::new(1, "UNSUPPORTED_LANGUAGE", "bad lang")],
    );
    let (client, stub) = client_with(StubComprehend::new().with_entities_batch(output));

    let input = texts(3);
    let response = client.get_entities_batch(&input).await.unwrap();

    assert!(response.len() <= input.len());
    assert!(response.items.iter().all(|i| i.index < input.len()));
    assert!(response.errors.iter().all(|e| e.index < input.len()));
    assert_eq!(response.item(0).map(|e| e[0].text.as_str()), Some("Amazon"));
    assert_eq!(
        response.error(1).and_then(|e| e.code.as_deref()),
        Some("UNSUPPORTED_LANGUAGE")
    );

    let calls = stub.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].texts, input);
}

/// Index 2 with two phrases yields one item holding both
#[tokio::test]
async fn test_key_phrase_batch_aggregates_per_index() {
    let output = BatchOutput::new(
        vec![
            KeyPhrasesItem {
                index: Some(0),
                key_phrases: vec![RemoteKeyPhrase::new("baz", 0.7)],
            },
            KeyPhrasesItem {
                index: Some(2),
                key_phrases: vec![
                    RemoteKeyPhrase::new("foo", 0.9),
                    RemoteKeyPhrase::new("bar", 0.8),
                ],
            },
        ],
        Vec::new(),
    );
    let (client, _) = client_with(StubComprehend::new().with_key_phrases_batch(output));

    let response = client.get_key_phrases_batch(&texts(3)).await.unwrap();

    assert_eq!(response.items.len(), 2);
    let at_two: Vec<_> = response.items.iter().filter(|i| i.index == 2).collect();
    assert_eq!(at_two.len(), 1);
    let phrases: Vec<_> = at_two[0]
        .payload
        .iter()
        .map(|p| p.phrase.as_str())
        .collect();
    assert_eq!(phrases, vec!["foo", "bar"]);
}

#[tokio::test]
async fn test_language_batch_aggregates_per_index() {
    let output = BatchOutput::new(
        vec![LanguageItem {
            index: Some(1),
            languages: vec![
                RemoteLanguage::new("en", 0.6),
                RemoteLanguage::new("es", 0.35),
            ],
        }],
        vec![RemoteItemError::new(0, "INTERNAL_SERVER_ERROR", "internal")],
    );
    let (client, _) = client_with(StubComprehend::new().with_language_batch(output));

    let response = client.get_language_batch(&texts(2)).await.unwrap();

    assert_eq!(response.items.len(), 1);
    assert_eq!(response.items[0].payload.len(), 2);
    assert_eq!(response.errors[0].index, 0);
}

/// A failed request yields an error and no batch items at all
#[tokio::test]
async fn test_transport_failure_returns_error() {
    let output = BatchOutput::new(vec![sentiment_at(0, "NEUTRAL")], Vec::new());
    let (client, stub) = client_with(
        StubComprehend::new()
            .with_sentiment_batch(output)
            .failing("ThrottlingException: Rate exceeded"),
    );

    let err = client.get_sentiment_batch(&texts(2)).await.unwrap_err();
    assert_eq!(
        err,
        Error::Remote("ThrottlingException: Rate exceeded".to_string())
    );

    assert!(client.get_sentiment("hi").await.unwrap_err().is_remote());
    assert!(client.get_entities("hi").await.is_err());
    assert!(client.get_key_phrases_batch(&texts(1)).await.is_err());
    assert!(client.get_language_batch(&texts(1)).await.is_err());

    assert_eq!(stub.call_count(), 5);
}

/// A declared-present field that is absent fails the call instead of defaulting
#[tokio::test]
async fn test_missing_field_fails_call() {
    let output = BatchOutput::new(
        vec![
            sentiment_at(0, "POSITIVE"),
            SentimentItem {
                index: Some(1),
                sentiment: None,
                sentiment_score: Some(RemoteSentimentScore::new(0.0, 0.0, 0.0, 1.0)),
            },
        ],
        Vec::new(),
    );
    let (client, _) = client_with(StubComprehend::new().with_sentiment_batch(output));

    let err = client.get_sentiment_batch(&texts(2)).await.unwrap_err();
    assert_eq!(err, Error::MissingField { field: "Sentiment" });
}

/// Indices the service reports past the end of the input fail the call
#[tokio::test]
async fn test_batch_index_past_input_fails_call() {
    let output = BatchOutput::new(
        vec![KeyPhrasesItem {
            index: Some(7),
            key_phrases: vec![RemoteKeyPhrase::new("foo", 0.9)],
        }],
        vec![RemoteItemError::new(9, "INTERNAL_SERVER_ERROR", "boom")],
    );
    let (client, stub) = client_with(StubComprehend::new().with_key_phrases_batch(output));

    let err = client.get_key_phrases_batch(&texts(2)).await.unwrap_err();
    assert!(matches!(err, Error::InvalidResponse(_)));
    assert_eq!(stub.call_count(), 1);
}

/// Mapped scores serialize back to the exact same bits
#[tokio::test]
async fn test_scores_round_trip_through_json() {
    let odd = f64::from(0.987_654_3_f32);
    let score = RemoteSentimentScore::new(odd, 0.1 + 0.2, 1.0 / 7.0, 2.5e-17);
    let stub = StubComprehend::new().with_sentiment(SentimentOutput {
        sentiment: Some("MIXED".to_string()),
        sentiment_score: Some(score),
    });
    let (client, _) = client_with(stub);

    let sentiment = client.get_sentiment("meh").await.unwrap();
    let json = serde_json::to_string(&sentiment).unwrap();
    let back: comprehend_client::Sentiment = serde_json::from_str(&json).unwrap();

    assert_eq!(back.score.mixed.to_bits(), odd.to_bits());
    assert_eq!(back.score.negative.to_bits(), (0.1_f64 + 0.2).to_bits());
    assert_eq!(back.score.positive.to_bits(), (1.0_f64 / 7.0).to_bits());
    assert_eq!(back.score.neutral.to_bits(), 2.5e-17_f64.to_bits());
}

/// One client shared across tasks, one request per call
#[tokio::test]
async fn test_client_shared_across_tasks() {
    let (client, stub) = client_with(
        StubComprehend::new().with_key_phrases(vec![RemoteKeyPhrase::new("shared", 0.5)]),
    );

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let client = client.clone();
            let text = format!("text {}", i);
            tokio::spawn(async move { client.get_key_phrases(&text).await })
        })
        .collect();

    for handle in handles {
        let phrases = handle.await.unwrap().unwrap();
        assert_eq!(phrases[0].phrase, "shared");
    }

    assert_eq!(stub.call_count(), 8);
}
