//! Result mapping
//!
//! Pure conversions from the service's nullable response shapes into the
//! normalized types. A field the service declares present but leaves out is
//! reported as [`Error::MissingField`] for the whole call; nothing is
//! defaulted to zero.

use comprehend_core::{
    Entity, Error, KeyPhrase, LanguageGuess, RemoteEntity, RemoteKeyPhrase, RemoteLanguage,
    RemoteSentimentScore, Result, Sentiment, SentimentOutput, SentimentScore,
};

fn required<T>(value: Option<T>, field: &'static str) -> Result<T> {
    value.ok_or_else(|| Error::missing(field))
}

/// Convert a service-reported index into an input position
pub fn map_index(index: Option<i32>) -> Result<usize> {
    let index = required(index, "Index")?;
    if index < 0 {
        let message = format!("negative batch index {}", index);
        return Err(Error::InvalidResponse(message));
    }
    Ok(index as usize)
}

pub fn map_sentiment_score(score: Option<RemoteSentimentScore>) -> Result<SentimentScore> {
    let score = required(score, "SentimentScore")?;
    Ok(SentimentScore {
        mixed: required(score.mixed, "SentimentScore.Mixed")?,
        negative: required(score.negative, "SentimentScore.Negative")?,
        positive: required(score.positive, "SentimentScore.Positive")?,
        neutral: required(score.neutral, "SentimentScore.Neutral")?,
    })
}

pub fn map_sentiment(output: SentimentOutput) -> Result<Sentiment> {
    Ok(Sentiment {
        class: required(output.sentiment, "Sentiment")?,
        score: map_sentiment_score(output.sentiment_score)?,
    })
}

pub fn map_entity(entity: RemoteEntity) -> Result<Entity> {
    Ok(Entity {
        text: required(entity.text, "Entity.Text")?,
        entity_type: required(entity.entity_type, "Entity.Type")?,
        score: required(entity.score, "Entity.Score")?,
    })
}

pub fn map_entities(entities: Vec<RemoteEntity>) -> Result<Vec<Entity>> {
    entities.into_iter().map(map_entity).collect()
}

pub fn map_key_phrase(phrase: RemoteKeyPhrase) -> Result<KeyPhrase> {
    Ok(KeyPhrase {
        phrase: required(phrase.text, "KeyPhrase.Text")?,
        score: required(phrase.score, "KeyPhrase.Score")?,
    })
}

pub fn map_key_phrases(phrases: Vec<RemoteKeyPhrase>) -> Result<Vec<KeyPhrase>> {
    phrases.into_iter().map(map_key_phrase).collect()
}

pub fn map_language(language: RemoteLanguage) -> Result<LanguageGuess> {
    Ok(LanguageGuess {
        language_code: required(language.language_code, "DominantLanguage.LanguageCode")?,
        score: required(language.score, "DominantLanguage.Score")?,
    })
}

pub fn map_languages(languages: Vec<RemoteLanguage>) -> Result<Vec<LanguageGuess>> {
    languages.into_iter().map(map_language).collect()
}
