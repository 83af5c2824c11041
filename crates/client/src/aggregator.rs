//! Batch aggregation
//!
//! Splits one raw batch response into index-tagged successes and index-tagged
//! failures. Both lists keep the order the service reported; nothing is
//! re-sorted, renumbered or filled in for indices the service left out.
//!
//! Each result entry becomes exactly one [`BatchItem`] carrying all of that
//! entry's sub-values, so an input with several key phrases yields one item
//! with several phrases, never one item per phrase.
//!
//! Every reported index must address one of the submitted texts; an index
//! outside `0..input_len` fails the call with [`Error::InvalidResponse`].

use comprehend_core::{
    BatchError, BatchItem, BatchOutput, BatchResponse, EntitiesItem, Entity, Error, KeyPhrase,
    KeyPhrasesItem, LanguageGuess, LanguageItem, RemoteItemError, Result, Sentiment, SentimentItem,
    SentimentOutput,
};

use crate::mapper::{map_entities, map_index, map_key_phrases, map_languages, map_sentiment};

/// Aggregate a raw batch response for `input_len` submitted texts
pub fn aggregate<R, T, F>(
    output: BatchOutput<R>,
    input_len: usize,
    map_item: F,
) -> Result<BatchResponse<T>>
where
    F: Fn(R) -> Result<BatchItem<T>>,
{
    let errors = output
        .error_list
        .into_iter()
        .map(|error| {
            let error = map_item_error(error)?;
            check_in_range(error.index, input_len)?;
            Ok(error)
        })
        .collect::<Result<Vec<_>>>()?;

    let items = output
        .result_list
        .into_iter()
        .map(|result| {
            let item = map_item(result)?;
            check_in_range(item.index, input_len)?;
            Ok(item)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(BatchResponse { items, errors })
}

fn check_in_range(index: usize, input_len: usize) -> Result<()> {
    if index < input_len {
        Ok(())
    } else {
        Err(Error::InvalidResponse(format!(
            "batch index {} out of range for {} texts",
            index, input_len
        )))
    }
}

pub fn map_item_error(error: RemoteItemError) -> Result<BatchError> {
    Ok(BatchError {
        index: map_index(error.index)?,
        message: error
            .error_message
            .ok_or_else(|| Error::missing("BatchItemError.ErrorMessage"))?,
        code: error.error_code,
    })
}

pub fn sentiment_item(item: SentimentItem) -> Result<BatchItem<Sentiment>> {
    let index = map_index(item.index)?;
    let sentiment = map_sentiment(SentimentOutput {
        sentiment: item.sentiment,
        sentiment_score: item.sentiment_score,
    })?;
    Ok(BatchItem::new(index, sentiment))
}

pub fn entities_item(item: EntitiesItem) -> Result<BatchItem<Vec<Entity>>> {
    let index = map_index(item.index)?;
    Ok(BatchItem::new(index, map_entities(item.entities)?))
}

pub fn key_phrases_item(item: KeyPhrasesItem) -> Result<BatchItem<Vec<KeyPhrase>>> {
    let index = map_index(item.index)?;
    Ok(BatchItem::new(index, map_key_phrases(item.key_phrases)?))
}

pub fn language_item(item: LanguageItem) -> Result<BatchItem<Vec<LanguageGuess>>> {
    let index = map_index(item.index)?;
    Ok(BatchItem::new(index, map_languages(item.languages)?))
}
