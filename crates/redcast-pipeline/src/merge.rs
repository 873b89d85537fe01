//! Left-outer merge of the post and sentiment sources.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::reconcile::JoinKey;
use crate::types::{PostRecord, ReconciledRecord, SentimentRecord};

/// A concrete join-key value. Rows whose key fields are null (or, for
/// titles, empty) have no key and never participate in matching.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum KeyValue {
    Title(String),
    Date(NaiveDate),
    TitleAndDate(String, NaiveDate),
}

fn post_key(post: &PostRecord, key: JoinKey) -> Option<KeyValue> {
    match key {
        JoinKey::Title => {
            (!post.title.is_empty()).then(|| KeyValue::Title(post.title.clone()))
        }
        JoinKey::Date => post.date.map(KeyValue::Date),
        JoinKey::TitleAndDate => match (&post.title, post.date) {
            (title, Some(date)) if !title.is_empty() => {
                Some(KeyValue::TitleAndDate(title.clone(), date))
            }
            _ => None,
        },
    }
}

fn annotation_key(annotation: &SentimentRecord, key: JoinKey) -> Option<KeyValue> {
    let title = annotation.title.as_deref().filter(|t| !t.is_empty());
    match key {
        JoinKey::Title => title.map(|t| KeyValue::Title(t.to_string())),
        JoinKey::Date => annotation.date.map(KeyValue::Date),
        JoinKey::TitleAndDate => match (title, annotation.date) {
            (Some(t), Some(date)) => Some(KeyValue::TitleAndDate(t.to_string(), date)),
            _ => None,
        },
    }
}

/// Left-outer join of posts against sentiment annotations on the resolved key.
///
/// The sentiment side is deduplicated first — the first occurrence of each
/// key by input order wins — so duplicate annotation keys can never fan a
/// post row out into several reconciled rows. Every post row yields exactly
/// one [`ReconciledRecord`], matched or not.
#[must_use]
pub fn merge(
    posts: &[PostRecord],
    annotations: &[SentimentRecord],
    key: JoinKey,
) -> Vec<ReconciledRecord> {
    let mut by_key: HashMap<KeyValue, &SentimentRecord> = HashMap::new();
    let mut duplicates = 0_usize;
    for annotation in annotations {
        let Some(key_value) = annotation_key(annotation, key) else {
            continue;
        };
        if by_key.contains_key(&key_value) {
            duplicates += 1;
        } else {
            by_key.insert(key_value, annotation);
        }
    }
    if duplicates > 0 {
        tracing::debug!(
            key = %key,
            duplicates,
            "dropped duplicate sentiment keys before merge"
        );
    }

    posts
        .iter()
        .map(|post| {
            let reconciled = ReconciledRecord::from_post(post);
            match post_key(post, key).and_then(|k| by_key.get(&k)) {
                Some(annotation) => reconciled.with_sentiment(annotation),
                None => reconciled,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "merge_test.rs"]
mod merge_test;
