use chrono::NaiveDate;
use serde::Serialize;

/// One row of the post source.
///
/// `score` and `num_comments` are declared required columns, but individual
/// values that fail to parse become `None` rather than aborting the run.
/// The optional `sentiment` / `sentiment_score` fields exist only so that
/// shadowing columns in older source revisions can be dropped explicitly
/// before the merge (see [`crate::reconcile::drop_shadowed_columns`]).
#[derive(Debug, Clone, PartialEq)]
pub struct PostRecord {
    /// Natural join key. Not guaranteed unique.
    pub title: String,
    /// Parsed calendar date; `None` when the raw text was unparseable.
    pub date: Option<NaiveDate>,
    /// Upvote count.
    pub score: Option<i64>,
    pub num_comments: Option<i64>,
    /// Present only in some source revisions; derived post-merge when absent.
    pub viral: Option<bool>,
    pub sentiment: Option<String>,
    pub sentiment_score: Option<f64>,
}

/// One row of the sentiment annotation source.
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentRecord {
    /// Natural join key, when the revision carries it.
    pub title: Option<String>,
    /// Alternate join key.
    pub date: Option<NaiveDate>,
    /// Categorical label from a small closed set (e.g. positive/neutral/negative).
    pub sentiment: Option<String>,
    /// Continuous score, typically in `[-1, 1]`.
    pub sentiment_score: Option<f64>,
}

/// Left-outer join product of one [`PostRecord`] and at most one matching
/// [`SentimentRecord`].
///
/// Invariant: the merge emits exactly one of these per input post row, so
/// sentiment fields are `None` when no annotation matched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReconciledRecord {
    pub title: String,
    pub date: Option<NaiveDate>,
    pub score: Option<i64>,
    pub num_comments: Option<i64>,
    pub viral: Option<bool>,
    pub sentiment: Option<String>,
    pub sentiment_score: Option<f64>,
}

impl ReconciledRecord {
    /// Build the unmatched (sentiment-less) reconciliation of a post row.
    #[must_use]
    pub fn from_post(post: &PostRecord) -> Self {
        Self {
            title: post.title.clone(),
            date: post.date,
            score: post.score,
            num_comments: post.num_comments,
            viral: post.viral,
            sentiment: None,
            sentiment_score: None,
        }
    }

    /// Attach a matched annotation's sentiment fields.
    #[must_use]
    pub fn with_sentiment(mut self, annotation: &SentimentRecord) -> Self {
        self.sentiment = annotation.sentiment.clone();
        self.sentiment_score = annotation.sentiment_score;
        self
    }
}
