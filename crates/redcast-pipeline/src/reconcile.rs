//! Schema reconciliation between the two sources.
//!
//! Two normalization steps run before any join: resolving which key the merge
//! will use (the source revisions disagreed between `title`, `date`, and a
//! composite of both), and dropping post-side columns that shadow the
//! sentiment source. Both steps are deterministic and idempotent.

use redcast_core::JoinKeyPolicy;

use crate::types::{PostRecord, SentimentRecord};

/// The concrete key a merge will join on, resolved from the configured
/// [`JoinKeyPolicy`] and the data actually present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKey {
    Title,
    Date,
    TitleAndDate,
}

impl std::fmt::Display for JoinKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JoinKey::Title => write!(f, "title"),
            JoinKey::Date => write!(f, "date"),
            JoinKey::TitleAndDate => write!(f, "title-date"),
        }
    }
}

/// Resolve the join key for a merge.
///
/// Explicit policies map directly. `Auto` follows the precedence observed
/// across source revisions: `title` when at least one non-empty title exists
/// on both sides, else `date` when both sides carry a parsed date, else
/// `title` (a vacuous join that still preserves every post row).
#[must_use]
pub fn resolve_join_key(
    policy: JoinKeyPolicy,
    posts: &[PostRecord],
    annotations: &[SentimentRecord],
) -> JoinKey {
    let resolved = match policy {
        JoinKeyPolicy::Title => JoinKey::Title,
        JoinKeyPolicy::Date => JoinKey::Date,
        JoinKeyPolicy::TitleAndDate => JoinKey::TitleAndDate,
        JoinKeyPolicy::Auto => {
            let posts_have_title = posts.iter().any(|p| !p.title.is_empty());
            let annotations_have_title = annotations
                .iter()
                .any(|a| a.title.as_deref().is_some_and(|t| !t.is_empty()));
            let posts_have_date = posts.iter().any(|p| p.date.is_some());
            let annotations_have_date = annotations.iter().any(|a| a.date.is_some());

            if posts_have_title && annotations_have_title {
                JoinKey::Title
            } else if posts_have_date && annotations_have_date {
                JoinKey::Date
            } else {
                JoinKey::Title
            }
        }
    };

    tracing::debug!(policy = %policy, key = %resolved, "resolved join key");
    resolved
}

/// Drop post-side columns that shadow the sentiment source.
///
/// Older post-source revisions already carried `sentiment` /
/// `sentiment_score` columns; joining without clearing them would produce two
/// differently-suffixed copies of each. The sentiment source is authoritative
/// post-merge, so the post-side values are discarded here. Any future field
/// owned by the sentiment source follows the same rule. Idempotent.
#[must_use]
pub fn drop_shadowed_columns(posts: Vec<PostRecord>) -> Vec<PostRecord> {
    posts
        .into_iter()
        .map(|mut post| {
            post.sentiment = None;
            post.sentiment_score = None;
            post
        })
        .collect()
}
