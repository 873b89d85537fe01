//! Pipeline orchestration.
//!
//! Loader → schema reconciliation → merge → derived fields → aggregates →
//! chart specs, each stage a pure transformation of its predecessor's
//! output. A run either fails fatally before any chart spec exists or
//! produces the complete catalogue.

use redcast_core::{AppConfig, JoinKeyPolicy};

use crate::chart::{self, ChartSpec};
use crate::error::PipelineError;
use crate::types::{PostRecord, ReconciledRecord, SentimentRecord};
use crate::{derive, loader, merge, reconcile};

/// Run the full pipeline once: load both sources and build the chart
/// specification catalogue for the renderer.
///
/// # Errors
///
/// Returns [`PipelineError`] when either source cannot be read or fails the
/// schema check. Per-value parse failures and per-view data shortfalls are
/// absorbed downstream and never abort the run.
pub fn run(config: &AppConfig) -> Result<Vec<ChartSpec>, PipelineError> {
    tracing::info!(
        posts = %config.posts_path.display(),
        sentiment = %config.sentiment_path.display(),
        join_key = %config.join_key,
        "starting pipeline run"
    );

    let posts = loader::load_posts(&config.posts_path)?;
    let annotations = loader::load_sentiment(&config.sentiment_path)?;
    Ok(build_from_records(
        posts,
        annotations,
        config.join_key,
        config.top_n,
    ))
}

/// Loader-free tail of the pipeline, for callers that already hold the two
/// record sets.
#[must_use]
pub fn build_from_records(
    posts: Vec<PostRecord>,
    annotations: Vec<SentimentRecord>,
    policy: JoinKeyPolicy,
    top_n: usize,
) -> Vec<ChartSpec> {
    let records = reconcile_records(posts, annotations, policy);
    chart::build_chart_specs(&records, top_n)
}

/// Reconcile the two sources into the unified analytical record set:
/// resolve the join key, drop shadowing post-side columns, merge with
/// left-outer semantics, and back-fill the derived `viral` flag.
#[must_use]
pub fn reconcile_records(
    posts: Vec<PostRecord>,
    annotations: Vec<SentimentRecord>,
    policy: JoinKeyPolicy,
) -> Vec<ReconciledRecord> {
    let key = reconcile::resolve_join_key(policy, &posts, &annotations);
    let posts = reconcile::drop_shadowed_columns(posts);
    let merged = merge::merge(&posts, &annotations, key);
    tracing::debug!(records = merged.len(), "reconciled record set built");
    derive::resolve_viral(merged)
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod pipeline_test;
