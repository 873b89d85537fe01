//! Chart specification builder.
//!
//! Turns the reconciled record set into the fixed catalogue of analytical
//! views consumed by the external renderer. Every view is checked for data
//! sufficiency with the same predicate — its grouping or coloring field must
//! carry at least one non-null value — and degrades to an explicit `no_data`
//! placeholder instead of an empty plot. Views are built independently: one
//! insufficient view never suppresses the others.

use chrono::NaiveDate;
use serde::Serialize;

use crate::aggregate;
use crate::types::ReconciledRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Line,
    Bar,
    Histogram,
    Scatter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartStatus {
    Ok,
    NoData,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeriesPoint {
    pub date: NaiveDate,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub x: i64,
    pub y: i64,
    /// Coloring group; `None` for rows without a sentiment label.
    pub group: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    pub title: String,
    pub score: i64,
    pub num_comments: Option<i64>,
    pub sentiment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewPoint {
    pub date: NaiveDate,
    pub count: usize,
    pub mean_score: Option<f64>,
}

/// Ready-to-plot payload. `Empty` is reserved for `no_data` placeholders.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChartData {
    Empty,
    TimeSeries { points: Vec<TimeSeriesPoint> },
    Categories { bars: Vec<CategoryCount> },
    Scatter { points: Vec<ScatterPoint> },
    Ranked { entries: Vec<RankedEntry> },
    Overview { points: Vec<OverviewPoint> },
}

impl ChartData {
    /// Number of plottable points/bars/entries in the payload.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            ChartData::Empty => 0,
            ChartData::TimeSeries { points } => points.len(),
            ChartData::Categories { bars } => bars.len(),
            ChartData::Scatter { points } => points.len(),
            ChartData::Ranked { entries } => entries.len(),
            ChartData::Overview { points } => points.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One analytical view, ready for the renderer.
///
/// Invariant: `status == NoData` implies the payload is empty, and the
/// renderer shows an explicit placeholder for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub label: String,
    pub kind: ChartKind,
    pub status: ChartStatus,
    pub data: ChartData,
}

impl ChartSpec {
    /// Placeholder spec for a view whose required field is absent or all-null.
    #[must_use]
    pub fn no_data(label: &str, kind: ChartKind) -> Self {
        Self {
            label: label.to_string(),
            kind,
            status: ChartStatus::NoData,
            data: ChartData::Empty,
        }
    }

    /// Populated spec, degrading to [`ChartSpec::no_data`] if the built
    /// payload turned out empty (e.g. sentiment exists only on undated rows
    /// for a date-grouped view).
    fn from_data(label: &str, kind: ChartKind, data: ChartData) -> Self {
        if data.is_empty() {
            return Self::no_data(label, kind);
        }
        Self {
            label: label.to_string(),
            kind,
            status: ChartStatus::Ok,
            data,
        }
    }
}

/// The one data-sufficiency rule every view applies: the view's required
/// field must have at least one non-null value across the reconciled set.
fn field_has_value<F>(records: &[ReconciledRecord], has_field: F) -> bool
where
    F: Fn(&ReconciledRecord) -> bool,
{
    records.iter().any(has_field)
}

/// Build the full, ordered catalogue of chart specs.
///
/// `top_n` bounds the ranked view. The output order is fixed and matches the
/// renderer's tab order.
#[must_use]
pub fn build_chart_specs(records: &[ReconciledRecord], top_n: usize) -> Vec<ChartSpec> {
    let specs = vec![
        sentiment_over_time(records),
        volume_over_time(records),
        score_vs_comments(records),
        sentiment_distribution(records),
        virality_distribution(records),
        top_posts(records, top_n),
        daily_overview(records),
    ];

    let no_data = specs
        .iter()
        .filter(|s| s.status == ChartStatus::NoData)
        .count();
    tracing::info!(
        views = specs.len(),
        no_data,
        "built chart specification catalogue"
    );
    specs
}

fn sentiment_over_time(records: &[ReconciledRecord]) -> ChartSpec {
    let label = "Sentiment Over Time";
    if !field_has_value(records, |r| r.sentiment_score.is_some()) {
        return ChartSpec::no_data(label, ChartKind::Line);
    }
    let points = aggregate::daily_mean_sentiment(records)
        .into_iter()
        .map(|d| TimeSeriesPoint {
            date: d.date,
            value: d.mean_score,
        })
        .collect();
    ChartSpec::from_data(label, ChartKind::Line, ChartData::TimeSeries { points })
}

fn volume_over_time(records: &[ReconciledRecord]) -> ChartSpec {
    let label = "Post Volume";
    if !field_has_value(records, |r| r.date.is_some()) {
        return ChartSpec::no_data(label, ChartKind::Bar);
    }
    let points = aggregate::daily_volume(records)
        .into_iter()
        .map(|d| {
            #[allow(clippy::cast_precision_loss)]
            let value = d.count as f64;
            TimeSeriesPoint {
                date: d.date,
                value,
            }
        })
        .collect();
    ChartSpec::from_data(label, ChartKind::Bar, ChartData::TimeSeries { points })
}

fn score_vs_comments(records: &[ReconciledRecord]) -> ChartSpec {
    let label = "Score vs Comments";
    if !field_has_value(records, |r| r.sentiment.is_some()) {
        return ChartSpec::no_data(label, ChartKind::Scatter);
    }
    let points = records
        .iter()
        .filter_map(|r| {
            let (x, y) = (r.score?, r.num_comments?);
            Some(ScatterPoint {
                x,
                y,
                group: r.sentiment.clone(),
            })
        })
        .collect();
    ChartSpec::from_data(label, ChartKind::Scatter, ChartData::Scatter { points })
}

fn sentiment_distribution(records: &[ReconciledRecord]) -> ChartSpec {
    let label = "Sentiment Breakdown";
    if !field_has_value(records, |r| r.sentiment.is_some()) {
        return ChartSpec::no_data(label, ChartKind::Histogram);
    }
    let bars = count_categories(records, |r| r.sentiment.clone());
    ChartSpec::from_data(label, ChartKind::Histogram, ChartData::Categories { bars })
}

fn virality_distribution(records: &[ReconciledRecord]) -> ChartSpec {
    let label = "Virality Analysis";
    if !field_has_value(records, |r| r.viral.is_some()) {
        return ChartSpec::no_data(label, ChartKind::Histogram);
    }
    let bars = count_categories(records, |r| {
        r.viral
            .map(|v| if v { "viral" } else { "not viral" }.to_string())
    });
    ChartSpec::from_data(label, ChartKind::Histogram, ChartData::Categories { bars })
}

fn top_posts(records: &[ReconciledRecord], n: usize) -> ChartSpec {
    let label = "Top Posts";
    if !field_has_value(records, |r| r.score.is_some()) {
        return ChartSpec::no_data(label, ChartKind::Bar);
    }
    let entries = aggregate::top_by_score(records, n)
        .into_iter()
        .filter_map(|r| {
            Some(RankedEntry {
                title: r.title,
                score: r.score?,
                num_comments: r.num_comments,
                sentiment: r.sentiment,
            })
        })
        .collect();
    ChartSpec::from_data(label, ChartKind::Bar, ChartData::Ranked { entries })
}

fn daily_overview(records: &[ReconciledRecord]) -> ChartSpec {
    let label = "Daily Overview";
    if !field_has_value(records, |r| r.date.is_some()) {
        return ChartSpec::no_data(label, ChartKind::Line);
    }
    let points = aggregate::daily_overview(records)
        .into_iter()
        .map(|d| OverviewPoint {
            date: d.date,
            count: d.count,
            mean_score: d.mean_score,
        })
        .collect();
    ChartSpec::from_data(label, ChartKind::Line, ChartData::Overview { points })
}

/// Count occurrences per category value, in first-seen order. Null values
/// are skipped, matching the `notna` filter the distributions always applied.
fn count_categories<F>(records: &[ReconciledRecord], category: F) -> Vec<CategoryCount>
where
    F: Fn(&ReconciledRecord) -> Option<String>,
{
    let mut bars: Vec<CategoryCount> = Vec::new();
    for record in records {
        let Some(value) = category(record) else {
            continue;
        };
        match bars.iter_mut().find(|b| b.category == value) {
            Some(bar) => bar.count += 1,
            None => bars.push(CategoryCount {
                category: value,
                count: 1,
            }),
        }
    }
    bars
}

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;
