//! Grouped statistics over the reconciled record set.
//!
//! All date-grouped aggregates key on the calendar date only and exclude
//! records whose date failed to parse; those records still count for
//! aggregates that do not group by date (e.g. top-N by score).

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::types::ReconciledRecord;

/// Mean sentiment score for one calendar date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySentiment {
    pub date: NaiveDate,
    pub mean_score: f64,
}

/// Post count for one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyVolume {
    pub date: NaiveDate,
    pub count: usize,
}

/// Joint per-date view: post density plus optional mean sentiment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyOverview {
    pub date: NaiveDate,
    pub count: usize,
    /// `None` when no record on this date carried a sentiment score.
    pub mean_score: Option<f64>,
}

/// Mean `sentiment_score` per date, skipping null scores entirely — a null
/// is missing data, not a zero. Dates where every score is null are omitted.
#[must_use]
pub fn daily_mean_sentiment(records: &[ReconciledRecord]) -> Vec<DailySentiment> {
    let mut by_date: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();
    for record in records {
        let (Some(date), Some(score)) = (record.date, record.sentiment_score) else {
            continue;
        };
        let entry = by_date.entry(date).or_insert((0.0, 0));
        entry.0 += score;
        entry.1 += 1;
    }

    by_date
        .into_iter()
        .map(|(date, (sum, count))| {
            #[allow(clippy::cast_precision_loss)]
            let mean_score = sum / count as f64;
            DailySentiment { date, mean_score }
        })
        .collect()
}

/// Post count per date, counting every record with a parsed date regardless
/// of sentiment availability.
#[must_use]
pub fn daily_volume(records: &[ReconciledRecord]) -> Vec<DailyVolume> {
    let mut by_date: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for record in records {
        if let Some(date) = record.date {
            *by_date.entry(date).or_insert(0) += 1;
        }
    }

    by_date
        .into_iter()
        .map(|(date, count)| DailyVolume { date, count })
        .collect()
}

/// Top `n` records by score, descending. The sort is stable, so ties keep
/// their original input order. Records without a score are excluded; records
/// without a date are not (this aggregate does not group by date).
#[must_use]
pub fn top_by_score(records: &[ReconciledRecord], n: usize) -> Vec<ReconciledRecord> {
    let mut scored: Vec<&ReconciledRecord> =
        records.iter().filter(|r| r.score.is_some()).collect();
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.into_iter().take(n).cloned().collect()
}

/// Joint per-date aggregate for the combined density/sentiment view. Every
/// date with at least one post appears; the mean is `None` where no
/// sentiment score exists for that date.
#[must_use]
pub fn daily_overview(records: &[ReconciledRecord]) -> Vec<DailyOverview> {
    let volumes = daily_volume(records);
    let sentiment: BTreeMap<NaiveDate, f64> = daily_mean_sentiment(records)
        .into_iter()
        .map(|d| (d.date, d.mean_score))
        .collect();

    volumes
        .into_iter()
        .map(|v| DailyOverview {
            date: v.date,
            count: v.count,
            mean_score: sentiment.get(&v.date).copied(),
        })
        .collect()
}

#[cfg(test)]
#[path = "aggregate_test.rs"]
mod aggregate_test;
