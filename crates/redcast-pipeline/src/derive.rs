//! Back-fill for fields the source is not guaranteed to carry.

use crate::types::ReconciledRecord;

/// Ensure every record carries a `viral` flag.
///
/// When any record already has one, the source is authoritative and nothing
/// is recomputed. Otherwise the flag is derived as `score > median(score)`,
/// with the median computed once over all non-null scores. The comparison is
/// strict, so a score exactly at the median lands on the not-viral side, and
/// records without a score are never viral.
#[must_use]
pub fn resolve_viral(records: Vec<ReconciledRecord>) -> Vec<ReconciledRecord> {
    if records.iter().any(|r| r.viral.is_some()) {
        return records;
    }

    let Some(median) = median_score(&records) else {
        // No scores at all; nothing to partition on.
        return records;
    };
    tracing::debug!(median, "deriving viral flag from score median");

    records
        .into_iter()
        .map(|mut record| {
            record.viral = Some(matches!(record.score, Some(s) if to_f64(s) > median));
            record
        })
        .collect()
}

/// Median over all non-null scores; `None` when every score is null.
fn median_score(records: &[ReconciledRecord]) -> Option<f64> {
    let mut scores: Vec<i64> = records.iter().filter_map(|r| r.score).collect();
    if scores.is_empty() {
        return None;
    }
    scores.sort_unstable();

    let mid = scores.len() / 2;
    if scores.len() % 2 == 1 {
        Some(to_f64(scores[mid]))
    } else {
        Some((to_f64(scores[mid - 1]) + to_f64(scores[mid])) / 2.0)
    }
}

#[allow(clippy::cast_precision_loss)]
fn to_f64(score: i64) -> f64 {
    score as f64
}
