use chrono::NaiveDate;

use super::*;

fn day(d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(2024, 1, d)
}

fn record(
    title: &str,
    date: Option<NaiveDate>,
    score: Option<i64>,
    sentiment_score: Option<f64>,
) -> ReconciledRecord {
    ReconciledRecord {
        title: title.to_string(),
        date,
        score,
        num_comments: Some(0),
        viral: None,
        sentiment: sentiment_score.map(|s| {
            if s >= 0.0 {
                "positive".to_string()
            } else {
                "negative".to_string()
            }
        }),
        sentiment_score,
    }
}

#[test]
fn daily_sentiment_skips_null_scores() {
    let records = vec![
        record("A", day(1), Some(10), Some(0.8)),
        record("B", day(1), Some(20), None),
        record("C", day(2), Some(30), Some(-0.4)),
    ];
    let daily = daily_mean_sentiment(&records);
    assert_eq!(daily.len(), 2);
    // B contributes nothing to the 2024-01-01 mean; null is not zero.
    assert_eq!(daily[0].date, day(1).unwrap());
    assert!((daily[0].mean_score - 0.8).abs() < f64::EPSILON);
    assert!((daily[1].mean_score + 0.4).abs() < f64::EPSILON);
}

#[test]
fn daily_sentiment_omits_all_null_dates() {
    let records = vec![
        record("A", day(1), Some(10), Some(0.5)),
        record("B", day(2), Some(20), None),
    ];
    let daily = daily_mean_sentiment(&records);
    assert_eq!(daily.len(), 1);
    assert_eq!(daily[0].date, day(1).unwrap());
}

#[test]
fn daily_sentiment_averages_multiple_scores() {
    let records = vec![
        record("A", day(1), Some(10), Some(0.6)),
        record("B", day(1), Some(20), Some(0.2)),
    ];
    let daily = daily_mean_sentiment(&records);
    assert!((daily[0].mean_score - 0.4).abs() < 1e-12);
}

#[test]
fn daily_volume_counts_every_dated_record() {
    let records = vec![
        record("A", day(1), Some(10), Some(0.8)),
        record("B", day(1), Some(20), None),
        record("C", day(2), Some(30), None),
        record("D", None, Some(40), None),
    ];
    let daily = daily_volume(&records);
    assert_eq!(daily.len(), 2);
    assert_eq!(daily[0], DailyVolume { date: day(1).unwrap(), count: 2 });
    assert_eq!(daily[1], DailyVolume { date: day(2).unwrap(), count: 1 });
}

#[test]
fn date_grouped_outputs_are_sorted_ascending() {
    let records = vec![
        record("A", day(9), Some(1), Some(0.1)),
        record("B", day(2), Some(2), Some(0.2)),
        record("C", day(5), Some(3), Some(0.3)),
    ];
    let dates: Vec<NaiveDate> = daily_volume(&records).into_iter().map(|d| d.date).collect();
    assert_eq!(dates, vec![day(2).unwrap(), day(5).unwrap(), day(9).unwrap()]);
}

#[test]
fn top_by_score_orders_descending_with_stable_ties() {
    let records = vec![
        record("A", day(1), Some(20), None),
        record("B", day(1), Some(50), None),
        record("C", day(1), Some(20), None),
        record("D", day(1), Some(40), None),
    ];
    let top = top_by_score(&records, 3);
    let titles: Vec<&str> = top.iter().map(|r| r.title.as_str()).collect();
    // A precedes C: equal scores keep input order.
    assert_eq!(titles, vec!["B", "D", "A"]);
}

#[test]
fn top_by_score_retains_records_without_dates() {
    let records = vec![
        record("A", None, Some(99), None),
        record("B", day(1), Some(10), None),
    ];
    let top = top_by_score(&records, 10);
    assert_eq!(top[0].title, "A");
}

#[test]
fn top_by_score_excludes_null_scores() {
    let records = vec![
        record("A", day(1), None, None),
        record("B", day(1), Some(10), None),
    ];
    let top = top_by_score(&records, 10);
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].title, "B");
}

#[test]
fn overview_combines_volume_and_sentiment() {
    let records = vec![
        record("A", day(1), Some(10), Some(0.8)),
        record("B", day(1), Some(20), None),
        record("C", day(2), Some(30), None),
    ];
    let overview = daily_overview(&records);
    assert_eq!(overview.len(), 2);
    assert_eq!(overview[0].count, 2);
    assert_eq!(overview[0].mean_score, Some(0.8));
    // A date with volume but no sentiment still appears, mean absent.
    assert_eq!(overview[1].count, 1);
    assert_eq!(overview[1].mean_score, None);
}

#[test]
fn empty_input_produces_empty_aggregates() {
    let records: Vec<ReconciledRecord> = vec![];
    assert!(daily_mean_sentiment(&records).is_empty());
    assert!(daily_volume(&records).is_empty());
    assert!(top_by_score(&records, 5).is_empty());
    assert!(daily_overview(&records).is_empty());
}
