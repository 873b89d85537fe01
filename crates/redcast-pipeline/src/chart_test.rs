use chrono::NaiveDate;

use super::*;

fn day(d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(2024, 1, d)
}

fn record(
    title: &str,
    date: Option<NaiveDate>,
    score: Option<i64>,
    sentiment: Option<&str>,
    sentiment_score: Option<f64>,
    viral: Option<bool>,
) -> ReconciledRecord {
    ReconciledRecord {
        title: title.to_string(),
        date,
        score,
        num_comments: Some(3),
        viral,
        sentiment: sentiment.map(str::to_string),
        sentiment_score,
    }
}

fn full_set() -> Vec<ReconciledRecord> {
    vec![
        record("A", day(1), Some(50), Some("positive"), Some(0.8), Some(true)),
        record("B", day(1), Some(10), None, None, Some(false)),
        record("C", day(2), Some(30), Some("negative"), Some(-0.4), Some(false)),
    ]
}

fn spec_by_label<'a>(specs: &'a [ChartSpec], label: &str) -> &'a ChartSpec {
    specs
        .iter()
        .find(|s| s.label == label)
        .unwrap_or_else(|| panic!("missing view `{label}`"))
}

#[test]
fn catalogue_has_fixed_order_and_size() {
    let specs = build_chart_specs(&full_set(), 10);
    let labels: Vec<&str> = specs.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "Sentiment Over Time",
            "Post Volume",
            "Score vs Comments",
            "Sentiment Breakdown",
            "Virality Analysis",
            "Top Posts",
            "Daily Overview",
        ]
    );
}

#[test]
fn sufficient_data_yields_ok_everywhere() {
    let specs = build_chart_specs(&full_set(), 10);
    assert!(specs.iter().all(|s| s.status == ChartStatus::Ok));
}

#[test]
fn no_data_implies_empty_payload() {
    let records = vec![record("A", day(1), Some(10), None, None, None)];
    let specs = build_chart_specs(&records, 10);
    for spec in &specs {
        if spec.status == ChartStatus::NoData {
            assert!(spec.data.is_empty(), "non-empty no_data view `{}`", spec.label);
        }
    }
}

#[test]
fn missing_sentiment_only_affects_sentiment_views() {
    // Sentiment source empty: sentiment-backed views degrade, the rest stay ok.
    let records = vec![
        record("A", day(1), Some(10), None, None, Some(false)),
        record("B", day(2), Some(20), None, None, Some(true)),
    ];
    let specs = build_chart_specs(&records, 10);
    assert_eq!(
        spec_by_label(&specs, "Sentiment Over Time").status,
        ChartStatus::NoData
    );
    assert_eq!(
        spec_by_label(&specs, "Score vs Comments").status,
        ChartStatus::NoData
    );
    assert_eq!(
        spec_by_label(&specs, "Sentiment Breakdown").status,
        ChartStatus::NoData
    );
    assert_eq!(spec_by_label(&specs, "Post Volume").status, ChartStatus::Ok);
    assert_eq!(
        spec_by_label(&specs, "Virality Analysis").status,
        ChartStatus::Ok
    );
    assert_eq!(spec_by_label(&specs, "Top Posts").status, ChartStatus::Ok);
}

#[test]
fn one_valid_value_is_sufficient() {
    let records = vec![
        record("A", day(1), Some(10), Some("positive"), Some(0.1), None),
        record("B", None, None, None, None, None),
    ];
    let spec = sentiment_over_time(&records);
    assert_eq!(spec.status, ChartStatus::Ok);
}

#[test]
fn sentiment_on_undated_rows_degrades_time_series() {
    // The sufficiency predicate passes (a score exists), but the date-grouped
    // payload comes out empty, which still must not render as an empty plot.
    let records = vec![record("A", None, Some(10), Some("positive"), Some(0.5), None)];
    let spec = sentiment_over_time(&records);
    assert_eq!(spec.status, ChartStatus::NoData);
    assert!(spec.data.is_empty());
}

#[test]
fn volume_counts_rows_without_sentiment() {
    let specs = build_chart_specs(&full_set(), 10);
    let ChartData::TimeSeries { points } = &spec_by_label(&specs, "Post Volume").data else {
        panic!("expected time series payload");
    };
    assert_eq!(points.len(), 2);
    assert!((points[0].value - 2.0).abs() < f64::EPSILON);
}

#[test]
fn scatter_groups_by_sentiment_and_keeps_unlabeled_rows() {
    let specs = build_chart_specs(&full_set(), 10);
    let ChartData::Scatter { points } = &spec_by_label(&specs, "Score vs Comments").data else {
        panic!("expected scatter payload");
    };
    assert_eq!(points.len(), 3);
    assert_eq!(points[0].group.as_deref(), Some("positive"));
    assert_eq!(points[1].group, None);
}

#[test]
fn sentiment_breakdown_counts_categories() {
    let records = vec![
        record("A", day(1), Some(1), Some("positive"), Some(0.5), None),
        record("B", day(1), Some(2), Some("positive"), Some(0.7), None),
        record("C", day(1), Some(3), Some("negative"), Some(-0.5), None),
        record("D", day(1), Some(4), None, None, None),
    ];
    let spec = sentiment_distribution(&records);
    let ChartData::Categories { bars } = &spec.data else {
        panic!("expected category payload");
    };
    assert_eq!(
        bars,
        &vec![
            CategoryCount { category: "positive".to_string(), count: 2 },
            CategoryCount { category: "negative".to_string(), count: 1 },
        ]
    );
}

#[test]
fn virality_view_requires_resolved_flag() {
    let records = vec![record("A", day(1), Some(10), None, None, None)];
    assert_eq!(virality_distribution(&records).status, ChartStatus::NoData);

    let records = vec![record("A", day(1), Some(10), None, None, Some(true))];
    assert_eq!(virality_distribution(&records).status, ChartStatus::Ok);
}

#[test]
fn top_posts_respects_limit_and_order() {
    let specs = build_chart_specs(&full_set(), 2);
    let ChartData::Ranked { entries } = &spec_by_label(&specs, "Top Posts").data else {
        panic!("expected ranked payload");
    };
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].title, "A");
    assert_eq!(entries[0].score, 50);
    assert_eq!(entries[1].title, "C");
}

#[test]
fn empty_record_set_yields_all_no_data() {
    let specs = build_chart_specs(&[], 10);
    assert_eq!(specs.len(), 7);
    assert!(specs.iter().all(|s| s.status == ChartStatus::NoData));
}

#[test]
fn chart_spec_serializes_for_the_renderer() {
    let specs = build_chart_specs(&full_set(), 10);
    let json = serde_json::to_value(&specs).unwrap();
    let first = &json[0];
    assert_eq!(first["label"], "Sentiment Over Time");
    assert_eq!(first["kind"], "line");
    assert_eq!(first["status"], "ok");
    assert_eq!(first["data"]["type"], "time_series");

    let placeholder = serde_json::to_value(ChartSpec::no_data("x", ChartKind::Bar)).unwrap();
    assert_eq!(placeholder["status"], "no_data");
    assert_eq!(placeholder["data"]["type"], "empty");
}
