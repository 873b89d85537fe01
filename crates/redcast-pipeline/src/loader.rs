//! CSV ingest for the two raw sources.
//!
//! Each loader resolves columns by header name (case-insensitive), checks the
//! required schema up front, and parses values permissively: an individual
//! date, numeric, or boolean that fails to parse becomes `None` so the record
//! survives for the aggregates that do not need that field. Only source-level
//! problems (unreadable file, missing required column, malformed CSV) are
//! fatal.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::StringRecord;

use crate::error::PipelineError;
use crate::types::{PostRecord, SentimentRecord};

pub(crate) const POSTS_TABLE: &str = "posts";
pub(crate) const SENTIMENT_TABLE: &str = "sentiment";

/// Load the post source from disk.
///
/// # Errors
///
/// Returns [`PipelineError::SourceUnavailable`] if the file cannot be opened,
/// [`PipelineError::SchemaMismatch`] if a required column is absent, and
/// [`PipelineError::Csv`] on a malformed stream.
pub fn load_posts(path: &Path) -> Result<Vec<PostRecord>, PipelineError> {
    let file = File::open(path).map_err(|e| PipelineError::SourceUnavailable {
        table: POSTS_TABLE,
        path: path.to_path_buf(),
        source: e,
    })?;
    load_posts_from_reader(file)
}

/// Load the post source from any reader. Split out from [`load_posts`] so
/// tests can feed in-memory CSV without touching the filesystem.
///
/// # Errors
///
/// Same as [`load_posts`], minus `SourceUnavailable`.
pub fn load_posts_from_reader<R: Read>(reader: R) -> Result<Vec<PostRecord>, PipelineError> {
    let mut csv_reader = csv_reader(reader);
    let header_map = header_map(&mut csv_reader, POSTS_TABLE)?;

    for column in ["title", "date", "score", "num_comments"] {
        if !header_map.contains_key(column) {
            return Err(PipelineError::SchemaMismatch {
                table: POSTS_TABLE,
                column,
            });
        }
    }

    let mut posts = Vec::new();
    for result in csv_reader.records() {
        let record = result.map_err(|e| PipelineError::Csv {
            table: POSTS_TABLE,
            source: e,
        })?;
        posts.push(PostRecord {
            title: cell(&record, &header_map, "title").unwrap_or_default(),
            date: cell(&record, &header_map, "date").and_then(|raw| parse_date(&raw)),
            score: cell(&record, &header_map, "score").and_then(|raw| parse_i64(&raw)),
            num_comments: cell(&record, &header_map, "num_comments")
                .and_then(|raw| parse_i64(&raw)),
            viral: cell(&record, &header_map, "viral").and_then(|raw| parse_bool(&raw)),
            sentiment: cell(&record, &header_map, "sentiment"),
            sentiment_score: cell(&record, &header_map, "sentiment_score")
                .and_then(|raw| parse_f64(&raw)),
        });
    }

    tracing::debug!(rows = posts.len(), "loaded post source");
    Ok(posts)
}

/// Load the sentiment annotation source from disk.
///
/// # Errors
///
/// Same taxonomy as [`load_posts`]. The schema check requires `sentiment` and
/// `sentiment_score`, plus at least one usable join key column (`title` or
/// `date`).
pub fn load_sentiment(path: &Path) -> Result<Vec<SentimentRecord>, PipelineError> {
    let file = File::open(path).map_err(|e| PipelineError::SourceUnavailable {
        table: SENTIMENT_TABLE,
        path: path.to_path_buf(),
        source: e,
    })?;
    load_sentiment_from_reader(file)
}

/// Reader-based variant of [`load_sentiment`], for tests.
///
/// # Errors
///
/// Same as [`load_sentiment`], minus `SourceUnavailable`.
pub fn load_sentiment_from_reader<R: Read>(
    reader: R,
) -> Result<Vec<SentimentRecord>, PipelineError> {
    let mut csv_reader = csv_reader(reader);
    let header_map = header_map(&mut csv_reader, SENTIMENT_TABLE)?;

    if !header_map.contains_key("title") && !header_map.contains_key("date") {
        return Err(PipelineError::SchemaMismatch {
            table: SENTIMENT_TABLE,
            column: "title",
        });
    }
    for column in ["sentiment", "sentiment_score"] {
        if !header_map.contains_key(column) {
            return Err(PipelineError::SchemaMismatch {
                table: SENTIMENT_TABLE,
                column,
            });
        }
    }

    let mut annotations = Vec::new();
    for result in csv_reader.records() {
        let record = result.map_err(|e| PipelineError::Csv {
            table: SENTIMENT_TABLE,
            source: e,
        })?;
        annotations.push(SentimentRecord {
            title: cell(&record, &header_map, "title"),
            date: cell(&record, &header_map, "date").and_then(|raw| parse_date(&raw)),
            sentiment: cell(&record, &header_map, "sentiment"),
            sentiment_score: cell(&record, &header_map, "sentiment_score")
                .and_then(|raw| parse_f64(&raw)),
        });
    }

    tracing::debug!(rows = annotations.len(), "loaded sentiment source");
    Ok(annotations)
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader)
}

/// Map lowercased header names to column indices. First occurrence wins when
/// a header repeats.
fn header_map<R: Read>(
    reader: &mut csv::Reader<R>,
    table: &'static str,
) -> Result<HashMap<String, usize>, PipelineError> {
    let headers = reader
        .headers()
        .map_err(|e| PipelineError::Csv { table, source: e })?;

    let mut map = HashMap::new();
    for (idx, name) in headers.iter().enumerate() {
        map.entry(name.trim().to_lowercase()).or_insert(idx);
    }
    Ok(map)
}

/// Fetch a cell by resolved column name; empty cells become `None`.
fn cell(record: &StringRecord, header_map: &HashMap<String, usize>, name: &str) -> Option<String> {
    let idx = *header_map.get(name)?;
    let raw = record.get(idx)?.trim();
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

/// Permissive date parser covering the formats seen across source revisions.
/// Time-of-day, when present, is discarded.
pub(crate) fn parse_date(raw: &str) -> Option<NaiveDate> {
    const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%m-%Y"];

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return Some(date);
        }
    }
    if let Ok(datetime) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(datetime.date());
    }
    if let Ok(datetime) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(datetime.date_naive());
    }
    None
}

fn parse_i64(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok()
}

fn parse_f64(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok()
}

/// Boolean-like values as they appear in the wild: true/false, 1/0, yes/no.
fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;
