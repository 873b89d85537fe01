use std::path::PathBuf;

use thiserror::Error;

/// Fatal pipeline failures.
///
/// Only source-level problems abort a run. Per-value parse failures become
/// `None` fields at the point of detection, and per-view data shortfalls
/// become `no_data` chart specs — neither ever surfaces here.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("cannot read {table} source at {path}: {source}")]
    SourceUnavailable {
        table: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{table} source is missing required column `{column}`")]
    SchemaMismatch {
        table: &'static str,
        column: &'static str,
    },

    #[error("malformed CSV in {table} source: {source}")]
    Csv {
        table: &'static str,
        #[source]
        source: csv::Error,
    },
}
