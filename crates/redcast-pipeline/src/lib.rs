//! Reconciliation and derived-metrics pipeline for RedCast.
//!
//! Ingests the post and sentiment CSV sources, reconciles them into one
//! analytical record set (resolving join-key and column-name conflicts
//! between source revisions), derives missing fields, computes grouped
//! aggregates, and emits a fixed catalogue of chart specifications for an
//! external renderer. Each stage is a pure transformation of its
//! predecessor's output; the whole pipeline runs once per process.

pub mod aggregate;
pub mod chart;
pub mod derive;
pub mod error;
pub mod loader;
pub mod merge;
pub mod pipeline;
pub mod reconcile;
pub mod types;

pub use chart::{ChartData, ChartKind, ChartSpec, ChartStatus};
pub use error::PipelineError;
pub use pipeline::run;
pub use reconcile::JoinKey;
pub use types::{PostRecord, ReconciledRecord, SentimentRecord};
