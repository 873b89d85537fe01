use std::path::PathBuf;

/// Join-key policy for reconciling the post and sentiment sources.
///
/// The upstream data revisions never settled on a merge key (title only,
/// date only, or both), and the choice changes merge behavior materially:
/// joining on `date` alone risks fan-out when many posts share a day. The
/// policy is therefore an explicit configuration value rather than a hidden
/// default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKeyPolicy {
    /// Prefer `title` when both sides carry one; otherwise fall back to `date`.
    Auto,
    /// Always join on `title`.
    Title,
    /// Always join on calendar `date`.
    Date,
    /// Composite `(title, date)` key for stricter matching.
    TitleAndDate,
}

impl std::fmt::Display for JoinKeyPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JoinKeyPolicy::Auto => write!(f, "auto"),
            JoinKeyPolicy::Title => write!(f, "title"),
            JoinKeyPolicy::Date => write!(f, "date"),
            JoinKeyPolicy::TitleAndDate => write!(f, "title-date"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub posts_path: PathBuf,
    pub sentiment_path: PathBuf,
    pub join_key: JoinKeyPolicy,
    pub top_n: usize,
    pub log_level: String,
}
