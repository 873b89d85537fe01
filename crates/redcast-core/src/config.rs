use crate::app_config::{AppConfig, JoinKeyPolicy};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if values are present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if values are present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let posts_path = PathBuf::from(or_default("REDCAST_POSTS_PATH", "./data/reddit_data.csv"));
    let sentiment_path = PathBuf::from(or_default(
        "REDCAST_SENTIMENT_PATH",
        "./data/sentiment_data.csv",
    ));
    let join_key = parse_join_key_policy(&or_default("REDCAST_JOIN_KEY", "auto"))?;
    let top_n = parse_usize("REDCAST_TOP_N", "10")?;
    let log_level = or_default("REDCAST_LOG_LEVEL", "info");

    Ok(AppConfig {
        posts_path,
        sentiment_path,
        join_key,
        top_n,
        log_level,
    })
}

/// Parse a string into a `JoinKeyPolicy` variant.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for unrecognized values — a silently
/// corrected join key would hide a materially different merge behavior.
pub fn parse_join_key_policy(s: &str) -> Result<JoinKeyPolicy, ConfigError> {
    match s {
        "auto" => Ok(JoinKeyPolicy::Auto),
        "title" => Ok(JoinKeyPolicy::Title),
        "date" => Ok(JoinKeyPolicy::Date),
        "title-date" => Ok(JoinKeyPolicy::TitleAndDate),
        other => Err(ConfigError::InvalidEnvVar {
            var: "REDCAST_JOIN_KEY".to_string(),
            reason: format!("unknown join key `{other}` (expected auto|title|date|title-date)"),
        }),
    }
}
