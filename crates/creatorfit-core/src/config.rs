use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_limit = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        let value = raw
            .trim()
            .parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })?;
        if value == 0 {
            return Err(ConfigError::Validation(format!(
                "{var} must be at least 1"
            )));
        }
        Ok(value)
    };

    let env = parse_environment(&or_default("CREATORFIT_ENV", "development"));
    let log_level = or_default("CREATORFIT_LOG_LEVEL", "info");
    let roster_path = PathBuf::from(or_default("CREATORFIT_ROSTER_PATH", "./data/roster.json"));

    let hashtag_table_limit = parse_limit("CREATORFIT_HASHTAG_TABLE_LIMIT", "8")?;
    let hashtag_pie_limit = parse_limit("CREATORFIT_HASHTAG_PIE_LIMIT", "6")?;
    let post_hashtag_preview = parse_limit("CREATORFIT_POST_HASHTAG_PREVIEW", "3")?;

    Ok(AppConfig {
        env,
        log_level,
        roster_path,
        hashtag_table_limit,
        hashtag_pie_limit,
        post_hashtag_preview,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
