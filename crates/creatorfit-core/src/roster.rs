//! Loading the candidate roster handed over by the match-finding service.

use std::path::Path;

use serde_json::Value;

use crate::model::Account;
use crate::normalize::normalize_account;
use crate::raw::RawAccount;
use crate::ConfigError;

/// Envelope key the match-finding service wraps its account list in.
const DASHBOARD_DATA_KEY: &str = "dashboardData";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterFormat {
    Json,
    Yaml,
}

impl RosterFormat {
    /// `.yaml` / `.yml` select YAML; everything else is JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                RosterFormat::Yaml
            }
            _ => RosterFormat::Json,
        }
    }
}

/// Load and normalize the roster from a JSON or YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read or is not a recognizable
/// roster document.
pub fn load_roster(path: &Path) -> Result<Vec<Account>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::RosterFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let accounts = parse_roster(&content, RosterFormat::from_path(path)).map_err(|reason| {
        ConfigError::RosterFileParse {
            path: path.display().to_string(),
            reason,
        }
    })?;

    tracing::info!(path = %path.display(), accounts = accounts.len(), "loaded roster");
    Ok(accounts)
}

/// Parse roster text.
///
/// Accepts a bare array of account records, an object holding a
/// `dashboardData` array, or an array whose first element holds
/// `dashboardData`. A missing `dashboardData` array yields an empty roster.
///
/// # Errors
///
/// Returns a description of the problem if the text is not valid JSON/YAML or
/// the account records have the wrong shape.
pub fn parse_roster(content: &str, format: RosterFormat) -> Result<Vec<Account>, String> {
    let document: Value = match format {
        RosterFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string())?,
        RosterFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string())?,
    };

    let records = unwrap_envelope(document)?;
    let raw: Vec<RawAccount> = serde_json::from_value(records).map_err(|e| e.to_string())?;

    Ok(raw.into_iter().map(normalize_account).collect())
}

fn unwrap_envelope(document: Value) -> Result<Value, String> {
    match document {
        Value::Object(mut map) => Ok(map
            .remove(DASHBOARD_DATA_KEY)
            .unwrap_or_else(|| Value::Array(Vec::new()))),
        Value::Array(mut items) => {
            let enveloped = items
                .first()
                .and_then(Value::as_object)
                .is_some_and(|first| first.contains_key(DASHBOARD_DATA_KEY));
            if enveloped {
                let first = items.swap_remove(0);
                unwrap_envelope(first)
            } else {
                Ok(Value::Array(items))
            }
        }
        Value::Null => Ok(Value::Array(Vec::new())),
        other => Err(format!("expected an array or object, found {other}")),
    }
}

/// Pick an account by username (case-insensitive, `@` optional), or the first
/// account when no username is given.
#[must_use]
pub fn select_account<'a>(roster: &'a [Account], username: Option<&str>) -> Option<&'a Account> {
    match username {
        None => roster.first(),
        Some(wanted) => {
            let wanted = wanted.trim_start_matches('@');
            roster.iter().find(|account| {
                account
                    .overview
                    .username
                    .as_deref()
                    .is_some_and(|u| u.eq_ignore_ascii_case(wanted))
            })
        }
    }
}
