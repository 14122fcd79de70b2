//! Configuration management for Lambda functions.

use std::env;
use std::time::Duration;

use crate::{Error, Result};

pub const DEFAULT_API_URL: &str = "https://api.airtable.com/v0";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Airtable personal access token
    pub api_key: String,
    /// Airtable base id (`app...`)
    pub base_id: String,
    /// Table holding the daily calorie rows
    pub table_name: String,
    /// Airtable REST root, overridable for local testing
    pub api_url: String,
    /// Upper bound on the outbound request
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Empty values count as missing. Every missing required key is named in
    /// the returned error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = get("AIRTABLE_API_KEY");
        let base_id = get("AIRTABLE_BASE_ID");
        let table_name = get("AIRTABLE_TABLE_NAME");

        let (api_key, base_id, table_name) = match (api_key, base_id, table_name) {
            (Some(k), Some(b), Some(t)) => (k, b, t),
            (k, b, t) => {
                let missing: Vec<&str> = [
                    ("AIRTABLE_API_KEY", k.is_none()),
                    ("AIRTABLE_BASE_ID", b.is_none()),
                    ("AIRTABLE_TABLE_NAME", t.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, is_missing)| is_missing.then_some(name))
                .collect();

                return Err(Error::Config(format!(
                    "Missing required environment variables: {}",
                    missing.join(", ")
                )));
            }
        };

        let api_url = get("AIRTABLE_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let timeout_secs = match get("AIRTABLE_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    Error::Config(format!(
                        "AIRTABLE_TIMEOUT_SECS must be a positive integer, got {:?}",
                        raw
                    ))
                })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_key,
            base_id,
            table_name,
            api_url,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
