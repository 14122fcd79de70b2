//! Airtable REST client for the daily calorie table.

use tracing::{debug, warn};

use crate::clock::DateKey;
use crate::models::RecordSet;
use crate::{Config, Error, Result};

/// Formula selecting the rows whose `Date` falls on `date`.
pub fn day_filter(date: &DateKey) -> String {
    format!("IS_SAME({{Date}}, '{}', 'day')", date)
}

/// Client for one Airtable table.
#[derive(Debug, Clone)]
pub struct AirtableClient {
    http_client: reqwest::Client,
    config: Config,
}

impl AirtableClient {
    /// Create a client with the configured request timeout.
    pub fn new(config: Config) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| Error::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// List-records URL filtered to a single day.
    pub fn records_url(&self, date: &DateKey) -> String {
        format!(
            "{}/{}/{}?filterByFormula={}",
            self.config.api_url,
            urlencoding::encode(&self.config.base_id),
            urlencoding::encode(&self.config.table_name),
            urlencoding::encode(&day_filter(date))
        )
    }

    /// Fetch the rows recorded for `date`.
    pub async fn records_for_day(&self, date: &DateKey) -> Result<RecordSet> {
        let url = self.records_url(date);
        debug!(%date, %url, "Querying Airtable");

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(&self.config.api_key)
            .send()
            .await
            .map_err(|e| {
                warn!(%date, %url, error = %e, "Airtable request failed");
                Error::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%date, %url, status = status.as_u16(), %body, "Airtable returned an error");
            return Err(Error::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let records: RecordSet = response.json().await.map_err(|e| {
            warn!(%date, %url, error = %e, "Unexpected Airtable response body");
            Error::from(e)
        })?;

        if records.offset.is_some() {
            debug!(%date, "More rows match the filter, only the first page is read");
        }

        Ok(records)
    }
}
