//! HTTP client for the hosted record store's REST API.
//!
//! The store exposes each table under `/rest/v1/<table>` and authenticates
//! every request with an `apikey` header plus the same key as a bearer
//! token. Lookups are filtered GETs returning a JSON array; inserts are
//! POSTs of a JSON body.

use async_trait::async_trait;

use equipreport_core::{EquipmentRecord, NewIssueReport};

use crate::config::StoreConfig;
use crate::{RecordStore, StoreError};

/// Table holding the equipment rows.
const TABLE_EQUIPMENT: &str = "equipment";
/// Table receiving the issue report rows.
const TABLE_REPORTS: &str = "reports";

/// HTTP client for one hosted record store.
pub struct StoreClient {
    client: reqwest::Client,
    url: String,
    key: String,
}

impl StoreClient {
    /// Create a new client from the resolved connection settings.
    pub fn new(config: StoreConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: StoreConfig) -> Self {
        Self {
            client,
            url: config.url,
            key: config.key,
        }
    }

    /// REST endpoint for a table.
    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.url, table)
    }

    /// Attach the store's auth headers to a request.
    fn authed(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.key)
            .bearer_auth(&self.key)
    }

    /// Ensure the response has a success status code. Returns the response
    /// unchanged on success, or a [`StoreError::Api`] containing the status
    /// and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(StoreError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl RecordStore for StoreClient {
    /// Issue a single-row keyed query: `GET /rest/v1/equipment` filtered on
    /// `equipment_id`. The store answers with a JSON array; an empty array
    /// is the not-found signal.
    async fn fetch_equipment(&self, equipment_id: &str) -> Result<EquipmentRecord, StoreError> {
        let response = self
            .authed(self.client.get(self.table_url(TABLE_EQUIPMENT)))
            .query(&[
                ("select", "*".to_string()),
                ("equipment_id", format!("eq.{equipment_id}")),
                ("limit", "1".to_string()),
            ])
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        let response = Self::ensure_success(response).await?;
        let mut rows: Vec<EquipmentRecord> = response
            .json()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        match rows.pop() {
            Some(record) => {
                tracing::debug!(equipment_id, "Equipment row fetched");
                Ok(record)
            }
            None => Err(StoreError::NotFound),
        }
    }

    /// Insert one report row: `POST /rest/v1/reports`. The row is never
    /// read back, so the store is asked for a minimal response.
    async fn insert_report(&self, report: &NewIssueReport) -> Result<(), StoreError> {
        let response = self
            .authed(self.client.post(self.table_url(TABLE_REPORTS)))
            .header("Prefer", "return=minimal")
            .json(report)
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        Self::ensure_success(response).await?;
        tracing::debug!(equipment_id = %report.equipment_id, "Issue report inserted");
        Ok(())
    }
}
