//! External record store collaborator.
//!
//! The record store is a hosted database service reached over its REST
//! API. This crate provides:
//!
//! - [`RecordStore`] — the trait the workflow controller depends on, so a
//!   test double can stand in for the hosted service.
//! - [`StoreClient`] — the real HTTP client.
//! - [`StoreConfig`] — endpoint URL + access key resolved from the
//!   environment at process start.
//! - [`StoreError`] — the store-facing failure taxonomy.

pub mod client;
pub mod config;

use async_trait::async_trait;
use equipreport_core::{EquipmentRecord, NewIssueReport};

pub use client::StoreClient;
pub use config::StoreConfig;

/// Errors surfaced by a record store implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The keyed lookup matched zero rows.
    #[error("no matching row")]
    NotFound,

    /// The store reached the request but reported a failure.
    #[error("store error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The request never completed (network unreachable, DNS, timeout).
    #[error("transport error: {0}")]
    Transport(String),
}

/// Keyed lookup and insert against the external record store.
///
/// Exactly one attempt per call: implementations must not retry, cache, or
/// deduplicate. The workflow controller is written against this trait and
/// is handed an implementation at construction.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch the single equipment row with the given id.
    async fn fetch_equipment(&self, equipment_id: &str) -> Result<EquipmentRecord, StoreError>;

    /// Insert one issue report row.
    async fn insert_report(&self, report: &NewIssueReport) -> Result<(), StoreError>;
}

#[async_trait]
impl<T: RecordStore + ?Sized> RecordStore for std::sync::Arc<T> {
    async fn fetch_equipment(&self, equipment_id: &str) -> Result<EquipmentRecord, StoreError> {
        (**self).fetch_equipment(equipment_id).await
    }

    async fn insert_report(&self, report: &NewIssueReport) -> Result<(), StoreError> {
        (**self).insert_report(report).await
    }
}
