//! `equipreport` -- terminal form for hospital equipment issue reporting.
//!
//! Looks up equipment records by ID in the hosted record store and submits
//! free-text issue reports against them. One interactive session per
//! process run.
//!
//! # Environment variables
//!
//! | Variable           | Required | Description                          |
//! |--------------------|----------|--------------------------------------|
//! | `RECORD_STORE_URL` | yes      | Base URL of the hosted record store  |
//! | `RECORD_STORE_KEY` | yes      | API access key for the store         |

mod ui;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use equipreport_store::{StoreClient, StoreConfig};
use equipreport_workflow::ReportWorkflow;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "equipreport=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Connectivity indicator: both settings present or the store is
    // unreachable by construction.
    let config = match StoreConfig::from_env() {
        Some(config) => {
            ui::print_connectivity(true);
            config
        }
        None => {
            ui::print_connectivity(false);
            tracing::error!("RECORD_STORE_URL and RECORD_STORE_KEY must both be set");
            std::process::exit(1);
        }
    };

    tracing::info!(url = %config.url, "Starting equipreport");

    let workflow = ReportWorkflow::new(StoreClient::new(config));
    ui::run(&workflow).await;
}
