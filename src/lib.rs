//! # Ticker Snapshot
//!
//! Periodically pulls the full listing of active stock tickers from the Polygon
//! reference-data API, normalizes every record onto a fixed column layout and
//! persists the result as a dated snapshot.
//!
//! ## Pipeline
//!
//! 1. **Fetch**: [`TickerFetcher`](application::services::fetcher::TickerFetcher)
//!    issues the first listing request and follows `next_url` until the listing is
//!    exhausted or a follow-up page fails. Partial results survive a failing
//!    follow-up page; a failing first page aborts the run.
//! 2. **Normalize**: [`normalize`](application::services::normalizer::normalize)
//!    projects every raw record onto the 13 fields of
//!    [`InstrumentRecord`](presentation::instrument::InstrumentRecord) and stamps the
//!    run-wide snapshot date.
//! 3. **Write**: [`write_snapshot`](storage::snapshot::write_snapshot) replaces
//!    `tickers.csv` with a header row plus one row per record.
//! 4. **Replicate** (optional): [`WarehouseReplicator`](storage::warehouse::WarehouseReplicator)
//!    appends the same rows to a warehouse table in batches of 500 under a single
//!    commit.
//!
//! ## Configuration
//!
//! All settings come from the environment (a `.env` file is honoured):
//!
//! ```bash
//! POLYGON_API_KEY=your_api_key
//! PUSH_TO_SNOWFLAKE=false
//! SNOWFLAKE_USER=loader
//! SNOWFLAKE_PASSWORD=secret
//! SNOWFLAKE_ACCOUNT=warehouse.internal:5432
//! SNOWFLAKE_DATABASE=market
//! SNOWFLAKE_SCHEMA=PUBLIC
//! SNOWFLAKE_TABLE=TICKERS
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ticker_snapshot::prelude::*;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     setup_logger();
//!     run_job().await;
//! }
//! ```

/// Application layer: configuration, services and the snapshot job
pub mod application;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// Wire models and HTTP helpers for the listing API
pub mod model;
/// Convenient re-exports
pub mod prelude;
/// Normalized domain records
pub mod presentation;
/// Snapshot file and warehouse persistence
pub mod storage;
/// Environment and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
