//! # Ticker Snapshot Prelude
//!
//! Commonly used types of the snapshot pipeline in one import.
//!
//! ```rust
//! use ticker_snapshot::prelude::*;
//!
//! let query = ListingQuery::default();
//! assert_eq!(query.limit, PAGE_SIZE);
//! ```

// ============================================================================
// CONFIGURATION
// ============================================================================

pub use crate::application::config::{Config, PolygonConfig, ScheduleConfig, SnapshotConfig};
pub use crate::storage::config::{TableTarget, WarehouseConfig, WarehouseCredentials};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

pub use crate::error::AppError;

// ============================================================================
// PIPELINE
// ============================================================================

pub use crate::application::job::{RunSummary, SnapshotJob, run_job};
pub use crate::application::scheduler::run_every;
pub use crate::application::services::fetcher::{
    FetchOutcome, PageCompletion, TickerFetcher, TruncationReason,
};
pub use crate::application::services::normalizer::{normalize, normalize_record};
pub use crate::storage::snapshot::{write_records, write_snapshot};
pub use crate::storage::warehouse::{
    ReplicationOutcome, SkipReason, WarehouseReplicator, WarehouseRow, WarehouseSession,
    WarehouseSink, default_sink,
};

#[cfg(feature = "warehouse")]
pub use crate::storage::postgres::PgWarehouse;

// ============================================================================
// MODELS
// ============================================================================

pub use crate::model::requests::ListingQuery;
pub use crate::model::responses::PageResponse;
pub use crate::presentation::instrument::{INSTRUMENT_FIELDS, InstrumentRecord, RawRecord};

// ============================================================================
// UTILITIES
// ============================================================================

pub use crate::utils::config::{get_env_flag, get_env_or_default, parse_flag};
pub use crate::utils::logger::setup_logger;

pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use chrono::NaiveDate;
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};
