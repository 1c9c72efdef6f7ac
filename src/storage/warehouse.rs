use crate::constants::{SNAPSHOT_DATE_FORMAT, WAREHOUSE_BATCH_SIZE};
use crate::error::AppError;
use crate::presentation::instrument::InstrumentRecord;
use crate::storage::config::{TableTarget, WarehouseConfig, WarehouseCredentials};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Column definitions of the replicated table, in insert order
///
/// The first 13 columns follow `INSTRUMENT_FIELDS`; `ds` is the partition date.
pub const WAREHOUSE_COLUMNS: [(&str, &str); 14] = [
    ("ticker", "VARCHAR"),
    ("name", "VARCHAR"),
    ("market", "VARCHAR"),
    ("locale", "VARCHAR"),
    ("primary_exchange", "VARCHAR"),
    ("type", "VARCHAR"),
    ("active", "BOOLEAN"),
    ("currency_name", "VARCHAR"),
    ("cik", "VARCHAR"),
    ("composite_figi", "VARCHAR"),
    ("share_class_figi", "VARCHAR"),
    ("last_updated_utc", "VARCHAR"),
    ("snapshot_date", "VARCHAR"),
    ("ds", "DATE"),
];

/// `CREATE TABLE IF NOT EXISTS` statement for `target`
pub fn create_table_sql(target: &TableTarget) -> String {
    let columns = WAREHOUSE_COLUMNS
        .iter()
        .map(|(name, sql_type)| format!("    {name} {sql_type}"))
        .collect::<Vec<_>>()
        .join(",\n");
    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n{}\n)",
        target.qualified_name(),
        columns
    )
}

/// Comma-separated column list used by inserts
pub fn insert_columns() -> String {
    WAREHOUSE_COLUMNS
        .iter()
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A record paired with the value of its `ds` column
#[derive(Debug, Clone, PartialEq)]
pub struct WarehouseRow<'a> {
    /// The normalized record
    pub record: &'a InstrumentRecord,
    /// Partition date of the row
    pub ds: NaiveDate,
}

impl<'a> WarehouseRow<'a> {
    /// Uses the record's own `snapshot_date` when it is a valid date, else `fallback`
    pub fn new(record: &'a InstrumentRecord, fallback: NaiveDate) -> Self {
        let ds = NaiveDate::parse_from_str(record.snapshot_date.trim(), SNAPSHOT_DATE_FORMAT)
            .unwrap_or(fallback);
        Self { record, ds }
    }
}

/// A warehouse client able to open sessions
#[async_trait]
pub trait WarehouseSink: Send + Sync {
    /// Opens a session with the given credentials
    async fn connect(
        &self,
        credentials: &WarehouseCredentials,
    ) -> Result<Box<dyn WarehouseSession>, AppError>;
}

/// An open warehouse connection
///
/// All inserts of a session belong to one transaction that only becomes
/// visible after [`WarehouseSession::commit`]. [`WarehouseSession::close`]
/// releases the connection and discards anything left uncommitted.
#[async_trait]
pub trait WarehouseSession: Send {
    /// Creates the table when it does not exist; never alters an existing one
    async fn ensure_table(&mut self, target: &TableTarget) -> Result<(), AppError>;

    /// Submits one batch of rows
    async fn insert_batch(
        &mut self,
        target: &TableTarget,
        rows: &[WarehouseRow<'_>],
    ) -> Result<u64, AppError>;

    /// Commits every batch submitted so far
    async fn commit(&mut self) -> Result<(), AppError>;

    /// Releases the connection
    async fn close(&mut self);
}

/// Why replication did not run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// `PUSH_TO_SNOWFLAKE` is off
    Disabled,
    /// No warehouse client is available in this build
    SinkUnavailable,
    /// Mandatory credentials are absent
    MissingCredentials(Vec<&'static str>),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Disabled => write!(f, "push disabled"),
            SkipReason::SinkUnavailable => write!(f, "warehouse client unavailable"),
            SkipReason::MissingCredentials(names) => {
                write!(f, "missing credentials: {}", names.join(", "))
            }
        }
    }
}

/// Result of a replication attempt that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplicationOutcome {
    /// Rows were inserted and committed
    Replicated {
        /// Rows submitted
        rows: usize,
        /// Batches submitted
        batches: usize,
    },
    /// Nothing was sent to the warehouse
    Skipped(SkipReason),
}

impl fmt::Display for ReplicationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplicationOutcome::Replicated { rows, batches } => {
                write!(f, "replicated {rows} rows in {batches} batches")
            }
            ReplicationOutcome::Skipped(reason) => write!(f, "skipped ({reason})"),
        }
    }
}

/// Copies snapshot records into a warehouse table
pub struct WarehouseReplicator {
    sink: Option<Arc<dyn WarehouseSink>>,
    batch_size: usize,
}

impl WarehouseReplicator {
    /// Creates a replicator; `None` means no warehouse client is available
    pub fn new(sink: Option<Arc<dyn WarehouseSink>>) -> Self {
        Self {
            sink,
            batch_size: WAREHOUSE_BATCH_SIZE,
        }
    }

    /// Overrides the number of rows per insert
    #[must_use]
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Rows per insert
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Appends `records` to the configured table
    ///
    /// Skips without touching the warehouse when push is disabled, when no sink
    /// is available or when credentials are incomplete. Otherwise ensures the
    /// table, inserts in batches and commits once. The session is closed on
    /// every path once it has been opened.
    ///
    /// # Arguments
    /// * `records` - Normalized snapshot records
    /// * `snapshot_date` - Run-wide date used when a record has no valid `snapshot_date`
    /// * `config` - Warehouse configuration
    pub async fn replicate(
        &self,
        records: &[InstrumentRecord],
        snapshot_date: NaiveDate,
        config: &WarehouseConfig,
    ) -> Result<ReplicationOutcome, AppError> {
        if !config.push_enabled {
            debug!("Warehouse push disabled, skipping replication");
            return Ok(ReplicationOutcome::Skipped(SkipReason::Disabled));
        }

        let Some(sink) = &self.sink else {
            warn!("Skipping warehouse push: no warehouse client available in this build");
            return Ok(ReplicationOutcome::Skipped(SkipReason::SinkUnavailable));
        };

        let missing = config.missing_credentials();
        if !missing.is_empty() {
            warn!(
                "Skipping warehouse push: missing credentials {}",
                missing.join(", ")
            );
            return Ok(ReplicationOutcome::Skipped(SkipReason::MissingCredentials(
                missing,
            )));
        }
        let credentials = config
            .credentials()
            .ok_or_else(|| AppError::MissingConfig("warehouse credentials".to_string()))?;
        let target = config.target()?;

        let rows: Vec<WarehouseRow<'_>> = records
            .iter()
            .map(|record| WarehouseRow::new(record, snapshot_date))
            .collect();

        info!("Pushing {} rows to warehouse table {}", rows.len(), target);
        let mut session = sink.connect(&credentials).await?;
        let result = push_rows(session.as_mut(), &target, &rows, self.batch_size).await;
        session.close().await;

        match result {
            Ok(batches) => {
                info!(
                    "Committed {} rows to {} in {} batches",
                    rows.len(),
                    target,
                    batches
                );
                Ok(ReplicationOutcome::Replicated {
                    rows: rows.len(),
                    batches,
                })
            }
            Err(e) => {
                error!("Warehouse push to {} failed: {}", target, e);
                Err(e)
            }
        }
    }
}

async fn push_rows<S: WarehouseSession + ?Sized>(
    session: &mut S,
    target: &TableTarget,
    rows: &[WarehouseRow<'_>],
    batch_size: usize,
) -> Result<usize, AppError> {
    session.ensure_table(target).await?;

    let mut batches = 0;
    for chunk in rows.chunks(batch_size) {
        session.insert_batch(target, chunk).await?;
        batches += 1;
        debug!("Submitted batch {} ({} rows)", batches, chunk.len());
    }

    session.commit().await?;
    Ok(batches)
}

/// The warehouse client compiled into this build, if any
#[cfg(feature = "warehouse")]
pub fn default_sink() -> Option<Arc<dyn WarehouseSink>> {
    Some(Arc::new(crate::storage::postgres::PgWarehouse::new()))
}

/// The warehouse client compiled into this build, if any
#[cfg(not(feature = "warehouse"))]
pub fn default_sink() -> Option<Arc<dyn WarehouseSink>> {
    None
}
