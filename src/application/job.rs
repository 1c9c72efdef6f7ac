use crate::application::config::Config;
use crate::application::services::fetcher::{PageCompletion, TickerFetcher};
use crate::application::services::normalizer::normalize;
use crate::error::AppError;
use crate::model::requests::ListingQuery;
use crate::storage::snapshot::write_snapshot;
use crate::storage::warehouse::{ReplicationOutcome, WarehouseReplicator, default_sink};
use chrono::{Local, NaiveDate};
use std::fmt;
use std::path::PathBuf;
use tracing::{error, info, warn};

/// What one snapshot run produced
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Date stamped on every record
    pub snapshot_date: NaiveDate,
    /// Records written to the snapshot file
    pub records: usize,
    /// Listing pages requested
    pub pages: usize,
    /// How pagination ended
    pub completion: PageCompletion,
    /// Snapshot file location
    pub output_path: PathBuf,
    /// Warehouse result
    pub replication: ReplicationOutcome,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} records for {} from {} pages ({}) written to {}, warehouse {}",
            self.records,
            self.snapshot_date,
            self.pages,
            self.completion,
            self.output_path.display(),
            self.replication
        )
    }
}

/// Fetch, normalize, write and optionally replicate one ticker snapshot
pub struct SnapshotJob {
    config: Config,
    query: ListingQuery,
    fetcher: TickerFetcher,
    replicator: WarehouseReplicator,
}

impl SnapshotJob {
    /// Builds a job wired to the warehouse client of this build
    ///
    /// Fails with [`AppError::MissingConfig`] when no API key is configured.
    pub fn new(config: Config) -> Result<Self, AppError> {
        let fetcher = TickerFetcher::new(config.polygon.base_url.clone(), config.api_key()?)?;
        Ok(Self {
            config,
            query: ListingQuery::default(),
            fetcher,
            replicator: WarehouseReplicator::new(default_sink()),
        })
    }

    /// Replaces the warehouse replicator
    #[must_use]
    pub fn with_replicator(mut self, replicator: WarehouseReplicator) -> Self {
        self.replicator = replicator;
        self
    }

    /// Runs the pipeline once
    ///
    /// A failing first listing request aborts before the snapshot file is
    /// touched. A truncated listing is still written and replicated.
    pub async fn run(&self, snapshot_date: NaiveDate) -> Result<RunSummary, AppError> {
        let fetched = self.fetcher.fetch_all(&self.query).await?;
        if !fetched.is_complete() {
            warn!(
                "Continuing with partial listing of {} records ({})",
                fetched.records.len(),
                fetched.completion
            );
        }

        let records = normalize(&fetched.records, snapshot_date);
        let output_path = self.config.snapshot.output_path.clone();
        write_snapshot(&records, &output_path)?;

        let replication = self
            .replicator
            .replicate(&records, snapshot_date, &self.config.warehouse)
            .await?;

        Ok(RunSummary {
            snapshot_date,
            records: records.len(),
            pages: fetched.pages,
            completion: fetched.completion,
            output_path,
            replication,
        })
    }
}

/// Trigger entry point: one complete, independent run dated today
///
/// Reloads the configuration on every call. Failures are logged, never returned.
pub async fn run_job() {
    let started = Local::now();
    info!("Job started at: {}", started);

    let job = match SnapshotJob::new(Config::new()) {
        Ok(job) => job,
        Err(e) => {
            error!("Snapshot job not started: {}", e);
            return;
        }
    };

    match job.run(started.date_naive()).await {
        Ok(summary) => info!("Snapshot run finished: {}", summary),
        Err(e) => error!("Snapshot run failed: {}", e),
    }
}
