use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_INTERVAL_MINUTES, DEFAULT_OUTPUT_PATH, DEFAULT_WAREHOUSE_SCHEMA,
    DEFAULT_WAREHOUSE_TABLE,
};
use crate::error::AppError;
use crate::storage::config::WarehouseConfig;
use crate::utils::config::{get_env_flag, get_env_non_empty, get_env_or_default};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Settings for the Polygon reference-data API
pub struct PolygonConfig {
    /// API key sent as the `apiKey` query parameter
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Base URL of the REST API
    pub base_url: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Settings for the local snapshot file
pub struct SnapshotConfig {
    /// Path of the CSV snapshot
    pub output_path: PathBuf,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Settings for the interval trigger
pub struct ScheduleConfig {
    /// Minutes between two runs
    pub interval_minutes: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the snapshot job
pub struct Config {
    /// Listing API configuration
    pub polygon: PolygonConfig,
    /// Snapshot file configuration
    pub snapshot: SnapshotConfig,
    /// Warehouse replication configuration
    pub warehouse: WarehouseConfig,
    /// Interval trigger configuration
    pub schedule: ScheduleConfig,
}

impl ScheduleConfig {
    /// Reads the run interval without touching the rest of the configuration
    pub fn from_env() -> Self {
        ScheduleConfig {
            interval_minutes: get_env_or_default("JOB_INTERVAL_MINUTES", DEFAULT_INTERVAL_MINUTES)
                .max(1),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the `.env` file and the process environment
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let api_key = get_env_non_empty("POLYGON_API_KEY");
        if api_key.is_none() {
            error!("POLYGON_API_KEY not found in environment variables or .env file");
        }

        Config {
            polygon: PolygonConfig {
                api_key,
                base_url: get_env_or_default("POLYGON_BASE_URL", String::from(DEFAULT_BASE_URL)),
            },
            snapshot: SnapshotConfig {
                output_path: PathBuf::from(get_env_or_default(
                    "TICKERS_OUTPUT_PATH",
                    String::from(DEFAULT_OUTPUT_PATH),
                )),
            },
            warehouse: WarehouseConfig {
                push_enabled: get_env_flag("PUSH_TO_SNOWFLAKE", false),
                user: get_env_non_empty("SNOWFLAKE_USER"),
                password: get_env_non_empty("SNOWFLAKE_PASSWORD"),
                account: get_env_non_empty("SNOWFLAKE_ACCOUNT"),
                database: get_env_non_empty("SNOWFLAKE_DATABASE"),
                schema: get_env_non_empty("SNOWFLAKE_SCHEMA")
                    .unwrap_or_else(|| DEFAULT_WAREHOUSE_SCHEMA.to_string()),
                table: get_env_non_empty("SNOWFLAKE_TABLE")
                    .unwrap_or_else(|| DEFAULT_WAREHOUSE_TABLE.to_string()),
            },
            schedule: ScheduleConfig::from_env(),
        }
    }

    /// Returns the API key or a configuration error when it is not set
    pub fn api_key(&self) -> Result<&str, AppError> {
        self.polygon
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::MissingConfig("POLYGON_API_KEY".to_string()))
    }
}
