/// Number of records requested per listing page
pub const PAGE_SIZE: u32 = 1000;
/// Number of rows submitted per warehouse insert
pub const WAREHOUSE_BATCH_SIZE: usize = 500;
/// Base URL of the Polygon REST API
pub const DEFAULT_BASE_URL: &str = "https://api.polygon.io";
/// Path of the ticker reference listing endpoint
pub const TICKERS_PATH: &str = "/v3/reference/tickers";
/// Relative path of the snapshot file, overwritten every run
pub const DEFAULT_OUTPUT_PATH: &str = "tickers.csv";
/// Warehouse schema used when `SNOWFLAKE_SCHEMA` is not set
pub const DEFAULT_WAREHOUSE_SCHEMA: &str = "PUBLIC";
/// Warehouse table used when `SNOWFLAKE_TABLE` is not set
pub const DEFAULT_WAREHOUSE_TABLE: &str = "TICKERS";
/// Minutes between two scheduled runs
pub const DEFAULT_INTERVAL_MINUTES: u64 = 3;
/// Format of the run-wide snapshot date
pub const SNAPSHOT_DATE_FORMAT: &str = "%Y-%m-%d";
/// User agent string sent with every listing request
pub const USER_AGENT: &str = "ticker-snapshot/0.1.0";
