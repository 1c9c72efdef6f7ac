use crate::constants::{DEFAULT_WAREHOUSE_SCHEMA, DEFAULT_WAREHOUSE_TABLE};
use crate::error::AppError;
use once_cell::sync::Lazy;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static IDENTIFIER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// Warehouse connection settings as read from the environment
///
/// Every credential is optional here; [`WarehouseConfig::credentials`] decides
/// whether the set is complete enough to connect.
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
pub struct WarehouseConfig {
    /// Whether replication is requested at all (`PUSH_TO_SNOWFLAKE`)
    pub push_enabled: bool,
    /// Login user (`SNOWFLAKE_USER`)
    pub user: Option<String>,
    /// Login password (`SNOWFLAKE_PASSWORD`)
    #[serde(skip_serializing)]
    pub password: Option<String>,
    /// Account locator, used as `host[:port]` by the bundled sink (`SNOWFLAKE_ACCOUNT`)
    pub account: Option<String>,
    /// Target database (`SNOWFLAKE_DATABASE`)
    pub database: Option<String>,
    /// Target schema (`SNOWFLAKE_SCHEMA`)
    pub schema: String,
    /// Target table (`SNOWFLAKE_TABLE`)
    pub table: String,
}

/// Complete set of credentials needed to open a warehouse session
#[derive(Clone)]
pub struct WarehouseCredentials {
    /// Login user
    pub user: String,
    /// Login password
    pub password: String,
    /// Account locator
    pub account: String,
    /// Target database
    pub database: String,
}

impl fmt::Debug for WarehouseCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WarehouseCredentials")
            .field("user", &self.user)
            .field("password", &"***")
            .field("account", &self.account)
            .field("database", &self.database)
            .finish()
    }
}

/// Fully qualified destination table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableTarget {
    /// Schema name
    pub schema: String,
    /// Table name
    pub table: String,
}

impl TableTarget {
    /// Builds a target after checking both parts are plain SQL identifiers
    ///
    /// Identifiers are interpolated into DDL and DML, so anything beyond
    /// `[A-Za-z_][A-Za-z0-9_]*` is rejected.
    pub fn new(schema: &str, table: &str) -> Result<Self, AppError> {
        for (kind, value) in [("schema", schema), ("table", table)] {
            if !IDENTIFIER.is_match(value) {
                return Err(AppError::InvalidInput(format!(
                    "warehouse {kind} name {value:?} is not a plain identifier"
                )));
            }
        }
        Ok(Self {
            schema: schema.to_string(),
            table: table.to_string(),
        })
    }

    /// Returns `schema.table`
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.schema, self.table)
    }
}

impl fmt::Display for TableTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.qualified_name())
    }
}

impl WarehouseConfig {
    /// Creates a disabled configuration pointing at the default schema and table
    pub fn disabled() -> Self {
        Self {
            push_enabled: false,
            schema: DEFAULT_WAREHOUSE_SCHEMA.to_string(),
            table: DEFAULT_WAREHOUSE_TABLE.to_string(),
            ..Default::default()
        }
    }

    /// Names of the mandatory credentials that are absent
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        [
            ("SNOWFLAKE_USER", &self.user),
            ("SNOWFLAKE_PASSWORD", &self.password),
            ("SNOWFLAKE_ACCOUNT", &self.account),
            ("SNOWFLAKE_DATABASE", &self.database),
        ]
        .into_iter()
        .filter(|(_, value)| value.as_deref().is_none_or(|v| v.trim().is_empty()))
        .map(|(name, _)| name)
        .collect()
    }

    /// Returns the credentials when all four are present
    pub fn credentials(&self) -> Option<WarehouseCredentials> {
        if !self.missing_credentials().is_empty() {
            return None;
        }
        Some(WarehouseCredentials {
            user: self.user.clone()?,
            password: self.password.clone()?,
            account: self.account.clone()?,
            database: self.database.clone()?,
        })
    }

    /// Validated destination table
    pub fn target(&self) -> Result<TableTarget, AppError> {
        TableTarget::new(&self.schema, &self.table)
    }
}
