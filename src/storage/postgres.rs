use crate::error::AppError;
use crate::storage::config::{TableTarget, WarehouseCredentials};
use crate::storage::warehouse::{
    WarehouseRow, WarehouseSession, WarehouseSink, create_table_sql, insert_columns,
};
use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{PgPool, Postgres, QueryBuilder, Transaction};
use tracing::{debug, info, warn};

/// Default port when the account locator carries none
pub const DEFAULT_PORT: u16 = 5432;

/// Warehouse sink speaking the PostgreSQL wire protocol through `sqlx`
///
/// The account locator is read as `host[:port]`.
#[derive(Debug, Default, Clone)]
pub struct PgWarehouse;

impl PgWarehouse {
    /// Creates the sink
    pub fn new() -> Self {
        Self
    }

    /// Translates warehouse credentials into connection options
    pub fn connect_options(credentials: &WarehouseCredentials) -> Result<PgConnectOptions, AppError> {
        let (host, port) = match credentials.account.rsplit_once(':') {
            Some((host, port)) => {
                let port = port.parse::<u16>().map_err(|e| {
                    AppError::InvalidInput(format!(
                        "invalid port in warehouse account {:?}: {e}",
                        credentials.account
                    ))
                })?;
                (host, port)
            }
            None => (credentials.account.as_str(), DEFAULT_PORT),
        };

        Ok(PgConnectOptions::new()
            .host(host)
            .port(port)
            .username(&credentials.user)
            .password(&credentials.password)
            .database(&credentials.database))
    }
}

#[async_trait]
impl WarehouseSink for PgWarehouse {
    async fn connect(
        &self,
        credentials: &WarehouseCredentials,
    ) -> Result<Box<dyn WarehouseSession>, AppError> {
        let options = Self::connect_options(credentials)?;
        info!(
            "Connecting to warehouse {} as {}",
            credentials.account, credentials.user
        );
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;
        Ok(Box::new(PgSession { pool, tx: None }))
    }
}

/// Single-connection session; the transaction opens with the first batch
struct PgSession {
    pool: PgPool,
    tx: Option<Transaction<'static, Postgres>>,
}

#[async_trait]
impl WarehouseSession for PgSession {
    async fn ensure_table(&mut self, target: &TableTarget) -> Result<(), AppError> {
        let ddl = create_table_sql(target);
        debug!("{}", ddl);
        match self.tx.as_mut() {
            Some(tx) => sqlx::query(&ddl).execute(&mut **tx).await?,
            None => sqlx::query(&ddl).execute(&self.pool).await?,
        };
        Ok(())
    }

    async fn insert_batch(
        &mut self,
        target: &TableTarget,
        rows: &[WarehouseRow<'_>],
    ) -> Result<u64, AppError> {
        if rows.is_empty() {
            return Ok(0);
        }
        if self.tx.is_none() {
            self.tx = Some(self.pool.begin().await?);
        }
        let tx = self
            .tx
            .as_mut()
            .ok_or_else(|| AppError::Warehouse("transaction not open".to_string()))?;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(format!(
            "INSERT INTO {} ({}) ",
            target.qualified_name(),
            insert_columns()
        ));
        builder.push_values(rows, |mut b, row| {
            let r = row.record;
            b.push_bind(r.ticker.clone())
                .push_bind(r.name.clone())
                .push_bind(r.market.clone())
                .push_bind(r.locale.clone())
                .push_bind(r.primary_exchange.clone())
                .push_bind(r.security_type.clone())
                .push_bind(r.active)
                .push_bind(r.currency_name.clone())
                .push_bind(r.cik.clone())
                .push_bind(r.composite_figi.clone())
                .push_bind(r.share_class_figi.clone())
                .push_bind(r.last_updated_utc.clone())
                .push_bind(r.snapshot_date.clone())
                .push_bind(row.ds);
        });

        let result = builder.build().execute(&mut **tx).await?;
        Ok(result.rows_affected())
    }

    async fn commit(&mut self) -> Result<(), AppError> {
        if let Some(tx) = self.tx.take() {
            tx.commit().await?;
        }
        Ok(())
    }

    async fn close(&mut self) {
        if let Some(tx) = self.tx.take() {
            warn!("Rolling back uncommitted warehouse transaction");
            if let Err(e) = tx.rollback().await {
                warn!("Rollback failed: {}", e);
            }
        }
        self.pool.close().await;
    }
}
