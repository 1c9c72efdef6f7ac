#![allow(dead_code)]
// Shared fixtures for unit and integration tests

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use ticker_snapshot::error::AppError;
use ticker_snapshot::presentation::instrument::InstrumentRecord;
use ticker_snapshot::storage::config::{TableTarget, WarehouseConfig, WarehouseCredentials};
use ticker_snapshot::storage::warehouse::{WarehouseRow, WarehouseSession, WarehouseSink};

/// One interaction with the recording warehouse
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Connect,
    EnsureTable(String),
    InsertBatch(usize),
    Commit,
    Close,
}

/// In-memory warehouse that records every call it receives
#[derive(Clone, Default)]
pub struct RecordingSink {
    calls: Arc<Mutex<Vec<Call>>>,
    committed: Arc<Mutex<Vec<(InstrumentRecord, NaiveDate)>>>,
    fail_on_batch: Option<usize>,
    fail_on_commit: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the n-th insert (1-based) fail
    pub fn failing_on_batch(batch: usize) -> Self {
        Self {
            fail_on_batch: Some(batch),
            ..Self::default()
        }
    }

    /// Makes every commit fail after recording the call
    pub fn failing_on_commit() -> Self {
        Self {
            fail_on_commit: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn committed(&self) -> Vec<(InstrumentRecord, NaiveDate)> {
        self.committed.lock().unwrap().clone()
    }

    pub fn batch_sizes(&self) -> Vec<usize> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::InsertBatch(n) => Some(n),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, wanted: &Call) -> usize {
        self.calls().iter().filter(|c| *c == wanted).count()
    }
}

#[async_trait]
impl WarehouseSink for RecordingSink {
    async fn connect(
        &self,
        _credentials: &WarehouseCredentials,
    ) -> Result<Box<dyn WarehouseSession>, AppError> {
        self.calls.lock().unwrap().push(Call::Connect);
        Ok(Box::new(RecordingSession {
            calls: self.calls.clone(),
            committed: self.committed.clone(),
            pending: Vec::new(),
            fail_on_batch: self.fail_on_batch,
            fail_on_commit: self.fail_on_commit,
            batches: 0,
        }))
    }
}

struct RecordingSession {
    calls: Arc<Mutex<Vec<Call>>>,
    committed: Arc<Mutex<Vec<(InstrumentRecord, NaiveDate)>>>,
    pending: Vec<(InstrumentRecord, NaiveDate)>,
    fail_on_batch: Option<usize>,
    fail_on_commit: bool,
    batches: usize,
}

#[async_trait]
impl WarehouseSession for RecordingSession {
    async fn ensure_table(&mut self, target: &TableTarget) -> Result<(), AppError> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::EnsureTable(target.qualified_name()));
        Ok(())
    }

    async fn insert_batch(
        &mut self,
        _target: &TableTarget,
        rows: &[WarehouseRow<'_>],
    ) -> Result<u64, AppError> {
        self.batches += 1;
        self.calls.lock().unwrap().push(Call::InsertBatch(rows.len()));
        if self.fail_on_batch == Some(self.batches) {
            return Err(AppError::Warehouse("injected batch failure".to_string()));
        }
        self.pending
            .extend(rows.iter().map(|row| (row.record.clone(), row.ds)));
        Ok(rows.len() as u64)
    }

    async fn commit(&mut self) -> Result<(), AppError> {
        self.calls.lock().unwrap().push(Call::Commit);
        if self.fail_on_commit {
            return Err(AppError::Warehouse("injected commit failure".to_string()));
        }
        self.committed.lock().unwrap().append(&mut self.pending);
        Ok(())
    }

    async fn close(&mut self) {
        self.calls.lock().unwrap().push(Call::Close);
        self.pending.clear();
    }
}

/// Warehouse configuration with every credential filled in
pub fn full_warehouse_config(push_enabled: bool) -> WarehouseConfig {
    WarehouseConfig {
        push_enabled,
        user: Some("loader".to_string()),
        password: Some("secret".to_string()),
        account: Some("localhost:5432".to_string()),
        database: Some("market".to_string()),
        schema: "PUBLIC".to_string(),
        table: "TICKERS".to_string(),
    }
}

/// A raw listing entry shaped like the upstream API output
pub fn raw_ticker(symbol: &str) -> Value {
    json!({
        "ticker": symbol,
        "name": format!("{symbol} Corporation"),
        "market": "stocks",
        "locale": "us",
        "primary_exchange": "XNYS",
        "type": "CS",
        "active": true,
        "currency_name": "usd",
        "cik": "0001439288",
        "composite_figi": "BBG000H8R0N8",
        "share_class_figi": "BBG001T36GB5",
        "last_updated_utc": "2025-09-11T06:11:10.586204443Z"
    })
}

/// A listing page body
pub fn page_body(symbols: &[&str], next_url: Option<&str>) -> String {
    let results: Vec<Value> = symbols.iter().map(|s| raw_ticker(s)).collect();
    let mut body = json!({ "status": "OK", "count": results.len(), "results": results });
    if let Some(url) = next_url {
        body["next_url"] = Value::String(url.to_string());
    }
    body.to_string()
}

/// Normalized records with the given snapshot date
pub fn records(count: usize, snapshot_date: &str) -> Vec<InstrumentRecord> {
    (0..count)
        .map(|i| InstrumentRecord {
            ticker: format!("T{i:05}"),
            name: format!("Ticker {i}"),
            market: "stocks".to_string(),
            active: Some(true),
            snapshot_date: snapshot_date.to_string(),
            ..Default::default()
        })
        .collect()
}
