use crate::constants::SNAPSHOT_DATE_FORMAT;
use crate::presentation::instrument::{InstrumentRecord, RawRecord};
use crate::utils::config::parse_flag;
use chrono::NaiveDate;
use serde_json::Value;

/// Projects raw listing entries onto [`InstrumentRecord`]
///
/// Every record receives the same `snapshot_date`, formatted `YYYY-MM-DD`,
/// whatever date-like value the raw entry carries.
pub fn normalize(raw_records: &[RawRecord], snapshot_date: NaiveDate) -> Vec<InstrumentRecord> {
    let snapshot_date = snapshot_date.format(SNAPSHOT_DATE_FORMAT).to_string();
    raw_records
        .iter()
        .map(|raw| normalize_record(raw, &snapshot_date))
        .collect()
}

/// Normalizes a single raw entry
pub fn normalize_record(raw: &RawRecord, snapshot_date: &str) -> InstrumentRecord {
    InstrumentRecord {
        ticker: text(raw, "ticker"),
        name: text(raw, "name"),
        market: text(raw, "market"),
        locale: text(raw, "locale"),
        primary_exchange: text(raw, "primary_exchange"),
        security_type: text(raw, "type"),
        active: flag(raw, "active"),
        currency_name: text(raw, "currency_name"),
        cik: text(raw, "cik"),
        composite_figi: text(raw, "composite_figi"),
        share_class_figi: text(raw, "share_class_figi"),
        last_updated_utc: text(raw, "last_updated_utc"),
        snapshot_date: snapshot_date.to_string(),
    }
}

fn text(raw: &RawRecord, key: &str) -> String {
    match raw.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn flag(raw: &RawRecord, key: &str) -> Option<bool> {
    match raw.get(key)? {
        Value::Bool(b) => Some(*b),
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => parse_flag(s),
        Value::Number(n) => n.as_f64().map(|v| v != 0.0),
        _ => None,
    }
}
