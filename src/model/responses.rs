/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::presentation::instrument::RawRecord;
use serde_json::Value;
use tracing::warn;

/// One decoded page of the ticker listing
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageResponse {
    /// Records of the page, `None` when `results` is absent or not a list
    pub results: Option<Vec<RawRecord>>,
    /// Locator of the next page, `None` when the listing is exhausted
    pub next_url: Option<String>,
}

impl PageResponse {
    /// Interprets a decoded JSON body as a listing page
    ///
    /// Entries of `results` that are not JSON objects are dropped. An empty
    /// `next_url` is treated as absent.
    pub fn from_value(mut body: Value) -> Self {
        let next_url = match body.get("next_url") {
            Some(Value::String(url)) if !url.trim().is_empty() => Some(url.clone()),
            _ => None,
        };

        let results = match body.get_mut("results").map(Value::take) {
            Some(Value::Array(items)) => {
                let total = items.len();
                let records: Vec<RawRecord> = items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::Object(map) => Some(map),
                        _ => None,
                    })
                    .collect();
                if records.len() != total {
                    warn!(
                        "Dropped {} listing entries that were not objects",
                        total - records.len()
                    );
                }
                Some(records)
            }
            _ => None,
        };

        Self { results, next_url }
    }
}
