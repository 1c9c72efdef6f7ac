use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// A listing entry exactly as returned by the API
pub type RawRecord = serde_json::Map<String, serde_json::Value>;

/// Column order of the snapshot file and of the warehouse table
///
/// Must match the declaration order of [`InstrumentRecord`].
pub const INSTRUMENT_FIELDS: [&str; 13] = [
    "ticker",
    "name",
    "market",
    "locale",
    "primary_exchange",
    "type",
    "active",
    "currency_name",
    "cik",
    "composite_figi",
    "share_class_figi",
    "last_updated_utc",
    "snapshot_date",
];

/// Reference data of one tradable security, normalized for a snapshot
///
/// Text fields absent from the source are empty strings. `active` is `None` when
/// the source carried no usable value and is then written as an empty cell.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct InstrumentRecord {
    /// Exchange symbol
    pub ticker: String,
    /// Issuer or fund name
    pub name: String,
    /// Market type, e.g. `stocks`
    pub market: String,
    /// Locale, e.g. `us`
    pub locale: String,
    /// ISO 10383 MIC of the primary listing exchange
    pub primary_exchange: String,
    /// Security type code, e.g. `CS`
    #[serde(rename = "type")]
    pub security_type: String,
    /// Whether the ticker is actively traded
    pub active: Option<bool>,
    /// Trading currency
    pub currency_name: String,
    /// SEC Central Index Key
    pub cik: String,
    /// Composite OpenFIGI
    pub composite_figi: String,
    /// Share class OpenFIGI
    pub share_class_figi: String,
    /// Upstream last-update timestamp, carried verbatim
    pub last_updated_utc: String,
    /// Run-wide snapshot date (`YYYY-MM-DD`)
    pub snapshot_date: String,
}

impl InstrumentRecord {
    /// Cell values in [`INSTRUMENT_FIELDS`] order
    pub fn to_row(&self) -> [String; 13] {
        [
            self.ticker.clone(),
            self.name.clone(),
            self.market.clone(),
            self.locale.clone(),
            self.primary_exchange.clone(),
            self.security_type.clone(),
            self.active.map(|a| a.to_string()).unwrap_or_default(),
            self.currency_name.clone(),
            self.cik.clone(),
            self.composite_figi.clone(),
            self.share_class_figi.clone(),
            self.last_updated_utc.clone(),
            self.snapshot_date.clone(),
        ]
    }
}
