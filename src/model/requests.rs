/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::PAGE_SIZE;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Query parameters of the first ticker listing request
///
/// Follow-up pages carry their own parameters inside `next_url`, so this query is
/// only attached to the initial request. The API key is appended separately and is
/// never part of this struct.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListingQuery {
    /// Market filter
    pub market: String,
    /// Only list tickers that are actively traded
    pub active: bool,
    /// Sort direction
    pub order: String,
    /// Page size
    pub limit: u32,
    /// Sort key
    pub sort: String,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            market: "stocks".to_string(),
            active: true,
            order: "asc".to_string(),
            limit: PAGE_SIZE,
            sort: "ticker".to_string(),
        }
    }
}
