/// Paginated ticker listing client
pub mod fetcher;
/// Raw record to [`InstrumentRecord`](crate::presentation::instrument::InstrumentRecord) projection
pub mod normalizer;

pub use fetcher::{FetchOutcome, PageCompletion, TickerFetcher, TruncationReason};
pub use normalizer::{normalize, normalize_record};
