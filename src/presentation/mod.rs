/// Normalized instrument record and its fixed column layout
pub mod instrument;

pub use instrument::{INSTRUMENT_FIELDS, InstrumentRecord, RawRecord};
