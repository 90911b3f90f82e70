//! History Store
//!
//! Append-only record of approved investments, kept as a CSV table whose
//! row order is insertion order.
//!
//! # Example
//!
//! ```ignore
//! use history_store::{CsvHistoryStore, HistoryRecord, RecordSink};
//!
//! let mut store = CsvHistoryStore::open("investment_ml_data.csv")?;
//! if let Some(record) = HistoryRecord::from_result(&params, &result) {
//!     store.record(&record)?;
//! }
//! for row in store.load_all()? {
//!     println!("{:.0}", row.investor_return);
//! }
//! ```

pub mod record;
pub mod store;

pub use record::{HistoryRecord, HISTORY_COLUMNS};
pub use store::{CsvHistoryStore, MemoryHistoryStore, RecordSink};
