//! History storage backends.

use crate::record::{HistoryRecord, HISTORY_COLUMNS};
use invest_core::{Error, Result};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Destination for approved-investment records.
pub trait RecordSink {
    fn record(&mut self, record: &HistoryRecord) -> Result<()>;
}

/// CSV file store. Rows are only ever appended.
#[derive(Debug, Clone)]
pub struct CsvHistoryStore {
    path: PathBuf,
}

impl CsvHistoryStore {
    /// Open the store at `path`, writing the header if the file is missing or empty.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let needs_header = match fs::metadata(&path) {
            Ok(meta) => meta.len() == 0,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => true,
            Err(e) => return Err(e.into()),
        };

        let store = Self { path };
        if needs_header {
            let mut writer = csv::Writer::from_path(&store.path)?;
            writer.write_record(HISTORY_COLUMNS)?;
            writer.flush()?;
            info!(path = %store.path.display(), "Initialized history store");
        } else {
            store.check_header()?;
        }

        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record to the end of the file.
    pub fn append(&self, record: &HistoryRecord) -> Result<()> {
        let file = OpenOptions::new().append(true).open(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer.serialize(record)?;
        writer.flush()?;

        debug!(
            path = %self.path.display(),
            investor_return = record.investor_return,
            "Appended history record"
        );
        Ok(())
    }

    /// Read every record in insertion order.
    pub fn load_all(&self) -> Result<Vec<HistoryRecord>> {
        let mut reader = csv::Reader::from_path(&self.path)?;
        Self::ensure_columns(reader.headers()?)?;

        let records = reader
            .deserialize()
            .collect::<std::result::Result<Vec<HistoryRecord>, csv::Error>>()?;
        debug!(count = records.len(), "Loaded history records");
        Ok(records)
    }

    fn check_header(&self) -> Result<()> {
        let mut reader = csv::Reader::from_path(&self.path)?;
        let headers = reader.headers()?;
        Self::ensure_columns(headers)
    }

    fn ensure_columns(headers: &csv::StringRecord) -> Result<()> {
        if headers.iter().ne(HISTORY_COLUMNS) {
            return Err(Error::History {
                message: format!(
                    "unexpected columns {:?}, expected {:?}",
                    headers.iter().collect::<Vec<_>>(),
                    HISTORY_COLUMNS
                ),
            });
        }
        Ok(())
    }
}

impl RecordSink for CsvHistoryStore {
    fn record(&mut self, record: &HistoryRecord) -> Result<()> {
        self.append(record)
    }
}

/// In-memory store for callers that do not persist history.
#[derive(Debug, Clone, Default)]
pub struct MemoryHistoryStore {
    records: Vec<HistoryRecord>,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }
}

impl RecordSink for MemoryHistoryStore {
    fn record(&mut self, record: &HistoryRecord) -> Result<()> {
        self.records.push(record.clone());
        Ok(())
    }
}
