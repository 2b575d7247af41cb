//! Shared record sink for concurrently running annotation tasks

use annotab_core::{Error, Record, Result};
use parking_lot::Mutex;
use std::sync::Arc;

/// Append-only collection shared by every annotation task of one batch.
///
/// Cloning produces another handle to the same collection. Inserts are atomic
/// with respect to each other; relative order follows task completion, not
/// input order. Reading while producers are still running is prevented by the
/// coordinator's barrier, not by the sink itself.
#[derive(Clone, Default)]
pub struct RecordSink {
    records: Arc<Mutex<Vec<Record>>>,
}

impl RecordSink {
    /// Create a fresh, empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one record.
    ///
    /// Safe to call from any number of tasks at once; no insert is lost and
    /// no partial entry is ever observable.
    pub fn insert(&self, record: Record) -> Result<()> {
        self.records.lock().push(record);
        Ok(())
    }

    /// Number of records collected so far
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    /// Whether no records have been collected yet
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Consume the sink and return the collected records.
    ///
    /// Fails if another handle is still alive, since that would mean the
    /// barrier was released while a producer could still insert.
    pub fn into_records(self) -> Result<Vec<Record>> {
        let records = Arc::try_unwrap(self.records)
            .map_err(|_| Error::aggregation("sink read while producer handles are still alive"))?;
        Ok(records.into_inner())
    }
}
