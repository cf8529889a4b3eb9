//! Sink trait and in-memory buffering sink

use chrono::Utc;
use parking_lot::Mutex;

use crate::hit::{HitKind, HitRecord};
use crate::Result;

/// Where page-view hits go.
///
/// The capability follows the set-then-send shape of the measurement
/// protocol: `set_location` stores the document location, `send` emits a hit
/// carrying whatever location is currently set.
pub trait AnalyticsSink: Send + Sync {
    fn set_location(&self, url: &str) -> Result<()>;

    fn send(&self, kind: HitKind) -> Result<()>;
}

/// Buffers hits in memory.
///
/// Used by hosts that batch their reporting, and by tests.
#[derive(Default)]
pub struct MemorySink {
    location: Mutex<Option<String>>,
    hits: Mutex<Vec<HitRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything sent so far
    pub fn hits(&self) -> Vec<HitRecord> {
        self.hits.lock().clone()
    }

    /// Take the buffered hits, leaving the buffer empty
    pub fn drain(&self) -> Vec<HitRecord> {
        std::mem::take(&mut *self.hits.lock())
    }
}

impl AnalyticsSink for MemorySink {
    fn set_location(&self, url: &str) -> Result<()> {
        *self.location.lock() = Some(url.to_string());
        Ok(())
    }

    fn send(&self, kind: HitKind) -> Result<()> {
        let record = HitRecord {
            kind,
            location: self.location.lock().clone(),
            recorded_at: Utc::now(),
        };

        tracing::debug!(kind = %record.kind, location = ?record.location, "Buffered analytics hit");
        self.hits.lock().push(record);

        Ok(())
    }
}
