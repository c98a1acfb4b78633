//! Device registry — owns the current roster and swaps it atomically.
//!
//! Readers clone the `Arc` of the current snapshot under a short read lock and
//! then work lock-free, so a lookup sees either the previous roster or the
//! next one in full.

use std::sync::{Arc, PoisonError, RwLock};

use lumen_domain::device::DeviceRecord;
use lumen_domain::error::LumenError;
use lumen_domain::roster::Roster;
use lumen_domain::time::now;

/// Holder of the current [`Roster`].
#[derive(Debug, Default)]
pub struct DeviceRegistry {
    roster: RwLock<Arc<Roster>>,
}

impl DeviceRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole roster. No merge, no dedup.
    #[tracing::instrument(skip(self, records), fields(count = records.len()))]
    pub fn replace_all(&self, records: Vec<DeviceRecord>) -> Arc<Roster> {
        let next = Arc::new(Roster::new(records, now()));
        let mut guard = self
            .roster
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::clone(&next);
        tracing::debug!("roster replaced");
        next
    }

    /// The current roster snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Roster> {
        let guard = self.roster.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Look up a device by display name in the current snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`LumenError::NotFound`] when no device carries `name`.
    pub fn find_by_name(&self, name: &str) -> Result<DeviceRecord, LumenError> {
        let roster = self.snapshot();
        let record = roster.find_by_name(name)?;
        Ok(record.clone())
    }
}
