//! Roster — the immutable set of devices produced by one discovery query.

use crate::device::DeviceRecord;
use crate::error::NotFoundError;
use crate::time::Timestamp;

/// A complete snapshot of the discovered devices.
///
/// Rosters are never edited in place; a new discovery produces a new roster.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    devices: Vec<DeviceRecord>,
    loaded_at: Option<Timestamp>,
}

impl Roster {
    #[must_use]
    pub fn new(devices: Vec<DeviceRecord>, loaded_at: Timestamp) -> Self {
        Self {
            devices,
            loaded_at: Some(loaded_at),
        }
    }

    #[must_use]
    pub fn devices(&self) -> &[DeviceRecord] {
        &self.devices
    }

    /// When this roster was produced; `None` for the initial empty roster.
    #[must_use]
    pub fn loaded_at(&self) -> Option<Timestamp> {
        self.loaded_at
    }

    /// Find a device by display name. First match wins.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] when no device carries `name`.
    pub fn find_by_name(&self, name: &str) -> Result<&DeviceRecord, NotFoundError> {
        self.devices
            .iter()
            .find(|d| d.name == name)
            .ok_or_else(|| NotFoundError {
                entity: "Device",
                name: name.to_string(),
            })
    }

    /// Display names in roster order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.devices.iter().map(|d| d.name.clone()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}
