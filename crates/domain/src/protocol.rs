//! Wire value types exchanged with the two protocol families.
//!
//! Field names follow the property-addressed wire format (`siid` = service
//! id, `piid` = property id) so these types serialize straight onto the wire.

use serde::{Deserialize, Serialize};

/// Action names understood by action-invocation lamps.
pub mod actions {
    pub const TOGGLE: &str = "light_toggle_2_1";
    pub const SET_BRIGHTNESS: &str = "light_brightness_2_2";
    pub const SET_COLOR_TEMPERATURE: &str = "light_color_temp_2_3";
}

/// Fixed property coordinates of the light service on property-addressed
/// lamps.
pub mod properties {
    use super::PropertyAddress;

    pub const POWER: PropertyAddress = PropertyAddress::new(2, 1);
    pub const BRIGHTNESS: PropertyAddress = PropertyAddress::new(2, 2);
    pub const COLOR_TEMPERATURE: PropertyAddress = PropertyAddress::new(2, 3);
}

/// A named remote procedure call with positional arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionCall {
    pub name: String,
    pub args: Vec<serde_json::Value>,
}

impl ActionCall {
    #[must_use]
    pub fn new(name: impl Into<String>, args: Vec<serde_json::Value>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }
}

/// A `(service, property)` coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyAddress {
    pub siid: u32,
    pub piid: u32,
}

impl PropertyAddress {
    #[must_use]
    pub const fn new(siid: u32, piid: u32) -> Self {
        Self { siid, piid }
    }

    /// Pair this address with a value to write.
    #[must_use]
    pub fn write(self, value: impl Into<serde_json::Value>) -> PropertyWrite {
        PropertyWrite {
            siid: self.siid,
            piid: self.piid,
            value: value.into(),
        }
    }
}

/// One `{siid, piid, value}` triple of a `set_properties` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyWrite {
    pub siid: u32,
    pub piid: u32,
    pub value: serde_json::Value,
}

impl PropertyWrite {
    #[must_use]
    pub fn address(&self) -> PropertyAddress {
        PropertyAddress::new(self.siid, self.piid)
    }
}

/// One entry of a `get_properties` response.
///
/// `code` is `0` on success; `value` is absent when the read failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyReading {
    pub siid: u32,
    pub piid: u32,
    pub code: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

impl PropertyReading {
    #[must_use]
    pub fn address(&self) -> PropertyAddress {
        PropertyAddress::new(self.siid, self.piid)
    }
}

/// Per-triple status returned by a `set_properties` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyWriteStatus {
    pub siid: u32,
    pub piid: u32,
    pub code: i64,
}
