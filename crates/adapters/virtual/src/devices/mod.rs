//! Simulated lamps.
//!
//! Each lamp emulates the firmware of one protocol family, chosen from its
//! model string the same way the controllers choose. Lamps whose model matches
//! no family still show up in discovery but answer every call with
//! "method not found".

mod action;
mod property;

use std::sync::{Mutex, MutexGuard, PoisonError};

use lumen_domain::device::{Credential, DiscoveredDevice};
use lumen_domain::error::TransportError;
use lumen_domain::model::ProtocolFamily;
use lumen_domain::protocol::{
    ActionCall, PropertyAddress, PropertyReading, PropertyWrite, PropertyWriteStatus,
};

use crate::config::VirtualDeviceConfig;

/// Firmware result codes.
pub mod codes {
    pub const OK: i64 = 0;
    pub const PROPERTY_NOT_FOUND: i64 = -4003;
    pub const INVALID_VALUE: i64 = -4005;
    pub const INVALID_ARGS: i64 = -5001;
    pub const METHOD_NOT_FOUND: i64 = -32601;
}

/// Observable state of a simulated lamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LampState {
    pub power: bool,
    pub brightness: u32,
    pub color_temperature: u32,
}

impl Default for LampState {
    fn default() -> Self {
        Self {
            power: false,
            brightness: 50,
            color_temperature: 4000,
        }
    }
}

/// A simulated lamp reachable at a fixed address.
pub struct VirtualLamp {
    config: VirtualDeviceConfig,
    family: Option<ProtocolFamily>,
    state: Mutex<LampState>,
}

impl VirtualLamp {
    #[must_use]
    pub fn new(config: VirtualDeviceConfig) -> Self {
        let family = config
            .model
            .as_deref()
            .and_then(|model| ProtocolFamily::resolve(model).ok());
        Self {
            config,
            family,
            state: Mutex::new(LampState::default()),
        }
    }

    #[must_use]
    pub fn address(&self) -> Option<&str> {
        self.config.address.as_deref()
    }

    /// Whether `credential` matches this lamp's token.
    #[must_use]
    pub fn accepts(&self, credential: &Credential) -> bool {
        self.config.token.as_deref() == Some(credential.expose())
    }

    /// The entry discovery reports for this lamp.
    #[must_use]
    pub fn discover(&self) -> DiscoveredDevice {
        DiscoveredDevice {
            id: self.config.id.clone(),
            name: self.config.name.clone(),
            address: self.config.address.clone(),
            credential: self.config.token.clone(),
            model: self.config.model.clone(),
        }
    }

    #[must_use]
    pub fn state(&self) -> LampState {
        *self.lock_state()
    }

    /// Run a named action.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Rejected`] when the lamp does not speak the
    /// action-invocation protocol or refuses the call.
    pub fn invoke_action(&self, call: &ActionCall) -> Result<serde_json::Value, TransportError> {
        match self.family {
            Some(ProtocolFamily::ActionInvocation) => action::handle(&mut self.lock_state(), call),
            _ => Err(method_not_found("action")),
        }
    }

    /// Answer a `get_properties` call.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Rejected`] when the lamp does not speak the
    /// property-addressed protocol.
    pub fn read_properties(
        &self,
        addresses: &[PropertyAddress],
    ) -> Result<Vec<PropertyReading>, TransportError> {
        match self.family {
            Some(ProtocolFamily::PropertyAddressed) => {
                Ok(property::read(&self.lock_state(), addresses))
            }
            _ => Err(method_not_found("get_properties")),
        }
    }

    /// Answer a `set_properties` call.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Rejected`] when the lamp does not speak the
    /// property-addressed protocol.
    pub fn write_properties(
        &self,
        writes: &[PropertyWrite],
    ) -> Result<Vec<PropertyWriteStatus>, TransportError> {
        match self.family {
            Some(ProtocolFamily::PropertyAddressed) => {
                Ok(property::write(&mut self.lock_state(), writes))
            }
            _ => Err(method_not_found("set_properties")),
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, LampState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn method_not_found(method: &str) -> TransportError {
    TransportError::Rejected {
        code: codes::METHOD_NOT_FOUND,
        message: format!("method not found: {method}"),
    }
}

/// Parse an integer argument within `range`.
fn int_in_range(
    value: &serde_json::Value,
    range: &std::ops::RangeInclusive<u32>,
) -> Option<u32> {
    value
        .as_u64()
        .and_then(|v| u32::try_from(v).ok())
        .filter(|v| range.contains(v))
}
