//! Controller for property-addressed devices.
//!
//! Brightness and color temperature are single-triple `set_properties`
//! writes. Toggle reads the power property first and writes its negation;
//! a failed or unreadable read ends the command before anything is written.
//! A write only succeeds when the device returns a zero status for the
//! written coordinate.

use lumen_domain::device::Endpoint;
use lumen_domain::error::{LumenError, ProtocolError, TransportError};
use lumen_domain::protocol::{PropertyAddress, PropertyWrite, properties};

use super::Acknowledgement;
use crate::ports::PropertyTransport;

pub struct PropertyController<'t, T> {
    transport: &'t T,
    endpoint: Endpoint,
}

impl<'t, T: PropertyTransport + Sync> PropertyController<'t, T> {
    #[must_use]
    pub fn new(transport: &'t T, endpoint: Endpoint) -> Self {
        Self {
            transport,
            endpoint,
        }
    }

    /// Read the power state and write back its negation.
    ///
    /// # Errors
    ///
    /// Returns [`LumenError::Transport`] when the read or write fails or is
    /// rejected, and [`LumenError::Protocol`] when the read returns no
    /// boolean for the power property.
    pub async fn toggle(&self) -> Result<Acknowledgement, LumenError> {
        let current = self.read_bool(properties::POWER).await?;
        self.write(properties::POWER.write(!current)).await
    }

    /// # Errors
    ///
    /// Returns [`LumenError::Transport`] when the write fails or is rejected.
    pub async fn set_brightness(&self, value: u32) -> Result<Acknowledgement, LumenError> {
        self.write(properties::BRIGHTNESS.write(value)).await
    }

    /// # Errors
    ///
    /// Returns [`LumenError::Transport`] when the write fails or is rejected.
    pub async fn set_color_temperature(&self, value: u32) -> Result<Acknowledgement, LumenError> {
        self.write(properties::COLOR_TEMPERATURE.write(value)).await
    }

    async fn read_bool(&self, address: PropertyAddress) -> Result<bool, LumenError> {
        tracing::debug!(
            address = %self.endpoint.address,
            siid = address.siid,
            piid = address.piid,
            "reading property"
        );
        let readings = self
            .transport
            .read_properties(&self.endpoint, &[address])
            .await?;

        let reading = readings
            .into_iter()
            .find(|r| r.address() == address)
            .ok_or(ProtocolError::MissingReading {
                siid: address.siid,
                piid: address.piid,
            })?;

        if reading.code != 0 {
            return Err(TransportError::Rejected {
                code: reading.code,
                message: format!(
                    "get_properties failed for siid {} piid {}",
                    address.siid, address.piid
                ),
            }
            .into());
        }

        match reading.value {
            Some(serde_json::Value::Bool(value)) => Ok(value),
            other => Err(ProtocolError::UnexpectedValue {
                siid: address.siid,
                piid: address.piid,
                found: other.map_or_else(|| "nothing".to_string(), |v| v.to_string()),
            }
            .into()),
        }
    }

    async fn write(&self, write: PropertyWrite) -> Result<Acknowledgement, LumenError> {
        tracing::debug!(
            address = %self.endpoint.address,
            siid = write.siid,
            piid = write.piid,
            value = %write.value,
            "writing property"
        );
        let statuses = self
            .transport
            .write_properties(&self.endpoint, std::slice::from_ref(&write))
            .await?;

        if let Some(status) = statuses.iter().find(|s| s.code != 0) {
            return Err(TransportError::Rejected {
                code: status.code,
                message: format!(
                    "set_properties failed for siid {} piid {}",
                    status.siid, status.piid
                ),
            }
            .into());
        }
        if !statuses.iter().any(|s| s.siid == write.siid && s.piid == write.piid) {
            return Err(ProtocolError::MissingWriteStatus {
                siid: write.siid,
                piid: write.piid,
            }
            .into());
        }
        Ok(Acknowledgement::Properties(statuses))
    }
}
