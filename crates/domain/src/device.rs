//! Device records — what discovery tells us about a controllable lamp.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{LumenError, ValidationError};

/// Placeholder for a missing address or credential.
pub const NOT_AVAILABLE: &str = "N/A";

/// Placeholder for a missing model identifier.
pub const UNKNOWN_MODEL: &str = "Unknown";

/// Opaque secret used to authenticate against a device.
///
/// The value never shows up in `Debug` output or serialized responses.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Access the raw secret, for transports only.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Where and how to reach one device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub address: String,
    pub credential: Credential,
}

/// A device as known to the registry.
///
/// `name` is the lookup key; `model` selects the protocol family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceRecord {
    pub id: String,
    pub name: String,
    pub address: String,
    #[serde(skip)]
    pub credential: Credential,
    pub model: String,
}

impl DeviceRecord {
    /// Create a builder for constructing a [`DeviceRecord`].
    #[must_use]
    pub fn builder() -> DeviceRecordBuilder {
        DeviceRecordBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`LumenError::Validation`] when `name` is empty.
    pub fn validate(&self) -> Result<(), LumenError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }

    /// Build the transport endpoint for this device.
    #[must_use]
    pub fn endpoint(&self) -> Endpoint {
        Endpoint {
            address: self.address.clone(),
            credential: self.credential.clone(),
        }
    }
}

impl From<DiscoveredDevice> for DeviceRecord {
    /// Fill every absent field with its documented placeholder.
    fn from(dev: DiscoveredDevice) -> Self {
        let name = dev
            .name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| format!("Device {}", dev.id));
        Self {
            id: dev.id,
            name,
            address: dev.address.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            credential: Credential::new(dev.credential.as_deref().unwrap_or(NOT_AVAILABLE)),
            model: dev.model.unwrap_or_else(|| UNKNOWN_MODEL.to_string()),
        }
    }
}

/// Step-by-step builder for [`DeviceRecord`].
#[derive(Debug, Default)]
pub struct DeviceRecordBuilder {
    id: Option<String>,
    name: Option<String>,
    address: Option<String>,
    credential: Option<Credential>,
    model: Option<String>,
}

impl DeviceRecordBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    #[must_use]
    pub fn credential(mut self, secret: impl Into<String>) -> Self {
        self.credential = Some(Credential::new(secret));
        self
    }

    #[must_use]
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Consume the builder, validate, and return a [`DeviceRecord`].
    ///
    /// Missing address, credential and model fall back to the same
    /// placeholders discovery uses.
    ///
    /// # Errors
    ///
    /// Returns [`LumenError::Validation`] if `name` is missing or empty.
    pub fn build(self) -> Result<DeviceRecord, LumenError> {
        let name = self.name.unwrap_or_default();
        let record = DeviceRecord {
            id: self.id.unwrap_or_else(|| name.clone()),
            name,
            address: self.address.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            credential: self
                .credential
                .unwrap_or_else(|| Credential::new(NOT_AVAILABLE)),
            model: self.model.unwrap_or_else(|| UNKNOWN_MODEL.to_string()),
        };
        record.validate()?;
        Ok(record)
    }
}

/// One raw entry as returned by a discovery provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DiscoveredDevice {
    pub id: String,
    pub name: Option<String>,
    pub address: Option<String>,
    pub credential: Option<String>,
    pub model: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_record_when_name_provided() {
        let record = DeviceRecord::builder()
            .id("123")
            .name("Lamp1")
            .address("10.0.0.5")
            .credential("tok1")
            .model("xiaomi.light.lamp30.v1")
            .build()
            .unwrap();
        assert_eq!(record.name, "Lamp1");
        assert_eq!(record.credential.expose(), "tok1");
    }

    #[test]
    fn should_reject_record_without_name() {
        let result = DeviceRecord::builder().address("10.0.0.5").build();
        assert!(matches!(
            result,
            Err(LumenError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_fill_placeholders_for_missing_discovery_fields() {
        let record = DeviceRecord::from(DiscoveredDevice {
            id: "98765".to_string(),
            ..DiscoveredDevice::default()
        });
        assert_eq!(record.name, "Device 98765");
        assert_eq!(record.address, NOT_AVAILABLE);
        assert_eq!(record.credential.expose(), NOT_AVAILABLE);
        assert_eq!(record.model, UNKNOWN_MODEL);
    }

    #[test]
    fn should_keep_discovered_fields_when_present() {
        let record = DeviceRecord::from(DiscoveredDevice {
            id: "1".to_string(),
            name: Some("HuayiLamp".to_string()),
            address: Some("10.0.0.6".to_string()),
            credential: Some("tok2".to_string()),
            model: Some("huayi.light.v2".to_string()),
        });
        assert_eq!(record.name, "HuayiLamp");
        assert_eq!(record.address, "10.0.0.6");
        assert_eq!(record.model, "huayi.light.v2");
    }

    #[test]
    fn should_redact_credential_in_debug_output() {
        let record = DeviceRecord::builder()
            .name("Lamp1")
            .credential("super-secret")
            .build()
            .unwrap();
        let debug = format!("{record:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("Credential(***)"));
    }

    #[test]
    fn should_not_serialize_credential() {
        let record = DeviceRecord::builder()
            .name("Lamp1")
            .credential("super-secret")
            .build()
            .unwrap();
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("super-secret"));
        assert!(!json.contains("credential"));
    }

    #[test]
    fn should_build_endpoint_from_address_and_credential() {
        let record = DeviceRecord::builder()
            .name("Lamp1")
            .address("10.0.0.5")
            .credential("tok1")
            .build()
            .unwrap();
        let endpoint = record.endpoint();
        assert_eq!(endpoint.address, "10.0.0.5");
        assert_eq!(endpoint.credential, Credential::new("tok1"));
    }
}
