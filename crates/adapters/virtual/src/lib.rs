//! # lumen-adapter-virtual
//!
//! Simulated lamps for demos and end-to-end tests.
//!
//! [`VirtualFleet`] plays every external role the core needs: it answers
//! roster queries for one configured account and serves as the transport for
//! both protocol families.
//!
//! ## Behaviour
//!
//! | Situation | Answer |
//! |-----------|--------|
//! | no lamp at the endpoint address | [`TransportError::Unreachable`] |
//! | wrong token for the lamp | [`TransportError::Timeout`] (the lamp ignores the packet) |
//! | call from the other protocol family | rejection with code `-32601` |
//! | unknown property | reading / status code `-4003` |
//! | out-of-range or mistyped value | status code `-4005` |
//!
//! ## Dependency rule
//!
//! Depends on `lumen-app` (port traits) and `lumen-domain` only.

pub mod config;
mod devices;
pub mod error;

use std::time::Duration;

use lumen_app::ports::{AccountCredentials, ActionTransport, DiscoveryProvider, PropertyTransport};
use lumen_domain::device::{DiscoveredDevice, Endpoint};
use lumen_domain::error::{LumenError, TransportError};
use lumen_domain::protocol::{
    ActionCall, PropertyAddress, PropertyReading, PropertyWrite, PropertyWriteStatus,
};

pub use config::{VirtualConfig, VirtualDeviceConfig};
pub use devices::{LampState, VirtualLamp, codes};
pub use error::VirtualError;

/// A set of simulated lamps plus the account that owns them.
pub struct VirtualFleet {
    enabled: bool,
    username: String,
    password: String,
    latency: Duration,
    lamps: Vec<VirtualLamp>,
}

impl VirtualFleet {
    #[must_use]
    pub fn new(config: VirtualConfig) -> Self {
        Self {
            enabled: config.enabled,
            username: config.username,
            password: config.password,
            latency: Duration::from_millis(config.latency_ms),
            lamps: config.devices.into_iter().map(VirtualLamp::new).collect(),
        }
    }

    /// The lamp listening on `address`, if any.
    #[must_use]
    pub fn lamp(&self, address: &str) -> Option<&VirtualLamp> {
        self.lamps.iter().find(|l| l.address() == Some(address))
    }

    fn reach(&self, endpoint: &Endpoint) -> Result<&VirtualLamp, TransportError> {
        let lamp = self
            .lamp(&endpoint.address)
            .ok_or_else(|| TransportError::Unreachable {
                address: endpoint.address.clone(),
            })?;
        if !lamp.accepts(&endpoint.credential) {
            tracing::debug!(address = %endpoint.address, "token mismatch, dropping packet");
            return Err(TransportError::Timeout);
        }
        Ok(lamp)
    }

    async fn round_trip(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

impl Default for VirtualFleet {
    fn default() -> Self {
        Self::new(VirtualConfig::default())
    }
}

impl DiscoveryProvider for VirtualFleet {
    async fn query_roster(
        &self,
        credentials: &AccountCredentials,
    ) -> Result<Vec<DiscoveredDevice>, LumenError> {
        if !self.enabled {
            return Err(VirtualError::Disabled.into());
        }
        if credentials.username != self.username || credentials.password.expose() != self.password
        {
            return Err(VirtualError::InvalidCredentials.into());
        }
        self.round_trip().await;
        let roster: Vec<_> = self.lamps.iter().map(VirtualLamp::discover).collect();
        tracing::info!(count = roster.len(), "virtual roster served");
        Ok(roster)
    }
}

impl ActionTransport for VirtualFleet {
    async fn invoke_action(
        &self,
        endpoint: &Endpoint,
        call: &ActionCall,
    ) -> Result<serde_json::Value, TransportError> {
        self.round_trip().await;
        let status = self.reach(endpoint)?.invoke_action(call)?;
        tracing::debug!(address = %endpoint.address, action = %call.name, "virtual action applied");
        Ok(status)
    }
}

impl PropertyTransport for VirtualFleet {
    async fn read_properties(
        &self,
        endpoint: &Endpoint,
        addresses: &[PropertyAddress],
    ) -> Result<Vec<PropertyReading>, TransportError> {
        self.round_trip().await;
        self.reach(endpoint)?.read_properties(addresses)
    }

    async fn write_properties(
        &self,
        endpoint: &Endpoint,
        writes: &[PropertyWrite],
    ) -> Result<Vec<PropertyWriteStatus>, TransportError> {
        self.round_trip().await;
        let statuses = self.reach(endpoint)?.write_properties(writes)?;
        tracing::debug!(address = %endpoint.address, count = statuses.len(), "virtual properties written");
        Ok(statuses)
    }
}
