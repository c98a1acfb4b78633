//! Roster service — loads the roster from discovery into the registry.

use std::sync::Arc;

use lumen_domain::device::DeviceRecord;
use lumen_domain::error::LumenError;
use lumen_domain::roster::Roster;

use crate::ports::{AccountCredentials, DiscoveryProvider};
use crate::registry::DeviceRegistry;

/// Application service for roster discovery.
pub struct RosterService<D> {
    provider: D,
    registry: Arc<DeviceRegistry>,
}

impl<D: DiscoveryProvider + Send + Sync> RosterService<D> {
    /// Create a new service writing into `registry`.
    pub fn new(provider: D, registry: Arc<DeviceRegistry>) -> Self {
        Self { provider, registry }
    }

    /// Query discovery and replace the roster wholesale.
    ///
    /// On failure the current roster is left untouched.
    ///
    /// # Errors
    ///
    /// Returns whatever error the discovery provider reported.
    #[tracing::instrument(skip(self, credentials), fields(username = %credentials.username))]
    pub async fn refresh(
        &self,
        credentials: &AccountCredentials,
    ) -> Result<Arc<Roster>, LumenError> {
        let discovered = self.provider.query_roster(credentials).await?;
        let records: Vec<DeviceRecord> =
            discovered.into_iter().map(DeviceRecord::from).collect();
        tracing::info!(count = records.len(), "roster discovered");
        Ok(self.registry.replace_all(records))
    }

    /// The roster currently held by the registry.
    #[must_use]
    pub fn current(&self) -> Arc<Roster> {
        self.registry.snapshot()
    }
}
