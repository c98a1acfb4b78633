//! Discovery port — fetches the device roster for an account.

use std::future::Future;
use std::sync::Arc;

use lumen_domain::device::{Credential, DiscoveredDevice};
use lumen_domain::error::LumenError;

/// Account login handed to a discovery provider.
#[derive(Debug, Clone)]
pub struct AccountCredentials {
    pub username: String,
    pub password: Credential,
}

impl AccountCredentials {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: Credential::new(password),
        }
    }
}

/// Source of the device roster (typically a cloud account query).
///
/// Entries may lack any field except `id`; placeholders are applied when
/// they are turned into device records.
pub trait DiscoveryProvider {
    fn query_roster(
        &self,
        credentials: &AccountCredentials,
    ) -> impl Future<Output = Result<Vec<DiscoveredDevice>, LumenError>> + Send;
}

impl<T: DiscoveryProvider + Send + Sync> DiscoveryProvider for Arc<T> {
    fn query_roster(
        &self,
        credentials: &AccountCredentials,
    ) -> impl Future<Output = Result<Vec<DiscoveredDevice>, LumenError>> + Send {
        (**self).query_roster(credentials)
    }
}
