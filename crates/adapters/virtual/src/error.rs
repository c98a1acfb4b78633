//! Virtual adapter error types.

use lumen_domain::error::LumenError;

/// Errors specific to the virtual adapter.
#[derive(Debug, thiserror::Error)]
pub enum VirtualError {
    /// Discovery was called with an account the fleet does not know.
    #[error("invalid account credentials")]
    InvalidCredentials,

    /// The virtual fleet is switched off in configuration.
    #[error("virtual fleet is disabled")]
    Disabled,
}

impl VirtualError {
    /// Convert into a [`LumenError::Adapter`] for propagation across port
    /// boundaries.
    #[must_use]
    pub fn into_domain(self) -> LumenError {
        LumenError::Adapter(Box::new(self))
    }
}

impl From<VirtualError> for LumenError {
    fn from(err: VirtualError) -> Self {
        err.into_domain()
    }
}
