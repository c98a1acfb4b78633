//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`LumenError`]
//! via `#[from]`. Adapters box their own error enums into
//! [`LumenError::Adapter`]. The command dispatcher is the single place where a
//! [`LumenError`] is turned into a caller-facing
//! [`CommandResult`](crate::command::CommandResult).

use crate::command::FailureKind;

/// Top-level error for every fallible operation in lumen.
#[derive(Debug, thiserror::Error)]
pub enum LumenError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    #[error("unsupported model")]
    UnsupportedModel(#[from] UnsupportedModelError),

    #[error("transport error")]
    Transport(#[from] TransportError),

    #[error("protocol error")]
    Protocol(#[from] ProtocolError),

    #[error("adapter error")]
    Adapter(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl LumenError {
    /// Classify this error into the caller-facing failure taxonomy.
    #[must_use]
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            Self::NotFound(_) => FailureKind::DeviceNotFound,
            Self::UnsupportedModel(_) => FailureKind::UnsupportedModel,
            Self::Transport(_) => FailureKind::DeviceCommunicationError,
            Self::Validation(_) | Self::Protocol(_) | Self::Adapter(_) => {
                FailureKind::InternalError
            }
        }
    }

    /// Human-readable detail of the underlying cause, without the wrapper
    /// label.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::Validation(err) => err.to_string(),
            Self::NotFound(err) => err.to_string(),
            Self::UnsupportedModel(err) => err.to_string(),
            Self::Transport(err) => err.to_string(),
            Self::Protocol(err) => err.to_string(),
            Self::Adapter(err) => err.to_string(),
        }
    }
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
}

/// A lookup by name found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} not found: {name}")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub name: String,
}

/// No protocol family is known for a model identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported device model: {model}")]
pub struct UnsupportedModelError {
    pub model: String,
}

/// Failures reported by a transport while talking to a device.
///
/// Both local and remote failures land here so they can be told apart by
/// variant while still normalising to
/// [`FailureKind::DeviceCommunicationError`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,

    #[error("device at {address} is unreachable")]
    Unreachable { address: String },

    #[error("device rejected the request (code {code}): {message}")]
    Rejected { code: i64, message: String },
}

/// A device answered, but not with something the controller can interpret.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolError {
    #[error("no reading returned for siid {siid} piid {piid}")]
    MissingReading { siid: u32, piid: u32 },

    #[error("no write status returned for siid {siid} piid {piid}")]
    MissingWriteStatus { siid: u32, piid: u32 },

    #[error("expected a boolean at siid {siid} piid {piid}, got {found}")]
    UnexpectedValue { siid: u32, piid: u32, found: String },
}
