//! Command result — the normalised outcome of dispatching one semantic action.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::LumenError;

/// Caller-facing failure taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    DeviceNotFound,
    UnsupportedModel,
    DeviceCommunicationError,
    InternalError,
}

/// Outcome of a single dispatch.
///
/// `Display` renders the one-line feedback text shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CommandResult {
    Success { message: String },
    Failure { kind: FailureKind, message: String },
}

impl CommandResult {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self::Success {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn failure(kind: FailureKind, message: impl Into<String>) -> Self {
        Self::Failure {
            kind,
            message: message.into(),
        }
    }

    /// Normalise an error into a failure with a user-facing message.
    #[must_use]
    pub fn from_error(err: &LumenError) -> Self {
        let kind = err.failure_kind();
        let message = match kind {
            FailureKind::DeviceNotFound => "Device not found".to_string(),
            FailureKind::UnsupportedModel => err.detail(),
            FailureKind::DeviceCommunicationError => {
                format!("Device communication failed: {}", err.detail())
            }
            FailureKind::InternalError => format!("Operation failed: {}", err.detail()),
        };
        Self::Failure { kind, message }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The failure kind, if this is a failure.
    #[must_use]
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { kind, .. } => Some(*kind),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Success { message } | Self::Failure { message, .. } => message,
        }
    }
}

impl fmt::Display for CommandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{NotFoundError, ProtocolError, TransportError, UnsupportedModelError};

    #[test]
    fn should_render_not_found_as_short_message() {
        let err: LumenError = NotFoundError {
            entity: "Device",
            name: "Ghost".to_string(),
        }
        .into();
        let result = CommandResult::from_error(&err);
        assert_eq!(
            result,
            CommandResult::failure(FailureKind::DeviceNotFound, "Device not found")
        );
    }

    #[test]
    fn should_render_unsupported_model_with_model_name() {
        let err: LumenError = UnsupportedModelError {
            model: "acme.bulb".to_string(),
        }
        .into();
        let result = CommandResult::from_error(&err);
        assert_eq!(result.failure_kind(), Some(FailureKind::UnsupportedModel));
        assert_eq!(result.to_string(), "Unsupported device model: acme.bulb");
    }

    #[test]
    fn should_prefix_communication_failures() {
        let err: LumenError = TransportError::Timeout.into();
        let result = CommandResult::from_error(&err);
        assert_eq!(
            result.to_string(),
            "Device communication failed: request timed out"
        );
    }

    #[test]
    fn should_prefix_internal_failures() {
        let err: LumenError = ProtocolError::MissingReading { siid: 2, piid: 1 }.into();
        let result = CommandResult::from_error(&err);
        assert_eq!(result.failure_kind(), Some(FailureKind::InternalError));
        assert!(result.to_string().starts_with("Operation failed: "));
    }

    #[test]
    fn should_serialize_with_status_tag() {
        let json = serde_json::to_value(CommandResult::success("Toggled switch")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"status": "success", "message": "Toggled switch"})
        );

        let json = serde_json::to_value(CommandResult::failure(
            FailureKind::DeviceNotFound,
            "Device not found",
        ))
        .unwrap();
        assert_eq!(json["status"], "failure");
        assert_eq!(json["kind"], "device_not_found");
    }
}
