//! Command dispatcher — the single boundary where failures become results.
//!
//! One dispatch is one attempt: look the device up, bind its controller,
//! perform the action. Nothing is retried here and every failure is returned
//! to the caller as a [`CommandResult::Failure`].

use std::sync::Arc;

use lumen_domain::action::SemanticAction;
use lumen_domain::command::CommandResult;
use lumen_domain::error::LumenError;

use crate::controller::{Acknowledgement, Controller};
use crate::ports::{ActionTransport, PropertyTransport};
use crate::registry::DeviceRegistry;

/// Routes semantic actions to the right device and protocol.
pub struct CommandDispatcher<A, P> {
    registry: Arc<DeviceRegistry>,
    action_transport: A,
    property_transport: P,
}

impl<A, P> CommandDispatcher<A, P>
where
    A: ActionTransport + Send + Sync,
    P: PropertyTransport + Send + Sync,
{
    /// Create a dispatcher reading devices from `registry`.
    pub fn new(registry: Arc<DeviceRegistry>, action_transport: A, property_transport: P) -> Self {
        Self {
            registry,
            action_transport,
            property_transport,
        }
    }

    /// Perform `action` on the device named `device_name`.
    ///
    /// A missing device or unsupported model fails before any transport call.
    #[tracing::instrument(skip(self, action), fields(action = action.name()))]
    pub async fn dispatch(&self, device_name: &str, action: SemanticAction) -> CommandResult {
        match self.try_dispatch(device_name, action).await {
            Ok(ack) => {
                tracing::debug!(?ack, "command acknowledged");
                CommandResult::success(action.confirmation())
            }
            Err(err) => {
                let result = CommandResult::from_error(&err);
                tracing::warn!(
                    kind = ?err.failure_kind(),
                    error = %err.detail(),
                    "command failed"
                );
                result
            }
        }
    }

    async fn try_dispatch(
        &self,
        device_name: &str,
        action: SemanticAction,
    ) -> Result<Acknowledgement, LumenError> {
        let record = self.registry.find_by_name(device_name)?;
        let controller =
            Controller::bind(&record, &self.action_transport, &self.property_transport)?;
        tracing::debug!(
            family = ?controller.family(),
            model = %record.model,
            "controller bound"
        );
        controller.perform(action).await
    }
}
