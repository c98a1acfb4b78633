//! Protocol controllers — turn semantic actions into wire calls.
//!
//! A [`Controller`] is bound per dispatch from a device record and the
//! transports; it borrows the transport and holds no state across calls.
//! The enum is closed: every protocol family the model matcher can return has
//! exactly one variant here.

mod action;
mod property;

pub use action::ActionController;
pub use property::PropertyController;

use lumen_domain::action::SemanticAction;
use lumen_domain::device::DeviceRecord;
use lumen_domain::error::LumenError;
use lumen_domain::model::ProtocolFamily;
use lumen_domain::protocol::PropertyWriteStatus;

use crate::ports::{ActionTransport, PropertyTransport};

/// What the device said after a successful command.
#[derive(Debug, Clone, PartialEq)]
pub enum Acknowledgement {
    /// Raw status object returned by an action call.
    Action(serde_json::Value),
    /// Per-triple statuses of a `set_properties` call, all with code `0`.
    Properties(Vec<PropertyWriteStatus>),
}

/// A device bound to the controller for its protocol family.
pub enum Controller<'t, A, P> {
    Action(ActionController<'t, A>),
    Property(PropertyController<'t, P>),
}

impl<'t, A, P> Controller<'t, A, P>
where
    A: ActionTransport + Sync,
    P: PropertyTransport + Sync,
{
    /// Resolve the protocol family of `record` and bind the matching transport.
    ///
    /// # Errors
    ///
    /// Returns [`LumenError::UnsupportedModel`] when the record's model
    /// matches no known pattern.
    pub fn bind(
        record: &DeviceRecord,
        action_transport: &'t A,
        property_transport: &'t P,
    ) -> Result<Self, LumenError> {
        let endpoint = record.endpoint();
        let controller = match ProtocolFamily::resolve(&record.model)? {
            ProtocolFamily::ActionInvocation => {
                Self::Action(ActionController::new(action_transport, endpoint))
            }
            ProtocolFamily::PropertyAddressed => {
                Self::Property(PropertyController::new(property_transport, endpoint))
            }
        };
        Ok(controller)
    }

    #[must_use]
    pub fn family(&self) -> ProtocolFamily {
        match self {
            Self::Action(_) => ProtocolFamily::ActionInvocation,
            Self::Property(_) => ProtocolFamily::PropertyAddressed,
        }
    }

    /// # Errors
    ///
    /// Propagates transport and protocol failures.
    pub async fn toggle(&self) -> Result<Acknowledgement, LumenError> {
        match self {
            Self::Action(c) => c.toggle().await,
            Self::Property(c) => c.toggle().await,
        }
    }

    /// # Errors
    ///
    /// Propagates transport and protocol failures.
    pub async fn set_brightness(&self, value: u32) -> Result<Acknowledgement, LumenError> {
        match self {
            Self::Action(c) => c.set_brightness(value).await,
            Self::Property(c) => c.set_brightness(value).await,
        }
    }

    /// # Errors
    ///
    /// Propagates transport and protocol failures.
    pub async fn set_color_temperature(&self, value: u32) -> Result<Acknowledgement, LumenError> {
        match self {
            Self::Action(c) => c.set_color_temperature(value).await,
            Self::Property(c) => c.set_color_temperature(value).await,
        }
    }

    /// Run the controller method matching `action`.
    ///
    /// # Errors
    ///
    /// Propagates transport and protocol failures.
    pub async fn perform(&self, action: SemanticAction) -> Result<Acknowledgement, LumenError> {
        match action {
            SemanticAction::Toggle => self.toggle().await,
            SemanticAction::SetBrightness { value } => self.set_brightness(value).await,
            SemanticAction::SetColorTemperature { value } => {
                self.set_color_temperature(value).await
            }
        }
    }
}
