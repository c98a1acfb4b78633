//! Controller for action-invocation devices.
//!
//! Every command is one named action call; nothing is read first. A reply
//! carrying a non-zero integer `code` is a rejection; any other reply is
//! returned untouched.

use lumen_domain::device::Endpoint;
use lumen_domain::error::{LumenError, TransportError};
use lumen_domain::protocol::{ActionCall, actions};

use super::Acknowledgement;
use crate::ports::ActionTransport;

pub struct ActionController<'t, T> {
    transport: &'t T,
    endpoint: Endpoint,
}

impl<'t, T: ActionTransport + Sync> ActionController<'t, T> {
    #[must_use]
    pub fn new(transport: &'t T, endpoint: Endpoint) -> Self {
        Self {
            transport,
            endpoint,
        }
    }

    /// # Errors
    ///
    /// Returns [`LumenError::Transport`] when the call fails or is rejected.
    pub async fn toggle(&self) -> Result<Acknowledgement, LumenError> {
        self.invoke(actions::TOGGLE, Vec::new()).await
    }

    /// # Errors
    ///
    /// Returns [`LumenError::Transport`] when the call fails or is rejected.
    pub async fn set_brightness(&self, value: u32) -> Result<Acknowledgement, LumenError> {
        self.invoke(actions::SET_BRIGHTNESS, vec![value.into()]).await
    }

    /// # Errors
    ///
    /// Returns [`LumenError::Transport`] when the call fails or is rejected.
    pub async fn set_color_temperature(&self, value: u32) -> Result<Acknowledgement, LumenError> {
        self.invoke(actions::SET_COLOR_TEMPERATURE, vec![value.into()])
            .await
    }

    async fn invoke(
        &self,
        name: &str,
        args: Vec<serde_json::Value>,
    ) -> Result<Acknowledgement, LumenError> {
        let call = ActionCall::new(name, args);
        tracing::debug!(
            address = %self.endpoint.address,
            action = %call.name,
            "invoking action"
        );
        let status = self.transport.invoke_action(&self.endpoint, &call).await?;
        match status.get("code").and_then(serde_json::Value::as_i64) {
            Some(code) if code != 0 => Err(TransportError::Rejected {
                code,
                message: format!("{} failed", call.name),
            }
            .into()),
            _ => Ok(Acknowledgement::Action(status)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingActionTransport;
    use lumen_domain::device::Credential;

    fn endpoint() -> Endpoint {
        Endpoint {
            address: "10.0.0.5".to_string(),
            credential: Credential::new("tok1"),
        }
    }

    #[tokio::test]
    async fn should_invoke_toggle_without_arguments() {
        let transport = RecordingActionTransport::ok();
        let controller = ActionController::new(&transport, endpoint());

        controller.toggle().await.unwrap();

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].1, ActionCall::new("light_toggle_2_1", vec![]));
    }

    #[tokio::test]
    async fn should_pass_brightness_as_single_argument() {
        let transport = RecordingActionTransport::ok();
        let controller = ActionController::new(&transport, endpoint());

        controller.set_brightness(42).await.unwrap();

        let calls = transport.calls();
        assert_eq!(
            calls[0].1,
            ActionCall::new("light_brightness_2_2", vec![serde_json::json!(42)])
        );
    }

    #[tokio::test]
    async fn should_pass_color_temperature_as_single_argument() {
        let transport = RecordingActionTransport::ok();
        let controller = ActionController::new(&transport, endpoint());

        controller.set_color_temperature(5000).await.unwrap();

        let calls = transport.calls();
        assert_eq!(
            calls[0].1,
            ActionCall::new("light_color_temp_2_3", vec![serde_json::json!(5000)])
        );
    }

    #[tokio::test]
    async fn should_address_the_bound_endpoint() {
        let transport = RecordingActionTransport::ok();
        let controller = ActionController::new(&transport, endpoint());

        controller.toggle().await.unwrap();

        assert_eq!(transport.calls()[0].0, endpoint());
    }

    #[tokio::test]
    async fn should_return_raw_status_object() {
        let transport = RecordingActionTransport::ok();
        let controller = ActionController::new(&transport, endpoint());

        let ack = controller.toggle().await.unwrap();
        assert_eq!(ack, Acknowledgement::Action(serde_json::json!({"code": 0})));
    }

    #[tokio::test]
    async fn should_surface_timeout_and_rejection_as_distinct_transport_errors() {
        let timeout = RecordingActionTransport::failing(TransportError::Timeout);
        let result = ActionController::new(&timeout, endpoint()).toggle().await;
        assert!(matches!(
            result,
            Err(LumenError::Transport(TransportError::Timeout))
        ));

        let rejected = RecordingActionTransport::failing(TransportError::Rejected {
            code: -5001,
            message: "invalid arg".to_string(),
        });
        let result = ActionController::new(&rejected, endpoint())
            .set_brightness(50)
            .await;
        assert!(matches!(
            result,
            Err(LumenError::Transport(TransportError::Rejected { code: -5001, .. }))
        ));
    }

    #[tokio::test]
    async fn should_reject_reply_with_non_zero_code() {
        let transport =
            RecordingActionTransport::replying(serde_json::json!({"code": -4005, "out": []}));
        let controller = ActionController::new(&transport, endpoint());

        let result = controller.set_brightness(500).await;

        assert!(matches!(
            result,
            Err(LumenError::Transport(TransportError::Rejected { code: -4005, ref message }))
                if message == "light_brightness_2_2 failed"
        ));
        assert_eq!(transport.calls().len(), 1);
    }

    #[tokio::test]
    async fn should_accept_reply_without_code() {
        let transport = RecordingActionTransport::replying(serde_json::json!({"out": []}));
        let controller = ActionController::new(&transport, endpoint());

        let ack = controller.toggle().await.unwrap();
        assert_eq!(ack, Acknowledgement::Action(serde_json::json!({"out": []})));
    }
}
