//! Control surface — the facade the user interface talks to.
//!
//! This is the only layer that turns failures into display text. Everything
//! underneath returns typed results.

use std::sync::Arc;

use serde::Serialize;

use lumen_domain::action::SemanticAction;
use lumen_domain::command::CommandResult;
use lumen_domain::roster::Roster;
use lumen_domain::time::to_display;

use crate::ports::{AccountCredentials, ActionTransport, DiscoveryProvider, PropertyTransport};
use crate::registry::DeviceRegistry;
use crate::services::dispatcher::CommandDispatcher;
use crate::services::roster_service::RosterService;

const SEPARATOR: &str = "--------------------------";

/// Result of a roster query, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterView {
    /// One formatted block per device, or the failure message.
    pub text: String,
    /// Names for the device selector. `None` when the query failed, meaning
    /// the current selection should be left alone.
    pub names: Option<Vec<String>>,
    /// When the roster was loaded, RFC 3339 at second precision. `None` when
    /// the query failed.
    pub loaded_at: Option<String>,
}

/// Roster discovery and command dispatch behind one handle.
pub struct ControlSurface<D, A, P> {
    roster_service: RosterService<D>,
    dispatcher: CommandDispatcher<A, P>,
}

impl<D, A, P> ControlSurface<D, A, P>
where
    D: DiscoveryProvider + Send + Sync,
    A: ActionTransport + Send + Sync,
    P: PropertyTransport + Send + Sync,
{
    /// Wire a fresh registry between discovery and dispatch.
    pub fn new(provider: D, action_transport: A, property_transport: P) -> Self {
        let registry = Arc::new(DeviceRegistry::new());
        Self {
            roster_service: RosterService::new(provider, Arc::clone(&registry)),
            dispatcher: CommandDispatcher::new(registry, action_transport, property_transport),
        }
    }

    /// Query the account and load its devices.
    pub async fn query_and_load_roster(&self, username: &str, password: &str) -> RosterView {
        let credentials = AccountCredentials::new(username, password);
        match self.roster_service.refresh(&credentials).await {
            Ok(roster) => RosterView {
                text: format_roster(&roster),
                names: Some(roster.names()),
                loaded_at: roster.loaded_at().map(to_display),
            },
            Err(err) => {
                tracing::warn!(error = %err.detail(), "roster query failed");
                RosterView {
                    text: format!("Query failed: {}", err.detail()),
                    names: None,
                    loaded_at: None,
                }
            }
        }
    }

    /// Perform one action; `Display` of the result is the feedback line.
    pub async fn dispatch(&self, device_name: &str, action: SemanticAction) -> CommandResult {
        self.dispatcher.dispatch(device_name, action).await
    }

    /// The roster currently loaded.
    #[must_use]
    pub fn roster(&self) -> Arc<Roster> {
        self.roster_service.current()
    }
}

/// Render one block per device.
#[must_use]
pub fn format_roster(roster: &Roster) -> String {
    if roster.is_empty() {
        return "No devices found".to_string();
    }
    roster
        .devices()
        .iter()
        .map(|d| {
            format!(
                "Name: {}\nModel: {}\nIP: {}\n{SEPARATOR}",
                d.name, d.model, d.address
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
