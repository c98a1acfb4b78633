//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod devices;
pub mod roster;

use axum::Router;
use axum::routing::{get, post};

use lumen_app::ports::{ActionTransport, DiscoveryProvider, PropertyTransport};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<D, A, P>() -> Router<AppState<D, A, P>>
where
    D: DiscoveryProvider + Send + Sync + 'static,
    A: ActionTransport + Send + Sync + 'static,
    P: PropertyTransport + Send + Sync + 'static,
{
    Router::new()
        .route("/roster/query", post(roster::query::<D, A, P>))
        .route("/devices", get(devices::list::<D, A, P>))
        .route("/devices/{name}/commands", post(devices::command::<D, A, P>))
}
