//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use lumen_app::ports::{ActionTransport, DiscoveryProvider, PropertyTransport};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests API routes under `/api` and includes a [`TraceLayer`] that logs each
/// HTTP request/response at the `DEBUG` level.
pub fn build<D, A, P>(state: AppState<D, A, P>) -> Router
where
    D: DiscoveryProvider + Send + Sync + 'static,
    A: ActionTransport + Send + Sync + 'static,
    P: PropertyTransport + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
