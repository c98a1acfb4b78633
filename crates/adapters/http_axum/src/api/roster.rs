//! Roster query endpoint.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use lumen_app::control_surface::RosterView;
use lumen_app::ports::{ActionTransport, DiscoveryProvider, PropertyTransport};

use crate::state::AppState;

/// Account login submitted by the user.
#[derive(Deserialize)]
pub struct QueryRequest {
    pub username: String,
    pub password: String,
}

/// Possible responses from the query endpoint.
///
/// A failed account query is still a `200`: the failure is part of the
/// rendered text and `names` is `null`.
pub enum QueryResponse {
    Ok(Json<RosterView>),
}

impl IntoResponse for QueryResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /api/roster/query`
pub async fn query<D, A, P>(
    State(state): State<AppState<D, A, P>>,
    Json(req): Json<QueryRequest>,
) -> QueryResponse
where
    D: DiscoveryProvider + Send + Sync + 'static,
    A: ActionTransport + Send + Sync + 'static,
    P: PropertyTransport + Send + Sync + 'static,
{
    let view = state
        .surface
        .query_and_load_roster(&req.username, &req.password)
        .await;
    QueryResponse::Ok(Json(view))
}
