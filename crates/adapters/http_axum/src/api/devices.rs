//! JSON REST handlers for devices.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use lumen_app::ports::{ActionTransport, DiscoveryProvider, PropertyTransport};
use lumen_domain::action::SemanticAction;
use lumen_domain::command::CommandResult;
use lumen_domain::device::DeviceRecord;

use crate::error::ApiError;
use crate::state::AppState;

/// Body returned after a command was dispatched.
#[derive(Serialize)]
pub struct CommandBody {
    /// One-line text for the feedback area.
    pub feedback: String,
    pub result: CommandResult,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<DeviceRecord>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the command endpoint.
pub enum CommandResponse {
    Dispatched(Json<CommandBody>),
}

impl IntoResponse for CommandResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Dispatched(json) => json.into_response(),
        }
    }
}

/// `GET /api/devices`
pub async fn list<D, A, P>(State(state): State<AppState<D, A, P>>) -> ListResponse
where
    D: DiscoveryProvider + Send + Sync + 'static,
    A: ActionTransport + Send + Sync + 'static,
    P: PropertyTransport + Send + Sync + 'static,
{
    let roster = state.surface.roster();
    ListResponse::Ok(Json(roster.devices().to_vec()))
}

/// `POST /api/devices/{name}/commands`
///
/// Values outside the slider bounds are refused with `400` before anything
/// is sent to the device. Every dispatched command answers `200`; its outcome
/// is in `result`.
pub async fn command<D, A, P>(
    State(state): State<AppState<D, A, P>>,
    Path(name): Path<String>,
    Json(action): Json<SemanticAction>,
) -> Result<CommandResponse, ApiError>
where
    D: DiscoveryProvider + Send + Sync + 'static,
    A: ActionTransport + Send + Sync + 'static,
    P: PropertyTransport + Send + Sync + 'static,
{
    action.validate()?;
    let result = state.surface.dispatch(&name, action).await;
    Ok(CommandResponse::Dispatched(Json(CommandBody {
        feedback: result.to_string(),
        result,
    })))
}
