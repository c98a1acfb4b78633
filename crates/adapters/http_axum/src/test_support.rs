//! Stub collaborators and request helpers for router tests.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use lumen_app::control_surface::ControlSurface;
use lumen_app::ports::{AccountCredentials, ActionTransport, DiscoveryProvider, PropertyTransport};
use lumen_domain::device::{DiscoveredDevice, Endpoint};
use lumen_domain::error::{LumenError, TransportError};
use lumen_domain::protocol::{
    ActionCall, PropertyAddress, PropertyReading, PropertyWrite, PropertyWriteStatus,
};

use crate::state::AppState;

pub struct StubDiscovery;

impl DiscoveryProvider for StubDiscovery {
    async fn query_roster(
        &self,
        credentials: &AccountCredentials,
    ) -> Result<Vec<DiscoveredDevice>, LumenError> {
        if credentials.password.expose() != "secret" {
            return Err(LumenError::Adapter("invalid account credentials".into()));
        }
        Ok(vec![
            DiscoveredDevice {
                id: "1".to_string(),
                name: Some("Lamp1".to_string()),
                address: Some("10.0.0.5".to_string()),
                credential: Some("tok1".to_string()),
                model: Some("xiaomi.light.lamp30.v1".to_string()),
            },
            DiscoveredDevice {
                id: "2".to_string(),
                name: Some("HuayiLamp".to_string()),
                address: Some("10.0.0.6".to_string()),
                credential: Some("tok2".to_string()),
                model: Some("huayi.light.v2".to_string()),
            },
            DiscoveredDevice {
                id: "3".to_string(),
                name: Some("Strip".to_string()),
                model: Some("yeelink.light.strip2".to_string()),
                ..DiscoveredDevice::default()
            },
        ])
    }
}

/// Answers every call as a healthy lamp that is currently on.
pub struct StubTransport;

impl ActionTransport for StubTransport {
    async fn invoke_action(
        &self,
        _endpoint: &Endpoint,
        _call: &ActionCall,
    ) -> Result<serde_json::Value, TransportError> {
        Ok(serde_json::json!({ "code": 0 }))
    }
}

impl PropertyTransport for StubTransport {
    async fn read_properties(
        &self,
        _endpoint: &Endpoint,
        addresses: &[PropertyAddress],
    ) -> Result<Vec<PropertyReading>, TransportError> {
        Ok(addresses
            .iter()
            .map(|a| PropertyReading {
                siid: a.siid,
                piid: a.piid,
                code: 0,
                value: Some(serde_json::json!(true)),
            })
            .collect())
    }

    async fn write_properties(
        &self,
        _endpoint: &Endpoint,
        writes: &[PropertyWrite],
    ) -> Result<Vec<PropertyWriteStatus>, TransportError> {
        Ok(writes
            .iter()
            .map(|w| PropertyWriteStatus {
                siid: w.siid,
                piid: w.piid,
                code: 0,
            })
            .collect())
    }
}

pub fn test_state() -> AppState<StubDiscovery, StubTransport, StubTransport> {
    AppState::new(ControlSurface::new(
        StubDiscovery,
        StubTransport,
        StubTransport,
    ))
}

/// Send one request and decode the JSON body (`Null` when empty).
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

pub fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}
