//! Transport ports — one per protocol family.
//!
//! Transports own everything below the semantic layer: sockets, encryption,
//! retries and timeouts. A timeout is reported as
//! [`TransportError::Timeout`]; the core never retries.

use std::future::Future;
use std::sync::Arc;

use lumen_domain::device::Endpoint;
use lumen_domain::error::TransportError;
use lumen_domain::protocol::{
    ActionCall, PropertyAddress, PropertyReading, PropertyWrite, PropertyWriteStatus,
};

/// Transport for action-invocation devices.
pub trait ActionTransport {
    /// Invoke `call` on the device and return its raw status object.
    fn invoke_action(
        &self,
        endpoint: &Endpoint,
        call: &ActionCall,
    ) -> impl Future<Output = Result<serde_json::Value, TransportError>> + Send;
}

/// Transport for property-addressed devices.
pub trait PropertyTransport {
    /// `get_properties` for the given coordinates.
    fn read_properties(
        &self,
        endpoint: &Endpoint,
        addresses: &[PropertyAddress],
    ) -> impl Future<Output = Result<Vec<PropertyReading>, TransportError>> + Send;

    /// `set_properties` with the given triples.
    fn write_properties(
        &self,
        endpoint: &Endpoint,
        writes: &[PropertyWrite],
    ) -> impl Future<Output = Result<Vec<PropertyWriteStatus>, TransportError>> + Send;
}

impl<T: ActionTransport + Send + Sync> ActionTransport for Arc<T> {
    fn invoke_action(
        &self,
        endpoint: &Endpoint,
        call: &ActionCall,
    ) -> impl Future<Output = Result<serde_json::Value, TransportError>> + Send {
        (**self).invoke_action(endpoint, call)
    }
}

impl<T: PropertyTransport + Send + Sync> PropertyTransport for Arc<T> {
    fn read_properties(
        &self,
        endpoint: &Endpoint,
        addresses: &[PropertyAddress],
    ) -> impl Future<Output = Result<Vec<PropertyReading>, TransportError>> + Send {
        (**self).read_properties(endpoint, addresses)
    }

    fn write_properties(
        &self,
        endpoint: &Endpoint,
        writes: &[PropertyWrite],
    ) -> impl Future<Output = Result<Vec<PropertyWriteStatus>, TransportError>> + Send {
        (**self).write_properties(endpoint, writes)
    }
}
