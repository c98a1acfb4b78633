//! Recording stub transports shared by the unit tests.

use std::sync::Mutex;

use lumen_domain::device::Endpoint;
use lumen_domain::error::TransportError;
use lumen_domain::protocol::{
    ActionCall, PropertyAddress, PropertyReading, PropertyWrite, PropertyWriteStatus,
};

use crate::ports::{ActionTransport, PropertyTransport};

/// Action transport that records every call and answers with a fixed response.
pub struct RecordingActionTransport {
    calls: Mutex<Vec<(Endpoint, ActionCall)>>,
    response: Result<serde_json::Value, TransportError>,
}

impl RecordingActionTransport {
    pub fn ok() -> Self {
        Self::replying(serde_json::json!({"code": 0}))
    }

    /// Answers every call with `status`.
    pub fn replying(status: serde_json::Value) -> Self {
        Self::responding(Ok(status))
    }

    pub fn failing(err: TransportError) -> Self {
        Self::responding(Err(err))
    }

    fn responding(response: Result<serde_json::Value, TransportError>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            response,
        }
    }

    pub fn calls(&self) -> Vec<(Endpoint, ActionCall)> {
        self.calls.lock().unwrap().clone()
    }
}

impl ActionTransport for RecordingActionTransport {
    async fn invoke_action(
        &self,
        endpoint: &Endpoint,
        call: &ActionCall,
    ) -> Result<serde_json::Value, TransportError> {
        self.calls
            .lock()
            .unwrap()
            .push((endpoint.clone(), call.clone()));
        self.response.clone()
    }
}

/// Property transport that records reads and writes separately.
pub struct RecordingPropertyTransport {
    reads: Mutex<Vec<Vec<PropertyAddress>>>,
    writes: Mutex<Vec<Vec<PropertyWrite>>>,
    read_response: Result<Vec<PropertyReading>, TransportError>,
    write_code: i64,
    drop_write_statuses: bool,
}

impl RecordingPropertyTransport {
    /// Reports `power` at `(2, 1)` and accepts every write.
    pub fn with_power(power: bool) -> Self {
        Self::reading(Ok(vec![PropertyReading {
            siid: 2,
            piid: 1,
            code: 0,
            value: Some(serde_json::Value::Bool(power)),
        }]))
    }

    pub fn reading(read_response: Result<Vec<PropertyReading>, TransportError>) -> Self {
        Self {
            reads: Mutex::new(Vec::new()),
            writes: Mutex::new(Vec::new()),
            read_response,
            write_code: 0,
            drop_write_statuses: false,
        }
    }

    #[must_use]
    pub fn rejecting_writes(mut self, code: i64) -> Self {
        self.write_code = code;
        self
    }

    /// Accept writes but answer with an empty status list.
    #[must_use]
    pub fn dropping_write_statuses(mut self) -> Self {
        self.drop_write_statuses = true;
        self
    }

    pub fn reads(&self) -> Vec<Vec<PropertyAddress>> {
        self.reads.lock().unwrap().clone()
    }

    pub fn writes(&self) -> Vec<Vec<PropertyWrite>> {
        self.writes.lock().unwrap().clone()
    }
}

impl PropertyTransport for RecordingPropertyTransport {
    async fn read_properties(
        &self,
        _endpoint: &Endpoint,
        addresses: &[PropertyAddress],
    ) -> Result<Vec<PropertyReading>, TransportError> {
        self.reads.lock().unwrap().push(addresses.to_vec());
        self.read_response.clone()
    }

    async fn write_properties(
        &self,
        _endpoint: &Endpoint,
        writes: &[PropertyWrite],
    ) -> Result<Vec<PropertyWriteStatus>, TransportError> {
        self.writes.lock().unwrap().push(writes.to_vec());
        if self.drop_write_statuses {
            return Ok(Vec::new());
        }
        Ok(writes
            .iter()
            .map(|w| PropertyWriteStatus {
                siid: w.siid,
                piid: w.piid,
                code: self.write_code,
            })
            .collect())
    }
}
