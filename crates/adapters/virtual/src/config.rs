//! Virtual fleet configuration.

use serde::Deserialize;

/// Configuration for the virtual fleet.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VirtualConfig {
    /// Serve the virtual fleet at all.
    pub enabled: bool,
    /// Account username accepted by discovery.
    pub username: String,
    /// Account password accepted by discovery.
    pub password: String,
    /// Artificial delay applied to every transport call, in milliseconds.
    pub latency_ms: u64,
    /// Simulated lamps, in roster order.
    pub devices: Vec<VirtualDeviceConfig>,
}

/// One simulated lamp.
///
/// Optional fields are reported as missing by discovery, exactly as a sparse
/// cloud answer would be.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VirtualDeviceConfig {
    pub id: String,
    pub name: Option<String>,
    pub model: Option<String>,
    pub address: Option<String>,
    pub token: Option<String>,
}

impl Default for VirtualConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            username: "demo".to_string(),
            password: "demo".to_string(),
            latency_ms: 0,
            devices: vec![
                VirtualDeviceConfig {
                    id: "virtual-1".to_string(),
                    name: Some("Desk Lamp".to_string()),
                    model: Some("xiaomi.light.lamp30.v1".to_string()),
                    address: Some("192.168.31.10".to_string()),
                    token: Some("00112233445566778899aabbccddeeff".to_string()),
                },
                VirtualDeviceConfig {
                    id: "virtual-2".to_string(),
                    name: Some("Ceiling Light".to_string()),
                    model: Some("huayi.light.v2".to_string()),
                    address: Some("192.168.31.11".to_string()),
                    token: Some("ffeeddccbbaa99887766554433221100".to_string()),
                },
            ],
        }
    }
}
