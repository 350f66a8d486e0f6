//! Device records and the parameters that drive their generation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Description stamped on every generated record.
pub const DEFAULT_DESCRIPTION: &str = "Automatically generated device";

/// One simulated network-attached device.
///
/// Field order here is the field order of the emitted document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Device kind: sensor, actuator, etc.
    #[serde(rename = "type")]
    pub device_type: String,
    pub ip: String,
    pub port: u16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DeviceRecord {
    /// Identifier assigned to the record at `index`.
    pub fn id_for(index: usize) -> String {
        format!("device-{}", index)
    }

    /// Display name assigned to the record at `index`.
    pub fn name_for(index: usize) -> String {
        format!("Device {}", index)
    }
}

/// Address range. Only `start` is read by generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpRange {
    pub start: String,
    pub end: String,
}

impl Default for IpRange {
    fn default() -> Self {
        Self {
            start: "192.168.1.".to_string(),
            end: "192.168.1.".to_string(),
        }
    }
}

/// Port range. Only `start` is read by generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortRange {
    pub start: u16,
    pub end: u16,
}

impl Default for PortRange {
    fn default() -> Self {
        Self {
            start: 8080,
            end: 8089,
        }
    }
}

/// Generation parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Device kind copied onto every record
    #[serde(default = "default_device_type")]
    pub device_type: String,

    /// Number of records to produce
    #[serde(default = "default_num_devices")]
    pub num_devices: usize,

    #[serde(default)]
    pub ip_range: IpRange,

    #[serde(default)]
    pub port_range: PortRange,

    /// Avoid a doubled `.` when the address base already ends with one
    #[serde(default)]
    pub normalize_separator: bool,
}

fn default_device_type() -> String {
    "sensor".to_string()
}

fn default_num_devices() -> usize {
    5
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            device_type: default_device_type(),
            num_devices: default_num_devices(),
            ip_range: IpRange::default(),
            port_range: PortRange::default(),
            normalize_separator: false,
        }
    }
}

impl GenerationConfig {
    /// Address for the record at `index`.
    ///
    /// Literal concatenation of `start`, `.` and the index: a base of
    /// `"192.168.1."` yields `"192.168.1..3"` unless `normalize_separator` is set.
    pub fn address_for(&self, index: usize) -> String {
        let base = &self.ip_range.start;
        if self.normalize_separator && base.ends_with('.') {
            format!("{}{}", base, index)
        } else {
            format!("{}.{}", base, index)
        }
    }

    /// Port for the record at `index`, or `None` past the top of the port space.
    pub fn port_for(&self, index: usize) -> Option<u16> {
        u16::try_from(index)
            .ok()
            .and_then(|offset| self.port_range.start.checked_add(offset))
    }
}
