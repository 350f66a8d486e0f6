//! Device generation: turns a [`GenerationConfig`] into an ordered run of records.
//!
//! Only the start of each range is read. `ip_range.end` and `port_range.end`
//! are carried through configuration but never bound the output; a run that
//! walks past `port_range.end` is logged, not truncated.

use crate::error::GenerationError;
use crate::model::{DeviceRecord, GenerationConfig, DEFAULT_DESCRIPTION};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, warn};

/// Timestamp source for record construction.
///
/// Swapping in a fixed clock makes generated documents reproducible.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

impl Clock for Arc<dyn Clock> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Generator bound to one configuration and one clock.
pub struct DeviceGenerator {
    config: GenerationConfig,
    clock: Box<dyn Clock>,
}

impl DeviceGenerator {
    /// Create a generator stamping records with wall-clock time.
    pub fn new(config: GenerationConfig) -> Self {
        Self {
            config,
            clock: Box::new(SystemClock),
        }
    }

    /// Replace the timestamp source.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Produce `num_devices` records in ascending index order.
    pub fn generate_devices(&self) -> Result<Vec<DeviceRecord>, GenerationError> {
        produce_with_clock(&self.config, self.clock.as_ref())
    }
}

/// Produce records for `config` using wall-clock timestamps.
pub fn produce(config: &GenerationConfig) -> Result<Vec<DeviceRecord>, GenerationError> {
    produce_with_clock(config, &SystemClock)
}

/// Produce records for `config`, reading the clock once per record.
pub fn produce_with_clock(
    config: &GenerationConfig,
    clock: &dyn Clock,
) -> Result<Vec<DeviceRecord>, GenerationError> {
    debug!(
        device_type = %config.device_type,
        num_devices = config.num_devices,
        "Generating devices"
    );

    // Reject a run whose last port cannot exist before reserving space for it.
    if let Some(last) = config.num_devices.checked_sub(1) {
        if config.port_for(last).is_none() {
            return Err(GenerationError::PortOverflow {
                start: config.port_range.start,
                index: usize::from(u16::MAX - config.port_range.start) + 1,
            });
        }
    }

    let mut devices = Vec::with_capacity(config.num_devices);
    for index in 0..config.num_devices {
        let port = config.port_for(index).ok_or(GenerationError::PortOverflow {
            start: config.port_range.start,
            index,
        })?;
        let now = clock.now();
        devices.push(DeviceRecord {
            id: DeviceRecord::id_for(index),
            name: DeviceRecord::name_for(index),
            description: DEFAULT_DESCRIPTION.to_string(),
            device_type: config.device_type.clone(),
            ip: config.address_for(index),
            port,
            created_at: now,
            updated_at: now,
        });
    }

    if let Some(last) = devices.last() {
        if last.port > config.port_range.end {
            warn!(
                last_port = last.port,
                port_range_end = config.port_range.end,
                "Generated ports run past port_range.end; the end bound is not enforced"
            );
        }
    }

    Ok(devices)
}
