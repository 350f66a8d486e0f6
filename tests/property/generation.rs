//! Property-based tests for generation guarantees

use chrono::{TimeZone, Utc};
use devgen::emit::{parse_records, serialize, OutputFormat};
use devgen::generator::{produce_with_clock, FixedClock};
use devgen::model::{GenerationConfig, IpRange, PortRange};
use proptest::prelude::*;

fn clock() -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap())
}

proptest! {
    /// Exactly n records, ids device-0..device-(n-1) in order, ports start+i
    #[test]
    fn test_count_order_and_ports(n in 0usize..200, start in 0u16..60000) {
        let config = GenerationConfig {
            num_devices: n,
            port_range: PortRange { start, end: start },
            ..Default::default()
        };
        let devices = produce_with_clock(&config, &clock()).unwrap();

        prop_assert_eq!(devices.len(), n);
        for (i, device) in devices.iter().enumerate() {
            prop_assert_eq!(&device.id, &format!("device-{}", i));
            prop_assert_eq!(device.port as usize, start as usize + i);
        }
    }

    /// Address is the literal base, a dot, then the index
    #[test]
    fn test_address_concatenation(base in "[0-9.]{0,12}", n in 1usize..20) {
        let config = GenerationConfig {
            num_devices: n,
            ip_range: IpRange { start: base.clone(), end: String::new() },
            ..Default::default()
        };
        let devices = produce_with_clock(&config, &clock()).unwrap();
        for (i, device) in devices.iter().enumerate() {
            prop_assert_eq!(&device.ip, &format!("{}.{}", base, i));
        }
    }

    /// Parse then re-serialize yields the same bytes
    #[test]
    fn test_serialization_round_trip(n in 0usize..30, device_type in "[a-z\"\\\\ ]{0,10}") {
        let config = GenerationConfig {
            num_devices: n,
            device_type,
            ..Default::default()
        };
        let devices = produce_with_clock(&config, &clock()).unwrap();
        let first = serialize(&devices, OutputFormat::Json).unwrap();
        let second = serialize(&parse_records(&first).unwrap(), OutputFormat::Json).unwrap();
        prop_assert_eq!(first, second);
    }
}
