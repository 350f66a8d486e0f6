//! devgen: synthetic IoT device record generation
//!
//! Builds a fixed-size, ordered run of device records (sequential ids, names,
//! addresses and ports) from a [`model::GenerationConfig`] and renders them as
//! indented JSON.
//!
//! ```
//! use devgen::emit::{serialize, OutputFormat};
//! use devgen::generator::produce;
//! use devgen::model::GenerationConfig;
//!
//! let devices = produce(&GenerationConfig::default()).unwrap();
//! assert_eq!(devices.len(), 5);
//! assert_eq!(devices[3].ip, "192.168.1..3");
//! let json = serialize(&devices, OutputFormat::Json).unwrap();
//! assert!(json.starts_with("[\n  {"));
//! ```

pub mod cli;
pub mod config;
pub mod emit;
pub mod error;
pub mod generator;
pub mod logging;
pub mod model;
