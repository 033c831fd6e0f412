// catalyst-api: Async Rust client for the Cisco Catalyst Center intent API

pub mod client;
pub mod credentials;
pub mod devices;
pub mod error;
pub mod models;
pub mod profiling;
pub mod sites;
pub mod tasks;
pub mod transport;

pub use client::CatalystClient;
pub use error::Error;
pub use transport::{TlsMode, TransportConfig};
