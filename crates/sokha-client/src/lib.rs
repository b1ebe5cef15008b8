//! sokha-client
//!
//! Device-side plumbing: the HTTP implementation of the flow engine's
//! [`sokha_flow::Backend`] trait, and the versioned on-device configuration
//! file (backend address, default locale, device label).

pub mod config;
pub mod error;
pub mod http;

pub use config::DeviceConfig;
pub use error::ClientError;
pub use http::HttpBackend;
