pub mod config;
pub mod errors;
pub mod inspector;
pub mod targets;
pub mod units;
pub mod validation;

pub use config::NetworkConfig;
pub use errors::InspectError;
pub use inspector::Inspector;
