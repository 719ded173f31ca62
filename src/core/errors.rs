use thiserror::Error;

/// Error type for inspection runs.
///
/// Only core chain reads surface these to the caller; optional context
/// (wallet accounts, the identity probe) is degraded in place instead.
#[derive(Debug, Error)]
pub enum InspectError {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Chain RPC interaction errors.
    #[error("Blockchain error: {0}")]
    Rpc(String),

    /// Address parsing/validation errors.
    #[error("Invalid address: {0}")]
    Address(String),

    /// Timed-out requests.
    #[error("Timeout error: {0}")]
    Timeout(String),

    /// Filesystem errors.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding/decoding errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_rpc_error() {
        let err = InspectError::Rpc("connection refused".to_string());
        assert_eq!(format!("{}", err), "Blockchain error: connection refused");
    }

    #[test]
    fn test_display_config_error() {
        let err = InspectError::Config("bad chain id".to_string());
        assert_eq!(format!("{}", err), "Configuration error: bad chain id");
    }

    #[test]
    fn test_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: InspectError = io.into();
        assert!(matches!(err, InspectError::Io(_)));
    }
}
