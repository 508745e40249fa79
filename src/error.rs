use thiserror::Error;

/// Errors that can occur while opening or interrogating a hardware mixer
///
/// Only session construction is fallible from the caller's point of view:
/// once a [`crate::MixerSession`] exists, volume and mute requests are
/// best-effort against the hardware and never surface errors.
#[derive(Debug, Error)]
pub enum MixerError {
    /// Failed to open the hardware mixer connection for a device
    #[error("failed to open mixer for {device}: {message}")]
    OpenFailed {
        /// The device identifier the open was attempted for
        device: String,
        /// Description of the failure
        message: String,
        /// The underlying source of the error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Failed to enumerate the mixer elements on an open connection
    #[error("failed to enumerate mixer controls: {message}")]
    EnumerationFailed {
        /// Description of the failure
        message: String,
        /// The underlying source of the error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A per-element query or write against the mixer failed
    #[error("mixer control access failed: {message}")]
    ControlAccess {
        /// Description of the failure
        message: String,
        /// The underlying source of the error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Result type alias for mixer operations
pub type Result<T> = std::result::Result<T, MixerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MixerError::OpenFailed {
            device: "hw:0".to_string(),
            message: "no such device".to_string(),
            source: None,
        };
        assert_eq!(
            err.to_string(),
            "failed to open mixer for hw:0: no such device"
        );
    }

    #[test]
    fn test_error_source_is_preserved() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = MixerError::ControlAccess {
            message: "element gone".to_string(),
            source: Some(Box::new(io_err)),
        };
        let source = std::error::Error::source(&err).expect("source should be set");
        assert_eq!(source.to_string(), "missing");
    }

    #[test]
    fn test_error_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MixerError>();
    }
}
