use crate::config::ConfigError;
use thiserror::Error;

/// Errors produced while building or running a readiness probe
#[derive(Error, Debug)]
pub enum ProbeError {
    /// A required argument was missing
    #[error("{param:?}: invalid argument")]
    InvalidArgument {
        /// Name of the offending parameter
        param: &'static str,
    },

    /// The URL scheme is not mapped to any driver
    #[error("unsupported scheme {scheme:?}")]
    UnsupportedScheme {
        /// The scheme found on the URL
        scheme: String,
    },

    /// The driver rejected the connection string before any I/O
    #[error(transparent)]
    InvalidConnectionString(tokio_postgres::Error),

    /// Connection setup or ping failed; the driver's message is kept as-is
    #[error(transparent)]
    Postgres(#[from] tokio_postgres::Error),

    /// The server closed the connection before answering the ping
    #[error("connection closed before ping completed")]
    ConnectionClosed,

    /// The probe context was cancelled
    #[error("context canceled")]
    Canceled,

    /// The probe context deadline passed
    #[error("context deadline exceeded")]
    DeadlineExceeded,

    /// Probe configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ProbeError {
    /// Whether the error came from the context expiring
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Canceled | Self::DeadlineExceeded)
    }

    /// Whether repeating the probe later could succeed
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::InvalidArgument { .. }
            | Self::UnsupportedScheme { .. }
            | Self::InvalidConnectionString(_)
            | Self::Config(_) => false,
            Self::Postgres(_) | Self::ConnectionClosed | Self::DeadlineExceeded => true,
            // the caller asked us to stop
            Self::Canceled => false,
        }
    }
}

/// Result type alias for probe operations
pub type Result<T> = std::result::Result<T, ProbeError>;
