use std::path::PathBuf;

use thiserror::Error;

/// Shared `Result` alias for every component in the monitor.
pub type MonitorResult<T> = Result<T, MonitorError>;

/// Failure taxonomy for one monitoring run.
///
/// `ApiFailure` is the only variant callers are expected to recover from; the
/// orchestrator logs it and ends the run cleanly. Everything else is fatal.
#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("PNR API reported an unsuccessful lookup")]
    ApiFailure,

    #[error("state file {path}: {source}")]
    StateIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("state file {path} is corrupt: {source}")]
    StateCorrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("SMTP delivery failed: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    #[error("email message could not be built: {0}")]
    Mail(#[from] lettre::error::Error),

    #[error("invalid mailbox address: {0}")]
    Address(#[from] lettre::address::AddressError),
}

impl MonitorError {
    /// Convenience constructor for a missing required environment variable.
    pub fn missing_var(name: &str) -> Self {
        Self::Config(format!("{} environment variable not set", name))
    }
}
