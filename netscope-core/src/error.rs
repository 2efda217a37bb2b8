//! Error types for netscope

use thiserror::Error;

/// Result type alias for netscope operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for netscope
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A capture session is already active
    #[error("a capture session is already in progress")]
    AlreadyCapturing,

    /// Capture device could not be opened
    #[error("failed to open device '{device}': {reason}")]
    DeviceOpen { device: String, reason: String },

    /// Capture filter expression rejected by the provider
    #[error("invalid capture filter '{filter}': {reason}")]
    FilterCompile { filter: String, reason: String },

    /// Invalid parameter error
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Capture read fault
    #[error("packet capture error: {0}")]
    Capture(String),

    /// Capture template name collision
    #[error("template with name '{0}' already exists")]
    DuplicateTemplate(String),

    /// Template storage unreadable, unwritable or unparseable
    #[error("template storage error: {0}")]
    Persistence(String),
}

impl Error {
    /// Create a device-open error
    pub fn device_open<D: Into<String>, R: Into<String>>(device: D, reason: R) -> Self {
        Error::DeviceOpen {
            device: device.into(),
            reason: reason.into(),
        }
    }

    /// Create a filter-compile error
    pub fn filter_compile<F: Into<String>, R: Into<String>>(filter: F, reason: R) -> Self {
        Error::FilterCompile {
            filter: filter.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter<N: Into<String>, R: Into<String>>(name: N, reason: R) -> Self {
        Error::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a capture error with a custom message
    pub fn capture<S: Into<String>>(msg: S) -> Self {
        Error::Capture(msg.into())
    }

    /// Create a persistence error with a custom message
    pub fn persistence<S: Into<String>>(msg: S) -> Self {
        Error::Persistence(msg.into())
    }
}
