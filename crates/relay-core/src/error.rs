//! # Processor Error Types
//!
//! Typed error handling for calls into the external payment processor.
//! All processor operations return `Result<T, ProcessorError>`.

use thiserror::Error;

/// Error type for all payment-processor operations.
///
/// The API layer classifies these into HTTP responses: `Api` errors carry
/// the processor's own message back to the caller as a 400, everything
/// else is reported as a generic 500 and logged in full.
#[derive(Debug, Error)]
pub enum ProcessorError {
    /// Configuration errors (missing keys, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The processor rejected the request and returned its own error object
    /// (declined card, invalid parameter, unknown intent id, ...)
    #[error("Processor error: {message}")]
    Api {
        message: String,
        code: Option<String>,
    },

    /// Network/HTTP failure talking to the processor
    #[error("Network error: {0}")]
    Network(String),

    /// The processor replied with something we could not decode
    #[error("Invalid processor response: {0}")]
    InvalidResponse(String),
}

impl ProcessorError {
    /// Build an `Api` error from just a message.
    pub fn api(message: impl Into<String>) -> Self {
        ProcessorError::Api {
            message: message.into(),
            code: None,
        }
    }

    /// True when the processor itself rejected the request, i.e. the
    /// failure is attributable to the caller's input by convention.
    pub fn is_client_fault(&self) -> bool {
        matches!(self, ProcessorError::Api { .. })
    }
}

/// Result type alias for processor operations
pub type ProcessorResult<T> = Result<T, ProcessorError>;
