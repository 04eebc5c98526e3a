//! Error types for the ECS client.

use ecs_types::ServiceError;
use thiserror::Error;

/// Errors that can occur when calling the service.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The transport could not deliver the call or read the response.
    #[error("Transport failed: {0}")]
    Transport(String),

    /// The service answered with an error response.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// The request could not be encoded as JSON.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A successful response body did not decode into the result shape.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Region or endpoint settings are unusable.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ClientError {
    /// The service error, when the failure came from the service.
    pub fn service_error(&self) -> Option<&ServiceError> {
        match self {
            Self::Service(error) => Some(error),
            _ => None,
        }
    }
}
