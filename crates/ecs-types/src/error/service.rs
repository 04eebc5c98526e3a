//! Errors returned by the ECS service.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

string_enum! {
    /// Modeled exception codes of the service.
    pub enum ServiceErrorKind {
        /// The caller lacks permission for the action.
        AccessDenied => "AccessDeniedException",
        AttributeLimitExceeded => "AttributeLimitExceededException",
        /// The account is blocked from the action.
        Blocked => "BlockedException",
        /// The request was rejected, for example because of an unknown
        /// identifier or missing permissions on a referenced resource.
        Client => "ClientException",
        ClusterContainsContainerInstances => "ClusterContainsContainerInstancesException",
        ClusterContainsServices => "ClusterContainsServicesException",
        ClusterContainsTasks => "ClusterContainsTasksException",
        ClusterNotFound => "ClusterNotFoundException",
        InvalidParameter => "InvalidParameterException",
        LimitExceeded => "LimitExceededException",
        /// The container instance has no agent version information.
        MissingVersion => "MissingVersionException",
        NoUpdateAvailable => "NoUpdateAvailableException",
        PlatformTaskDefinitionIncompatibility => "PlatformTaskDefinitionIncompatibilityException",
        PlatformUnknown => "PlatformUnknownException",
        ResourceInUse => "ResourceInUseException",
        ResourceNotFound => "ResourceNotFoundException",
        /// A failure on the service side.
        Server => "ServerException",
        ServiceNotActive => "ServiceNotActiveException",
        ServiceNotFound => "ServiceNotFoundException",
        TargetNotFound => "TargetNotFoundException",
        TaskSetNotFound => "TaskSetNotFoundException",
        UnsupportedFeature => "UnsupportedFeatureException",
        /// An agent update is already in progress on the instance.
        UpdateInProgress => "UpdateInProgressException",
    }
}

/// An error response from the service, carrying the service's own message.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[error("{kind} (HTTP {status}): {}", .message.as_deref().unwrap_or("no message"))]
pub struct ServiceError {
    pub kind: ServiceErrorKind,
    pub message: Option<String>,
    /// HTTP status of the response.
    pub status: u16,
    pub request_id: Option<String>,
}

impl ServiceError {
    pub fn new(kind: impl Into<ServiceErrorKind>, message: impl Into<String>, status: u16) -> Self {
        Self { kind: kind.into(), message: Some(message.into()), status, request_id: None }
    }

    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Parses a JSON 1.1 error body.
    ///
    /// The code is taken from `__type`, without any `namespace#` prefix or
    /// `:detail` suffix. A body that is not a JSON object, or has no code,
    /// yields an unrecognized kind named after the HTTP status.
    pub fn from_response(status: u16, request_id: Option<String>, body: &[u8]) -> Self {
        let parsed = serde_json::from_slice::<Value>(body).ok();
        let object = parsed.as_ref().and_then(Value::as_object);

        let kind = object
            .and_then(|fields| fields.get("__type"))
            .and_then(Value::as_str)
            .map(error_code)
            .filter(|code| !code.is_empty())
            .map(ServiceErrorKind::from)
            .unwrap_or_else(|| ServiceErrorKind::Unrecognized(format!("HTTP {}", status)));

        let message = object
            .and_then(|fields| fields.get("message").or_else(|| fields.get("Message")))
            .and_then(Value::as_str)
            .map(str::to_string);

        Self { kind, message, status, request_id }
    }

    /// The service's message, if it sent one.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Whether the failure is on the service side rather than in the request.
    pub fn is_server_fault(&self) -> bool {
        self.kind == ServiceErrorKind::Server || self.status >= 500
    }

    /// Whether the request named a resource that does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self.kind,
            ServiceErrorKind::ClusterNotFound
                | ServiceErrorKind::ServiceNotFound
                | ServiceErrorKind::TaskSetNotFound
                | ServiceErrorKind::ResourceNotFound
                | ServiceErrorKind::TargetNotFound
        )
    }
}

fn error_code(raw: &str) -> &str {
    // The `:detail` suffix may contain '#'.
    let code = raw.split_once(':').map_or(raw, |(code, _)| code);
    code.rsplit_once('#').map_or(code, |(_, code)| code).trim()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_namespaced_code() {
        let body = br#"{"__type":"com.amazonaws.ecs#ClusterNotFoundException","message":"Cluster not found."}"#;
        let err = ServiceError::from_response(400, Some("req-1".to_string()), body);

        assert_eq!(err.kind, ServiceErrorKind::ClusterNotFound);
        assert_eq!(err.message(), Some("Cluster not found."));
        assert_eq!(err.request_id.as_deref(), Some("req-1"));
        assert!(err.is_not_found());
        assert!(!err.is_server_fault());
    }

    #[test]
    fn test_parse_capitalized_message_and_suffix() {
        let body = br#"{"__type":"UpdateInProgressException:http://internal","Message":"busy"}"#;
        let err = ServiceError::from_response(400, None, body);
        assert_eq!(err.kind, ServiceErrorKind::UpdateInProgress);
        assert_eq!(err.message(), Some("busy"));

        let body = br#"{"__type":"com.amazonaws.ecs#ClusterNotFoundException:http://internal.amazon.com/doc#frag"}"#;
        let err = ServiceError::from_response(400, None, body);
        assert_eq!(err.kind, ServiceErrorKind::ClusterNotFound);
    }

    #[test]
    fn test_unmodeled_code_is_kept() {
        let body = br#"{"__type":"ThrottlingException","message":"Rate exceeded"}"#;
        let err = ServiceError::from_response(400, None, body);
        assert_eq!(err.kind, ServiceErrorKind::Unrecognized("ThrottlingException".to_string()));
        assert!(err.kind.is_unrecognized());
    }

    #[test]
    fn test_non_json_body() {
        let err = ServiceError::from_response(503, None, b"<html>Service Unavailable</html>");
        assert_eq!(err.kind.as_str(), "HTTP 503");
        assert!(err.message().is_none());
        assert!(err.is_server_fault());
    }

    #[test]
    fn test_display() {
        let err = ServiceError::new("ServerException", "internal failure", 500);
        assert_eq!(err.to_string(), "ServerException (HTTP 500): internal failure");
        assert!(err.is_server_fault());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let err = ServiceError::new(ServiceErrorKind::Client, "bad arn", 400).with_request_id("abc");
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("ClientException"));
        let back: ServiceError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, err);
    }
}
