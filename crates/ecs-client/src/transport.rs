//! The seam between typed dispatch and the wire.

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::ClientError;

/// Content type of every JSON 1.1 request.
pub const CONTENT_TYPE: &str = "application/x-amz-json-1.1";

/// One encoded call, ready to be signed and sent as an HTTP POST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceCall {
    /// Base URL the call is sent to.
    pub endpoint: String,
    /// `X-Amz-Target` header value.
    pub target: String,
    pub user_agent: String,
    /// JSON request body.
    pub body: Bytes,
}

impl ServiceCall {
    /// Headers the protocol requires, besides those added by signing.
    pub fn headers(&self) -> [(&'static str, &str); 3] {
        [
            ("Content-Type", CONTENT_TYPE),
            ("X-Amz-Target", self.target.as_str()),
            ("User-Agent", self.user_agent.as_str()),
        ]
    }
}

/// A raw response as received from the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceResponse {
    pub status: u16,
    /// `x-amzn-RequestId` header value.
    pub request_id: Option<String>,
    pub body: Bytes,
}

impl ServiceResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self { status, request_id: None, body: body.into() }
    }

    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Delivers encoded calls to the service.
///
/// Implementations own signing, HTTP and retries. The client hands over each
/// call exactly once and passes failures upward unchanged.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, call: ServiceCall) -> Result<ServiceResponse, ClientError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, call: ServiceCall) -> Result<ServiceResponse, ClientError> {
        (**self).send(call).await
    }
}
