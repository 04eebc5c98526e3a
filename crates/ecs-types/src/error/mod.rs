//! Typed errors reported by the ECS service.
//!
//! Errors are never produced by client-side validation. Every variant here
//! originates from an error response body.

mod service;

pub use service::{ServiceError, ServiceErrorKind};
