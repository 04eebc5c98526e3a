//! # ECS Types
//!
//! Request, result and fragment shapes for the Amazon ECS control-plane API
//! (JSON 1.1 protocol, API version 2014-11-13).
//!
//! - **`models`** - Fragment shapes and string enums shared across operations
//! - **`protocol`** - One request and one result shape per operation, bound
//!   together by the [`Operation`] trait
//! - **`error`** - Service error codes and error body parsing
//!
//! ## Architecture Role
//!
//! ```text
//!            ecs-types (this crate)
//!                    │
//!                    ▼
//!               ecs-client
//!                    │
//!                    ▼
//!          Transport (supplied by caller)
//! ```
//!
//! Every shape is a record of optional fields. Nothing is validated on the
//! client: ranges, mutual exclusivity and required fields are enforced by the
//! service. Shapes are:
//! - **Serializable** via serde, with absent fields omitted from the payload
//! - **Fluent** through `with_*` methods, alongside plain `set_*` setters
//! - **Comparable** and hashable structurally
//!
//! ```
//! use ecs_types::{ContainerCondition, ContainerDependency, HealthCheck};
//!
//! let dependency = ContainerDependency::new()
//!     .with_container_name("db")
//!     .with_condition(ContainerCondition::Healthy);
//! assert_eq!(dependency, ContainerDependency::new().with_container_name("db").with_condition("HEALTHY"));
//!
//! let check = HealthCheck::new().with_command(["CMD", "true"]).with_retries(3);
//! assert_eq!(check.to_string(), "{command: [CMD, true],retries: 3}");
//! ```

#[macro_use]
mod macros;

mod shape;

pub mod error;
pub mod models;
pub mod protocol;

pub use error::{ServiceError, ServiceErrorKind};
pub use models::*;
pub use protocol::*;
pub use shape::{Double, Timestamp};
