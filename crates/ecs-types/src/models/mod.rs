//! Fragment shapes and string enums shared by requests and results.

pub mod capacity_provider;
pub mod cluster;
pub mod common;
pub mod container_definition;
pub mod container_instance;
pub mod enums;
pub mod network;
pub mod placement;
pub mod service;
pub mod task;
pub mod task_definition;
pub mod task_set;
pub mod volume;

pub use capacity_provider::*;
pub use cluster::*;
pub use common::*;
pub use container_definition::*;
pub use container_instance::*;
pub use enums::*;
pub use network::*;
pub use placement::*;
pub use service::*;
pub use task::*;
pub use task_definition::*;
pub use task_set::*;
pub use volume::*;
