//! Container instances registered to a cluster.

use super::common::{Attachment, Attribute, Tag};
use crate::shape::{Double, Timestamp};

string_enum! {
    /// Status filter and target state for container instances.
    pub enum ContainerInstanceStatus {
        Active => "ACTIVE",
        Draining => "DRAINING",
        Registering => "REGISTERING",
        Deregistering => "DEREGISTERING",
        RegistrationFailed => "REGISTRATION_FAILED",
    }
}

string_enum! {
    /// Progress of a container agent update.
    pub enum AgentUpdateStatus {
        Pending => "PENDING",
        Staging => "STAGING",
        Staged => "STAGED",
        Updating => "UPDATING",
        Updated => "UPDATED",
        Failed => "FAILED",
    }
}

string_enum! {
    pub enum PlatformDeviceType {
        Gpu => "GPU",
    }
}

shape! {
    /// A resource registered on, or remaining on, a container instance.
    ///
    /// `CPU`, `MEMORY`, `PORTS`, `PORTS_UDP` and custom resources are reported
    /// this way. `kind` names which of the value fields is populated.
    pub struct Resource {
        name: text String,
        /// `INTEGER`, `DOUBLE`, `LONG` or `STRINGSET`.
        #[serde(rename = "type")]
        kind: text String,
        double_value: scalar Double,
        long_value: scalar i64,
        integer_value: scalar i32,
        string_set_value: list String,
    }
}

shape! {
    /// Versions of the container agent and Docker daemon on an instance.
    pub struct VersionInfo {
        agent_version: text String,
        agent_hash: text String,
        docker_version: text String,
    }
}

shape! {
    /// A device, such as a GPU, available on a container instance.
    pub struct PlatformDevice {
        id: text String,
        #[serde(rename = "type")]
        kind: nested PlatformDeviceType,
    }
}

shape! {
    /// An EC2 instance running the container agent and registered to a
    /// cluster.
    pub struct ContainerInstance {
        container_instance_arn: text String,
        ec2_instance_id: text String,
        capacity_provider_name: text String,
        /// Incremented on every change to the instance's resources or state.
        version: scalar i64,
        version_info: nested VersionInfo,
        remaining_resources: list Resource,
        registered_resources: list Resource,
        /// `REGISTERING`, `REGISTRATION_FAILED`, `ACTIVE`, `INACTIVE`,
        /// `DEREGISTERING` or `DRAINING`.
        status: text String,
        status_reason: text String,
        agent_connected: scalar bool,
        running_tasks_count: scalar i32,
        pending_tasks_count: scalar i32,
        agent_update_status: nested AgentUpdateStatus,
        attributes: list Attribute,
        registered_at: scalar Timestamp,
        attachments: list Attachment,
        tags: list Tag,
    }
}
