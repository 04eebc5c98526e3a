//! Task definitions and their task-level settings.

use super::common::{Attribute, KeyValuePair};
use super::container_definition::ContainerDefinition;
use super::enums::Compatibility;
use super::volume::Volume;

string_enum! {
    /// Docker networking mode for the containers of a task.
    pub enum NetworkMode {
        Bridge => "bridge",
        Host => "host",
        Awsvpc => "awsvpc",
        None => "none",
    }
}

string_enum! {
    pub enum PidMode {
        Host => "host",
        Task => "task",
    }
}

string_enum! {
    pub enum IpcMode {
        Host => "host",
        Task => "task",
        None => "none",
    }
}

string_enum! {
    pub enum TaskDefinitionStatus {
        Active => "ACTIVE",
        Inactive => "INACTIVE",
    }
}

string_enum! {
    /// Status filter for `ListTaskDefinitionFamilies`.
    pub enum TaskDefinitionFamilyStatus {
        Active => "ACTIVE",
        Inactive => "INACTIVE",
        All => "ALL",
    }
}

string_enum! {
    pub enum TaskDefinitionPlacementConstraintType {
        MemberOf => "memberOf",
    }
}

string_enum! {
    pub enum ProxyConfigurationType {
        Appmesh => "APPMESH",
    }
}

shape! {
    /// A placement constraint declared by a task definition. Only `memberOf`
    /// is allowed here.
    pub struct TaskDefinitionPlacementConstraint {
        #[serde(rename = "type")]
        kind: nested TaskDefinitionPlacementConstraintType,
        expression: text String,
    }
}

shape! {
    /// App Mesh proxy settings for a task.
    pub struct ProxyConfiguration {
        #[serde(rename = "type")]
        kind: nested ProxyConfigurationType,
        container_name: text String,
        /// `IgnoredUID`, `IgnoredGID`, `AppPorts`, `ProxyIngressPort`,
        /// `ProxyEgressPort`, `EgressIgnoredPorts` and `EgressIgnoredIPs`.
        properties: list KeyValuePair,
    }
}

shape! {
    /// An Elastic Inference accelerator made available to a task.
    pub struct InferenceAccelerator {
        device_name: text String,
        device_type: text String,
    }
}

shape! {
    /// A registered revision of a task definition family.
    pub struct TaskDefinition {
        task_definition_arn: text String,
        container_definitions: list ContainerDefinition,
        family: text String,
        task_role_arn: text String,
        execution_role_arn: text String,
        network_mode: nested NetworkMode,
        revision: scalar i32,
        volumes: list Volume,
        status: nested TaskDefinitionStatus,
        requires_attributes: list Attribute,
        placement_constraints: list TaskDefinitionPlacementConstraint,
        compatibilities: list Compatibility,
        requires_compatibilities: list Compatibility,
        /// Task-level CPU, in units (`1024`) or vCPUs (`1 vcpu`).
        cpu: text String,
        /// Task-level memory, in MiB (`1024`) or GB (`1 GB`).
        memory: text String,
        inference_accelerators: list InferenceAccelerator,
        pid_mode: nested PidMode,
        ipc_mode: nested IpcMode,
        proxy_configuration: nested ProxyConfiguration,
    }
}
