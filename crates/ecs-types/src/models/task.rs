//! Running tasks, their containers and per-run overrides.

use super::common::{Attachment, Attribute, KeyValuePair, Tag};
use super::container_definition::{EnvironmentFile, ResourceRequirement};
use super::enums::{DesiredStatus, HealthStatus, LaunchType};
use super::network::{NetworkBinding, NetworkInterface};
use super::task_definition::InferenceAccelerator;
use crate::shape::Timestamp;

string_enum! {
    /// Connectivity of a task to the control plane.
    pub enum Connectivity {
        Connected => "CONNECTED",
        Disconnected => "DISCONNECTED",
    }
}

string_enum! {
    pub enum TaskStopCode {
        TaskFailedToStart => "TaskFailedToStart",
        EssentialContainerExited => "EssentialContainerExited",
        UserInitiated => "UserInitiated",
    }
}

shape! {
    /// A container running as part of a task.
    pub struct Container {
        container_arn: text String,
        task_arn: text String,
        name: text String,
        image: text String,
        image_digest: text String,
        runtime_id: text String,
        last_status: text String,
        exit_code: scalar i32,
        reason: text String,
        network_bindings: list NetworkBinding,
        network_interfaces: list NetworkInterface,
        health_status: nested HealthStatus,
        /// CPU units, as a string.
        cpu: text String,
        /// Hard memory limit in MiB, as a string.
        memory: text String,
        memory_reservation: text String,
        gpu_ids: list String,
    }
}

shape! {
    /// A container state change reported by the agent.
    pub struct ContainerStateChange {
        container_name: text String,
        image_digest: text String,
        runtime_id: text String,
        exit_code: scalar i32,
        network_bindings: list NetworkBinding,
        reason: text String,
        status: text String,
    }
}

shape! {
    pub struct InferenceAcceleratorOverride {
        device_name: text String,
        device_type: text String,
    }
}

shape! {
    /// Per-run changes to one container of the task definition.
    pub struct ContainerOverride {
        /// Name of the container in the task definition to override.
        name: text String,
        command: list String,
        environment: list KeyValuePair,
        environment_files: list EnvironmentFile,
        cpu: scalar i32,
        memory: scalar i32,
        memory_reservation: scalar i32,
        resource_requirements: list ResourceRequirement,
    }
}

shape! {
    /// Per-run changes to a task definition, applied by `RunTask` and
    /// `StartTask`.
    pub struct TaskOverride {
        container_overrides: list ContainerOverride,
        cpu: text String,
        inference_accelerator_overrides: list InferenceAcceleratorOverride,
        execution_role_arn: text String,
        memory: text String,
        task_role_arn: text String,
    }
}

shape! {
    /// A task: an instantiation of a task definition on a cluster.
    pub struct Task {
        attachments: list Attachment,
        attributes: list Attribute,
        availability_zone: text String,
        capacity_provider_name: text String,
        cluster_arn: text String,
        connectivity: nested Connectivity,
        connectivity_at: scalar Timestamp,
        container_instance_arn: text String,
        containers: list Container,
        cpu: text String,
        created_at: scalar Timestamp,
        desired_status: nested DesiredStatus,
        execution_stopped_at: scalar Timestamp,
        group: text String,
        health_status: nested HealthStatus,
        inference_accelerators: list InferenceAccelerator,
        /// `PROVISIONING`, `PENDING`, `ACTIVATING`, `RUNNING`,
        /// `DEACTIVATING`, `STOPPING`, `DEPROVISIONING` or `STOPPED`.
        last_status: text String,
        launch_type: nested LaunchType,
        memory: text String,
        overrides: nested TaskOverride,
        platform_version: text String,
        pull_started_at: scalar Timestamp,
        pull_stopped_at: scalar Timestamp,
        started_at: scalar Timestamp,
        started_by: text String,
        stop_code: nested TaskStopCode,
        stopped_at: scalar Timestamp,
        stopped_reason: text String,
        stopping_at: scalar Timestamp,
        tags: list Tag,
        task_arn: text String,
        task_definition_arn: text String,
        version: scalar i64,
    }
}
