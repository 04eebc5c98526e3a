//! Container instance registration, inspection and draining.

use crate::models::{
    Attribute, ContainerInstance, ContainerInstanceField, ContainerInstanceStatus, Failure,
    PlatformDevice, Resource, Tag, VersionInfo,
};

shape! {
    pub struct DeregisterContainerInstanceRequest {
        cluster: text String,
        container_instance: text String,
        /// Deregister even while tasks are still running on the instance.
        force: scalar bool,
    }
}

shape! {
    pub struct DeregisterContainerInstanceResult {
        container_instance: nested ContainerInstance,
    }
}

shape! {
    pub struct DescribeContainerInstancesRequest {
        cluster: text String,
        container_instances: list String,
        include: list ContainerInstanceField,
    }
}

shape! {
    pub struct DescribeContainerInstancesResult {
        container_instances: list ContainerInstance,
        failures: list Failure,
    }
}

shape! {
    pub struct ListContainerInstancesRequest {
        cluster: text String,
        /// A cluster query language expression.
        filter: text String,
        next_token: text String,
        max_results: scalar i32,
        status: nested ContainerInstanceStatus,
    }
}

shape! {
    pub struct ListContainerInstancesResult {
        container_instance_arns: list String,
        next_token: text String,
    }
}

shape! {
    /// Registers an EC2 instance with a cluster. Sent by the container agent.
    pub struct RegisterContainerInstanceRequest {
        cluster: text String,
        instance_identity_document: text String,
        instance_identity_document_signature: text String,
        total_resources: list Resource,
        version_info: nested VersionInfo,
        container_instance_arn: text String,
        attributes: list Attribute,
        platform_devices: list PlatformDevice,
        tags: list Tag,
    }
}

shape! {
    pub struct RegisterContainerInstanceResult {
        container_instance: nested ContainerInstance,
    }
}

shape! {
    pub struct UpdateContainerAgentRequest {
        cluster: text String,
        container_instance: text String,
    }
}

shape! {
    pub struct UpdateContainerAgentResult {
        container_instance: nested ContainerInstance,
    }
}

shape! {
    /// Moves container instances between `ACTIVE` and `DRAINING`.
    pub struct UpdateContainerInstancesStateRequest {
        cluster: text String,
        container_instances: list String,
        status: nested ContainerInstanceStatus,
    }
}

shape! {
    pub struct UpdateContainerInstancesStateResult {
        container_instances: list ContainerInstance,
        failures: list Failure,
    }
}
