//! Task definition registration and lookup.

use crate::models::{
    Compatibility, ContainerDefinition, InferenceAccelerator, IpcMode, NetworkMode, PidMode,
    ProxyConfiguration, SortOrder, Tag, TaskDefinition, TaskDefinitionField,
    TaskDefinitionFamilyStatus, TaskDefinitionPlacementConstraint, TaskDefinitionStatus, Volume,
};

shape! {
    /// Registers a new revision of a task definition family.
    pub struct RegisterTaskDefinitionRequest {
        family: text String,
        task_role_arn: text String,
        execution_role_arn: text String,
        network_mode: nested NetworkMode,
        container_definitions: list ContainerDefinition,
        volumes: list Volume,
        placement_constraints: list TaskDefinitionPlacementConstraint,
        requires_compatibilities: list Compatibility,
        cpu: text String,
        memory: text String,
        tags: list Tag,
        pid_mode: nested PidMode,
        ipc_mode: nested IpcMode,
        proxy_configuration: nested ProxyConfiguration,
        inference_accelerators: list InferenceAccelerator,
    }
}

shape! {
    pub struct RegisterTaskDefinitionResult {
        task_definition: nested TaskDefinition,
        tags: list Tag,
    }
}

shape! {
    /// Marks a task definition revision `INACTIVE`. Existing tasks and
    /// services keep running.
    pub struct DeregisterTaskDefinitionRequest {
        /// `family:revision` or the full ARN.
        task_definition: text String,
    }
}

shape! {
    pub struct DeregisterTaskDefinitionResult {
        task_definition: nested TaskDefinition,
    }
}

shape! {
    pub struct DescribeTaskDefinitionRequest {
        /// `family` for the latest active revision, `family:revision`, or
        /// the full ARN.
        task_definition: text String,
        include: list TaskDefinitionField,
    }
}

shape! {
    pub struct DescribeTaskDefinitionResult {
        task_definition: nested TaskDefinition,
        tags: list Tag,
    }
}

shape! {
    pub struct ListTaskDefinitionFamiliesRequest {
        family_prefix: text String,
        status: nested TaskDefinitionFamilyStatus,
        next_token: text String,
        max_results: scalar i32,
    }
}

shape! {
    pub struct ListTaskDefinitionFamiliesResult {
        families: list String,
        next_token: text String,
    }
}

shape! {
    pub struct ListTaskDefinitionsRequest {
        family_prefix: text String,
        status: nested TaskDefinitionStatus,
        sort: nested SortOrder,
        next_token: text String,
        max_results: scalar i32,
    }
}

shape! {
    pub struct ListTaskDefinitionsResult {
        task_definition_arns: list String,
        next_token: text String,
    }
}
