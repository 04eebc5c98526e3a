//! Starting, stopping and inspecting tasks.

use crate::models::{
    CapacityProviderStrategyItem, DesiredStatus, Failure, LaunchType, NetworkConfiguration,
    PlacementConstraint, PlacementStrategy, PropagateTags, Tag, Task, TaskField, TaskOverride,
};

shape! {
    /// Starts tasks, letting the scheduler place them.
    pub struct RunTaskRequest {
        capacity_provider_strategy: list CapacityProviderStrategyItem,
        cluster: text String,
        /// 1 to 10 tasks per call.
        count: scalar i32,
        #[serde(rename = "enableECSManagedTags")]
        enable_ecs_managed_tags: scalar bool,
        group: text String,
        launch_type: nested LaunchType,
        network_configuration: nested NetworkConfiguration,
        overrides: nested TaskOverride,
        placement_constraints: list PlacementConstraint,
        placement_strategy: list PlacementStrategy,
        platform_version: text String,
        propagate_tags: nested PropagateTags,
        reference_id: text String,
        started_by: text String,
        tags: list Tag,
        task_definition: text String,
    }
}

shape! {
    pub struct RunTaskResult {
        tasks: list Task,
        failures: list Failure,
    }
}

shape! {
    /// Starts tasks on explicitly chosen container instances.
    pub struct StartTaskRequest {
        cluster: text String,
        /// Up to 10 container instance IDs or ARNs.
        container_instances: list String,
        #[serde(rename = "enableECSManagedTags")]
        enable_ecs_managed_tags: scalar bool,
        group: text String,
        network_configuration: nested NetworkConfiguration,
        overrides: nested TaskOverride,
        propagate_tags: nested PropagateTags,
        reference_id: text String,
        started_by: text String,
        tags: list Tag,
        task_definition: text String,
    }
}

shape! {
    pub struct StartTaskResult {
        tasks: list Task,
        failures: list Failure,
    }
}

shape! {
    pub struct StopTaskRequest {
        cluster: text String,
        task: text String,
        /// Shown in the `stoppedReason` of the task, up to 255 characters.
        reason: text String,
    }
}

shape! {
    pub struct StopTaskResult {
        task: nested Task,
    }
}

shape! {
    pub struct DescribeTasksRequest {
        cluster: text String,
        /// Up to 100 task IDs or ARNs.
        tasks: list String,
        include: list TaskField,
    }
}

shape! {
    pub struct DescribeTasksResult {
        tasks: list Task,
        failures: list Failure,
    }
}

shape! {
    /// Lists task ARNs, optionally filtered by instance, family, starter,
    /// service, desired status or launch type.
    pub struct ListTasksRequest {
        cluster: text String,
        container_instance: text String,
        family: text String,
        next_token: text String,
        max_results: scalar i32,
        started_by: text String,
        service_name: text String,
        desired_status: nested DesiredStatus,
        launch_type: nested LaunchType,
    }
}

shape! {
    pub struct ListTasksResult {
        task_arns: list String,
        next_token: text String,
    }
}
