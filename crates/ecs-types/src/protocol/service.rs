//! Service lifecycle.

use crate::models::{
    CapacityProviderStrategyItem, DeploymentConfiguration, DeploymentController, Failure,
    LaunchType, LoadBalancer, NetworkConfiguration, PlacementConstraint, PlacementStrategy,
    PropagateTags, SchedulingStrategy, Service, ServiceField, ServiceRegistry, Tag, TaskSet,
};

shape! {
    /// Runs and maintains a desired number of tasks of a task definition.
    ///
    /// `launch_type` and `capacity_provider_strategy` are mutually
    /// exclusive. With neither, the cluster's default strategy applies.
    pub struct CreateServiceRequest {
        cluster: text String,
        service_name: text String,
        task_definition: text String,
        load_balancers: list LoadBalancer,
        service_registries: list ServiceRegistry,
        desired_count: scalar i32,
        /// Idempotency token, up to 32 ASCII characters.
        client_token: text String,
        launch_type: nested LaunchType,
        capacity_provider_strategy: list CapacityProviderStrategyItem,
        platform_version: text String,
        role: text String,
        deployment_configuration: nested DeploymentConfiguration,
        placement_constraints: list PlacementConstraint,
        placement_strategy: list PlacementStrategy,
        network_configuration: nested NetworkConfiguration,
        health_check_grace_period_seconds: scalar i32,
        scheduling_strategy: nested SchedulingStrategy,
        deployment_controller: nested DeploymentController,
        tags: list Tag,
        #[serde(rename = "enableECSManagedTags")]
        enable_ecs_managed_tags: scalar bool,
        propagate_tags: nested PropagateTags,
    }
}

shape! {
    pub struct CreateServiceResult {
        service: nested Service,
    }
}

shape! {
    pub struct DeleteServiceRequest {
        cluster: text String,
        service: text String,
        /// Delete without scaling the service to zero first. Replica
        /// services only.
        force: scalar bool,
    }
}

shape! {
    pub struct DeleteServiceResult {
        service: nested Service,
    }
}

shape! {
    pub struct DescribeServicesRequest {
        cluster: text String,
        /// Up to 10 service names or ARNs.
        services: list String,
        include: list ServiceField,
    }
}

shape! {
    pub struct DescribeServicesResult {
        services: list Service,
        failures: list Failure,
    }
}

shape! {
    pub struct ListServicesRequest {
        cluster: text String,
        next_token: text String,
        max_results: scalar i32,
        launch_type: nested LaunchType,
        scheduling_strategy: nested SchedulingStrategy,
    }
}

shape! {
    pub struct ListServicesResult {
        service_arns: list String,
        next_token: text String,
    }
}

shape! {
    /// Changes the desired count, task definition, deployment settings or
    /// networking of a service.
    pub struct UpdateServiceRequest {
        cluster: text String,
        service: text String,
        desired_count: scalar i32,
        task_definition: text String,
        capacity_provider_strategy: list CapacityProviderStrategyItem,
        deployment_configuration: nested DeploymentConfiguration,
        network_configuration: nested NetworkConfiguration,
        placement_constraints: list PlacementConstraint,
        placement_strategy: list PlacementStrategy,
        platform_version: text String,
        force_new_deployment: scalar bool,
        health_check_grace_period_seconds: scalar i32,
    }
}

shape! {
    pub struct UpdateServiceResult {
        service: nested Service,
    }
}

shape! {
    pub struct UpdateServicePrimaryTaskSetRequest {
        cluster: text String,
        service: text String,
        primary_task_set: text String,
    }
}

shape! {
    pub struct UpdateServicePrimaryTaskSetResult {
        task_set: nested TaskSet,
    }
}
