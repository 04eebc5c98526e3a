//! Services, their deployments and load balancer bindings.

use super::cluster::CapacityProviderStrategyItem;
use super::common::Tag;
use super::enums::{LaunchType, PropagateTags, SchedulingStrategy};
use super::network::NetworkConfiguration;
use super::placement::{PlacementConstraint, PlacementStrategy};
use super::task_set::TaskSet;
use crate::shape::Timestamp;

string_enum! {
    /// Deployment controller type of a service.
    pub enum DeploymentControllerType {
        Ecs => "ECS",
        CodeDeploy => "CODE_DEPLOY",
        External => "EXTERNAL",
    }
}

shape! {
    /// Binds a service's tasks to an Elastic Load Balancing target group or
    /// Classic Load Balancer.
    ///
    /// Application and Network Load Balancers use `target_group_arn`; Classic
    /// Load Balancers use `load_balancer_name`.
    pub struct LoadBalancer {
        target_group_arn: text String,
        load_balancer_name: text String,
        container_name: text String,
        container_port: scalar i32,
    }
}

shape! {
    /// Service discovery registration of a service's tasks.
    pub struct ServiceRegistry {
        registry_arn: text String,
        port: scalar i32,
        container_name: text String,
        container_port: scalar i32,
    }
}

shape! {
    /// How many tasks may run during a deployment, in percent of the desired
    /// count.
    pub struct DeploymentConfiguration {
        maximum_percent: scalar i32,
        minimum_healthy_percent: scalar i32,
    }
}

shape! {
    pub struct DeploymentController {
        #[serde(rename = "type")]
        kind: nested DeploymentControllerType,
    }
}

shape! {
    /// One deployment of a service. `PRIMARY` is the most recent, `ACTIVE`
    /// deployments are being drained, `INACTIVE` ones are finished.
    pub struct Deployment {
        id: text String,
        status: text String,
        task_definition: text String,
        desired_count: scalar i32,
        pending_count: scalar i32,
        running_count: scalar i32,
        created_at: scalar Timestamp,
        updated_at: scalar Timestamp,
        capacity_provider_strategy: list CapacityProviderStrategyItem,
        launch_type: nested LaunchType,
        platform_version: text String,
        network_configuration: nested NetworkConfiguration,
    }
}

shape! {
    /// An entry of a service's event log.
    pub struct ServiceEvent {
        id: text String,
        created_at: scalar Timestamp,
        message: text String,
    }
}

shape! {
    /// A long-running group of tasks maintained at a desired count.
    pub struct Service {
        service_arn: text String,
        service_name: text String,
        cluster_arn: text String,
        load_balancers: list LoadBalancer,
        service_registries: list ServiceRegistry,
        /// `ACTIVE`, `DRAINING` or `INACTIVE`.
        status: text String,
        desired_count: scalar i32,
        running_count: scalar i32,
        pending_count: scalar i32,
        launch_type: nested LaunchType,
        capacity_provider_strategy: list CapacityProviderStrategyItem,
        platform_version: text String,
        task_definition: text String,
        deployment_configuration: nested DeploymentConfiguration,
        task_sets: list TaskSet,
        deployments: list Deployment,
        role_arn: text String,
        events: list ServiceEvent,
        created_at: scalar Timestamp,
        placement_constraints: list PlacementConstraint,
        placement_strategy: list PlacementStrategy,
        network_configuration: nested NetworkConfiguration,
        health_check_grace_period_seconds: scalar i32,
        scheduling_strategy: nested SchedulingStrategy,
        deployment_controller: nested DeploymentController,
        tags: list Tag,
        created_by: text String,
        #[serde(rename = "enableECSManagedTags")]
        enable_ecs_managed_tags: scalar bool,
        propagate_tags: nested PropagateTags,
    }
}
