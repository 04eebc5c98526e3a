//! Task sets of services using the `EXTERNAL` or `CODE_DEPLOY` deployment
//! controllers.

use super::cluster::CapacityProviderStrategyItem;
use super::common::Tag;
use super::enums::LaunchType;
use super::network::NetworkConfiguration;
use super::service::{LoadBalancer, ServiceRegistry};
use crate::shape::{Double, Timestamp};

string_enum! {
    pub enum ScaleUnit {
        Percent => "PERCENT",
    }
}

string_enum! {
    pub enum StabilityStatus {
        SteadyState => "STEADY_STATE",
        Stabilizing => "STABILIZING",
    }
}

shape! {
    /// Share of a service's desired count a task set should run, 0 to 100
    /// percent.
    pub struct Scale {
        value: scalar Double,
        unit: nested ScaleUnit,
    }
}

shape! {
    /// A group of tasks of one task definition inside a service.
    pub struct TaskSet {
        id: text String,
        task_set_arn: text String,
        service_arn: text String,
        cluster_arn: text String,
        started_by: text String,
        external_id: text String,
        /// `PRIMARY`, `ACTIVE` or `DRAINING`.
        status: text String,
        task_definition: text String,
        computed_desired_count: scalar i32,
        pending_count: scalar i32,
        running_count: scalar i32,
        created_at: scalar Timestamp,
        updated_at: scalar Timestamp,
        launch_type: nested LaunchType,
        capacity_provider_strategy: list CapacityProviderStrategyItem,
        platform_version: text String,
        network_configuration: nested NetworkConfiguration,
        load_balancers: list LoadBalancer,
        service_registries: list ServiceRegistry,
        scale: nested Scale,
        stability_status: nested StabilityStatus,
        stability_status_at: scalar Timestamp,
        tags: list Tag,
    }
}
