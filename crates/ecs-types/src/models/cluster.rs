//! Clusters and their capacity provider strategies.

use super::common::{Attachment, KeyValuePair, Tag};

string_enum! {
    pub enum ClusterSettingName {
        ContainerInsights => "containerInsights",
    }
}

shape! {
    /// A cluster setting such as CloudWatch Container Insights.
    pub struct ClusterSetting {
        name: nested ClusterSettingName,
        /// `enabled` or `disabled` for `containerInsights`.
        value: text String,
    }
}

shape! {
    /// One entry of a capacity provider strategy.
    ///
    /// `base` is the minimum number of tasks placed on this provider; only one
    /// item of a strategy may define it. `weight` is the relative share of the
    /// remaining tasks.
    pub struct CapacityProviderStrategyItem {
        capacity_provider: text String,
        weight: scalar i32,
        base: scalar i32,
    }
}

shape! {
    /// A logical grouping of tasks and container instances.
    pub struct Cluster {
        cluster_arn: text String,
        cluster_name: text String,
        /// `ACTIVE`, `PROVISIONING`, `DEPROVISIONING`, `FAILED` or `INACTIVE`.
        status: text String,
        registered_container_instances_count: scalar i32,
        running_tasks_count: scalar i32,
        pending_tasks_count: scalar i32,
        active_services_count: scalar i32,
        statistics: list KeyValuePair,
        tags: list Tag,
        settings: list ClusterSetting,
        capacity_providers: list String,
        default_capacity_provider_strategy: list CapacityProviderStrategyItem,
        attachments: list Attachment,
        attachments_status: text String,
    }
}
