//! Cluster lifecycle and settings.

use crate::models::{
    CapacityProviderStrategyItem, Cluster, ClusterField, ClusterSetting, Failure, Tag,
};

shape! {
    pub struct CreateClusterRequest {
        /// Up to 255 letters, numbers, hyphens and underscores. `default`
        /// when absent.
        cluster_name: text String,
        tags: list Tag,
        settings: list ClusterSetting,
        capacity_providers: list String,
        default_capacity_provider_strategy: list CapacityProviderStrategyItem,
    }
}

shape! {
    pub struct CreateClusterResult {
        cluster: nested Cluster,
    }
}

shape! {
    /// Deletes an inactive cluster. Container instances must be deregistered
    /// first.
    pub struct DeleteClusterRequest {
        cluster: text String,
    }
}

shape! {
    pub struct DeleteClusterResult {
        cluster: nested Cluster,
    }
}

shape! {
    pub struct DescribeClustersRequest {
        /// Up to 100 cluster names or ARNs. The default cluster when absent.
        clusters: list String,
        include: list ClusterField,
    }
}

shape! {
    pub struct DescribeClustersResult {
        clusters: list Cluster,
        failures: list Failure,
    }
}

shape! {
    pub struct ListClustersRequest {
        next_token: text String,
        /// 1 to 100. The service returns up to 100 when absent.
        max_results: scalar i32,
    }
}

shape! {
    pub struct ListClustersResult {
        cluster_arns: list String,
        next_token: text String,
    }
}

shape! {
    /// Replaces the full set of capacity providers and the default strategy
    /// of a cluster.
    ///
    /// Providers already in use by a service's strategy must stay in the
    /// list. An empty list removes every provider from the cluster.
    pub struct PutClusterCapacityProvidersRequest {
        cluster: text String,
        capacity_providers: list String,
        default_capacity_provider_strategy: list CapacityProviderStrategyItem,
    }
}

shape! {
    pub struct PutClusterCapacityProvidersResult {
        cluster: nested Cluster,
    }
}

shape! {
    pub struct UpdateClusterSettingsRequest {
        cluster: text String,
        settings: list ClusterSetting,
    }
}

shape! {
    pub struct UpdateClusterSettingsResult {
        cluster: nested Cluster,
    }
}
