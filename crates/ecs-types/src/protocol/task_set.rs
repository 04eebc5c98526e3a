//! Task sets of services with an external or CodeDeploy controller.

use crate::models::{
    CapacityProviderStrategyItem, Failure, LaunchType, LoadBalancer, NetworkConfiguration, Scale,
    ServiceRegistry, Tag, TaskSet, TaskSetField,
};

shape! {
    pub struct CreateTaskSetRequest {
        service: text String,
        cluster: text String,
        external_id: text String,
        task_definition: text String,
        network_configuration: nested NetworkConfiguration,
        load_balancers: list LoadBalancer,
        service_registries: list ServiceRegistry,
        launch_type: nested LaunchType,
        capacity_provider_strategy: list CapacityProviderStrategyItem,
        platform_version: text String,
        scale: nested Scale,
        client_token: text String,
        tags: list Tag,
    }
}

shape! {
    pub struct CreateTaskSetResult {
        task_set: nested TaskSet,
    }
}

shape! {
    pub struct DeleteTaskSetRequest {
        cluster: text String,
        service: text String,
        task_set: text String,
        /// Delete even if the task set has not been scaled down to zero.
        force: scalar bool,
    }
}

shape! {
    pub struct DeleteTaskSetResult {
        task_set: nested TaskSet,
    }
}

shape! {
    pub struct DescribeTaskSetsRequest {
        cluster: text String,
        service: text String,
        task_sets: list String,
        include: list TaskSetField,
    }
}

shape! {
    pub struct DescribeTaskSetsResult {
        task_sets: list TaskSet,
        failures: list Failure,
    }
}

shape! {
    pub struct UpdateTaskSetRequest {
        cluster: text String,
        service: text String,
        task_set: text String,
        scale: nested Scale,
    }
}

shape! {
    pub struct UpdateTaskSetResult {
        task_set: nested TaskSet,
    }
}
