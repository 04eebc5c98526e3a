use crate::models::{
    AutoScalingGroupProvider, CapacityProvider, CapacityProviderField, Failure, Tag,
};

shape! {
    pub struct CreateCapacityProviderRequest {
        /// Must not start with `aws`, `ecs` or `fargate`.
        name: text String,
        auto_scaling_group_provider: nested AutoScalingGroupProvider,
        tags: list Tag,
    }
}

shape! {
    pub struct CreateCapacityProviderResult {
        capacity_provider: nested CapacityProvider,
    }
}

shape! {
    /// Describes capacity providers by name or ARN. All providers when
    /// `capacity_providers` is absent.
    pub struct DescribeCapacityProvidersRequest {
        capacity_providers: list String,
        include: list CapacityProviderField,
        max_results: scalar i32,
        next_token: text String,
    }
}

shape! {
    pub struct DescribeCapacityProvidersResult {
        capacity_providers: list CapacityProvider,
        failures: list Failure,
        next_token: text String,
    }
}
