//! Capacity providers backed by Auto Scaling groups.

use super::common::Tag;

string_enum! {
    pub enum CapacityProviderStatus {
        Active => "ACTIVE",
        Inactive => "INACTIVE",
    }
}

string_enum! {
    pub enum CapacityProviderUpdateStatus {
        DeleteInProgress => "DELETE_IN_PROGRESS",
        DeleteComplete => "DELETE_COMPLETE",
        DeleteFailed => "DELETE_FAILED",
    }
}

string_enum! {
    pub enum ManagedScalingStatus {
        Enabled => "ENABLED",
        Disabled => "DISABLED",
    }
}

string_enum! {
    pub enum ManagedTerminationProtection {
        Enabled => "ENABLED",
        Disabled => "DISABLED",
    }
}

shape! {
    /// Managed scaling settings of an Auto Scaling group provider.
    pub struct ManagedScaling {
        status: nested ManagedScalingStatus,
        /// Target utilization percentage, 1 to 100.
        target_capacity: scalar i32,
        minimum_scaling_step_size: scalar i32,
        maximum_scaling_step_size: scalar i32,
    }
}

shape! {
    pub struct AutoScalingGroupProvider {
        auto_scaling_group_arn: text String,
        managed_scaling: nested ManagedScaling,
        managed_termination_protection: nested ManagedTerminationProtection,
    }
}

shape! {
    /// A pool of compute capacity that tasks can be placed on.
    pub struct CapacityProvider {
        capacity_provider_arn: text String,
        name: text String,
        status: nested CapacityProviderStatus,
        auto_scaling_group_provider: nested AutoScalingGroupProvider,
        update_status: nested CapacityProviderUpdateStatus,
        update_status_reason: text String,
        tags: list Tag,
    }
}
