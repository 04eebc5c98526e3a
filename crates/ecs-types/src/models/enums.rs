//! Enumerations shared by several resource families.
//!
//! Each enum accepts unrecognized wire values through its `Unrecognized` variant, and
//! converts from `&str` without validation. A field set from
//! `LaunchType::Fargate` and one set from `"FARGATE"` compare equal.

string_enum! {
    /// Infrastructure a task or service runs on.
    pub enum LaunchType {
        Ec2 => "EC2",
        Fargate => "FARGATE",
    }
}

string_enum! {
    /// Scheduling strategy of a service.
    pub enum SchedulingStrategy {
        /// Maintain the desired count of tasks across the cluster.
        Replica => "REPLICA",
        /// Exactly one task on each active container instance.
        Daemon => "DAEMON",
    }
}

string_enum! {
    /// Where task tags are copied from.
    pub enum PropagateTags {
        TaskDefinition => "TASK_DEFINITION",
        Service => "SERVICE",
    }
}

string_enum! {
    /// Network protocol of a port mapping or binding.
    pub enum TransportProtocol {
        Tcp => "tcp",
        Udp => "udp",
    }
}

string_enum! {
    /// Launch type compatibility of a task definition.
    pub enum Compatibility {
        Ec2 => "EC2",
        Fargate => "FARGATE",
    }
}

string_enum! {
    /// Task status filter used when listing tasks.
    pub enum DesiredStatus {
        Running => "RUNNING",
        Pending => "PENDING",
        Stopped => "STOPPED",
    }
}

string_enum! {
    /// Health of a task or container as reported by its health check.
    pub enum HealthStatus {
        Healthy => "HEALTHY",
        Unhealthy => "UNHEALTHY",
        Unknown => "UNKNOWN",
    }
}

string_enum! {
    /// Sort order of a listing.
    pub enum SortOrder {
        Asc => "ASC",
        Desc => "DESC",
    }
}

string_enum! {
    /// Kind of resource an attribute is attached to.
    pub enum TargetType {
        ContainerInstance => "container-instance",
    }
}

string_enum! {
    /// Account setting names.
    pub enum SettingName {
        ServiceLongArnFormat => "serviceLongArnFormat",
        TaskLongArnFormat => "taskLongArnFormat",
        ContainerInstanceLongArnFormat => "containerInstanceLongArnFormat",
        AwsvpcTrunking => "awsvpcTrunking",
        ContainerInsights => "containerInsights",
    }
}

string_enum! {
    /// Extra detail to include when describing clusters.
    pub enum ClusterField {
        Attachments => "ATTACHMENTS",
        Settings => "SETTINGS",
        Statistics => "STATISTICS",
        Tags => "TAGS",
    }
}

string_enum! {
    /// Extra detail to include when describing services.
    pub enum ServiceField {
        Tags => "TAGS",
    }
}

string_enum! {
    /// Extra detail to include when describing tasks.
    pub enum TaskField {
        Tags => "TAGS",
    }
}

string_enum! {
    /// Extra detail to include when describing a task definition.
    pub enum TaskDefinitionField {
        Tags => "TAGS",
    }
}

string_enum! {
    /// Extra detail to include when describing task sets.
    pub enum TaskSetField {
        Tags => "TAGS",
    }
}

string_enum! {
    /// Extra detail to include when describing container instances.
    pub enum ContainerInstanceField {
        Tags => "TAGS",
    }
}

string_enum! {
    /// Extra detail to include when describing capacity providers.
    pub enum CapacityProviderField {
        Tags => "TAGS",
    }
}
