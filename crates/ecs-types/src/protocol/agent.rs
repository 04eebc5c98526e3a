//! Calls made by the container agent rather than by users.

use crate::models::{AttachmentStateChange, ContainerStateChange, NetworkBinding};
use crate::shape::Timestamp;

shape! {
    pub struct DiscoverPollEndpointRequest {
        container_instance: text String,
        cluster: text String,
    }
}

shape! {
    pub struct DiscoverPollEndpointResult {
        endpoint: text String,
        telemetry_endpoint: text String,
    }
}

shape! {
    pub struct SubmitAttachmentStateChangesRequest {
        cluster: text String,
        attachments: list AttachmentStateChange,
    }
}

shape! {
    pub struct SubmitAttachmentStateChangesResult {
        acknowledgment: text String,
    }
}

shape! {
    pub struct SubmitContainerStateChangeRequest {
        cluster: text String,
        task: text String,
        container_name: text String,
        runtime_id: text String,
        status: text String,
        exit_code: scalar i32,
        reason: text String,
        network_bindings: list NetworkBinding,
    }
}

shape! {
    pub struct SubmitContainerStateChangeResult {
        acknowledgment: text String,
    }
}

shape! {
    pub struct SubmitTaskStateChangeRequest {
        cluster: text String,
        task: text String,
        status: text String,
        reason: text String,
        containers: list ContainerStateChange,
        attachments: list AttachmentStateChange,
        pull_started_at: scalar Timestamp,
        pull_stopped_at: scalar Timestamp,
        execution_stopped_at: scalar Timestamp,
    }
}

shape! {
    pub struct SubmitTaskStateChangeResult {
        acknowledgment: text String,
    }
}
