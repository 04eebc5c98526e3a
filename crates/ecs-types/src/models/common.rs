//! Small fragments reused across resource families.

use super::enums::{SettingName, TargetType};

shape! {
    /// A name/value pair, used for environment variables, statistics and
    /// attachment details.
    pub struct KeyValuePair {
        name: text String,
        value: text String,
    }
}

shape! {
    /// Metadata applied to a resource.
    ///
    /// Keys are up to 128 characters and values up to 256; the service
    /// enforces both limits.
    pub struct Tag {
        key: text String,
        value: text String,
    }
}

shape! {
    /// An attribute attached to a container instance, used by placement
    /// constraints.
    pub struct Attribute {
        name: text String,
        value: text String,
        target_type: nested TargetType,
        /// Short name or full ARN of the target.
        target_id: text String,
    }
}

shape! {
    /// An elastic network interface or other resource attached to a task or
    /// cluster.
    pub struct Attachment {
        id: text String,
        #[serde(rename = "type")]
        kind: text String,
        status: text String,
        details: list KeyValuePair,
    }
}

shape! {
    /// Attachment status reported by the container agent.
    pub struct AttachmentStateChange {
        attachment_arn: text String,
        status: text String,
    }
}

shape! {
    /// A per-resource failure returned alongside a partially successful
    /// describe or run call.
    pub struct Failure {
        arn: text String,
        reason: text String,
        detail: text String,
    }
}

shape! {
    /// An account setting and the principal it applies to.
    pub struct Setting {
        name: nested SettingName,
        value: text String,
        principal_arn: text String,
    }
}
