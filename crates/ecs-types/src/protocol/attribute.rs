//! Custom attributes on cluster resources.

use crate::models::{Attribute, TargetType};

shape! {
    pub struct DeleteAttributesRequest {
        cluster: text String,
        /// Attributes to remove. `target_id` is required for each.
        attributes: list Attribute,
    }
}

shape! {
    pub struct DeleteAttributesResult {
        attributes: list Attribute,
    }
}

shape! {
    pub struct ListAttributesRequest {
        cluster: text String,
        target_type: nested TargetType,
        attribute_name: text String,
        attribute_value: text String,
        next_token: text String,
        max_results: scalar i32,
    }
}

shape! {
    pub struct ListAttributesResult {
        attributes: list Attribute,
        next_token: text String,
    }
}

shape! {
    /// Creates or updates attributes. Up to 10 per call.
    pub struct PutAttributesRequest {
        cluster: text String,
        attributes: list Attribute,
    }
}

shape! {
    pub struct PutAttributesResult {
        attributes: list Attribute,
    }
}
