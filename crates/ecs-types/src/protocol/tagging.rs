use crate::models::Tag;

shape! {
    pub struct ListTagsForResourceRequest {
        resource_arn: text String,
    }
}

shape! {
    pub struct ListTagsForResourceResult {
        tags: list Tag,
    }
}

shape! {
    /// Adds tags to a resource. Existing tags with the same key are
    /// overwritten.
    pub struct TagResourceRequest {
        resource_arn: text String,
        tags: list Tag,
    }
}

shape! {
    pub struct TagResourceResult {}
}

shape! {
    pub struct UntagResourceRequest {
        resource_arn: text String,
        tag_keys: list String,
    }
}

shape! {
    pub struct UntagResourceResult {}
}
