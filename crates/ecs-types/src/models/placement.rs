//! Task placement constraints and strategies.

string_enum! {
    pub enum PlacementConstraintType {
        /// Place each task on a different container instance.
        DistinctInstance => "distinctInstance",
        /// Place tasks on instances matching a cluster query expression.
        MemberOf => "memberOf",
    }
}

string_enum! {
    pub enum PlacementStrategyType {
        Random => "random",
        Spread => "spread",
        Binpack => "binpack",
    }
}

shape! {
    /// A rule evaluated during task placement.
    ///
    /// `expression` is a cluster query language expression and is not
    /// allowed with `distinctInstance`.
    pub struct PlacementConstraint {
        #[serde(rename = "type")]
        kind: nested PlacementConstraintType,
        expression: text String,
    }
}

shape! {
    /// A strategy for picking container instances during placement.
    pub struct PlacementStrategy {
        #[serde(rename = "type")]
        kind: nested PlacementStrategyType,
        /// `instanceId`, `host`, an attribute such as
        /// `attribute:ecs.availability-zone` for `spread`; `cpu` or `memory`
        /// for `binpack`. Unused for `random`.
        field: text String,
    }
}
