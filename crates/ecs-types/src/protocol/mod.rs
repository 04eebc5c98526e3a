//! Request and result shapes of every ECS operation, and the binding between
//! them.

mod account_setting;
mod agent;
mod attribute;
mod capacity_provider;
mod cluster;
mod container_instance;
mod service;
mod tagging;
mod task;
mod task_definition;
mod task_set;

pub use account_setting::*;
pub use agent::*;
pub use attribute::*;
pub use capacity_provider::*;
pub use cluster::*;
pub use container_instance::*;
pub use service::*;
pub use tagging::*;
pub use task::*;
pub use task_definition::*;
pub use task_set::*;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// JSON 1.1 target prefix of the 2014-11-13 service API.
pub const TARGET_PREFIX: &str = "AmazonEC2ContainerServiceV20141113";

/// Binds a request shape to its operation name and result shape.
pub trait Operation: Serialize {
    /// Operation name as it appears in the `X-Amz-Target` header.
    const NAME: &'static str;

    /// Result shape decoded from a successful response.
    type Output: DeserializeOwned;

    /// Full `X-Amz-Target` header value.
    fn target() -> String {
        format!("{}.{}", TARGET_PREFIX, Self::NAME)
    }
}

/// Invokes `$callback! { Op, Op, ... }` with every operation name.
///
/// Each name `Op` has an `OpRequest` and an `OpResult` shape in
/// [`protocol`](crate::protocol).
#[macro_export]
macro_rules! for_each_operation {
    ($callback:ident) => {
        $callback! {
            CreateCapacityProvider,
            CreateCluster,
            CreateService,
            CreateTaskSet,
            DeleteAccountSetting,
            DeleteAttributes,
            DeleteCluster,
            DeleteService,
            DeleteTaskSet,
            DeregisterContainerInstance,
            DeregisterTaskDefinition,
            DescribeCapacityProviders,
            DescribeClusters,
            DescribeContainerInstances,
            DescribeServices,
            DescribeTaskDefinition,
            DescribeTaskSets,
            DescribeTasks,
            DiscoverPollEndpoint,
            ListAccountSettings,
            ListAttributes,
            ListClusters,
            ListContainerInstances,
            ListServices,
            ListTagsForResource,
            ListTaskDefinitionFamilies,
            ListTaskDefinitions,
            ListTasks,
            PutAccountSetting,
            PutAccountSettingDefault,
            PutAttributes,
            PutClusterCapacityProviders,
            RegisterContainerInstance,
            RegisterTaskDefinition,
            RunTask,
            StartTask,
            StopTask,
            SubmitAttachmentStateChanges,
            SubmitContainerStateChange,
            SubmitTaskStateChange,
            TagResource,
            UntagResource,
            UpdateClusterSettings,
            UpdateContainerAgent,
            UpdateContainerInstancesState,
            UpdateService,
            UpdateServicePrimaryTaskSet,
            UpdateTaskSet,
        }
    };
}

macro_rules! bind_operations {
    ($($op:ident),* $(,)?) => {
        ::paste::paste! {
            $(
                impl Operation for [<$op Request>] {
                    const NAME: &'static str = stringify!($op);
                    type Output = [<$op Result>];
                }
            )*
        }

        /// Every operation name, alphabetically.
        pub const OPERATION_NAMES: &[&str] = &[$(stringify!($op)),*];
    };
}

crate::for_each_operation!(bind_operations);
