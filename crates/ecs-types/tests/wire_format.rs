#![allow(unused_crate_dependencies)]
#![allow(clippy::tests_outside_test_module, reason = "integration tests live in tests/ dir")]
#![allow(clippy::unwrap_used, reason = "integration test: panics are the assertion mechanism")]

use ecs_types::{
    AgentUpdateStatus, AssignPublicIp, AwsVpcConfiguration, CapacityProvider, ContainerInstance,
    CreateServiceRequest, DescribeServicesResult, DescribeTasksResult, DeviceCgroupPermission,
    Double, LaunchType, LinuxParameters, ManagedScalingStatus, NetworkBinding,
    NetworkConfiguration, Operation, RunTaskRequest, Scale, ScaleUnit, SchedulingStrategy,
    StabilityStatus, TaskSet, UpdateTaskSetRequest, Volume,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;

/// Decodes a fixture and checks that encoding gives back the same document,
/// so every key in it maps to a field.
fn roundtrip<T: DeserializeOwned + Serialize>(fixture: serde_json::Value) -> T {
    let shape: T = serde_json::from_value(fixture.clone()).unwrap();
    assert_eq!(serde_json::to_value(&shape).unwrap(), fixture);
    shape
}

fn describe_services_body() -> serde_json::Value {
    json!({
        "services": [{
            "serviceArn": "arn:aws:ecs:us-east-1:123456789012:service/prod/web",
            "serviceName": "web",
            "status": "ACTIVE",
            "desiredCount": 3,
            "runningCount": 3,
            "pendingCount": 0,
            "launchType": "FARGATE",
            "schedulingStrategy": "REPLICA",
            "enableECSManagedTags": true,
            "createdAt": 1589321741.725,
            "deploymentController": {"type": "ECS"},
            "deployments": [{
                "id": "ecs-svc/1",
                "status": "PRIMARY",
                "desiredCount": 3,
                "createdAt": 1589321741,
                "rolloutState": "COMPLETED"
            }],
            "placementStrategy": [{"type": "spread", "field": "attribute:ecs.availability-zone"}],
            "brandNewField": {"nested": true}
        }],
        "failures": [{"arn": "arn:aws:ecs:us-east-1:123456789012:service/prod/api", "reason": "MISSING"}]
    })
}

#[test]
fn test_decode_describe_services() {
    let result: DescribeServicesResult = serde_json::from_value(describe_services_body()).unwrap();

    let services = result.services().unwrap();
    assert_eq!(services.len(), 1);
    let service = &services[0];
    assert_eq!(service.service_name(), Some("web"));
    assert_eq!(service.launch_type(), Some(&LaunchType::Fargate));
    assert_eq!(service.scheduling_strategy(), Some(&SchedulingStrategy::Replica));
    assert_eq!(service.enable_ecs_managed_tags(), Some(true));
    assert_eq!(service.created_at().unwrap().as_datetime().timestamp_subsec_millis(), 725);

    let deployment = &service.deployments().unwrap()[0];
    assert_eq!(deployment.status(), Some("PRIMARY"));
    assert_eq!(deployment.created_at().unwrap().epoch_seconds(), 1_589_321_741.0);

    let failure = &result.failures().unwrap()[0];
    assert_eq!(failure.reason(), Some("MISSING"));
}

#[test]
fn test_unknown_enum_values_are_kept() {
    let body = json!({
        "tasks": [{
            "taskArn": "arn:aws:ecs:us-east-1:123456789012:task/prod/abc",
            "launchType": "EXTERNAL",
            "healthStatus": "UNKNOWN",
            "stopCode": "ServiceSchedulerInitiated",
            "containers": [{
                "name": "web",
                "networkBindings": [{"bindIP": "0.0.0.0", "containerPort": 80, "hostPort": 32768, "protocol": "tcp"}]
            }]
        }]
    });
    let result: DescribeTasksResult = serde_json::from_value(body).unwrap();
    let task = &result.tasks().unwrap()[0];

    assert_eq!(task.launch_type(), Some(&LaunchType::Unrecognized("EXTERNAL".to_string())));
    assert_eq!(task.launch_type().unwrap().as_str(), "EXTERNAL");
    assert_eq!(task.health_status().unwrap().as_str(), "UNKNOWN");
    assert!(!task.health_status().unwrap().is_unrecognized());
    assert!(task.stop_code().unwrap().is_unrecognized());

    let binding = &task.containers().unwrap()[0].network_bindings().unwrap()[0];
    assert_eq!(binding.bind_ip(), Some("0.0.0.0"));
    assert_eq!(binding.host_port(), Some(32768));
}

#[test]
fn test_encode_special_wire_names() {
    let request = RunTaskRequest::new()
        .with_cluster("prod")
        .with_task_definition("web:3")
        .with_enable_ecs_managed_tags(true)
        .with_network_configuration(NetworkConfiguration::new().with_awsvpc_configuration(
            AwsVpcConfiguration::new()
                .with_subnets(["subnet-1", "subnet-2"])
                .with_assign_public_ip(AssignPublicIp::Disabled),
        ));

    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({
            "cluster": "prod",
            "enableECSManagedTags": true,
            "networkConfiguration": {
                "awsvpcConfiguration": {"subnets": ["subnet-1", "subnet-2"], "assignPublicIp": "DISABLED"}
            },
            "taskDefinition": "web:3"
        })
    );

    let binding = NetworkBinding::new().with_bind_ip("127.0.0.1");
    assert_eq!(serde_json::to_string(&binding).unwrap(), r#"{"bindIP":"127.0.0.1"}"#);
}

#[test]
fn test_scale_double_on_the_wire() {
    let request = UpdateTaskSetRequest::new()
        .with_task_set("ecs-svc/2")
        .with_scale(Scale::new().with_value(50.0).with_unit(ScaleUnit::Percent));

    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({"taskSet": "ecs-svc/2", "scale": {"value": 50.0, "unit": "PERCENT"}})
    );
    assert_eq!(request.scale().unwrap().value(), Some(Double(50.0)));
}

#[test]
fn test_operation_binding() {
    assert_eq!(<CreateServiceRequest as Operation>::NAME, "CreateService");
    assert_eq!(RunTaskRequest::target(), "AmazonEC2ContainerServiceV20141113.RunTask");
    assert_eq!(ecs_types::OPERATION_NAMES.len(), 48);
}

#[test]
fn test_volume_fixture() {
    let volume: Volume = roundtrip(json!({
        "name": "data",
        "host": {"sourcePath": "/srv/data"},
        "dockerVolumeConfiguration": {
            "scope": "shared",
            "autoprovision": true,
            "driver": "local",
            "driverOpts": {"type": "nfs", "device": ":/export"},
            "labels": {"team": "platform"}
        },
        "efsVolumeConfiguration": {
            "fileSystemId": "fs-1234",
            "rootDirectory": "/",
            "transitEncryption": "ENABLED",
            "transitEncryptionPort": 2049,
            "authorizationConfig": {"accessPointId": "fsap-1", "iam": "ENABLED"}
        }
    }));
    assert_eq!(volume.host().unwrap().source_path(), Some("/srv/data"));
    assert_eq!(volume.efs_volume_configuration().unwrap().transit_encryption_port(), Some(2049));
}

#[test]
fn test_linux_parameters_fixture() {
    let params: LinuxParameters = roundtrip(json!({
        "capabilities": {"add": ["NET_ADMIN"], "drop": ["MKNOD"]},
        "devices": [{"hostPath": "/dev/fuse", "containerPath": "/dev/fuse", "permissions": ["read", "write"]}],
        "initProcessEnabled": true,
        "sharedMemorySize": 64,
        "tmpfs": [{"containerPath": "/tmp", "size": 128, "mountOptions": ["noexec"]}],
        "maxSwap": 512,
        "swappiness": 60
    }));
    let device = &params.devices().unwrap()[0];
    assert_eq!(device.permissions().unwrap()[1], DeviceCgroupPermission::Write);
    assert_eq!(params.tmpfs().unwrap()[0].size(), Some(128));
}

#[test]
fn test_capacity_provider_fixture() {
    let provider: CapacityProvider = roundtrip(json!({
        "capacityProviderArn": "arn:aws:ecs:us-east-1:123456789012:capacity-provider/spot",
        "name": "spot",
        "status": "ACTIVE",
        "autoScalingGroupProvider": {
            "autoScalingGroupArn": "arn:aws:autoscaling:us-east-1:123456789012:autoScalingGroup:1",
            "managedScaling": {
                "status": "ENABLED",
                "targetCapacity": 90,
                "minimumScalingStepSize": 1,
                "maximumScalingStepSize": 100
            },
            "managedTerminationProtection": "DISABLED"
        },
        "updateStatus": "DELETE_FAILED",
        "updateStatusReason": "in use",
        "tags": [{"key": "env", "value": "prod"}]
    }));
    let scaling = provider.auto_scaling_group_provider().unwrap().managed_scaling().unwrap();
    assert_eq!(scaling.status(), Some(&ManagedScalingStatus::Enabled));
    assert_eq!(scaling.target_capacity(), Some(90));
}

#[test]
fn test_container_instance_fixture() {
    let instance: ContainerInstance = roundtrip(json!({
        "containerInstanceArn": "arn:aws:ecs:us-east-1:123456789012:container-instance/prod/abc",
        "ec2InstanceId": "i-0abc",
        "version": 12,
        "versionInfo": {"agentVersion": "1.41.0", "agentHash": "a1b2", "dockerVersion": "19.03"},
        "remainingResources": [
            {"name": "CPU", "type": "INTEGER", "integerValue": 1024},
            {"name": "PORTS", "type": "STRINGSET", "stringSetValue": ["22", "2376"]},
            {"name": "GPU_SHARE", "type": "DOUBLE", "doubleValue": 0.5}
        ],
        "status": "ACTIVE",
        "agentConnected": true,
        "runningTasksCount": 2,
        "pendingTasksCount": 0,
        "agentUpdateStatus": "UPDATED",
        "attributes": [{"name": "ecs.os-type", "value": "linux", "targetType": "container-instance"}],
        "registeredAt": 1589321741,
        "attachments": [{"id": "eni-1", "type": "ElasticNetworkInterface", "status": "ATTACHED",
                         "details": [{"name": "subnetId", "value": "subnet-1"}]}]
    }));
    assert_eq!(instance.agent_update_status(), Some(&AgentUpdateStatus::Updated));
    let resources = instance.remaining_resources().unwrap();
    assert_eq!(resources[1].kind(), Some("STRINGSET"));
    assert_eq!(resources[2].double_value(), Some(Double(0.5)));
}

#[test]
fn test_task_set_fixture() {
    let task_set: TaskSet = roundtrip(json!({
        "id": "ecs-svc/2",
        "taskSetArn": "arn:aws:ecs:us-east-1:123456789012:task-set/prod/web/ecs-svc/2",
        "status": "PRIMARY",
        "taskDefinition": "web:4",
        "computedDesiredCount": 2,
        "createdAt": 1589321741.5,
        "launchType": "FARGATE",
        "networkConfiguration": {"awsvpcConfiguration": {"subnets": ["subnet-1"], "securityGroups": ["sg-1"]}},
        "loadBalancers": [{"targetGroupArn": "arn:aws:elasticloadbalancing:tg/web", "containerName": "web", "containerPort": 80}],
        "scale": {"value": 100.0, "unit": "PERCENT"},
        "stabilityStatus": "STEADY_STATE",
        "stabilityStatusAt": 1589321800
    }));
    assert_eq!(task_set.stability_status(), Some(&StabilityStatus::SteadyState));
    assert_eq!(task_set.scale().unwrap().value(), Some(Double(100.0)));
    assert_eq!(task_set.created_at().unwrap().epoch_seconds(), 1_589_321_741.5);
}

#[test]
fn test_non_finite_scale_is_rejected() {
    let scale = Scale::new().with_value(f64::NAN).with_unit(ScaleUnit::Percent);
    assert!(serde_json::to_string(&scale).is_err());
    assert!(scale.to_string().starts_with("Scale"));

    let request = UpdateTaskSetRequest::new().with_scale(scale);
    assert!(serde_json::to_vec(&request).is_err());
}
