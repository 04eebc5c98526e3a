#![allow(unused_crate_dependencies)]
#![allow(clippy::tests_outside_test_module, reason = "integration tests live in tests/ dir")]
#![allow(clippy::unwrap_used, reason = "integration test: panics are the assertion mechanism")]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ecs_client::{ClientConfig, ClientError, EcsClient, ServiceCall, ServiceResponse, Transport};
use ecs_types::{
    CapacityProviderStrategyItem, DescribeClustersRequest, ListServicesRequest, LaunchType,
    PutClusterCapacityProvidersRequest, Scale, ServiceErrorKind, StopTaskRequest, Tag,
    TagResourceRequest, UpdateContainerAgentRequest, UpdateTaskSetRequest,
};
use serde_json::json;

/// Records every call and answers from a queue of canned responses.
#[derive(Default)]
struct RecordingTransport {
    calls: Mutex<Vec<ServiceCall>>,
    responses: Mutex<VecDeque<Result<ServiceResponse, ClientError>>>,
}

impl RecordingTransport {
    fn respond(&self, response: ServiceResponse) {
        self.responses.lock().unwrap().push_back(Ok(response));
    }

    fn fail(&self, error: ClientError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    fn calls(&self) -> Vec<ServiceCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, call: ServiceCall) -> Result<ServiceResponse, ClientError> {
        self.calls.lock().unwrap().push(call);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::Transport("no canned response".to_string())))
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().with_env_filter("debug").try_init();
}

fn setup() -> (Arc<RecordingTransport>, EcsClient<Arc<RecordingTransport>>) {
    init_tracing();
    let transport = Arc::new(RecordingTransport::default());
    let client = EcsClient::new(ClientConfig::default(), Arc::clone(&transport)).unwrap();
    (transport, client)
}

fn json_response(status: u16, body: serde_json::Value) -> ServiceResponse {
    ServiceResponse::new(status, serde_json::to_vec(&body).unwrap())
}

#[tokio::test]
async fn test_list_services_dispatch() {
    let (transport, client) = setup();
    transport.respond(json_response(
        200,
        json!({"serviceArns": ["arn:aws:ecs:us-east-1:123456789012:service/prod/web"], "nextToken": "t2"}),
    ));

    let request = ListServicesRequest::new()
        .with_cluster("prod")
        .with_launch_type(LaunchType::Fargate)
        .with_max_results(10);
    let result = client.list_services(&request).await.unwrap();

    assert_eq!(result.service_arns().unwrap().len(), 1);
    assert_eq!(result.next_token(), Some("t2"));

    let calls = transport.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].endpoint, "https://ecs.us-east-1.amazonaws.com");
    assert_eq!(calls[0].target, "AmazonEC2ContainerServiceV20141113.ListServices");
    let sent: serde_json::Value = serde_json::from_slice(&calls[0].body).unwrap();
    assert_eq!(sent, json!({"cluster": "prod", "maxResults": 10, "launchType": "FARGATE"}));
}

#[tokio::test]
async fn test_success_request_id_is_returned() {
    let (transport, client) = setup();
    transport.respond(
        json_response(200, json!({"clusters": [{"clusterName": "prod"}]})).with_request_id("9f1c-req"),
    );
    transport.respond(json_response(200, json!({"clusters": []})));

    let request = DescribeClustersRequest::new().with_clusters(["prod"]);
    let (result, metadata) = client.send_with_metadata(&request).await.unwrap();
    assert_eq!(result.clusters().unwrap()[0].cluster_name(), Some("prod"));
    assert_eq!(metadata.request_id(), Some("9f1c-req"));

    let (_, metadata) = client.send_with_metadata(&request).await.unwrap();
    assert_eq!(metadata.request_id(), None);
}

#[tokio::test]
async fn test_non_finite_double_fails_before_dispatch() {
    let (transport, client) = setup();

    let request = UpdateTaskSetRequest::new()
        .with_task_set("ecs-svc/2")
        .with_scale(Scale::new().with_value(f64::NAN));
    let err = client.update_task_set(&request).await.unwrap_err();

    assert!(matches!(err, ClientError::Serialization(_)));
    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn test_put_cluster_capacity_providers() {
    let (transport, client) = setup();
    transport.respond(json_response(
        200,
        json!({"cluster": {"clusterName": "prod", "capacityProviders": ["FARGATE", "FARGATE_SPOT"]}}),
    ));

    let request = PutClusterCapacityProvidersRequest::new()
        .with_cluster("prod")
        .with_capacity_providers(["FARGATE", "FARGATE_SPOT"])
        .with_default_capacity_provider_strategy([
            CapacityProviderStrategyItem::new().with_capacity_provider("FARGATE").with_base(1),
            CapacityProviderStrategyItem::new().with_capacity_provider("FARGATE_SPOT").with_weight(3),
        ]);
    let result = client.put_cluster_capacity_providers(&request).await.unwrap();

    let cluster = result.cluster().unwrap();
    assert_eq!(cluster.cluster_name(), Some("prod"));
    assert_eq!(cluster.capacity_providers().unwrap(), ["FARGATE", "FARGATE_SPOT"]);
}

#[tokio::test]
async fn test_empty_success_body() {
    let (transport, client) = setup();
    transport.respond(ServiceResponse::new(200, ""));

    let request = TagResourceRequest::new()
        .with_resource_arn("arn:aws:ecs:us-east-1:123456789012:cluster/prod")
        .with_tags([Tag::new().with_key("team").with_value("platform")]);
    client.tag_resource(&request).await.unwrap();

    let sent: serde_json::Value = serde_json::from_slice(&transport.calls()[0].body).unwrap();
    assert_eq!(
        sent,
        json!({
            "resourceArn": "arn:aws:ecs:us-east-1:123456789012:cluster/prod",
            "tags": [{"key": "team", "value": "platform"}]
        })
    );
}

#[tokio::test]
async fn test_service_error_passed_through() {
    let (transport, client) = setup();
    transport.respond(
        json_response(
            400,
            json!({"__type": "UpdateInProgressException", "message": "Agent update already in progress"}),
        )
        .with_request_id("4b8a-req"),
    );

    let request = UpdateContainerAgentRequest::new().with_container_instance("i-0abc");
    let err = client.update_container_agent(&request).await.unwrap_err();

    let service = err.service_error().unwrap();
    assert_eq!(service.kind, ServiceErrorKind::UpdateInProgress);
    assert_eq!(service.message(), Some("Agent update already in progress"));
    assert_eq!(service.request_id.as_deref(), Some("4b8a-req"));
    assert_eq!(service.status, 400);
    assert_eq!(transport.calls().len(), 1);
}

#[tokio::test]
async fn test_server_fault_is_not_retried() {
    let (transport, client) = setup();
    transport.respond(json_response(500, json!({"__type": "ServerException", "message": "boom"})));

    let err = client.stop_task(&StopTaskRequest::new().with_task("abc")).await.unwrap_err();
    assert!(err.service_error().unwrap().is_server_fault());
    assert_eq!(transport.calls().len(), 1);
}

#[tokio::test]
async fn test_transport_error_passed_through() {
    let (transport, client) = setup();
    transport.fail(ClientError::Transport("connection reset".to_string()));

    let err = client.describe_clusters(&DescribeClustersRequest::new()).await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(message) if message == "connection reset"));
}

#[tokio::test]
async fn test_malformed_success_body() {
    let (transport, client) = setup();
    transport.respond(ServiceResponse::new(200, "<html>"));

    let err = client.describe_clusters(&DescribeClustersRequest::new()).await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_endpoint_override_and_invalid_config() {
    init_tracing();
    let transport = Arc::new(RecordingTransport::default());
    transport.respond(json_response(200, json!({"clusterArns": []})));

    let config = ClientConfig::default().with_endpoint("http://localhost:4566");
    let client = EcsClient::new(config, Arc::clone(&transport)).unwrap();
    assert_eq!(client.endpoint(), "http://localhost:4566");

    let result = client.list_clusters(&Default::default()).await.unwrap();
    assert_eq!(result.cluster_arns(), Some(&[][..]));
    assert_eq!(transport.calls()[0].endpoint, "http://localhost:4566");

    let bad = EcsClient::new(ClientConfig::default().with_region(""), transport);
    assert!(matches!(bad, Err(ClientError::Config(_))));
}
