use bytes::Bytes;
use ecs_types::protocol::*;
use ecs_types::ServiceError;
use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::transport::{ServiceCall, Transport};
use crate::types::{ClientConfig, ResponseMetadata};

/// Typed access to every ECS operation over a caller-supplied transport.
pub struct EcsClient<T> {
    transport: T,
    config: ClientConfig,
    endpoint: String,
}

impl<T: Transport> EcsClient<T> {
    pub fn new(config: ClientConfig, transport: T) -> Result<Self, ClientError> {
        let endpoint = config.resolve_endpoint()?;
        Ok(Self { transport, config, endpoint })
    }

    /// Builds a client from `AWS_REGION`/`AWS_DEFAULT_REGION` and
    /// `ECS_ENDPOINT_URL`.
    pub fn from_env(transport: T) -> Result<Self, ClientError> {
        let client = Self::new(ClientConfig::from_env(), transport)?;
        tracing::info!(
            region = %client.config.region,
            endpoint = %client.endpoint,
            "ECS client configured from environment"
        );
        Ok(client)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Sends one request and decodes the matching result.
    ///
    /// Non-2xx responses become [`ClientError::Service`]. Nothing is retried.
    pub async fn send<O: Operation>(&self, request: &O) -> Result<O::Output, ClientError> {
        self.send_with_metadata(request).await.map(|(output, _)| output)
    }

    /// Like [`send`](Self::send), also returning the response's request id.
    pub async fn send_with_metadata<O: Operation>(
        &self,
        request: &O,
    ) -> Result<(O::Output, ResponseMetadata), ClientError> {
        let body = serde_json::to_vec(request)?;
        let call = ServiceCall {
            endpoint: self.endpoint.clone(),
            target: O::target(),
            user_agent: self.config.user_agent.clone(),
            body: Bytes::from(body),
        };

        tracing::debug!(operation = O::NAME, endpoint = %self.endpoint, "Dispatching ECS operation");
        let response = self.transport.send(call).await?;

        if !response.is_success() {
            let error =
                ServiceError::from_response(response.status, response.request_id, &response.body);
            tracing::warn!(
                operation = O::NAME,
                status = error.status,
                code = %error.kind,
                request_id = error.request_id.as_deref().unwrap_or("-"),
                "ECS returned an error"
            );
            return Err(error.into());
        }

        tracing::debug!(
            operation = O::NAME,
            status = response.status,
            request_id = response.request_id.as_deref().unwrap_or("-"),
            "ECS operation succeeded"
        );
        let output = decode_result::<O::Output>(O::NAME, &response.body)?;
        Ok((output, ResponseMetadata { request_id: response.request_id }))
    }
}

fn decode_result<R: DeserializeOwned>(operation: &str, body: &[u8]) -> Result<R, ClientError> {
    let body = if body.iter().all(u8::is_ascii_whitespace) { b"{}".as_slice() } else { body };
    serde_json::from_slice(body)
        .map_err(|e| ClientError::InvalidResponse(format!("{} result: {}", operation, e)))
}

macro_rules! operation_methods {
    ($($op:ident),* $(,)?) => {
        ::paste::paste! {
            impl<T: Transport> EcsClient<T> {
                $(
                    #[doc = concat!("Calls `", stringify!($op), "`.")]
                    pub async fn [<$op:snake>](
                        &self,
                        request: &[<$op Request>],
                    ) -> Result<[<$op Result>], ClientError> {
                        self.send(request).await
                    }
                )*
            }
        }
    };
}

ecs_types::for_each_operation!(operation_methods);
