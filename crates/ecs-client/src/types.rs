use url::Url;

use crate::error::ClientError;

/// Region used when none is configured.
pub const DEFAULT_REGION: &str = "us-east-1";

const REGION_VARS: [&str; 2] = ["AWS_REGION", "AWS_DEFAULT_REGION"];
const ENDPOINT_VAR: &str = "ECS_ENDPOINT_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub region: String,
    /// Overrides the regional endpoint, for example a local emulator.
    pub endpoint: Option<String>,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            endpoint: None,
            user_agent: format!("ecs-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Reads `AWS_REGION`, then `AWS_DEFAULT_REGION`, and `ECS_ENDPOINT_URL`.
    /// Unset or empty variables keep the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let present = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();
        if let Some(region) = REGION_VARS.iter().find_map(|&name| present(name)) {
            config.region = region.trim().to_string();
        }
        config.endpoint = present(ENDPOINT_VAR).map(|value| value.trim().to_string());
        config
    }

    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// The base URL calls are sent to.
    ///
    /// An override must be an absolute `http` or `https` URL. Otherwise the
    /// regional endpoint is derived from the region, on `amazonaws.com.cn`
    /// for the China regions.
    pub fn resolve_endpoint(&self) -> Result<String, ClientError> {
        if let Some(endpoint) = &self.endpoint {
            let url = Url::parse(endpoint)
                .map_err(|e| ClientError::Config(format!("invalid endpoint {}: {}", endpoint, e)))?;
            if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
                return Err(ClientError::Config(format!(
                    "endpoint must be an http(s) URL with a host: {}",
                    endpoint
                )));
            }
            return Ok(url.as_str().trim_end_matches('/').to_string());
        }

        let region = self.region.trim();
        let valid = !region.is_empty()
            && region.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if !valid {
            return Err(ClientError::Config(format!("invalid region: {:?}", self.region)));
        }

        let domain = if region.starts_with("cn-") { "amazonaws.com.cn" } else { "amazonaws.com" };
        Ok(format!("https://ecs.{}.{}", region, domain))
    }
}

/// Details of a successful call that are not part of the result shape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseMetadata {
    /// `x-amzn-RequestId` of the response, as reported by the transport.
    pub request_id: Option<String>,
}

impl ResponseMetadata {
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_default_endpoint() {
        let config = ClientConfig::default();
        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.resolve_endpoint().unwrap(), "https://ecs.us-east-1.amazonaws.com");
    }

    #[test]
    fn test_china_region_endpoint() {
        let config = ClientConfig::default().with_region("cn-north-1");
        assert_eq!(config.resolve_endpoint().unwrap(), "https://ecs.cn-north-1.amazonaws.com.cn");
    }

    #[test]
    fn test_endpoint_override() {
        let config = ClientConfig::default().with_endpoint("http://localhost:4566/");
        assert_eq!(config.resolve_endpoint().unwrap(), "http://localhost:4566");

        let bad = ClientConfig::default().with_endpoint("not a url");
        assert!(matches!(bad.resolve_endpoint(), Err(ClientError::Config(_))));

        let ftp = ClientConfig::default().with_endpoint("ftp://files.example.com");
        assert!(matches!(ftp.resolve_endpoint(), Err(ClientError::Config(_))));
    }

    #[test]
    fn test_invalid_region() {
        let config = ClientConfig::default().with_region("");
        assert!(matches!(config.resolve_endpoint(), Err(ClientError::Config(_))));
        let config = ClientConfig::default().with_region("us east");
        assert!(config.resolve_endpoint().is_err());
    }

    #[test]
    fn test_region_precedence() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("AWS_REGION", "eu-west-1"),
            ("AWS_DEFAULT_REGION", "ap-south-1"),
        ]));
        assert_eq!(config.region, "eu-west-1");

        let config = ClientConfig::from_lookup(lookup_from(&[
            ("AWS_REGION", " "),
            ("AWS_DEFAULT_REGION", "ap-south-1"),
            ("ECS_ENDPOINT_URL", "http://127.0.0.1:8080"),
        ]));
        assert_eq!(config.region, "ap-south-1");
        assert_eq!(config.endpoint.as_deref(), Some("http://127.0.0.1:8080"));

        let config = ClientConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, ClientConfig::default());
    }
}
