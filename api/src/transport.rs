//! The HTTP capability the client calls through: perform a GET, hand back
//! status and body. Nothing here inspects the body.

use crate::client::{ApiError, ApiResult};
use log::debug;
use reqwest::Url;
use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }
}

pub trait Transport {
    fn get(&self, url: &str, params: &[(&'static str, String)]) -> ApiResult<RawResponse>;
}

/// Blocking reqwest transport. The connection pool and the `Authorization`
/// header live for as long as the transport does.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(api_key: &str, timeout: Duration) -> ApiResult<Self> {
        let mut headers = HeaderMap::new();
        let mut key = HeaderValue::from_str(api_key)?;
        key.set_sensitive(true);
        headers.insert(AUTHORIZATION, key);

        let client = Client::builder()
            .user_agent(concat!("apex-legends-api/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(ApiError::ClientBuild)?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str, params: &[(&'static str, String)]) -> ApiResult<RawResponse> {
        let url = Url::parse_with_params(url, params.iter().map(|(k, v)| (*k, v.as_str())))
            .map_err(|e| ApiError::InvalidUrl(format!("{url}: {e}")))?;
        debug!("GET {}", url.path());

        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| ApiError::Network { url: url.to_string(), source: e })?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| ApiError::Network { url: url.to_string(), source: e })?;

        debug!("{} -> {status} ({} bytes)", url.path(), body.len());
        Ok(RawResponse { status, body })
    }
}
