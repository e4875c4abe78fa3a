use crate::config::ClientConfig;
use crate::error::{HttpUtilsError, Result};
use crate::url::build_url;
use reqwest::blocking::{Client, Response};
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Blocking HTTP client bound to one base URL.
///
/// Every request path is resolved with [`build_url`] and every request uses
/// the timeout given at construction. Responses release their connection
/// when dropped.
#[derive(Debug, Clone)]
pub struct HttpClient {
    http: Client,
    base_url: String,
    timeout: Duration,
}

impl HttpClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        Self::build(base_url, timeout, &ClientConfig::default().user_agent)
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::build(&config.base_url, config.timeout(), &config.user_agent)
    }

    fn build(base_url: &str, timeout: Duration, user_agent: &str) -> Result<Self> {
        if timeout.is_zero() {
            return Err(HttpUtilsError::config_error("timeout must be greater than zero"));
        }
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn url_for(&self, path: &str) -> String {
        build_url(&self.base_url, path)
    }

    pub fn get(&self, path: &str) -> Result<Response> {
        let url = self.url_for(path);
        tracing::debug!("GET {}", url);
        self.http
            .get(&url)
            .send()
            .map_err(HttpUtilsError::NetworkError)
    }

    /// POST `body` as JSON. Nothing is sent if `body` fails to serialize.
    pub fn post<B>(&self, path: &str, body: &B) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        let payload = serde_json::to_vec(body).map_err(HttpUtilsError::SerializationError)?;
        let url = self.url_for(path);
        tracing::debug!("POST {} ({} bytes)", url, payload.len());
        self.http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .map_err(HttpUtilsError::NetworkError)
    }

    /// GET `path` and decode a `200 OK` JSON body into `T`.
    pub fn fetch_json<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.url_for(path);
        let response = self.get(path)?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!("GET {} returned {}", url, status);
            return Err(HttpUtilsError::status_error(status.as_u16(), url));
        }

        let body = response.bytes().map_err(HttpUtilsError::ReadError)?;
        serde_json::from_slice(&body).map_err(|e| {
            tracing::warn!("GET {} returned undecodable JSON: {}", url, e);
            HttpUtilsError::DeserializationError(e)
        })
    }
}
