use std::time::Duration;

use anyhow::{bail, Context, Result};
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;

use super::error::FetchError;
use super::models::{LogResponse, PingResponse, StatusSnapshot, UptimeSample};
use super::DeviceApi;

/// HTTP client for a single controller.
#[derive(Debug, Clone)]
pub struct DeviceClient {
    base_url: String,
    http: Client,
}

impl DeviceClient {
    /// `base_url` is the controller's root, e.g. `http://192.168.4.1`.
    /// Every request is bounded by `timeout`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let parsed =
            Url::parse(base_url).with_context(|| format!("invalid device URL '{base_url}'"))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            bail!("device URL must be http or https, got '{}'", parsed.scheme());
        }

        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Manual connectivity check: `GET /ping`.
    pub async fn ping(&self) -> Result<PingResponse, FetchError> {
        self.get_json("/ping").await
    }

    /// Fire one of the controller's manual override endpoints,
    /// `POST /test/<action>`. The response body is ignored.
    pub async fn trigger(&self, action: &str) -> Result<(), FetchError> {
        let path = format!("/test/{}", action.trim_matches('/'));
        let response = self.http.post(self.url(&path)).send().await?;
        read_body(response).await.map(|_| ())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let response = self.http.get(self.url(path)).send().await?;
        let body = read_body(response).await?;
        decode(&body)
    }
}

impl DeviceApi for DeviceClient {
    async fn status(&self) -> Result<StatusSnapshot, FetchError> {
        self.get_json("/status").await
    }

    async fn uptime(&self) -> Result<UptimeSample, FetchError> {
        self.get_json("/uptime").await
    }

    async fn log(&self) -> Result<LogResponse, FetchError> {
        self.get_json("/log").await
    }

    async fn push_clock(&self, current_minutes: u32) -> Result<(), FetchError> {
        let response = self
            .http
            .post(self.url("/config/update"))
            .form(&[("current_minutes", current_minutes)])
            .send()
            .await?;
        read_body(response).await.map(|_| ())
    }
}

/// Returns the body text of a 2xx response, or `HttpStatus` otherwise.
async fn read_body(response: Response) -> Result<String, FetchError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(FetchError::HttpStatus {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response.text().await?)
}

/// Decoding from text rather than `Response::json` keeps a malformed body
/// distinct from a transport failure.
fn decode<T: DeserializeOwned>(body: &str) -> Result<T, FetchError> {
    Ok(serde_json::from_str(body)?)
}
