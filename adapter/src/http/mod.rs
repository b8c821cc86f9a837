use serde::de::DeserializeOwned;
use shared::{
    config::UpstreamConfig,
    error::{AppError, AppResult},
};

pub mod model;

/// Shared HTTP client for the upstream data sources.
#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    booking_list_url: String,
    consumption_master_url: String,
}

impl HttpClient {
    pub fn new(
        client: reqwest::Client,
        booking_list_url: impl Into<String>,
        consumption_master_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            booking_list_url: booking_list_url.into(),
            consumption_master_url: consumption_master_url.into(),
        }
    }

    pub fn booking_list_url(&self) -> &str {
        &self.booking_list_url
    }

    pub fn consumption_master_url(&self) -> &str {
        &self.consumption_master_url
    }

    /// GETs `url` and decodes the body as `T`. Non-2xx answers are errors.
    pub async fn get_json<T: DeserializeOwned>(&self, source_name: &str, url: &str) -> AppResult<T> {
        let res = self
            .client
            .get(url)
            .send()
            .await
            .map_err(AppError::UpstreamRequestError)?;

        let status = res.status();
        if !status.is_success() {
            return Err(AppError::UpstreamStatusError {
                source_name: source_name.into(),
                status: status.as_u16(),
            });
        }

        let body = res.bytes().await.map_err(AppError::UpstreamRequestError)?;
        tracing::debug!(source_name, bytes = body.len(), "fetched upstream payload");

        serde_json::from_slice(&body).map_err(|e| AppError::UpstreamDecodeError {
            source_name: source_name.into(),
            message: e.to_string(),
        })
    }
}

pub fn connect_upstream_with(cfg: &UpstreamConfig) -> AppResult<HttpClient> {
    let client = reqwest::Client::builder()
        .timeout(cfg.timeout)
        .build()
        .map_err(AppError::UpstreamRequestError)?;
    Ok(HttpClient::new(
        client,
        cfg.booking_list_url.clone(),
        cfg.consumption_master_url.clone(),
    ))
}
