use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::api::error::ApiError;
use crate::config::ApiConfig;
use crate::food::{Food, FoodId, NewFood};

const FOODS_PATH: &str = "/foods";

/// HTTP client for the `/foods` REST resource.
#[derive(Clone)]
pub struct FoodApi {
    client: Client,
    base_url: String,
}

impl FoodApi {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ApiError::InvalidUrl { url: base_url });
        }

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .timeout(Duration::from_secs(config.timeout_seconds as u64))
            .build()
            .map_err(|e| ApiError::Connection {
                url: base_url.clone(),
                source: e,
            })?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /foods`
    pub async fn list(&self) -> Result<Vec<Food>, ApiError> {
        let url = self.url(FOODS_PATH);
        let response = self.send(self.client.request(Method::GET, &url), &url).await?;
        decode(response, &url).await
    }

    /// `POST /foods`
    pub async fn create(&self, food: &NewFood) -> Result<Food, ApiError> {
        let url = self.url(FOODS_PATH);
        let response = self
            .send(self.client.request(Method::POST, &url).json(food), &url)
            .await?;
        decode(response, &url).await
    }

    /// `PUT /foods/{id}`
    pub async fn update(&self, id: FoodId, food: &Food) -> Result<Food, ApiError> {
        let url = self.item_url(id);
        let response = self
            .send(self.client.request(Method::PUT, &url).json(food), &url)
            .await?;
        decode(response, &url).await
    }

    /// `DELETE /foods/{id}`. The response body is ignored.
    pub async fn delete(&self, id: FoodId) -> Result<(), ApiError> {
        let url = self.item_url(id);
        self.send(self.client.request(Method::DELETE, &url), &url)
            .await?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn item_url(&self, id: FoodId) -> String {
        format!("{}{}/{}", self.base_url, FOODS_PATH, id)
    }

    async fn send(&self, builder: RequestBuilder, url: &str) -> Result<Response, ApiError> {
        tracing::debug!(url, "sending request");
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::from_send(url, e))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .text()
            .await
            .ok()
            .filter(|body| !body.trim().is_empty())
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown").to_string());
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

async fn decode<T: DeserializeOwned>(response: Response, url: &str) -> Result<T, ApiError> {
    response.json::<T>().await.map_err(|e| ApiError::Decode {
        url: url.to_string(),
        source: e,
    })
}
