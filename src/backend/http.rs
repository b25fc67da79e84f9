//! HTTP implementation of the food service backend.

use async_trait::async_trait;
use serde::Serialize;

use super::{BackendError, CreateFoodArgs, Food, FoodBackend};

/// Client for a food service speaking the menu REST dialect.
pub struct HttpBackend {
    base_url: String,
    client: reqwest::Client,
}

/// Create payload: the draft plus the availability flag the service
/// expects. New items are always created available.
#[derive(Serialize)]
struct CreateFoodBody<'a> {
    name: &'a str,
    description: &'a str,
    price: &'a str,
    image: &'a str,
    available: bool,
}

impl HttpBackend {
    /// Create a new client for the service at `base_url`. A trailing slash
    /// is tolerated and trimmed.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Map non-2xx responses to backend errors.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, BackendError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        if status == reqwest::StatusCode::NOT_FOUND {
            Err(BackendError::NotFound(message))
        } else {
            Err(BackendError::Status {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl FoodBackend for HttpBackend {
    async fn fetch_foods(&self) -> Result<Vec<Food>, BackendError> {
        let response = self
            .client
            .get(self.url("/foods"))
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        Self::check(response)
            .await?
            .json()
            .await
            .map_err(|e| BackendError::InvalidData(e.to_string()))
    }

    async fn create_food(&self, args: CreateFoodArgs) -> Result<Food, BackendError> {
        let body = CreateFoodBody {
            name: &args.name,
            description: &args.description,
            price: &args.price,
            image: &args.image,
            available: true,
        };

        let response = self
            .client
            .post(self.url("/foods"))
            .json(&body)
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        Self::check(response)
            .await?
            .json()
            .await
            .map_err(|e| BackendError::InvalidData(e.to_string()))
    }

    async fn update_food(&self, id: i64, food: &Food) -> Result<Food, BackendError> {
        // The service exposes updates under the singular `/food`, unlike
        // every other route. Kept as-is for wire compatibility.
        let response = self
            .client
            .put(self.url(&format!("/food/{id}")))
            .json(food)
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        Self::check(response)
            .await?
            .json()
            .await
            .map_err(|e| BackendError::InvalidData(e.to_string()))
    }

    async fn delete_food(&self, id: i64) -> Result<(), BackendError> {
        let response = self
            .client
            .delete(self.url(&format!("/foods/{id}")))
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        Self::check(response).await?;
        Ok(())
    }
}
