//! HTTP client for the record API
//!
//! Used by [`AdminPage`](crate::pages::AdminPage) to talk to a running server
//! the same way the browser pages do.

use reqwest::{Response, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::{constants::API_BASE_PATH, models::Record};

/// Errors surfaced by [`ApiClient`]
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The server answered with an error body
    #[error("{message}")]
    Api { status: StatusCode, message: String },

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected response: {0}")]
    Decode(String),
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Client for `/api/<collection>` endpoints
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// `base_url` is the server origin, e.g. `http://127.0.0.1:3000`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn collection_url<R: Record>(&self) -> String {
        format!("{}{}/{}", self.base_url, API_BASE_PATH, R::COLLECTION)
    }

    pub async fn list<R: Record>(&self) -> Result<Vec<R>, ClientError> {
        let response = self.http.get(self.collection_url::<R>()).send().await?;
        read(response, R::COLLECTION).await
    }

    pub async fn get<R: Record>(&self, id: Uuid) -> Result<R, ClientError> {
        let url = format!("{}/{}", self.collection_url::<R>(), id);
        let response = self.http.get(url).send().await?;
        read(response, R::SINGULAR).await
    }

    pub async fn create<R: Record>(&self, body: &impl Serialize) -> Result<R, ClientError> {
        let response = self
            .http
            .post(self.collection_url::<R>())
            .json(body)
            .send()
            .await?;
        read(response, R::SINGULAR).await
    }

    pub async fn update<R: Record>(
        &self,
        id: Uuid,
        body: &impl Serialize,
    ) -> Result<R, ClientError> {
        let url = format!("{}?id={}", self.collection_url::<R>(), id);
        let response = self.http.put(url).json(body).send().await?;
        read(response, R::SINGULAR).await
    }

    pub async fn delete<R: Record>(&self, id: Uuid) -> Result<(), ClientError> {
        let url = format!("{}?id={}", self.collection_url::<R>(), id);
        let response = self.http.delete(url).send().await?;
        read::<Value>(response, "message").await.map(|_| ())
    }
}

/// Decode a success body's `key` field, or the error body's message
async fn read<T: DeserializeOwned>(response: Response, key: &str) -> Result<T, ClientError> {
    let status = response.status();

    if !status.is_success() {
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.message,
            Err(_) => status.to_string(),
        };
        return Err(ClientError::Api { status, message });
    }

    let mut body: Value = response.json().await?;
    let value = body
        .get_mut(key)
        .map(Value::take)
        .ok_or_else(|| ClientError::Decode(format!("missing `{key}` in response")))?;

    serde_json::from_value(value).map_err(|e| ClientError::Decode(e.to_string()))
}
