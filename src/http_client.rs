use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{ConsoleError, ConsoleResult};

#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> ConsoleResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url: base_url.into(),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, fallback: &str) -> ConsoleResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        let response = Self::ensure_success(response, fallback).await?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ConsoleError::Decode(e.to_string()))
    }

    pub async fn post_json<T: serde::Serialize>(
        &self,
        path: &str,
        body: &T,
        fallback: &str,
    ) -> ConsoleResult<()> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::ensure_success(response, fallback).await?;
        Ok(())
    }

    pub async fn delete(&self, path: &str, fallback: &str) -> ConsoleResult<()> {
        let response = self.client.delete(self.url(path)).send().await?;
        Self::ensure_success(response, fallback).await?;
        Ok(())
    }

    async fn ensure_success(response: Response, fallback: &str) -> ConsoleResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ConsoleError::Server {
            status,
            message: error_message(&body, fallback),
        })
    }
}

/// Extracts `error` from a JSON error body, or returns `fallback`.
pub fn error_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|msg| !msg.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}
