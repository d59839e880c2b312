// src/services/practicum.rs

//! Homework statuses API client.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, header};
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::models::ApiConfig;
use crate::services::HomeworkApi;
use crate::utils::http::create_async_client;

/// Client for the homework statuses endpoint.
pub struct PracticumClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    /// Create a new client with the given API settings and OAuth token.
    pub fn new(config: &ApiConfig, token: impl Into<String>) -> Result<Self> {
        let client = create_async_client(&config.user_agent, config.timeout_secs)?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            token: token.into(),
        })
    }
}

#[async_trait]
impl HomeworkApi for PracticumClient {
    async fn fetch(&self, from_date: i64) -> Result<Value> {
        log::debug!("Requesting {} from_date={}", self.endpoint, from_date);

        let response = self
            .client
            .get(&self.endpoint)
            .header(header::AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(AppError::Connectivity)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(AppError::Access {
                status: status.as_u16(),
            });
        }

        let text = response.text().await.map_err(AppError::Connectivity)?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::utils::test_server::{TestServer, closed_url, silent_url};

    fn config_for(base: &str) -> ApiConfig {
        ApiConfig {
            endpoint: format!("{base}/api/user_api/homework_statuses/"),
            timeout_secs: 5,
            ..ApiConfig::default()
        }
    }

    #[tokio::test]
    async fn test_fetch_sends_token_and_watermark() {
        let server = TestServer::respond(
            "200 OK",
            r#"{"homeworks": [], "current_date": 2000}"#,
        )
        .await;
        let client = PracticumClient::new(&config_for(&server.url), "y0_token").unwrap();

        let body = client.fetch(1000).await.unwrap();
        assert_eq!(body, json!({"homeworks": [], "current_date": 2000}));

        let request = server.request().await;
        assert!(request.starts_with("GET /api/user_api/homework_statuses/?from_date=1000 "));
        assert!(request.to_lowercase().contains("authorization: oauth y0_token"));
    }

    #[tokio::test]
    async fn test_non_200_is_access_fault() {
        let server = TestServer::respond("401 Unauthorized", r#"{"code": "not_authenticated"}"#).await;
        let client = PracticumClient::new(&config_for(&server.url), "bad").unwrap();

        let err = client.fetch(0).await.unwrap_err();
        assert!(matches!(err, AppError::Access { status: 401 }));
    }

    #[tokio::test]
    async fn test_non_json_body_is_format_fault() {
        let server = TestServer::respond("200 OK", "<html>maintenance</html>").await;
        let client = PracticumClient::new(&config_for(&server.url), "y0_token").unwrap();

        let err = client.fetch(0).await.unwrap_err();
        assert!(matches!(err, AppError::Json(_)));
        assert_eq!(err.kind(), crate::error::FaultKind::Format);
    }

    #[tokio::test]
    async fn test_unreachable_is_connectivity_fault() {
        let url = closed_url().await;
        let client = PracticumClient::new(&config_for(&url), "y0_token").unwrap();

        let err = client.fetch(0).await.unwrap_err();
        assert!(matches!(err, AppError::Connectivity(_)));
    }

    #[tokio::test]
    async fn test_timeout_is_connectivity_fault() {
        let url = silent_url().await;
        let config = ApiConfig {
            timeout_secs: 1,
            ..config_for(&url)
        };
        let client = PracticumClient::new(&config, "y0_token").unwrap();

        let err = client.fetch(0).await.unwrap_err();
        assert!(matches!(err, AppError::Connectivity(ref e) if e.is_timeout()));
    }
}
