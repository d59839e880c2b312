// src/services/telegram.rs

//! Telegram Bot API notifier.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::models::TelegramConfig;
use crate::services::Notifier;
use crate::utils::http::create_async_client;

#[derive(Debug, Deserialize)]
struct TelegramApiResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// Sends plain-text messages to one fixed chat.
pub struct TelegramNotifier {
    client: Client,
    api_base: String,
    bot_token: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(
        config: &TelegramConfig,
        user_agent: &str,
        bot_token: impl Into<String>,
        chat_id: impl Into<String>,
    ) -> Result<Self> {
        let client = create_async_client(user_agent, config.timeout_secs)?;
        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            bot_token: bot_token.into(),
            chat_id: chat_id.into(),
        })
    }

    fn api_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_base, self.bot_token, method)
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<()> {
        let body = serde_json::json!({
            "chat_id": self.chat_id,
            "text": text,
        });

        // Strip the URL from transport errors, it contains the bot token.
        let response = self
            .client
            .post(self.api_url("sendMessage"))
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::notifier(format!("sendMessage failed: {}", e.without_url())))?;

        let status = response.status();
        let result: TelegramApiResponse = response.json().await.map_err(|e| {
            AppError::notifier(format!(
                "invalid sendMessage response (HTTP {}): {}",
                status.as_u16(),
                e.without_url()
            ))
        })?;

        if !status.is_success() || !result.ok {
            return Err(AppError::notifier(format!(
                "HTTP {}: {}",
                status.as_u16(),
                result.description.unwrap_or_default()
            )));
        }
        Ok(())
    }
}
