use std::time::Duration;

use anyhow::{Error, Result, anyhow};
use reqwest::Client;
use tracing::{debug, info};

use crate::{
    config::Config,
    models::fcm::{FcmMessage, FcmRequest, FcmSendResponse},
};

const FCM_SCOPES: &[&str] = &["https://www.googleapis.com/auth/firebase.messaging"];

pub struct FcmClient {
    http_client: Client,
    api_base: String,
    fcm_project_id: String,
    auth_token: Option<String>,
}

impl FcmClient {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|_| anyhow!("Failed to create HTTP client"))?;

        info!(project_id = %config.firebase_project_id, "FCM client initialized");

        Ok(Self {
            http_client,
            api_base: config.fcm_api_url.trim_end_matches('/').to_string(),
            fcm_project_id: config.firebase_project_id.clone(),
            auth_token: config.fcm_auth_token.clone(),
        })
    }

    /// Sends one message through the FCM HTTP v1 API and returns the provider
    /// message id. No retries; failures surface directly to the caller.
    pub async fn send_notification(&self, message: &FcmMessage) -> Result<String, Error> {
        debug!(token = %message.token, "Sending FCM push notification");

        let bearer_token = self.bearer_token().await?;

        let url = format!(
            "{}/v1/projects/{}/messages:send",
            self.api_base, self.fcm_project_id
        );

        let request = FcmRequest {
            message: message.clone(),
        };

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&bearer_token)
            .json(&request)
            .send()
            .await
            .map_err(|e| anyhow!("FCM request failed: {}", e))?;

        if response.status().is_success() {
            let body: FcmSendResponse = response
                .json()
                .await
                .map_err(|e| anyhow!("Failed to parse FCM response: {}", e))?;

            info!(message_id = %body.name, "FCM push notification sent successfully");
            Ok(body.name)
        } else {
            let error_text = response.text().await?;
            Err(anyhow!("FCM request failed: {}", error_text))
        }
    }

    async fn bearer_token(&self) -> Result<String, Error> {
        // Static token override for local development and tests.
        if let Some(token) = &self.auth_token {
            return Ok(token.clone());
        }

        let provider = gcp_auth::provider().await?;
        let token = provider.token(FCM_SCOPES).await?;

        Ok(token.as_str().to_string())
    }
}
