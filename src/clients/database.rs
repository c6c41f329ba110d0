use std::time::Duration;

use anyhow::{Error, Result, anyhow};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info};

use crate::{config::Config, models::user::UserRecord};

/// Read-only client for the Firebase Realtime Database REST surface.
pub struct DatabaseClient {
    http_client: Client,
    base_url: String,
    database_secret: Option<String>,
}

impl DatabaseClient {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|_| anyhow!("Failed to create HTTP client"))?;

        info!(base_url = %config.firebase_database_url, "Database client initialized");

        Ok(Self {
            http_client,
            base_url: config
                .firebase_database_url
                .trim_end_matches('/')
                .to_string(),
            database_secret: config.firebase_database_secret.clone(),
        })
    }

    /// Fetches the record stored under `/users/<id>`. The database returns a
    /// JSON `null` for absent paths, which maps to `Ok(None)`.
    pub async fn fetch_user(&self, user_id: &str) -> Result<Option<UserRecord>, Error> {
        let url = format!("{}/users/{}.json", self.base_url, user_id);

        debug!(user_id, "Fetching user record");

        let mut request = self.http_client.get(&url);
        if let Some(secret) = &self.database_secret {
            request = request.query(&[("auth", secret.as_str())]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| anyhow!("User lookup request failed: {}", e))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(anyhow!(
                "User store returned status {}: {}",
                status,
                error_text
            ));
        }

        let value: Value = response
            .json()
            .await
            .map_err(|e| anyhow!("Failed to parse user record: {}", e))?;

        if value.is_null() {
            debug!(user_id, "No record for user");
            return Ok(None);
        }

        let user =
            serde_json::from_value(value).map_err(|e| anyhow!("Malformed user record: {}", e))?;

        Ok(Some(user))
    }
}
