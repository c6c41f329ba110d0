use anyhow::{Error, Result, anyhow};
use dotenvy::dotenv;
use serde::Deserialize;

#[derive(Clone, Deserialize, Debug)]
pub struct Config {
    pub firebase_project_id: String,
    pub firebase_database_url: String,

    #[serde(default)]
    pub firebase_database_secret: Option<String>,

    #[serde(default = "default_fcm_api_url")]
    pub fcm_api_url: String,

    #[serde(default)]
    pub fcm_auth_token: Option<String>,

    pub server_port: u16,
}

fn default_fcm_api_url() -> String {
    "https://fcm.googleapis.com".to_string()
}

impl Config {
    pub fn load() -> Result<Self, Error> {
        dotenv().ok();

        let config = envy::from_env::<Self>()
            .map_err(|_| anyhow!("Invalid or missing environmental variable"))?;
        Ok(config)
    }
}
