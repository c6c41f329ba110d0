use serde::Deserialize;

/// User record as stored under `/users/<id>` in the realtime database.
/// Every field is optional; unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct UserRecord {
    #[serde(default, rename = "fcmToken")]
    pub fcm_token: Option<String>,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub name: Option<String>,
}

impl UserRecord {
    pub fn delivery_token(&self) -> Option<&str> {
        self.fcm_token.as_deref().filter(|token| !token.is_empty())
    }

    pub fn is_online(&self) -> bool {
        self.status.as_deref() == Some("Online")
    }
}
