use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// Query-string credentials. Missing parameters become empty strings.
#[derive(Clone, Default)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Pick `username` and `password` out of decoded query pairs, keeping the
    /// first occurrence of each.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut username = None;
        let mut password = None;
        for (key, value) in pairs {
            match key.as_str() {
                "username" if username.is_none() => username = Some(value),
                "password" if password.is_none() => password = Some(value),
                _ => {}
            }
        }
        Self {
            username: username.unwrap_or_default(),
            password: password.unwrap_or_default(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountStatusResponse {
    pub user_info: UserInfo,
    pub server_info: ServerInfo,
    pub categories: Vec<Value>, // always empty
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserInfo {
    pub auth: u8,
    pub status: String,
    pub exp_date: String, // "0" means no expiry
    pub max_connections: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerInfo {
    pub url: String,
}

impl AccountStatusResponse {
    /// The descriptor every authenticated caller receives, whichever account
    /// they authenticated as.
    pub fn active() -> Self {
        Self {
            user_info: UserInfo {
                auth: 1,
                status: "Active".to_string(),
                exp_date: "0".to_string(),
                max_connections: 1,
            },
            server_info: ServerInfo {
                url: "localhost".to_string(),
            },
            categories: Vec::new(),
        }
    }
}
