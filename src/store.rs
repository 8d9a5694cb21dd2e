use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::authenticator::Authenticator;
use crate::error::StoreError;

/// In-memory username -> password table, frozen after construction.
///
/// Passwords are compared as plain strings with `==`. There is no hashing
/// and no constant-time comparison.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    users: HashMap<String, String>,
}

impl CredentialStore {
    /// Read and parse the credential document at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| StoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let store = Self::from_json(path, &text)?;
        tracing::info!(
            path = %path.display(),
            accounts = store.len(),
            "Credential store loaded"
        );
        Ok(store)
    }

    /// Parse a flat JSON object of `"username": "password"` pairs.
    /// Duplicate keys resolve to the last occurrence.
    pub fn from_json(path: impl AsRef<Path>, text: &str) -> Result<Self, StoreError> {
        let path: PathBuf = path.as_ref().to_path_buf();
        let users: HashMap<String, String> =
            serde_json::from_str(text).map_err(|source| StoreError::Parse {
                path: path.clone(),
                source,
            })?;

        if users.is_empty() {
            return Err(StoreError::Empty { path });
        }

        Ok(Self::from_map(users))
    }

    pub fn from_map(users: HashMap<String, String>) -> Self {
        Self { users }
    }

    fn len(&self) -> usize {
        self.users.len()
    }
}

impl Authenticator for CredentialStore {
    fn verify(&self, username: &str, password: &str) -> bool {
        matches!(self.users.get(username), Some(stored) if stored == password)
    }
}
