use std::env;
use std::path::PathBuf;

pub struct Config {
    pub port: u16,
    pub credentials_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(10000),
            credentials_path: env::var("CREDENTIALS_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("users.json")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the env mutations never race each other.
    #[test]
    fn from_env_defaults_and_overrides() {
        env::remove_var("PORT");
        env::remove_var("CREDENTIALS_PATH");
        let config = Config::from_env();
        assert_eq!(config.port, 10000);
        assert_eq!(config.credentials_path, PathBuf::from("users.json"));

        env::set_var("PORT", "not-a-port");
        env::set_var("CREDENTIALS_PATH", "  ");
        let config = Config::from_env();
        assert_eq!(config.port, 10000);
        assert_eq!(config.credentials_path, PathBuf::from("users.json"));

        env::set_var("PORT", "8080");
        env::set_var("CREDENTIALS_PATH", "/etc/xtream/users.json");
        let config = Config::from_env();
        assert_eq!(config.port, 8080);
        assert_eq!(config.credentials_path, PathBuf::from("/etc/xtream/users.json"));

        env::remove_var("PORT");
        env::remove_var("CREDENTIALS_PATH");
    }
}
