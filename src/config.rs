use std::{env, path::PathBuf};

pub const LOCAL_ENDPOINT: &str = "/api/log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub data_path: PathBuf,
    /// Remote logging endpoint; `None` keeps logs in the local store.
    pub remote_endpoint: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(8080);
        let data_path = lookup("APP_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("data/health_logs.json"));
        let remote_endpoint = lookup("HEALTH_LOG_ENDPOINT")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        Self {
            port,
            data_path,
            remote_endpoint,
        }
    }

    /// Endpoint the in-browser script posts to.
    pub fn page_endpoint(&self) -> &str {
        self.remote_endpoint.as_deref().unwrap_or(LOCAL_ENDPOINT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.data_path, PathBuf::from("data/health_logs.json"));
        assert_eq!(config.page_endpoint(), "/api/log");
    }

    #[test]
    fn remote_endpoint_overrides_page_endpoint() {
        let config = config(&[
            ("PORT", "9000"),
            ("HEALTH_LOG_ENDPOINT", " https://logs.example.net/health "),
        ]);
        assert_eq!(config.port, 9000);
        assert_eq!(config.page_endpoint(), "https://logs.example.net/health");
    }

    #[test]
    fn bad_port_and_blank_endpoint_fall_back() {
        let config = config(&[("PORT", "http"), ("HEALTH_LOG_ENDPOINT", "  ")]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.remote_endpoint, None);
    }
}
