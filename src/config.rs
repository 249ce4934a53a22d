//! Backend endpoint resolution.

use serde::Deserialize;
use std::{env, error::Error, fs, path::Path};
use tracing::{error, info};

/// Port the fleet backend listens on by default.
const DEFAULT_API_PORT: u16 = 42069;

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub api_url: String,
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    api_url: Option<String>,
}

impl DashboardConfig {
    /// Resolves the backend endpoint, highest priority first: the
    /// `--api-url` flag, the `API_URL` environment variable, an
    /// optional TOML config file, then the local default.
    pub fn load(
        flag_url: Option<&str>,
        config_path: Option<&str>,
    ) -> Result<Self, Box<dyn Error + Send + Sync>> {
        if let Some(url) = flag_url {
            return Ok(Self::with_url(url));
        }

        if let Ok(url) = env::var("API_URL") {
            if !url.is_empty() {
                return Ok(Self::with_url(&url));
            }
        }

        if let Some(path_str) = config_path {
            let config_str = fs::read_to_string(Path::new(path_str)).map_err(|e| {
                error!(path = %path_str, error = %e, "Failed to read config file.");
                Box::new(e) as Box<dyn Error + Send + Sync>
            })?;
            let file_config: FileConfig = toml::from_str(&config_str).map_err(|e| {
                error!(path = %path_str, error = %e, "Failed to parse config file.");
                Box::new(e) as Box<dyn Error + Send + Sync>
            })?;
            if let Some(url) = file_config.api_url {
                info!(path = %path_str, "Loaded endpoint from config file.");
                return Ok(Self::with_url(&url));
            }
        }

        Ok(Self::with_url(&format!(
            "http://localhost:{DEFAULT_API_PORT}"
        )))
    }

    fn with_url(url: &str) -> Self {
        Self {
            api_url: url.trim_end_matches('/').to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn flag_takes_priority_and_is_normalized() {
        let config = DashboardConfig::load(Some("http://flag-host:8080/"), None).unwrap();
        assert_eq!(config.api_url, "http://flag-host:8080");
    }

    #[test]
    fn config_file_supplies_endpoint() {
        env::remove_var("API_URL");
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_url = \"http://filehost:9000\"").unwrap();

        let config =
            DashboardConfig::load(None, Some(file.path().to_str().unwrap())).unwrap();
        assert_eq!(config.api_url, "http://filehost:9000");
    }

    #[test]
    fn missing_config_file_is_an_error() {
        env::remove_var("API_URL");
        assert!(DashboardConfig::load(None, Some("/nonexistent/pinnexus.toml")).is_err());
    }

    #[test]
    fn defaults_to_local_backend() {
        env::remove_var("API_URL");
        let config = DashboardConfig::load(None, None).unwrap();
        assert_eq!(config.api_url, "http://localhost:42069");
    }
}
