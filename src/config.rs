use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::backend::database::DatabaseBackendConfig;

lazy_static! {
    static ref ENV_VAR_REGEX: Regex =
        Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}").expect("valid env var pattern");
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub images: ImagesConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DatabaseConfig {
    pub url: String,
    /// Seconds to wait on a locked database file
    #[serde(default = "default_busy_timeout")]
    pub busy_timeout: u64,
}

fn default_busy_timeout() -> u64 {
    30
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ImagesConfig {
    #[serde(default = "default_image_dir")]
    pub dir: PathBuf,
}

fn default_image_dir() -> PathBuf {
    PathBuf::from("images")
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            dir: default_image_dir(),
        }
    }
}

impl AppConfig {
    /// Load configuration from YAML file
    pub fn load_from_file<P: AsRef<Path>>(config_path: P) -> Result<Self, String> {
        let path = config_path.as_ref();

        if !path.exists() {
            return Err(format!("Configuration file not found: {}", path.display()));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file {}: {}", path.display(), e))?;

        // Expand environment variables in YAML content
        let expanded_content = Self::expand_env_vars(&content)?;

        let app_config: AppConfig = serde_yaml::from_str(&expanded_content)
            .map_err(|e| format!("Failed to parse config file {}: {}", path.display(), e))?;

        app_config.backend_config().validate()?;

        Ok(app_config)
    }

    /// Default configuration: `exhibition.db` and an `images` folder in the
    /// working directory
    pub fn default_config() -> Self {
        AppConfig {
            database: DatabaseConfig {
                url: "sqlite:exhibition.db".to_string(),
                busy_timeout: default_busy_timeout(),
            },
            images: ImagesConfig::default(),
        }
    }

    /// Database backend settings derived from this configuration
    pub fn backend_config(&self) -> DatabaseBackendConfig {
        DatabaseBackendConfig::sqlite(self.database.url.clone())
            .with_connection_timeout(self.database.busy_timeout)
    }

    /// Expand environment variables in format ${VAR_NAME} or ${VAR_NAME:-default}
    fn expand_env_vars(content: &str) -> Result<String, String> {
        let mut expanded = String::with_capacity(content.len());
        let mut last = 0;

        for caps in ENV_VAR_REGEX.captures_iter(content) {
            let whole = caps.get(0).expect("capture 0 is the whole match");
            let var_name = &caps[1];

            let value = match std::env::var(var_name) {
                Ok(val) => val,
                Err(_) => match caps.get(2) {
                    Some(default) => default.as_str().to_string(),
                    None => {
                        return Err(format!(
                            "Environment variable {} not found and no default provided",
                            var_name
                        ))
                    }
                },
            };

            expanded.push_str(&content[last..whole.start()]);
            expanded.push_str(&value);
            last = whole.end();
        }

        expanded.push_str(&content[last..]);
        Ok(expanded)
    }
}
