//! CLI configuration.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use topshop_data::DEFAULT_BASE_URL;

/// File names searched for, in order, in the working directory and its parents.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["topshop.toml", ".topshop.toml", "topshop.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Catalog API settings.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Interactive session settings.
    #[serde(default)]
    pub session: SessionConfig,
}

impl CliConfig {
    /// Load config from a file. `.json` files are JSON, everything else TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Save config to a file in the format its extension implies.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Read a value by dotted key.
    pub fn get_value(&self, key: &str) -> Result<Value> {
        let parts: Vec<&str> = key.split('.').collect();

        let value = match parts.as_slice() {
            ["catalog", "base_url"] => Value::from(self.catalog.base_url.as_str()),
            ["catalog", "timeout_ms"] => Value::from(self.catalog.timeout_ms),
            ["catalog", "max_retries"] => Value::from(self.catalog.max_retries),
            ["session", "greeting"] => Value::from(self.session.greeting.as_str()),
            _ => bail!("Unknown config key: {}", key),
        };
        Ok(value)
    }

    /// Read a value by dotted key, formatted as JSON.
    pub fn get(&self, key: &str) -> Result<String> {
        Ok(serde_json::to_string(&self.get_value(key)?)?)
    }

    /// Set a value by dotted key.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["catalog", "base_url"] => self.catalog.base_url = value.to_string(),
            ["catalog", "timeout_ms"] => {
                self.catalog.timeout_ms = value
                    .parse()
                    .with_context(|| format!("{} must be a whole number of milliseconds", key))?
            }
            ["catalog", "max_retries"] => {
                self.catalog.max_retries = value
                    .parse()
                    .with_context(|| format!("{} must be a whole number", key))?
            }
            ["session", "greeting"] => self.session.greeting = value.to_string(),
            _ => bail!("Unknown config key: {}", key),
        }

        Ok(())
    }

    /// Check the config, returning (errors, warnings).
    pub fn validate(&self) -> (Vec<String>, Vec<String>) {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        let url = self.catalog.base_url.trim();
        if url.is_empty() {
            errors.push("catalog.base_url is required".to_string());
        } else if !(url.starts_with("http://") || url.starts_with("https://")) {
            errors.push("catalog.base_url must start with http:// or https://".to_string());
        } else if url.starts_with("http://") {
            warnings.push("catalog.base_url is not using https".to_string());
        }

        if self.catalog.timeout_ms == 0 {
            errors.push("catalog.timeout_ms must be greater than 0".to_string());
        } else if self.catalog.timeout_ms > 60_000 {
            warnings.push(format!(
                "catalog.timeout_ms of {} ms is unusually long",
                self.catalog.timeout_ms
            ));
        }

        if self.catalog.max_retries > 10 {
            warnings.push("catalog.max_retries above 10 will make failures slow".to_string());
        }

        (errors, warnings)
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Catalog API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// API root; paths like `/products` are appended to it.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Retries after a 5xx, timeout or refused connection.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_max_retries() -> u32 {
    1
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            max_retries: default_max_retries(),
        }
    }
}

/// Interactive session settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Line printed when a session starts.
    #[serde(default = "default_greeting")]
    pub greeting: String,
}

fn default_greeting() -> String {
    "Welcome to TOP Shopping".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            greeting: default_greeting(),
        }
    }
}

/// Generate a default topshop.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# TOP Shopping configuration

[catalog]
base_url = "{base_url}"
timeout_ms = {timeout_ms}
max_retries = {max_retries}

[session]
greeting = "{greeting}"
"#,
        base_url = default_base_url(),
        timeout_ms = default_timeout_ms(),
        max_retries = default_max_retries(),
        greeting = default_greeting(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config: CliConfig = toml::from_str("[catalog]\ntimeout_ms = 500\n").unwrap();
        assert_eq!(config.catalog.timeout_ms, 500);
        assert_eq!(config.catalog.base_url, "https://fakestoreapi.com");
        assert_eq!(config.session.greeting, "Welcome to TOP Shopping");
    }

    #[test]
    fn test_load_json_and_toml() {
        let dir = tempfile::tempdir().unwrap();

        let json = dir.path().join("topshop.json");
        std::fs::write(&json, r#"{"catalog": {"max_retries": 3}}"#).unwrap();
        assert_eq!(CliConfig::load(&json).unwrap().catalog.max_retries, 3);

        let toml_path = dir.path().join("topshop.toml");
        std::fs::write(&toml_path, "[session]\ngreeting = \"hi\"\n").unwrap();
        assert_eq!(CliConfig::load(&toml_path).unwrap().session.greeting, "hi");
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("topshop.toml");
        std::fs::write(&path, "[catalog\n").unwrap();

        let err = CliConfig::load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse TOML config"));
    }

    #[test]
    fn test_save_round_trips_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("topshop.toml");

        let mut config = CliConfig::default();
        config.set("catalog.base_url", "http://localhost:8080").unwrap();
        config.save(&path).unwrap();

        assert_eq!(CliConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_get_and_set() {
        let mut config = CliConfig::default();
        assert_eq!(config.get("catalog.timeout_ms").unwrap(), "10000");
        assert_eq!(config.get("session.greeting").unwrap(), "\"Welcome to TOP Shopping\"");

        config.set("catalog.max_retries", "4").unwrap();
        assert_eq!(config.catalog.max_retries, 4);

        assert!(config.set("catalog.timeout_ms", "soon").is_err());
        assert!(config.get("catalog.nope").is_err());
        assert!(config.set("nope", "1").is_err());
    }

    #[test]
    fn test_get_escapes_strings_as_json() {
        let mut config = CliConfig::default();
        config.set("session.greeting", r#"Say "hi"\now"#).unwrap();
        config.set("catalog.base_url", "https://example.com/a\"b").unwrap();

        let greeting: String = serde_json::from_str(&config.get("session.greeting").unwrap()).unwrap();
        assert_eq!(greeting, r#"Say "hi"\now"#);

        let url: String = serde_json::from_str(&config.get("catalog.base_url").unwrap()).unwrap();
        assert_eq!(url, "https://example.com/a\"b");

        assert_eq!(config.get_value("catalog.max_retries").unwrap(), Value::from(1u32));
    }

    #[test]
    fn test_validate() {
        let (errors, warnings) = CliConfig::default().validate();
        assert!(errors.is_empty());
        assert!(warnings.is_empty());

        let mut config = CliConfig::default();
        config.catalog.base_url = "ftp://example.com".into();
        config.catalog.timeout_ms = 0;
        let (errors, _) = config.validate();
        assert_eq!(errors.len(), 2);

        let mut config = CliConfig::default();
        config.catalog.base_url = "http://localhost".into();
        let (errors, warnings) = config.validate();
        assert!(errors.is_empty());
        assert_eq!(warnings, vec!["catalog.base_url is not using https".to_string()]);
    }
}
