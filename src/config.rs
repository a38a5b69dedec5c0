use crate::error::{Result, UrbanPulseError};
use dialoguer::{Input, Password};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

pub const DEFAULT_CITIES: [&str; 8] = [
    "Delhi",
    "Mumbai",
    "Bangalore",
    "Pune",
    "Hyderabad",
    "Bhopal",
    "Chennai",
    "Kolkata",
];

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub openweathermap: OpenWeatherMapConfig,
    #[serde(default = "default_cities")]
    pub cities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compare_city: Option<String>,
}

fn default_cities() -> Vec<String> {
    DEFAULT_CITIES.iter().map(|c| c.to_string()).collect()
}

#[derive(Clone, Deserialize, Serialize)]
pub struct OpenWeatherMapConfig {
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl OpenWeatherMapConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl std::fmt::Debug for OpenWeatherMapConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherMapConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Config {
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let explicit = config_override.is_some();
        let config_path = match config_override {
            Some(p) => p,
            None => Self::find_config_path()?,
        };

        if !config_path.exists() {
            // No file anywhere: fall back to defaults if the key is in the environment
            if !explicit {
                if let Ok(api_key) = std::env::var(API_KEY_ENV) {
                    tracing::info!("No config file found, using defaults with {}", API_KEY_ENV);
                    let config = Self::with_api_key(api_key);
                    config.validate()?;
                    return Ok(config);
                }
            }
            return Err(UrbanPulseError::Config(format!(
                "Config file not found at {:?}. Run `urbanpulse init` or set {}.",
                config_path, API_KEY_ENV
            )));
        }

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| UrbanPulseError::Config(format!("Failed to read config: {}", e)))?;

        let config = Self::from_yaml(&config_str)?;
        tracing::debug!(path = %config_path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Parse and validate YAML after `${VAR}` substitution.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let content = Self::substitute_env_vars(content);

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| UrbanPulseError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            openweathermap: OpenWeatherMapConfig::new(api_key),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        let key = self.openweathermap.api_key.trim();
        if key.is_empty() || key.contains("${") {
            return Err(UrbanPulseError::Config(format!(
                "OpenWeatherMap API key is not set (check {})",
                API_KEY_ENV
            )));
        }

        if self.cities.is_empty() {
            return Err(UrbanPulseError::Config(
                "At least one city must be configured".into(),
            ));
        }

        if let Some(ref city) = self.default_city {
            if !self.has_city(city) {
                return Err(UrbanPulseError::Config(format!(
                    "default_city '{}' is not in the cities list",
                    city
                )));
            }
        }

        if let Some(ref city) = self.compare_city {
            if !self.has_city(city) {
                return Err(UrbanPulseError::Config(format!(
                    "compare_city '{}' is not in the cities list",
                    city
                )));
            }
            if city.eq_ignore_ascii_case(self.primary_city()) {
                return Err(UrbanPulseError::Config(
                    "compare_city must differ from the primary city".into(),
                ));
            }
        }

        Ok(())
    }

    pub fn has_city(&self, city: &str) -> bool {
        self.cities.iter().any(|c| c.eq_ignore_ascii_case(city))
    }

    /// The configured default city, or the first city in the list.
    pub fn primary_city(&self) -> &str {
        self.default_city
            .as_deref()
            .or_else(|| self.cities.first().map(String::as_str))
            .unwrap_or(DEFAULT_CITIES[0])
    }

    /// Search for config.yaml in standard locations.
    /// Returns the path of the first found config, or the XDG default path if none found.
    fn find_config_path() -> Result<PathBuf> {
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        Self::default_config_path()
    }

    /// Returns true if a config file can be found in any standard location.
    pub fn exists(config_override: Option<&PathBuf>) -> bool {
        match config_override {
            Some(p) => p.exists(),
            None => Self::find_config_path()
                .map(|p| p.exists())
                .unwrap_or(false),
        }
    }

    /// Default path for writing new config files (~/.config/urbanpulse/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| UrbanPulseError::Config("Cannot determine config directory".into()))?
            .join("urbanpulse");
        Ok(config_dir.join("config.yaml"))
    }

    /// Run interactive setup prompts and write config to disk.
    /// Returns the loaded Config and the path it was written to.
    pub fn setup_interactive() -> Result<(Self, PathBuf)> {
        println!();
        println!("Let's set up UrbanPulse!");
        println!();

        println!("OpenWeatherMap");
        let api_key: String = Password::new()
            .with_prompt(format!("  API key (blank to read ${{{}}})", API_KEY_ENV))
            .allow_empty_password(true)
            .interact()
            .map_err(|e| UrbanPulseError::Config(format!("Input error: {}", e)))?;
        let api_key = if api_key.trim().is_empty() {
            format!("${{{}}}", API_KEY_ENV)
        } else {
            api_key
        };

        println!();
        println!("Cities");
        let cities: String = Input::new()
            .with_prompt("  Cities (comma separated)")
            .default(DEFAULT_CITIES.join(", "))
            .interact_text()
            .map_err(|e| UrbanPulseError::Config(format!("Input error: {}", e)))?;
        let cities: Vec<String> = cities
            .split(',')
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect();

        let first = cities.first().cloned().unwrap_or_default();
        let default_city: String = Input::new()
            .with_prompt("  Default city")
            .default(first)
            .interact_text()
            .map_err(|e| UrbanPulseError::Config(format!("Input error: {}", e)))?;

        let compare_city: String = Input::new()
            .with_prompt("  Compare with (blank for none)")
            .default(String::new())
            .allow_empty(true)
            .interact_text()
            .map_err(|e| UrbanPulseError::Config(format!("Input error: {}", e)))?;

        println!();

        let config = Config {
            openweathermap: OpenWeatherMapConfig::new(api_key),
            cities,
            default_city: Some(default_city),
            compare_city: if compare_city.trim().is_empty() {
                None
            } else {
                Some(compare_city.trim().to_string())
            },
        };

        let config_path = Self::default_config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| UrbanPulseError::Config(format!("Failed to serialize config: {}", e)))?;

        let content = format!(
            "# UrbanPulse Configuration\n# Generated by `urbanpulse init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(&config_path, content)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        // Re-read so ${VAR} placeholders resolve the same way as a normal start
        let loaded = Self::load(Some(config_path.clone()))?;
        Ok((loaded, config_path))
    }

    fn substitute_env_vars(content: &str) -> String {
        let re = match regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}") {
            Ok(re) => re,
            Err(_) => return content.to_string(),
        };

        let mut result = content.to_string();
        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        result
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            openweathermap: OpenWeatherMapConfig::new(""),
            cities: default_cities(),
            default_city: None,
            compare_city: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_yaml_with_defaults() {
        let config = Config::from_yaml("openweathermap:\n  api_key: abc123\n").unwrap();
        assert_eq!(config.openweathermap.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.openweathermap.timeout_secs, 10);
        assert_eq!(config.cities.len(), 8);
        assert_eq!(config.primary_city(), "Delhi");
        assert!(config.compare_city.is_none());
    }

    #[test]
    fn parses_full_yaml() {
        let yaml = "\
openweathermap:
  api_key: abc123
  base_url: http://localhost:9999
  timeout_secs: 3
cities: [Pune, Chennai]
default_city: Chennai
compare_city: Pune
";
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.primary_city(), "Chennai");
        assert_eq!(config.compare_city.as_deref(), Some("Pune"));
        assert_eq!(config.openweathermap.timeout_secs, 3);
    }

    #[test]
    fn substitutes_environment_variables() {
        std::env::set_var("URBANPULSE_TEST_KEY", "from-env");
        let config =
            Config::from_yaml("openweathermap:\n  api_key: ${URBANPULSE_TEST_KEY}\n").unwrap();
        assert_eq!(config.openweathermap.api_key, "from-env");
    }

    #[test]
    fn unresolved_placeholder_is_rejected() {
        let result = Config::from_yaml("openweathermap:\n  api_key: ${URBANPULSE_UNSET_VAR_XYZ}\n");
        assert!(matches!(result, Err(UrbanPulseError::Config(_))));
    }

    #[test]
    fn empty_key_is_rejected() {
        assert!(Config::default().validate().is_err());
        assert!(Config::with_api_key("k").validate().is_ok());
    }

    #[test]
    fn city_selection_is_validated() {
        let mut config = Config::with_api_key("k");
        config.default_city = Some("Atlantis".into());
        assert!(config.validate().is_err());

        config.default_city = Some("Mumbai".into());
        config.compare_city = Some("mumbai".into());
        assert!(config.validate().is_err());

        config.compare_city = Some("Kolkata".into());
        assert!(config.validate().is_ok());

        config.cities.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = OpenWeatherMapConfig::new("super-secret");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn explicit_missing_path_errors() {
        let result = Config::load(Some(PathBuf::from("/nonexistent/urbanpulse.yaml")));
        assert!(matches!(result, Err(UrbanPulseError::Config(_))));
    }
}
