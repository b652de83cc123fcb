use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use progress_bar_core::ProgressConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Prefix for environment overrides, e.g. `PROGRESS_BAR_PROGRESS__MIN_BAR_WIDTH=5`
pub const ENV_PREFIX: &str = "PROGRESS_BAR_";

/// Keys accepted by `config set`
pub const KNOWN_KEYS: &[&str] = &[
    "progress.terminal_width",
    "progress.fallback_width",
    "progress.min_bar_width",
    "output.color_enabled",
    "output.progress_enabled",
    "output.redraw",
];

#[derive(Deserialize, Serialize, Debug, Default, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub progress: ProgressConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub color_enabled: bool,
    pub progress_enabled: bool,
    /// Redraw one row in place on interactive terminals
    pub redraw: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color_enabled: true,
            progress_enabled: true,
            redraw: true,
        }
    }
}

impl AppConfig {
    /// Apply CLI argument overrides to the configuration
    pub fn apply_cli_overrides(&mut self, terminal_width: Option<usize>) {
        if let Some(width) = terminal_width {
            self.progress.terminal_width = Some(width);
        }
    }
}

/// Configuration manager that handles XDG-compliant paths and layered configuration
pub struct ConfigManager {
    config_path: PathBuf,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    /// Create a new ConfigManager with the default path
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
        }
    }

    /// Create a ConfigManager with a specific path
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Get the configuration file path
    pub fn get_config_path(&self) -> PathBuf {
        self.config_path.clone()
    }

    /// Get the default configuration path
    fn default_config_path() -> PathBuf {
        // XDG_CONFIG_HOME wins on every platform but Windows
        #[cfg(not(target_os = "windows"))]
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config).join("progress-bar/config.toml");
        }

        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("progress-bar")
            .join("config.toml")
    }

    /// Load configuration with layered priority: ENV > File > Defaults
    ///
    /// The result is validated; CLI overrides are applied by the caller.
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new();

        // Layer 1: Defaults
        figment = figment.merge(Serialized::defaults(AppConfig::default()));

        // Layer 2: Config file (if exists)
        if self.config_path.exists() {
            figment = figment.merge(Toml::file(&self.config_path));
        }

        // Layer 3: Environment variables
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: AppConfig = figment.extract().context("Failed to load configuration")?;
        config
            .progress
            .validate()
            .with_context(|| format!("Invalid configuration in {}", self.config_path.display()))?;

        log::debug!("Loaded configuration: {config:?}");
        Ok(config)
    }

    /// Get a configuration value by key (dot notation)
    pub fn get(&self, key: &str) -> Result<String> {
        let value = toml::Value::Table(Self::to_table(&self.load()?)?);

        let mut current = &value;
        for part in key.split('.') {
            match current {
                toml::Value::Table(table) => {
                    current = table
                        .get(part)
                        .ok_or_else(|| anyhow::anyhow!("Key '{}' is not set", key))?;
                }
                _ => anyhow::bail!("Invalid key path: {}", key),
            }
        }

        match current {
            toml::Value::String(s) => Ok(s.clone()),
            toml::Value::Integer(i) => Ok(i.to_string()),
            toml::Value::Float(f) => Ok(f.to_string()),
            toml::Value::Boolean(b) => Ok(b.to_string()),
            _ => anyhow::bail!("Value at '{}' is not a simple type", key),
        }
    }

    /// Set a configuration value by key (dot notation)
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        Self::validate_config_value(key, value)?;

        let mut config: toml::Table = if self.config_path.exists() {
            let content = fs::read_to_string(&self.config_path)?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse {}", self.config_path.display()))?
        } else {
            toml::Table::new()
        };

        let parts: Vec<&str> = key.split('.').collect();
        let Some((last, parents)) = parts.split_last() else {
            anyhow::bail!("Empty key");
        };

        // Navigate to the parent table, creating it when missing
        let mut table = &mut config;
        for part in parents {
            let entry = table
                .entry(part.to_string())
                .or_insert(toml::Value::Table(toml::Table::new()));
            table = match entry {
                toml::Value::Table(inner) => inner,
                _ => anyhow::bail!("Invalid key path: expected table at '{}'", part),
            };
        }
        table.insert(last.to_string(), Self::parse_config_value(key, value)?);

        let toml_string = toml::to_string_pretty(&config)?;
        Self::validate_document(&toml_string)
            .with_context(|| format!("Refusing to set {key} = {value}"))?;

        // Ensure directory exists
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.config_path, toml_string)?;
        log::debug!("Set {key} = {value} in {}", self.config_path.display());

        Ok(())
    }

    /// List all configuration values
    pub fn list(&self) -> Result<Vec<(String, String)>> {
        let value = toml::Value::Table(Self::to_table(&self.load()?)?);

        let mut items = Vec::new();
        Self::collect_values(&value, String::new(), &mut items);
        items.sort_by(|a, b| a.0.cmp(&b.0));

        Ok(items)
    }

    fn to_table(config: &AppConfig) -> Result<toml::Table> {
        let toml_string = toml::to_string(config)?;
        Ok(toml::from_str(&toml_string)?)
    }

    /// Recursively collect all key-value pairs from TOML
    fn collect_values(value: &toml::Value, prefix: String, items: &mut Vec<(String, String)>) {
        match value {
            toml::Value::Table(table) => {
                for (key, val) in table {
                    let new_prefix = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{prefix}.{key}")
                    };
                    Self::collect_values(val, new_prefix, items);
                }
            }
            toml::Value::String(s) => items.push((prefix, s.clone())),
            toml::Value::Integer(i) => items.push((prefix, i.to_string())),
            toml::Value::Float(f) => items.push((prefix, f.to_string())),
            toml::Value::Boolean(b) => items.push((prefix, b.to_string())),
            _ => {} // Skip arrays and other complex types
        }
    }

    /// Validate a configuration value
    fn validate_config_value(key: &str, value: &str) -> Result<()> {
        match key {
            "progress.terminal_width" | "progress.fallback_width" | "progress.min_bar_width" => {
                let width: usize = value
                    .parse()
                    .with_context(|| format!("{key} must be a positive integer"))?;
                if width == 0 {
                    anyhow::bail!("{} must be greater than 0", key);
                }
            }
            "output.color_enabled" | "output.progress_enabled" | "output.redraw" => {
                let _: bool = value.parse().context("Value must be 'true' or 'false'")?;
            }
            _ => anyhow::bail!(
                "Unknown configuration key '{}' (known keys: {})",
                key,
                KNOWN_KEYS.join(", ")
            ),
        }
        Ok(())
    }

    /// Check that a whole document still loads once its values are combined
    fn validate_document(document: &str) -> Result<()> {
        let config: AppConfig = Figment::new()
            .merge(Serialized::defaults(AppConfig::default()))
            .merge(Toml::string(document))
            .extract()
            .context("Failed to parse updated configuration")?;
        config.progress.validate()?;
        Ok(())
    }

    /// Parse a value to the appropriate TOML type
    fn parse_config_value(key: &str, value: &str) -> Result<toml::Value> {
        if key.ends_with("_width") {
            let num: i64 = value.parse().context("Expected integer value")?;
            Ok(toml::Value::Integer(num))
        } else {
            let bool_val: bool = value
                .parse()
                .context("Expected boolean value (true/false)")?;
            Ok(toml::Value::Boolean(bool_val))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_config() {
        let output = OutputConfig::default();
        assert!(output.color_enabled);
        assert!(output.progress_enabled);
        assert!(output.redraw);
    }

    #[test]
    fn test_cli_override_sets_width() {
        let mut config = AppConfig::default();
        config.apply_cli_overrides(None);
        assert_eq!(config.progress.terminal_width, None);

        config.apply_cli_overrides(Some(132));
        assert_eq!(config.progress.terminal_width, Some(132));
    }

    #[test]
    fn test_validate_config_value() {
        assert!(ConfigManager::validate_config_value("progress.min_bar_width", "4").is_ok());
        assert!(ConfigManager::validate_config_value("progress.min_bar_width", "0").is_err());
        assert!(ConfigManager::validate_config_value("progress.fallback_width", "wide").is_err());
        assert!(ConfigManager::validate_config_value("output.redraw", "false").is_ok());
        assert!(ConfigManager::validate_config_value("output.redraw", "maybe").is_err());
        assert!(ConfigManager::validate_config_value("output.unknown", "true").is_err());
    }

    #[test]
    fn test_validate_document() {
        assert!(ConfigManager::validate_document("").is_ok());
        assert!(ConfigManager::validate_document("[progress]\nmin_bar_width = 79\n").is_ok());
        assert!(ConfigManager::validate_document("[progress]\nmin_bar_width = 80\n").is_err());
        let mismatched = "[progress]\nfallback_width = 40\nmin_bar_width = 50\n";
        assert!(ConfigManager::validate_document(mismatched).is_err());
    }

    #[test]
    fn test_parse_config_value() {
        assert_eq!(
            ConfigManager::parse_config_value("progress.terminal_width", "120").unwrap(),
            toml::Value::Integer(120)
        );
        assert_eq!(
            ConfigManager::parse_config_value("output.color_enabled", "false").unwrap(),
            toml::Value::Boolean(false)
        );
    }
}
