use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub policy: PolicyConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Placeholder values substituted for fields a caller leaves out
#[derive(Debug, Clone, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_email")]
    pub email: String,
    #[serde(default = "default_age")]
    pub age: u32,
    #[serde(default = "default_password")]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PolicyConfig {
    /// Probability in [0, 1] that an add is stored. 1.0 accepts every
    /// candidate; 0.9 reproduces the legacy random gate.
    #[serde(default = "default_acceptance_probability")]
    pub acceptance_probability: f64,
    /// Compare supplied passwords against stored credentials on
    /// authentication. Off by default: records added without a credential
    /// have nothing to compare against.
    #[serde(default)]
    pub verify_passwords: bool,
    /// Treat an out-of-range removal position as an error instead of a
    /// silent no-op.
    #[serde(default = "default_strict_removal")]
    pub strict_removal: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default = "default_console")]
    pub console: bool,
}

// Default value functions
fn default_name() -> String {
    "x".to_string()
}

fn default_email() -> String {
    "x@x.com".to_string()
}

fn default_age() -> u32 {
    0
}

fn default_password() -> String {
    "123".to_string()
}

fn default_acceptance_probability() -> f64 {
    1.0
}

fn default_strict_removal() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

fn default_console() -> bool {
    false
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            email: default_email(),
            age: default_age(),
            password: default_password(),
        }
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            acceptance_probability: default_acceptance_probability(),
            verify_passwords: false,
            strict_removal: default_strict_removal(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            console: default_console(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            defaults: DefaultsConfig::default(),
            policy: PolicyConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse config file")?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Validate defaults config
        if self.defaults.name.is_empty() {
            bail!("defaults.name must not be empty");
        }

        if self.defaults.email.is_empty() {
            bail!("defaults.email must not be empty");
        }

        // Validate policy config
        if !(0.0..=1.0).contains(&self.policy.acceptance_probability) {
            bail!(
                "acceptance_probability ({}) must be between 0.0 and 1.0",
                self.policy.acceptance_probability
            );
        }

        // Validate logging config
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            bail!(
                "Invalid log level '{}'. Must be one of: trace, debug, info, warn, error",
                self.logging.level
            );
        }

        let valid_formats = ["json", "console"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            bail!(
                "Invalid log format '{}'. Must be one of: json, console",
                self.logging.format
            );
        }

        Ok(())
    }
}
