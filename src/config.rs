use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::{env, time::Duration};
use vkit_contact::{FormBinding, SimulatedTransport};
use vkit_notification::EmailConfig as SmtpConfig;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub form: FormConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FormConfig {
    #[serde(default = "default_form_id")]
    pub form_id: String,
    /// Fixed delay of the simulated submission
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,
    #[serde(default = "default_close_transition_ms")]
    pub close_transition_ms: u64,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            form_id: default_form_id(),
            submit_delay_ms: default_submit_delay_ms(),
            close_transition_ms: default_close_transition_ms(),
        }
    }
}

impl FormConfig {
    pub fn binding(&self) -> FormBinding {
        FormBinding::new(&self.form_id)
    }

    pub fn transport(&self) -> SimulatedTransport {
        SimulatedTransport::new(Duration::from_millis(self.submit_delay_ms))
    }

    pub fn close_transition(&self) -> Duration {
        Duration::from_millis(self.close_transition_ms)
    }
}

fn default_form_id() -> String {
    vkit_contact::DEFAULT_FORM_ID.to_string()
}

fn default_submit_delay_ms() -> u64 {
    1500
}

fn default_close_transition_ms() -> u64 {
    300
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    /// Mail submissions to `contact_address` instead of dropping them
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default)]
    pub smtp_username: String,
    #[serde(default)]
    pub smtp_password: String,
    #[serde(default = "default_from_address")]
    pub from_address: String,
    #[serde(default = "default_contact_address")]
    pub contact_address: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_address: default_from_address(),
            contact_address: default_contact_address(),
        }
    }
}

impl EmailConfig {
    pub fn smtp(&self) -> SmtpConfig {
        SmtpConfig {
            smtp_host: self.smtp_host.to_owned(),
            smtp_port: self.smtp_port,
            smtp_username: self.smtp_username.to_owned(),
            smtp_password: self.smtp_password.to_owned(),
            from_address: self.from_address.to_owned(),
            contact_address: self.contact_address.to_owned(),
        }
    }
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

fn default_from_address() -> String {
    "noreply@vkitsolutions.in".to_string()
}

fn default_contact_address() -> String {
    "contact@vkitsolutions.in".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (VKIT__FORM__SUBMIT_DELAY_MS, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, missing file falls back to defaults
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("VKIT")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.form.form_id.trim().is_empty() {
            return Err("Form id must not be empty".to_string());
        }
        if self.email.enabled {
            if self.email.contact_address.is_empty() {
                return Err("Email contact_address is required when email is enabled".to_string());
            }
            if self.email.from_address.is_empty() {
                return Err("Email from_address is required when email is enabled".to_string());
            }
        }
        Ok(())
    }
}
