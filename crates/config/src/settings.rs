//! Main settings module

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

pub const DEFAULT_LANGUAGE_CODE: &str = "en";

/// Client settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Language code sent with every language-aware request
    #[serde(default = "default_language_code")]
    pub language_code: String,

    /// Overrides for the AWS SDK's ambient configuration
    #[serde(default)]
    pub aws: AwsSettings,
}

/// AWS connection overrides
///
/// Every field is optional; anything left unset falls back to the SDK's
/// default chain (environment, shared config files, instance metadata).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AwsSettings {
    /// Region, e.g. "us-east-1"
    #[serde(default)]
    pub region: Option<String>,

    /// Named profile from the shared config files
    #[serde(default)]
    pub profile: Option<String>,

    /// Custom endpoint (local emulators, VPC endpoints)
    #[serde(default)]
    pub endpoint_url: Option<String>,
}

fn default_language_code() -> String {
    DEFAULT_LANGUAGE_CODE.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language_code: default_language_code(),
            aws: AwsSettings::default(),
        }
    }
}

impl Settings {
    /// Create default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Settings for a specific language, everything else default
    pub fn with_language(language_code: impl Into<String>) -> Self {
        Self {
            language_code: language_code.into(),
            ..Self::default()
        }
    }

    /// Parse settings from an inline TOML document and validate them
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?;
        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_language_code(&self.language_code)?;
        self.validate_aws()?;
        Ok(())
    }

    fn validate_aws(&self) -> Result<(), ConfigError> {
        if let Some(region) = &self.aws.region {
            if region.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "aws.region".to_string(),
                    message: "Region cannot be blank".to_string(),
                });
            }
        }

        if let Some(url) = &self.aws.endpoint_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidValue {
                    field: "aws.endpoint_url".to_string(),
                    message: format!("Must start with http:// or https://, got {}", url),
                });
            }
        }

        Ok(())
    }
}

/// Accepts a primary tag of ASCII letters with an optional region subtag,
/// e.g. "en", "de", "zh-TW"
fn validate_language_code(code: &str) -> Result<(), ConfigError> {
    let invalid = |message: String| ConfigError::InvalidValue {
        field: "language_code".to_string(),
        message,
    };

    if code.is_empty() {
        return Err(invalid("Language code cannot be empty".to_string()));
    }

    let mut parts = code.split('-');
    let primary = parts.next().unwrap_or_default();
    if !(2..=3).contains(&primary.len()) || !primary.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(invalid(format!("Unrecognized language code: {}", code)));
    }

    match (parts.next(), parts.next()) {
        (None, None) => Ok(()),
        (Some(region), None)
            if !region.is_empty() && region.chars().all(|c| c.is_ascii_alphanumeric()) =>
        {
            Ok(())
        }
        _ => Err(invalid(format!("Unrecognized language code: {}", code))),
    }
}

/// Load settings from files and environment
///
/// Layering, later sources win:
/// 1. `config/default.{toml,yaml,json}` (optional)
/// 2. `config/{env}.{toml,yaml,json}` (optional)
/// 3. `COMPREHEND__LANGUAGE_CODE`, `COMPREHEND__AWS__REGION`, ...
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    builder = builder.add_source(File::with_name("config/default").required(false));

    if let Some(env_name) = env {
        builder =
            builder.add_source(File::with_name(&format!("config/{}", env_name)).required(false));
    }

    builder = builder.add_source(
        Environment::with_prefix("COMPREHEND")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    settings.validate()?;

    tracing::debug!(
        language_code = %settings.language_code,
        region = ?settings.aws.region,
        "Loaded client settings"
    );

    Ok(settings)
}
