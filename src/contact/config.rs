use thiserror::Error;

pub const DEFAULT_API_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

pub const SERVICE_ID_KEY: &str = "EMAILJS_SERVICE_ID";
pub const TEMPLATE_ID_KEY: &str = "EMAILJS_TEMPLATE_ID";
pub const PUBLIC_KEY_KEY: &str = "EMAILJS_PUBLIC_KEY";
pub const API_URL_KEY: &str = "EMAILJS_API_URL";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing email provider setting: {0}")]
    Missing(&'static str),
}

/// Identifiers for the email provider account.
///
/// None of these are secrets in the strict sense (the public key ships in the
/// WASM bundle), but they belong to the deployment and not to the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub api_url: String,
}

impl ProviderConfig {
    pub fn new(
        service_id: impl Into<String>,
        template_id: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Self {
        Self {
            service_id: service_id.into(),
            template_id: template_id.into(),
            public_key: public_key.into(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Build a config from any key/value source. Empty values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(key))
        };
        let config = Self::new(
            required(SERVICE_ID_KEY)?,
            required(TEMPLATE_ID_KEY)?,
            required(PUBLIC_KEY_KEY)?,
        );
        Ok(match required(API_URL_KEY) {
            Ok(url) => config.with_api_url(url),
            Err(_) => config,
        })
    }

    /// Settings baked in at build time, so the server and the WASM bundle agree.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            let value = match key {
                SERVICE_ID_KEY => option_env!("EMAILJS_SERVICE_ID"),
                TEMPLATE_ID_KEY => option_env!("EMAILJS_TEMPLATE_ID"),
                PUBLIC_KEY_KEY => option_env!("EMAILJS_PUBLIC_KEY"),
                API_URL_KEY => option_env!("EMAILJS_API_URL"),
                _ => None,
            };
            value.map(str::to_string)
        })
    }
}
