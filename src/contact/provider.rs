use http::StatusCode;
use serde::Serialize;
use thiserror::Error;

use super::{ConfigError, FormFields, ProviderConfig};

#[derive(Error, Debug, Clone)]
pub enum DeliveryError {
    #[error(transparent)]
    Unconfigured(#[from] ConfigError),
    #[error("could not reach email provider: {0}")]
    Transport(String),
    #[error("email provider rejected message ({status}): {body}")]
    Rejected { status: StatusCode, body: String },
}

impl From<reqwest::Error> for DeliveryError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

/// Something that can deliver a contact message.
///
/// The future is awaited on the UI thread, so implementations don't need to
/// be `Send`.
#[allow(async_fn_in_trait)]
pub trait EmailProvider {
    async fn send(&self, fields: &FormFields) -> Result<(), DeliveryError>;
}

/// Field names the email template refers to.
#[derive(Debug, Serialize)]
pub struct TemplateParams<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub title: &'a str,
    pub message: &'a str,
}

impl<'a> From<&'a FormFields> for TemplateParams<'a> {
    fn from(fields: &'a FormFields) -> Self {
        Self {
            name: &fields.name,
            email: &fields.email,
            title: &fields.subject,
            message: &fields.message,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SendRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: TemplateParams<'a>,
}

impl<'a> SendRequest<'a> {
    pub fn new(config: &'a ProviderConfig, fields: &'a FormFields) -> Self {
        Self {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            template_params: fields.into(),
        }
    }
}

/// Delivers messages through the EmailJS REST API.
pub struct EmailJsProvider {
    config: Result<ProviderConfig, ConfigError>,
    client: reqwest::Client,
}

impl EmailJsProvider {
    pub fn new(config: ProviderConfig) -> Self {
        Self::with_config(Ok(config))
    }

    /// A missing setting is kept and reported on every `send`, so the form
    /// still renders and fails the way any other delivery failure does.
    pub fn with_config(config: Result<ProviderConfig, ConfigError>) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Provider built from the build-time settings.
    pub fn from_env() -> Self {
        Self::with_config(ProviderConfig::from_env())
    }
}

impl EmailProvider for EmailJsProvider {
    async fn send(&self, fields: &FormFields) -> Result<(), DeliveryError> {
        let config = self.config.as_ref().map_err(|e| e.clone())?;
        let res = self
            .client
            .post(&config.api_url)
            .json(&SendRequest::new(config, fields))
            .send()
            .await?;
        let status = res.status();
        if status.is_success() {
            return Ok(());
        }
        let body = res.text().await.unwrap_or_default();
        Err(DeliveryError::Rejected { status, body })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_send_request_shape() {
        let config = ProviderConfig::new("service_x", "template_y", "public_z");
        let fields = FormFields::new("Ada", "ada@example.com", "Hi", "Hello");
        let body = serde_json::to_value(SendRequest::new(&config, &fields)).unwrap();
        assert_eq!(
            body,
            json!({
                "service_id": "service_x",
                "template_id": "template_y",
                "user_id": "public_z",
                "template_params": {
                    "name": "Ada",
                    "email": "ada@example.com",
                    "title": "Hi",
                    "message": "Hello",
                }
            })
        );
    }

    #[tokio::test]
    async fn test_unconfigured_provider_fails_without_request() {
        let provider =
            EmailJsProvider::with_config(Err(ConfigError::Missing("EMAILJS_SERVICE_ID")));
        let fields = FormFields::new("Ada", "ada@example.com", "", "");
        let err = provider.send(&fields).await.unwrap_err();
        assert!(matches!(
            err,
            DeliveryError::Unconfigured(ConfigError::Missing("EMAILJS_SERVICE_ID"))
        ));
    }

    #[test]
    fn test_rejection_message() {
        let err = DeliveryError::Rejected {
            status: StatusCode::BAD_REQUEST,
            body: "The template ID is invalid".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "email provider rejected message (400 Bad Request): The template ID is invalid"
        );
    }
}
