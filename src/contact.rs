mod config;
mod fields;
mod provider;
mod status;

pub use config::{ConfigError, ProviderConfig, DEFAULT_API_URL};
pub use fields::FormFields;
pub use provider::{DeliveryError, EmailJsProvider, EmailProvider, SendRequest, TemplateParams};
pub use status::{SubmissionStatus, FAILED_MESSAGE, SENT_MESSAGE};

use thiserror::Error;
use validator::ValidationErrors;

/// Reasons a submit never reaches the provider.
#[derive(Error, Debug, Clone)]
pub enum SubmitError {
    #[error("a message is already being sent")]
    AlreadySending,
    #[error("form is incomplete: {0}")]
    Invalid(#[from] ValidationErrors),
}

/// State of one rendered contact form.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub status: SubmissionStatus,
    pub fields: FormFields,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// First half of a submit: check the form and mark it as sending.
    ///
    /// Returns the snapshot of fields to hand to the provider. On error the
    /// form is left exactly as it was.
    pub fn begin(&mut self) -> Result<FormFields, SubmitError> {
        if self.status.is_sending() {
            return Err(SubmitError::AlreadySending);
        }
        self.fields.check()?;
        self.status.begin()?;
        log::debug!("sending contact message from {}", self.fields.email);
        Ok(self.fields.clone())
    }

    /// Second half of a submit: apply the provider's answer.
    pub fn settle(&mut self, outcome: Result<(), DeliveryError>) -> SubmissionStatus {
        if !self.status.settle(&outcome) {
            log::warn!("ignoring delivery result with no submission in flight");
            return self.status;
        }
        match outcome {
            Ok(()) => {
                log::info!("contact message sent");
                self.fields.clear();
            }
            Err(e) => log::warn!("contact message failed: {e}"),
        }
        self.status
    }

    /// Run one full attempt against `provider`.
    ///
    /// The UI splits this into `begin` and `settle` around a spawned task
    /// instead, since it can't hold the form borrowed across the await.
    pub async fn submit<P: EmailProvider>(
        &mut self,
        provider: &P,
    ) -> Result<SubmissionStatus, SubmitError> {
        let fields = self.begin()?;
        let outcome = provider.send(&fields).await;
        Ok(self.settle(outcome))
    }
}
