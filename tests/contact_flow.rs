use std::cell::Cell;

use portfolio_site::contact::{
    ConfigError, ContactForm, DeliveryError, EmailJsProvider, EmailProvider, FormFields,
    SubmissionStatus, SubmitError, FAILED_MESSAGE, SENT_MESSAGE,
};

/// Accepts every message.
#[derive(Default)]
struct AlwaysOk {
    calls: Cell<usize>,
}

impl EmailProvider for AlwaysOk {
    async fn send(&self, _fields: &FormFields) -> Result<(), DeliveryError> {
        self.calls.set(self.calls.get() + 1);
        Ok(())
    }
}

/// Rejects every message.
struct AlwaysFail;

impl EmailProvider for AlwaysFail {
    async fn send(&self, _fields: &FormFields) -> Result<(), DeliveryError> {
        Err(DeliveryError::Transport("connection refused".to_string()))
    }
}

fn ada() -> FormFields {
    FormFields::new("Ada", "ada@example.com", "Hi", "Hello")
}

#[tokio::test]
async fn test_ada_submits_successfully() {
    let provider = AlwaysOk::default();
    let mut form = ContactForm::new();
    form.fields = ada();
    assert_eq!(form.status, SubmissionStatus::Idle);

    let status = form.submit(&provider).await.unwrap();

    assert_eq!(status, SubmissionStatus::Success);
    assert_eq!(form.fields.name, "");
    assert_eq!(form.fields.email, "");
    assert_eq!(form.fields.subject, "");
    assert_eq!(form.fields.message, "");
    assert_eq!(form.status.notice(), Some(SENT_MESSAGE));
    assert_eq!(provider.calls.get(), 1);
}

#[tokio::test]
async fn test_failure_then_retry() {
    let mut form = ContactForm::new();
    form.fields = ada();

    let status = form.submit(&AlwaysFail).await.unwrap();
    assert_eq!(status, SubmissionStatus::Error);
    assert_eq!(form.fields, ada());
    assert_eq!(form.status.notice(), Some(FAILED_MESSAGE));

    let provider = AlwaysOk::default();
    let status = form.submit(&provider).await.unwrap();
    assert_eq!(status, SubmissionStatus::Success);
    assert!(form.fields.is_empty());
}

#[tokio::test]
async fn test_split_submit_blocks_second_attempt() {
    let provider = AlwaysOk::default();
    let mut form = ContactForm::new();
    form.fields = ada();

    // what the page does: begin, hand off to a task, settle later
    let pending = form.begin().unwrap();
    assert_eq!(form.status, SubmissionStatus::Sending);
    assert_eq!(form.status.button_label(), "Sending...");

    assert!(matches!(form.begin(), Err(SubmitError::AlreadySending)));
    assert!(matches!(
        form.submit(&provider).await,
        Err(SubmitError::AlreadySending)
    ));
    assert_eq!(provider.calls.get(), 0);

    let outcome = provider.send(&pending).await;
    assert_eq!(form.settle(outcome), SubmissionStatus::Success);
    assert_eq!(provider.calls.get(), 1);
}

#[tokio::test]
async fn test_unconfigured_provider_ends_in_error() {
    let provider =
        EmailJsProvider::with_config(Err(ConfigError::Missing("EMAILJS_TEMPLATE_ID")));
    let mut form = ContactForm::new();
    form.fields = ada();

    let status = form.submit(&provider).await.unwrap();

    assert_eq!(status, SubmissionStatus::Error);
    assert_eq!(form.status, SubmissionStatus::Error);
    assert_eq!(form.fields, ada());
    assert_eq!(form.status.notice(), Some(FAILED_MESSAGE));
}

#[tokio::test]
async fn test_long_local_part_is_sent() {
    let provider = AlwaysOk::default();
    let mut form = ContactForm::new();
    form.fields = FormFields::new("Ada", format!("{}@example.com", "a".repeat(65)), "", "");

    let status = form.submit(&provider).await.unwrap();

    assert_eq!(status, SubmissionStatus::Success);
    assert_eq!(provider.calls.get(), 1);
}
