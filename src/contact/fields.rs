use std::sync::LazyLock;

use regex::Regex;
use validator::{Validate, ValidationErrors};

/// The "valid e-mail address" pattern browsers apply to `<input type="email">`.
///
/// No cap on the local part, so anything the page lets through is accepted
/// here too.
static RE_BROWSER_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("browser email pattern compiles")
});

/// The four inputs of the contact form.
///
/// Only `name` and `email` are required, mirroring the `required` attributes on
/// the rendered inputs.
#[derive(Debug, Default, Clone, PartialEq, Eq, Validate)]
pub struct FormFields {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(regex(path = *RE_BROWSER_EMAIL))]
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormFields {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    pub fn check(&self) -> Result<(), ValidationErrors> {
        self.validate()
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.subject.clear();
        self.message.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.subject.is_empty()
            && self.message.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields_only() {
        let fields = FormFields::new("Ada", "ada@example.com", "", "");
        assert!(fields.check().is_ok());
    }

    #[test]
    fn test_missing_name() {
        let fields = FormFields::new("", "ada@example.com", "Hi", "Hello");
        let errs = fields.check().expect_err("empty name should be rejected");
        assert!(errs.field_errors().contains_key("name"));
        assert!(!errs.field_errors().contains_key("email"));
    }

    #[test]
    fn test_bad_email() {
        for email in ["", "ada", "ada@", "@example.com", "ada example.com"] {
            let fields = FormFields::new("Ada", email, "", "");
            let errs = fields
                .check()
                .expect_err("malformed email should be rejected");
            assert!(errs.field_errors().contains_key("email"), "{email}");
        }
    }

    #[test]
    fn test_email_accepted_as_browser_does() {
        let long_local = format!("{}@example.com", "a".repeat(65));
        for email in [
            "ada@example.com",
            "ada@localhost",
            "ada.lovelace+notes@mail.example.co.uk",
            long_local.as_str(),
        ] {
            let fields = FormFields::new("Ada", email, "", "");
            assert!(fields.check().is_ok(), "{email}");
        }
    }

    #[test]
    fn test_clear() {
        let mut fields = FormFields::new("Ada", "ada@example.com", "Hi", "Hello\nthere");
        assert!(!fields.is_empty());
        fields.clear();
        assert!(fields.is_empty());
        assert_eq!(fields, FormFields::default());
    }
}
