use super::{DeliveryError, SubmitError};

pub const SENT_MESSAGE: &str = "✅ Your message has been sent!";
pub const FAILED_MESSAGE: &str = "❌ Failed to send. Try again later.";

/// Where a contact form is in its submission cycle.
///
/// `Idle` only exists before the first attempt. After that the form moves
/// `Sending` -> `Success | Error` per attempt and can always be submitted again
/// once it has settled.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

impl SubmissionStatus {
    pub fn is_sending(&self) -> bool {
        matches!(self, Self::Sending)
    }

    /// Start a new attempt. Refused while one is already in flight.
    pub fn begin(&mut self) -> Result<(), SubmitError> {
        if self.is_sending() {
            return Err(SubmitError::AlreadySending);
        }
        *self = Self::Sending;
        Ok(())
    }

    /// Record the provider's answer for the attempt in flight.
    ///
    /// Returns false (and changes nothing) when no attempt is in flight.
    pub fn settle(&mut self, outcome: &Result<(), DeliveryError>) -> bool {
        if !self.is_sending() {
            return false;
        }
        *self = match outcome {
            Ok(()) => Self::Success,
            Err(_) => Self::Error,
        };
        true
    }

    /// The notice shown under the form, if any.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            Self::Success => Some(SENT_MESSAGE),
            Self::Error => Some(FAILED_MESSAGE),
            Self::Idle | Self::Sending => None,
        }
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_sending() {
            "Sending..."
        } else {
            "Send Message"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_status_is_idle() {
        let status = SubmissionStatus::default();
        assert_eq!(status, SubmissionStatus::Idle);
        assert_eq!(status.notice(), None);
        assert_eq!(status.button_label(), "Send Message");
    }

    #[test]
    fn test_begin_moves_to_sending() {
        let mut status = SubmissionStatus::Idle;
        assert!(status.begin().is_ok());
        assert_eq!(status, SubmissionStatus::Sending);
        assert_eq!(status.button_label(), "Sending...");
    }

    #[test]
    fn test_begin_refused_while_sending() {
        let mut status = SubmissionStatus::Sending;
        assert!(matches!(status.begin(), Err(SubmitError::AlreadySending)));
        assert_eq!(status, SubmissionStatus::Sending);
    }

    #[test]
    fn test_settled_states_can_resubmit() {
        for settled in [SubmissionStatus::Success, SubmissionStatus::Error] {
            let mut status = settled;
            assert!(status.begin().is_ok());
            assert_eq!(status, SubmissionStatus::Sending);
        }
    }

    #[test]
    fn test_settle_success_and_failure() {
        let mut status = SubmissionStatus::Sending;
        assert!(status.settle(&Ok(())));
        assert_eq!(status, SubmissionStatus::Success);
        assert_eq!(status.notice(), Some(SENT_MESSAGE));

        let mut status = SubmissionStatus::Sending;
        let failure = Err(DeliveryError::Transport("connection reset".to_string()));
        assert!(status.settle(&failure));
        assert_eq!(status, SubmissionStatus::Error);
        assert_eq!(status.notice(), Some(FAILED_MESSAGE));
    }

    #[test]
    fn test_settle_ignored_without_attempt() {
        let mut status = SubmissionStatus::Idle;
        assert!(!status.settle(&Ok(())));
        assert_eq!(status, SubmissionStatus::Idle);

        let mut status = SubmissionStatus::Error;
        assert!(!status.settle(&Ok(())));
        assert_eq!(status, SubmissionStatus::Error);
    }
}
