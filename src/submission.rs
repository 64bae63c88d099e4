use std::rc::Rc;

use async_trait::async_trait;
#[cfg(target_arch = "wasm32")]
use gloo_timers::future::TimeoutFuture;
use thiserror::Error;

use crate::validation::{validate_form, ContactForm, FieldSpec, FormValidation};

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("contact delivery failed: {0}")]
    Delivery(String),
}

/// Delivers a validated contact message. The page never talks to a mail
/// endpoint itself; whoever mounts the app decides what delivery means.
#[async_trait(?Send)]
pub trait ContactSubmitter {
    async fn submit(&self, form: &ContactForm) -> Result<(), SubmitError>;
}

/// Context handle so components can reach the injected submitter.
#[derive(Clone)]
pub struct SubmitterHandle(pub Rc<dyn ContactSubmitter>);

impl SubmitterHandle {
    pub fn new(submitter: impl ContactSubmitter + 'static) -> Self {
        Self(Rc::new(submitter))
    }
}

/// Pretends to send after a fixed delay. Succeeds unless `fail_with` is set,
/// in which case every delivery reports that message.
#[derive(Clone, Debug, Default)]
pub struct SimulatedSubmitter {
    pub delay_ms: u32,
    pub fail_with: Option<String>,
}

#[async_trait(?Send)]
impl ContactSubmitter for SimulatedSubmitter {
    async fn submit(&self, form: &ContactForm) -> Result<(), SubmitError> {
        tracing::debug!(
            "contact: simulating delivery for {} ({} ms)",
            form.email.trim(),
            self.delay_ms
        );
        #[cfg(target_arch = "wasm32")]
        TimeoutFuture::new(self.delay_ms).await;
        match &self.fail_with {
            Some(reason) => Err(SubmitError::Delivery(reason.clone())),
            None => Ok(()),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Sending,
    Sent,
}

impl SubmitPhase {
    pub fn label(self) -> &'static str {
        match self {
            SubmitPhase::Idle => "Send Message",
            SubmitPhase::Sending => "Sending...",
            SubmitPhase::Sent => "Message Sent!",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            SubmitPhase::Idle => "fas fa-paper-plane",
            SubmitPhase::Sending => "fas fa-spinner fa-spin",
            SubmitPhase::Sent => "fas fa-check",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            SubmitPhase::Idle => "submit-btn",
            SubmitPhase::Sending => "submit-btn loading",
            SubmitPhase::Sent => "submit-btn success",
        }
    }

    pub fn is_disabled(self) -> bool {
        self != SubmitPhase::Idle
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Invalid(FormValidation),
    Delivered,
    Failed(SubmitError),
}

/// Validates every required field and only hands the form to the submitter
/// when all of them pass.
pub async fn submit_contact<S>(fields: &[FieldSpec], form: &ContactForm, submitter: &S) -> SubmitOutcome
where
    S: ContactSubmitter + ?Sized,
{
    let validation = validate_form(fields, form);
    if !validation.is_valid() {
        tracing::debug!(
            "contact: {} field(s) failed validation",
            validation.errors().count()
        );
        return SubmitOutcome::Invalid(validation);
    }
    match submitter.submit(form).await {
        Ok(()) => SubmitOutcome::Delivered,
        Err(err) => {
            tracing::warn!("{err}");
            SubmitOutcome::Failed(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::validation::CONTACT_FIELDS;
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct RecordingSubmitter {
        sent: RefCell<Vec<ContactForm>>,
        fail: bool,
    }

    #[async_trait(?Send)]
    impl ContactSubmitter for RecordingSubmitter {
        async fn submit(&self, form: &ContactForm) -> Result<(), SubmitError> {
            self.sent.borrow_mut().push(form.clone());
            if self.fail {
                return Err(SubmitError::Delivery("mailbox full".into()));
            }
            Ok(())
        }
    }

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            subject: String::new(),
            message: "This message is definitely long enough.".into(),
        }
    }

    #[tokio::test]
    async fn invalid_form_never_reaches_submitter() {
        let submitter = RecordingSubmitter::default();
        let form = ContactForm {
            name: "A".into(),
            email: "bad".into(),
            subject: String::new(),
            message: "short".into(),
        };
        let outcome = submit_contact(&CONTACT_FIELDS, &form, &submitter).await;
        match outcome {
            SubmitOutcome::Invalid(validation) => assert_eq!(validation.errors().count(), 3),
            other => panic!("unexpected outcome {other:?}"),
        }
        assert!(submitter.sent.borrow().is_empty());
    }

    #[tokio::test]
    async fn valid_form_is_delivered() {
        let submitter = RecordingSubmitter::default();
        let outcome = submit_contact(&CONTACT_FIELDS, &valid_form(), &submitter).await;
        assert_eq!(outcome, SubmitOutcome::Delivered);
        assert_eq!(submitter.sent.borrow().as_slice(), &[valid_form()]);
    }

    #[tokio::test]
    async fn delivery_failure_is_reported() {
        let submitter = RecordingSubmitter {
            fail: true,
            ..Default::default()
        };
        let outcome = submit_contact(&CONTACT_FIELDS, &valid_form(), &submitter).await;
        assert_eq!(
            outcome,
            SubmitOutcome::Failed(SubmitError::Delivery("mailbox full".into()))
        );
    }

    #[tokio::test]
    async fn simulated_submitter_succeeds_through_handle() {
        let handle = SubmitterHandle::new(SimulatedSubmitter {
            delay_ms: 2000,
            fail_with: None,
        });
        let outcome = submit_contact(&CONTACT_FIELDS, &valid_form(), handle.0.as_ref()).await;
        assert_eq!(outcome, SubmitOutcome::Delivered);
    }

    #[tokio::test]
    async fn simulated_submitter_can_be_told_to_fail() {
        let submitter = SimulatedSubmitter {
            fail_with: Some("smtp relay unavailable".into()),
            ..SimulatedSubmitter::default()
        };
        let outcome = submit_contact(&CONTACT_FIELDS, &valid_form(), &submitter).await;
        assert_eq!(
            outcome,
            SubmitOutcome::Failed(SubmitError::Delivery("smtp relay unavailable".into()))
        );
    }

    #[test]
    fn button_states() {
        assert_eq!(SubmitPhase::default().label(), "Send Message");
        assert!(!SubmitPhase::Idle.is_disabled());
        assert!(SubmitPhase::Sending.is_disabled());
        assert!(SubmitPhase::Sent.is_disabled());
        assert_eq!(SubmitPhase::Sent.label(), "Message Sent!");
        assert_eq!(SubmitPhase::Sending.css_class(), "submit-btn loading");
    }
}
