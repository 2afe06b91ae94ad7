//! Contact form controller: draft, in-flight flag and the resulting notice.

use serde::Serialize;
use showroom_content::BUSINESS;

use crate::draft::{ContactDraft, ContactSubmission, Field, UnknownInquiryType, ValidationError};
use crate::transport::{ContactTransport, SubmitError};

pub const MSG_SENT: &str = "Thank you! We will contact you soon.";
pub const MSG_MISSING_FIELDS: &str = "Please fill in all required fields";
pub const MSG_REJECTED: &str =
    "We couldn't accept your message. Please check your details or try WhatsApp instead.";
pub const MSG_FAILED: &str = "Something went wrong. Please try WhatsApp instead.";
pub const MSG_BUSY: &str = "Your message is still being sent.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

/// Follow-up link offered with a notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoticeAction {
    pub label: &'static str,
    pub url: String,
}

/// The transient toast shown after a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: &'static str,
    pub action: Option<NoticeAction>,
}

impl Notice {
    pub fn success(message: &'static str) -> Self {
        Self {
            kind: NoticeKind::Success,
            message,
            action: None,
        }
    }

    pub fn error(message: &'static str) -> Self {
        Self {
            kind: NoticeKind::Error,
            message,
            action: None,
        }
    }

    /// Attach the chat fallback link.
    pub fn with_chat_fallback(mut self) -> Self {
        self.action = Some(NoticeAction {
            label: "Message on WhatsApp",
            url: BUSINESS.whatsapp_url(),
        });
        self
    }
}

/// What happened to one submit attempt.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The backend acknowledged the submission; the draft was cleared.
    Sent,
    /// Required fields were empty; nothing was sent.
    Invalid(ValidationError),
    /// A submission from this form is already in flight; nothing was sent.
    Busy,
    /// Delivery failed; the draft is unchanged.
    Failed(SubmitError),
}

impl SubmitOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, SubmitOutcome::Sent)
    }

    /// The notice to show for this outcome.
    pub fn notice(&self) -> Notice {
        match self {
            SubmitOutcome::Sent => Notice::success(MSG_SENT),
            SubmitOutcome::Invalid(_) => Notice::error(MSG_MISSING_FIELDS),
            SubmitOutcome::Busy => Notice::error(MSG_BUSY),
            SubmitOutcome::Failed(SubmitError::Rejected { .. }) => {
                Notice::error(MSG_REJECTED).with_chat_fallback()
            }
            SubmitOutcome::Failed(_) => Notice::error(MSG_FAILED).with_chat_fallback(),
        }
    }
}

/// A contact form instance.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    draft: ContactDraft,
    submitting: bool,
}

impl ContactForm {
    /// An empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// A form pre-filled with `draft`, e.g. from a posted request.
    pub fn with_draft(draft: ContactDraft) -> Self {
        Self {
            draft,
            submitting: false,
        }
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    /// Whether the submit control should be disabled.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn edit(&mut self, field: Field, value: &str) -> Result<(), UnknownInquiryType> {
        self.draft.set(field, value)
    }

    /// Validate and mark the form as in flight.
    ///
    /// On `Err` nothing may be sent and the form state is unchanged.
    pub fn begin_submit(&mut self) -> Result<ContactSubmission, SubmitOutcome> {
        if self.submitting {
            return Err(SubmitOutcome::Busy);
        }

        let submission = self.draft.validate().map_err(|e| {
            tracing::debug!("Contact form not sent: {}", e);
            SubmitOutcome::Invalid(e)
        })?;

        self.submitting = true;
        Ok(submission)
    }

    /// Record the delivery result of the in-flight submission.
    pub fn finish_submit(&mut self, result: Result<(), SubmitError>) -> SubmitOutcome {
        self.submitting = false;

        match result {
            Ok(()) => {
                tracing::info!(
                    "Contact inquiry ({}) delivered",
                    self.draft.inquiry_type.as_str()
                );
                self.draft = ContactDraft::default();
                SubmitOutcome::Sent
            }
            Err(e) => {
                tracing::warn!("Contact inquiry failed: {}", e);
                SubmitOutcome::Failed(e)
            }
        }
    }

    /// Validate, send once through `transport`, and settle the form.
    pub async fn submit<T: ContactTransport>(&mut self, transport: &T) -> SubmitOutcome {
        let submission = match self.begin_submit() {
            Ok(submission) => submission,
            Err(outcome) => return outcome,
        };

        let result = transport.send(&submission).await;
        self.finish_submit(result)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::draft::InquiryType;

    /// Records every submission and answers with a fixed result.
    struct RecordingTransport {
        sent: Mutex<Vec<ContactSubmission>>,
        fail_with: Option<u16>,
    }

    impl RecordingTransport {
        fn accepting() -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                fail_with: None,
            }
        }

        fn failing(status: u16) -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                fail_with: Some(status),
            }
        }

        fn sent(&self) -> Vec<ContactSubmission> {
            self.sent.lock().unwrap().clone()
        }
    }

    impl ContactTransport for RecordingTransport {
        async fn send(&self, submission: &ContactSubmission) -> Result<(), SubmitError> {
            self.sent.lock().unwrap().push(submission.clone());
            match self.fail_with {
                Some(0) => Err(SubmitError::Transport("connection refused".to_string())),
                Some(status) => Err(SubmitError::from_status(status).unwrap()),
                None => Ok(()),
            }
        }
    }

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.edit(Field::Name, "Amit Das").unwrap();
        form.edit(Field::Phone, "+91 90000 00000").unwrap();
        form.edit(Field::Message, "Looking for anti-skid tiles").unwrap();
        form
    }

    #[tokio::test]
    async fn missing_name_never_reaches_transport() {
        let transport = RecordingTransport::accepting();
        let mut form = ContactForm::new();
        form.edit(Field::Phone, "9800000000").unwrap();

        let outcome = form.submit(&transport).await;

        assert!(matches!(outcome, SubmitOutcome::Invalid(_)));
        assert_eq!(outcome.notice(), Notice::error(MSG_MISSING_FIELDS));
        assert!(transport.sent().is_empty());
        assert_eq!(form.draft().phone, "9800000000");
    }

    #[tokio::test]
    async fn missing_phone_never_reaches_transport() {
        let transport = RecordingTransport::accepting();
        let mut form = ContactForm::new();
        form.edit(Field::Name, "Amit").unwrap();

        let outcome = form.submit(&transport).await;

        assert!(matches!(outcome, SubmitOutcome::Invalid(_)));
        assert!(transport.sent().is_empty());
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn sends_once_with_default_inquiry_type() {
        let transport = RecordingTransport::accepting();
        let mut form = filled_form();

        let outcome = form.submit(&transport).await;
        assert!(outcome.is_sent());

        let sent = transport.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(
            sent[0],
            ContactSubmission {
                name: "Amit Das".to_string(),
                phone: "+91 90000 00000".to_string(),
                email: String::new(),
                message: "Looking for anti-skid tiles".to_string(),
                inquiry_type: InquiryType::General,
            }
        );
    }

    #[tokio::test]
    async fn success_resets_draft() {
        let transport = RecordingTransport::accepting();
        let mut form = filled_form();
        form.edit(Field::InquiryType, "marble").unwrap();

        let outcome = form.submit(&transport).await;

        assert_eq!(outcome.notice(), Notice::success(MSG_SENT));
        assert!(form.draft().is_empty());
        assert_eq!(form.draft().inquiry_type, InquiryType::General);
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn failure_keeps_draft() {
        let transport = RecordingTransport::failing(0);
        let mut form = filled_form();
        let before = form.draft().clone();

        let outcome = form.submit(&transport).await;

        assert!(matches!(outcome, SubmitOutcome::Failed(SubmitError::Transport(_))));
        let notice = outcome.notice();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.message, MSG_FAILED);
        assert!(notice.action.unwrap().url.starts_with("https://wa.me/918617895132"));
        assert_eq!(form.draft(), &before);
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn rejection_gets_its_own_message() {
        let transport = RecordingTransport::failing(422);
        let mut form = filled_form();

        let outcome = form.submit(&transport).await;

        assert_eq!(outcome.notice().message, MSG_REJECTED);
        assert_eq!(form.draft().name, "Amit Das");
    }

    #[test]
    fn refuses_second_submit_while_in_flight() {
        let mut form = filled_form();

        let first = form.begin_submit();
        assert!(first.is_ok());
        assert!(form.is_submitting());

        let second = form.begin_submit();
        assert!(matches!(second, Err(SubmitOutcome::Busy)));

        let outcome = form.finish_submit(Ok(()));
        assert!(outcome.is_sent());
        assert!(!form.is_submitting());
    }
}
