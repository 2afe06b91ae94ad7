//! Contact form draft, validation and submission to the inquiry backend.
//!
//! The form validates two required fields locally, sends at most one request per
//! attempt through a [`ContactTransport`], and settles into a [`Notice`].

pub mod draft;
pub mod form;
pub mod transport;

pub use draft::{
    ContactDraft, ContactSubmission, Field, InquiryType, UnknownInquiryType, ValidationError,
};
pub use form::{ContactForm, Notice, NoticeAction, NoticeKind, SubmitOutcome};
pub use transport::{contact_endpoint, ContactTransport, HttpTransport, SubmitError};
