//! Contact form endpoints: the JSON relay and the plain form post.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Form, Json,
};
use serde::{Deserialize, Serialize};

use showroom_contact::{ContactDraft, ContactForm, SubmitError, SubmitOutcome};
use showroom_content::Page;
use showroom_static::PageState;

use crate::server::{render_page, AppState};

/// How a relayed submission ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelayStatus {
    Sent,
    Invalid,
    Busy,
    Rejected,
    Unavailable,
}

/// JSON body answered by the relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayReply {
    pub status: RelayStatus,
    pub message: String,
}

/// HTTP status and relay status for a submit outcome.
pub fn relay_status(outcome: &SubmitOutcome) -> (StatusCode, RelayStatus) {
    match outcome {
        SubmitOutcome::Sent => (StatusCode::OK, RelayStatus::Sent),
        SubmitOutcome::Invalid(_) => (StatusCode::UNPROCESSABLE_ENTITY, RelayStatus::Invalid),
        // Every request gets its own form, so the relay never sees this;
        // it covers callers that share one controller.
        SubmitOutcome::Busy => (StatusCode::CONFLICT, RelayStatus::Busy),
        SubmitOutcome::Failed(SubmitError::Rejected { .. }) => {
            (StatusCode::BAD_REQUEST, RelayStatus::Rejected)
        }
        SubmitOutcome::Failed(_) => (StatusCode::BAD_GATEWAY, RelayStatus::Unavailable),
    }
}

/// `POST /api/contact`: validate and forward one JSON submission.
pub async fn relay_handler(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<ContactDraft>,
) -> Response {
    let mut form = ContactForm::with_draft(draft);
    let outcome = form.submit(&state.transport).await;

    let (code, status) = relay_status(&outcome);
    let reply = RelayReply {
        status,
        message: outcome.notice().message.to_string(),
    };

    (code, Json(reply)).into_response()
}

/// `POST /contact`: the same submission from a page without JavaScript.
///
/// Answers with the contact page showing the notice; the draft survives a
/// failure so the visitor can retry.
pub async fn form_handler(
    State(state): State<Arc<AppState>>,
    Form(draft): Form<ContactDraft>,
) -> Response {
    let mut form = ContactForm::with_draft(draft);
    let outcome = form.submit(&state.transport).await;
    let (code, _) = relay_status(&outcome);

    let mut page_state = PageState {
        notice: Some(outcome.notice()),
        form,
        ..Default::default()
    };
    // The answer lands on the form the visitor just sent, already in view.
    page_state.reveal.observe(1.0);

    render_page(&state, Page::Contact, &page_state, code)
}
