//! Delivery of submissions to the inquiry backend.

use std::future::Future;

use crate::draft::ContactSubmission;

/// Errors from delivering a submission.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("Could not reach the contact backend: {0}")]
    Transport(String),

    #[error("Contact backend rejected the submission with status {status}")]
    Rejected { status: u16 },

    #[error("Contact backend failed with status {status}")]
    Server { status: u16 },
}

impl SubmitError {
    /// Classify a non-success HTTP status. Returns `None` for 2xx.
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            200..=299 => None,
            400..=499 => Some(SubmitError::Rejected { status }),
            _ => Some(SubmitError::Server { status }),
        }
    }
}

/// Something that can deliver one submission.
pub trait ContactTransport: Send + Sync {
    /// Deliver `submission`. Called at most once per submit attempt.
    fn send(
        &self,
        submission: &ContactSubmission,
    ) -> impl Future<Output = Result<(), SubmitError>> + Send;
}

/// Build the contact endpoint from the backend base URL.
///
/// An empty base URL yields a same-origin path.
pub fn contact_endpoint(backend_base_url: &str) -> String {
    format!("{}/api/contact", backend_base_url.trim_end_matches('/'))
}

/// Posts submissions as JSON to `{backend}/api/contact`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    /// Create a transport for the given backend base URL.
    pub fn new(backend_base_url: &str) -> Result<Self, SubmitError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("showroom/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: contact_endpoint(backend_base_url),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ContactTransport for HttpTransport {
    async fn send(&self, submission: &ContactSubmission) -> Result<(), SubmitError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(submission)
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        match SubmitError::from_status(status) {
            None => {
                tracing::debug!("Backend accepted submission with status {}", status);
                Ok(())
            }
            Some(err) => Err(err),
        }
    }
}
