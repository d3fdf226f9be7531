//! Response bodies returned by the carpool backend.

use serde::Deserialize;

use crate::error::{SubmitError, GENERIC_SUBMIT_FAILURE};

/// Envelope shared by create/save endpoints: payload under `data`,
/// failure message under `error` or `message`.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: Option<T>,
    pub error: Option<String>,
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the payload, preferring the server's own message on
    /// failure and falling back to the generic one.
    pub fn into_data(self) -> Result<T, SubmitError> {
        match self.data {
            Some(data) => Ok(data),
            None => Err(SubmitError::Api(self.failure_message())),
        }
    }

    pub fn failure_message(&self) -> String {
        self.error
            .clone()
            .or_else(|| self.message.clone())
            .unwrap_or_else(|| GENERIC_SUBMIT_FAILURE.to_string())
    }
}

/// Acknowledgement for updates: `{ "success": true }` on the happy path.
#[derive(Debug, Deserialize)]
pub struct UpdateAck {
    #[serde(default)]
    pub success: bool,
    pub error: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SavedRequest {
    #[serde(rename = "RequestID")]
    pub request_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct SavedProfile {
    pub carpool_profile_id: i64,
}
