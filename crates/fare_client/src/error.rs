use std::fmt;

use fare_core::InvalidInput;

/// Fallback shown when the backend gives no usable error message.
pub const GENERIC_SUBMIT_FAILURE: &str = "failed to process carpool request";

/// Errors encountered while submitting a carpool request.
#[derive(Debug)]
pub enum SubmitError {
    /// The form failed validation before any network call was made.
    Invalid(InvalidInput),
    /// Transport-level failure talking to the backend.
    Http(reqwest::Error),
    /// The backend rejected the call; carries the server-provided
    /// message when one was present, otherwise the generic fallback.
    Api(String),
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        SubmitError::Http(err)
    }
}

impl From<InvalidInput> for SubmitError {
    fn from(err: InvalidInput) -> Self {
        SubmitError::Invalid(err)
    }
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Invalid(err) => write!(f, "{}", err),
            SubmitError::Http(err) => write!(f, "request failed: {}", err),
            SubmitError::Api(message) => f.write_str(message),
        }
    }
}

impl std::error::Error for SubmitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SubmitError::Invalid(err) => Some(err),
            SubmitError::Http(err) => Some(err),
            SubmitError::Api(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_converts_and_displays_its_own_message() {
        let err = SubmitError::from(InvalidInput::FareNotReady);
        assert_eq!(err.to_string(), "fare has not been calculated yet");
    }

    #[test]
    fn api_errors_surface_the_server_message_verbatim() {
        let err = SubmitError::Api("seat already taken".to_string());
        assert_eq!(err.to_string(), "seat already taken");
    }
}
