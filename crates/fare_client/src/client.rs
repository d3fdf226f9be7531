use std::time::Duration;

use reqwest::blocking::Client;
use serde::Serialize;

use fare_core::RidePayload;

use crate::error::SubmitError;
use crate::response::{ApiEnvelope, SavedProfile, SavedRequest, UpdateAck};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Thin blocking HTTP client for the carpool persistence backend.
#[derive(Debug, Clone)]
pub struct CarpoolClient {
    client: Client,
    base_url: String,
}

/// Create body: payload plus the requesting passenger and an optional
/// saved-profile link.
#[derive(Debug, Serialize)]
struct CreateRequestBody<'a> {
    #[serde(rename = "PassengerID")]
    passenger_id: i64,
    carpool_profile_id: Option<i64>,
    #[serde(flatten)]
    payload: &'a RidePayload,
}

/// Update body: payload plus the request being replaced.
#[derive(Debug, Serialize)]
struct UpdateRequestBody<'a> {
    #[serde(rename = "RequestID")]
    request_id: i64,
    #[serde(flatten)]
    payload: &'a RidePayload,
}

/// Profile body: payload plus its owning user.
#[derive(Debug, Serialize)]
struct SaveProfileBody<'a> {
    #[serde(rename = "UserID")]
    user_id: i64,
    #[serde(flatten)]
    payload: &'a RidePayload,
}

impl CarpoolClient {
    /// Create a client for the given backend (e.g. `http://localhost:3000`).
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build carpool client");
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create a new carpool request, optionally linked to a saved
    /// profile. Returns the new request id.
    pub fn create_request(
        &self,
        passenger_id: i64,
        carpool_profile_id: Option<i64>,
        payload: &RidePayload,
    ) -> Result<i64, SubmitError> {
        let body = CreateRequestBody {
            passenger_id,
            carpool_profile_id,
            payload,
        };
        let response = self
            .client
            .post(format!("{}/carpool-requests", self.base_url))
            .json(&body)
            .send()?;

        let envelope: ApiEnvelope<SavedRequest> = response.json()?;
        Ok(envelope.into_data()?.request_id)
    }

    /// Replace an existing request's fields by id.
    pub fn update_request(
        &self,
        request_id: i64,
        payload: &RidePayload,
    ) -> Result<(), SubmitError> {
        let body = UpdateRequestBody {
            request_id,
            payload,
        };
        let response = self
            .client
            .put(format!("{}/carpool-requests/{}", self.base_url, request_id))
            .json(&body)
            .send()?;

        let ack: UpdateAck = response.json()?;
        if ack.success {
            Ok(())
        } else {
            let message = ack
                .error
                .or(ack.message)
                .unwrap_or_else(|| crate::error::GENERIC_SUBMIT_FAILURE.to_string());
            Err(SubmitError::Api(message))
        }
    }

    /// Save the request as a reusable carpool profile for the user.
    /// Returns the new profile id.
    pub fn save_profile(&self, user_id: i64, payload: &RidePayload) -> Result<i64, SubmitError> {
        let body = SaveProfileBody { user_id, payload };
        let response = self
            .client
            .post(format!("{}/carpool-profiles", self.base_url))
            .json(&body)
            .send()?;

        let envelope: ApiEnvelope<SavedProfile> = response.json()?;
        Ok(envelope.into_data()?.carpool_profile_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fare_core::test_helpers::sample_request;
    use fare_core::{FareParameters, RequestPipeline};

    fn sample_payload() -> RidePayload {
        let mut pipeline = RequestPipeline::new(sample_request(), FareParameters::default());
        pipeline.reprice().expect("reprice");
        pipeline.begin_submit().expect("payload")
    }

    #[test]
    fn base_url_is_trimmed_of_trailing_slashes() {
        let client = CarpoolClient::new("http://localhost:3000/");
        assert_eq!(client.base_url, "http://localhost:3000");
    }

    #[test]
    fn create_body_flattens_the_payload_next_to_the_ids() {
        let payload = sample_payload();
        let body = CreateRequestBody {
            passenger_id: 7,
            carpool_profile_id: Some(12),
            payload: &payload,
        };
        let json = serde_json::to_value(&body).expect("json");
        assert_eq!(json["PassengerID"], 7);
        assert_eq!(json["carpool_profile_id"], 12);
        assert_eq!(json["pickup_location"], "Gulshan-e-Iqbal");
        assert_eq!(json["fare"], payload.fare);
    }

    #[test]
    fn update_body_carries_the_request_id() {
        let payload = sample_payload();
        let body = UpdateRequestBody {
            request_id: 99,
            payload: &payload,
        };
        let json = serde_json::to_value(&body).expect("json");
        assert_eq!(json["RequestID"], 99);
        assert_eq!(json["route_type"], "Two Way");
    }

    #[test]
    fn profile_body_carries_the_user_id() {
        let payload = sample_payload();
        let body = SaveProfileBody {
            user_id: 5,
            payload: &payload,
        };
        let json = serde_json::to_value(&body).expect("json");
        assert_eq!(json["UserID"], 5);
        assert_eq!(json["seats"], 1);
    }
}
