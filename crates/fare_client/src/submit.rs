//! Guarded submission driver: feeds a priced pipeline's payload to the
//! backend and reports the outcome back so the in-flight flag stays
//! consistent.

use fare_core::{RequestPipeline, RidePayload, SubmitRejection};

use crate::client::CarpoolClient;
use crate::error::SubmitError;

/// Seam over the backend so the guard logic is testable without a
/// server. [`CarpoolClient`] is the production implementation.
pub trait CarpoolBackend {
    fn create_request(
        &self,
        passenger_id: i64,
        carpool_profile_id: Option<i64>,
        payload: &RidePayload,
    ) -> Result<i64, SubmitError>;

    fn update_request(&self, request_id: i64, payload: &RidePayload) -> Result<(), SubmitError>;

    fn save_profile(&self, user_id: i64, payload: &RidePayload) -> Result<i64, SubmitError>;
}

impl CarpoolBackend for CarpoolClient {
    fn create_request(
        &self,
        passenger_id: i64,
        carpool_profile_id: Option<i64>,
        payload: &RidePayload,
    ) -> Result<i64, SubmitError> {
        CarpoolClient::create_request(self, passenger_id, carpool_profile_id, payload)
    }

    fn update_request(&self, request_id: i64, payload: &RidePayload) -> Result<(), SubmitError> {
        CarpoolClient::update_request(self, request_id, payload)
    }

    fn save_profile(&self, user_id: i64, payload: &RidePayload) -> Result<i64, SubmitError> {
        CarpoolClient::save_profile(self, user_id, payload)
    }
}

/// Create a new request or update an existing one by id. The engine is
/// agnostic either way; only the payload differs in destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitMode {
    Create {
        passenger_id: i64,
        /// When set, the request is first saved as a reusable profile
        /// for this user and the new request links to it.
        save_profile_for: Option<i64>,
    },
    Update {
        request_id: i64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created {
        request_id: i64,
        profile_id: Option<i64>,
    },
    Updated {
        request_id: i64,
    },
    /// A submission was already outstanding; nothing was sent.
    AlreadyInFlight,
}

/// Submit the pipeline's current payload.
///
/// A second call while one submission is outstanding is a no-op
/// (`AlreadyInFlight`), never queued. Validation failures are reported
/// before any network call. On upstream failure the in-flight flag is
/// cleared so the user may correct and resubmit; there is no automatic
/// retry. A failed profile save fails the whole submission.
pub fn submit(
    backend: &impl CarpoolBackend,
    pipeline: &mut RequestPipeline,
    mode: SubmitMode,
) -> Result<SubmitOutcome, SubmitError> {
    let payload = match pipeline.begin_submit() {
        Ok(payload) => payload,
        Err(SubmitRejection::InFlight) => return Ok(SubmitOutcome::AlreadyInFlight),
        Err(SubmitRejection::Invalid(err)) => return Err(SubmitError::Invalid(err)),
    };

    let outcome = deliver(backend, &payload, mode);
    match &outcome {
        Ok(_) => pipeline.submit_succeeded(),
        Err(_) => pipeline.submit_failed(),
    }
    outcome
}

fn deliver(
    backend: &impl CarpoolBackend,
    payload: &RidePayload,
    mode: SubmitMode,
) -> Result<SubmitOutcome, SubmitError> {
    match mode {
        SubmitMode::Create {
            passenger_id,
            save_profile_for,
        } => {
            let profile_id = match save_profile_for {
                Some(user_id) => Some(backend.save_profile(user_id, payload)?),
                None => None,
            };
            let request_id = backend.create_request(passenger_id, profile_id, payload)?;
            Ok(SubmitOutcome::Created {
                request_id,
                profile_id,
            })
        }
        SubmitMode::Update { request_id } => {
            backend.update_request(request_id, payload)?;
            Ok(SubmitOutcome::Updated { request_id })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use fare_core::test_helpers::sample_request;
    use fare_core::{FareParameters, InvalidInput, PipelineState};

    /// Records every backend call; each call kind can be forced to fail.
    #[derive(Default)]
    struct StubBackend {
        calls: RefCell<Vec<&'static str>>,
        fail_create: bool,
        fail_profile: bool,
    }

    impl CarpoolBackend for StubBackend {
        fn create_request(
            &self,
            _passenger_id: i64,
            _profile_id: Option<i64>,
            _payload: &RidePayload,
        ) -> Result<i64, SubmitError> {
            self.calls.borrow_mut().push("create");
            if self.fail_create {
                Err(SubmitError::Api("request rejected".to_string()))
            } else {
                Ok(101)
            }
        }

        fn update_request(
            &self,
            _request_id: i64,
            _payload: &RidePayload,
        ) -> Result<(), SubmitError> {
            self.calls.borrow_mut().push("update");
            Ok(())
        }

        fn save_profile(&self, _user_id: i64, _payload: &RidePayload) -> Result<i64, SubmitError> {
            self.calls.borrow_mut().push("profile");
            if self.fail_profile {
                Err(SubmitError::Api("profile rejected".to_string()))
            } else {
                Ok(55)
            }
        }
    }

    fn priced_pipeline() -> RequestPipeline {
        let mut pipeline = RequestPipeline::new(sample_request(), FareParameters::default());
        pipeline.reprice().expect("reprice");
        pipeline
    }

    #[test]
    fn create_submits_once_and_marks_the_pipeline_submitted() {
        let backend = StubBackend::default();
        let mut pipeline = priced_pipeline();

        let outcome = submit(
            &backend,
            &mut pipeline,
            SubmitMode::Create {
                passenger_id: 7,
                save_profile_for: None,
            },
        )
        .expect("submit");

        assert_eq!(
            outcome,
            SubmitOutcome::Created {
                request_id: 101,
                profile_id: None
            }
        );
        assert_eq!(*backend.calls.borrow(), vec!["create"]);
        assert_eq!(pipeline.state(), PipelineState::Submitted);
    }

    #[test]
    fn profile_is_saved_first_and_linked_into_the_request() {
        let backend = StubBackend::default();
        let mut pipeline = priced_pipeline();

        let outcome = submit(
            &backend,
            &mut pipeline,
            SubmitMode::Create {
                passenger_id: 7,
                save_profile_for: Some(3),
            },
        )
        .expect("submit");

        assert_eq!(
            outcome,
            SubmitOutcome::Created {
                request_id: 101,
                profile_id: Some(55)
            }
        );
        assert_eq!(*backend.calls.borrow(), vec!["profile", "create"]);
    }

    #[test]
    fn failed_profile_save_fails_the_whole_submission() {
        let backend = StubBackend {
            fail_profile: true,
            ..StubBackend::default()
        };
        let mut pipeline = priced_pipeline();

        let result = submit(
            &backend,
            &mut pipeline,
            SubmitMode::Create {
                passenger_id: 7,
                save_profile_for: Some(3),
            },
        );

        assert!(matches!(result, Err(SubmitError::Api(_))));
        // No request was created after the profile failure.
        assert_eq!(*backend.calls.borrow(), vec!["profile"]);
        assert!(!pipeline.is_in_flight());
        assert_eq!(pipeline.state(), PipelineState::Priced);
    }

    #[test]
    fn update_targets_the_existing_request() {
        let backend = StubBackend::default();
        let mut pipeline = priced_pipeline();

        let outcome = submit(
            &backend,
            &mut pipeline,
            SubmitMode::Update { request_id: 42 },
        )
        .expect("submit");

        assert_eq!(outcome, SubmitOutcome::Updated { request_id: 42 });
        assert_eq!(*backend.calls.borrow(), vec!["update"]);
    }

    #[test]
    fn unpriced_pipeline_is_rejected_before_any_network_call() {
        let backend = StubBackend::default();
        let mut pipeline = RequestPipeline::new(sample_request(), FareParameters::default());

        let result = submit(
            &backend,
            &mut pipeline,
            SubmitMode::Create {
                passenger_id: 7,
                save_profile_for: None,
            },
        );

        assert!(matches!(
            result,
            Err(SubmitError::Invalid(InvalidInput::FareNotReady))
        ));
        assert!(backend.calls.borrow().is_empty());
    }

    #[test]
    fn upstream_failure_clears_the_flag_for_manual_retry() {
        let backend = StubBackend {
            fail_create: true,
            ..StubBackend::default()
        };
        let mut pipeline = priced_pipeline();
        let mode = SubmitMode::Create {
            passenger_id: 7,
            save_profile_for: None,
        };

        let result = submit(&backend, &mut pipeline, mode);
        assert!(matches!(result, Err(SubmitError::Api(_))));
        assert!(!pipeline.is_in_flight());

        // The user may resubmit manually; nothing retried on its own.
        let retry_backend = StubBackend::default();
        let outcome = submit(&retry_backend, &mut pipeline, mode).expect("retry");
        assert!(matches!(outcome, SubmitOutcome::Created { .. }));
    }
}
