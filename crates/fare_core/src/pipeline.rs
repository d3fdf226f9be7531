//! Draft → Priced → Submitted flow for a single carpool request.
//!
//! The pipeline never talks to the network itself: `begin_submit` hands
//! out the payload and flips the in-flight flag, and the caller reports
//! the outcome back via `submit_succeeded` / `submit_failed`.

use crate::calendar::{inclusive_day_span, matched_days};
use crate::error::InvalidInput;
use crate::fare::compute_leg_fare;
use crate::params::FareParameters;
use crate::payload::RidePayload;
use crate::request::RideRequest;
use crate::summary::{combine_legs, FareSummary};

/// Where a request stands in its pricing/submission lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    /// Form being edited; summary stale or absent.
    Draft,
    /// Summary freshly computed from current inputs; submit enabled.
    Priced,
    /// Payload accepted by the backend; terminal for this request.
    Submitted,
}

/// Why `begin_submit` refused to produce a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejection {
    /// A submission is already outstanding; the attempt is a no-op.
    InFlight,
    Invalid(InvalidInput),
}

/// Owns one request's form state, pricing parameters, current summary
/// and the single in-flight submission flag.
#[derive(Debug, Clone)]
pub struct RequestPipeline {
    params: FareParameters,
    request: RideRequest,
    summary: Option<FareSummary>,
    state: PipelineState,
    in_flight: bool,
}

impl RequestPipeline {
    pub fn new(request: RideRequest, params: FareParameters) -> Self {
        Self {
            params,
            request,
            summary: None,
            state: PipelineState::Draft,
            in_flight: false,
        }
    }

    pub fn request(&self) -> &RideRequest {
        &self.request
    }

    pub fn summary(&self) -> Option<&FareSummary> {
        self.summary.as_ref()
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// Whether a submission is currently outstanding.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Apply an edit to the form. Any edit invalidates the summary and
    /// returns the pipeline to `Draft` until the caller reprices.
    pub fn edit(&mut self, apply: impl FnOnce(&mut RideRequest)) {
        apply(&mut self.request);
        self.summary = None;
        self.state = PipelineState::Draft;
    }

    /// Validate the form and recompute the fare summary. Pure and
    /// idempotent: identical inputs always price identically, so the
    /// caller may invoke this on every input change without throttling.
    pub fn reprice(&mut self) -> Result<&FareSummary, InvalidInput> {
        self.request.validate()?;

        let pickup = compute_leg_fare(self.request.pickup_leg(), self.request.seats, &self.params)?;
        let dropoff = match self.request.dropoff_leg() {
            Some(leg) => Some(compute_leg_fare(leg, self.request.seats, &self.params)?),
            None => None,
        };
        let matched = matched_days(
            self.request.start_date,
            self.request.end_date,
            self.request.recurring,
            &self.request.selected_weekdays,
        );
        let full_range = inclusive_day_span(self.request.start_date, self.request.end_date);

        let summary = combine_legs(
            &pickup,
            dropoff.as_ref(),
            matched,
            full_range,
            self.request.seats,
        );
        self.state = PipelineState::Priced;
        Ok(self.summary.insert(summary))
    }

    /// Produce the payload and mark a submission as outstanding.
    ///
    /// Rejects with [`SubmitRejection::InFlight`] while a submission is
    /// pending (at most one outstanding per request) and with
    /// `FareNotReady` when no summary has been computed for the current
    /// inputs. Revalidates the form so no partial payload can escape.
    pub fn begin_submit(&mut self) -> Result<RidePayload, SubmitRejection> {
        if self.in_flight {
            return Err(SubmitRejection::InFlight);
        }
        self.request.validate().map_err(SubmitRejection::Invalid)?;
        let summary = self
            .summary
            .as_ref()
            .ok_or(SubmitRejection::Invalid(InvalidInput::FareNotReady))?;

        let payload = RidePayload::from_request(&self.request, summary);
        self.in_flight = true;
        Ok(payload)
    }

    /// The outstanding submission was accepted by the backend.
    pub fn submit_succeeded(&mut self) {
        self.in_flight = false;
        self.state = PipelineState::Submitted;
    }

    /// The outstanding submission failed. The flag is cleared so the
    /// user may correct and resubmit; summary and form are untouched.
    pub fn submit_failed(&mut self) {
        self.in_flight = false;
    }
}
