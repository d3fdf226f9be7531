//! Fare computation and recurring-schedule engine for carpool requests.
//!
//! Everything in this crate is a pure recomputation from current form
//! state: the caller re-invokes the engine whenever an input changes and
//! discards the previous summary. Network submission lives in
//! `fare_client`; this crate only produces the payload.
//!
//! The crate is organized into:
//!
//! - [`params`]: immutable pricing configuration ([`params::FareParameters`])
//! - [`fare`]: per-leg fare breakdown for a clock time and distance
//! - [`calendar`]: ride-day counting over a date range with weekday recurrence
//! - [`summary`]: aggregation of legs, days and seats into a [`summary::FareSummary`]
//! - [`request`]: the ride-request model and its validation
//! - [`payload`]: the wire payload sent to the persistence backend
//! - [`pipeline`]: Draft → Priced → Submitted flow with the in-flight guard

pub mod calendar;
pub mod error;
pub mod fare;
pub mod params;
pub mod payload;
pub mod pipeline;
pub mod request;
pub mod summary;
#[cfg(feature = "test-helpers")]
pub mod test_helpers;

pub use calendar::{inclusive_day_span, matched_days};
pub use error::InvalidInput;
pub use fare::{compute_leg_fare, LegFareBreakdown, RideLeg, RoundedLegFare};
pub use params::FareParameters;
pub use payload::RidePayload;
pub use pipeline::{PipelineState, RequestPipeline, SubmitRejection};
pub use request::{
    ConversationPreference, MusicPreference, RidePreferences, RideRequest, RouteType,
    SmokingPreference,
};
pub use summary::{combine_legs, FareBreakdownDetail, FareSummary};
