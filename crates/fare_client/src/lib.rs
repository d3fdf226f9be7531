//! Blocking HTTP client for the carpool persistence backend, plus the
//! guarded submission driver that feeds it from a
//! [`fare_core::RequestPipeline`].

pub mod client;
pub mod error;
pub mod response;
pub mod submit;

pub use client::CarpoolClient;
pub use error::SubmitError;
pub use submit::{submit, CarpoolBackend, SubmitMode, SubmitOutcome};
