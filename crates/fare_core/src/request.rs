//! The ride-request form model and its validation.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::InvalidInput;
use crate::fare::RideLeg;

/// Maximum seats bookable on a single request.
pub const MAX_SEATS: u32 = 4;

/// Whether the request covers one direction or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouteType {
    #[serde(rename = "One Way")]
    OneWay,
    #[serde(rename = "Two Way")]
    TwoWay,
}

impl RouteType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteType::OneWay => "One Way",
            RouteType::TwoWay => "Two Way",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SmokingPreference {
    #[default]
    #[serde(rename = "no-preference")]
    NoPreference,
    #[serde(rename = "Smoking Not Allowed")]
    NotAllowed,
    #[serde(rename = "Smoking Allowed")]
    Allowed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MusicPreference {
    #[default]
    #[serde(rename = "no-preference")]
    NoPreference,
    #[serde(rename = "Quiet ride")]
    QuietRide,
    #[serde(rename = "Music Ok!")]
    MusicOk,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConversationPreference {
    #[default]
    #[serde(rename = "no-preference")]
    NoPreference,
    #[serde(rename = "Quiet Ride")]
    QuietRide,
    #[serde(rename = "Friendly Chat")]
    FriendlyChat,
}

/// Rider comfort preferences carried through to the payload unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RidePreferences {
    pub smoking: SmokingPreference,
    pub music: MusicPreference,
    pub conversation: ConversationPreference,
    pub allows_luggage: bool,
}

/// A carpool request as edited in the form. Validation happens in
/// [`RideRequest::validate`]; fare computation consumes the legs via
/// [`RideRequest::pickup_leg`] / [`RideRequest::dropoff_leg`].
#[derive(Debug, Clone, PartialEq)]
pub struct RideRequest {
    pub pickup_location: String,
    pub dropoff_location: String,
    pub seats: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub pickup_time: NaiveTime,
    /// Required for two-way routes, ignored for one-way.
    pub dropoff_time: Option<NaiveTime>,
    pub route_type: RouteType,
    pub recurring: bool,
    /// English weekday names; consulted only when `recurring` is set.
    pub selected_weekdays: Vec<String>,
    /// Trip distance computed upstream by the mapping collaborator.
    pub distance_km: f64,
    pub preferences: RidePreferences,
    pub special_requests: Option<String>,
}

impl RideRequest {
    /// Check every user-correctable condition before any computation or
    /// network call. Reported in form order, one failure at a time.
    pub fn validate(&self) -> Result<(), InvalidInput> {
        if self.pickup_location.trim().is_empty() {
            return Err(InvalidInput::MissingPickupLocation);
        }
        if self.dropoff_location.trim().is_empty() {
            return Err(InvalidInput::MissingDropoffLocation);
        }
        if !self.distance_km.is_finite() || self.distance_km <= 0.0 {
            return Err(InvalidInput::InvalidDistance);
        }
        if self.seats == 0 || self.seats > MAX_SEATS {
            return Err(InvalidInput::InvalidSeatCount);
        }
        if self.route_type == RouteType::TwoWay && self.dropoff_time.is_none() {
            return Err(InvalidInput::MissingDropoffTime);
        }
        if self.recurring && self.selected_weekdays.is_empty() {
            return Err(InvalidInput::NoWeekdaysSelected);
        }
        if self.end_date <= self.start_date {
            return Err(InvalidInput::EndDateNotAfterStart);
        }
        Ok(())
    }

    pub fn pickup_leg(&self) -> RideLeg {
        RideLeg {
            time: self.pickup_time,
            distance_km: self.distance_km,
        }
    }

    /// The dropoff-bound leg; `Some` only for two-way routes with a
    /// dropoff time set.
    pub fn dropoff_leg(&self) -> Option<RideLeg> {
        if self.route_type != RouteType::TwoWay {
            return None;
        }
        self.dropoff_time.map(|time| RideLeg {
            time,
            distance_km: self.distance_km,
        })
    }
}
