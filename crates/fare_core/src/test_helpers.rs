//! Shared fixtures for unit tests across the crate.

use chrono::{NaiveDate, NaiveTime};

use crate::request::{RidePreferences, RideRequest, RouteType};

/// A complete, valid two-way request over a one-week range (2025-06-02,
/// a Monday, through 2025-06-09), 10 km, peak-hour pickup.
pub fn sample_request() -> RideRequest {
    RideRequest {
        pickup_location: "Gulshan-e-Iqbal".to_string(),
        dropoff_location: "Clifton".to_string(),
        seats: 1,
        start_date: NaiveDate::from_ymd_opt(2025, 6, 2).expect("date"),
        end_date: NaiveDate::from_ymd_opt(2025, 6, 9).expect("date"),
        pickup_time: NaiveTime::from_hms_opt(9, 0, 0).expect("time"),
        dropoff_time: Some(NaiveTime::from_hms_opt(17, 30, 0).expect("time")),
        route_type: RouteType::TwoWay,
        recurring: false,
        selected_weekdays: Vec::new(),
        distance_km: 10.0,
        preferences: RidePreferences::default(),
        special_requests: None,
    }
}
