//! Wire payload for the persistence backend. The shape is fixed for
//! compatibility with the existing carpool API.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::request::{
    ConversationPreference, MusicPreference, RideRequest, RouteType, SmokingPreference,
};
use crate::summary::FareSummary;

/// The create/update body for a carpool request or profile. Built from a
/// validated request and its freshly computed summary; the engine only
/// contributes `fare` and the inputs that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RidePayload {
    pub pickup_location: String,
    pub dropoff_location: String,
    pub seats: u32,
    /// `YYYY-MM-DD`.
    pub date: String,
    /// `YYYY-MM-DD`.
    pub end_date: String,
    /// `HH:MM:SS`.
    pub pickup_time: String,
    /// `HH:MM:SS`; `null` for one-way routes.
    pub dropoff_time: Option<String>,
    pub smoking_preference: SmokingPreference,
    pub music_preference: MusicPreference,
    pub conversation_preference: ConversationPreference,
    pub allows_luggage: bool,
    pub is_recurring: bool,
    /// Comma-joined weekday names; `null` when not recurring.
    pub recurring_days: Option<String>,
    pub special_requests: Option<String>,
    pub route_type: RouteType,
    /// Rounded grand total, `FareSummary::total_fare`.
    pub fare: i64,
    pub distance_km: f64,
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M:%S").to_string()
}

impl RidePayload {
    /// Assemble the payload from a validated request and its summary.
    pub fn from_request(request: &RideRequest, summary: &FareSummary) -> Self {
        let two_way = request.route_type == RouteType::TwoWay;
        Self {
            pickup_location: request.pickup_location.clone(),
            dropoff_location: request.dropoff_location.clone(),
            seats: request.seats,
            date: format_date(request.start_date),
            end_date: format_date(request.end_date),
            pickup_time: format_time(request.pickup_time),
            dropoff_time: request
                .dropoff_time
                .filter(|_| two_way)
                .map(format_time),
            smoking_preference: request.preferences.smoking,
            music_preference: request.preferences.music,
            conversation_preference: request.preferences.conversation,
            allows_luggage: request.preferences.allows_luggage,
            is_recurring: request.recurring,
            recurring_days: request
                .recurring
                .then(|| request.selected_weekdays.join(",")),
            special_requests: request.special_requests.clone(),
            route_type: request.route_type,
            fare: summary.total_fare,
            distance_km: request.distance_km,
        }
    }
}
