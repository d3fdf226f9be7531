//! Aggregation of leg fares, matched days and seats into the
//! user-facing fare summary.

use serde::Serialize;

use crate::fare::{LegFareBreakdown, RoundedLegFare};

/// Per-leg rounded breakdowns retained for audit and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FareBreakdownDetail {
    pub seats: u32,
    pub pickup: RoundedLegFare,
    pub dropoff: Option<RoundedLegFare>,
}

/// Aggregated, user-facing totals across legs, seats and matched days.
///
/// Ephemeral: recomputed from current form state on every relevant input
/// change and never persisted; only `total_fare` is carried into the
/// submitted payload. All fields here are rounded to whole currency
/// units; the per-leg breakdowns are rounded independently, so their
/// components may not sum exactly to these totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FareSummary {
    /// Combined per-seat fare for one day (both legs for two-way).
    pub fare_per_day: i64,
    /// Dropoff leg's per-seat fare; `None` for one-way routes.
    pub return_fare: Option<i64>,
    /// Number of matched ride days in the request's range.
    pub total_days: u32,
    /// Total calendar days in the range, ignoring recurrence.
    pub full_range_days: u32,
    /// Per-person fare for the whole duration.
    pub total_fare_per_person: i64,
    /// Grand total across seats and matched days.
    pub total_fare: i64,
    /// Base cost plus driver profit across all seats and matched days.
    pub driver_earnings: i64,
    /// Platform commission across all seats and matched days.
    pub app_commission: i64,
    pub breakdown: FareBreakdownDetail,
}

/// Combine the pickup leg with an optional dropoff leg into the final
/// summary. Aggregates at full precision and rounds once per summary
/// field at this boundary.
pub fn combine_legs(
    pickup: &LegFareBreakdown,
    dropoff: Option<&LegFareBreakdown>,
    matched_days: u32,
    full_range_days: u32,
    seats: u32,
) -> FareSummary {
    let per_seat_per_day = pickup.final_fare_per_seat
        + dropoff.map_or(0.0, |leg| leg.final_fare_per_seat);
    let driver_earnings_per_day = pickup.total_driver_earnings
        + dropoff.map_or(0.0, |leg| leg.total_driver_earnings);
    let app_commission_per_day = pickup.total_app_commission
        + dropoff.map_or(0.0, |leg| leg.total_app_commission);

    let days = f64::from(matched_days);
    let total_fare_per_person = per_seat_per_day * days;
    let total_fare = total_fare_per_person * f64::from(seats);

    FareSummary {
        fare_per_day: per_seat_per_day.round() as i64,
        return_fare: dropoff.map(|leg| leg.final_fare_per_seat.round() as i64),
        total_days: matched_days,
        full_range_days,
        total_fare_per_person: total_fare_per_person.round() as i64,
        total_fare: total_fare.round() as i64,
        driver_earnings: (driver_earnings_per_day * days).round() as i64,
        app_commission: (app_commission_per_day * days).round() as i64,
        breakdown: FareBreakdownDetail {
            seats,
            pickup: pickup.rounded(),
            dropoff: dropoff.map(LegFareBreakdown::rounded),
        },
    }
}
