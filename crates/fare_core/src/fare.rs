//! Per-leg fare computation for a clock time and distance.

use chrono::{NaiveTime, Timelike};

use crate::error::InvalidInput;
use crate::params::FareParameters;

/// Fixed rider count used to split the fuel cost. The fuel share is
/// always divided by this baseline, independent of booked seats.
const FUEL_SHARE_BASELINE: f64 = 3.0;

/// One direction of a ride: its clock time (no date) and the trip
/// distance in kilometers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RideLeg {
    pub time: NaiveTime,
    pub distance_km: f64,
}

/// Full-precision per-seat and per-leg cost components for one leg.
/// Kept as `f64` internally; rounding to currency units happens only in
/// [`LegFareBreakdown::rounded`] and in the aggregated summary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegFareBreakdown {
    pub is_peak_hour: bool,
    pub base_fuel_cost: f64,
    pub peak_surcharge: f64,
    pub total_fuel_cost: f64,
    pub shared_fuel_per_seat: f64,
    pub maintenance_per_seat: f64,
    pub base_cost_per_seat: f64,
    pub driver_profit_per_seat: f64,
    pub app_commission_per_seat: f64,
    pub final_fare_per_seat: f64,
    /// `final_fare_per_seat` scaled by booked seats.
    pub total_fare: f64,
    /// Base cost plus driver profit, scaled by booked seats. Excludes
    /// the platform commission.
    pub total_driver_earnings: f64,
    pub total_app_commission: f64,
}

impl LegFareBreakdown {
    /// Display-facing view with each component rounded independently to
    /// whole currency units. Components may not sum exactly to the
    /// rounded totals; that drift is expected.
    pub fn rounded(&self) -> RoundedLegFare {
        RoundedLegFare {
            is_peak_hour: self.is_peak_hour,
            base_fuel_cost: self.base_fuel_cost.round() as i64,
            peak_surcharge: self.peak_surcharge.round() as i64,
            shared_fuel_per_seat: self.shared_fuel_per_seat.round() as i64,
            maintenance_per_seat: self.maintenance_per_seat.round() as i64,
            base_cost_per_seat: self.base_cost_per_seat.round() as i64,
            driver_profit_per_seat: self.driver_profit_per_seat.round() as i64,
            app_commission_per_seat: self.app_commission_per_seat.round() as i64,
            final_fare_per_seat: self.final_fare_per_seat.round() as i64,
        }
    }
}

/// Per-leg breakdown rounded for display, kept alongside the summary
/// for audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct RoundedLegFare {
    pub is_peak_hour: bool,
    pub base_fuel_cost: i64,
    pub peak_surcharge: i64,
    pub shared_fuel_per_seat: i64,
    pub maintenance_per_seat: i64,
    pub base_cost_per_seat: i64,
    pub driver_profit_per_seat: i64,
    pub app_commission_per_seat: i64,
    pub final_fare_per_seat: i64,
}

/// Compute one leg's per-seat fare for its clock time and distance.
///
/// Fuel cost is derived from distance and mileage, surcharged during
/// peak windows, then split across the fixed three-rider baseline.
/// Maintenance, driver profit and app commission stack on top, and the
/// per-seat total is floored at `minimum_fare_per_seat`.
pub fn compute_leg_fare(
    leg: RideLeg,
    seats: u32,
    params: &FareParameters,
) -> Result<LegFareBreakdown, InvalidInput> {
    if !leg.distance_km.is_finite() || leg.distance_km <= 0.0 {
        return Err(InvalidInput::InvalidDistance);
    }
    if seats == 0 {
        return Err(InvalidInput::InvalidSeatCount);
    }

    let is_peak_hour = params.is_peak_hour(leg.time.hour());

    let base_fuel_cost =
        (leg.distance_km / params.average_mileage_km_per_liter) * params.fuel_price_per_liter;
    let peak_surcharge = if is_peak_hour {
        base_fuel_cost * params.peak_hour_surcharge
    } else {
        0.0
    };
    let total_fuel_cost = base_fuel_cost + peak_surcharge;

    let shared_fuel_per_seat = total_fuel_cost / FUEL_SHARE_BASELINE;
    let maintenance_per_seat = leg.distance_km * params.base_cost_per_km;
    let base_cost_per_seat = shared_fuel_per_seat + maintenance_per_seat;

    let driver_profit_per_seat = base_cost_per_seat * params.driver_profit_margin;
    let app_commission_per_seat =
        (base_cost_per_seat + driver_profit_per_seat) * params.app_commission_rate;

    let final_fare_per_seat = (base_cost_per_seat + driver_profit_per_seat
        + app_commission_per_seat)
        .max(params.minimum_fare_per_seat);

    let seats = f64::from(seats);
    Ok(LegFareBreakdown {
        is_peak_hour,
        base_fuel_cost,
        peak_surcharge,
        total_fuel_cost,
        shared_fuel_per_seat,
        maintenance_per_seat,
        base_cost_per_seat,
        driver_profit_per_seat,
        app_commission_per_seat,
        final_fare_per_seat,
        total_fare: final_fare_per_seat * seats,
        total_driver_earnings: (base_cost_per_seat + driver_profit_per_seat) * seats,
        total_app_commission: app_commission_per_seat * seats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leg_at(hour: u32, distance_km: f64) -> RideLeg {
        RideLeg {
            time: NaiveTime::from_hms_opt(hour, 0, 0).expect("time"),
            distance_km,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-3,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn worked_peak_scenario_matches_reference_numbers() {
        let params = FareParameters::default();
        let fare = compute_leg_fare(leg_at(9, 10.0), 1, &params).expect("fare");

        assert!(fare.is_peak_hour);
        assert_close(fare.base_fuel_cost, 186.667);
        assert_close(fare.peak_surcharge, 37.333);
        assert_close(fare.total_fuel_cost, 224.0);
        assert_close(fare.shared_fuel_per_seat, 74.667);
        assert_close(fare.maintenance_per_seat, 50.0);
        assert_close(fare.base_cost_per_seat, 124.667);
        assert_close(fare.driver_profit_per_seat, 31.167);
        assert_close(fare.app_commission_per_seat, 23.375);
        assert_close(fare.final_fare_per_seat, 179.208);
        assert_eq!(fare.rounded().final_fare_per_seat, 179);
    }

    #[test]
    fn off_peak_leg_has_no_surcharge() {
        let params = FareParameters::default();
        let fare = compute_leg_fare(leg_at(15, 10.0), 1, &params).expect("fare");
        assert!(!fare.is_peak_hour);
        assert_eq!(fare.peak_surcharge, 0.0);
        assert_close(fare.total_fuel_cost, fare.base_fuel_cost);
    }

    #[test]
    fn final_fare_never_drops_below_the_minimum() {
        let params = FareParameters::default();
        // 0.1 km is far below anything the formula could price at 100.
        let fare = compute_leg_fare(leg_at(12, 0.1), 1, &params).expect("fare");
        assert_eq!(fare.final_fare_per_seat, params.minimum_fare_per_seat);
        // The floor applies to the per-seat total, not to components.
        assert!(fare.base_cost_per_seat < params.minimum_fare_per_seat);
    }

    #[test]
    fn totals_scale_monotonically_with_seats() {
        let params = FareParameters::default();
        let mut previous = 0.0;
        for seats in 1..=4 {
            let fare = compute_leg_fare(leg_at(9, 10.0), seats, &params).expect("fare");
            assert!(fare.total_fare > previous);
            previous = fare.total_fare;
        }
    }

    #[test]
    fn non_positive_or_non_finite_distance_is_rejected() {
        let params = FareParameters::default();
        for distance in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            let result = compute_leg_fare(leg_at(9, distance), 1, &params);
            assert_eq!(result, Err(InvalidInput::InvalidDistance));
        }
    }

    #[test]
    fn zero_seats_are_rejected() {
        let params = FareParameters::default();
        let result = compute_leg_fare(leg_at(9, 10.0), 0, &params);
        assert_eq!(result, Err(InvalidInput::InvalidSeatCount));
    }

    #[test]
    fn fuel_share_uses_the_fixed_baseline_not_booked_seats() {
        let params = FareParameters::default();
        let one_seat = compute_leg_fare(leg_at(15, 9.0), 1, &params).expect("fare");
        let four_seats = compute_leg_fare(leg_at(15, 9.0), 4, &params).expect("fare");
        // Per-seat components are identical; only totals scale.
        assert_eq!(one_seat.shared_fuel_per_seat, four_seats.shared_fuel_per_seat);
        assert_eq!(one_seat.final_fare_per_seat, four_seats.final_fare_per_seat);
    }
}
