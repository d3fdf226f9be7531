/// Length of each peak window in hours: a ride is peak when its clock
/// hour falls in `[start, start + 2)` for any configured start.
const PEAK_WINDOW_HOURS: u32 = 2;

/// Immutable pricing configuration, constructed once and passed
/// explicitly into every calculation call. All monetary values are in
/// whole currency units; margins and rates are fractions in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct FareParameters {
    pub fuel_price_per_liter: f64,
    pub average_mileage_km_per_liter: f64,
    /// Driver profit margin applied on top of the per-seat base cost.
    pub driver_profit_margin: f64,
    /// Platform commission applied on top of base cost plus driver profit.
    pub app_commission_rate: f64,
    /// Fuel surcharge fraction applied during peak windows.
    pub peak_hour_surcharge: f64,
    /// Starting hours of the peak windows (24h clock).
    pub peak_hour_starts: Vec<u32>,
    /// Per-kilometer maintenance cost charged per seat.
    pub base_cost_per_km: f64,
    /// Floor applied to the final per-seat fare, not to any sub-component.
    pub minimum_fare_per_seat: f64,
}

impl FareParameters {
    /// Whether a ride at the given clock hour falls in a peak window.
    pub fn is_peak_hour(&self, hour: u32) -> bool {
        self.peak_hour_starts
            .iter()
            .any(|&start| hour >= start && hour < start + PEAK_WINDOW_HOURS)
    }
}

impl Default for FareParameters {
    fn default() -> Self {
        Self {
            fuel_price_per_liter: 280.0,
            average_mileage_km_per_liter: 15.0,
            driver_profit_margin: 0.25,
            app_commission_rate: 0.15,
            peak_hour_surcharge: 0.20,
            peak_hour_starts: vec![8, 17],
            base_cost_per_km: 5.0,
            minimum_fare_per_seat: 100.0,
        }
    }
}
