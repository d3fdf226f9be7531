use std::fmt;

/// User-correctable input problems, detected before any network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInput {
    /// Distance is missing, non-finite, or not strictly positive.
    InvalidDistance,
    /// Seat count is zero or outside the bookable range.
    InvalidSeatCount,
    MissingPickupLocation,
    MissingDropoffLocation,
    /// Two-way routes need a dropoff clock time.
    MissingDropoffTime,
    /// Recurring rides need at least one selected weekday.
    NoWeekdaysSelected,
    /// End date must be strictly after the start date.
    EndDateNotAfterStart,
    /// Submission attempted before a fare summary was computed.
    FareNotReady,
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            InvalidInput::InvalidDistance => "invalid distance",
            InvalidInput::InvalidSeatCount => "invalid seat count",
            InvalidInput::MissingPickupLocation => "pickup location is required",
            InvalidInput::MissingDropoffLocation => "dropoff location is required",
            InvalidInput::MissingDropoffTime => "dropoff time is required for a two-way route",
            InvalidInput::NoWeekdaysSelected => {
                "select at least one weekday for a recurring ride"
            }
            InvalidInput::EndDateNotAfterStart => "end date must be after the start date",
            InvalidInput::FareNotReady => "fare has not been calculated yet",
        };
        f.write_str(message)
    }
}

impl std::error::Error for InvalidInput {}
