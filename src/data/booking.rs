use serde::{Deserialize, Serialize};

/// One bookable appointment as served by `GET /api/times`. Slots are
/// immutable on the client; a changed slot arrives as a full replacement in
/// the next snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub id: String,
    /// ISO 8601 start time.
    pub time: String,
    pub location: String,
    #[serde(rename = "vehicleTypes")]
    pub vehicle_types: Vec<String>,
}

/// The five fields the user types into the booking modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub vehicle: String,
    pub service_type: String,
}

/// Payload for `POST /api/book`. Built fresh at submission time from the
/// form plus the selected slot, and discarded once the request resolves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    #[serde(rename = "timeslotId")]
    pub timeslot_id: String,
    pub location: String,
    pub name: String,
    pub email: String,
    /// Empty string means "not provided".
    pub phone: String,
    pub vehicle: String,
    #[serde(rename = "serviceType")]
    pub service_type: String,
}

/// Response body of `POST /api/book`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingResult {
    pub success: bool,
    #[serde(default)]
    pub booking_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateRange {
    #[default]
    All,
    Today,
    Tomorrow,
    Week,
}

impl DateRange {
    /// Maps a filter-select value to a range; anything unrecognized falls
    /// back to `All`.
    pub fn parse(value: &str) -> Self {
        match value {
            "today" => DateRange::Today,
            "tomorrow" => DateRange::Tomorrow,
            "week" => DateRange::Week,
            _ => DateRange::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DateRange::All => "all",
            DateRange::Today => "today",
            DateRange::Tomorrow => "tomorrow",
            DateRange::Week => "week",
        }
    }
}

/// The active filter values. Lives for the page session only, mutated by
/// direct user input and read synchronously when filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub vehicle_type: String,
    pub location: String,
    pub date_range: DateRange,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        FilterCriteria {
            vehicle_type: "all".to_string(),
            location: "all".to_string(),
            date_range: DateRange::All,
        }
    }
}
