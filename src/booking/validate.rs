use once_cell::sync::Lazy;
use regex::Regex;

use crate::data::booking::BookingRequest;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9\s-]+$").expect("phone regex"));

const MIN_PHONE_DIGITS: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub valid: bool,
    pub message: String,
}

/// Checks a booking request before it goes anywhere near the network,
/// collecting every violated rule (not just the first) so the user can fix
/// the whole form in one pass. Rules run in a fixed order: name, email,
/// phone, vehicle, service type, then the slot/location guards.
pub fn validate(request: &BookingRequest) -> Validation {
    let mut errors: Vec<&str> = Vec::new();

    let name = request.name.trim();
    if name.is_empty() {
        errors.push("Please enter your name");
    } else if name.chars().count() < 2 {
        errors.push("Name must be at least 2 characters");
    }

    let email = request.email.trim();
    if email.is_empty() {
        errors.push("Please enter your email");
    } else if !EMAIL_RE.is_match(email) {
        errors.push("Please enter a valid email address");
    }

    // Phone is the one optional field; validated only when provided.
    let phone = request.phone.trim();
    if !phone.is_empty() && !is_valid_phone(phone) {
        errors.push("Please enter a valid phone number");
    }

    if request.vehicle.trim().is_empty() {
        errors.push("Please enter your vehicle details");
    }

    if request.service_type.trim().is_empty() {
        errors.push("Please select a service type");
    }

    if request.timeslot_id.trim().is_empty() {
        errors.push("No time slot selected");
    }
    if request.location.trim().is_empty() {
        errors.push("No location selected");
    }

    Validation {
        valid: errors.is_empty(),
        message: errors.join(". "),
    }
}

/// Loose international format: optional leading "+", then digits, spaces and
/// hyphens, with at least 7 actual digits.
fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
        && phone.chars().filter(|c| c.is_ascii_digit()).count() >= MIN_PHONE_DIGITS
}
