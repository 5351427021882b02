use chrono::NaiveDate;

use crate::domain::advisor::Occasion;
use crate::domain::booking::{Booking, BookingStatus, SeatingPreference};
use crate::domain::clock::Clock;
use crate::domain::ids::{BookingId, RestaurantId};
use crate::domain::time_slot::{SlotPolicy, TimeSlot};
use crate::error::{Error, FieldIssue, Result};

/// Raw booking input as it arrives from the outside, before any checking.
/// Everything the guest typed is still a string here; the closed enums are
/// already narrowed because the wire layer rejects unknown values on
/// deserialization.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub party_size: i64,
    pub occasion: Option<Occasion>,
    pub seating_preference: Option<SeatingPreference>,
    pub booking_date: String,
    pub booking_time: String,
    pub special_requests: Option<String>,
    pub priority_booking: bool,
}

/// Validates a raw request and, on success, mints the `Pending` booking.
///
/// This is the single place where malformed input is rejected; the advisor
/// and the store both rely on it and perform no checking of their own.
/// All failing fields are collected into one `Error::Validation` so the
/// caller can surface every problem at once instead of the first.
pub fn validate(request: &BookingRequest, restaurant_id: &RestaurantId, clock: &dyn Clock, policy: &SlotPolicy) -> Result<Booking> {
    let mut issues: Vec<FieldIssue> = Vec::new();

    let name = request.customer_name.trim();
    if name.len() < 2 {
        issues.push(FieldIssue::new("customerName", "Name must be at least 2 characters"));
    } else if name.len() > 50 {
        issues.push(FieldIssue::new("customerName", "Name is too long"));
    }

    let email = request.customer_email.trim().to_lowercase();
    if !is_plausible_email(&email) {
        issues.push(FieldIssue::new("customerEmail", "Invalid email address"));
    }

    let phone = request.customer_phone.trim();
    check_phone(phone, &mut issues);

    if request.party_size < 1 {
        issues.push(FieldIssue::new("personCount", "At least 1 guest required"));
    } else if request.party_size > 100 {
        issues.push(FieldIssue::new("personCount", "Maximum 100 guests allowed"));
    }

    let booking_date = match NaiveDate::parse_from_str(&request.booking_date, "%Y-%m-%d") {
        Ok(date) => {
            if date < clock.today() {
                issues.push(FieldIssue::new("bookingDate", "Booking date cannot be in the past"));
            }
            Some(date)
        }
        Err(_) => {
            issues.push(FieldIssue::new("bookingDate", "Please select a date"));
            None
        }
    };

    let booking_time = match TimeSlot::parse(&request.booking_time) {
        Some(slot) if policy.window.contains(slot) => Some(slot),
        Some(_) => {
            issues.push(FieldIssue::new("bookingTime", "Selected time is outside the service hours"));
            None
        }
        None => {
            issues.push(FieldIssue::new("bookingTime", "Please select a time"));
            None
        }
    };

    if !issues.is_empty() {
        log::info!("Booking request rejected with {} field issue(s).", issues.len());
        return Err(Error::Validation(issues));
    }

    let special_requests = request.special_requests.as_deref().map(str::trim).filter(|s| !s.is_empty()).map(String::from);

    // Date and time are present here: a parse failure pushed an issue above.
    let booking = Booking {
        id: BookingId::fresh(),
        restaurant_id: restaurant_id.clone(),
        customer_name: name.to_string(),
        customer_email: email,
        customer_phone: phone.to_string(),
        party_size: request.party_size as u32,
        occasion: request.occasion,
        seating_preference: request.seating_preference,
        booking_date: booking_date.ok_or_else(|| Error::ModelConstructionError("booking_date missing after validation".to_string()))?,
        booking_time: booking_time.ok_or_else(|| Error::ModelConstructionError("booking_time missing after validation".to_string()))?,
        special_requests,
        priority_booking: request.priority_booking,
        status: BookingStatus::Pending,
        table_id: None,
        created_at: clock.now(),
        confirmed_at: None,
        cancelled_at: None,
    };

    Ok(booking)
}

/// Phone rules: only digits, spaces, `+`, `-` and parentheses are allowed,
/// exactly ten digits must remain after stripping, and a number that is
/// one digit repeated ten times is treated as junk input.
fn check_phone(phone: &str, issues: &mut Vec<FieldIssue>) {
    if phone.is_empty() {
        issues.push(FieldIssue::new("customerPhone", "Phone number is required"));
        return;
    }

    if !phone.chars().all(|c| c.is_ascii_digit() || c == ' ' || c == '+' || c == '-' || c == '(' || c == ')') {
        issues.push(FieldIssue::new("customerPhone", "Phone number can only contain digits, spaces, +, -, and parentheses"));
        return;
    }

    let digits: Vec<char> = phone.chars().filter(char::is_ascii_digit).collect();

    if digits.len() != 10 {
        issues.push(FieldIssue::new("customerPhone", "Phone number must be exactly 10 digits"));
        return;
    }

    if digits.iter().all(|&d| d == digits[0]) {
        issues.push(FieldIssue::new("customerPhone", "Please enter a valid phone number"));
    }
}

/// Structural email check: one `@`, a non-empty local part, and a domain
/// containing a dot that is neither leading nor trailing.
fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.is_empty() || email.contains(' ') {
        return false;
    }

    match domain.rfind('.') {
        Some(dot) => dot > 0 && dot < domain.len() - 1,
        None => false,
    }
}
