use chrono::{TimeZone, Utc};

use booking_desk::api::booking_dto::NewBookingDto;
use booking_desk::domain::advisor::Occasion;
use booking_desk::domain::clock::FixedClock;
use booking_desk::domain::booking::BookingStatus;
use booking_desk::domain::ids::RestaurantId;
use booking_desk::domain::intake::{BookingRequest, validate};
use booking_desk::domain::time_slot::SlotPolicy;
use booking_desk::error::Error;

fn clock() -> FixedClock {
    FixedClock::new(Utc.with_ymd_and_hms(2025, 6, 10, 9, 0, 0).unwrap())
}

fn good_request() -> BookingRequest {
    BookingRequest {
        customer_name: "  Maya Hart ".to_string(),
        customer_email: " Maya.Hart@Example.COM ".to_string(),
        customer_phone: "(555) 123-4567".to_string(),
        party_size: 4,
        occasion: None,
        seating_preference: None,
        booking_date: "2025-06-11".to_string(),
        booking_time: "19:30".to_string(),
        special_requests: Some("   ".to_string()),
        priority_booking: false,
    }
}

fn issue_fields(error: Error) -> Vec<String> {
    match error {
        Error::Validation(issues) => issues.into_iter().map(|i| i.field).collect(),
        other => panic!("Expected a validation error, got {:?}", other),
    }
}

#[test]
fn accepts_and_normalizes_a_good_request() {
    let restaurant = RestaurantId::new("rest-1");
    let booking = validate(&good_request(), &restaurant, &clock(), &SlotPolicy::default()).expect("Request should pass intake");

    assert_eq!(booking.customer_name, "Maya Hart", "Name is trimmed");
    assert_eq!(booking.customer_email, "maya.hart@example.com", "Email is lowercased and trimmed");
    assert_eq!(booking.party_size, 4);
    assert_eq!(booking.status, BookingStatus::Pending);
    assert_eq!(booking.booking_time.to_string(), "19:30");
    assert_eq!(booking.special_requests, None, "Whitespace-only special requests are dropped");
    assert_eq!(booking.confirmed_at, None);
    assert_eq!(booking.cancelled_at, None);
}

#[test]
fn today_is_a_valid_booking_date() {
    let mut request = good_request();
    request.booking_date = "2025-06-10".to_string();

    assert!(validate(&request, &RestaurantId::new("rest-1"), &clock(), &SlotPolicy::default()).is_ok());
}

#[test]
fn every_failing_field_is_reported_at_once() {
    let request = BookingRequest {
        customer_name: "M".to_string(),
        customer_email: "not-an-email".to_string(),
        customer_phone: "12345".to_string(),
        party_size: 0,
        occasion: None,
        seating_preference: None,
        booking_date: "2025-06-09".to_string(),
        booking_time: "19:15".to_string(),
        special_requests: None,
        priority_booking: false,
    };

    let error = validate(&request, &RestaurantId::new("rest-1"), &clock(), &SlotPolicy::default()).unwrap_err();
    let fields = issue_fields(error);

    for expected in ["customerName", "customerEmail", "customerPhone", "personCount", "bookingDate", "bookingTime"] {
        assert!(fields.contains(&expected.to_string()), "Missing issue for {} in {:?}", expected, fields);
    }
}

#[test]
fn phone_rules() {
    let restaurant = RestaurantId::new("rest-1");
    let policy = SlotPolicy::default();

    let mut request = good_request();
    request.customer_phone = "555-123-4567x".to_string();
    assert_eq!(issue_fields(validate(&request, &restaurant, &clock(), &policy).unwrap_err()), vec!["customerPhone"]);

    request.customer_phone = "555-123-456".to_string();
    assert_eq!(issue_fields(validate(&request, &restaurant, &clock(), &policy).unwrap_err()), vec!["customerPhone"]);

    // Ten repetitions of one digit is rejected as junk.
    request.customer_phone = "9999999999".to_string();
    assert_eq!(issue_fields(validate(&request, &restaurant, &clock(), &policy).unwrap_err()), vec!["customerPhone"]);

    request.customer_phone = "+1 (55) 123-4567".to_string();
    assert!(validate(&request, &restaurant, &clock(), &policy).is_ok(), "Formatted ten-digit numbers pass");
}

#[test]
fn party_size_bounds() {
    let restaurant = RestaurantId::new("rest-1");

    let mut request = good_request();
    request.party_size = 100;
    assert!(validate(&request, &restaurant, &clock(), &SlotPolicy::default()).is_ok());

    request.party_size = 101;
    assert_eq!(issue_fields(validate(&request, &restaurant, &clock(), &SlotPolicy::default()).unwrap_err()), vec!["personCount"]);
}

#[test]
fn time_outside_service_window_is_rejected() {
    let mut request = good_request();
    request.booking_time = "11:30".to_string();

    let error = validate(&request, &RestaurantId::new("rest-1"), &clock(), &SlotPolicy::default()).unwrap_err();
    assert_eq!(issue_fields(error), vec!["bookingTime"]);
}

#[test]
fn wire_request_flows_through_intake() {
    let json = r#"{
        "customerName": "Maya Hart",
        "customerEmail": "maya.hart@example.com",
        "customerPhone": "5551234567",
        "personCount": 3,
        "occasion": "DATE",
        "seatingPreference": "WINDOW",
        "bookingDate": "2025-06-11",
        "bookingTime": "20:00",
        "specialRequests": null,
        "priorityBooking": null
    }"#;

    let dto: NewBookingDto = serde_json::from_str(json).expect("Request JSON should deserialize");
    let request = BookingRequest::from(dto);

    assert_eq!(request.occasion, Some(Occasion::Date));
    assert!(!request.priority_booking, "Absent priority flag defaults to false");

    let booking = validate(&request, &RestaurantId::new("rest-1"), &clock(), &SlotPolicy::default()).unwrap();
    assert_eq!(booking.booking_time.to_string(), "20:00");
    assert_eq!(booking.party_size, 3);
}

#[test]
fn name_length_bounds() {
    let restaurant = RestaurantId::new("rest-1");

    let mut request = good_request();
    request.customer_name = "x".repeat(51);
    assert_eq!(issue_fields(validate(&request, &restaurant, &clock(), &SlotPolicy::default()).unwrap_err()), vec!["customerName"]);

    request.customer_name = "Jo".to_string();
    assert!(validate(&request, &restaurant, &clock(), &SlotPolicy::default()).is_ok());
}
