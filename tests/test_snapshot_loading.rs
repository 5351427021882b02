use std::fs;
use std::path::PathBuf;

use booking_desk::domain::booking::BookingStatus;
use booking_desk::error::Error;
use booking_desk::load_day_snapshot;

const SNAPSHOT: &str = r##"{
  "restaurant": {
    "id": "rest-1",
    "name": "La Lumiere",
    "slug": "la-lumiere",
    "description": "Fine dining with a seasonal menu.",
    "vibe": "LUXURY",
    "primaryColor": "#123456",
    "secondaryColor": null,
    "accentColor": null,
    "address": "12 Harbor Lane",
    "city": "Portside",
    "isActive": true,
    "tables": [
      { "id": "table-1", "tableNumber": "T1", "capacity": 4, "location": "window" }
    ],
    "openingHour": 17,
    "closingHour": 22,
    "totalCapacity": 40
  },
  "date": "2025-06-11",
  "bookings": [
    {
      "id": "booking-1",
      "restaurantId": "rest-1",
      "customerName": "Maya Hart",
      "customerEmail": "maya.hart@example.com",
      "customerPhone": "5551234567",
      "personCount": 4,
      "occasion": "ANNIVERSARY",
      "seatingPreference": "WINDOW",
      "bookingDate": "2025-06-11",
      "bookingTime": "19:30",
      "specialRequests": "Corner table please",
      "priorityBooking": false,
      "status": "CONFIRMED",
      "tableId": "table-1",
      "createdAt": "2025-06-10T09:00:00+00:00",
      "confirmedAt": "2025-06-10T10:30:00+00:00",
      "cancelledAt": null
    }
  ]
}"##;

fn write_snapshot(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(name);
    fs::write(&path, contents).expect("Could not write test snapshot");
    path
}

#[test]
fn loads_a_well_formed_snapshot() {
    let path = write_snapshot("booking_desk_snapshot_ok.json", SNAPSHOT);
    let snapshot = load_day_snapshot(path.to_str().unwrap()).expect("Snapshot should load");

    assert_eq!(snapshot.restaurant.slug, "la-lumiere");
    assert_eq!(snapshot.restaurant.policy.total_capacity, 40);
    assert_eq!(snapshot.restaurant.policy.window.opening_hour, 17);
    assert_eq!(snapshot.restaurant.policy.window.closing_hour, 22);
    assert_eq!(snapshot.restaurant.color_overrides.primary_color.as_deref(), Some("#123456"));
    assert_eq!(snapshot.date.to_string(), "2025-06-11");

    assert_eq!(snapshot.bookings.len(), 1);
    let booking = &snapshot.bookings[0];
    assert_eq!(booking.booking_time.to_string(), "19:30");
    assert_eq!(booking.party_size, 4);
    assert_eq!(booking.status, BookingStatus::Confirmed);
    assert!(booking.confirmed_at.is_some());
    assert_eq!(booking.cancelled_at, None);
}

#[test]
fn malformed_booking_time_aborts_the_conversion() {
    let path = write_snapshot("booking_desk_snapshot_bad_time.json", &SNAPSHOT.replace("\"19:30\"", "\"19:15\""));

    let result = load_day_snapshot(path.to_str().unwrap());
    assert!(matches!(result, Err(Error::ModelConstructionError(_))));
}

#[test]
fn unknown_enum_values_fail_deserialization() {
    let path = write_snapshot("booking_desk_snapshot_bad_enum.json", &SNAPSHOT.replace("\"ANNIVERSARY\"", "\"WEDDING\""));

    let result = load_day_snapshot(path.to_str().unwrap());
    assert!(matches!(result, Err(Error::DeserializationError(_))));
}

#[test]
fn zero_capacity_is_rejected() {
    let path = write_snapshot("booking_desk_snapshot_zero_cap.json", &SNAPSHOT.replace("\"totalCapacity\": 40", "\"totalCapacity\": 0"));

    let result = load_day_snapshot(path.to_str().unwrap());
    assert!(matches!(result, Err(Error::ModelConstructionError(_))));
}

#[test]
fn missing_file_surfaces_an_io_error() {
    let result = load_day_snapshot("/nonexistent/booking_desk_snapshot.json");
    assert!(matches!(result, Err(Error::IoError(_))));
}
