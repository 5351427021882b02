use std::sync::Arc;

use chrono::{NaiveDate, TimeZone, Utc};

use booking_desk::domain::advisor::{AdvisoryRequest, Occasion};
use booking_desk::domain::booking::BookingStatus;
use booking_desk::domain::clock::FixedClock;
use booking_desk::domain::desk::BookingDesk;
use booking_desk::domain::ids::{RestaurantId, TableId};
use booking_desk::domain::intake::BookingRequest;
use booking_desk::domain::restaurant::{ColorOverrides, Restaurant, RestaurantDirectory, RestaurantVibe, Table};
use booking_desk::domain::store::InMemoryBookingStore;
use booking_desk::domain::time_slot::{SlotPolicy, TimeSlot};
use booking_desk::error::Error;

fn restaurant(slug: &str, is_active: bool) -> Restaurant {
    Restaurant {
        id: RestaurantId::new(format!("rest-{}", slug)),
        name: format!("The {}", slug),
        slug: slug.to_string(),
        description: "A test restaurant".to_string(),
        vibe: RestaurantVibe::Calm,
        color_overrides: ColorOverrides::default(),
        address: "1 Test Street".to_string(),
        city: "Testville".to_string(),
        is_active,
        tables: vec![Table { id: TableId::new("table-1"), table_number: "T1".to_string(), capacity: 4, location: None }],
        policy: SlotPolicy::default(),
    }
}

fn desk() -> BookingDesk {
    let directory = RestaurantDirectory::new(vec![restaurant("lumiere", true), restaurant("dormant", false)]);
    let clock = FixedClock::new(Utc.with_ymd_and_hms(2025, 6, 10, 9, 0, 0).unwrap());

    BookingDesk::new(directory, Arc::new(InMemoryBookingStore::new()), Arc::new(clock))
}

fn request(time: &str, party_size: i64) -> BookingRequest {
    BookingRequest {
        customer_name: "Maya Hart".to_string(),
        customer_email: "maya.hart@example.com".to_string(),
        customer_phone: "5551234567".to_string(),
        party_size,
        occasion: None,
        seating_preference: None,
        booking_date: "2025-06-11".to_string(),
        booking_time: time.to_string(),
        special_requests: None,
        priority_booking: false,
    }
}

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 11).unwrap()
}

#[test]
fn placed_bookings_show_up_on_the_board() {
    let desk = desk();

    desk.place_booking("lumiere", &request("19:00", 4)).unwrap();
    desk.place_booking("lumiere", &request("19:00", 6)).unwrap();

    let board = desk.availability_board("lumiere", day()).unwrap();
    let at_19 = board.iter().find(|r| r.slot.to_string() == "19:00").unwrap();

    assert_eq!(at_19.remaining_capacity, 40);
    assert_eq!(at_19.popularity, 2);
}

#[test]
fn unknown_or_inactive_slugs_resolve_to_not_found() {
    let desk = desk();

    assert!(matches!(desk.place_booking("nowhere", &request("19:00", 2)), Err(Error::RestaurantNotFound(_))));
    assert!(matches!(desk.availability_board("dormant", day()), Err(Error::RestaurantNotFound(_))));
}

#[test]
fn cancelled_bookings_free_their_seats() {
    let desk = desk();

    let kept = desk.place_booking("lumiere", &request("20:00", 10)).unwrap();
    let dropped = desk.place_booking("lumiere", &request("20:00", 20)).unwrap();

    desk.update_status(&kept.id, BookingStatus::Confirmed, None).unwrap();
    desk.update_status(&dropped.id, BookingStatus::Cancelled, None).unwrap();

    let board = desk.availability_board("lumiere", day()).unwrap();
    let at_20 = board.iter().find(|r| r.slot.to_string() == "20:00").unwrap();

    assert_eq!(at_20.remaining_capacity, 40, "Only the confirmed ten guests occupy the slot");
    assert_eq!(at_20.popularity, 1);
}

#[test]
fn advise_returns_wait_only_for_a_requested_slot() {
    let desk = desk();

    desk.place_booking("lumiere", &request("19:00", 4)).unwrap();
    desk.place_booking("lumiere", &request("19:30", 6)).unwrap();

    let open_request = AdvisoryRequest { party_size: 2, occasion: None, requested_slot: None };
    let open_result = desk.advise("lumiere", day(), &open_request).unwrap();
    assert!(open_result.suggested_slot.is_some());
    assert_eq!(open_result.wait_estimate_minutes, None);

    let slot_request = AdvisoryRequest { party_size: 2, occasion: None, requested_slot: Some(TimeSlot::parse("19:30").unwrap()) };
    let slot_result = desk.advise("lumiere", day(), &slot_request).unwrap();
    assert_eq!(slot_result.wait_estimate_minutes, Some(6), "Ten guests near 19:xx -> utilization 0.2 -> six minutes");
}

#[test]
fn occasion_bias_flows_through_the_desk() {
    let desk = desk();

    let request = AdvisoryRequest { party_size: 2, occasion: Some(Occasion::Date), requested_slot: None };
    let result = desk.advise("lumiere", day(), &request).unwrap();

    // An empty day qualifies every slot; the romantic bucket starts at 19.
    assert_eq!(result.suggested_slot, Some(TimeSlot::parse("19:00").unwrap()));
}

#[test]
fn update_status_requires_an_existing_booking() {
    let desk = desk();

    let result = desk.update_status(&booking_desk::domain::ids::BookingId::new("missing"), BookingStatus::Confirmed, None);
    assert!(matches!(result, Err(Error::BookingNotFound(_))));
}

#[test]
fn guest_cancellation_via_the_desk() {
    let desk = desk();

    let placed = desk.place_booking("lumiere", &request("18:00", 2)).unwrap();
    desk.update_status(&placed.id, BookingStatus::Confirmed, Some(TableId::new("table-1"))).unwrap();

    let cancelled = desk.cancel_as_guest(&placed.id).unwrap();

    assert_eq!(cancelled.status, BookingStatus::Cancelled);
    assert!(cancelled.cancelled_at.is_some());
    assert!(cancelled.confirmed_at.is_some(), "Guest cancellation keeps the confirmation stamp");

    let stored = desk.booking(&placed.id).unwrap();
    assert_eq!(stored, cancelled, "The store holds the updated booking");
}

#[test]
fn racing_placements_can_jointly_exceed_capacity() {
    let desk = desk();

    // Both requests validated against the same empty snapshot; neither is
    // rejected, and the board afterwards simply shows the slot full.
    desk.place_booking("lumiere", &request("21:00", 30)).unwrap();
    desk.place_booking("lumiere", &request("21:00", 30)).unwrap();

    let board = desk.availability_board("lumiere", day()).unwrap();
    let at_21 = board.iter().find(|r| r.slot.to_string() == "21:00").unwrap();

    assert_eq!(at_21.remaining_capacity, 0);
    assert_eq!(at_21.popularity, 2);
}
