use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use booking_desk::domain::advisor::availability::{ReservationSummary, compute_availability};
use booking_desk::domain::time_slot::{ServiceWindow, TimeSlot};

fn reservation(time: &str, party_size: u32) -> ReservationSummary {
    ReservationSummary { time_of_day: TimeSlot::parse(time).expect("test slot must parse"), party_size }
}

#[test]
fn default_window_generates_24_slots() {
    let slots = ServiceWindow::default().slots();

    assert_eq!(slots.len(), 24);
    assert_eq!(slots[0].to_string(), "12:00");
    assert_eq!(slots[23].to_string(), "23:30");

    for pair in slots.windows(2) {
        assert!(pair[0] < pair[1], "Slot order must be strictly ascending");
    }
}

#[test]
fn custom_window_is_respected() {
    let slots = ServiceWindow::new(18, 20).slots();

    assert_eq!(slots.len(), 6);
    assert_eq!(slots[0].to_string(), "18:00");
    assert_eq!(slots[5].to_string(), "20:30");
}

#[test]
fn empty_day_keeps_every_slot_at_full_capacity() {
    let slots = ServiceWindow::default().slots();
    let board = compute_availability(&slots, &[], 50);

    assert_eq!(board.len(), slots.len());

    for row in &board {
        assert_eq!(row.remaining_capacity, 50);
        assert_eq!(row.popularity, 0);
    }
}

#[test]
fn popularity_counts_bookings_not_people() {
    let slots = ServiceWindow::default().slots();
    let reservations = vec![reservation("19:00", 4), reservation("19:00", 6), reservation("19:30", 2)];

    let board = compute_availability(&slots, &reservations, 50);

    let at_19 = board.iter().find(|r| r.slot.to_string() == "19:00").unwrap();
    assert_eq!(at_19.popularity, 2, "Two bookings sit in the slot");
    assert_eq!(at_19.remaining_capacity, 40, "Ten guests out of fifty are booked");

    let at_19_30 = board.iter().find(|r| r.slot.to_string() == "19:30").unwrap();
    assert_eq!(at_19_30.popularity, 1);
    assert_eq!(at_19_30.remaining_capacity, 48);
}

#[test]
fn oversubscribed_slot_clamps_at_zero() {
    let slots = ServiceWindow::default().slots();
    let reservations = vec![reservation("20:00", 30), reservation("20:00", 30)];

    let board = compute_availability(&slots, &reservations, 50);

    let at_20 = board.iter().find(|r| r.slot.to_string() == "20:00").unwrap();
    assert_eq!(at_20.remaining_capacity, 0, "Remaining capacity never goes negative");
    assert_eq!(at_20.popularity, 2);
}

#[test]
fn matching_is_exact_on_the_slot() {
    let slots = ServiceWindow::default().slots();
    let reservations = vec![reservation("19:00", 10)];

    let board = compute_availability(&slots, &reservations, 50);

    let at_19_30 = board.iter().find(|r| r.slot.to_string() == "19:30").unwrap();
    assert_eq!(at_19_30.remaining_capacity, 50, "Adjacent half-hour must not absorb the booking");
}

/// Property check over random reservation sets: the output always covers
/// every slot in order, remaining capacity never exceeds the total, and a
/// slot booked at or over capacity reports zero remaining.
#[test]
fn board_invariants_hold_for_random_days() {
    let mut rng = StdRng::seed_from_u64(7);
    let slots = ServiceWindow::default().slots();

    for _ in 0..200 {
        let capacity: u32 = rng.random_range(1..=80);

        let reservations: Vec<ReservationSummary> = (0..rng.random_range(0..60))
            .map(|_| ReservationSummary { time_of_day: slots[rng.random_range(0..slots.len())], party_size: rng.random_range(1..=12) })
            .collect();

        let board = compute_availability(&slots, &reservations, capacity);

        assert_eq!(board.len(), slots.len());

        for (row, slot) in board.iter().zip(&slots) {
            assert_eq!(row.slot, *slot, "Output must preserve slot order");
            assert!(row.remaining_capacity <= capacity);

            let booked: u32 = reservations.iter().filter(|r| r.time_of_day == *slot).map(|r| r.party_size).sum();
            if booked >= capacity {
                assert_eq!(row.remaining_capacity, 0);
            } else {
                assert_eq!(row.remaining_capacity, capacity - booked);
            }
        }
    }
}
