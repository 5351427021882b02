use crate::domain::advisor::availability::ReservationSummary;
use crate::domain::time_slot::TimeSlot;

/// Longest wait the estimator will ever report, in minutes.
const MAX_WAIT_MINUTES: u32 = 45;

/// Extra minutes added for parties large enough to need tables joined.
const LARGE_PARTY_BUFFER: u32 = 10;

/// Estimates how long a party would wait if seated at `requested_slot`.
///
/// Unlike the availability computation this looks at every booking within
/// one *hour* of the requested slot's hour, inclusive on both sides. The
/// wider window is deliberate: large parties strain the slots around them,
/// not just their own. The summed head count is turned into a utilization
/// ratio against the capacity, scaled to a 0-30 minute base wait, padded
/// by a flat buffer for parties above four, and clamped to 45 minutes.
pub fn estimate_wait_minutes(reservations: &[ReservationSummary], requested_slot: TimeSlot, party_size: u32, total_capacity: u32) -> u32 {
    let hour = requested_slot.hour as i32;

    let total_people: u32 =
        reservations.iter().filter(|r| (r.time_of_day.hour as i32 - hour).abs() <= 1).map(|r| r.party_size).sum();

    let utilization = total_people as f64 / total_capacity as f64;

    // Base wait time: 0-30 minutes based on utilization
    let mut wait_minutes = (utilization * 30.0).round() as u32;

    if party_size > 4 {
        wait_minutes += LARGE_PARTY_BUFFER;
    }

    wait_minutes.min(MAX_WAIT_MINUTES)
}
