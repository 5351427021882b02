pub mod availability;
pub mod suggestion;
pub mod wait_estimate;

use crate::domain::time_slot::{SlotPolicy, TimeSlot};

use availability::{ReservationSummary, compute_availability};
use suggestion::suggest_best_slot;
use wait_estimate::estimate_wait_minutes;

/// The purpose of the visit, as hinted by the guest. Only used to bias the
/// slot suggestion; never validated against anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Occasion {
    Date,
    Birthday,
    Anniversary,
    Business,
    Casual,
    Celebration,
}

/// What the guest asked the advisor for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvisoryRequest {
    pub party_size: u32,
    pub occasion: Option<Occasion>,
    pub requested_slot: Option<TimeSlot>,
}

/// The advisor's answer. `suggested_slot` is `None` when the day is fully
/// booked for the party size; `wait_estimate_minutes` is present exactly
/// when the guest asked about a specific slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvisoryResult {
    pub suggested_slot: Option<TimeSlot>,
    pub wait_estimate_minutes: Option<u32>,
}

/// Runs the full advisory pass over one day's reservation snapshot:
/// availability per slot, a suggested slot biased by the occasion, and a
/// wait estimate when a specific slot was requested.
///
/// Pure over its inputs. The snapshot is whatever the caller fetched; two
/// callers racing on the same day can both be advised toward the same last
/// seats, exactly like the write path they feed into.
pub fn advise(reservations: &[ReservationSummary], request: &AdvisoryRequest, policy: &SlotPolicy) -> AdvisoryResult {
    let slots = policy.window.slots();
    let availabilities = compute_availability(&slots, reservations, policy.total_capacity);

    let suggested_slot = suggest_best_slot(&availabilities, request.party_size, request.occasion);

    let wait_estimate_minutes =
        request.requested_slot.map(|slot| estimate_wait_minutes(reservations, slot, request.party_size, policy.total_capacity));

    AdvisoryResult { suggested_slot, wait_estimate_minutes }
}
