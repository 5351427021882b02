use crate::domain::time_slot::TimeSlot;

/// Read-only projection of a persisted booking, carrying just what the
/// advisor needs. Built fresh from the store for each query and never
/// mutated here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservationSummary {
    pub time_of_day: TimeSlot,
    pub party_size: u32,
}

/// Derived per-slot load figure. `popularity` is the *count* of bookings
/// sitting in the slot, not the summed head count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotAvailability {
    pub slot: TimeSlot,
    pub remaining_capacity: u32,
    pub popularity: u32,
}

/// Computes the remaining capacity and popularity of every slot against a
/// day's reservations. Matching is exact on the slot (the wait estimator
/// deliberately uses a wider window, see `wait_estimate`).
///
/// # Returns
/// One entry per input slot, in input order. Slots without any booking are
/// kept, with full capacity and zero popularity. Remaining capacity is
/// clamped at zero when a slot is oversubscribed.
pub fn compute_availability(slots: &[TimeSlot], reservations: &[ReservationSummary], total_capacity: u32) -> Vec<SlotAvailability> {
    slots
        .iter()
        .map(|&slot| {
            let mut booked_people: u32 = 0;
            let mut popularity: u32 = 0;

            for reservation in reservations.iter().filter(|r| r.time_of_day == slot) {
                booked_people += reservation.party_size;
                popularity += 1;
            }

            if booked_people > total_capacity {
                log::debug!("Slot {} is oversubscribed: {} booked against capacity {}.", slot, booked_people, total_capacity);
            }

            SlotAvailability { slot, remaining_capacity: total_capacity.saturating_sub(booked_people), popularity }
        })
        .collect()
}
