use crate::domain::advisor::Occasion;
use crate::domain::advisor::availability::SlotAvailability;
use crate::domain::time_slot::TimeSlot;

/// Picks the slot to recommend for a party, biased by the occasion.
///
/// The policy is a fixed bucket cascade, first match wins:
/// 1. DATE / ANNIVERSARY: the earliest qualifying slot with hour 19-21.
/// 2. CELEBRATION / BIRTHDAY: the earliest qualifying slot with hour >= 20.
/// 3. BUSINESS: the earliest qualifying slot with hour 18-20.
/// 4. Everything else, and any occasion whose bucket came up empty: the
///    qualifying slot with the best `remaining / (popularity + 1)` score,
///    ties resolved in favor of the earlier slot.
///
/// A slot qualifies when its remaining capacity covers the party. Inside a
/// bucket the first match is taken as-is, even when a later slot in the
/// bucket has more room; that is the recommender's intended behavior, not
/// an optimization miss.
///
/// # Returns
/// `None` exactly when no slot has room for the party. Callers present
/// that as "fully booked", not as an error.
pub fn suggest_best_slot(availabilities: &[SlotAvailability], party_size: u32, occasion: Option<Occasion>) -> Option<TimeSlot> {
    let qualifying: Vec<&SlotAvailability> = availabilities.iter().filter(|a| a.remaining_capacity >= party_size).collect();

    if qualifying.is_empty() {
        log::debug!("No slot has capacity left for a party of {}.", party_size);
        return None;
    }

    if let Some(occasion) = occasion {
        if let Some(preferred) = occasion_bucket(&qualifying, occasion) {
            log::debug!("Occasion {:?} bucket matched slot {}.", occasion, preferred);
            return Some(preferred);
        }
    }

    // Fallback ranking by remaining/(popularity + 1). The sort must be
    // stable so that score ties keep service order deterministically.
    let mut ranked = qualifying;
    ranked.sort_by(|a, b| {
        let score_a = a.remaining_capacity as f64 / (a.popularity as f64 + 1.0);
        let score_b = b.remaining_capacity as f64 / (b.popularity as f64 + 1.0);

        score_b.partial_cmp(&score_a).unwrap_or(std::cmp::Ordering::Equal)
    });

    Some(ranked[0].slot)
}

/// The occasion-specific preference bucket: the earliest qualifying slot
/// inside the occasion's favored hours, or `None` when the bucket is empty
/// (CASUAL has no bucket and always falls through to the ranking).
fn occasion_bucket(qualifying: &[&SlotAvailability], occasion: Occasion) -> Option<TimeSlot> {
    let in_bucket: fn(u8) -> bool = match occasion {
        // Romantic occasions prefer the later evening
        Occasion::Date | Occasion::Anniversary => |hour| (19..=21).contains(&hour),
        // Parties prefer late slots
        Occasion::Celebration | Occasion::Birthday => |hour| hour >= 20,
        // Business dinners prefer the early evening
        Occasion::Business => |hour| (18..=20).contains(&hour),
        Occasion::Casual => return None,
    };

    qualifying.iter().find(|a| in_bucket(a.slot.hour)).map(|a| a.slot)
}
