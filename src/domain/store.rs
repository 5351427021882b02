use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::NaiveDate;

use crate::domain::advisor::availability::ReservationSummary;
use crate::domain::booking::{Booking, BookingStatus};
use crate::domain::ids::{BookingId, RestaurantId};

/// Storage contract for bookings. The advisor path only needs
/// `list_for_day`; the lifecycle operations need the rest.
///
/// Reads are plain snapshots: two placements racing on the same day can
/// both read a slot as free and jointly exceed its capacity. The store
/// does not reconcile that, matching the write path it was lifted from.
pub trait BookingStore: std::fmt::Debug + Send + Sync {
    fn insert(&self, booking: Booking);

    fn get(&self, id: &BookingId) -> Option<Booking>;

    /// Replaces the stored booking with the same id.
    ///
    /// # Returns
    /// `false` if no booking with that id exists (and an error is logged).
    fn update(&self, booking: Booking) -> bool;

    /// Projects one restaurant-day onto advisor input, keeping only
    /// bookings in one of the given statuses.
    fn list_for_day(&self, restaurant_id: &RestaurantId, date: NaiveDate, statuses: &[BookingStatus]) -> Vec<ReservationSummary>;

    fn list_all(&self) -> Vec<Booking>;
}

/// The in-memory reference implementation backing the tests and the demo
/// binary. A single lock protects the map.
#[derive(Debug, Default)]
pub struct InMemoryBookingStore {
    inner: Arc<RwLock<HashMap<BookingId, Booking>>>,
}

impl InMemoryBookingStore {
    pub fn new() -> Self {
        InMemoryBookingStore { inner: Arc::new(RwLock::new(HashMap::new())) }
    }
}

impl BookingStore for InMemoryBookingStore {
    fn insert(&self, booking: Booking) {
        let mut guard = self.inner.write().expect("RwLock poisoned");

        if guard.insert(booking.id.clone(), booking).is_some() {
            log::warn!("Insert replaced an existing booking with the same id. Ids are expected to be unique.");
        }
    }

    fn get(&self, id: &BookingId) -> Option<Booking> {
        let guard = self.inner.read().expect("RwLock poisoned");
        guard.get(id).cloned()
    }

    fn update(&self, booking: Booking) -> bool {
        let mut guard = self.inner.write().expect("RwLock poisoned");

        match guard.get_mut(&booking.id) {
            Some(slot) => {
                *slot = booking;
                true
            }
            None => {
                log::error!("Update of booking (id: {}) was not possible, because no booking with that id exists.", booking.id);
                false
            }
        }
    }

    fn list_for_day(&self, restaurant_id: &RestaurantId, date: NaiveDate, statuses: &[BookingStatus]) -> Vec<ReservationSummary> {
        let guard = self.inner.read().expect("RwLock poisoned");

        guard
            .values()
            .filter(|b| b.restaurant_id == *restaurant_id && b.booking_date == date && statuses.contains(&b.status))
            .map(Booking::summary)
            .collect()
    }

    fn list_all(&self) -> Vec<Booking> {
        let guard = self.inner.read().expect("RwLock poisoned");
        guard.values().cloned().collect()
    }
}
