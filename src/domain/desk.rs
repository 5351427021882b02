use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::advisor::availability::SlotAvailability;
use crate::domain::advisor::{AdvisoryRequest, AdvisoryResult, advise};
use crate::domain::booking::{Booking, BookingStatus};
use crate::domain::clock::Clock;
use crate::domain::ids::{BookingId, TableId};
use crate::domain::intake::{self, BookingRequest};
use crate::domain::restaurant::{Restaurant, RestaurantDirectory};
use crate::domain::store::BookingStore;
use crate::error::{Error, Result};

/// Statuses that count against a slot's capacity. Cancelled and completed
/// bookings free their seats.
const OCCUPYING_STATUSES: [BookingStatus; 2] = [BookingStatus::Pending, BookingStatus::Confirmed];

/// The service surface tying the directory, the store, the clock and the
/// advisor together: placing bookings, answering the availability board,
/// advising guests, and applying lifecycle updates.
#[derive(Debug)]
pub struct BookingDesk {
    directory: RestaurantDirectory,
    store: Arc<dyn BookingStore>,
    clock: Arc<dyn Clock>,
}

impl BookingDesk {
    pub fn new(directory: RestaurantDirectory, store: Arc<dyn BookingStore>, clock: Arc<dyn Clock>) -> BookingDesk {
        BookingDesk { directory, store, clock }
    }

    pub fn directory(&self) -> &RestaurantDirectory {
        &self.directory
    }

    /// Takes a raw booking request for the restaurant behind `slug`,
    /// validates it at the intake boundary, and persists the resulting
    /// `Pending` booking.
    ///
    /// The availability board is *not* consulted here. Placement and
    /// advice read separate snapshots, so two guests can book the same
    /// last seats; the board will simply show the slot oversubscribed.
    pub fn place_booking(&self, slug: &str, request: &BookingRequest) -> Result<Booking> {
        let restaurant = self.restaurant_by_slug(slug)?;

        let booking = intake::validate(request, &restaurant.id, self.clock.as_ref(), &restaurant.policy)?;

        tracing::info!(
            "Placed booking {} at '{}' for {} guest(s) on {} {}.",
            booking.id,
            restaurant.name,
            booking.party_size,
            booking.booking_date,
            booking.booking_time
        );

        self.store.insert(booking.clone());

        Ok(booking)
    }

    /// The public availability board for one restaurant-day: remaining
    /// capacity and popularity per service slot, computed from pending and
    /// confirmed bookings only.
    pub fn availability_board(&self, slug: &str, date: NaiveDate) -> Result<Vec<SlotAvailability>> {
        let restaurant = self.restaurant_by_slug(slug)?;
        let reservations = self.store.list_for_day(&restaurant.id, date, &OCCUPYING_STATUSES);

        let slots = restaurant.policy.window.slots();
        Ok(crate::domain::advisor::availability::compute_availability(&slots, &reservations, restaurant.policy.total_capacity))
    }

    /// Full advisory pass for a guest: suggested slot for the party and
    /// occasion, plus a wait estimate when a specific slot was asked about.
    pub fn advise(&self, slug: &str, date: NaiveDate, request: &AdvisoryRequest) -> Result<AdvisoryResult> {
        let restaurant = self.restaurant_by_slug(slug)?;
        let reservations = self.store.list_for_day(&restaurant.id, date, &OCCUPYING_STATUSES);

        Ok(advise(&reservations, request, &restaurant.policy))
    }

    /// Staff status update, optionally assigning a table along the way.
    pub fn update_status(&self, id: &BookingId, status: BookingStatus, table_id: Option<TableId>) -> Result<Booking> {
        let mut booking = self.store.get(id).ok_or_else(|| Error::BookingNotFound(id.to_string()))?;

        booking.apply_status(status, table_id, self.clock.now());
        self.store.update(booking.clone());

        tracing::info!("Booking {} moved to {:?}.", booking.id, booking.status);

        Ok(booking)
    }

    /// Guest-side cancellation (weaker than the staff transition, see
    /// `Booking::cancel_as_guest`).
    pub fn cancel_as_guest(&self, id: &BookingId) -> Result<Booking> {
        let mut booking = self.store.get(id).ok_or_else(|| Error::BookingNotFound(id.to_string()))?;

        booking.cancel_as_guest(self.clock.now());
        self.store.update(booking.clone());

        tracing::info!("Booking {} cancelled by the guest.", booking.id);

        Ok(booking)
    }

    pub fn booking(&self, id: &BookingId) -> Result<Booking> {
        self.store.get(id).ok_or_else(|| Error::BookingNotFound(id.to_string()))
    }

    pub fn bookings(&self) -> Vec<Booking> {
        self.store.list_all()
    }

    fn restaurant_by_slug(&self, slug: &str) -> Result<&Restaurant> {
        self.directory.by_slug(slug).ok_or_else(|| Error::RestaurantNotFound(slug.to_string()))
    }
}
