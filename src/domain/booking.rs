use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::advisor::Occasion;
use crate::domain::advisor::availability::ReservationSummary;
use crate::domain::ids::{BookingId, RestaurantId, TableId};
use crate::domain::time_slot::TimeSlot;

/// Lifecycle state of a booking.
///
/// Every booking starts out `Pending`. Staff moves it to `Confirmed` or
/// `Cancelled` from the dashboard, and to `Completed` once the guests have
/// left. Guests can only cancel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

/// Where the guest would like to sit. Purely informational; table
/// assignment stays a staff decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatingPreference {
    Window,
    Outdoor,
    Private,
    Bar,
    NoPreference,
}

/// A table booking as held by the store. Constructed exclusively by the
/// intake boundary, so every field in here has already passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: BookingId,
    pub restaurant_id: RestaurantId,

    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,

    pub party_size: u32,
    pub occasion: Option<Occasion>,
    pub seating_preference: Option<SeatingPreference>,
    pub booking_date: NaiveDate,
    pub booking_time: TimeSlot,
    pub special_requests: Option<String>,
    pub priority_booking: bool,

    pub status: BookingStatus,
    pub table_id: Option<TableId>,

    pub created_at: DateTime<Utc>,
    pub confirmed_at: Option<DateTime<Utc>>,
    pub cancelled_at: Option<DateTime<Utc>>,
}

impl Booking {
    /// Applies a staff status update, adjusting the two lifecycle
    /// timestamps the way the dashboard expects:
    /// - `Confirmed` stamps `confirmed_at` and clears `cancelled_at`,
    /// - `Cancelled` stamps `cancelled_at` and clears `confirmed_at`,
    /// - `Pending` clears both,
    /// - `Completed` touches neither.
    ///
    /// A table assignment may ride along with the update.
    pub fn apply_status(&mut self, status: BookingStatus, table_id: Option<TableId>, now: DateTime<Utc>) {
        self.status = status;

        match status {
            BookingStatus::Confirmed => {
                self.confirmed_at = Some(now);
                self.cancelled_at = None;
            }
            BookingStatus::Cancelled => {
                self.cancelled_at = Some(now);
                self.confirmed_at = None;
            }
            BookingStatus::Pending => {
                self.confirmed_at = None;
                self.cancelled_at = None;
            }
            BookingStatus::Completed => {}
        }

        if table_id.is_some() {
            self.table_id = table_id;
        }
    }

    /// Cancellation as performed by the guest themselves. Deliberately
    /// weaker than the staff `Cancelled` transition: the status flips and
    /// `cancelled_at` is stamped, but `confirmed_at` is left untouched.
    pub fn cancel_as_guest(&mut self, now: DateTime<Utc>) {
        self.status = BookingStatus::Cancelled;
        self.cancelled_at = Some(now);
    }

    /// The advisor-facing projection of this booking.
    pub fn summary(&self) -> ReservationSummary {
        ReservationSummary { time_of_day: self.booking_time, party_size: self.party_size }
    }
}
