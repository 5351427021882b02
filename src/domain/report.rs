use chrono::NaiveDate;

use crate::domain::booking::{Booking, BookingStatus};
use crate::domain::restaurant::RestaurantDirectory;

/// Bookings per dashboard page.
pub const PAGE_SIZE: usize = 20;

/// Filter parameters of the admin booking list.
#[derive(Debug, Clone, Default)]
pub struct BookingFilter {
    /// Substring matched against customer name, email (both
    /// case-insensitive), phone (case-sensitive) and restaurant name
    /// (case-insensitive).
    pub search: Option<String>,
    pub status: Option<BookingStatus>,
}

/// One page of the admin booking list.
#[derive(Debug, Clone)]
pub struct BookingPage {
    pub bookings: Vec<Booking>,
    pub page: usize,
    pub total_pages: usize,
    pub total_bookings: usize,
}

/// The headline tallies of the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingStats {
    pub total: usize,
    pub confirmed: usize,
    pub pending: usize,
    pub cancelled: usize,
    /// Bookings for today or a later day, measured against the caller's
    /// "today".
    pub upcoming: usize,
}

/// Applies the admin filter and returns the bookings newest-first by
/// creation time. The restaurant-name leg of the search resolves names
/// through the directory; bookings pointing at an unknown restaurant
/// simply never match on that leg.
pub fn filter_bookings(bookings: &[Booking], directory: &RestaurantDirectory, filter: &BookingFilter) -> Vec<Booking> {
    let needle_lower = filter.search.as_deref().map(str::to_lowercase);

    let mut matches: Vec<Booking> = bookings
        .iter()
        .filter(|b| filter.status.is_none_or(|status| b.status == status))
        .filter(|b| match (&filter.search, &needle_lower) {
            (Some(needle), Some(needle_lower)) => {
                b.customer_name.to_lowercase().contains(needle_lower)
                    || b.customer_email.to_lowercase().contains(needle_lower)
                    || b.customer_phone.contains(needle.as_str())
                    || directory.by_id(&b.restaurant_id).is_some_and(|r| r.name.to_lowercase().contains(needle_lower))
            }
            _ => true,
        })
        .cloned()
        .collect();

    matches.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    matches
}

/// Cuts one page out of an already filtered, already ordered booking list.
/// Pages are 1-based; a page past the end comes back empty but still
/// reports the real totals.
pub fn paginate(bookings: Vec<Booking>, page: usize, per_page: usize) -> BookingPage {
    let total_bookings = bookings.len();
    let total_pages = total_bookings.div_ceil(per_page);

    let page = page.max(1);
    let skip = (page - 1) * per_page;

    let bookings: Vec<Booking> = bookings.into_iter().skip(skip).take(per_page).collect();

    BookingPage { bookings, page, total_pages, total_bookings }
}

/// Status tallies over the full booking set, independent of any filter or
/// page the admin is currently looking at.
pub fn stats(bookings: &[Booking], today: NaiveDate) -> BookingStats {
    BookingStats {
        total: bookings.len(),
        confirmed: bookings.iter().filter(|b| b.status == BookingStatus::Confirmed).count(),
        pending: bookings.iter().filter(|b| b.status == BookingStatus::Pending).count(),
        cancelled: bookings.iter().filter(|b| b.status == BookingStatus::Cancelled).count(),
        upcoming: bookings.iter().filter(|b| b.booking_date >= today).count(),
    }
}
