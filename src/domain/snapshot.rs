use chrono::{DateTime, NaiveDate, Utc};

use crate::api::booking_dto::BookingDto;
use crate::api::restaurant_dto::RestaurantDto;
use crate::api::snapshot_dto::DaySnapshotDto;
use crate::domain::booking::Booking;
use crate::domain::ids::{BookingId, RestaurantId, TableId};
use crate::domain::restaurant::{ColorOverrides, Restaurant, Table};
use crate::domain::time_slot::{ServiceWindow, SlotPolicy, TimeSlot};
use crate::error::{Error, Result};

/// One restaurant and the bookings of one day, fully converted to domain
/// values. This is what the loader hands to the demo binary.
#[derive(Debug, Clone)]
pub struct DaySnapshot {
    pub restaurant: Restaurant,
    pub date: NaiveDate,
    pub bookings: Vec<Booking>,
}

impl DaySnapshot {
    /// Checked conversion from the wire format. Dates, times, and
    /// timestamps are parsed strictly; the first malformed record aborts
    /// the conversion, since a snapshot file is trusted persisted state
    /// rather than guest input.
    pub fn from_dto(dto: DaySnapshotDto) -> Result<DaySnapshot> {
        let restaurant = restaurant_from_dto(dto.restaurant)?;

        let date = NaiveDate::parse_from_str(&dto.date, "%Y-%m-%d")
            .map_err(|e| Error::ModelConstructionError(format!("Snapshot date '{}' is not a YYYY-MM-DD date: {}", dto.date, e)))?;

        let mut bookings = Vec::with_capacity(dto.bookings.len());
        for booking_dto in dto.bookings {
            bookings.push(booking_from_dto(booking_dto)?);
        }

        log::info!("Snapshot for '{}' on {} holds {} booking(s).", restaurant.name, date, bookings.len());

        Ok(DaySnapshot { restaurant, date, bookings })
    }
}

fn restaurant_from_dto(dto: RestaurantDto) -> Result<Restaurant> {
    let window = match (dto.opening_hour, dto.closing_hour) {
        (Some(open), Some(close)) => ServiceWindow::new(open, close),
        (None, None) => ServiceWindow::default(),
        _ => {
            return Err(Error::ModelConstructionError(format!(
                "Restaurant '{}' specifies only one of openingHour/closingHour.",
                dto.slug
            )));
        }
    };

    let policy = SlotPolicy { window, total_capacity: dto.total_capacity.unwrap_or(SlotPolicy::default().total_capacity) };

    if policy.total_capacity == 0 {
        return Err(Error::ModelConstructionError(format!("Restaurant '{}' has zero total capacity.", dto.slug)));
    }

    let tables = dto
        .tables
        .into_iter()
        .map(|t| Table {
            id: t.id.map(TableId::new).unwrap_or_else(TableId::fresh),
            table_number: t.table_number,
            capacity: t.capacity,
            location: t.location,
        })
        .collect();

    Ok(Restaurant {
        id: RestaurantId::new(dto.id),
        name: dto.name,
        slug: dto.slug,
        description: dto.description,
        vibe: dto.vibe.into(),
        color_overrides: ColorOverrides {
            primary_color: dto.primary_color,
            secondary_color: dto.secondary_color,
            accent_color: dto.accent_color,
        },
        address: dto.address,
        city: dto.city,
        is_active: dto.is_active,
        tables,
        policy,
    })
}

fn booking_from_dto(dto: BookingDto) -> Result<Booking> {
    let booking_time = TimeSlot::parse(&dto.booking_time)
        .ok_or_else(|| Error::ModelConstructionError(format!("Booking {} has a malformed time '{}'.", dto.id, dto.booking_time)))?;

    let booking_date = NaiveDate::parse_from_str(&dto.booking_date, "%Y-%m-%d")
        .map_err(|e| Error::ModelConstructionError(format!("Booking {} has a malformed date '{}': {}", dto.id, dto.booking_date, e)))?;

    if dto.person_count < 1 {
        return Err(Error::ModelConstructionError(format!("Booking {} has a non-positive party size {}.", dto.id, dto.person_count)));
    }

    Ok(Booking {
        id: BookingId::new(dto.id.clone()),
        restaurant_id: RestaurantId::new(dto.restaurant_id),
        customer_name: dto.customer_name,
        customer_email: dto.customer_email,
        customer_phone: dto.customer_phone,
        party_size: dto.person_count as u32,
        occasion: dto.occasion.map(Into::into),
        seating_preference: dto.seating_preference.map(Into::into),
        booking_date,
        booking_time,
        special_requests: dto.special_requests,
        priority_booking: dto.priority_booking,
        status: dto.status.into(),
        table_id: dto.table_id.map(TableId::new),
        created_at: parse_timestamp(&dto.id, "createdAt", &dto.created_at)?,
        confirmed_at: dto.confirmed_at.as_deref().map(|ts| parse_timestamp(&dto.id, "confirmedAt", ts)).transpose()?,
        cancelled_at: dto.cancelled_at.as_deref().map(|ts| parse_timestamp(&dto.id, "cancelledAt", ts)).transpose()?,
    })
}

fn parse_timestamp(booking_id: &str, field: &str, value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| Error::ModelConstructionError(format!("Booking {} has a malformed {} timestamp '{}': {}", booking_id, field, value, e)))
}

impl From<&Booking> for BookingDto {
    fn from(booking: &Booking) -> Self {
        BookingDto {
            id: booking.id.to_string(),
            restaurant_id: booking.restaurant_id.to_string(),
            customer_name: booking.customer_name.clone(),
            customer_email: booking.customer_email.clone(),
            customer_phone: booking.customer_phone.clone(),
            person_count: booking.party_size as i64,
            occasion: booking.occasion.map(Into::into),
            seating_preference: booking.seating_preference.map(Into::into),
            booking_date: booking.booking_date.format("%Y-%m-%d").to_string(),
            booking_time: booking.booking_time.to_string(),
            special_requests: booking.special_requests.clone(),
            priority_booking: booking.priority_booking,
            status: booking.status.into(),
            table_id: booking.table_id.as_ref().map(ToString::to_string),
            created_at: booking.created_at.to_rfc3339(),
            confirmed_at: booking.confirmed_at.map(|ts| ts.to_rfc3339()),
            cancelled_at: booking.cancelled_at.map(|ts| ts.to_rfc3339()),
        }
    }
}
