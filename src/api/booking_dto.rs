use serde::{Deserialize, Serialize};

use crate::domain::advisor::Occasion;
use crate::domain::booking::{BookingStatus, SeatingPreference};
use crate::domain::intake::BookingRequest;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OccasionDto {
    Date,
    Birthday,
    Anniversary,
    Business,
    Casual,
    Celebration,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeatingPreferenceDto {
    Window,
    Outdoor,
    Private,
    Bar,
    NoPreference,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatusDto {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

/// An incoming booking request, before intake validation. Dates travel as
/// `"YYYY-MM-DD"`, times as `"HH:MM"`; both stay strings here and are only
/// parsed behind the intake boundary.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewBookingDto {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub person_count: i64,
    pub occasion: Option<OccasionDto>,
    pub seating_preference: Option<SeatingPreferenceDto>,
    pub booking_date: String,
    pub booking_time: String,
    pub special_requests: Option<String>,
    pub priority_booking: Option<bool>,
}

impl From<NewBookingDto> for BookingRequest {
    fn from(dto: NewBookingDto) -> Self {
        BookingRequest {
            customer_name: dto.customer_name,
            customer_email: dto.customer_email,
            customer_phone: dto.customer_phone,
            party_size: dto.person_count,
            occasion: dto.occasion.map(Into::into),
            seating_preference: dto.seating_preference.map(Into::into),
            booking_date: dto.booking_date,
            booking_time: dto.booking_time,
            special_requests: dto.special_requests,
            priority_booking: dto.priority_booking.unwrap_or(false),
        }
    }
}

/// A persisted booking on the wire. Lifecycle timestamps are RFC 3339
/// strings; absent means the transition never happened.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    pub id: String,
    pub restaurant_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub person_count: i64,
    pub occasion: Option<OccasionDto>,
    pub seating_preference: Option<SeatingPreferenceDto>,
    pub booking_date: String,
    pub booking_time: String,
    pub special_requests: Option<String>,
    pub priority_booking: bool,
    pub status: BookingStatusDto,
    pub table_id: Option<String>,
    pub created_at: String,
    pub confirmed_at: Option<String>,
    pub cancelled_at: Option<String>,
}

impl From<OccasionDto> for Occasion {
    fn from(dto: OccasionDto) -> Self {
        match dto {
            OccasionDto::Date => Occasion::Date,
            OccasionDto::Birthday => Occasion::Birthday,
            OccasionDto::Anniversary => Occasion::Anniversary,
            OccasionDto::Business => Occasion::Business,
            OccasionDto::Casual => Occasion::Casual,
            OccasionDto::Celebration => Occasion::Celebration,
        }
    }
}

impl From<Occasion> for OccasionDto {
    fn from(occasion: Occasion) -> Self {
        match occasion {
            Occasion::Date => OccasionDto::Date,
            Occasion::Birthday => OccasionDto::Birthday,
            Occasion::Anniversary => OccasionDto::Anniversary,
            Occasion::Business => OccasionDto::Business,
            Occasion::Casual => OccasionDto::Casual,
            Occasion::Celebration => OccasionDto::Celebration,
        }
    }
}

impl From<SeatingPreferenceDto> for SeatingPreference {
    fn from(dto: SeatingPreferenceDto) -> Self {
        match dto {
            SeatingPreferenceDto::Window => SeatingPreference::Window,
            SeatingPreferenceDto::Outdoor => SeatingPreference::Outdoor,
            SeatingPreferenceDto::Private => SeatingPreference::Private,
            SeatingPreferenceDto::Bar => SeatingPreference::Bar,
            SeatingPreferenceDto::NoPreference => SeatingPreference::NoPreference,
        }
    }
}

impl From<SeatingPreference> for SeatingPreferenceDto {
    fn from(preference: SeatingPreference) -> Self {
        match preference {
            SeatingPreference::Window => SeatingPreferenceDto::Window,
            SeatingPreference::Outdoor => SeatingPreferenceDto::Outdoor,
            SeatingPreference::Private => SeatingPreferenceDto::Private,
            SeatingPreference::Bar => SeatingPreferenceDto::Bar,
            SeatingPreference::NoPreference => SeatingPreferenceDto::NoPreference,
        }
    }
}

impl From<BookingStatusDto> for BookingStatus {
    fn from(dto: BookingStatusDto) -> Self {
        match dto {
            BookingStatusDto::Pending => BookingStatus::Pending,
            BookingStatusDto::Confirmed => BookingStatus::Confirmed,
            BookingStatusDto::Cancelled => BookingStatus::Cancelled,
            BookingStatusDto::Completed => BookingStatus::Completed,
        }
    }
}

impl From<BookingStatus> for BookingStatusDto {
    fn from(status: BookingStatus) -> Self {
        match status {
            BookingStatus::Pending => BookingStatusDto::Pending,
            BookingStatus::Confirmed => BookingStatusDto::Confirmed,
            BookingStatus::Cancelled => BookingStatusDto::Cancelled,
            BookingStatus::Completed => BookingStatusDto::Completed,
        }
    }
}
