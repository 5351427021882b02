use serde::{Deserialize, Serialize};

use crate::api::booking_dto::BookingDto;
use crate::api::restaurant_dto::RestaurantDto;

/// The file format of the demo binary: one restaurant and the bookings of
/// one day, as produced by `seed` and consumed by `board`/`advise`.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DaySnapshotDto {
    pub restaurant: RestaurantDto,
    pub date: String,
    pub bookings: Vec<BookingDto>,
}
