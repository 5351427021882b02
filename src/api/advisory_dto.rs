use serde::{Deserialize, Serialize};

use crate::api::booking_dto::OccasionDto;
use crate::domain::advisor::AdvisoryResult;
use crate::domain::advisor::availability::SlotAvailability;

/// One row of the public availability board.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SlotAvailabilityDto {
    pub time: String,
    pub availability: u32,
    pub popularity: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AdvisoryRequestDto {
    pub person_count: u32,
    pub occasion: Option<OccasionDto>,
    pub requested_time: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AdvisoryResultDto {
    pub suggestion: Option<String>,
    pub wait_estimate_minutes: Option<u32>,
}

impl From<&SlotAvailability> for SlotAvailabilityDto {
    fn from(availability: &SlotAvailability) -> Self {
        SlotAvailabilityDto {
            time: availability.slot.to_string(),
            availability: availability.remaining_capacity,
            popularity: availability.popularity,
        }
    }
}

impl From<&AdvisoryResult> for AdvisoryResultDto {
    fn from(result: &AdvisoryResult) -> Self {
        AdvisoryResultDto {
            suggestion: result.suggested_slot.map(|slot| slot.to_string()),
            wait_estimate_minutes: result.wait_estimate_minutes,
        }
    }
}
