pub mod advisory_dto;
pub mod booking_dto;
pub mod restaurant_dto;
pub mod snapshot_dto;
