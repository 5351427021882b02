use crate::api::snapshot_dto::DaySnapshotDto;
use crate::domain::snapshot::DaySnapshot;
use crate::error::Result;
use crate::loader::parser::parse_json_file;

pub mod api;
pub mod domain;
pub mod error;
pub mod loader;
pub mod logger;

/// Reads a day snapshot file and converts it into domain values.
pub fn load_day_snapshot(file_path: &str) -> Result<DaySnapshot> {
    logger::init();

    let snapshot_dto: DaySnapshotDto = parse_json_file::<DaySnapshotDto>(file_path)?;
    log::info!("JSON file parsed successfully.");

    let snapshot = DaySnapshot::from_dto(snapshot_dto)?;
    log::info!("Internal day snapshot constructed successfully.");

    Ok(snapshot)
}
