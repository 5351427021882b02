pub mod advisor;
pub mod booking;
pub mod clock;
pub mod desk;
pub mod feedback;
pub mod ids;
pub mod intake;
pub mod menu;
pub mod report;
pub mod restaurant;
pub mod snapshot;
pub mod store;
pub mod theme;
pub mod time_slot;
