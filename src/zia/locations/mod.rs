//! Locations module - parent locations, sublocations and the lite listing

mod api;
mod commands;
mod models;

pub use commands::{
    run_create_location_command, run_delete_location_command, run_location_command,
    run_update_location_command,
};
pub use models::{Location, LocationFilter, LocationLite, LocationLiteFilter, SublocationFilter};
