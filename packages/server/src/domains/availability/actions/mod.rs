//! Availability domain actions - business logic functions

mod queries;
mod report;

pub use queries::get_availability;
pub use report::set_availability;
