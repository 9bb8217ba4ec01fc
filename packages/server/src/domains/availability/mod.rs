//! Availability domain - volunteer state and location self-reports

pub mod actions;
pub mod data;
pub mod models;

// Re-export commonly used types
pub use data::AvailabilityData;
pub use models::{AvailabilityState, VolunteerAvailability};
