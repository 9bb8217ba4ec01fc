pub mod availability;

pub use availability::{AvailabilityData, AvailabilityStateData, SetAvailabilityInput};
