pub mod availability;
pub mod registry;

pub use availability::*;
pub use registry::PostgresAvailabilityRegistry;
