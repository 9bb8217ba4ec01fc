//! Help domain - the request lifecycle from seeking help to completion

pub mod actions;
pub mod data;
pub mod models;

// Re-export commonly used types
pub use data::{HelpRequestData, TransitionData};
pub use models::{AssignOutcome, CompleteOutcome, HelpRequest, HelpStatus, NearbyOutcome};
