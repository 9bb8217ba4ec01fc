//! Help domain actions - business logic functions
//!
//! Actions are async functions called directly from GraphQL resolvers.
//! They validate input, drive the ledger, and report transition outcomes
//! as data rather than errors.

mod assign;
mod complete;
mod find_nearby;
mod queries;
mod reconcile;
mod seek_help;

pub use assign::assign_help;
pub use complete::complete_help;
pub use find_nearby::{find_nearby_requests, MATCH_RADIUS_KM};
pub use queries::{
    all_help_requests, get_help_request, patient_history, running_services, service_history,
};
pub use reconcile::reassign_patient_history;
pub use seek_help::seek_help;
