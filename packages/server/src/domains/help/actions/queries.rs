//! Help query actions
//!
//! Query actions return data directly and are called without a transition.
//! Auth checks are done at the GraphQL layer.

use anyhow::Result;
use tracing::info;

use crate::common::{HelpRequestId, UserId};
use crate::domains::help::models::{HelpRequest, HelpRequestWithVolunteer, PatientHelpRecord};
use crate::kernel::ServerDeps;

/// Fetch a single help request by id.
pub async fn get_help_request(
    id: HelpRequestId,
    deps: &ServerDeps,
) -> Result<Option<HelpRequest>> {
    deps.help_ledger.find_by_id(id).await
}

/// Requests currently assigned to the volunteer.
pub async fn running_services(volunteer_id: UserId, deps: &ServerDeps) -> Result<Vec<HelpRequest>> {
    deps.help_ledger.find_assigned_to(volunteer_id).await
}

/// Requests the volunteer has completed.
pub async fn service_history(volunteer_id: UserId, deps: &ServerDeps) -> Result<Vec<HelpRequest>> {
    deps.help_ledger.find_completed_by(volunteer_id).await
}

/// A patient's help history, most recent first, with volunteer names
/// resolved where a volunteer was ever assigned.
pub async fn patient_history(
    patient_id: UserId,
    deps: &ServerDeps,
) -> Result<Vec<PatientHelpRecord>> {
    deps.help_ledger.patient_history(patient_id).await
}

/// Every help request with its volunteer's display name. Admin view.
pub async fn all_help_requests(deps: &ServerDeps) -> Result<Vec<HelpRequestWithVolunteer>> {
    info!("Listing all help requests");
    deps.help_ledger.find_all_with_volunteers().await
}
