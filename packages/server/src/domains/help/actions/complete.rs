//! Complete action - the assignee closes out a request

use anyhow::Result;
use tracing::info;

use crate::common::{HelpRequestId, UserId};
use crate::domains::help::models::CompleteOutcome;
use crate::kernel::ServerDeps;

/// Complete an assigned request.
///
/// Only the assigned volunteer may complete; anyone else gets
/// `NotAssignee` and the request is untouched. On success the request
/// keeps its assignee and the volunteer's availability flips back to
/// `available`.
pub async fn complete_help(
    help_id: HelpRequestId,
    volunteer_id: UserId,
    deps: &ServerDeps,
) -> Result<CompleteOutcome> {
    let outcome = deps.help_ledger.complete(help_id, volunteer_id).await?;
    match &outcome {
        CompleteOutcome::Completed(request) => {
            info!(
                "Help request {} completed by volunteer {}",
                request.id, volunteer_id
            );
        }
        CompleteOutcome::NotFound => {
            info!("Complete rejected: help request {} not found", help_id);
        }
        CompleteOutcome::NotCompletable => {
            info!("Complete rejected: help request {} is not assigned", help_id);
        }
        CompleteOutcome::NotAssignee => {
            info!(
                "Complete rejected: volunteer {} is not assigned to help request {}",
                volunteer_id, help_id
            );
        }
    }
    Ok(outcome)
}
