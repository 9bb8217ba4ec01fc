//! Guest reconciliation - move a guest's requests to a registered user

use anyhow::Result;
use tracing::info;

use crate::common::UserId;
use crate::kernel::ServerDeps;

/// Rewrite every help request opened under `guest_id` to belong to
/// `patient_id`.
///
/// Zero rewrites is success: the guest may simply never have asked for
/// help. Returns how many requests moved.
pub async fn reassign_patient_history(
    guest_id: UserId,
    patient_id: UserId,
    deps: &ServerDeps,
) -> Result<u64> {
    let moved = deps
        .help_ledger
        .reassign_patient(guest_id, patient_id)
        .await?;
    info!(
        "Moved {} help requests from guest {} to patient {}",
        moved, guest_id, patient_id
    );
    Ok(moved)
}
