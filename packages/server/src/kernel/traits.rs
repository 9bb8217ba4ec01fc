// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (like "find requests near a volunteer") lives in domain
// actions that use these traits.
//
// Naming convention: Base* for trait names (e.g., BaseHelpLedger)

use anyhow::Result;
use async_trait::async_trait;

use crate::common::{Coordinates, HelpRequestId, UserId};
use crate::domains::availability::models::{AvailabilityState, VolunteerAvailability};
use crate::domains::help::models::{
    AssignOutcome, CompleteOutcome, HelpRequest, HelpRequestWithVolunteer, PatientHelpRecord,
};

// =============================================================================
// Help Ledger Trait (Infrastructure - help request persistence)
// =============================================================================

#[async_trait]
pub trait BaseHelpLedger: Send + Sync {
    /// Create a new pending help request at the given location.
    ///
    /// Always succeeds; nothing is unique about a patient or a location.
    async fn create(&self, patient_id: UserId, location: Coordinates) -> Result<HelpRequest>;

    /// Fetch one request. `None` when it does not exist.
    async fn find_by_id(&self, id: HelpRequestId) -> Result<Option<HelpRequest>>;

    /// All requests still waiting for a volunteer. No ordering guarantee.
    async fn find_pending(&self) -> Result<Vec<HelpRequest>>;

    /// Claim a pending request for a volunteer.
    ///
    /// The status change and the volunteer's availability flip to
    /// `in_service` apply as one unit. First claim wins; a later claim gets
    /// `NoLongerAvailable`.
    async fn assign(&self, id: HelpRequestId, volunteer_id: UserId) -> Result<AssignOutcome>;

    /// Complete an assigned request.
    ///
    /// Only the assignee may complete. Atomic with the availability flip
    /// back to `available`.
    async fn complete(&self, id: HelpRequestId, volunteer_id: UserId) -> Result<CompleteOutcome>;

    /// Requests currently assigned to the volunteer (running services).
    async fn find_assigned_to(&self, volunteer_id: UserId) -> Result<Vec<HelpRequest>>;

    /// Requests the volunteer has completed (service history).
    async fn find_completed_by(&self, volunteer_id: UserId) -> Result<Vec<HelpRequest>>;

    /// A patient's help history with volunteer names resolved, most recent
    /// first.
    async fn patient_history(&self, patient_id: UserId) -> Result<Vec<PatientHelpRecord>>;

    /// Every request with its volunteer's display name (admin view).
    async fn find_all_with_volunteers(&self) -> Result<Vec<HelpRequestWithVolunteer>>;

    /// Rewrite `patient_id` across the ledger, for reconciling a guest
    /// identity to a registered user. Returns how many requests moved.
    async fn reassign_patient(
        &self,
        old_patient_id: UserId,
        new_patient_id: UserId,
    ) -> Result<u64>;
}

// =============================================================================
// Availability Registry Trait (Infrastructure - volunteer state persistence)
// =============================================================================

#[async_trait]
pub trait BaseAvailabilityRegistry: Send + Sync {
    /// Create or update the volunteer's record.
    ///
    /// State always overwrites; location only overwrites when provided.
    /// `updated_at` refreshes either way. This is the self-report path and
    /// the only place registry rows are created.
    async fn upsert(
        &self,
        volunteer_id: UserId,
        state: AvailabilityState,
        location: Option<Coordinates>,
    ) -> Result<VolunteerAvailability>;

    /// `None` is a normal outcome for a volunteer who never reported.
    async fn find(&self, volunteer_id: UserId) -> Result<Option<VolunteerAvailability>>;
}
