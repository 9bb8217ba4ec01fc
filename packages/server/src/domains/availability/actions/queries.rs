//! Availability query actions
//!
//! Auth checks are done at the GraphQL layer.

use anyhow::Result;

use crate::common::UserId;
use crate::domains::availability::models::VolunteerAvailability;
use crate::kernel::ServerDeps;

/// The volunteer's current registry record, `None` if they never reported.
pub async fn get_availability(
    volunteer_id: UserId,
    deps: &ServerDeps,
) -> Result<Option<VolunteerAvailability>> {
    deps.availability.find(volunteer_id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Coordinates;
    use crate::domains::availability::actions::set_availability;
    use crate::domains::availability::models::AvailabilityState;
    use crate::kernel::in_memory_deps;

    #[tokio::test]
    async fn test_unreported_volunteer_has_no_record() {
        let (deps, _) = in_memory_deps();

        let record = get_availability(UserId::new(), &deps).await.unwrap();

        assert!(record.is_none());
    }

    #[tokio::test]
    async fn test_reported_volunteer_reads_back() {
        let (deps, _) = in_memory_deps();
        let volunteer = UserId::new();
        set_availability(
            volunteer,
            AvailabilityState::InService,
            Some(Coordinates::new(44.95, -93.1)),
            &deps,
        )
        .await
        .unwrap();

        let record = get_availability(volunteer, &deps).await.unwrap().unwrap();

        assert_eq!(record.state, "in_service");
    }
}
