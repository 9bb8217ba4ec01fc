//! Assign action - a volunteer claims a pending request

use anyhow::Result;
use tracing::info;

use crate::common::{HelpRequestId, UserId};
use crate::domains::help::models::AssignOutcome;
use crate::kernel::ServerDeps;

/// Claim a pending request for a volunteer.
///
/// First claim wins. The request flips to `assigned` and the volunteer's
/// availability to `in_service` as one unit; a lost race reports
/// `NoLongerAvailable` rather than an error.
pub async fn assign_help(
    help_id: HelpRequestId,
    volunteer_id: UserId,
    deps: &ServerDeps,
) -> Result<AssignOutcome> {
    let outcome = deps.help_ledger.assign(help_id, volunteer_id).await?;
    match &outcome {
        AssignOutcome::Assigned(request) => {
            info!(
                "Help request {} assigned to volunteer {}",
                request.id, volunteer_id
            );
        }
        AssignOutcome::NotFound => {
            info!("Assign rejected: help request {} not found", help_id);
        }
        AssignOutcome::NoLongerAvailable => {
            info!(
                "Assign rejected: help request {} is no longer pending",
                help_id
            );
        }
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Coordinates;
    use crate::domains::availability::actions::set_availability;
    use crate::domains::availability::models::AvailabilityState;
    use crate::domains::help::actions::seek_help;
    use crate::kernel::in_memory_deps;
    use futures::future::join_all;

    #[tokio::test]
    async fn test_assign_claims_pending_request() {
        let (deps, _) = in_memory_deps();
        let volunteer = UserId::new();
        let request = seek_help(UserId::new(), Coordinates::new(44.95, -93.1), &deps)
            .await
            .unwrap();

        let outcome = assign_help(request.id, volunteer, &deps).await.unwrap();

        let AssignOutcome::Assigned(assigned) = outcome else {
            panic!("expected Assigned, got {outcome:?}");
        };
        assert_eq!(assigned.status, "assigned");
        assert_eq!(assigned.volunteer_id, Some(volunteer));
    }

    #[tokio::test]
    async fn test_assign_flips_availability_to_in_service() {
        let (deps, _) = in_memory_deps();
        let volunteer = UserId::new();
        set_availability(
            volunteer,
            AvailabilityState::Available,
            Some(Coordinates::new(44.95, -93.1)),
            &deps,
        )
        .await
        .unwrap();
        let request = seek_help(UserId::new(), Coordinates::new(44.95, -93.1), &deps)
            .await
            .unwrap();

        assign_help(request.id, volunteer, &deps).await.unwrap();

        let record = deps.availability.find(volunteer).await.unwrap().unwrap();
        assert_eq!(record.state, "in_service");
    }

    #[tokio::test]
    async fn test_assign_without_registry_row_still_succeeds() {
        // A volunteer who never self-reported has no registry row; the
        // claim sticks and no row appears.
        let (deps, _) = in_memory_deps();
        let volunteer = UserId::new();
        let request = seek_help(UserId::new(), Coordinates::new(44.95, -93.1), &deps)
            .await
            .unwrap();

        let outcome = assign_help(request.id, volunteer, &deps).await.unwrap();

        assert!(matches!(outcome, AssignOutcome::Assigned(_)));
        assert!(deps.availability.find(volunteer).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_assign_unknown_request_is_not_found() {
        let (deps, _) = in_memory_deps();

        let outcome = assign_help(HelpRequestId::new(), UserId::new(), &deps)
            .await
            .unwrap();

        assert!(matches!(outcome, AssignOutcome::NotFound));
    }

    #[tokio::test]
    async fn test_second_assign_loses() {
        let (deps, _) = in_memory_deps();
        let first = UserId::new();
        let second = UserId::new();
        let request = seek_help(UserId::new(), Coordinates::new(44.95, -93.1), &deps)
            .await
            .unwrap();

        assign_help(request.id, first, &deps).await.unwrap();
        let outcome = assign_help(request.id, second, &deps).await.unwrap();

        assert!(matches!(outcome, AssignOutcome::NoLongerAvailable));
        let stored = deps.help_ledger.find_by_id(request.id).await.unwrap().unwrap();
        assert_eq!(stored.volunteer_id, Some(first));
    }

    #[tokio::test]
    async fn test_concurrent_assigns_have_exactly_one_winner() {
        let (deps, _) = in_memory_deps();
        let request = seek_help(UserId::new(), Coordinates::new(44.95, -93.1), &deps)
            .await
            .unwrap();

        let tasks: Vec<_> = (0..16)
            .map(|_| {
                let deps = deps.clone();
                let help_id = request.id;
                tokio::spawn(async move { assign_help(help_id, UserId::new(), &deps).await })
            })
            .collect();

        let outcomes: Vec<AssignOutcome> = join_all(tasks)
            .await
            .into_iter()
            .map(|joined| joined.unwrap().unwrap())
            .collect();

        let winners = outcomes
            .iter()
            .filter(|o| matches!(o, AssignOutcome::Assigned(_)))
            .count();
        let losers = outcomes
            .iter()
            .filter(|o| matches!(o, AssignOutcome::NoLongerAvailable))
            .count();
        assert_eq!(winners, 1);
        assert_eq!(losers, 15);
    }
}
