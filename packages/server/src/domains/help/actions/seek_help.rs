//! Seek help action - a patient (or guest) opens a new request

use anyhow::Result;
use tracing::info;

use crate::common::{Coordinates, UserId};
use crate::domains::help::models::HelpRequest;
use crate::kernel::ServerDeps;

/// Open a new pending help request at the patient's location.
///
/// Guests are allowed: `patient_id` is whatever identity the caller holds
/// and no user row is required. Auth (when present) is checked at the
/// GraphQL layer.
pub async fn seek_help(
    patient_id: UserId,
    location: Coordinates,
    deps: &ServerDeps,
) -> Result<HelpRequest> {
    location.ensure_valid()?;

    let request = deps.help_ledger.create(patient_id, location).await?;
    info!(
        "Help request {} opened by patient {}",
        request.id, patient_id
    );
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::in_memory_deps;

    #[tokio::test]
    async fn test_seek_help_creates_pending_request() {
        let (deps, _) = in_memory_deps();
        let patient = UserId::new();

        let request = seek_help(patient, Coordinates::new(44.95, -93.1), &deps)
            .await
            .unwrap();

        assert_eq!(request.patient_id, patient);
        assert_eq!(request.status, "pending");
        assert!(request.volunteer_id.is_none());
        assert_eq!(request.latitude, 44.95);
        assert_eq!(request.longitude, -93.1);
    }

    #[tokio::test]
    async fn test_seek_help_rejects_out_of_range_latitude() {
        let (deps, _) = in_memory_deps();

        let result = seek_help(UserId::new(), Coordinates::new(90.001, 0.0), &deps).await;

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("out of range"));
    }

    #[tokio::test]
    async fn test_seek_help_rejects_non_finite_coordinates() {
        let (deps, _) = in_memory_deps();

        let result = seek_help(UserId::new(), Coordinates::new(f64::NAN, 0.0), &deps).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_equator_prime_meridian_is_a_valid_location() {
        let (deps, _) = in_memory_deps();

        let request = seek_help(UserId::new(), Coordinates::new(0.0, 0.0), &deps)
            .await
            .unwrap();

        assert_eq!(request.latitude, 0.0);
        assert_eq!(request.longitude, 0.0);
    }

    #[tokio::test]
    async fn test_same_patient_can_open_multiple_requests() {
        let (deps, _) = in_memory_deps();
        let patient = UserId::new();
        let location = Coordinates::new(44.95, -93.1);

        let first = seek_help(patient, location, &deps).await.unwrap();
        let second = seek_help(patient, location, &deps).await.unwrap();

        assert_ne!(first.id, second.id);
    }
}
