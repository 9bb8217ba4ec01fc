//! Availability self-report action

use anyhow::Result;
use tracing::info;

use crate::common::{Coordinates, UserId};
use crate::domains::availability::models::{AvailabilityState, VolunteerAvailability};
use crate::kernel::ServerDeps;

/// Record a volunteer's availability state and, optionally, location.
///
/// Omitting the location keeps the last reported one. Volunteers may set
/// any state directly, including `in_service`; assignment transitions also
/// move the state, and the newest write wins.
pub async fn set_availability(
    volunteer_id: UserId,
    state: AvailabilityState,
    location: Option<Coordinates>,
    deps: &ServerDeps,
) -> Result<VolunteerAvailability> {
    if let Some(location) = location {
        location.ensure_valid()?;
    }

    let record = deps
        .availability
        .upsert(volunteer_id, state, location)
        .await?;
    info!("Volunteer {} reported {}", volunteer_id, record.state);
    Ok(record)
}
