//! Nearby request matching - pending requests within range of a volunteer

use anyhow::Result;
use tracing::warn;

use crate::common::utils::distance_km;
use crate::common::UserId;
use crate::domains::help::models::NearbyOutcome;
use crate::kernel::ServerDeps;

/// Radius within which a pending request is offered to a volunteer.
pub const MATCH_RADIUS_KM: f64 = 5.0;

/// Find pending help requests within [`MATCH_RADIUS_KM`] of the volunteer's
/// last self-reported location. The boundary is inclusive.
///
/// A missing registry row or a row without usable coordinates is its own
/// outcome rather than an empty list, so clients can tell "nothing near
/// you" apart from "we don't know where you are".
pub async fn find_nearby_requests(
    volunteer_id: UserId,
    deps: &ServerDeps,
) -> Result<NearbyOutcome> {
    let Some(record) = deps.availability.find(volunteer_id).await? else {
        return Ok(NearbyOutcome::LocationNotFound);
    };

    let Some(origin) = record.coordinates() else {
        return Ok(NearbyOutcome::InvalidLocation);
    };
    if !origin.is_finite() {
        return Ok(NearbyOutcome::InvalidLocation);
    }

    let pending = deps.help_ledger.find_pending().await?;
    let nearby: Vec<_> = pending
        .into_iter()
        .filter(|request| {
            let position = request.coordinates();
            if !position.is_finite() {
                warn!(
                    "Skipping help request {} with malformed coordinates",
                    request.id
                );
                return false;
            }
            distance_km(
                origin.latitude,
                origin.longitude,
                position.latitude,
                position.longitude,
            ) <= MATCH_RADIUS_KM
        })
        .collect();

    if nearby.is_empty() {
        return Ok(NearbyOutcome::NoneNearby);
    }
    Ok(NearbyOutcome::Found(nearby))
}
