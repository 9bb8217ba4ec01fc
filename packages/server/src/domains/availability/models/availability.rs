use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{Coordinates, UserId};

/// Volunteer availability - current state plus last reported location
///
/// At most one row per volunteer. The row is created lazily by the first
/// self-report; ledger transitions only ever update an existing row.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct VolunteerAvailability {
    pub volunteer_id: UserId,

    pub state: String, // Maps to AvailabilityState enum in edges

    /// Present once the volunteer has reported a position.
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    pub updated_at: DateTime<Utc>,
}

impl VolunteerAvailability {
    /// The reported location, when both components are present.
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinates::new(latitude, longitude)),
            _ => None,
        }
    }
}

/// State enum for type-safe edges
///
/// `InService` means the volunteer currently holds an unfinished assignment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityState {
    Available,
    NotAvailable,
    InService,
}

impl std::fmt::Display for AvailabilityState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AvailabilityState::Available => write!(f, "available"),
            AvailabilityState::NotAvailable => write!(f, "not_available"),
            AvailabilityState::InService => write!(f, "in_service"),
        }
    }
}

impl std::str::FromStr for AvailabilityState {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "available" => Ok(AvailabilityState::Available),
            "not_available" => Ok(AvailabilityState::NotAvailable),
            "in_service" => Ok(AvailabilityState::InService),
            _ => Err(anyhow::anyhow!("Invalid availability state: {}", s)),
        }
    }
}
