use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{Coordinates, HelpRequestId, UserId};

/// Help request - a patient's call for in-person assistance
///
/// Lifecycle is forward-only: pending -> assigned -> completed. The location
/// is captured at creation and never changes; `volunteer_id` is set by the
/// assignment transition and survives completion.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct HelpRequest {
    pub id: HelpRequestId,

    /// Requester identity. May be a provisional guest id that is later
    /// reconciled to a registered user, so there is no FK behind it.
    pub patient_id: UserId,

    pub latitude: f64,
    pub longitude: f64,

    pub status: String, // Maps to HelpStatus enum in edges

    /// The assignee. NULL while pending.
    pub volunteer_id: Option<UserId>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl HelpRequest {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

/// Status enum for type-safe edges
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HelpStatus {
    Pending,
    Assigned,
    Completed,
}

impl std::fmt::Display for HelpStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HelpStatus::Pending => write!(f, "pending"),
            HelpStatus::Assigned => write!(f, "assigned"),
            HelpStatus::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for HelpStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pending" => Ok(HelpStatus::Pending),
            "assigned" => Ok(HelpStatus::Assigned),
            "completed" => Ok(HelpStatus::Completed),
            _ => Err(anyhow::anyhow!("Invalid help status: {}", s)),
        }
    }
}

/// Outcome of an assignment attempt.
///
/// State-machine violations are data, not errors: a request that was claimed
/// first by someone else is an expected answer, not a fault.
#[derive(Debug)]
pub enum AssignOutcome {
    /// The claim won; the request is now assigned to the volunteer and the
    /// volunteer's availability is `in_service`.
    Assigned(HelpRequest),
    NotFound,
    /// Already assigned or completed.
    NoLongerAvailable,
}

/// Outcome of a completion attempt.
#[derive(Debug)]
pub enum CompleteOutcome {
    /// The request is completed and the volunteer's availability is back to
    /// `available`.
    Completed(HelpRequest),
    NotFound,
    /// Still pending, or already completed.
    NotCompletable,
    /// Assigned to a different volunteer. Completion never rebinds a request
    /// to the caller.
    NotAssignee,
}

/// Outcome of a proximity scan for a volunteer.
#[derive(Debug)]
pub enum NearbyOutcome {
    Found(Vec<HelpRequest>),
    /// Pending requests exist, but none within the radius (or none at all).
    NoneNearby,
    /// The volunteer has never reported availability.
    LocationNotFound,
    /// An availability record exists but carries no usable coordinates.
    InvalidLocation,
}

/// One entry of a patient's help history, volunteer name already resolved.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PatientHelpRecord {
    /// Display name of the volunteer who took the request, if any.
    pub volunteer_name: Option<String>,
    pub help_date: DateTime<Utc>,
}

/// A help request joined with its volunteer's display name (admin view).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct HelpRequestWithVolunteer {
    pub id: HelpRequestId,
    pub patient_id: UserId,
    pub latitude: f64,
    pub longitude: f64,
    pub status: String,
    pub volunteer_id: Option<UserId>,
    pub volunteer_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
