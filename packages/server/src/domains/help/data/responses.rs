//! GraphQL response envelopes for help operations
//!
//! Lifecycle outcomes travel as data with stable human-readable messages,
//! not as GraphQL errors. Clients branch on `success` and show `message`
//! as-is.

use juniper::GraphQLObject;
use serde::{Deserialize, Serialize};

use crate::domains::help::data::{HelpRequestData, PatientHelpRecordData};
use crate::domains::help::models::{AssignOutcome, CompleteOutcome};

/// Outcome of an assign or complete attempt
#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
#[graphql(description = "Outcome of a help request transition")]
pub struct TransitionData {
    /// Whether the transition applied
    pub success: bool,

    /// Human-readable outcome message
    pub message: String,

    /// The request after a successful transition
    pub request: Option<HelpRequestData>,
}

impl TransitionData {
    fn failed(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
            request: None,
        }
    }
}

impl From<AssignOutcome> for TransitionData {
    fn from(outcome: AssignOutcome) -> Self {
        match outcome {
            AssignOutcome::Assigned(request) => Self {
                success: true,
                message: "Help assigned successfully.".to_string(),
                request: Some(request.into()),
            },
            AssignOutcome::NotFound => Self::failed("Help not found."),
            AssignOutcome::NoLongerAvailable => Self::failed("Help is no longer available."),
        }
    }
}

impl From<CompleteOutcome> for TransitionData {
    fn from(outcome: CompleteOutcome) -> Self {
        match outcome {
            CompleteOutcome::Completed(request) => Self {
                success: true,
                message: "Help completed successfully.".to_string(),
                request: Some(request.into()),
            },
            CompleteOutcome::NotFound => Self::failed("Help not found."),
            CompleteOutcome::NotCompletable => Self::failed("Help is no longer available."),
            CompleteOutcome::NotAssignee => {
                Self::failed("Help is assigned to another volunteer.")
            }
        }
    }
}

/// Pending help requests near the volunteer
#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
#[graphql(description = "Pending help requests within range of the volunteer")]
pub struct NearbyHelpsData {
    /// Requests within range
    pub requests: Vec<HelpRequestData>,

    /// Present only when there is nothing to offer
    pub message: Option<String>,
}

/// A volunteer-facing list of help requests
#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
#[graphql(description = "A list of help requests with an optional empty notice")]
pub struct HelpListData {
    /// The matching requests
    pub requests: Vec<HelpRequestData>,

    /// Present only when the list is empty
    pub message: Option<String>,
}

impl HelpListData {
    pub fn with_empty_message(requests: Vec<HelpRequestData>, empty_message: &str) -> Self {
        let message = requests.is_empty().then(|| empty_message.to_string());
        Self { requests, message }
    }
}

/// A patient's help history
#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
#[graphql(description = "A patient's help history with an optional empty notice")]
pub struct PatientHistoryData {
    /// History entries, most recent first
    pub records: Vec<PatientHelpRecordData>,

    /// Present only when the history is empty
    pub message: Option<String>,
}

impl PatientHistoryData {
    pub fn with_empty_message(records: Vec<PatientHelpRecordData>, empty_message: &str) -> Self {
        let message = records.is_empty().then(|| empty_message.to_string());
        Self { records, message }
    }
}
