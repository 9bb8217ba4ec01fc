//! GraphQL data types for help requests

use chrono::{DateTime, Utc};
use juniper::{GraphQLEnum, GraphQLInputObject, GraphQLObject};
use serde::{Deserialize, Serialize};

use crate::domains::help::models::{
    HelpRequest as HelpRequestModel, HelpRequestWithVolunteer, PatientHelpRecord,
};

/// Help request status for GraphQL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, GraphQLEnum)]
pub enum HelpStatusData {
    Pending,
    Assigned,
    Completed,
}

impl From<&str> for HelpStatusData {
    fn from(s: &str) -> Self {
        match s {
            "pending" => HelpStatusData::Pending,
            "assigned" => HelpStatusData::Assigned,
            "completed" => HelpStatusData::Completed,
            _ => HelpStatusData::Pending,
        }
    }
}

/// Help request GraphQL data type
///
/// Public API representation of a help request (for GraphQL responses)
#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
#[graphql(description = "A request for help at a location")]
pub struct HelpRequestData {
    /// Unique identifier
    pub id: String,

    /// Identity that opened the request (registered user or guest)
    pub patient_id: String,

    /// Request latitude
    pub latitude: f64,

    /// Request longitude
    pub longitude: f64,

    /// Lifecycle status
    pub status: HelpStatusData,

    /// Assigned volunteer, once claimed
    pub volunteer_id: Option<String>,

    /// When the request was opened
    pub created_at: DateTime<Utc>,

    /// Last lifecycle transition
    pub updated_at: DateTime<Utc>,
}

impl From<HelpRequestModel> for HelpRequestData {
    fn from(request: HelpRequestModel) -> Self {
        Self {
            id: request.id.to_string(),
            patient_id: request.patient_id.to_string(),
            latitude: request.latitude,
            longitude: request.longitude,
            status: request.status.as_str().into(),
            volunteer_id: request.volunteer_id.map(|id| id.to_string()),
            created_at: request.created_at,
            updated_at: request.updated_at,
        }
    }
}

/// Admin view of a help request with the volunteer's display name joined in
#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
#[graphql(description = "A help request with its volunteer's name resolved")]
pub struct HelpRequestDetailData {
    /// Unique identifier
    pub id: String,

    /// Identity that opened the request
    pub patient_id: String,

    /// Request latitude
    pub latitude: f64,

    /// Request longitude
    pub longitude: f64,

    /// Lifecycle status
    pub status: HelpStatusData,

    /// Assigned volunteer, once claimed
    pub volunteer_id: Option<String>,

    /// Volunteer display name, where one was ever assigned
    pub volunteer_name: Option<String>,

    /// When the request was opened
    pub created_at: DateTime<Utc>,

    /// Last lifecycle transition
    pub updated_at: DateTime<Utc>,
}

impl From<HelpRequestWithVolunteer> for HelpRequestDetailData {
    fn from(row: HelpRequestWithVolunteer) -> Self {
        Self {
            id: row.id.to_string(),
            patient_id: row.patient_id.to_string(),
            latitude: row.latitude,
            longitude: row.longitude,
            status: row.status.as_str().into(),
            volunteer_id: row.volunteer_id.map(|id| id.to_string()),
            volunteer_name: row.volunteer_name,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// One entry in a patient's help history
#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
#[graphql(description = "One entry in a patient's help history")]
pub struct PatientHelpRecordData {
    /// Volunteer who served the request, if any
    pub volunteer_name: Option<String>,

    /// When the request was opened
    pub help_date: DateTime<Utc>,
}

impl From<PatientHelpRecord> for PatientHelpRecordData {
    fn from(record: PatientHelpRecord) -> Self {
        Self {
            volunteer_name: record.volunteer_name,
            help_date: record.help_date,
        }
    }
}

/// Input for opening a help request
#[derive(Debug, Clone, GraphQLInputObject)]
pub struct SeekHelpInput {
    /// Guest identity to file the request under; ignored when the caller
    /// is authenticated, generated when absent
    pub patient_id: Option<String>,

    /// Patient latitude
    pub latitude: f64,

    /// Patient longitude
    pub longitude: f64,
}
