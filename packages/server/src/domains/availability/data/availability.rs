//! GraphQL data types for volunteer availability

use chrono::{DateTime, Utc};
use juniper::{GraphQLEnum, GraphQLInputObject, GraphQLObject};
use serde::{Deserialize, Serialize};

use crate::domains::availability::models::{
    AvailabilityState, VolunteerAvailability as AvailabilityModel,
};

/// Availability state for GraphQL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, GraphQLEnum)]
pub enum AvailabilityStateData {
    Available,
    NotAvailable,
    InService,
}

impl From<&str> for AvailabilityStateData {
    fn from(s: &str) -> Self {
        match s {
            "available" => AvailabilityStateData::Available,
            "not_available" => AvailabilityStateData::NotAvailable,
            "in_service" => AvailabilityStateData::InService,
            _ => AvailabilityStateData::NotAvailable,
        }
    }
}

impl From<AvailabilityStateData> for AvailabilityState {
    fn from(state: AvailabilityStateData) -> Self {
        match state {
            AvailabilityStateData::Available => AvailabilityState::Available,
            AvailabilityStateData::NotAvailable => AvailabilityState::NotAvailable,
            AvailabilityStateData::InService => AvailabilityState::InService,
        }
    }
}

/// Volunteer availability GraphQL data type
#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
#[graphql(description = "A volunteer's self-reported availability and location")]
pub struct AvailabilityData {
    /// The volunteer this record belongs to
    pub volunteer_id: String,

    /// Current availability state
    pub state: AvailabilityStateData,

    /// Last reported latitude
    pub latitude: Option<f64>,

    /// Last reported longitude
    pub longitude: Option<f64>,

    /// When the record last changed
    pub updated_at: DateTime<Utc>,
}

impl From<AvailabilityModel> for AvailabilityData {
    fn from(record: AvailabilityModel) -> Self {
        Self {
            volunteer_id: record.volunteer_id.to_string(),
            state: record.state.as_str().into(),
            latitude: record.latitude,
            longitude: record.longitude,
            updated_at: record.updated_at,
        }
    }
}

/// Input for an availability self-report
#[derive(Debug, Clone, GraphQLInputObject)]
pub struct SetAvailabilityInput {
    /// New availability state
    pub state: AvailabilityStateData,

    /// Current latitude; both coordinates together or neither
    pub latitude: Option<f64>,

    /// Current longitude; both coordinates together or neither
    pub longitude: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::UserId;
    use chrono::Utc;

    #[test]
    fn test_state_string_round_trip() {
        for state in [
            AvailabilityStateData::Available,
            AvailabilityStateData::NotAvailable,
            AvailabilityStateData::InService,
        ] {
            let model: AvailabilityState = state.into();
            let back: AvailabilityStateData = model.to_string().as_str().into();
            assert_eq!(back, state);
        }
    }

    #[test]
    fn test_unknown_state_falls_back_to_not_available() {
        assert_eq!(
            AvailabilityStateData::from("busy"),
            AvailabilityStateData::NotAvailable
        );
    }

    #[test]
    fn test_model_maps_through() {
        let volunteer = UserId::new();
        let data = AvailabilityData::from(AvailabilityModel {
            volunteer_id: volunteer,
            state: "in_service".to_string(),
            latitude: Some(44.95),
            longitude: Some(-93.1),
            updated_at: Utc::now(),
        });

        assert_eq!(data.volunteer_id, volunteer.to_string());
        assert_eq!(data.state, AvailabilityStateData::InService);
        assert_eq!(data.latitude, Some(44.95));
    }
}
