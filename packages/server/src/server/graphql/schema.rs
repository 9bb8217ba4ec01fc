//! GraphQL schema definition.

use super::context::GraphQLContext;
use juniper::{EmptySubscription, FieldError, FieldResult, RootNode};
use uuid::Uuid;

// Common types
use crate::common::{Coordinates, HelpRequestId, Role, UserId};

// Domain actions
use crate::domains::availability::actions as availability_actions;
use crate::domains::help::actions as help_actions;

// Domain data types (GraphQL types)
use crate::domains::availability::data::{AvailabilityData, SetAvailabilityInput};
use crate::domains::help::data::{
    HelpListData, HelpRequestData, HelpRequestDetailData, NearbyHelpsData, PatientHistoryData,
    SeekHelpInput, TransitionData,
};
use crate::domains::help::models::NearbyOutcome;

fn to_field_error(e: anyhow::Error) -> FieldError {
    FieldError::new(e.to_string(), juniper::Value::null())
}

pub struct Query;

#[juniper::graphql_object(context = GraphQLContext)]
impl Query {
    // =========================================================================
    // Help Queries
    // =========================================================================

    /// Pending help requests within five kilometers of the calling
    /// volunteer's last reported location
    async fn nearby_help_requests(ctx: &GraphQLContext) -> FieldResult<NearbyHelpsData> {
        let user = ctx.require_role(Role::Volunteer)?;

        match help_actions::find_nearby_requests(user.user_id, ctx.deps())
            .await
            .map_err(to_field_error)?
        {
            NearbyOutcome::Found(requests) => Ok(NearbyHelpsData {
                requests: requests.into_iter().map(Into::into).collect(),
                message: None,
            }),
            NearbyOutcome::NoneNearby => Ok(NearbyHelpsData {
                requests: vec![],
                message: Some("No help requests within 5 km".to_string()),
            }),
            NearbyOutcome::LocationNotFound => Err(FieldError::new(
                "Volunteer location not found",
                juniper::Value::null(),
            )),
            NearbyOutcome::InvalidLocation => Err(FieldError::new(
                "Invalid volunteer location coordinates",
                juniper::Value::null(),
            )),
        }
    }

    /// A single help request by id
    async fn help_request(ctx: &GraphQLContext, id: Uuid) -> FieldResult<Option<HelpRequestData>> {
        ctx.require_auth()?;

        let request = help_actions::get_help_request(HelpRequestId::from_uuid(id), ctx.deps())
            .await
            .map_err(to_field_error)?;
        Ok(request.map(Into::into))
    }

    /// Requests currently assigned to the calling volunteer
    async fn running_services(ctx: &GraphQLContext) -> FieldResult<HelpListData> {
        let user = ctx.require_role(Role::Volunteer)?;

        let requests = help_actions::running_services(user.user_id, ctx.deps())
            .await
            .map_err(to_field_error)?;
        Ok(HelpListData::with_empty_message(
            requests.into_iter().map(Into::into).collect(),
            "No running services.",
        ))
    }

    /// Requests the calling volunteer has completed
    async fn service_history(ctx: &GraphQLContext) -> FieldResult<HelpListData> {
        let user = ctx.require_role(Role::Volunteer)?;

        let requests = help_actions::service_history(user.user_id, ctx.deps())
            .await
            .map_err(to_field_error)?;
        Ok(HelpListData::with_empty_message(
            requests.into_iter().map(Into::into).collect(),
            "No service history.",
        ))
    }

    /// The calling patient's help history, most recent first
    async fn patient_history(ctx: &GraphQLContext) -> FieldResult<PatientHistoryData> {
        let user = ctx.require_role(Role::Patient)?;

        let records = help_actions::patient_history(user.user_id, ctx.deps())
            .await
            .map_err(to_field_error)?;
        Ok(PatientHistoryData::with_empty_message(
            records.into_iter().map(Into::into).collect(),
            "No help history.",
        ))
    }

    /// Every help request with volunteer names resolved (admin only)
    async fn all_help_requests(ctx: &GraphQLContext) -> FieldResult<Vec<HelpRequestDetailData>> {
        ctx.require_admin()?;

        let rows = help_actions::all_help_requests(ctx.deps())
            .await
            .map_err(to_field_error)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    // =========================================================================
    // Availability Queries
    // =========================================================================

    /// The calling volunteer's availability record, if they ever reported
    async fn availability(ctx: &GraphQLContext) -> FieldResult<Option<AvailabilityData>> {
        let user = ctx.require_role(Role::Volunteer)?;

        let record = availability_actions::get_availability(user.user_id, ctx.deps())
            .await
            .map_err(to_field_error)?;
        Ok(record.map(Into::into))
    }
}

pub struct Mutation;

#[juniper::graphql_object(context = GraphQLContext)]
impl Mutation {
    // =========================================================================
    // Help Mutations
    // =========================================================================

    /// Open a help request at a location
    ///
    /// Works for anonymous callers: a guest identity from the input is used
    /// as-is, or a fresh one is minted and returned in the payload so the
    /// client can keep it for later reconciliation. An authenticated
    /// caller's token identity always wins over the input.
    async fn seek_help(ctx: &GraphQLContext, input: SeekHelpInput) -> FieldResult<HelpRequestData> {
        let patient_id = match &ctx.auth_user {
            Some(user) => user.user_id,
            None => match input.patient_id.as_deref() {
                Some(raw) => raw
                    .parse::<UserId>()
                    .map_err(|_| FieldError::new("Invalid patient id", juniper::Value::null()))?,
                None => UserId::new(),
            },
        };

        let location = Coordinates::new(input.latitude, input.longitude);
        let request = help_actions::seek_help(patient_id, location, ctx.deps())
            .await
            .map_err(to_field_error)?;
        Ok(request.into())
    }

    /// Claim a pending help request for a volunteer
    async fn assign_help(
        ctx: &GraphQLContext,
        help_id: Uuid,
        volunteer_id: Uuid,
    ) -> FieldResult<TransitionData> {
        ctx.require_role(Role::Volunteer)?;

        let outcome = help_actions::assign_help(
            HelpRequestId::from_uuid(help_id),
            UserId::from_uuid(volunteer_id),
            ctx.deps(),
        )
        .await
        .map_err(to_field_error)?;
        Ok(outcome.into())
    }

    /// Complete an assigned help request
    async fn complete_help(
        ctx: &GraphQLContext,
        help_id: Uuid,
        volunteer_id: Uuid,
    ) -> FieldResult<TransitionData> {
        ctx.require_role(Role::Volunteer)?;

        let outcome = help_actions::complete_help(
            HelpRequestId::from_uuid(help_id),
            UserId::from_uuid(volunteer_id),
            ctx.deps(),
        )
        .await
        .map_err(to_field_error)?;
        Ok(outcome.into())
    }

    /// Move a guest's help history onto a registered patient (admin only)
    ///
    /// Returns the number of requests moved; zero is a normal outcome.
    async fn reassign_patient_history(
        ctx: &GraphQLContext,
        guest_id: Uuid,
        patient_id: Uuid,
    ) -> FieldResult<i32> {
        ctx.require_admin()?;

        let moved = help_actions::reassign_patient_history(
            UserId::from_uuid(guest_id),
            UserId::from_uuid(patient_id),
            ctx.deps(),
        )
        .await
        .map_err(to_field_error)?;
        Ok(moved as i32)
    }

    // =========================================================================
    // Availability Mutations
    // =========================================================================

    /// Record the calling volunteer's availability and location
    async fn set_availability(
        ctx: &GraphQLContext,
        input: SetAvailabilityInput,
    ) -> FieldResult<AvailabilityData> {
        let user = ctx.require_role(Role::Volunteer)?;

        let location = match (input.latitude, input.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinates::new(latitude, longitude)),
            (None, None) => None,
            _ => {
                return Err(FieldError::new(
                    "Latitude and longitude must be provided together",
                    juniper::Value::null(),
                ))
            }
        };

        let record = availability_actions::set_availability(
            user.user_id,
            input.state.into(),
            location,
            ctx.deps(),
        )
        .await
        .map_err(to_field_error)?;
        Ok(record.into())
    }
}

pub type Schema = RootNode<'static, Query, Mutation, EmptySubscription<GraphQLContext>>;

pub fn create_schema() -> Schema {
    Schema::new(Query, Mutation, EmptySubscription::new())
}
