//! PostgreSQL persistence for the availability registry.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;

use crate::common::{Coordinates, UserId};
use crate::domains::availability::models::{AvailabilityState, VolunteerAvailability};
use crate::kernel::BaseAvailabilityRegistry;

pub struct PostgresAvailabilityRegistry {
    pool: PgPool,
}

impl PostgresAvailabilityRegistry {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BaseAvailabilityRegistry for PostgresAvailabilityRegistry {
    async fn upsert(
        &self,
        volunteer_id: UserId,
        state: AvailabilityState,
        location: Option<Coordinates>,
    ) -> Result<VolunteerAvailability> {
        // COALESCE keeps the stored location when the report omits one.
        sqlx::query_as::<_, VolunteerAvailability>(
            "INSERT INTO volunteer_availability (volunteer_id, state, latitude, longitude)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (volunteer_id) DO UPDATE SET
                 state = EXCLUDED.state,
                 latitude = COALESCE(EXCLUDED.latitude, volunteer_availability.latitude),
                 longitude = COALESCE(EXCLUDED.longitude, volunteer_availability.longitude),
                 updated_at = NOW()
             RETURNING *",
        )
        .bind(volunteer_id)
        .bind(state.to_string())
        .bind(location.map(|l| l.latitude))
        .bind(location.map(|l| l.longitude))
        .fetch_one(&self.pool)
        .await
        .map_err(Into::into)
    }

    async fn find(&self, volunteer_id: UserId) -> Result<Option<VolunteerAvailability>> {
        sqlx::query_as::<_, VolunteerAvailability>(
            "SELECT * FROM volunteer_availability WHERE volunteer_id = $1",
        )
        .bind(volunteer_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(Into::into)
    }
}
