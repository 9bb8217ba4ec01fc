//! PostgreSQL persistence for the help ledger.
//!
//! All help request SQL lives here. Lifecycle transitions that touch both
//! the ledger and the availability registry run in one transaction with a
//! guarded UPDATE, so two racing claims can never both win.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;

use crate::common::{Coordinates, HelpRequestId, UserId};
use crate::domains::help::models::{
    AssignOutcome, CompleteOutcome, HelpRequest, HelpRequestWithVolunteer, HelpStatus,
    PatientHelpRecord,
};
use crate::kernel::BaseHelpLedger;

pub struct PostgresHelpLedger {
    pool: PgPool,
}

impl PostgresHelpLedger {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BaseHelpLedger for PostgresHelpLedger {
    async fn create(&self, patient_id: UserId, location: Coordinates) -> Result<HelpRequest> {
        sqlx::query_as::<_, HelpRequest>(
            "INSERT INTO help_requests (id, patient_id, latitude, longitude)
             VALUES ($1, $2, $3, $4)
             RETURNING *",
        )
        .bind(HelpRequestId::new())
        .bind(patient_id)
        .bind(location.latitude)
        .bind(location.longitude)
        .fetch_one(&self.pool)
        .await
        .map_err(Into::into)
    }

    async fn find_by_id(&self, id: HelpRequestId) -> Result<Option<HelpRequest>> {
        sqlx::query_as::<_, HelpRequest>("SELECT * FROM help_requests WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn find_pending(&self) -> Result<Vec<HelpRequest>> {
        sqlx::query_as::<_, HelpRequest>("SELECT * FROM help_requests WHERE status = 'pending'")
            .fetch_all(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn assign(&self, id: HelpRequestId, volunteer_id: UserId) -> Result<AssignOutcome> {
        let mut tx = self.pool.begin().await?;

        // Compare-and-swap: only a still-pending request can be claimed.
        let claimed = sqlx::query_as::<_, HelpRequest>(
            "UPDATE help_requests
             SET status = 'assigned', volunteer_id = $2, updated_at = NOW()
             WHERE id = $1 AND status = 'pending'
             RETURNING *",
        )
        .bind(id)
        .bind(volunteer_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(request) = claimed else {
            tx.rollback().await?;
            let exists = sqlx::query_scalar::<_, bool>(
                "SELECT EXISTS(SELECT 1 FROM help_requests WHERE id = $1)",
            )
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
            return Ok(if exists {
                AssignOutcome::NoLongerAvailable
            } else {
                AssignOutcome::NotFound
            });
        };

        // The registry row may not exist when the volunteer never
        // self-reported; transitions update rows but never create them.
        sqlx::query(
            "UPDATE volunteer_availability
             SET state = 'in_service', updated_at = NOW()
             WHERE volunteer_id = $1",
        )
        .bind(volunteer_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(AssignOutcome::Assigned(request))
    }

    async fn complete(&self, id: HelpRequestId, volunteer_id: UserId) -> Result<CompleteOutcome> {
        let mut tx = self.pool.begin().await?;

        // Lock the row so the status check and the update see one state.
        let current =
            sqlx::query_as::<_, HelpRequest>("SELECT * FROM help_requests WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        let Some(request) = current else {
            tx.rollback().await?;
            return Ok(CompleteOutcome::NotFound);
        };

        if request.status.parse::<HelpStatus>()? != HelpStatus::Assigned {
            tx.rollback().await?;
            return Ok(CompleteOutcome::NotCompletable);
        }
        if request.volunteer_id != Some(volunteer_id) {
            tx.rollback().await?;
            return Ok(CompleteOutcome::NotAssignee);
        }

        let completed = sqlx::query_as::<_, HelpRequest>(
            "UPDATE help_requests
             SET status = 'completed', updated_at = NOW()
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            "UPDATE volunteer_availability
             SET state = 'available', updated_at = NOW()
             WHERE volunteer_id = $1",
        )
        .bind(volunteer_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(CompleteOutcome::Completed(completed))
    }

    async fn find_assigned_to(&self, volunteer_id: UserId) -> Result<Vec<HelpRequest>> {
        sqlx::query_as::<_, HelpRequest>(
            "SELECT * FROM help_requests
             WHERE volunteer_id = $1 AND status = 'assigned'",
        )
        .bind(volunteer_id)
        .fetch_all(&self.pool)
        .await
        .map_err(Into::into)
    }

    async fn find_completed_by(&self, volunteer_id: UserId) -> Result<Vec<HelpRequest>> {
        sqlx::query_as::<_, HelpRequest>(
            "SELECT * FROM help_requests
             WHERE volunteer_id = $1 AND status = 'completed'",
        )
        .bind(volunteer_id)
        .fetch_all(&self.pool)
        .await
        .map_err(Into::into)
    }

    async fn patient_history(&self, patient_id: UserId) -> Result<Vec<PatientHelpRecord>> {
        // LEFT JOIN keeps never-assigned requests, with a NULL name.
        sqlx::query_as::<_, PatientHelpRecord>(
            "SELECT u.first_name || ' ' || u.last_name AS volunteer_name,
                    h.created_at AS help_date
             FROM help_requests h
             LEFT JOIN users u ON h.volunteer_id = u.id
             WHERE h.patient_id = $1
             ORDER BY h.created_at DESC",
        )
        .bind(patient_id)
        .fetch_all(&self.pool)
        .await
        .map_err(Into::into)
    }

    async fn find_all_with_volunteers(&self) -> Result<Vec<HelpRequestWithVolunteer>> {
        sqlx::query_as::<_, HelpRequestWithVolunteer>(
            "SELECT h.*, u.first_name || ' ' || u.last_name AS volunteer_name
             FROM help_requests h
             LEFT JOIN users u ON h.volunteer_id = u.id
             ORDER BY h.created_at",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(Into::into)
    }

    async fn reassign_patient(
        &self,
        old_patient_id: UserId,
        new_patient_id: UserId,
    ) -> Result<u64> {
        let result = sqlx::query("UPDATE help_requests SET patient_id = $2 WHERE patient_id = $1")
            .bind(old_patient_id)
            .bind(new_patient_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
