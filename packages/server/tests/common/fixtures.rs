//! Test fixtures for creating test data.
//!
//! User directory rows belong to the external account service in
//! production; tests write them directly because availability and
//! assignment both carry foreign keys into `users`.

use anyhow::Result;
use server_core::common::{HelpRequestId, Role, UserId};
use sqlx::PgPool;

/// Create a user directory row with the given role and name.
pub async fn create_test_user(
    pool: &PgPool,
    role: Role,
    first_name: &str,
    last_name: &str,
) -> Result<UserId> {
    let id = UserId::new();
    sqlx::query(
        "INSERT INTO users (id, first_name, last_name, role)
         VALUES ($1, $2, $3, $4)",
    )
    .bind(id)
    .bind(first_name)
    .bind(last_name)
    .bind(role.to_string())
    .execute(pool)
    .await?;
    Ok(id)
}

/// Create a volunteer user.
pub async fn create_test_volunteer(pool: &PgPool, first_name: &str) -> Result<UserId> {
    create_test_user(pool, Role::Volunteer, first_name, "Volunteer").await
}

/// Create a patient user.
pub async fn create_test_patient(pool: &PgPool, first_name: &str) -> Result<UserId> {
    create_test_user(pool, Role::Patient, first_name, "Patient").await
}

/// Create an admin user.
pub async fn create_test_admin(pool: &PgPool, first_name: &str) -> Result<UserId> {
    create_test_user(pool, Role::Admin, first_name, "Admin").await
}

/// Insert an availability row whose coordinates are unusable, something the
/// GraphQL input layer cannot produce.
pub async fn seed_corrupt_availability(pool: &PgPool, volunteer_id: UserId) -> Result<()> {
    sqlx::query(
        "INSERT INTO volunteer_availability (volunteer_id, state, latitude, longitude)
         VALUES ($1, 'available', 'NaN'::DOUBLE PRECISION, 'NaN'::DOUBLE PRECISION)",
    )
    .bind(volunteer_id)
    .execute(pool)
    .await?;
    Ok(())
}

/// Insert a pending help request with coordinates the validated write path
/// would refuse (used to prove the matcher skips corrupt rows).
pub async fn seed_corrupt_help_request(pool: &PgPool, patient_id: UserId) -> Result<()> {
    sqlx::query(
        "INSERT INTO help_requests (id, patient_id, latitude, longitude)
         VALUES ($1, $2, 'NaN'::DOUBLE PRECISION, 'NaN'::DOUBLE PRECISION)",
    )
    .bind(HelpRequestId::new())
    .bind(patient_id)
    .execute(pool)
    .await?;
    Ok(())
}

/// Degrees of latitude spanning the given distance along a meridian.
///
/// Lets tests place help requests at exact distances from a volunteer.
pub fn lat_offset_for_km(km: f64) -> f64 {
    const EARTH_RADIUS_KM: f64 = 6371.0;
    (km / EARTH_RADIUS_KM).to_degrees()
}
