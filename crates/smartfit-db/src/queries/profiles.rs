//! Database query functions for the `fitness_profiles` table.

use anyhow::{Context, Result};
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::models::{FitnessProfile, QuizData};

/// Save a user's quiz answers.
///
/// A user has at most one profile: an existing row has its `quiz_data`
/// replaced, otherwise a new row is inserted.
pub async fn save_fitness_profile(
    pool: &PgPool,
    user_id: Uuid,
    quiz_data: &QuizData,
) -> Result<FitnessProfile> {
    let profile = sqlx::query_as::<_, FitnessProfile>(
        "INSERT INTO fitness_profiles (user_id, quiz_data) \
         VALUES ($1, $2) \
         ON CONFLICT (user_id) DO UPDATE SET quiz_data = EXCLUDED.quiz_data \
         RETURNING *",
    )
    .bind(user_id)
    .bind(Json(quiz_data))
    .fetch_one(pool)
    .await
    .with_context(|| format!("failed to save fitness profile for user {user_id}"))?;

    Ok(profile)
}

/// Fetch the profile belonging to a user.
pub async fn get_fitness_profile(pool: &PgPool, user_id: Uuid) -> Result<Option<FitnessProfile>> {
    let profile =
        sqlx::query_as::<_, FitnessProfile>("SELECT * FROM fitness_profiles WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(pool)
            .await
            .context("failed to fetch fitness profile")?;

    Ok(profile)
}
