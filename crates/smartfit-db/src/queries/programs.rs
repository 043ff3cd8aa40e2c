//! Database query functions for the `workout_programs` table.

use anyhow::{Context, Result};
use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use crate::models::WorkoutProgram;

/// Parameters for saving a workout program.
#[derive(Debug, Clone)]
pub struct NewWorkoutProgram<'a> {
    pub user_id: Uuid,
    pub fitness_profile_id: Option<Uuid>,
    pub title: &'a str,
    pub description: &'a str,
}

/// Save a user's workout program.
///
/// Each user keeps one program. Saving again updates the title,
/// description and profile link in place and keeps the program id, so
/// existing splits stay attached to it.
pub async fn save_workout_program<'e>(
    executor: impl PgExecutor<'e>,
    new: &NewWorkoutProgram<'_>,
) -> Result<WorkoutProgram> {
    let program = sqlx::query_as::<_, WorkoutProgram>(
        "INSERT INTO workout_programs (user_id, fitness_profile_id, title, description) \
         VALUES ($1, $2, $3, $4) \
         ON CONFLICT (user_id) DO UPDATE SET \
             fitness_profile_id = EXCLUDED.fitness_profile_id, \
             title = EXCLUDED.title, \
             description = EXCLUDED.description \
         RETURNING *",
    )
    .bind(new.user_id)
    .bind(new.fitness_profile_id)
    .bind(new.title)
    .bind(new.description)
    .fetch_one(executor)
    .await
    .with_context(|| format!("failed to save workout program for user {}", new.user_id))?;

    Ok(program)
}

/// Fetch a program by its ID.
pub async fn get_workout_program(pool: &PgPool, id: Uuid) -> Result<Option<WorkoutProgram>> {
    let program =
        sqlx::query_as::<_, WorkoutProgram>("SELECT * FROM workout_programs WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .context("failed to fetch workout program")?;

    Ok(program)
}

/// Fetch the program belonging to a user.
pub async fn get_workout_program_for_user(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Option<WorkoutProgram>> {
    let program =
        sqlx::query_as::<_, WorkoutProgram>("SELECT * FROM workout_programs WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(pool)
            .await
            .context("failed to fetch workout program for user")?;

    Ok(program)
}
