//! Database query functions for the `workout_splits` table.

use anyhow::{Context, Result};
use serde_json::Value;
use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use crate::models::WorkoutSplit;

/// Parameters for saving one day of a program.
#[derive(Debug, Clone)]
pub struct NewWorkoutSplit<'a> {
    pub program_id: Uuid,
    pub name: &'a str,
    pub day_number: i32,
    /// JSON array of exercise records.
    pub exercises: &'a Value,
    pub warm_up: Option<&'a str>,
    pub cool_down: Option<&'a str>,
    pub notes: Option<&'a str>,
}

/// Save a split, replacing any existing split with the same
/// `(program_id, day_number)`.
pub async fn save_workout_split<'e>(
    executor: impl PgExecutor<'e>,
    new: &NewWorkoutSplit<'_>,
) -> Result<WorkoutSplit> {
    let split = sqlx::query_as::<_, WorkoutSplit>(
        "INSERT INTO workout_splits \
             (program_id, name, day_number, exercises, warm_up, cool_down, notes) \
         VALUES ($1, $2, $3, $4, $5, $6, $7) \
         ON CONFLICT (program_id, day_number) DO UPDATE SET \
             name = EXCLUDED.name, \
             exercises = EXCLUDED.exercises, \
             warm_up = EXCLUDED.warm_up, \
             cool_down = EXCLUDED.cool_down, \
             notes = EXCLUDED.notes \
         RETURNING *",
    )
    .bind(new.program_id)
    .bind(new.name)
    .bind(new.day_number)
    .bind(new.exercises)
    .bind(new.warm_up)
    .bind(new.cool_down)
    .bind(new.notes)
    .fetch_one(executor)
    .await
    .with_context(|| {
        format!(
            "failed to save split for program {} day {}",
            new.program_id, new.day_number
        )
    })?;

    Ok(split)
}

/// Fetch a single split by ID.
pub async fn get_workout_split(pool: &PgPool, id: Uuid) -> Result<Option<WorkoutSplit>> {
    let split = sqlx::query_as::<_, WorkoutSplit>("SELECT * FROM workout_splits WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
        .context("failed to fetch workout split")?;

    Ok(split)
}

/// List all splits in a program, ordered by day number.
pub async fn list_splits_for_program(pool: &PgPool, program_id: Uuid) -> Result<Vec<WorkoutSplit>> {
    let splits = sqlx::query_as::<_, WorkoutSplit>(
        "SELECT * FROM workout_splits WHERE program_id = $1 ORDER BY day_number ASC",
    )
    .bind(program_id)
    .fetch_all(pool)
    .await
    .with_context(|| format!("failed to list splits for program {program_id}"))?;

    Ok(splits)
}

/// Remove every split from a program. Returns the number of rows deleted.
///
/// Run inside the transaction that re-saves a regenerated program, so days
/// absent from the new plan do not linger and a failed save keeps the old
/// ones.
pub async fn delete_splits_for_program<'e>(
    executor: impl PgExecutor<'e>,
    program_id: Uuid,
) -> Result<u64> {
    let result = sqlx::query("DELETE FROM workout_splits WHERE program_id = $1")
        .bind(program_id)
        .execute(executor)
        .await
        .with_context(|| format!("failed to delete splits for program {program_id}"))?;

    Ok(result.rows_affected())
}
